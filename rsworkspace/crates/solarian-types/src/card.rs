//! Layout of the Solarian info card

use crate::errors::{AttributeList, MintError};
use crate::mint::{Attribute, Mint};
use crate::reply::{Embed, EmbedField};

/// Where a card field reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSource {
    pub label: &'static str,
    pub list: AttributeList,
    pub index: usize,
    /// Append `" | <rarity>%"` to the variation
    pub rarity: bool,
}

const fn text(label: &'static str, index: usize, rarity: bool) -> FieldSource {
    FieldSource {
        label,
        list: AttributeList::TextAttributes,
        index,
        rarity,
    }
}

const fn part(label: &'static str, index: usize) -> FieldSource {
    FieldSource {
        label,
        list: AttributeList::Parts,
        index,
        rarity: true,
    }
}

/// Card fields in display order. `textAttributes[0]` is the title and
/// `parts[1]` (the body) is not shown.
pub const CARD_LAYOUT: [FieldSource; 12] = [
    text("NAME", 1, false),
    text("TITLE", 2, true),
    text("LEVEL", 3, true),
    text("LUCK", 4, true),
    part("SCENE", 0),
    part("LEGS", 2),
    part("HANDS", 3),
    part("TORSO", 4),
    part("ANTENNA", 5),
    part("HEAD", 6),
    part("EYES", 7),
    part("MOUTH", 8),
];

fn lookup<'a>(
    mint: &'a Mint,
    field: &'static str,
    list: AttributeList,
    index: usize,
) -> Result<&'a Attribute, MintError> {
    let attrs = match list {
        AttributeList::Parts => &mint.parts,
        AttributeList::TextAttributes => &mint.text_attributes,
    };
    attrs.get(index).ok_or_else(|| MintError::MissingAttribute {
        mint: mint.mint.clone(),
        field,
        list,
        index,
        len: attrs.len(),
    })
}

/// Build the info card for `mint`, with `image_url` pointing at its render.
pub fn solarian_card(mint: &Mint, image_url: impl Into<String>) -> Result<Embed, MintError> {
    let title = lookup(mint, "title", AttributeList::TextAttributes, 0)?;

    let fields = CARD_LAYOUT
        .iter()
        .map(|src| {
            let attr = lookup(mint, src.label, src.list, src.index)?;
            let value = if src.rarity {
                attr.with_rarity()
            } else {
                attr.variation.clone()
            };
            Ok(EmbedField::inline(src.label, value))
        })
        .collect::<Result<Vec<_>, MintError>>()?;

    Ok(Embed {
        title: format!("Solarian {}", title.variation),
        image_url: Some(image_url.into()),
        fields,
    })
}
