//! Errors raised while turning inventory records into replies.

use std::fmt;

use thiserror::Error;

/// Which attribute list of a [`Mint`](crate::Mint) a field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeList {
    Parts,
    TextAttributes,
}

impl fmt::Display for AttributeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeList::Parts => f.write_str("parts"),
            AttributeList::TextAttributes => f.write_str("textAttributes"),
        }
    }
}

/// Upstream inventory data did not have the expected shape.
#[derive(Debug, Error, PartialEq)]
pub enum MintError {
    #[error("malformed upstream record {mint}: {field} needs {list}[{index}] but only {len} present")]
    MissingAttribute {
        mint: String,
        field: &'static str,
        list: AttributeList,
        index: usize,
        len: usize,
    },
}
