//! Shared types for the Solarian Discord bot
//!
//! Inventory records as served by the Solarians API, the validation patterns
//! applied to user-supplied identifiers, and the platform-neutral reply model
//! the bot renders into Discord messages.

pub mod card;
pub mod errors;
pub mod giphy;
pub mod mint;
pub mod patterns;
pub mod reply;

pub use card::{solarian_card, FieldSource, CARD_LAYOUT};
pub use errors::{AttributeList, MintError};
pub use giphy::GiphyRandomResponse;
pub use mint::{find_mint, Attribute, Mint};
pub use patterns::MintPatterns;
pub use reply::{Embed, EmbedField, Reply};
