//! Validation of user-supplied mint identifiers

use regex::Regex;

/// Mint numbers run from 1 to 10000 with no leading zeros.
const MINT_NUMBER_PATTERN: &str = r"^([1-9]|[1-9][0-9]|[1-9][0-9]{2}|[1-9][0-9]{3}|10000)$";

/// Mint hashes are 44 ASCII word characters.
const MINT_HASH_PATTERN: &str = r"^[0-9A-Za-z_]{44}$";

/// Compiled identifier patterns. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct MintPatterns {
    number: Regex,
    hash: Regex,
}

impl MintPatterns {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            number: Regex::new(MINT_NUMBER_PATTERN)?,
            hash: Regex::new(MINT_HASH_PATTERN)?,
        })
    }

    pub fn is_mint_number(&self, input: &str) -> bool {
        self.number.is_match(input)
    }

    pub fn is_mint_hash(&self, input: &str) -> bool {
        self.hash.is_match(input)
    }

    /// True if `input` is either a mint number or a mint hash.
    pub fn is_valid(&self, input: &str) -> bool {
        self.is_mint_number(input) || self.is_mint_hash(input)
    }
}
