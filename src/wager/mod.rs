//! Wager module
//!
//! Wager model and the compact token format entries store wagers in

mod codec;
mod types;

pub use codec::{decode, decode_all, encode};
pub use types::{is_valid_bettor, Side, Wager, WagerError};

/// Encode a wager as a token
pub fn encode_wager(wager: &Wager) -> String {
    encode(wager)
}

/// Decode a wager token
pub fn decode_wager(token: &str) -> Result<Wager, WagerError> {
    decode(token)
}
