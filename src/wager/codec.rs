//! Wager token codec
//!
//! A token is `<bettor><marker><stake>`: the bettor name (`[A-Za-z0-9]+`),
//! `^` for Over or `_` for Under, then the stake (`[1-9][0-9]*`). Stored
//! entries carry wagers in this form, so the grammar must not change.

use super::{Side, Wager, WagerError};
use std::fmt;
use std::str::FromStr;

/// Encode a wager as its token string
pub fn encode(wager: &Wager) -> String {
    format!("{}{}{}", wager.bettor, wager.side.marker(), wager.stake)
}

/// Decode a token into a wager
///
/// The match is anchored at the start of the token. Anything after the
/// stake digits is ignored.
pub fn decode(token: &str) -> Result<Wager, WagerError> {
    let malformed = || WagerError::Format(token.to_string());

    let name_len = token
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    if name_len == 0 {
        return Err(malformed());
    }
    let (bettor, rest) = token.split_at(name_len);

    let side = rest
        .chars()
        .next()
        .and_then(Side::from_marker)
        .ok_or_else(malformed)?;
    let digits_start = &rest[1..];

    let digit_len = digits_start
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let digits = &digits_start[..digit_len];
    if digits.is_empty() || digits.starts_with('0') {
        return Err(malformed());
    }
    let stake: u64 = digits.parse().map_err(|_| malformed())?;

    Ok(Wager {
        bettor: bettor.to_string(),
        side,
        stake,
    })
}

/// Decode every token in order, failing on the first malformed one
pub fn decode_all<'a, I>(tokens: I) -> Result<Vec<Wager>, WagerError>
where
    I: IntoIterator<Item = &'a String>,
{
    tokens.into_iter().map(|token| decode(token)).collect()
}

impl fmt::Display for Wager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for Wager {
    type Err = WagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
