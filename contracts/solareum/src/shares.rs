//! Share accounting behind every balance.
//!
//! Holders own a fixed pool of `TOTAL_SHARES`. A balance is the holder's
//! slice of the current total supply:
//!
//! ```text
//! balance = floor(shares × total_supply / TOTAL_SHARES)
//! ```
//!
//! A rebase only rewrites `total_supply`; no per-holder storage is touched.

use primitive_types::U256;

use crate::constants::INITIAL_SUPPLY;
use crate::Balance;

/// Fixed share pool. Largest `u128` that divides evenly by the initial
/// supply, so every pre-rebase balance maps to a whole number of shares.
pub const TOTAL_SHARES: u128 = u128::MAX - (u128::MAX % INITIAL_SUPPLY);

/// Shares held by one token at genesis.
pub const SHARES_PER_TOKEN_AT_GENESIS: u128 = TOTAL_SHARES / INITIAL_SUPPLY;

/// Balance represented by `shares` at the given supply (rounded down).
pub fn to_balance(shares: u128, total_supply: Balance) -> Balance {
    let value = U256::from(shares) * U256::from(total_supply) / U256::from(TOTAL_SHARES);
    // shares <= TOTAL_SHARES, so value <= total_supply
    value.low_u128()
}

/// Shares needed to cover `amount` at the given supply (rounded up).
///
/// Returns `None` when the supply is zero or the amount exceeds the supply.
pub fn to_shares(amount: Balance, total_supply: Balance) -> Option<u128> {
    if total_supply == 0 || amount > total_supply {
        return None;
    }
    let supply = U256::from(total_supply);
    let numerator = U256::from(amount) * U256::from(TOTAL_SHARES);
    let shares = (numerator + supply - U256::one()) / supply;
    Some(shares.low_u128())
}
