//! Trade classification and the 5% AMM fee.

use crate::constants::{FEE_DENOMINATOR, FEE_NUMERATOR};
use crate::registry::PairConfig;
use crate::Balance;

/// How a transfer relates to the registered market maker pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum TradeKind {
    /// Tokens leave a fee-taking pair.
    Buy,
    /// Tokens enter a fee-taking pair.
    Sell,
    /// Anything else, including trades involving fee-excluded accounts.
    PeerToPeer,
}

impl TradeKind {
    /// Classifies a transfer from the pair configs of both endpoints.
    ///
    /// A buy wins when both endpoints are fee-taking pairs.
    pub fn classify(from: Option<PairConfig>, to: Option<PairConfig>) -> Self {
        if from.map_or(false, |p| p.takes_fee_on_buy()) {
            TradeKind::Buy
        } else if to.map_or(false, |p| p.takes_fee_on_sell()) {
            TradeKind::Sell
        } else {
            TradeKind::PeerToPeer
        }
    }

    pub fn is_taxed(&self) -> bool {
        !matches!(self, TradeKind::PeerToPeer)
    }
}

/// Gross amount split into what the recipient receives and what the
/// contract keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: Balance,
    pub net: Balance,
}

impl FeeSplit {
    pub fn untaxed(amount: Balance) -> Self {
        Self { fee: 0, net: amount }
    }

    /// `fee = floor(amount × 50 / 1000)`, computed without overflow.
    pub fn taxed(amount: Balance) -> Self {
        let fee = (amount / FEE_DENOMINATOR) * FEE_NUMERATOR
            + (amount % FEE_DENOMINATOR) * FEE_NUMERATOR / FEE_DENOMINATOR;
        Self { fee, net: amount - fee }
    }

    pub fn for_trade(kind: TradeKind, amount: Balance) -> Self {
        if kind.is_taxed() {
            Self::taxed(amount)
        } else {
            Self::untaxed(amount)
        }
    }
}
