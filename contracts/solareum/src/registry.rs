//! Automated market maker pair registry entries.

/// Which trade directions through a pair are taxed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct FeeFlags {
    /// Tokens leaving the pair (a buy).
    pub on_buy: bool,
    /// Tokens entering the pair (a sell).
    pub on_sell: bool,
}

impl FeeFlags {
    pub const BOTH: FeeFlags = FeeFlags { on_buy: true, on_sell: true };
    pub const NONE: FeeFlags = FeeFlags { on_buy: false, on_sell: false };
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct PairConfig {
    pub is_pair: bool,
    pub fees: FeeFlags,
}

impl PairConfig {
    pub fn new(is_pair: bool, fees: FeeFlags) -> Self {
        Self { is_pair, fees }
    }

    pub fn takes_fee_on_buy(&self) -> bool {
        self.is_pair && self.fees.on_buy
    }

    pub fn takes_fee_on_sell(&self) -> bool {
        self.is_pair && self.fees.on_sell
    }
}
