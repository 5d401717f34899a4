#![cfg_attr(not(feature = "std"), no_std, no_main)]

//! # Solareum (SRM): rebasing token engine
//!
//! ERC-20 compatible ledger with two protocol mechanisms layered on top:
//!
//! ```text
//! REBASE  : supply grows every 12 hours for 540 days (1 080 epochs),
//!           33 618 820 SRM -> exactly 100 000 000 SRM.
//!           Balances are shares of the supply, so one epoch is O(1).
//!
//! AMM FEE : 5% of every buy (tokens leaving a registered pair) and every
//!           sell (tokens entering one) is kept by the contract.
//!           Accumulated fees are pushed back into the pair on the next
//!           sell once they reach the swap threshold.
//! ```
//!
//! Owner-only switches gate trading, rebasing and the pair registry.

pub mod fees;
pub mod rebase;
pub mod registry;
pub mod shares;

pub type Balance = u128;
pub type Timestamp = u64;

pub mod constants {
    use crate::{Balance, Timestamp};

    pub const TOKEN_NAME: &str = "Solareum";
    pub const TOKEN_SYMBOL: &str = "SRM";
    pub const TOKEN_DECIMALS: u8 = 18;

    /// One whole token in base units.
    pub const TOKEN_UNIT: Balance = 1_000_000_000_000_000_000;

    // ── Supply ────────────────────────────────────────────────────────────

    pub const INITIAL_SUPPLY: Balance = 33_618_820 * TOKEN_UNIT;
    pub const MAX_SUPPLY: Balance = 100_000_000 * TOKEN_UNIT;

    // ── Rebase schedule ───────────────────────────────────────────────────

    /// 12 hours in milliseconds (block timestamps are ms).
    pub const REBASE_INTERVAL_MS: Timestamp = 12 * 60 * 60 * 1_000;
    /// 540 days of 12-hour epochs.
    pub const REBASE_EPOCHS: u32 = 1_080;
    /// Per-epoch growth, 0.1009846734%.
    pub const REBASE_RATE_NUMERATOR: Balance = 1_009_846_734;
    pub const REBASE_RATE_DENOMINATOR: Balance = 1_000_000_000_000;

    // ── Fees ──────────────────────────────────────────────────────────────

    /// 5% on buys and sells through a registered pair.
    pub const FEE_NUMERATOR: Balance = 50;
    pub const FEE_DENOMINATOR: Balance = 1_000;

    pub const BPS_DENOMINATOR: Balance = 10_000;
    /// Contract balance that triggers a swap-back: 0.05% of initial supply.
    pub const SWAP_THRESHOLD_BPS: Balance = 5;
    pub const DEFAULT_SWAP_TOKENS_AT_AMOUNT: Balance =
        INITIAL_SUPPLY * SWAP_THRESHOLD_BPS / BPS_DENOMINATOR;

    // ── ERC-20 sentinels ──────────────────────────────────────────────────

    /// Allowance that `transfer_from` never decrements.
    pub const UNLIMITED_ALLOWANCE: Balance = Balance::MAX;
    pub const ZERO_ADDRESS: [u8; 32] = [0u8; 32];
}

#[ink::contract]
mod solareum {
    use crate::constants::*;
    use crate::fees::{FeeSplit, TradeKind};
    use crate::rebase::{Catchup, RebaseState};
    use crate::registry::{FeeFlags, PairConfig};
    use crate::shares;
    use ink::env::call::{build_call, ExecutionInput, Selector};
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct Solareum {
        // ── Ledger ────────────────────────────────────────────────────────
        /// Share holdings; balances are derived from these and `total_supply`.
        shares: Mapping<AccountId, u128>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
        /// Supply as of the last applied rebase epoch.
        total_supply: Balance,

        // ── Rebase ────────────────────────────────────────────────────────
        rebase: RebaseState,

        // ── Policy ────────────────────────────────────────────────────────
        owner: AccountId,
        trading_enabled: bool,
        automated_market_maker_pairs: Mapping<AccountId, PairConfig>,
        /// Primary liquidity pool; registered when rebasing is switched on
        /// with `register_main_pair`.
        main_pair: Option<AccountId>,
        /// Fee-excluded accounts. These also bypass the trading gate.
        excluded_from_fees: Mapping<AccountId, bool>,

        // ── Swap-back ─────────────────────────────────────────────────────
        marketing_wallet: AccountId,
        dex_router: Option<AccountId>,
        swap_tokens_at_amount: Balance,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// `value` is the gross amount; any fee is reported by `FeeCollected`.
    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    /// Emitted once per catch-up, carrying the latest epoch reached.
    #[ink(event)]
    pub struct Rebase {
        #[ink(topic)]
        epoch: u32,
        total_supply: Balance,
    }

    #[ink(event)]
    pub struct FeeCollected {
        #[ink(topic)]
        from: AccountId,
        #[ink(topic)]
        to: AccountId,
        fee: Balance,
        kind: TradeKind,
    }

    /// Accumulated fees pushed into `pair`, proceeds owed to `recipient`.
    #[ink(event)]
    pub struct SwapBack {
        #[ink(topic)]
        pair: AccountId,
        amount: Balance,
        recipient: AccountId,
    }

    #[ink(event)]
    pub struct TradingEnabledUpdated {
        enabled: bool,
    }

    #[ink(event)]
    pub struct RebasingUpdated {
        enabled: bool,
        epoch: u32,
    }

    #[ink(event)]
    pub struct AutomatedMarketMakerPairSet {
        #[ink(topic)]
        pair: AccountId,
        is_pair: bool,
        fees: FeeFlags,
    }

    #[ink(event)]
    pub struct ExcludedFromFees {
        #[ink(topic)]
        account: AccountId,
        excluded: bool,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous_owner: AccountId,
        #[ink(topic)]
        new_owner: AccountId,
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Sender balance is below the transfer amount.
        InsufficientBalance,
        /// Spender allowance is below the transfer amount.
        InsufficientAllowance,
        /// Transfer recipient is the zero address.
        TransferToZeroAddress,
        /// Transfer sender is the zero address.
        TransferFromZeroAddress,
        /// Approval spender is the zero address.
        ApproveToZeroAddress,
        /// Approval owner is the zero address. Also surfaced by
        /// `transfer_from` when `from` is zero and the allowance check passes.
        ApproveFromZeroAddress,
        /// `decrease_allowance` would take the allowance below zero.
        AllowanceBelowZero,
        /// `increase_allowance` would overflow.
        AllowanceOverflow,
        /// Trading is disabled and neither endpoint is fee-excluded.
        TradingNotEnabled,
        /// Caller is not the contract owner.
        NotOwner,
        /// A configuration address is the zero address.
        InvalidAddress,
        /// The DEX router rejected the swap-back settlement.
        SwapBackFailed,
        /// An arithmetic operation overflowed.
        Overflow,
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl Solareum {
        // ---------------------------------------------------------------------
        // Constructor
        // ---------------------------------------------------------------------

        /// Deploy the token.
        ///
        /// The full `INITIAL_SUPPLY` is credited to the deployer, who becomes
        /// the owner. Owner, contract and marketing wallet start fee-excluded.
        /// Trading and rebasing start disabled.
        ///
        /// `dex_router` settles swap-backs; `None` keeps swap-back local (the
        /// fee balance is still moved into the pair).
        #[ink(constructor)]
        pub fn new(marketing_wallet: AccountId, dex_router: Option<AccountId>) -> Self {
            let caller = Self::env().caller();
            let contract = Self::env().account_id();

            let mut balances = Mapping::default();
            balances.insert(caller, &shares::TOTAL_SHARES);

            let mut excluded_from_fees = Mapping::default();
            excluded_from_fees.insert(caller, &true);
            excluded_from_fees.insert(contract, &true);
            excluded_from_fees.insert(marketing_wallet, &true);

            Self::env().emit_event(Transfer {
                from: None,
                to: Some(caller),
                value: INITIAL_SUPPLY,
            });

            Self {
                shares: balances,
                allowances: Mapping::default(),
                total_supply: INITIAL_SUPPLY,
                rebase: RebaseState::default(),
                owner: caller,
                trading_enabled: false,
                automated_market_maker_pairs: Mapping::default(),
                main_pair: None,
                excluded_from_fees,
                marketing_wallet,
                dex_router,
                swap_tokens_at_amount: DEFAULT_SWAP_TOKENS_AT_AMOUNT,
            }
        }

        // =====================================================================
        // ERC-20 VIEWS
        // =====================================================================

        #[ink(message)]
        pub fn token_name(&self) -> String {
            String::from(TOKEN_NAME)
        }

        #[ink(message)]
        pub fn token_symbol(&self) -> String {
            String::from(TOKEN_SYMBOL)
        }

        #[ink(message)]
        pub fn token_decimals(&self) -> u8 {
            TOKEN_DECIMALS
        }

        /// Supply at the current block time, including epochs that are due
        /// but not yet written to storage.
        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.current_supply()
        }

        /// Balance at the current block time (see `total_supply`).
        ///
        /// Rounded down from the holder's shares. Before the first rebase the
        /// balances sum to `total_supply` exactly; afterwards the sum may fall
        /// short by less than one base unit per holder.
        #[ink(message)]
        pub fn balance_of(&self, owner: AccountId) -> Balance {
            shares::to_balance(self.shares_of(owner), self.current_supply())
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get((owner, spender)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn shares_of(&self, owner: AccountId) -> u128 {
            self.shares.get(owner).unwrap_or(0)
        }

        #[ink(message)]
        pub fn max_supply(&self) -> Balance {
            MAX_SUPPLY
        }

        // =====================================================================
        // ERC-20 MESSAGES
        // =====================================================================

        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<(), Error> {
            let from = self.env().caller();
            self.transfer_impl(from, to, value)
        }

        /// Moves `value` from `from` to `to` on the caller's allowance.
        ///
        /// The allowance is checked before anything else, so a zero `from`
        /// reports `InsufficientAllowance` for a non-zero value and
        /// `ApproveFromZeroAddress` for a zero value.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<(), Error> {
            let spender = self.env().caller();
            let remaining = self.remaining_allowance(from, spender, value)?;
            self.transfer_impl(from, to, value)?;
            if let Some(remaining) = remaining {
                self.approve_impl(from, spender, remaining)?;
            }
            Ok(())
        }

        /// Overwrites the allowance. Independent of the caller's balance.
        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<(), Error> {
            let owner = self.env().caller();
            self.approve_impl(owner, spender, value)
        }

        #[ink(message)]
        pub fn increase_allowance(
            &mut self,
            spender: AccountId,
            delta: Balance,
        ) -> Result<(), Error> {
            let owner = self.env().caller();
            let updated = self
                .allowance(owner, spender)
                .checked_add(delta)
                .ok_or(Error::AllowanceOverflow)?;
            self.approve_impl(owner, spender, updated)
        }

        #[ink(message)]
        pub fn decrease_allowance(
            &mut self,
            spender: AccountId,
            delta: Balance,
        ) -> Result<(), Error> {
            let owner = self.env().caller();
            let updated = self
                .allowance(owner, spender)
                .checked_sub(delta)
                .ok_or(Error::AllowanceBelowZero)?;
            self.approve_impl(owner, spender, updated)
        }

        // =====================================================================
        // REBASE
        // =====================================================================

        /// Apply every due epoch. Returns how many were applied; zero while
        /// rebasing is disabled or before the next epoch is due.
        #[ink(message)]
        pub fn manual_rebase(&mut self) -> u32 {
            match self.pending_rebase() {
                Some(catchup) => {
                    self.apply_rebase(catchup);
                    catchup.epochs_applied
                }
                None => 0,
            }
        }

        /// Switch the rebase schedule on or off.
        ///
        /// Enabling starts the 12-hour cadence from the current block time.
        /// With `register_main_pair`, the configured main pair is also
        /// registered as a fee-taking AMM pair. Disabling applies due epochs
        /// first.
        #[ink(message)]
        pub fn set_rebasing(
            &mut self,
            enabled: bool,
            register_main_pair: bool,
        ) -> Result<(), Error> {
            self.only_owner()?;

            if enabled {
                if !self.rebase.enabled {
                    self.rebase.enabled = true;
                    self.rebase.last_rebase_at = self.env().block_timestamp();
                }
                if register_main_pair {
                    if let Some(pair) = self.main_pair {
                        self.register_pair(pair, true, FeeFlags::BOTH);
                    }
                }
            } else if self.rebase.enabled {
                if let Some(catchup) = self.pending_rebase() {
                    self.apply_rebase(catchup);
                }
                self.rebase.enabled = false;
            }

            self.env().emit_event(RebasingUpdated {
                enabled,
                epoch: self.rebase.epoch,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn is_rebasing(&self) -> bool {
            self.rebase.enabled
        }

        /// Epochs written to storage so far.
        #[ink(message)]
        pub fn rebase_epoch(&self) -> u32 {
            self.rebase.epoch
        }

        #[ink(message)]
        pub fn next_rebase_at(&self) -> Option<Timestamp> {
            self.rebase.next_rebase_at()
        }

        // =====================================================================
        // POLICY / REGISTRY
        // =====================================================================

        #[ink(message)]
        pub fn set_trading_enabled(&mut self, enabled: bool) -> Result<(), Error> {
            self.only_owner()?;
            self.trading_enabled = enabled;
            self.env().emit_event(TradingEnabledUpdated { enabled });
            Ok(())
        }

        #[ink(message)]
        pub fn set_automated_market_maker_pair(
            &mut self,
            pair: AccountId,
            is_pair: bool,
            fees: FeeFlags,
        ) -> Result<(), Error> {
            self.only_owner()?;
            Self::ensure_not_zero(pair)?;
            self.register_pair(pair, is_pair, fees);
            Ok(())
        }

        #[ink(message)]
        pub fn set_main_pair(&mut self, pair: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            Self::ensure_not_zero(pair)?;
            self.main_pair = Some(pair);
            Ok(())
        }

        #[ink(message)]
        pub fn exclude_from_fees(&mut self, account: AccountId, excluded: bool) -> Result<(), Error> {
            self.only_owner()?;
            self.excluded_from_fees.insert(account, &excluded);
            self.env().emit_event(ExcludedFromFees { account, excluded });
            Ok(())
        }

        #[ink(message)]
        pub fn set_marketing_wallet(&mut self, wallet: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            Self::ensure_not_zero(wallet)?;
            self.marketing_wallet = wallet;
            Ok(())
        }

        #[ink(message)]
        pub fn set_dex_router(&mut self, router: Option<AccountId>) -> Result<(), Error> {
            self.only_owner()?;
            self.dex_router = router;
            Ok(())
        }

        #[ink(message)]
        pub fn set_swap_tokens_at_amount(&mut self, amount: Balance) -> Result<(), Error> {
            self.only_owner()?;
            self.swap_tokens_at_amount = amount;
            Ok(())
        }

        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            Self::ensure_not_zero(new_owner)?;
            let previous_owner = self.owner;
            self.owner = new_owner;
            self.env().emit_event(OwnershipTransferred {
                previous_owner,
                new_owner,
            });
            Ok(())
        }

        // ── Policy views ──────────────────────────────────────────────────

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner
        }

        #[ink(message)]
        pub fn is_trading_enabled(&self) -> bool {
            self.trading_enabled
        }

        #[ink(message)]
        pub fn pair_config(&self, pair: AccountId) -> Option<PairConfig> {
            self.automated_market_maker_pairs.get(pair)
        }

        #[ink(message)]
        pub fn is_automated_market_maker_pair(&self, pair: AccountId) -> bool {
            self.pair_config(pair).map_or(false, |config| config.is_pair)
        }

        #[ink(message)]
        pub fn main_pair(&self) -> Option<AccountId> {
            self.main_pair
        }

        #[ink(message)]
        pub fn is_excluded_from_fees(&self, account: AccountId) -> bool {
            self.excluded_from_fees.get(account).unwrap_or(false)
        }

        #[ink(message)]
        pub fn marketing_wallet(&self) -> AccountId {
            self.marketing_wallet
        }

        #[ink(message)]
        pub fn dex_router(&self) -> Option<AccountId> {
            self.dex_router
        }

        #[ink(message)]
        pub fn swap_tokens_at_amount(&self) -> Balance {
            self.swap_tokens_at_amount
        }

        // =====================================================================
        // INTERNAL: LEDGER
        // =====================================================================

        /// Core transfer path.
        ///
        /// Every check runs against the post-rebase supply before any storage
        /// is written; only then are due epochs, swap-back and the share
        /// moves committed.
        fn transfer_impl(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<(), Error> {
            let zero = AccountId::from(ZERO_ADDRESS);
            if from == zero {
                return Err(Error::TransferFromZeroAddress);
            }
            if to == zero {
                return Err(Error::TransferToZeroAddress);
            }

            let fee_exempt = self.is_excluded_from_fees(from) || self.is_excluded_from_fees(to);
            if !self.trading_enabled && !fee_exempt {
                return Err(Error::TradingNotEnabled);
            }

            let pending = self.pending_rebase();
            let supply = pending.map_or(self.total_supply, |catchup| catchup.total_supply);
            let from_shares = self.shares_of(from);
            if value > shares::to_balance(from_shares, supply) {
                return Err(Error::InsufficientBalance);
            }

            let kind = if fee_exempt {
                TradeKind::PeerToPeer
            } else {
                TradeKind::classify(
                    self.automated_market_maker_pairs.get(from),
                    self.automated_market_maker_pairs.get(to),
                )
            };
            let split = FeeSplit::for_trade(kind, value);
            // Recipient and fee are each rounded up so both read back exactly.
            // A sender emptying their balance cannot cover both round-ups;
            // the shortfall comes out of the fee credit.
            let net_shares = shares::to_shares(split.net, supply).ok_or(Error::Overflow)?;
            let fee_shares = shares::to_shares(split.fee, supply).ok_or(Error::Overflow)?;
            let debited_shares = net_shares
                .checked_add(fee_shares)
                .ok_or(Error::Overflow)?
                .min(from_shares);
            let fee_shares = debited_shares
                .checked_sub(net_shares)
                .ok_or(Error::InsufficientBalance)?;

            // ── Effects ───────────────────────────────────────────────────
            if let Some(catchup) = pending {
                self.apply_rebase(catchup);
            }
            if kind == TradeKind::Sell {
                self.swap_back(to)?;
            }

            self.debit_shares(from, debited_shares)?;
            self.credit_shares(to, net_shares)?;
            if fee_shares > 0 {
                self.credit_shares(self.env().account_id(), fee_shares)?;
            }

            self.env().emit_event(Transfer {
                from: Some(from),
                to: Some(to),
                value,
            });
            if split.fee > 0 {
                self.env().emit_event(FeeCollected {
                    from,
                    to,
                    fee: split.fee,
                    kind,
                });
            }
            Ok(())
        }

        /// Allowance left after spending `value`; `None` when unlimited.
        fn remaining_allowance(
            &self,
            owner: AccountId,
            spender: AccountId,
            value: Balance,
        ) -> Result<Option<Balance>, Error> {
            let current = self.allowance(owner, spender);
            if current == UNLIMITED_ALLOWANCE {
                return Ok(None);
            }
            if current < value {
                return Err(Error::InsufficientAllowance);
            }
            if owner == AccountId::from(ZERO_ADDRESS) {
                return Err(Error::ApproveFromZeroAddress);
            }
            Ok(Some(current - value))
        }

        fn approve_impl(
            &mut self,
            owner: AccountId,
            spender: AccountId,
            value: Balance,
        ) -> Result<(), Error> {
            let zero = AccountId::from(ZERO_ADDRESS);
            if owner == zero {
                return Err(Error::ApproveFromZeroAddress);
            }
            if spender == zero {
                return Err(Error::ApproveToZeroAddress);
            }
            self.allowances.insert((owner, spender), &value);
            self.env().emit_event(Approval {
                owner,
                spender,
                value,
            });
            Ok(())
        }

        fn debit_shares(&mut self, account: AccountId, amount: u128) -> Result<(), Error> {
            let held = self.shares_of(account);
            let updated = held.checked_sub(amount).ok_or(Error::InsufficientBalance)?;
            self.shares.insert(account, &updated);
            Ok(())
        }

        fn credit_shares(&mut self, account: AccountId, amount: u128) -> Result<(), Error> {
            let held = self.shares_of(account);
            let updated = held.checked_add(amount).ok_or(Error::Overflow)?;
            self.shares.insert(account, &updated);
            Ok(())
        }

        // =====================================================================
        // INTERNAL: REBASE
        // =====================================================================

        fn pending_rebase(&self) -> Option<Catchup> {
            self.rebase
                .catch_up(self.total_supply, self.env().block_timestamp())
        }

        fn current_supply(&self) -> Balance {
            self.pending_rebase()
                .map_or(self.total_supply, |catchup| catchup.total_supply)
        }

        /// Supply and rebase state move together in one write.
        fn apply_rebase(&mut self, catchup: Catchup) {
            self.total_supply = catchup.total_supply;
            self.rebase.epoch = catchup.epoch;
            self.rebase.last_rebase_at = catchup.last_rebase_at;
            self.env().emit_event(Rebase {
                epoch: catchup.epoch,
                total_supply: catchup.total_supply,
            });
        }

        // =====================================================================
        // INTERNAL: FEES / SWAP-BACK
        // =====================================================================

        /// Push the contract's accumulated fees into `pair` once they reach
        /// `swap_tokens_at_amount`.
        ///
        /// State is updated before the router call (checks-effects-interactions).
        fn swap_back(&mut self, pair: AccountId) -> Result<(), Error> {
            let contract = self.env().account_id();
            let held = self.shares_of(contract);
            let amount = shares::to_balance(held, self.total_supply);
            if amount == 0 || amount < self.swap_tokens_at_amount {
                return Ok(());
            }

            self.shares.insert(contract, &0);
            self.credit_shares(pair, held)?;

            self.env().emit_event(Transfer {
                from: Some(contract),
                to: Some(pair),
                value: amount,
            });
            self.env().emit_event(SwapBack {
                pair,
                amount,
                recipient: self.marketing_wallet,
            });

            self.settle_swap_back(pair, amount)
        }

        /// Ask the DEX router to pay out the tokens just moved into `pair`
        /// to the marketing wallet.
        ///
        /// Expects the router to expose
        /// `settle_swap_back(pair: AccountId, amount: Balance, recipient: AccountId)`.
        /// With no router configured the swap-back stays local. The off-chain
        /// test engine cannot dispatch this call, so only the local path and
        /// `settlement_outcome` are covered by unit tests.
        fn settle_swap_back(&self, pair: AccountId, amount: Balance) -> Result<(), Error> {
            let router = match self.dex_router {
                None => return Ok(()),
                Some(r) => r,
            };

            let result = build_call::<ink::env::DefaultEnvironment>()
                .call(router)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!(
                        "settle_swap_back"
                    )))
                    .push_arg(&pair)
                    .push_arg(&amount)
                    .push_arg(&self.marketing_wallet),
                )
                .returns::<()>()
                .try_invoke();

            Self::settlement_outcome(result)
        }

        /// Maps the router call result. Both a failed dispatch and a message
        /// the router could not decode count as a failed swap-back.
        fn settlement_outcome(
            result: Result<ink::MessageResult<()>, ink::env::Error>,
        ) -> Result<(), Error> {
            match result {
                Ok(Ok(())) => Ok(()),
                _ => Err(Error::SwapBackFailed),
            }
        }

        // =====================================================================
        // INTERNAL: POLICY
        // =====================================================================

        fn register_pair(&mut self, pair: AccountId, is_pair: bool, fees: FeeFlags) {
            self.automated_market_maker_pairs
                .insert(pair, &PairConfig::new(is_pair, fees));
            self.env().emit_event(AutomatedMarketMakerPairSet {
                pair,
                is_pair,
                fees,
            });
        }

        fn only_owner(&self) -> Result<(), Error> {
            if self.env().caller() != self.owner {
                return Err(Error::NotOwner);
            }
            Ok(())
        }

        fn ensure_not_zero(account: AccountId) -> Result<(), Error> {
            if account == AccountId::from(ZERO_ADDRESS) {
                return Err(Error::InvalidAddress);
            }
            Ok(())
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
