//! Supply rebase schedule.
//!
//! Supply grows once per `REBASE_INTERVAL_MS` by a fixed rate until
//! `REBASE_EPOCHS` epochs have run, at which point it sits exactly at
//! `MAX_SUPPLY`:
//!
//! ```text
//! epoch n < 1080 : supply(n) = supply(n-1) + floor(supply(n-1) × 1 009 846 734 / 10^12)
//! epoch 1080     : supply    = MAX_SUPPLY
//! ```
//!
//! The rate is rounded down from the exact 1080th root of
//! `MAX_SUPPLY / INITIAL_SUPPLY`, so every intermediate supply stays below
//! the ceiling and the last epoch closes the remaining gap.

use crate::constants::*;
use crate::{Balance, Timestamp};

/// Rebase bookkeeping kept in contract storage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct RebaseState {
    /// Whether the schedule is running.
    pub enabled: bool,
    /// Timestamp (ms) the last applied epoch is accounted up to.
    pub last_rebase_at: Timestamp,
    /// Epochs applied so far.
    pub epoch: u32,
}

/// Result of bringing the supply up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catchup {
    pub epochs_applied: u32,
    pub epoch: u32,
    pub last_rebase_at: Timestamp,
    pub total_supply: Balance,
}

impl RebaseState {
    pub fn is_complete(&self) -> bool {
        self.epoch >= REBASE_EPOCHS
    }

    /// Whole epochs elapsed at `now` that have not been applied yet.
    pub fn due_epochs(&self, now: Timestamp) -> u32 {
        if !self.enabled || self.is_complete() {
            return 0;
        }
        let elapsed = now.saturating_sub(self.last_rebase_at) / REBASE_INTERVAL_MS;
        let remaining = REBASE_EPOCHS - self.epoch;
        u32::try_from(elapsed).unwrap_or(u32::MAX).min(remaining)
    }

    /// When the next epoch becomes due, if the schedule still has any.
    pub fn next_rebase_at(&self) -> Option<Timestamp> {
        if !self.enabled || self.is_complete() {
            return None;
        }
        self.last_rebase_at.checked_add(REBASE_INTERVAL_MS)
    }

    /// Computes the state after applying every due epoch, without mutating.
    ///
    /// Returns `None` when nothing is due (disabled, finished, or less than
    /// one interval elapsed).
    pub fn catch_up(&self, total_supply: Balance, now: Timestamp) -> Option<Catchup> {
        let due = self.due_epochs(now);
        if due == 0 {
            return None;
        }
        let mut supply = total_supply;
        let mut epoch = self.epoch;
        for _ in 0..due {
            epoch += 1;
            supply = supply_after_epoch(supply, epoch);
        }
        Some(Catchup {
            epochs_applied: due,
            epoch,
            last_rebase_at: self
                .last_rebase_at
                .saturating_add(u64::from(due) * REBASE_INTERVAL_MS),
            total_supply: supply,
        })
    }
}

/// Supply once `epoch` (1-based) has been applied on top of `supply`.
pub fn supply_after_epoch(supply: Balance, epoch: u32) -> Balance {
    if epoch >= REBASE_EPOCHS {
        return MAX_SUPPLY;
    }
    let growth = supply.saturating_mul(REBASE_RATE_NUMERATOR) / REBASE_RATE_DENOMINATOR;
    supply.saturating_add(growth).min(MAX_SUPPLY)
}
