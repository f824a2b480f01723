//! Cancellation refund calculation.

use crate::errors::ContractError;
use crate::types::{CancellationPolicy, BPS_DENOMINATOR};

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Whole days from `now` until `start`, or `None` once the stay has begun.
pub fn days_until(start: u64, now: u64) -> Option<u64> {
    if start <= now {
        return None;
    }
    Some((start - now) / SECONDS_PER_DAY)
}

/// Picks the policy multiplier for a cancellation `days` before the stay.
/// Exactly 7 and 30 days out fall into the coarser bucket.
pub fn refund_rate(policy: &CancellationPolicy, days: u64) -> u32 {
    if days <= 1 {
        policy.last_day
    } else if days < 7 {
        policy.last_week
    } else if days < 30 {
        policy.last_month
    } else {
        policy.default
    }
}

/// Refund owed on `initial_value` when cancelling a stay starting at `start`.
/// Past and ongoing stays are not refunded.
pub fn calculate_refund_total(
    initial_value: i128,
    policy: &CancellationPolicy,
    start: u64,
    now: u64,
) -> Result<i128, ContractError> {
    let days = match days_until(start, now) {
        Some(days) => days,
        None => return Ok(0),
    };

    let rate = refund_rate(policy, days) as i128;
    let scaled = initial_value
        .checked_mul(rate)
        .ok_or(ContractError::Overflow)?;

    Ok(scaled / BPS_DENOMINATOR)
}
