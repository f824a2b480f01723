//! Tests for the cancellation refund calculation.

use super::utils::{sample_policy, DAY, HOUR, JAN_1_2022};
use crate::errors::ContractError;
use crate::refund::{calculate_refund_total, days_until, refund_rate};
use crate::types::CancellationPolicy;

const NOW: u64 = JAN_1_2022;

fn refund(value: i128, start: u64) -> i128 {
    calculate_refund_total(value, &sample_policy(), start, NOW).unwrap()
}

#[test]
fn test_no_refund_once_stay_started() {
    assert_eq!(refund(100, NOW), 0);
    assert_eq!(refund(100, NOW - HOUR), 0);
    assert_eq!(refund(100, 0), 0);
}

#[test]
fn test_refund_buckets() {
    // More than a month out: full refund
    assert_eq!(refund(100, NOW + 31 * DAY), 100);
    // A week and an hour out: last month rate
    assert_eq!(refund(100, NOW + 7 * DAY + HOUR), 50);
    // Three days out: last week rate
    assert_eq!(refund(100, NOW + 3 * DAY + HOUR), 25);
    // A day out: last day rate
    assert_eq!(refund(100, NOW + DAY + HOUR), 1);
}

#[test]
fn test_exact_boundaries_use_coarser_bucket() {
    assert_eq!(refund(100, NOW + 30 * DAY), 100);
    assert_eq!(refund(100, NOW + 30 * DAY - 1), 50);
    assert_eq!(refund(100, NOW + 7 * DAY), 50);
    assert_eq!(refund(100, NOW + 7 * DAY - 1), 25);
    assert_eq!(refund(100, NOW + 2 * DAY), 25);
    assert_eq!(refund(100, NOW + 2 * DAY - 1), 1);
}

#[test]
fn test_less_than_a_day_uses_last_day_rate() {
    assert_eq!(refund(100, NOW + 1), 1);
    assert_eq!(refund(100, NOW + HOUR), 1);
}

#[test]
fn test_refund_never_decreases_further_out() {
    let mut previous = 0;
    let mut offset = 0;
    while offset <= 45 * DAY {
        let current = refund(1_000_0000000, NOW + offset);
        assert!(current >= previous, "refund dropped at offset {}", offset);
        previous = current;
        offset += 6 * HOUR;
    }
}

#[test]
fn test_refund_truncates_fractional_units() {
    // 0.25 of 3 units
    assert_eq!(refund(3, NOW + 3 * DAY), 0);
    // 0.5 of 7 units
    assert_eq!(refund(7, NOW + 10 * DAY), 3);
}

#[test]
fn test_refund_with_token_precision() {
    assert_eq!(refund(250_0000000, NOW + 10 * DAY), 125_0000000);
}

#[test]
fn test_zero_policy_refunds_nothing() {
    let policy = CancellationPolicy {
        default: 0,
        last_month: 0,
        last_week: 0,
        last_day: 0,
    };
    assert_eq!(calculate_refund_total(100, &policy, NOW + 60 * DAY, NOW), Ok(0));
}

#[test]
fn test_refund_overflow() {
    let result = calculate_refund_total(i128::MAX, &sample_policy(), NOW + 60 * DAY, NOW);
    assert_eq!(result, Err(ContractError::Overflow));
}

#[test]
fn test_days_until_truncates() {
    assert_eq!(days_until(NOW, NOW), None);
    assert_eq!(days_until(NOW + DAY - 1, NOW), Some(0));
    assert_eq!(days_until(NOW + 7 * DAY + 23 * HOUR, NOW), Some(7));
}

#[test]
fn test_refund_rate_selection() {
    let policy = sample_policy();
    assert_eq!(refund_rate(&policy, 0), 100);
    assert_eq!(refund_rate(&policy, 1), 100);
    assert_eq!(refund_rate(&policy, 6), 2_500);
    assert_eq!(refund_rate(&policy, 7), 5_000);
    assert_eq!(refund_rate(&policy, 29), 5_000);
    assert_eq!(refund_rate(&policy, 30), 10_000);
}
