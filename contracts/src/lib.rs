#![no_std]
//! # Booking Ledger
//!
//! Soroban contract recording booked nights for a co-living community,
//! with cancellation refunds and DAO voting power.
//!
//! ## Key Features
//! - Per-guest ledger of booked nights, keyed by year and day of year
//! - Cancellation refunds from an admin-managed policy
//! - Reconciliation of application bookings against the ledger
//! - Voting weight from TDF, presence and sweat token balances

pub mod calendar;
mod contract;
mod errors;
pub mod reconcile;
pub mod refund;
mod types;
pub mod voting;

#[cfg(test)]
mod tests;

pub use contract::BookingLedgerContract;
pub use errors::ContractError;
pub use types::{
    BookedNight, CancellationPolicy, DataKey, GovernanceTokens, NightKey, NightStatus, VotingWeight,
};
