//! Contract error types for the booking ledger.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Admin address not set - call initialize first
    AdminNotSet = 2,
    /// Cancellation policy not set - call initialize first
    PolicyNotSet = 3,
    /// A policy multiplier is above 10_000 basis points
    InvalidPolicy = 4,
    /// Night price must not be negative
    InvalidPrice = 5,
    /// Year or day of year is out of range
    InvalidNight = 6,
    /// Request did not contain any nights
    NoNights = 7,
    /// Night is already booked by this guest
    NightAlreadyBooked = 8,
    /// Night is not booked by this guest
    NightNotBooked = 9,
    /// Night has already started
    NightStarted = 10,
    /// Arithmetic overflow occurred
    Overflow = 11,
}
