//! Type definitions for the booking ledger.

use soroban_sdk::{contractevent, contracttype, Address};

/// Basis points representing a multiplier of 1.0
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Policy,
    GovernanceTokens,
    Nights(Address, u32),
    PendingRefund(Address),
}

/// Refund multipliers in basis points, keyed by how close to the stay
/// start a cancellation happens.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CancellationPolicy {
    pub default: u32,     // 30 days or more before the stay
    pub last_month: u32,  // 7 to 29 days before
    pub last_week: u32,   // 2 to 6 days before
    pub last_day: u32,    // under 2 days before
}

impl CancellationPolicy {
    /// True when every multiplier lies within `0..=10_000`.
    pub fn is_valid(&self) -> bool {
        let max = BPS_DENOMINATOR as u32;
        self.default <= max
            && self.last_month <= max
            && self.last_week <= max
            && self.last_day <= max
    }
}

#[contracttype]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum NightStatus {
    Pending = 0,
    Confirmed = 1,
}

/// A night as the application sees it: `[year, dayOfYear]`
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NightKey {
    pub year: u32,
    pub day: u32,
}

/// On-chain record of a booked night
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookedNight {
    pub status: NightStatus,
    pub year: u32,
    pub day_of_year: u32,
    pub price: i128,     // amount paid for this night
    pub timestamp: u64,  // ledger time of booking
}

impl BookedNight {
    pub fn is_night(&self, night: &NightKey) -> bool {
        self.year == night.year && self.day_of_year == night.day
    }
}

/// Token contracts whose balances make up a member's voting power.
/// Unset tokens count as a zero balance.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GovernanceTokens {
    pub tdf: Option<Address>,
    pub presence: Option<Address>,
    pub sweat: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VotingWeight {
    pub tdf: i128,
    pub presence: i128,
    pub sweat: i128,
    pub sweat_weighted: i128,
    pub total: i128,
}

#[contractevent]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyUpdated {
    pub policy: CancellationPolicy,
}

#[contractevent]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokensUpdated {
    pub tokens: GovernanceTokens,
}

#[contractevent]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NightsBooked {
    #[topic]
    pub guest: Address,
    pub count: u32,
}

#[contractevent]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NightsConfirmed {
    #[topic]
    pub guest: Address,
    pub count: u32,
}

#[contractevent]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NightsCancelled {
    #[topic]
    pub guest: Address,
    pub refund: i128,
}

#[contractevent]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefundClaimed {
    #[topic]
    pub guest: Address,
    pub amount: i128,
}
