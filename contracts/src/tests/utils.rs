//! Shared fixtures for contract tests.

use crate::contract::{BookingLedgerContract, BookingLedgerContractClient};
use crate::types::{CancellationPolicy, NightKey};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env, Vec,
};

/// 2022-01-01 00:00:00 UTC
pub const JAN_1_2022: u64 = 1_640_995_200;
pub const DAY: u64 = 86_400;
pub const HOUR: u64 = 3_600;

/// default 1.0, last month 0.5, last week 0.25, last day 0.01
pub fn sample_policy() -> CancellationPolicy {
    CancellationPolicy {
        default: 10_000,
        last_month: 5_000,
        last_week: 2_500,
        last_day: 100,
    }
}

pub fn night(year: u32, day: u32) -> NightKey {
    NightKey { year, day }
}

pub fn nights(env: &Env, keys: &[(u32, u32)]) -> Vec<NightKey> {
    let mut out = Vec::new(env);
    for (year, day) in keys {
        out.push_back(night(*year, *day));
    }
    out
}

pub struct TestSetup {
    pub env: Env,
    pub client: BookingLedgerContractClient<'static>,
    pub admin: Address,
    pub guest: Address,
}

impl TestSetup {
    /// Initialized contract with the sample policy, ledger time at 2022-01-01
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(JAN_1_2022);

        let contract_id = env.register(BookingLedgerContract, ());
        let client = BookingLedgerContractClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let guest = Address::generate(&env);

        client.initialize(&admin, &sample_policy());

        Self {
            env,
            client,
            admin,
            guest,
        }
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn nights(&self, keys: &[(u32, u32)]) -> Vec<NightKey> {
        nights(&self.env, keys)
    }
}
