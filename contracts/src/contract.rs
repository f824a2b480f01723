//! Core contract implementation for the booking ledger.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

use crate::calendar::night_start;
use crate::errors::ContractError;
use crate::reconcile::nights_match_ledger;
use crate::refund::calculate_refund_total;
use crate::types::{
    BookedNight, CancellationPolicy, DataKey, GovernanceTokens, NightKey, NightStatus, NightsBooked,
    NightsCancelled, NightsConfirmed, PolicyUpdated, RefundClaimed, TokensUpdated, VotingWeight,
};
use crate::voting::compute_voting_weight;

#[contract]
pub struct BookingLedgerContract;

#[contractimpl]
impl BookingLedgerContract {
    /// Initializes the contract with the admin and cancellation policy (one-time only)
    pub fn initialize(env: Env, admin: Address, policy: CancellationPolicy) -> Result<(), ContractError> {
        admin.require_auth();

        if env.storage().persistent().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }

        if !policy.is_valid() {
            return Err(ContractError::InvalidPolicy);
        }

        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::Policy, &policy);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Admin)
    }

    /// Replaces the cancellation policy (admin only)
    pub fn set_cancellation_policy(env: Env, policy: CancellationPolicy) -> Result<(), ContractError> {
        let admin = Self::_admin(&env)?;
        admin.require_auth();

        if !policy.is_valid() {
            return Err(ContractError::InvalidPolicy);
        }

        env.storage().persistent().set(&DataKey::Policy, &policy);
        PolicyUpdated { policy }.publish(&env);

        Ok(())
    }

    pub fn get_cancellation_policy(env: Env) -> Option<CancellationPolicy> {
        env.storage().persistent().get(&DataKey::Policy)
    }

    /// Sets the token contracts used for voting power (admin only)
    pub fn set_governance_tokens(env: Env, tokens: GovernanceTokens) -> Result<(), ContractError> {
        let admin = Self::_admin(&env)?;
        admin.require_auth();

        env.storage().persistent().set(&DataKey::GovernanceTokens, &tokens);
        TokensUpdated { tokens }.publish(&env);

        Ok(())
    }

    pub fn get_governance_tokens(env: Env) -> GovernanceTokens {
        env.storage()
            .persistent()
            .get(&DataKey::GovernanceTokens)
            .unwrap_or(GovernanceTokens {
                tdf: None,
                presence: None,
                sweat: None,
            })
    }

    /// Books future nights for a guest at a fixed price per night.
    /// Fails without booking anything if any night is invalid or taken.
    pub fn book_nights(
        env: Env,
        guest: Address,
        nights: Vec<NightKey>,
        price_per_night: i128,
    ) -> Result<u32, ContractError> {
        guest.require_auth();

        if nights.is_empty() {
            return Err(ContractError::NoNights);
        }

        if price_per_night < 0 {
            return Err(ContractError::InvalidPrice);
        }

        let now = env.ledger().timestamp();

        for night in nights.iter() {
            let start = night_start(night.year, night.day).ok_or(ContractError::InvalidNight)?;
            if start <= now {
                return Err(ContractError::NightStarted);
            }

            let mut records = Self::_load_nights(&env, &guest, night.year);
            if records.iter().any(|record| record.is_night(&night)) {
                return Err(ContractError::NightAlreadyBooked);
            }

            records.push_back(BookedNight {
                status: NightStatus::Pending,
                year: night.year,
                day_of_year: night.day,
                price: price_per_night,
                timestamp: now,
            });
            Self::_store_nights(&env, &guest, night.year, &records);
        }

        let count = nights.len();
        log!(&env, "nights booked", guest, count);
        NightsBooked { guest, count }.publish(&env);

        Ok(count)
    }

    /// Marks a guest's pending nights as confirmed (admin only)
    pub fn confirm_nights(env: Env, guest: Address, nights: Vec<NightKey>) -> Result<(), ContractError> {
        let admin = Self::_admin(&env)?;
        admin.require_auth();

        for night in nights.iter() {
            let mut records = Self::_load_nights(&env, &guest, night.year);
            let index = Self::_find_night(&records, &night)?;
            let mut record = records.get(index).ok_or(ContractError::NightNotBooked)?;

            record.status = NightStatus::Confirmed;
            records.set(index, record);
            Self::_store_nights(&env, &guest, night.year, &records);
        }

        NightsConfirmed {
            guest,
            count: nights.len(),
        }
        .publish(&env);

        Ok(())
    }

    /// Cancels future nights and records the refund owed under the current policy.
    /// Returns the refund for this cancellation.
    pub fn cancel_nights(env: Env, guest: Address, nights: Vec<NightKey>) -> Result<i128, ContractError> {
        guest.require_auth();

        if nights.is_empty() {
            return Err(ContractError::NoNights);
        }

        let policy: CancellationPolicy = env.storage()
            .persistent()
            .get(&DataKey::Policy)
            .ok_or(ContractError::PolicyNotSet)?;

        let now = env.ledger().timestamp();
        let mut refund: i128 = 0;

        for night in nights.iter() {
            let start = night_start(night.year, night.day).ok_or(ContractError::InvalidNight)?;
            if start <= now {
                return Err(ContractError::NightStarted);
            }

            let mut records = Self::_load_nights(&env, &guest, night.year);
            let index = Self::_find_night(&records, &night)?;
            let record = records.get(index).ok_or(ContractError::NightNotBooked)?;
            records.remove(index);
            Self::_store_nights(&env, &guest, night.year, &records);

            let night_refund = calculate_refund_total(record.price, &policy, start, now)?;
            refund = refund
                .checked_add(night_refund)
                .ok_or(ContractError::Overflow)?;
        }

        let key = DataKey::PendingRefund(guest.clone());
        let existing_pending: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        let new_pending = existing_pending
            .checked_add(refund)
            .ok_or(ContractError::Overflow)?;
        env.storage().persistent().set(&key, &new_pending);

        log!(&env, "nights cancelled", guest, refund);
        NightsCancelled { guest, refund }.publish(&env);

        Ok(refund)
    }

    /// Returns the guest's on-chain nights for one year
    pub fn get_booked_nights(env: Env, guest: Address, year: u32) -> Vec<BookedNight> {
        Self::_load_nights(&env, &guest, year)
    }

    /// Checks that every given night is recorded on-chain for the guest
    pub fn booking_matches_ledger(env: Env, guest: Address, nights: Vec<NightKey>) -> bool {
        let mut years: Vec<u32> = Vec::new(&env);
        let mut ledger: Vec<BookedNight> = Vec::new(&env);

        for night in nights.iter() {
            if !years.contains(night.year) {
                years.push_back(night.year);
                ledger.append(&Self::_load_nights(&env, &guest, night.year));
            }
        }

        nights_match_ledger(nights, ledger)
    }

    /// Refund owed on `initial_value` for a stay starting at `start`, at the current ledger time
    pub fn quote_refund(env: Env, initial_value: i128, start: u64) -> Result<i128, ContractError> {
        let policy: CancellationPolicy = env.storage()
            .persistent()
            .get(&DataKey::Policy)
            .ok_or(ContractError::PolicyNotSet)?;

        calculate_refund_total(initial_value, &policy, start, env.ledger().timestamp())
    }

    pub fn get_pending_refund(env: Env, guest: Address) -> i128 {
        let key = DataKey::PendingRefund(guest);
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    /// Claims the guest's accumulated refund
    pub fn claim_refund(env: Env, guest: Address) -> i128 {
        guest.require_auth();

        let key = DataKey::PendingRefund(guest.clone());
        let pending: i128 = env.storage().persistent().get(&key).unwrap_or(0);

        if pending == 0 {
            return 0;
        }

        env.storage().persistent().remove(&key);
        RefundClaimed {
            guest,
            amount: pending,
        }
        .publish(&env);

        pending
    }

    /// Voting power of `member` from the configured governance tokens.
    /// Tokens that are unset or fail to answer count as zero.
    pub fn voting_weight(env: Env, member: Address) -> Result<VotingWeight, ContractError> {
        let tokens = Self::get_governance_tokens(env.clone());

        let tdf = Self::_token_balance(&env, &tokens.tdf, &member);
        let presence = Self::_token_balance(&env, &tokens.presence, &member);
        let sweat = Self::_token_balance(&env, &tokens.sweat, &member);

        compute_voting_weight(tdf, presence, sweat)
    }

    fn _admin(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(ContractError::AdminNotSet)
    }

    fn _load_nights(env: &Env, guest: &Address, year: u32) -> Vec<BookedNight> {
        let key = DataKey::Nights(guest.clone(), year);
        env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
    }

    fn _store_nights(env: &Env, guest: &Address, year: u32, records: &Vec<BookedNight>) {
        let key = DataKey::Nights(guest.clone(), year);
        if records.is_empty() {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, records);
        }
    }

    fn _find_night(records: &Vec<BookedNight>, night: &NightKey) -> Result<u32, ContractError> {
        records
            .iter()
            .position(|record| record.is_night(night))
            .map(|index| index as u32)
            .ok_or(ContractError::NightNotBooked)
    }

    fn _token_balance(env: &Env, token: &Option<Address>, member: &Address) -> Option<i128> {
        let token = token.as_ref()?;
        match token::Client::new(env, token).try_balance(member) {
            Ok(Ok(balance)) => Some(balance),
            _ => None,
        }
    }
}
