//! Consistency check between locally stored bookings and the night ledger.

use crate::types::{BookedNight, NightKey};

/// Returns true when every local night has a ledger record for the same
/// year and day of year. Status, price and timestamp are not compared.
pub fn nights_match_ledger<L, R>(local: L, ledger: R) -> bool
where
    L: IntoIterator<Item = NightKey>,
    R: IntoIterator<Item = BookedNight> + Clone,
{
    local
        .into_iter()
        .all(|night| ledger.clone().into_iter().any(|record| record.is_night(&night)))
}
