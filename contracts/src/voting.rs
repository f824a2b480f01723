//! DAO voting power from governance token balances.

use crate::errors::ContractError;
use crate::types::VotingWeight;

/// Sweat equity counts five times toward voting power
pub const SWEAT_MULTIPLIER: i128 = 5;

/// Combines the three balances into a voting weight.
/// A missing balance counts as zero.
pub fn compute_voting_weight(
    tdf: Option<i128>,
    presence: Option<i128>,
    sweat: Option<i128>,
) -> Result<VotingWeight, ContractError> {
    let tdf = tdf.unwrap_or(0);
    let presence = presence.unwrap_or(0);
    let sweat = sweat.unwrap_or(0);

    let sweat_weighted = sweat
        .checked_mul(SWEAT_MULTIPLIER)
        .ok_or(ContractError::Overflow)?;
    let total = tdf
        .checked_add(presence)
        .and_then(|sum| sum.checked_add(sweat_weighted))
        .ok_or(ContractError::Overflow)?;

    Ok(VotingWeight {
        tdf,
        presence,
        sweat,
        sweat_weighted,
        total,
    })
}
