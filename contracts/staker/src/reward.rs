use cosmwasm_std::{Uint128, Uint256, Uint512};

use crate::error::ContractError;

/// Computes the reward owed to a stake when it is removed from an incentive.
///
/// The stake earned `seconds_inside_x128` liquidity-seconds, its share of the
/// incentive's remaining unclaimed liquidity-seconds. The reward is that share
/// of the remaining escrow, rounded down. Time past `end_time` keeps counting
/// towards the denominator, so rewards that nobody was staked for during the
/// incentive window decay instead of being handed to late unstakers.
///
/// Returns the reward amount along with the consumed liquidity-seconds, which
/// the caller must add to the incentive's `total_seconds_claimed_x128`.
#[allow(clippy::too_many_arguments)]
pub fn compute_reward_amount(
    total_reward_unclaimed: Uint128,
    total_seconds_claimed_x128: Uint256,
    start_time: u64,
    end_time: u64,
    liquidity: Uint128,
    seconds_per_liquidity_inside_initial_x128: Uint256,
    seconds_per_liquidity_inside_x128: Uint256,
    current_time: u64,
) -> Result<(Uint128, Uint256), ContractError> {
    if current_time < start_time {
        return Err(ContractError::IncentiveNotStarted { start_time });
    }

    let seconds_inside_x128 = seconds_per_liquidity_inside_x128
        .checked_sub(seconds_per_liquidity_inside_initial_x128)?
        .checked_mul(Uint256::from(liquidity))?;

    let total_seconds = end_time.max(current_time) - start_time;
    let total_seconds_unclaimed_x128 =
        (Uint256::from(total_seconds) << 128).checked_sub(total_seconds_claimed_x128)?;

    if total_seconds_unclaimed_x128.is_zero() {
        return Ok((Uint128::zero(), seconds_inside_x128));
    }

    let reward = Uint512::from(total_reward_unclaimed)
        .checked_mul(Uint512::from(seconds_inside_x128))?
        .checked_div(Uint512::from(total_seconds_unclaimed_x128))?;

    let reward = Uint128::try_from(Uint256::try_from(reward)?)?;

    Ok((reward, seconds_inside_x128))
}
