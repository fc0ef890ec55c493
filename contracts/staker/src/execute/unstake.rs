use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, StdError, Uint128};

use lp_incentives_std::staker::IncentiveKey;

use crate::error::ContractError;
use crate::helpers::{settle_pool_snapshot, ValidatedKey};
use crate::reward::compute_reward_amount;
use crate::state::{DEPOSITS, INCENTIVES, POOL_SNAPSHOTS, REWARDS, STAKES};

/// Unstakes a deposit from an incentive, crediting the earned reward to the
/// owner's reward balance.
pub fn unstake(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    deposit_id: u64,
    incentive_key: IncentiveKey,
) -> Result<Response, ContractError> {
    let mut deposit = DEPOSITS
        .may_load(deps.storage, deposit_id)?
        .ok_or(ContractError::NonExistentDeposit { deposit_id })?;

    if deposit.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    let key = ValidatedKey::from_key(deps.api, &incentive_key)?;
    let key_bytes = key.to_bytes(deps.api)?;

    let stake = STAKES
        .may_load(deps.storage, (deposit_id, &key_bytes))?
        .ok_or(ContractError::NonExistentStake {})?;

    let mut incentive = INCENTIVES
        .may_load(deps.storage, &key_bytes)?
        .ok_or(ContractError::NonExistentIncentive {})?;

    let now = env.block.time.seconds();
    let mut snapshot = POOL_SNAPSHOTS
        .may_load(deps.storage, &incentive.pool)?
        .unwrap_or_default();
    settle_pool_snapshot(&mut snapshot, now)?;

    let (reward, seconds_inside_x128) = compute_reward_amount(
        incentive.total_reward_unclaimed,
        incentive.total_seconds_claimed_x128,
        incentive.start_time,
        incentive.end_time,
        stake.liquidity,
        stake.seconds_per_liquidity_inside_initial_x128,
        snapshot.seconds_per_liquidity_x128,
        now,
    )?;
    let reward = reward.min(incentive.total_reward_unclaimed);

    STAKES.remove(deps.storage, (deposit_id, &key_bytes));

    snapshot.total_liquidity = snapshot.total_liquidity.checked_sub(stake.liquidity)?;
    POOL_SNAPSHOTS.save(deps.storage, &incentive.pool, &snapshot)?;

    deposit.number_of_stakes -= 1;
    DEPOSITS.save(deps.storage, deposit_id, &deposit)?;

    incentive.number_of_stakes -= 1;
    incentive.total_reward_unclaimed = incentive.total_reward_unclaimed.checked_sub(reward)?;
    incentive.total_seconds_claimed_x128 = incentive
        .total_seconds_claimed_x128
        .checked_add(seconds_inside_x128)?;
    INCENTIVES.save(deps.storage, &key_bytes, &incentive)?;

    if !reward.is_zero() {
        REWARDS.update::<_, StdError>(
            deps.storage,
            (&deposit.owner, &incentive.reward_token),
            |balance| Ok(balance.unwrap_or_else(Uint128::zero).checked_add(reward)?),
        )?;
    }

    Ok(Response::default().add_attributes(vec![
        ("action", "unstake".to_string()),
        ("deposit_id", deposit_id.to_string()),
        ("owner", deposit.owner.to_string()),
        ("reward_token", incentive.reward_token.to_string()),
        ("reward", reward.to_string()),
    ]))
}
