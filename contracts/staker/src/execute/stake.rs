use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use lp_incentives_std::staker::{IncentiveKey, Stake};

use crate::error::ContractError;
use crate::helpers::{settle_pool_snapshot, ValidatedKey};
use crate::state::{DEPOSITS, INCENTIVES, POOL_SNAPSHOTS, STAKES};

/// Stakes a deposit in an active incentive.
pub fn stake(
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

    let mut incentive = INCENTIVES
        .may_load(deps.storage, &key_bytes)?
        .ok_or(ContractError::NonExistentIncentive {})?;

    if deposit.pool != incentive.pool {
        return Err(ContractError::PoolMismatch {});
    }

    let now = env.block.time.seconds();
    if now < incentive.start_time {
        return Err(ContractError::IncentiveNotStarted {
            start_time: incentive.start_time,
        });
    }
    if now >= incentive.end_time {
        return Err(ContractError::IncentiveAlreadyEnded {
            end_time: incentive.end_time,
        });
    }

    if STAKES.has(deps.storage, (deposit_id, &key_bytes)) {
        return Err(ContractError::AlreadyStaked { deposit_id });
    }

    let mut snapshot = POOL_SNAPSHOTS
        .may_load(deps.storage, &incentive.pool)?
        .unwrap_or_default();
    settle_pool_snapshot(&mut snapshot, now)?;

    STAKES.save(
        deps.storage,
        (deposit_id, &key_bytes),
        &Stake {
            liquidity: deposit.liquidity,
            seconds_per_liquidity_inside_initial_x128: snapshot.seconds_per_liquidity_x128,
        },
    )?;

    snapshot.total_liquidity = snapshot.total_liquidity.checked_add(deposit.liquidity)?;
    POOL_SNAPSHOTS.save(deps.storage, &incentive.pool, &snapshot)?;

    deposit.number_of_stakes += 1;
    DEPOSITS.save(deps.storage, deposit_id, &deposit)?;

    incentive.number_of_stakes += 1;
    INCENTIVES.save(deps.storage, &key_bytes, &incentive)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "stake".to_string()),
        ("deposit_id", deposit_id.to_string()),
        ("owner", deposit.owner.to_string()),
        ("pool", incentive.pool.to_string()),
        ("liquidity", deposit.liquidity.to_string()),
    ]))
}
