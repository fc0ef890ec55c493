use cosmwasm_std::{Binary, Deps, Order, StdResult};
use cw2::get_contract_version;
use cw_storage_plus::Bound;

use lp_incentives_std::staker::{
    ConfigResponse, DepositResponse, DepositsResponse, IncentiveKey, IncentiveResponse,
    IncentivesResponse, PoolSnapshotResponse, RewardBalance, RewardsResponse, StakeResponse,
};

use crate::helpers::ValidatedKey;
use crate::state::{DEPOSITS, DEPOSIT_COUNTER, INCENTIVES, POOL_SNAPSHOTS, REWARDS, STAKES};

pub(crate) const DEFAULT_PAGE_LIMIT: u32 = 10;
pub(crate) const MAX_PAGE_LIMIT: u32 = 30;

pub(crate) fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let contract_info = get_contract_version(deps.storage)?;

    Ok(ConfigResponse {
        contract_name: contract_info.contract,
        contract_version: contract_info.version,
        deposit_count: DEPOSIT_COUNTER.load(deps.storage)?,
    })
}

pub(crate) fn query_incentive(deps: Deps, key: IncentiveKey) -> StdResult<IncentiveResponse> {
    let key_bytes = ValidatedKey::from_key(deps.api, &key)?.to_bytes(deps.api)?;

    Ok(IncentiveResponse {
        incentive: INCENTIVES.may_load(deps.storage, &key_bytes)?,
    })
}

pub(crate) fn query_incentives(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<IncentivesResponse> {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    let start = start_after.map(|raw_key| Bound::ExclusiveRaw(raw_key.to_vec()));

    let incentives = INCENTIVES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| Ok(item?.1))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(IncentivesResponse { incentives })
}

pub(crate) fn query_deposit(deps: Deps, deposit_id: u64) -> StdResult<DepositResponse> {
    Ok(DepositResponse {
        deposit: DEPOSITS.may_load(deps.storage, deposit_id)?,
    })
}

pub(crate) fn query_deposits(deps: Deps, owner: String) -> StdResult<DepositsResponse> {
    let owner = deps.api.addr_validate(&owner)?;

    let deposits = DEPOSITS
        .range(deps.storage, None, None, Order::Ascending)
        .filter_map(|item| match item {
            Ok((_, deposit)) if deposit.owner == owner => Some(Ok(deposit)),
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DepositsResponse { deposits })
}

pub(crate) fn query_stake(
    deps: Deps,
    deposit_id: u64,
    incentive: IncentiveKey,
) -> StdResult<StakeResponse> {
    let key_bytes = ValidatedKey::from_key(deps.api, &incentive)?.to_bytes(deps.api)?;

    Ok(StakeResponse {
        stake: STAKES.may_load(deps.storage, (deposit_id, &key_bytes))?,
    })
}

pub(crate) fn query_rewards(deps: Deps, address: String) -> StdResult<RewardsResponse> {
    let address = deps.api.addr_validate(&address)?;

    let rewards = REWARDS
        .prefix(&address)
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| {
            let (reward_token, amount) = item?;
            Ok(RewardBalance {
                reward_token,
                amount,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RewardsResponse { rewards })
}

pub(crate) fn query_pool_snapshot(deps: Deps, pool: String) -> StdResult<PoolSnapshotResponse> {
    let pool = deps.api.addr_validate(&pool)?;

    Ok(PoolSnapshotResponse {
        snapshot: POOL_SNAPSHOTS.may_load(deps.storage, &pool)?,
    })
}
