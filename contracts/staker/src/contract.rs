use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use lp_incentives_std::staker::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

use crate::error::ContractError;
use crate::state::DEPOSIT_COUNTER;
use crate::ContractError::MigrateInvalidVersion;
use crate::{execute, queries};

// version info for migration info
const CONTRACT_NAME: &str = "lp_incentives-staker";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    DEPOSIT_COUNTER.save(deps.storage, &0u64)?;

    Ok(Response::default().add_attributes(vec![("action", "instantiate".to_string())]))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateIncentive { params } => {
            execute::create_incentive(deps, env, info, params)
        }
        ExecuteMsg::EndIncentive { key } => execute::end_incentive(deps, env, key),
        ExecuteMsg::Deposit { lp_token, amount } => {
            execute::deposit(deps, env, info, lp_token, amount)
        }
        ExecuteMsg::Withdraw { deposit_id } => execute::withdraw(deps, info, deposit_id),
        ExecuteMsg::Stake {
            deposit_id,
            incentive,
        } => execute::stake(deps, env, info, deposit_id, incentive),
        ExecuteMsg::Unstake {
            deposit_id,
            incentive,
        } => execute::unstake(deps, env, info, deposit_id, incentive),
        ExecuteMsg::ClaimReward { reward_token } => execute::claim_reward(deps, info, reward_token),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&queries::query_config(deps)?),
        QueryMsg::Incentive { key } => to_binary(&queries::query_incentive(deps, key)?),
        QueryMsg::Incentives { start_after, limit } => {
            to_binary(&queries::query_incentives(deps, start_after, limit)?)
        }
        QueryMsg::Deposit { deposit_id } => to_binary(&queries::query_deposit(deps, deposit_id)?),
        QueryMsg::Deposits { owner } => to_binary(&queries::query_deposits(deps, owner)?),
        QueryMsg::Stake {
            deposit_id,
            incentive,
        } => to_binary(&queries::query_stake(deps, deposit_id, incentive)?),
        QueryMsg::Rewards { address } => to_binary(&queries::query_rewards(deps, address)?),
        QueryMsg::PoolSnapshot { pool } => to_binary(&queries::query_pool_snapshot(deps, pool)?),
    }
}

#[cfg(not(tarpaulin_include))]
#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let version: Version = CONTRACT_VERSION.parse()?;
    let storage_version: Version = get_contract_version(deps.storage)?.version.parse()?;

    if storage_version >= version {
        return Err(MigrateInvalidVersion {
            current_version: storage_version,
            new_version: version,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
