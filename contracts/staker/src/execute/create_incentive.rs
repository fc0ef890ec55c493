use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint256};

use lp_incentives_std::staker::{Incentive, IncentiveParams};

use crate::error::ContractError;
use crate::escrow;
use crate::helpers::ValidatedKey;
use crate::state::INCENTIVES;

/// Creates a new incentive, escrowing the total reward from the sender.
pub fn create_incentive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: IncentiveParams,
) -> Result<Response, ContractError> {
    cw_utils::nonpayable(&info)?;

    if params.total_reward.is_zero() {
        return Err(ContractError::InvalidReward {});
    }

    // the reward window must be well formed, the claim deadline included
    if params.start_time >= params.end_time || params.end_time > params.claim_deadline {
        return Err(ContractError::InvalidTimestamps {
            start_time: params.start_time,
            end_time: params.end_time,
            claim_deadline: params.claim_deadline,
        });
    }

    let key = ValidatedKey::from_params(deps.api, &params, info.sender.clone())?;
    let key_bytes = key.to_bytes(deps.api)?;

    if INCENTIVES.has(deps.storage, &key_bytes) {
        return Err(ContractError::IncentiveAlreadyExists {});
    }

    let escrow_msg = escrow::pull_funds(
        &deps.as_ref(),
        &env,
        &key.reward_token,
        &info.sender,
        params.total_reward,
    )?;

    let incentive = Incentive {
        reward_token: key.reward_token,
        pool: key.pool,
        creator: key.creator,
        start_time: key.start_time,
        end_time: key.end_time,
        claim_deadline: key.claim_deadline,
        total_reward: params.total_reward,
        total_reward_unclaimed: params.total_reward,
        total_seconds_claimed_x128: Uint256::zero(),
        number_of_stakes: 0u64,
    };
    INCENTIVES.save(deps.storage, &key_bytes, &incentive)?;

    Ok(Response::default()
        .add_attributes(vec![
            ("action", "create_incentive".to_string()),
            ("reward_token", incentive.reward_token.to_string()),
            ("pool", incentive.pool.to_string()),
            ("creator", incentive.creator.to_string()),
            ("start_time", incentive.start_time.to_string()),
            ("end_time", incentive.end_time.to_string()),
            ("claim_deadline", incentive.claim_deadline.to_string()),
            ("total_reward", incentive.total_reward.to_string()),
        ])
        .add_message(escrow_msg))
}
