use cosmwasm_std::{DepsMut, Env, Response};

use lp_incentives_std::staker::IncentiveKey;

use crate::error::ContractError;
use crate::escrow;
use crate::helpers::ValidatedKey;
use crate::state::INCENTIVES;

/// Ends an incentive once its claim deadline has passed, refunding whatever
/// is left in escrow to the creator. Anyone can trigger this, the refund
/// always goes to the creator.
pub fn end_incentive(
    deps: DepsMut,
    env: Env,
    key: IncentiveKey,
) -> Result<Response, ContractError> {
    let key = ValidatedKey::from_key(deps.api, &key)?;
    let key_bytes = key.to_bytes(deps.api)?;

    let incentive = INCENTIVES
        .may_load(deps.storage, &key_bytes)?
        .ok_or(ContractError::NonExistentIncentive {})?;

    if env.block.time.seconds() <= incentive.claim_deadline {
        return Err(ContractError::IncentiveNotEnded {
            claim_deadline: incentive.claim_deadline,
        });
    }

    if incentive.number_of_stakes > 0 {
        return Err(ContractError::IncentiveHasStakes {});
    }

    // the key becomes reusable once the record is gone
    INCENTIVES.remove(deps.storage, &key_bytes);

    let refund = incentive.total_reward_unclaimed;
    let mut response = Response::default().add_attributes(vec![
        ("action", "end_incentive".to_string()),
        ("reward_token", incentive.reward_token.to_string()),
        ("pool", incentive.pool.to_string()),
        ("creator", incentive.creator.to_string()),
        ("refund", refund.to_string()),
    ]);

    if !refund.is_zero() {
        response = response.add_message(escrow::release_funds(
            &incentive.reward_token,
            &incentive.creator,
            refund,
        )?);
    }

    Ok(response)
}
