use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::escrow;
use crate::state::REWARDS;

/// Transfers the sender's accrued balance of the given reward token to them.
pub fn claim_reward(
    deps: DepsMut,
    info: MessageInfo,
    reward_token: String,
) -> Result<Response, ContractError> {
    let reward_token = deps.api.addr_validate(&reward_token)?;

    let amount = REWARDS
        .may_load(deps.storage, (&info.sender, &reward_token))?
        .unwrap_or_default();

    if amount.is_zero() {
        return Err(ContractError::NothingToClaim {});
    }

    REWARDS.remove(deps.storage, (&info.sender, &reward_token));

    let release_msg = escrow::release_funds(&reward_token, &info.sender, amount)?;

    Ok(Response::default()
        .add_attributes(vec![
            ("action", "claim_reward".to_string()),
            ("owner", info.sender.to_string()),
            ("reward_token", reward_token.to_string()),
            ("amount", amount.to_string()),
        ])
        .add_message(release_msg))
}
