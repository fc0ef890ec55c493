use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::escrow;
use crate::state::DEPOSITS;

/// Returns a deposit's LP tokens to its owner and deletes the deposit.
pub fn withdraw(
    deps: DepsMut,
    info: MessageInfo,
    deposit_id: u64,
) -> Result<Response, ContractError> {
    let deposit = DEPOSITS
        .may_load(deps.storage, deposit_id)?
        .ok_or(ContractError::NonExistentDeposit { deposit_id })?;

    if deposit.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    if deposit.number_of_stakes > 0 {
        return Err(ContractError::DepositHasStakes {});
    }

    DEPOSITS.remove(deps.storage, deposit_id);

    let release_msg = escrow::release_funds(&deposit.pool, &deposit.owner, deposit.liquidity)?;

    Ok(Response::default()
        .add_attributes(vec![
            ("action", "withdraw".to_string()),
            ("deposit_id", deposit_id.to_string()),
            ("owner", deposit.owner.to_string()),
            ("liquidity", deposit.liquidity.to_string()),
        ])
        .add_message(release_msg))
}
