use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, StdError, Uint128};

use lp_incentives_std::staker::Deposit;

use crate::error::ContractError;
use crate::escrow;
use crate::state::{DEPOSITS, DEPOSIT_COUNTER};

/// Takes LP tokens into custody, creating a new deposit for the sender.
pub fn deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    lp_token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    cw_utils::nonpayable(&info)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidDepositAmount {});
    }

    let lp_token = deps.api.addr_validate(&lp_token)?;

    let escrow_msg = escrow::pull_funds(&deps.as_ref(), &env, &lp_token, &info.sender, amount)?;

    let deposit_id =
        DEPOSIT_COUNTER.update::<_, StdError>(deps.storage, |current_id| Ok(current_id + 1))?;
    DEPOSITS.save(
        deps.storage,
        deposit_id,
        &Deposit {
            deposit_id,
            owner: info.sender.clone(),
            pool: lp_token.clone(),
            liquidity: amount,
            number_of_stakes: 0u64,
        },
    )?;

    Ok(Response::default()
        .add_attributes(vec![
            ("action", "deposit".to_string()),
            ("deposit_id", deposit_id.to_string()),
            ("owner", info.sender.to_string()),
            ("pool", lp_token.to_string()),
            ("liquidity", amount.to_string()),
        ])
        .add_message(escrow_msg))
}
