use cosmwasm_std::{to_binary, Addr, Deps, Env, Uint128, WasmMsg};

use crate::error::ContractError;

/// Validates that `owner` has granted the contract an allowance of at least
/// `amount` of the cw20 `token`.
///
/// Returns the [`WasmMsg`] that will transfer the specified `amount` of the
/// `token` into the contract's custody.
pub fn pull_funds(
    deps: &Deps,
    env: &Env,
    token: &Addr,
    owner: &Addr,
    amount: Uint128,
) -> Result<WasmMsg, ContractError> {
    let allowance: cw20::AllowanceResponse = deps.querier.query_wasm_smart(
        token.clone(),
        &cw20::Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: env.contract.address.to_string(),
        },
    )?;

    if allowance.allowance < amount {
        return Err(ContractError::AllowanceInsufficient {
            allowance: allowance.allowance,
            required: amount,
        });
    }

    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_binary(&cw20::Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    })
}

/// Returns the [`WasmMsg`] that will transfer `amount` of the cw20 `token`
/// from the contract's custody back to `recipient`.
pub fn release_funds(
    token: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> Result<WasmMsg, ContractError> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_binary(&cw20::Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    })
}
