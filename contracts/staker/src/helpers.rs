use cosmwasm_std::{Addr, Api, StdResult, Uint256};

use lp_incentives_std::staker::{IncentiveKey, IncentiveParams, PoolSnapshot};

use crate::error::ContractError;

/// An incentive key whose addresses have been validated.
pub struct ValidatedKey {
    pub reward_token: Addr,
    pub pool: Addr,
    pub creator: Addr,
    pub start_time: u64,
    pub end_time: u64,
    pub claim_deadline: u64,
}

impl ValidatedKey {
    /// Builds the key for a [`IncentiveParams`] message, taking the creator
    /// from the message sender.
    pub fn from_params(api: &dyn Api, params: &IncentiveParams, creator: Addr) -> StdResult<Self> {
        Ok(Self {
            reward_token: api.addr_validate(&params.reward_token)?,
            pool: api.addr_validate(&params.pool)?,
            creator,
            start_time: params.start_time,
            end_time: params.end_time,
            claim_deadline: params.claim_deadline,
        })
    }

    pub fn from_key(api: &dyn Api, key: &IncentiveKey) -> StdResult<Self> {
        Ok(Self {
            reward_token: api.addr_validate(&key.reward_token)?,
            pool: api.addr_validate(&key.pool)?,
            creator: api.addr_validate(&key.creator)?,
            start_time: key.start_time,
            end_time: key.end_time,
            claim_deadline: key.claim_deadline,
        })
    }

    /// The canonical byte encoding the incentive is stored under: the three
    /// canonical addresses followed by the three timestamps in big-endian.
    pub fn to_bytes(&self, api: &dyn Api) -> StdResult<Vec<u8>> {
        let mut bytes = vec![];
        for addr in [&self.reward_token, &self.pool, &self.creator] {
            bytes.extend_from_slice(api.addr_canonicalize(addr.as_str())?.as_slice());
        }
        for timestamp in [self.start_time, self.end_time, self.claim_deadline] {
            bytes.extend_from_slice(&timestamp.to_be_bytes());
        }
        Ok(bytes)
    }
}

/// Settles a pool's seconds-per-liquidity accumulator up to `now`.
///
/// Must be called before the pool's staked liquidity is mutated, otherwise
/// the elapsed time would be attributed to the wrong amount of liquidity.
pub fn settle_pool_snapshot(
    snapshot: &mut PoolSnapshot,
    now: u64,
) -> Result<(), ContractError> {
    if now > snapshot.last_updated {
        if !snapshot.total_liquidity.is_zero() {
            let elapsed = now - snapshot.last_updated;
            let delta = (Uint256::from(elapsed) << 128)
                .checked_div(Uint256::from(snapshot.total_liquidity))?;
            snapshot.seconds_per_liquidity_x128 =
                snapshot.seconds_per_liquidity_x128.checked_add(delta)?;
        }
        snapshot.last_updated = now;
    }

    Ok(())
}
