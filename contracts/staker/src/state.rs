use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use lp_incentives_std::staker::{Deposit, Incentive, PoolSnapshot, Stake};

/// The existing incentives, keyed by the canonical byte encoding of their
/// [`IncentiveKey`](lp_incentives_std::staker::IncentiveKey).
pub const INCENTIVES: Map<&[u8], Incentive> = Map::new("incentives");

/// A monotonically increasing counter to generate unique deposit identifiers.
pub const DEPOSIT_COUNTER: Item<u64> = Item::new("deposit_counter");

/// The LP deposits held in custody.
pub const DEPOSITS: Map<u64, Deposit> = Map::new("deposits");

/// The stakes linking deposits to incentives, keyed by
/// `(deposit_id, incentive key bytes)`.
pub const STAKES: Map<(u64, &[u8]), Stake> = Map::new("stakes");

/// The staked-liquidity accumulator of each pool.
pub const POOL_SNAPSHOTS: Map<&Addr, PoolSnapshot> = Map::new("pool_snapshots");

/// Rewards accrued at unstake time, claimable at will. Keyed by
/// `(owner, reward token)`.
pub const REWARDS: Map<(&Addr, &Addr), Uint128> = Map::new("rewards");
