use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128, Uint256};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub struct MigrateMsg {}

/// The parameters to create an incentive with. The creator of the incentive
/// is the sender of the [`ExecuteMsg::CreateIncentive`] message.
#[cw_serde]
pub struct IncentiveParams {
    /// The cw20 token the rewards are denominated in.
    pub reward_token: String,
    /// The LP token of the pool the incentive is tied to.
    pub pool: String,
    /// The timestamp (in seconds) at which reward distribution begins.
    pub start_time: u64,
    /// The timestamp (in seconds) at which reward distribution stops.
    pub end_time: u64,
    /// The last timestamp (in seconds) by which stakers can claim rewards.
    /// After this point the creator can end the incentive and recover the
    /// unclaimed remainder.
    pub claim_deadline: u64,
    /// The total amount of `reward_token` to escrow for distribution.
    pub total_reward: Uint128,
}

/// Identifies a single incentive. Two incentives may never be active with the
/// same key at the same time.
#[cw_serde]
pub struct IncentiveKey {
    pub reward_token: String,
    pub pool: String,
    pub creator: String,
    pub start_time: u64,
    pub end_time: u64,
    pub claim_deadline: u64,
}

/// A reward program for a given (pool, reward token) pair.
#[cw_serde]
pub struct Incentive {
    /// The cw20 token rewards are paid in.
    pub reward_token: Addr,
    /// The LP token of the pool being incentivized.
    pub pool: Addr,
    /// The account which created, funded and can be refunded by the incentive.
    pub creator: Addr,
    /// The timestamp (in seconds) at which reward distribution begins.
    pub start_time: u64,
    /// The timestamp (in seconds) at which reward distribution stops.
    pub end_time: u64,
    /// The last timestamp (in seconds) by which rewards must be claimed.
    pub claim_deadline: u64,
    /// The amount of `reward_token` escrowed at creation.
    pub total_reward: Uint128,
    /// The amount of `reward_token` still held in escrow.
    pub total_reward_unclaimed: Uint128,
    /// The liquidity-seconds already consumed by unstaked positions, as a
    /// Q128 fixed point value.
    pub total_seconds_claimed_x128: Uint256,
    /// The number of deposits currently staked in this incentive.
    pub number_of_stakes: u64,
}

impl Incentive {
    /// Returns the key this incentive is stored under.
    pub fn key(&self) -> IncentiveKey {
        IncentiveKey {
            reward_token: self.reward_token.to_string(),
            pool: self.pool.to_string(),
            creator: self.creator.to_string(),
            start_time: self.start_time,
            end_time: self.end_time,
            claim_deadline: self.claim_deadline,
        }
    }
}

/// An LP position held in custody by the staker contract.
#[cw_serde]
pub struct Deposit {
    /// A unique identifier for the deposit.
    pub deposit_id: u64,
    /// The account that deposited the LP tokens and can withdraw them.
    pub owner: Addr,
    /// The LP token the deposit is denominated in.
    pub pool: Addr,
    /// The amount of LP tokens in custody.
    pub liquidity: Uint128,
    /// The number of incentives this deposit is currently staked in.
    pub number_of_stakes: u64,
}

/// Links a deposit to an incentive it is staked in.
#[cw_serde]
pub struct Stake {
    /// The liquidity of the deposit at stake time.
    pub liquidity: Uint128,
    /// The pool's seconds-per-liquidity accumulator at stake time, as a Q128
    /// fixed point value.
    pub seconds_per_liquidity_inside_initial_x128: Uint256,
}

/// The staked-liquidity accumulator for a single pool.
#[cw_serde]
#[derive(Default)]
pub struct PoolSnapshot {
    /// The total liquidity currently staked in the pool.
    pub total_liquidity: Uint128,
    /// The accumulated seconds per unit of staked liquidity, as a Q128 fixed
    /// point value.
    pub seconds_per_liquidity_x128: Uint256,
    /// The block timestamp (in seconds) the accumulator was last settled at.
    pub last_updated: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Creates a new incentive, escrowing `total_reward` of the reward token.
    ///
    /// The sender must have given the contract a cw20 allowance of at least
    /// `total_reward` beforehand.
    CreateIncentive { params: IncentiveParams },
    /// Ends an incentive after its claim deadline has passed, refunding the
    /// unclaimed rewards to the creator.
    EndIncentive { key: IncentiveKey },
    /// Deposits LP tokens into the staker's custody, creating a new deposit.
    ///
    /// The sender must have given the contract a cw20 allowance of at least
    /// `amount` on the LP token beforehand.
    Deposit { lp_token: String, amount: Uint128 },
    /// Withdraws a deposit that is not staked in any incentive, returning the
    /// LP tokens to the owner.
    Withdraw { deposit_id: u64 },
    /// Stakes a deposit in an active incentive.
    Stake {
        deposit_id: u64,
        incentive: IncentiveKey,
    },
    /// Unstakes a deposit from an incentive, accruing the earned rewards to
    /// the sender's reward balance.
    Unstake {
        deposit_id: u64,
        incentive: IncentiveKey,
    },
    /// Transfers the sender's accrued balance of `reward_token` to them.
    ClaimReward { reward_token: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Retrieves the contract's configuration.
    #[returns(ConfigResponse)]
    Config {},
    /// Retrieves a single incentive by key.
    #[returns(IncentiveResponse)]
    Incentive { key: IncentiveKey },
    /// Retrieves existing incentives, paginated over the raw storage key.
    #[returns(IncentivesResponse)]
    Incentives {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },
    /// Retrieves a single deposit.
    #[returns(DepositResponse)]
    Deposit { deposit_id: u64 },
    /// Retrieves all deposits owned by an address.
    #[returns(DepositsResponse)]
    Deposits { owner: String },
    /// Retrieves the stake linking a deposit to an incentive.
    #[returns(StakeResponse)]
    Stake {
        deposit_id: u64,
        incentive: IncentiveKey,
    },
    /// Retrieves the accrued, unclaimed reward balances of an address.
    #[returns(RewardsResponse)]
    Rewards { address: String },
    /// Retrieves the staked-liquidity accumulator of a pool.
    #[returns(PoolSnapshotResponse)]
    PoolSnapshot { pool: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub contract_name: String,
    pub contract_version: String,
    /// The number of deposits created over the contract's lifetime. Withdrawn
    /// deposit identifiers are never reused.
    pub deposit_count: u64,
}

#[cw_serde]
pub struct IncentiveResponse {
    pub incentive: Option<Incentive>,
}

#[cw_serde]
pub struct IncentivesResponse {
    pub incentives: Vec<Incentive>,
}

#[cw_serde]
pub struct DepositResponse {
    pub deposit: Option<Deposit>,
}

#[cw_serde]
pub struct DepositsResponse {
    pub deposits: Vec<Deposit>,
}

#[cw_serde]
pub struct StakeResponse {
    pub stake: Option<Stake>,
}

/// An accrued reward balance for a single reward token.
#[cw_serde]
pub struct RewardBalance {
    pub reward_token: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct RewardsResponse {
    pub rewards: Vec<RewardBalance>,
}

#[cw_serde]
pub struct PoolSnapshotResponse {
    pub snapshot: Option<PoolSnapshot>,
}
