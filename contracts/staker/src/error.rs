use cosmwasm_std::{
    ConversionOverflowError, DivideByZeroError, OverflowError, StdError, Uint128,
};
use cw_utils::PaymentError;
use semver::Version;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    ConversionOverflowError(#[from] ConversionOverflowError),

    #[error("{0}")]
    DivideByZeroError(#[from] DivideByZeroError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Attempt to migrate to version {new_version}, but contract is on a higher version {current_version}")]
    MigrateInvalidVersion {
        new_version: Version,
        current_version: Version,
    },

    #[error("Total reward must be positive")]
    InvalidReward {},

    #[error("Invalid timestamps, must satisfy start_time ({start_time}) < end_time ({end_time}) <= claim_deadline ({claim_deadline})")]
    InvalidTimestamps {
        start_time: u64,
        end_time: u64,
        claim_deadline: u64,
    },

    #[error("An incentive with the given key already exists")]
    IncentiveAlreadyExists {},

    #[error("Allowance of {allowance} is insufficient, {required} is required")]
    AllowanceInsufficient {
        /// The allowance the contract was actually given.
        allowance: Uint128,
        /// The amount the contract needed to transfer.
        required: Uint128,
    },

    #[error("The given key does not point to any incentive")]
    NonExistentIncentive {},

    #[error("The incentive cannot be ended before its claim deadline ({claim_deadline})")]
    IncentiveNotEnded { claim_deadline: u64 },

    #[error("The incentive cannot be ended while deposits are staked in it")]
    IncentiveHasStakes {},

    #[error("The incentive has not started yet (starts at {start_time})")]
    IncentiveNotStarted { start_time: u64 },

    #[error("The incentive has already ended (ended at {end_time})")]
    IncentiveAlreadyEnded { end_time: u64 },

    #[error("Deposit amount must be positive")]
    InvalidDepositAmount {},

    #[error("Deposit identifier ({deposit_id}) does not point to any deposit")]
    NonExistentDeposit { deposit_id: u64 },

    #[error("The deposit cannot be withdrawn while it is staked in an incentive")]
    DepositHasStakes {},

    #[error("Deposit {deposit_id} is already staked in the given incentive")]
    AlreadyStaked { deposit_id: u64 },

    #[error("The deposit is not staked in the given incentive")]
    NonExistentStake {},

    #[error("The deposit's pool does not match the incentive's pool")]
    PoolMismatch {},

    #[error("There's nothing to claim for this address")]
    NothingToClaim {},
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
