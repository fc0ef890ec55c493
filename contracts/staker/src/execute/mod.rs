mod claim_reward;
mod create_incentive;
mod deposit;
mod end_incentive;
mod stake;
mod unstake;
mod withdraw;

pub use claim_reward::claim_reward;
pub use create_incentive::create_incentive;
pub use deposit::deposit;
pub use end_incentive::end_incentive;
pub use stake::stake;
pub use unstake::unstake;
pub use withdraw::withdraw;
