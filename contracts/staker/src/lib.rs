pub mod contract;
mod error;
pub mod state;

mod escrow;
mod execute;
mod helpers;
mod queries;
mod reward;

#[cfg(test)]
mod tests;

pub use crate::error::ContractError;
