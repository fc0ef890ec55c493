pub mod staker;
