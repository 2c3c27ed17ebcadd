pub mod currency;
pub mod error;
pub mod money;
pub mod rate;
