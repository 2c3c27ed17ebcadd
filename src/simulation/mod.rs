pub mod rate_history;
