pub mod activity;
pub mod chart;
pub mod filter;
pub mod palette;
pub mod weekly;
