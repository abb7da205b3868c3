pub mod chart;
pub mod column;
pub mod filter;
pub mod overview;
pub mod stats;
