pub mod chart;
pub mod navbar;
pub mod stat_card;
