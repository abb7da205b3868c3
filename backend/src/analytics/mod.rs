//! Aggregation functions.
//!
//! Every function here is pure: it reads the immutable [`DerivedTable`] plus
//! explicit parameters and returns a small, freshly computed result. Nothing is
//! cached between calls, so a result depends only on its inputs.
//!
//! [`DerivedTable`]: crate::dataset::derived::DerivedTable

pub mod correlation;
pub mod distribution;
pub mod filter;
pub mod grouped;
pub mod overview;
pub mod trend;
