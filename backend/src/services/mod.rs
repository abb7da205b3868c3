//! HTTP API. Each sub-module owns one page of the dashboard and binds that
//! page's controls to the aggregation functions: a request carries the current
//! control values, the handler recomputes from the shared dataset and answers
//! with the replacement chart.

pub mod features;
pub mod overview;
pub mod visualizations;

#[cfg(test)]
pub(crate) mod testing;
