use crate::model::column::Column;
use serde::{Deserialize, Serialize};

/// Filter value meaning "do not constrain this column".
pub const ALL_SENTINEL: &str = "All";

/// Allowed values for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConstraint {
    pub column: Column,
    pub allowed: Vec<String>,
}

impl FilterConstraint {
    pub fn new(column: Column, allowed: Vec<String>) -> Self {
        Self { column, allowed }
    }

    /// An empty allowed set, or one containing [`ALL_SENTINEL`], leaves the column unconstrained.
    pub fn is_active(&self) -> bool {
        !self.allowed.is_empty() && !self.allowed.iter().any(|v| v == ALL_SENTINEL)
    }

    pub fn allows(&self, value: Option<&str>) -> bool {
        if !self.is_active() {
            return true;
        }
        match value {
            Some(v) => self.allowed.iter().any(|a| a == v),
            None => false,
        }
    }
}

/// A conjunction of per-column constraints narrowing which records take part in
/// an aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub constraints: Vec<FilterConstraint>,
}

impl FilterSpec {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: Column, allowed: &[&str]) -> Self {
        self.constraints.push(FilterConstraint::new(
            column,
            allowed.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Constraints that actually narrow the record set.
    pub fn active(&self) -> impl Iterator<Item = &FilterConstraint> {
        self.constraints.iter().filter(|c| c.is_active())
    }
}
