use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_non_empty_string;
use serde::Serialize;
use std::sync::Arc;

/// One ride item available for purchase. Immutable after construction.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RideItem {
    description: String,
    cost_dollars: f64,
    time_minutes: f64,
}

impl RideItem {
    /// Build a validated ride item. The description must be non-empty and the
    /// cost strictly positive. Time is not validated here: zero or negative
    /// times exist in real catalogs and are excluded by the filter instead.
    pub fn new(
        description: impl Into<String>,
        cost_dollars: f64,
        time_minutes: f64,
    ) -> Result<Self> {
        let description = description.into();
        validate_non_empty_string("description", &description)?;

        if !(cost_dollars > 0.0) {
            return Err(PlannerError::InvalidValueError {
                field: "cost_dollars".to_string(),
                value: cost_dollars.to_string(),
                reason: "Cost must be strictly positive".to_string(),
            });
        }

        Ok(Self {
            description,
            cost_dollars,
            time_minutes,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> f64 {
        self.cost_dollars
    }

    pub fn time(&self) -> f64 {
        self.time_minutes
    }
}

/// Ordered catalog of shared, read-only ride items. Insertion order is
/// meaningful: it drives filter truncation, selector tie-breaks and reporting.
pub type RideVector = Vec<Arc<RideItem>>;
