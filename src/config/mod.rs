use crate::domain::ports::PlannerConfig;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_below, validate_finite, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ride-planner")]
#[command(about = "Pick the set of rides that maximizes time spent, within a dollar budget")]
pub struct CliConfig {
    #[arg(long, default_value = "ride.csv")]
    pub database: String,

    #[arg(long, default_value = "500")]
    pub budget: f64,

    #[arg(long, default_value = "1")]
    pub min_time: f64,

    #[arg(long, default_value = "2500")]
    pub max_time: f64,

    #[arg(long, default_value = "20")]
    pub limit: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl PlannerConfig for CliConfig {
    fn database_path(&self) -> &str {
        &self.database
    }

    fn budget(&self) -> f64 {
        self.budget
    }

    fn min_time(&self) -> f64 {
        self.min_time
    }

    fn max_time(&self) -> f64 {
        self.max_time
    }

    fn candidate_limit(&self) -> usize {
        self.limit
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("database", &self.database)?;
        validate_finite("budget", self.budget)?;
        validate_finite("min_time", self.min_time)?;
        validate_finite("max_time", self.max_time)?;

        if self.min_time > self.max_time {
            return Err(PlannerError::InvalidValueError {
                field: "min_time".to_string(),
                value: self.min_time.to_string(),
                reason: format!("min_time must not exceed max_time ({})", self.max_time),
            });
        }

        // The exhaustive selector enumerates one bit per candidate.
        validate_below("limit", self.limit, 64)?;

        Ok(())
    }
}
