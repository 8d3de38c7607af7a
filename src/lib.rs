pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;

pub use adapters::loader::load_ride_database;
pub use core::exhaustive::{exhaustive_max_time, ExhaustiveSelector};
pub use core::filter::filter_ride_vector;
pub use core::greedy::{greedy_max_time, GreedySelector};
pub use core::planner::{PlanSummary, Planner};
pub use domain::model::{RideItem, RideVector};
pub use domain::ports::{PlannerConfig, Selector};
pub use utils::error::{PlannerError, Result};
pub use utils::report::{print_ride_vector, sum_ride_vector, RideTotals};
