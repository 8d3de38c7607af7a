pub mod exhaustive;
pub mod filter;
pub mod greedy;
pub mod planner;

pub use crate::domain::model::{RideItem, RideVector};
pub use crate::domain::ports::{PlannerConfig, Selector};
pub use crate::utils::error::Result;
