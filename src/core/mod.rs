pub mod cards;
pub mod compatibility;
pub mod countdown;
pub mod memories;
pub mod photos;
pub mod planner;

pub use crate::domain::model::{CompatibilityResult, CountdownResult, Tier};
pub use crate::domain::ports::{KeyValueStore, LoveRepository};
pub use crate::utils::error::Result;
