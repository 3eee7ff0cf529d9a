pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use crate::adapters::{JsonFileStore, RestRepository};
pub use crate::core::cards::CardService;
pub use crate::core::compatibility::{score, tier_for};
pub use crate::core::countdown::{countdown, countdown_now};
pub use crate::core::memories::MemoryService;
pub use crate::core::planner::Planner;
pub use crate::domain::model::{
    CardTheme, CompatibilityResult, CountdownResult, LoveCard, Memory, Tier,
};
pub use crate::utils::error::{LoveError, Result};
