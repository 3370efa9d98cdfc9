//! Configuration loading and management for the shift pay engine.
//!
//! This module loads the pay rule table from YAML and reads the server
//! settings from the environment.
//!
//! # Example
//!
//! ```no_run
//! use shift_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pay_rules.yaml").unwrap();
//! println!("Loaded rules: {}", config.rules().version);
//! ```

mod loader;
mod server;
mod types;

pub use loader::ConfigLoader;
pub use server::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
pub use types::{Multipliers, PayRules, TierRule};
