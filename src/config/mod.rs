//! Configuration module for Page-Inspector
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; missing keys fall back to [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use page_inspector::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("inspector.toml")).unwrap();
//! println!("Probing with {} workers", config.analyzer.probe_concurrency);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalyzerConfig, Config, ServerConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
