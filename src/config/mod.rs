// src/config/mod.rs

//! Configuration loading and validation for autolaunch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate launch and credential settings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{
    ConfigFile, CredentialSource, CredentialSpec, LaunchSection, RawConfigFile,
    RawCredentialSection, DEFAULT_CREDENTIAL_NAME, DEFAULT_FINISHED_MESSAGE,
};
