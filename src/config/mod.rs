// src/config/mod.rs

//! Definition file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a definition file from disk (`loader.rs`).
//! - Turn the raw model into validated instances (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_definition_path, load_and_validate, load_from_path, load_from_str};
pub use model::{
    AddOnConfig, CustomNetworkingConfig, CustomPortConfig, Definition, DiskConfig,
    HardwareConfig, InstanceConfig, MonthlyTransferConfig, NetworkingConfig, PortConfig,
    RawDefinitionFile,
};
