// src/lightsail/mod.rs

//! Typed builders for the facets of a Lightsail instance.
//!
//! Each type applies its defaults on construction and renders itself into the
//! matching property struct from [`crate::render`].

pub mod addon;
pub mod blueprint;
pub mod bundle;
pub mod hardware;
pub mod instance;
pub mod networking;

pub use addon::{AddOn, AutoSnapshotAddOn, validate_snapshot_time_of_day};
pub use blueprint::{Blueprint, BlueprintFamily};
pub use bundle::Bundle;
pub use hardware::{Disk, Hardware};
pub use instance::{Instance, InstanceProps};
pub use networking::{MonthlyTransfer, Networking, Port};
