// src/lightsail/instance.rs

use tracing::{debug, warn};

use crate::errors::{LightsailError, Result};
use crate::lightsail::{AddOn, Blueprint, BlueprintFamily, Bundle, Hardware, Networking};
use crate::render::{INSTANCE_RESOURCE_TYPE, InstanceProperties, InstanceResource};

/// Longest physical name Lightsail accepts for an instance.
pub const MAX_INSTANCE_NAME_LEN: usize = 64;

/// Everything needed to describe one Lightsail instance.
///
/// Only `blueprint` and `bundle` are required; see [`Instance::new`] for the
/// defaults applied to the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceProps {
    pub add_ons: Option<Vec<AddOn>>,
    pub blueprint: Blueprint,
    pub bundle: Bundle,
    pub hardware: Option<Hardware>,
    pub instance_name: Option<String>,
    pub key_pair_name: Option<String>,
    pub networking: Option<Networking>,
    pub user_data: Option<String>,
}

impl InstanceProps {
    pub fn new(blueprint: Blueprint, bundle: Bundle) -> Self {
        Self {
            add_ons: None,
            blueprint,
            bundle,
            hardware: None,
            instance_name: None,
            key_pair_name: None,
            networking: None,
            user_data: None,
        }
    }
}

/// A fully defaulted Lightsail instance, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    logical_id: String,
    add_ons: Vec<AddOn>,
    blueprint: Blueprint,
    bundle: Bundle,
    hardware: Option<Hardware>,
    instance_name: String,
    key_pair_name: Option<String>,
    networking: Networking,
    user_data: String,
}

impl Instance {
    /// Apply defaults to `props`:
    ///
    /// - `add_ons`: a single enabled `AutoSnapshot` add-on.
    /// - `instance_name`: derived from `logical_id` (see [`physical_name_from`]).
    /// - `networking`: no open ports.
    /// - `user_data`: empty.
    pub fn new(logical_id: impl Into<String>, props: InstanceProps) -> Result<Self> {
        let logical_id = logical_id.into();

        if props.blueprint.id().trim().is_empty() {
            return Err(LightsailError::ConfigError(format!(
                "instance '{logical_id}' has an empty blueprint id"
            )));
        }
        if props.bundle.id().trim().is_empty() {
            return Err(LightsailError::ConfigError(format!(
                "instance '{logical_id}' has an empty bundle id"
            )));
        }

        if props.blueprint.family() != BlueprintFamily::Custom
            && props.blueprint.is_windows() != props.bundle.is_windows()
        {
            warn!(
                instance = %logical_id,
                blueprint = %props.blueprint,
                bundle = %props.bundle,
                "blueprint and bundle platforms do not match"
            );
        }

        let instance_name = match props.instance_name {
            Some(name) => name,
            None => {
                let name = physical_name_from(&logical_id)?;
                debug!(instance = %logical_id, %name, "generated instance name");
                name
            }
        };

        let add_ons = props.add_ons.unwrap_or_else(|| {
            debug!(instance = %logical_id, "no add-ons given; using default AutoSnapshot");
            vec![AddOn::default()]
        });

        Ok(Self {
            logical_id,
            add_ons,
            blueprint: props.blueprint,
            bundle: props.bundle,
            hardware: props.hardware,
            instance_name,
            key_pair_name: props.key_pair_name,
            networking: props.networking.unwrap_or_default(),
            user_data: props.user_data.unwrap_or_default(),
        })
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn hardware(&self) -> Option<&Hardware> {
        self.hardware.as_ref()
    }

    pub fn key_pair_name(&self) -> Option<&str> {
        self.key_pair_name.as_deref()
    }

    pub fn networking(&self) -> &Networking {
        &self.networking
    }

    pub fn user_data(&self) -> &str {
        &self.user_data
    }

    pub fn render_properties(&self) -> InstanceProperties {
        InstanceProperties {
            add_ons: self.add_ons.iter().map(AddOn::render).collect(),
            blueprint_id: self.blueprint.id().to_string(),
            bundle_id: self.bundle.id().to_string(),
            hardware: self.hardware.as_ref().map(Hardware::render),
            instance_name: self.instance_name.clone(),
            key_pair_name: self.key_pair_name.clone(),
            networking: self.networking.render(),
            user_data: self.user_data.clone(),
        }
    }

    pub fn render(&self) -> InstanceResource {
        InstanceResource {
            resource_type: INSTANCE_RESOURCE_TYPE,
            properties: self.render_properties(),
        }
    }
}

/// Derive a physical instance name from a logical id: lowercase, keep only
/// `[a-z0-9-]`, truncate to [`MAX_INSTANCE_NAME_LEN`].
pub fn physical_name_from(logical_id: &str) -> Result<String> {
    let name: String = logical_id
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .take(MAX_INSTANCE_NAME_LEN)
        .collect();

    if name.is_empty() {
        return Err(LightsailError::ConfigError(format!(
            "cannot derive an instance name from logical id '{logical_id}'; set instance_name explicitly"
        )));
    }

    Ok(name)
}
