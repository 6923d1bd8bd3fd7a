#![allow(dead_code)]

use std::collections::BTreeMap;

use lightsail_props::config::{AddOnConfig, Definition, InstanceConfig, RawDefinitionFile};
use lightsail_props::lightsail::{
    AddOn, Blueprint, Bundle, Hardware, Instance, InstanceProps, Networking,
};
use lightsail_props::types::Deferrable;

/// Builder for `InstanceProps` to simplify test setup.
///
/// Starts from Amazon Linux 2023 on a `small_3_0` bundle.
pub struct InstancePropsBuilder {
    props: InstanceProps,
}

impl InstancePropsBuilder {
    pub fn new() -> Self {
        Self {
            props: InstanceProps::new(Blueprint::AMAZON_LINUX_2023, Bundle::SMALL_3_0),
        }
    }

    pub fn blueprint(mut self, blueprint: Blueprint) -> Self {
        self.props.blueprint = blueprint;
        self
    }

    pub fn bundle(mut self, bundle: Bundle) -> Self {
        self.props.bundle = bundle;
        self
    }

    pub fn add_on(mut self, add_on: AddOn) -> Self {
        self.props.add_ons.get_or_insert_with(Vec::new).push(add_on);
        self
    }

    pub fn no_add_ons(mut self) -> Self {
        self.props.add_ons = Some(Vec::new());
        self
    }

    pub fn networking(mut self, networking: Networking) -> Self {
        self.props.networking = Some(networking);
        self
    }

    pub fn hardware(mut self, hardware: Hardware) -> Self {
        self.props.hardware = Some(hardware);
        self
    }

    pub fn instance_name(mut self, name: &str) -> Self {
        self.props.instance_name = Some(name.to_string());
        self
    }

    pub fn key_pair_name(mut self, name: &str) -> Self {
        self.props.key_pair_name = Some(name.to_string());
        self
    }

    pub fn user_data(mut self, script: &str) -> Self {
        self.props.user_data = Some(script.to_string());
        self
    }

    pub fn props(self) -> InstanceProps {
        self.props
    }

    pub fn build(self, logical_id: &str) -> Instance {
        Instance::new(logical_id, self.props).expect("Failed to build valid instance from builder")
    }
}

impl Default for InstancePropsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RawDefinitionFile`, bypassing TOML.
pub struct DefinitionBuilder {
    raw: RawDefinitionFile,
}

impl DefinitionBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawDefinitionFile {
                instance: BTreeMap::new(),
            },
        }
    }

    pub fn with_instance(mut self, logical_id: &str, cfg: InstanceConfig) -> Self {
        self.raw.instance.insert(logical_id.to_string(), cfg);
        self
    }

    pub fn raw(self) -> RawDefinitionFile {
        self.raw
    }

    pub fn build(self) -> Definition {
        Definition::try_from(self.raw).expect("Failed to build valid definition from builder")
    }
}

impl Default for DefinitionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal `[instance.<id>]` section.
pub fn instance_config(blueprint: &str, bundle: &str) -> InstanceConfig {
    InstanceConfig {
        blueprint: blueprint.to_string(),
        bundle: bundle.to_string(),
        instance_name: None,
        key_pair_name: None,
        user_data: None,
        networking: None,
        add_on: None,
        hardware: None,
    }
}

/// `[[add_on]]` entry with the given snapshot time.
pub fn snapshot_add_on(time: Option<Deferrable>) -> AddOnConfig {
    AddOnConfig {
        snapshot_time_of_day: time,
        ..AddOnConfig::default()
    }
}
