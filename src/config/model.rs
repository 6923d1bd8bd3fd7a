// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::lightsail::Instance;
use crate::types::{AccessDirection, AccessType, AddOnStatus, Deferrable, Protocol};

/// Definition file as read from TOML, before any semantic checks.
///
/// ```toml
/// [instance.Web]
/// blueprint = "amazon_linux_2023"
/// bundle = "small_3_0"
/// key_pair_name = "DemoKeyPair"
/// networking = "web_server_with_ssh"
///
/// [[instance.Web.add_on]]
/// snapshot_time_of_day = "18:00"
///
/// [instance.Web.hardware]
/// system_disk_size = "40"
/// data_disk_sizes = ["100"]
/// ```
///
/// Keys under `[instance]` are the logical ids of the instances.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDefinitionFile {
    #[serde(default)]
    pub instance: BTreeMap<String, InstanceConfig>,
}

/// `[instance.<logical_id>]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceConfig {
    /// Blueprint id, e.g. `"amazon_linux_2023"` or `"wordpress"`.
    pub blueprint: String,

    /// Bundle id, e.g. `"small_3_0"`.
    pub bundle: String,

    /// Physical name; derived from the logical id when omitted.
    #[serde(default)]
    pub instance_name: Option<String>,

    #[serde(default)]
    pub key_pair_name: Option<String>,

    /// Launch script passed to the instance verbatim.
    #[serde(default)]
    pub user_data: Option<String>,

    #[serde(default)]
    pub networking: Option<NetworkingConfig>,

    /// `[[instance.<id>.add_on]]` entries. Omitting the key entirely yields
    /// one default `AutoSnapshot` add-on; `add_on = []` disables add-ons.
    #[serde(default)]
    pub add_on: Option<Vec<AddOnConfig>>,

    #[serde(default)]
    pub hardware: Option<HardwareConfig>,
}

/// Either a preset name (`"web_server"`, `"web_server_with_ssh"`,
/// `"windows_server"`, `"ssh_only"`) or an explicit port list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NetworkingConfig {
    Preset(String),
    Custom(CustomNetworkingConfig),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomNetworkingConfig {
    #[serde(default)]
    pub ports: Vec<PortConfig>,

    #[serde(default)]
    pub monthly_transfer: Option<MonthlyTransferConfig>,
}

/// Either a preset name (`"http"`, `"https"`, `"ssh"`, `"rdp"`,
/// `"icmp_ping"`, `"icmpv6_ping"`) or a full rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PortConfig {
    Preset(String),
    Custom(CustomPortConfig),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomPortConfig {
    #[serde(default)]
    pub access_direction: Option<AccessDirection>,
    #[serde(default)]
    pub access_from: Option<String>,
    #[serde(default)]
    pub access_type: Option<AccessType>,
    #[serde(default)]
    pub cidr_list_aliases: Vec<String>,
    #[serde(default)]
    pub cidrs: Vec<String>,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub from_port: Option<i32>,
    #[serde(default)]
    pub ipv6_cidrs: Vec<String>,
    #[serde(default)]
    pub protocol: Option<Protocol>,
    #[serde(default)]
    pub to_port: Option<i32>,
}

/// Either a preset name (`"one_tb"`, `"two_tb"`, `"five_tb"`) or
/// `{ gb_per_month_allocated = "..." }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MonthlyTransferConfig {
    Preset(String),
    Explicit { gb_per_month_allocated: String },
}

/// `[[instance.<id>.add_on]]` entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddOnConfig {
    /// Defaults to `"AutoSnapshot"`.
    #[serde(default)]
    pub add_on_type: Option<String>,

    /// Defaults to `Enabled`.
    #[serde(default)]
    pub status: Option<AddOnStatus>,

    /// `HH:00` in UTC, or a deferred value such as `{ ref = "SnapshotTime" }`.
    /// Defaults to `"06:00"`.
    #[serde(default)]
    pub snapshot_time_of_day: Option<Deferrable>,
}

/// `[instance.<id>.hardware]` section.
///
/// Use either the `system_disk_size` / `data_disk_sizes` shorthand or an
/// explicit `disks` list, not both.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HardwareConfig {
    #[serde(default)]
    pub system_disk_size: Option<String>,
    #[serde(default)]
    pub data_disk_sizes: Vec<String>,
    #[serde(default)]
    pub disks: Option<Vec<DiskConfig>>,
    #[serde(default)]
    pub cpu_count: Option<u32>,
    #[serde(default)]
    pub ram_size_in_gb: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiskConfig {
    pub disk_name: String,
    pub path: String,
    #[serde(default)]
    pub size_in_gb: Option<String>,
    #[serde(default)]
    pub iops: Option<u32>,
    #[serde(default)]
    pub is_system_disk: bool,
    #[serde(default)]
    pub attached_to: Option<String>,
    #[serde(default)]
    pub attachment_state: Option<String>,
}

/// A validated definition: every instance has been built with its defaults
/// applied and its add-ons checked.
///
/// Obtain one through `Definition::try_from(raw)` or
/// [`crate::config::load_and_validate`].
#[derive(Debug, Clone)]
pub struct Definition {
    instances: Vec<Instance>,
}

impl Definition {
    pub(crate) fn new_unchecked(instances: Vec<Instance>) -> Self {
        Self { instances }
    }

    /// Instances in logical id order.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter()
    }

    pub fn get(&self, logical_id: &str) -> Option<&Instance> {
        self.instances.iter().find(|i| i.logical_id() == logical_id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
