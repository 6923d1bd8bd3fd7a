// src/render.rs

//! Property shapes of the `AWS::Lightsail::Instance` resource.
//!
//! Each facet's `render()` produces one of these structs. They serialize with
//! the PascalCase keys CloudFormation expects, omitting unset optional fields.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::config::Definition;
use crate::errors::Result;
use crate::types::{AccessDirection, AccessType, AddOnStatus, Deferrable, Protocol};

/// CloudFormation type name of a Lightsail instance.
pub const INSTANCE_RESOURCE_TYPE: &str = "AWS::Lightsail::Instance";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoSnapshotAddOnProperty {
    pub snapshot_time_of_day: Deferrable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddOnProperty {
    pub add_on_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_snapshot_add_on_request: Option<AutoSnapshotAddOnProperty>,
    pub status: AddOnStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortProperty {
    pub access_direction: AccessDirection,
    pub access_from: String,
    pub access_type: AccessType,
    pub cidr_list_aliases: Vec<String>,
    pub cidrs: Vec<String>,
    pub common_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    pub ipv6_cidrs: Vec<String>,
    pub protocol: Protocol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonthlyTransferProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gb_per_month_allocated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkingProperty {
    pub ports: Vec<PortProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_transfer: Option<MonthlyTransferProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiskProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_state: Option<String>,
    pub disk_name: String,
    #[serde(rename = "IOPS", skip_serializing_if = "Option::is_none")]
    pub iops: Option<u32>,
    pub is_system_disk: bool,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_gb: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HardwareProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disks: Option<Vec<DiskProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_size_in_gb: Option<u32>,
}

/// The `Properties` block of a Lightsail instance resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceProperties {
    pub add_ons: Vec<AddOnProperty>,
    pub blueprint_id: String,
    pub bundle_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<HardwareProperty>,
    pub instance_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_name: Option<String>,
    pub networking: NetworkingProperty,
    pub user_data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceResource {
    #[serde(rename = "Type")]
    pub resource_type: &'static str,
    pub properties: InstanceProperties,
}

/// Render every instance of a definition, keyed by logical id.
pub fn render_definition(def: &Definition) -> BTreeMap<String, InstanceResource> {
    let resources: BTreeMap<String, InstanceResource> = def
        .instances()
        .map(|inst| (inst.logical_id().to_string(), inst.render()))
        .collect();

    info!(count = resources.len(), "rendered Lightsail instance resources");
    resources
}

/// Render a definition straight to JSON text.
pub fn render_definition_json(def: &Definition, pretty: bool) -> Result<String> {
    let resources = render_definition(def);
    let json = if pretty {
        serde_json::to_string_pretty(&resources)?
    } else {
        serde_json::to_string(&resources)?
    };
    Ok(json)
}
