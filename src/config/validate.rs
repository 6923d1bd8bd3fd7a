// src/config/validate.rs

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::model::{
    AddOnConfig, CustomPortConfig, Definition, HardwareConfig, InstanceConfig,
    MonthlyTransferConfig, NetworkingConfig, PortConfig, RawDefinitionFile,
};
use crate::errors::{LightsailError, Result};
use crate::lightsail::addon::AUTO_SNAPSHOT_ADD_ON_TYPE;
use crate::lightsail::{
    AddOn, Blueprint, Bundle, Disk, Hardware, Instance, InstanceProps, MonthlyTransfer,
    Networking, Port,
};

impl TryFrom<RawDefinitionFile> for Definition {
    type Error = LightsailError;

    fn try_from(raw: RawDefinitionFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_instances(&raw)?;

        let instances = raw
            .instance
            .into_iter()
            .map(|(logical_id, cfg)| build_instance(logical_id, cfg))
            .collect::<Result<Vec<_>>>()?;

        ensure_unique_instance_names(&instances)?;
        Ok(Definition::new_unchecked(instances))
    }
}

fn ensure_has_instances(raw: &RawDefinitionFile) -> Result<()> {
    if raw.instance.is_empty() {
        return Err(LightsailError::ConfigError(
            "definition must contain at least one [instance.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn ensure_unique_instance_names(instances: &[Instance]) -> Result<()> {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
    for inst in instances {
        if let Some(first) = seen.insert(inst.instance_name(), inst.logical_id()) {
            return Err(LightsailError::ConfigError(format!(
                "instances '{}' and '{}' share the instance name '{}'",
                first,
                inst.logical_id(),
                inst.instance_name()
            )));
        }
    }
    Ok(())
}

fn build_instance(logical_id: String, cfg: InstanceConfig) -> Result<Instance> {
    debug!(instance = %logical_id, blueprint = %cfg.blueprint, bundle = %cfg.bundle, "building instance");

    let networking = cfg
        .networking
        .map(|n| build_networking(&logical_id, n))
        .transpose()?;

    let add_ons = cfg
        .add_on
        .map(|entries| {
            entries
                .into_iter()
                .map(|entry| build_add_on(&logical_id, entry))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    let hardware = cfg
        .hardware
        .map(|h| build_hardware(&logical_id, h))
        .transpose()?;

    let props = InstanceProps {
        add_ons,
        blueprint: Blueprint::lookup(cfg.blueprint.trim()),
        bundle: Bundle::of(cfg.bundle.trim()),
        hardware,
        instance_name: cfg.instance_name,
        key_pair_name: cfg.key_pair_name,
        networking,
        user_data: cfg.user_data,
    };

    Instance::new(logical_id, props)
}

fn build_networking(logical_id: &str, cfg: NetworkingConfig) -> Result<Networking> {
    match cfg {
        NetworkingConfig::Preset(name) => Networking::preset(&name).ok_or_else(|| {
            LightsailError::ConfigError(format!(
                "instance '{logical_id}' has unknown networking preset '{name}' (expected one of {:?})",
                Networking::PRESET_NAMES
            ))
        }),
        NetworkingConfig::Custom(custom) => {
            let ports = custom
                .ports
                .into_iter()
                .map(|p| build_port(logical_id, p))
                .collect::<Result<Vec<_>>>()?;

            let mut networking = Networking::custom(ports);
            if let Some(transfer) = custom.monthly_transfer {
                networking = networking.with_monthly_transfer(build_monthly_transfer(
                    logical_id, transfer,
                )?);
            }
            Ok(networking)
        }
    }
}

fn build_port(logical_id: &str, cfg: PortConfig) -> Result<Port> {
    match cfg {
        PortConfig::Preset(name) => match name.as_str() {
            "http" => Ok(Port::http()),
            "https" => Ok(Port::https()),
            "ssh" => Ok(Port::ssh()),
            "rdp" => Ok(Port::rdp()),
            "icmp_ping" => Ok(Port::icmp_ping()),
            "icmpv6_ping" => Ok(Port::icmpv6_ping()),
            other => Err(LightsailError::ConfigError(format!(
                "instance '{logical_id}' has unknown port preset '{other}'"
            ))),
        },
        PortConfig::Custom(custom) => Ok(port_from_custom(custom)),
    }
}

fn port_from_custom(cfg: CustomPortConfig) -> Port {
    let defaults = Port::default();
    Port {
        access_direction: cfg.access_direction.unwrap_or(defaults.access_direction),
        access_from: cfg.access_from.unwrap_or(defaults.access_from),
        access_type: cfg.access_type.unwrap_or(defaults.access_type),
        cidr_list_aliases: cfg.cidr_list_aliases,
        cidrs: cfg.cidrs,
        common_name: cfg.common_name.unwrap_or(defaults.common_name),
        from_port: cfg.from_port,
        ipv6_cidrs: cfg.ipv6_cidrs,
        protocol: cfg.protocol.unwrap_or(defaults.protocol),
        to_port: cfg.to_port,
    }
}

fn build_monthly_transfer(logical_id: &str, cfg: MonthlyTransferConfig) -> Result<MonthlyTransfer> {
    match cfg {
        MonthlyTransferConfig::Preset(name) => MonthlyTransfer::preset(&name).ok_or_else(|| {
            LightsailError::ConfigError(format!(
                "instance '{logical_id}' has unknown monthly_transfer preset '{name}'"
            ))
        }),
        MonthlyTransferConfig::Explicit {
            gb_per_month_allocated,
        } => Ok(MonthlyTransfer::gb(gb_per_month_allocated)),
    }
}

fn build_add_on(logical_id: &str, cfg: AddOnConfig) -> Result<AddOn> {
    let add_on_type = cfg
        .add_on_type
        .unwrap_or_else(|| AUTO_SNAPSHOT_ADD_ON_TYPE.to_string());

    let add_on = if add_on_type == AUTO_SNAPSHOT_ADD_ON_TYPE {
        AddOn::auto_snapshot(cfg.snapshot_time_of_day)?
    } else {
        if cfg.snapshot_time_of_day.is_some() {
            return Err(LightsailError::ConfigError(format!(
                "instance '{logical_id}': snapshot_time_of_day only applies to {AUTO_SNAPSHOT_ADD_ON_TYPE} add-ons (got add_on_type '{add_on_type}')"
            )));
        }
        AddOn {
            add_on_type,
            ..AddOn::default()
        }
    };

    Ok(match cfg.status {
        Some(status) => add_on.with_status(status),
        None => add_on,
    })
}

fn build_hardware(logical_id: &str, cfg: HardwareConfig) -> Result<Hardware> {
    let mut hardware = match (cfg.system_disk_size, cfg.disks) {
        (Some(_), Some(_)) => {
            return Err(LightsailError::ConfigError(format!(
                "instance '{logical_id}': hardware takes either system_disk_size or disks, not both"
            )));
        }
        (Some(system_size), None) => Hardware::basic(&system_size, cfg.data_disk_sizes)?,
        (None, disks) => {
            if !cfg.data_disk_sizes.is_empty() {
                return Err(LightsailError::ConfigError(format!(
                    "instance '{logical_id}': data_disk_sizes requires system_disk_size"
                )));
            }
            Hardware {
                disks: disks.map(|list| {
                    list.into_iter()
                        .map(|d| Disk {
                            attached_to: d.attached_to,
                            attachment_state: d.attachment_state,
                            disk_name: d.disk_name,
                            iops: d.iops,
                            is_system_disk: d.is_system_disk,
                            path: d.path,
                            size_in_gb: d.size_in_gb,
                        })
                        .collect()
                }),
                ..Hardware::default()
            }
        }
    };

    hardware.cpu_count = cfg.cpu_count;
    hardware.ram_size_in_gb = cfg.ram_size_in_gb;
    Ok(hardware)
}
