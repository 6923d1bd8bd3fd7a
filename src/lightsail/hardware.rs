// src/lightsail/hardware.rs

use tracing::debug;

use crate::errors::{LightsailError, Result};
use crate::render::{DiskProperty, HardwareProperty};

/// Device path of the system disk created by [`Hardware::basic`].
pub const SYSTEM_DISK_PATH: &str = "/dev/xvda";

/// Data disks get `/dev/xvdb` through `/dev/xvdz`.
pub const MAX_DATA_DISKS: usize = 25;

/// A disk attached to an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk {
    pub attached_to: Option<String>,
    /// Deprecated by Lightsail in favour of `is_attached`; passed through as-is.
    pub attachment_state: Option<String>,
    pub disk_name: String,
    pub iops: Option<u32>,
    pub is_system_disk: bool,
    pub path: String,
    pub size_in_gb: Option<String>,
}

impl Disk {
    pub fn new(disk_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            attached_to: None,
            attachment_state: None,
            disk_name: disk_name.into(),
            iops: None,
            is_system_disk: false,
            path: path.into(),
            size_in_gb: None,
        }
    }

    /// The disk the operating system is loaded on.
    pub fn system_disk(
        disk_name: impl Into<String>,
        path: impl Into<String>,
        size_in_gb: impl Into<String>,
    ) -> Self {
        Self {
            is_system_disk: true,
            size_in_gb: Some(size_in_gb.into()),
            ..Self::new(disk_name, path)
        }
    }

    pub fn data_disk(
        disk_name: impl Into<String>,
        path: impl Into<String>,
        size_in_gb: impl Into<String>,
        iops: Option<u32>,
    ) -> Self {
        Self {
            iops,
            size_in_gb: Some(size_in_gb.into()),
            ..Self::new(disk_name, path)
        }
    }

    pub fn render(&self) -> DiskProperty {
        DiskProperty {
            attached_to: self.attached_to.clone(),
            attachment_state: self.attachment_state.clone(),
            disk_name: self.disk_name.clone(),
            iops: self.iops,
            is_system_disk: self.is_system_disk,
            path: self.path.clone(),
            size_in_gb: self.size_in_gb.clone(),
        }
    }
}

/// vCPU count, attached disks and RAM of an instance.
///
/// `cpu_count` and `ram_size_in_gb` are reported by Lightsail and normally left
/// unset. Attaching or detaching a disk restarts the instance, which resets its
/// public IP unless a static IP is attached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hardware {
    pub cpu_count: Option<u32>,
    pub disks: Option<Vec<Disk>>,
    pub ram_size_in_gb: Option<u32>,
}

impl Hardware {
    /// A system disk `Disk1` on `/dev/xvda` plus one data disk per entry of
    /// `data_disk_sizes`, named `Disk2`, `Disk3`, ... on `/dev/xvdb`,
    /// `/dev/xvdc`, ...
    pub fn basic<I, S>(system_disk_size: &str, data_disk_sizes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let data_disk_sizes: Vec<String> = data_disk_sizes.into_iter().map(Into::into).collect();
        if data_disk_sizes.len() > MAX_DATA_DISKS {
            return Err(LightsailError::ConfigError(format!(
                "at most {MAX_DATA_DISKS} data disks are supported (got {})",
                data_disk_sizes.len()
            )));
        }

        let mut disks = Vec::with_capacity(data_disk_sizes.len() + 1);
        disks.push(Disk::system_disk("Disk1", SYSTEM_DISK_PATH, system_disk_size));

        for (index, size) in data_disk_sizes.into_iter().enumerate() {
            let letter = char::from(b'b' + index as u8);
            disks.push(Disk::data_disk(
                format!("Disk{}", index + 2),
                format!("/dev/xvd{letter}"),
                size,
                None,
            ));
        }

        debug!(disks = disks.len(), "built basic hardware layout");

        Ok(Self {
            disks: Some(disks),
            ..Self::default()
        })
    }

    pub fn render(&self) -> HardwareProperty {
        HardwareProperty {
            cpu_count: self.cpu_count,
            disks: self
                .disks
                .as_ref()
                .map(|disks| disks.iter().map(Disk::render).collect()),
            ram_size_in_gb: self.ram_size_in_gb,
        }
    }
}
