// src/lightsail/addon.rs

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::{LightsailError, Result};
use crate::render::{AddOnProperty, AutoSnapshotAddOnProperty};
use crate::types::{AddOnStatus, Deferrable};

/// Snapshot time used when none is configured.
pub const DEFAULT_SNAPSHOT_TIME_OF_DAY: &str = "06:00";

/// Add-on type name of the automatic snapshot add-on.
pub const AUTO_SNAPSHOT_ADD_ON_TYPE: &str = "AutoSnapshot";

static SNAPSHOT_TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:00$").expect("static regex is valid"));

/// Check a daily snapshot time and return it unchanged.
///
/// - `None` yields the default `"06:00"` without further checks.
/// - Deferred values pass through untouched; they cannot be inspected until
///   the template is deployed.
/// - Known values must look like `HH:00` (otherwise
///   [`LightsailError::SnapshotTimeFormat`]) and the hour must be in `0..=23`
///   (otherwise [`LightsailError::SnapshotTimeRange`]).
pub fn validate_snapshot_time_of_day(value: Option<Deferrable>) -> Result<Deferrable> {
    let Some(value) = value else {
        return Ok(Deferrable::known(DEFAULT_SNAPSHOT_TIME_OF_DAY));
    };

    let Some(time) = value.as_known() else {
        debug!(%value, "skipping validation of deferred snapshot_time_of_day");
        return Ok(value);
    };

    if !SNAPSHOT_TIME_PATTERN.is_match(time) {
        return Err(LightsailError::SnapshotTimeFormat(time.to_string()));
    }

    match time[..2].parse::<u8>() {
        Ok(hour) if hour <= 23 => Ok(value),
        _ => Err(LightsailError::SnapshotTimeRange(time.to_string())),
    }
}

/// Parameters of the automatic snapshot add-on.
///
/// Snapshots are created daily, in UTC, between the configured hour and up to
/// 45 minutes after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSnapshotAddOn {
    snapshot_time_of_day: Deferrable,
}

impl AutoSnapshotAddOn {
    pub fn new(snapshot_time_of_day: Option<Deferrable>) -> Result<Self> {
        let snapshot_time_of_day = validate_snapshot_time_of_day(snapshot_time_of_day)?;
        Ok(Self {
            snapshot_time_of_day,
        })
    }

    pub fn snapshot_time_of_day(&self) -> &Deferrable {
        &self.snapshot_time_of_day
    }

    pub fn render(&self) -> AutoSnapshotAddOnProperty {
        AutoSnapshotAddOnProperty {
            snapshot_time_of_day: self.snapshot_time_of_day.clone(),
        }
    }
}

impl Default for AutoSnapshotAddOn {
    fn default() -> Self {
        Self {
            snapshot_time_of_day: Deferrable::known(DEFAULT_SNAPSHOT_TIME_OF_DAY),
        }
    }
}

/// An optional managed feature attached to an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOn {
    pub add_on_type: String,
    pub auto_snapshot_add_on_request: Option<AutoSnapshotAddOn>,
    pub status: AddOnStatus,
}

impl AddOn {
    /// An enabled automatic snapshot add-on taking snapshots at `time_of_day`
    /// (default `"06:00"`).
    pub fn auto_snapshot(time_of_day: Option<Deferrable>) -> Result<Self> {
        Ok(Self {
            add_on_type: AUTO_SNAPSHOT_ADD_ON_TYPE.to_string(),
            auto_snapshot_add_on_request: Some(AutoSnapshotAddOn::new(time_of_day)?),
            status: AddOnStatus::Enabled,
        })
    }

    pub fn with_status(mut self, status: AddOnStatus) -> Self {
        self.status = status;
        self
    }

    pub fn render(&self) -> AddOnProperty {
        AddOnProperty {
            add_on_type: self.add_on_type.clone(),
            auto_snapshot_add_on_request: self
                .auto_snapshot_add_on_request
                .as_ref()
                .map(AutoSnapshotAddOn::render),
            status: self.status,
        }
    }
}

impl Default for AddOn {
    /// `AutoSnapshot`, enabled, without explicit snapshot parameters.
    fn default() -> Self {
        Self {
            add_on_type: AUTO_SNAPSHOT_ADD_ON_TYPE.to_string(),
            auto_snapshot_add_on_request: None,
            status: AddOnStatus::Enabled,
        }
    }
}
