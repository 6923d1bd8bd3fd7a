// src/types.rs

//! Small value types shared by the instance facets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A configuration value that is either known now or resolved later in the
/// deployment pipeline.
///
/// In a definition file a deferred value is written as a table:
///
/// ```toml
/// snapshot_time_of_day = "06:00"                  # known
/// snapshot_time_of_day = { ref = "SnapshotTime" } # deferred
/// ```
///
/// Rendered output uses the CloudFormation intrinsic form, e.g.
/// `{"Ref": "SnapshotTime"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Deferrable {
    Known(String),
    Deferred(DeferredValue),
}

/// Placeholder for a value only known once the template is deployed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredValue {
    /// A template parameter, rendered as `{"Ref": name}`.
    #[serde(rename = "Ref", alias = "ref")]
    Ref(String),
    /// A cross-stack export, rendered as `{"Fn::ImportValue": name}`.
    #[serde(rename = "Fn::ImportValue", alias = "import_value")]
    ImportValue(String),
}

impl Deferrable {
    pub fn known(value: impl Into<String>) -> Self {
        Deferrable::Known(value.into())
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Deferrable::Deferred(DeferredValue::Ref(name.into()))
    }

    pub fn import_value(name: impl Into<String>) -> Self {
        Deferrable::Deferred(DeferredValue::ImportValue(name.into()))
    }

    /// The literal value, or `None` while it is still deferred.
    pub fn as_known(&self) -> Option<&str> {
        match self {
            Deferrable::Known(s) => Some(s),
            Deferrable::Deferred(_) => None,
        }
    }
}

impl From<&str> for Deferrable {
    fn from(value: &str) -> Self {
        Deferrable::Known(value.to_string())
    }
}

impl From<String> for Deferrable {
    fn from(value: String) -> Self {
        Deferrable::Known(value)
    }
}

impl fmt::Display for Deferrable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deferrable::Known(s) => f.write_str(s),
            Deferrable::Deferred(DeferredValue::Ref(name)) => write!(f, "${{Ref:{name}}}"),
            Deferrable::Deferred(DeferredValue::ImportValue(name)) => {
                write!(f, "${{ImportValue:{name}}}")
            }
        }
    }
}

/// Whether an add-on is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AddOnStatus {
    #[default]
    Enabled,
    Disabled,
}

/// Lightsail only supports inbound rules today, but the resource accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessDirection {
    #[default]
    Inbound,
    Outbound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessType {
    #[default]
    Public,
    Private,
}

/// IP protocol of a firewall port rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
    Icmp,
    Icmpv6,
    All,
}
