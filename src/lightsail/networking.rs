// src/lightsail/networking.rs

use crate::render::{MonthlyTransferProperty, NetworkingProperty, PortProperty};
use crate::types::{AccessDirection, AccessType, Protocol};

/// `access_from` value for rules open to every IPv4 address.
pub const ACCESS_FROM_ANYWHERE: &str = "Anywhere (0.0.0.0/0)";

/// A firewall rule opening a port range on an instance.
///
/// For ICMP, `from_port` is the ICMP type and `to_port` the ICMP code, e.g.
/// 8 / -1 for IPv4 ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub access_direction: AccessDirection,
    pub access_from: String,
    pub access_type: AccessType,
    /// Only `lightsail-connect` is currently supported by Lightsail.
    pub cidr_list_aliases: Vec<String>,
    pub cidrs: Vec<String>,
    pub common_name: String,
    pub from_port: Option<i32>,
    pub ipv6_cidrs: Vec<String>,
    pub protocol: Protocol,
    pub to_port: Option<i32>,
}

impl Default for Port {
    fn default() -> Self {
        Self {
            access_direction: AccessDirection::Inbound,
            access_from: ACCESS_FROM_ANYWHERE.to_string(),
            access_type: AccessType::Public,
            cidr_list_aliases: Vec::new(),
            cidrs: Vec::new(),
            common_name: String::new(),
            from_port: None,
            ipv6_cidrs: Vec::new(),
            protocol: Protocol::Tcp,
            to_port: None,
        }
    }
}

impl Port {
    /// A rule for a single port (or ICMP type/code pair).
    pub fn single(common_name: &str, protocol: Protocol, from_port: i32, to_port: i32) -> Self {
        Self {
            common_name: common_name.to_string(),
            protocol,
            from_port: Some(from_port),
            to_port: Some(to_port),
            ..Self::default()
        }
    }

    pub fn http() -> Self {
        Self::single("HTTP", Protocol::Tcp, 80, 80)
    }

    pub fn https() -> Self {
        Self::single("HTTPS", Protocol::Tcp, 443, 443)
    }

    pub fn ssh() -> Self {
        Self::single("SSH", Protocol::Tcp, 22, 22)
    }

    pub fn rdp() -> Self {
        Self::single("RDP", Protocol::Tcp, 3389, 3389)
    }

    pub fn icmp_ping() -> Self {
        Self::single("Ping", Protocol::Icmp, 8, -1)
    }

    pub fn icmpv6_ping() -> Self {
        Self::single("Ping IPv6", Protocol::Icmp, 128, 0)
    }

    /// Restrict the rule to the given IPv4 CIDRs.
    pub fn with_cidrs<I, S>(mut self, cidrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cidrs = cidrs.into_iter().map(Into::into).collect();
        self.access_from = "Custom".to_string();
        self
    }

    pub fn render(&self) -> PortProperty {
        PortProperty {
            access_direction: self.access_direction,
            access_from: self.access_from.clone(),
            access_type: self.access_type,
            cidr_list_aliases: self.cidr_list_aliases.clone(),
            cidrs: self.cidrs.clone(),
            common_name: self.common_name.clone(),
            from_port: self.from_port,
            ipv6_cidrs: self.ipv6_cidrs.clone(),
            protocol: self.protocol,
            to_port: self.to_port,
        }
    }
}

/// Monthly data transfer allowance, in GB.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlyTransfer {
    pub gb_per_month_allocated: Option<String>,
}

impl MonthlyTransfer {
    pub fn gb(amount: impl Into<String>) -> Self {
        Self {
            gb_per_month_allocated: Some(amount.into()),
        }
    }

    pub fn one_tb() -> Self {
        Self::gb("1024")
    }

    pub fn two_tb() -> Self {
        Self::gb("2048")
    }

    pub fn five_tb() -> Self {
        Self::gb("5120")
    }

    /// Resolve a preset by name (`one_tb`, `two_tb`, `five_tb`).
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "one_tb" => Some(Self::one_tb()),
            "two_tb" => Some(Self::two_tb()),
            "five_tb" => Some(Self::five_tb()),
            _ => None,
        }
    }

    pub fn render(&self) -> MonthlyTransferProperty {
        MonthlyTransferProperty {
            gb_per_month_allocated: self.gb_per_month_allocated.clone(),
        }
    }
}

/// Public ports and transfer allowance of an instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Networking {
    pub ports: Vec<Port>,
    pub monthly_transfer: Option<MonthlyTransfer>,
}

impl Networking {
    /// Names accepted by [`Networking::preset`].
    pub const PRESET_NAMES: &'static [&'static str] = &[
        "web_server",
        "web_server_with_ssh",
        "windows_server",
        "ssh_only",
    ];

    pub fn custom(ports: Vec<Port>) -> Self {
        Self {
            ports,
            monthly_transfer: None,
        }
    }

    /// HTTP and HTTPS.
    pub fn web_server() -> Self {
        Self::custom(vec![Port::http(), Port::https()])
    }

    /// HTTP, HTTPS and SSH.
    pub fn web_server_with_ssh() -> Self {
        Self::custom(vec![Port::http(), Port::https(), Port::ssh()])
    }

    /// RDP, HTTP and HTTPS.
    pub fn windows_server() -> Self {
        Self::custom(vec![Port::rdp(), Port::http(), Port::https()])
    }

    pub fn ssh_only() -> Self {
        Self::custom(vec![Port::ssh()])
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "web_server" => Some(Self::web_server()),
            "web_server_with_ssh" => Some(Self::web_server_with_ssh()),
            "windows_server" => Some(Self::windows_server()),
            "ssh_only" => Some(Self::ssh_only()),
            _ => None,
        }
    }

    pub fn with_monthly_transfer(mut self, transfer: MonthlyTransfer) -> Self {
        self.monthly_transfer = Some(transfer);
        self
    }

    pub fn render(&self) -> NetworkingProperty {
        NetworkingProperty {
            ports: self.ports.iter().map(Port::render).collect(),
            monthly_transfer: self.monthly_transfer.as_ref().map(MonthlyTransfer::render),
        }
    }
}
