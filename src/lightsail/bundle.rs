// src/lightsail/bundle.rs

use std::borrow::Cow;
use std::fmt;

/// Hardware tier (vCPUs, memory, storage, transfer) of an instance.
///
/// Any id accepted by Lightsail can be used through [`Bundle::of`]; the
/// constants cover the `_3_0` generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bundle {
    id: Cow<'static, str>,
}

impl Bundle {
    /// 2 vCPUs, 0.5 GB memory, dual-stack
    pub const NANO_3_0: Bundle = Bundle::preset("nano_3_0");
    /// 2 vCPUs, 1 GB memory, dual-stack
    pub const MICRO_3_0: Bundle = Bundle::preset("micro_3_0");
    /// 2 vCPUs, 2 GB memory, dual-stack
    pub const SMALL_3_0: Bundle = Bundle::preset("small_3_0");
    /// 2 vCPUs, 4 GB memory, dual-stack
    pub const MEDIUM_3_0: Bundle = Bundle::preset("medium_3_0");
    /// 2 vCPUs, 8 GB memory, dual-stack
    pub const LARGE_3_0: Bundle = Bundle::preset("large_3_0");
    /// 4 vCPUs, 16 GB memory, dual-stack
    pub const XLARGE_3_0: Bundle = Bundle::preset("xlarge_3_0");
    /// 8 vCPUs, 32 GB memory, dual-stack
    pub const X2LARGE_3_0: Bundle = Bundle::preset("2xlarge_3_0");
    /// 16 vCPUs, 64 GB memory, dual-stack
    pub const X4LARGE_3_0: Bundle = Bundle::preset("4xlarge_3_0");

    pub const NANO_WIN_3_0: Bundle = Bundle::preset("nano_win_3_0");
    pub const MICRO_WIN_3_0: Bundle = Bundle::preset("micro_win_3_0");
    pub const SMALL_WIN_3_0: Bundle = Bundle::preset("small_win_3_0");
    pub const MEDIUM_WIN_3_0: Bundle = Bundle::preset("medium_win_3_0");
    pub const LARGE_WIN_3_0: Bundle = Bundle::preset("large_win_3_0");
    pub const XLARGE_WIN_3_0: Bundle = Bundle::preset("xlarge_win_3_0");
    pub const X2LARGE_WIN_3_0: Bundle = Bundle::preset("2xlarge_win_3_0");
    pub const X4LARGE_WIN_3_0: Bundle = Bundle::preset("4xlarge_win_3_0");

    /// 2 vCPUs, 0.5 GB memory, IPv6 only
    pub const NANO_IPV6_3_0: Bundle = Bundle::preset("nano_ipv6_3_0");
    pub const MICRO_IPV6_3_0: Bundle = Bundle::preset("micro_ipv6_3_0");
    pub const SMALL_IPV6_3_0: Bundle = Bundle::preset("small_ipv6_3_0");
    pub const MEDIUM_IPV6_3_0: Bundle = Bundle::preset("medium_ipv6_3_0");
    pub const LARGE_IPV6_3_0: Bundle = Bundle::preset("large_ipv6_3_0");
    pub const XLARGE_IPV6_3_0: Bundle = Bundle::preset("xlarge_ipv6_3_0");
    pub const X2LARGE_IPV6_3_0: Bundle = Bundle::preset("2xlarge_ipv6_3_0");
    pub const X4LARGE_IPV6_3_0: Bundle = Bundle::preset("4xlarge_ipv6_3_0");

    pub const NANO_WIN_IPV6_3_0: Bundle = Bundle::preset("nano_win_ipv6_3_0");
    pub const MICRO_WIN_IPV6_3_0: Bundle = Bundle::preset("micro_win_ipv6_3_0");
    pub const SMALL_WIN_IPV6_3_0: Bundle = Bundle::preset("small_win_ipv6_3_0");
    pub const MEDIUM_WIN_IPV6_3_0: Bundle = Bundle::preset("medium_win_ipv6_3_0");
    pub const LARGE_WIN_IPV6_3_0: Bundle = Bundle::preset("large_win_ipv6_3_0");
    pub const XLARGE_WIN_IPV6_3_0: Bundle = Bundle::preset("xlarge_win_ipv6_3_0");
    pub const X2LARGE_WIN_IPV6_3_0: Bundle = Bundle::preset("2xlarge_win_ipv6_3_0");
    pub const X4LARGE_WIN_IPV6_3_0: Bundle = Bundle::preset("4xlarge_win_ipv6_3_0");

    const fn preset(id: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
        }
    }

    pub fn of(id: impl Into<String>) -> Self {
        Self {
            id: Cow::Owned(id.into()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Windows bundles can only host Windows blueprints and vice versa.
    pub fn is_windows(&self) -> bool {
        self.id.contains("_win")
    }

    pub fn is_ipv6_only(&self) -> bool {
        self.id.contains("_ipv6")
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
