//! IP stack adapter
//!
//! The crate never talks to the IP stack directly; everything goes
//! through [`NetStack`]. On ESP32 targets an implementation wraps the
//! platform adapter calls (IP info get/set, DHCP client start/stop,
//! DNS server slots, hostname, IPv6 link-local creation). Host tests
//! use an in-memory mock.

use core::net::{Ipv4Addr, Ipv6Addr};

use crate::driver::error::NetResult;

/// Interface address information: address, gateway, netmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpInfo {
    /// Interface address
    pub ip: Ipv4Addr,
    /// Default gateway
    pub gateway: Ipv4Addr,
    /// Subnet mask
    pub netmask: Ipv4Addr,
}

impl IpInfo {
    /// All-zero info, used to clear a static assignment.
    pub const UNSET: Self = Self {
        ip: Ipv4Addr::UNSPECIFIED,
        gateway: Ipv4Addr::UNSPECIFIED,
        netmask: Ipv4Addr::UNSPECIFIED,
    };

    /// Create address info for a static assignment.
    #[must_use]
    pub const fn new(ip: Ipv4Addr, gateway: Ipv4Addr, netmask: Ipv4Addr) -> Self {
        Self {
            ip,
            gateway,
            netmask,
        }
    }
}

/// Outcome of a DHCP client transition request.
///
/// Stacks report "already in the target state" distinctly from a real
/// rejection; the facade tolerates the former and surfaces the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DhcpChange {
    /// The client changed state.
    Changed,
    /// The client was already in the requested state.
    AlreadyInState,
}

/// Adapter over the platform IP stack for one Ethernet interface.
pub trait NetStack {
    /// Current address info, or `None` when the interface has none yet.
    fn ip_info(&self) -> Option<IpInfo>;

    /// Install static address info (or [`IpInfo::UNSET`] to clear it).
    fn set_ip_info(&mut self, info: &IpInfo) -> NetResult<()>;

    /// Start the DHCP client.
    fn dhcp_start(&mut self) -> NetResult<DhcpChange>;

    /// Stop the DHCP client.
    fn dhcp_stop(&mut self) -> NetResult<DhcpChange>;

    /// Install a DNS server into slot 0 or 1.
    fn set_dns(&mut self, slot: u8, addr: Ipv4Addr);

    /// DNS server in the given slot; unspecified when the slot is unset.
    fn dns(&self, slot: u8) -> Ipv4Addr;

    /// Hostname assigned to the interface, if any.
    fn hostname(&self) -> Option<&str>;

    /// Assign the interface hostname.
    fn set_hostname(&mut self, hostname: &str) -> NetResult<()>;

    /// Create the IPv6 link-local address for the interface.
    fn enable_ipv6(&mut self) -> NetResult<()>;

    /// IPv6 link-local address, once created.
    fn ipv6_link_local(&self) -> Option<Ipv6Addr>;
}
