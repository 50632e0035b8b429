//! Network-facing types
//!
//! - [`addr`]: pure IPv4 subnet arithmetic for the derived facade
//!   queries (broadcast, network ID, CIDR)
//! - [`stack`]: the [`NetStack`] adapter over the platform IP stack
//!   (address info, DHCP client, DNS slots, hostname, IPv6)
//!
//! Nothing here owns a wire format; addresses are `core::net` types.

pub mod addr;
pub mod stack;

pub use addr::{broadcast, network_id, subnet_cidr};
pub use stack::{DhcpChange, IpInfo, NetStack};
