//! IPv4 subnet arithmetic
//!
//! Derived values for the facade's query surface. These are pure
//! functions of gateway and netmask with no hidden state, so they are
//! unit-testable without any hardware or stack behind them.

use core::net::Ipv4Addr;

/// Directed broadcast address: `gateway | !netmask`.
#[must_use]
pub const fn broadcast(gateway: Ipv4Addr, netmask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from_bits(gateway.to_bits() | !netmask.to_bits())
}

/// Network identifier: `gateway & netmask`.
#[must_use]
pub const fn network_id(gateway: Ipv4Addr, netmask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from_bits(gateway.to_bits() & netmask.to_bits())
}

/// CIDR prefix length: population count of the netmask.
#[must_use]
pub const fn subnet_cidr(netmask: Ipv4Addr) -> u8 {
    netmask.to_bits().count_ones() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_c_round_trip() {
        let gw = Ipv4Addr::new(192, 168, 1, 1);
        let mask = Ipv4Addr::new(255, 255, 255, 0);

        assert_eq!(network_id(gw, mask), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(broadcast(gw, mask), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(subnet_cidr(mask), 24);
    }

    #[test]
    fn non_octet_aligned_mask() {
        let gw = Ipv4Addr::new(10, 0, 37, 1);
        let mask = Ipv4Addr::new(255, 255, 240, 0); // /20

        assert_eq!(network_id(gw, mask), Ipv4Addr::new(10, 0, 32, 0));
        assert_eq!(broadcast(gw, mask), Ipv4Addr::new(10, 0, 47, 255));
        assert_eq!(subnet_cidr(mask), 20);
    }

    #[test]
    fn cidr_spans_full_range() {
        assert_eq!(subnet_cidr(Ipv4Addr::new(0, 0, 0, 0)), 0);
        assert_eq!(subnet_cidr(Ipv4Addr::new(255, 0, 0, 0)), 8);
        assert_eq!(subnet_cidr(Ipv4Addr::new(255, 255, 255, 255)), 32);
    }

    #[test]
    fn point_to_point_mask_has_no_hosts() {
        let gw = Ipv4Addr::new(172, 16, 0, 9);
        let mask = Ipv4Addr::new(255, 255, 255, 255);

        assert_eq!(network_id(gw, mask), gw);
        assert_eq!(broadcast(gw, mask), gw);
    }
}
