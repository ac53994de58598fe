//! Reserved and private IPv4 ranges that no public geolocation service can
//! place, per <https://en.wikipedia.org/wiki/Reserved_IP_addresses>.

use std::sync::LazyLock;

use crate::net::ip::{IpAddress, IpMask};

static RESERVED_RANGES: LazyLock<Vec<IpMask>> = LazyLock::new(|| {
    [
        // Reserved
        "0.0.0.0/8",
        "192.0.2.0/24",
        "192.88.99.0/24",
        "198.51.100.0/24",
        "203.0.113.0/24",
        "224.0.0.0/4",
        "240.0.0.0/4",
        "255.255.255.255/32",
        // Private
        "100.64.0.0/10",
        "127.0.0.0/8",
        "169.254.0.0/16",
        "172.16.0.0/12",
        "192.0.0.0/24",
        "192.168.0.0/16",
        "198.18.0.0/16",
    ]
    .into_iter()
    .map(|range| range.parse().expect("reserved range literal"))
    .collect()
});

/// Whether `addr` is globally routable, i.e. outside every reserved range
/// and eligible for an external lookup. Stops at the first matching range.
pub fn is_routable(addr: &IpAddress) -> bool {
    !RESERVED_RANGES.iter().any(|range| range.contains(addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routable(s: &str) -> bool {
        is_routable(&s.parse().expect(s))
    }

    #[test]
    fn public_addresses_are_routable() {
        for text in [
            "8.8.8.8",
            "1.1.1.1",
            "147.161.212.100",
            "100.63.255.255",  // just below carrier-grade NAT
            "100.128.0.0",     // just above carrier-grade NAT
            "126.255.255.255", // just below loopback
            "128.0.0.1",       // just above loopback
            "172.15.255.255",  // just below 172.16.0.0/12
            "172.32.0.0",      // just above 172.16.0.0/12
            "192.167.255.255",
            "192.169.0.0",
            "198.19.255.255", // 198.18.0.0/16 is only a /16 here
            "223.255.255.255", // just below multicast
        ] {
            assert!(routable(text), "{text} should be routable");
        }
    }

    #[test]
    fn reserved_addresses_are_not_routable() {
        for text in [
            "0.0.0.0",
            "0.255.255.255",
            "127.0.0.1",
            "127.255.255.255",
            "169.254.1.1",
            "172.16.0.0",
            "172.31.255.255",
            "192.0.0.1",
            "192.0.2.99",
            "192.88.99.1",
            "192.168.0.1",
            "192.168.255.255",
            "198.18.0.1",
            "198.51.100.7",
            "203.0.113.200",
            "100.64.0.0",
            "100.127.255.255",
            "224.0.0.1",
            "239.255.255.255",
            "240.0.0.1",
            "255.255.255.255",
        ] {
            assert!(!routable(text), "{text} should be reserved");
        }
    }
}
