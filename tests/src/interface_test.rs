use addrkit_common::network::interface::NetworkInterfaceExtension;
use addrkit_common::IpRange;
use addrkit_core::{index_in_range, subtract_range};
use pnet::datalink::{MacAddr, NetworkInterface};

use crate::util::{ip, ni, range, v4, v6};

/*************************************************************
                  Tests for interface ranges
**************************************************************/

#[test]
fn ranges_are_truncated_to_their_network() {
    let ranges: Vec<String> = enp9s0().ranges().iter().map(IpRange::to_string).collect();
    assert_eq!(
        ranges,
        [
            "192.168.0.0/24",
            "2a02:908:8c1:b880::b054/128",
            "2a02:908:8c1:b880::/64",
            "fe80::/64",
        ]
    );
}

#[test]
fn ranges_split_by_family() {
    let iface = enp9s0();
    assert_eq!(iface.ipv4_ranges(), vec![range("192.168.0.0/24")]);
    assert_eq!(iface.ipv6_ranges().len(), 3);
    assert!(iface.ipv6_ranges().iter().all(|r| r.host().is_ipv6()));

    assert!(eth1().ipv6_ranges().is_empty());
    assert!(ipv6leakintrf0().ipv4_ranges().is_empty());
}

#[test]
fn addresses_keep_host_bits() {
    assert_eq!(
        lo().addresses(),
        vec![ip("127.0.0.1"), ip("::1")]
    );
    assert_eq!(tun0().addresses()[0], ip("10.96.0.57"));
}

#[test]
fn every_address_lies_in_its_range() {
    for iface in [lo(), enp9s0(), tun0(), ipv6leakintrf0(), eth1()] {
        for (addr, r) in iface.addresses().iter().zip(iface.ranges()) {
            assert!(r.contains(addr), "{} not in {r}", addr);
        }
    }
}

#[test]
fn loopback_range_is_the_whole_slash_8() {
    let r = lo().ranges()[0];
    assert_eq!(r, range("127.0.0.0/8"));
    assert_eq!(index_in_range(&r, &ip("127.0.0.1")), 1);
}

#[test]
fn peers_of_a_tunnel_address() {
    let iface = tun0();
    let own = IpRange::from_host(iface.addresses()[0]);
    let peers = subtract_range(&iface.ranges()[0], &own).unwrap();
    assert_eq!(peers.len(), 16);
    assert_eq!(peers[0], range("10.96.0.56/32"));
    assert_eq!(peers[15], range("10.96.128.0/17"));
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        65609,
    )
}

fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[
            v4(192, 168, 0, 32, 24),
            v6("2a02:908:8c1:b880::b054", 128),
            v6("2a02:908:8c1:b880:97f7:c408:8dff:b5bf", 64),
            v6("fe80::b3dd:5c39:7c29:48b6", 64),
        ],
        69699,
    )
}

fn tun0() -> NetworkInterface {
    ni(
        "tun0",
        5,
        None,
        &[v4(10, 96, 0, 57, 16), v6("fe80::c137:8964:5a63:efde", 64)],
        69841,
    )
}

fn ipv6leakintrf0() -> NetworkInterface {
    ni(
        "ipv6leakintrf0",
        6,
        Some(MacAddr::new(0xd2, 0x25, 0xd4, 0x9f, 0x18, 0xfd)),
        &[v6("fdeb:446c:912d:8da::", 64), v6("fe80::7f87:ff4a:9ad8:d2f0", 64)],
        65731,
    )
}

fn eth1() -> NetworkInterface {
    ni(
        "eth1",
        4,
        Some(MacAddr::new(0x52, 0x54, 0x00, 0x12, 0x34, 0x56)),
        &[v4(10, 0, 0, 15, 24)],
        69699,
    )
}
