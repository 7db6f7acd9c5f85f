use std::net::SocketAddr;

use addrkit_common::config::Config;
use addrkit_common::network::netmask::{mask_length_to_address, netmask_to_mask_length};
use addrkit_common::network::transition::{
    embedded_ipv4_client_address, isatap_ipv4_address, six_to_four_ipv4_address,
    six_to_four_ipv6_range, teredo_info,
};
use addrkit_common::{AddrError, AddressFamily, IpAddress, IpRange, SocketAddress};
use addrkit_core::sockaddr::{normalize_std_socket_address, to_family, to_family_for_bind};
use addrkit_core::{interval_to_subnets, nth_address_in_range, plus_n, subtract_range};
use addrkit_protocols::hex::{colonless_hex_to_ipv6, ipv6_to_colonless_hex};
use addrkit_protocols::{from_ptr_string, to_ptr_string, Packed};

use crate::util::{ip, range, sa};

/*************************************************************
                   Tests for value types
**************************************************************/

#[test]
fn ipv4_address_packs_to_its_octets() {
    let addr = ip("1.2.3.4");
    assert_eq!(addr.family(), AddressFamily::Inet);
    assert_eq!(addr.to_packed(), [1, 2, 3, 4]);
}

#[test]
fn truncated_range_drops_host_bits() {
    let r = IpRange::new(ip("129.240.2.3"), 10);
    assert_eq!(r.to_string(), "129.192.0.0/10");
    assert_eq!(r.broadcast_address(), ip("129.255.255.255"));
}

#[test]
fn strict_parse_refuses_host_bits_that_config_truncates() {
    assert_eq!(
        "129.240.2.3/10".parse::<IpRange>(),
        Err(AddrError::NonZeroHostBits)
    );
    let cfg = Config {
        truncate: true,
        ..Config::default()
    };
    assert_eq!(cfg.parse_range("129.240.2.3/10"), Ok(range("129.192.0.0/10")));
}

#[test]
fn netmask_ranges() {
    assert_eq!(range("10.0.0.0/255.0.0.0"), range("10.0.0.0/8"));
    assert_eq!(
        mask_length_to_address(AddressFamily::Inet, 20),
        Ok(ip("255.255.240.0"))
    );
    assert_eq!(netmask_to_mask_length(&ip("ffff:ffff:ffff:ffff::")), Ok(64));
    assert!(netmask_to_mask_length(&ip("255.0.255.0")).is_err());
}

/*************************************************************
                  Tests for range algorithms
**************************************************************/

#[test]
fn subtract_ten_slash_seven_from_everything() {
    let diff = subtract_range(&IpRange::any4(), &range("10.0.0.0/7")).unwrap();
    assert_eq!(diff.len(), 7);
    assert_eq!(diff.first(), Some(&range("8.0.0.0/7")));
    assert_eq!(diff.last(), Some(&range("128.0.0.0/1")));
}

#[test]
fn subtract_rejects_equal_and_foreign_ranges() {
    let r = range("10.0.0.0/8");
    assert!(matches!(
        subtract_range(&r, &r),
        Err(AddrError::NotProperSubRange { .. })
    ));
    assert!(subtract_range(&r, &range("11.0.0.0/16")).is_err());
    assert!(subtract_range(&r, &range("::/128")).is_err());
}

#[test]
fn rfc1918_gap_between_two_private_blocks() {
    let first = plus_n(&range("10.0.0.0/8").broadcast_address(), 1).unwrap();
    let last = plus_n(&range("172.16.0.0/12").network_address(), -1).unwrap();
    let subnets = interval_to_subnets(&first, &last).unwrap();
    assert_eq!(subnets.first(), Some(&range("11.0.0.0/8")));
    assert_eq!(subnets.last(), Some(&range("172.0.0.0/12")));
}

#[test]
fn interval_rejects_reversed_and_mixed_bounds() {
    assert_eq!(
        interval_to_subnets(&ip("10.0.0.2"), &ip("10.0.0.1")),
        Err(AddrError::InvalidInterval)
    );
    assert_eq!(
        interval_to_subnets(&ip("10.0.0.1"), &ip("::1")),
        Err(AddrError::FamilyMismatch)
    );
}

#[test]
fn nth_address_of_a_subnet() {
    assert_eq!(nth_address_in_range(&range("192.168.1.0/24"), 42), ip("192.168.1.42"));
    assert_eq!(plus_n(&ip("255.255.255.255"), 1), None);
    assert_eq!(plus_n(&ip("::"), -1), None);
}

/*************************************************************
                  Tests for transition codecs
**************************************************************/

#[test]
fn six_to_four() {
    assert_eq!(
        six_to_four_ipv4_address(&ip("2002:cf8e:83ca::")),
        Some(ip("207.142.131.202"))
    );
    assert_eq!(
        six_to_four_ipv6_range(&range("192.0.2.4/31")),
        Some(range("2002:c000:204::/47"))
    );
    assert_eq!(six_to_four_ipv6_range(&range("2001:db8::/32")), None);
}

#[test]
fn teredo() {
    let addr = ip("2001:0:4136:e378:8000:63bf:3fff:fdd2");
    let info = teredo_info(&addr).unwrap();
    assert_eq!(info.server, ip("65.54.227.120"));
    assert_eq!(info.flags, 0x8000);
    assert_eq!(info.port, 40000);
    assert_eq!(info.client, ip("192.0.2.45"));
    assert_eq!(embedded_ipv4_client_address(&addr), Some(ip("192.0.2.45")));
    assert_eq!(isatap_ipv4_address(&addr), None);
}

#[test]
fn isatap_is_not_an_embedded_client() {
    let addr = ip("fe80::5efe:c000:201");
    assert_eq!(isatap_ipv4_address(&addr), Some(ip("192.0.2.1")));
    assert_eq!(embedded_ipv4_client_address(&addr), None);
}

/*************************************************************
                  Tests for wire and text forms
**************************************************************/

#[test]
fn packed_any_ranges() {
    assert_eq!(IpRange::any4().to_packed(), [0xc8]);
    assert_eq!(IpRange::any6().to_packed(), [0x00]);
    assert_eq!(IpRange::from_packed(&[200]), Ok(IpRange::any4()));
    assert_eq!(range("10.0.0.0/8").to_packed(), [208, 10]);
    assert!(matches!(
        IpRange::from_packed(&[150]),
        Err(AddrError::InvalidPackedHeader(150))
    ));
}

#[test]
fn ptr_names() {
    assert_eq!(to_ptr_string(&ip("192.0.2.1")), "1.2.0.192.in-addr.arpa");
    assert_eq!(from_ptr_string("1.2.0.192.in-addr.arpa."), Ok(ip("192.0.2.1")));
    assert!(to_ptr_string(&ip("::1")).starts_with("1.0.0.0."));
    assert!(to_ptr_string(&ip("::1")).ends_with(".0.ip6.arpa"));
}

#[test]
fn colonless_hex() {
    let addr = ip("2001:db8::1");
    let hex = ipv6_to_colonless_hex(&addr);
    assert_eq!(hex, "20010db8000000000000000000000001");
    assert_eq!(colonless_hex_to_ipv6(&hex), Ok(addr));
    assert!(colonless_hex_to_ipv6("2001").is_err());
}

/*************************************************************
                 Tests for socket addresses
**************************************************************/

#[test]
fn socket_mapping_for_dual_stack() {
    let v4 = sa("192.0.2.1:80");
    assert_eq!(
        to_family(AddressFamily::Inet6, &v4),
        Ok("[::ffff:192.0.2.1]:80".parse::<SocketAddr>().unwrap())
    );
    assert_eq!(
        to_family(AddressFamily::Inet, &sa("[::]:53")),
        Ok("0.0.0.0:53".parse::<SocketAddr>().unwrap())
    );
    assert!(to_family(AddressFamily::Inet, &sa("[::1]:53")).is_err());
    assert_eq!(
        to_family_for_bind(AddressFamily::Inet6, &sa("0.0.0.0:443")),
        Ok("[::]:443".parse::<SocketAddr>().unwrap())
    );
}

#[test]
fn socket_read_from_os_is_normalized() {
    let os: SocketAddr = "[::ffff:10.1.2.3]:8080".parse().unwrap();
    assert_eq!(normalize_std_socket_address(os), sa("10.1.2.3:8080"));
}

#[test]
fn socket_default_port() {
    assert_eq!(
        SocketAddress::parse_with_default_port("[2001:db8::1]", 443),
        Ok(SocketAddress::new(ip("2001:db8::1"), 443))
    );
    assert_eq!(
        SocketAddress::parse_with_default_port("10.0.0.1:22", 443),
        Ok(SocketAddress::new(ip("10.0.0.1"), 22))
    );
    assert!("10.0.0.1".parse::<SocketAddress>().is_err());
}

#[test]
fn uninitialized_values_display_placeholders() {
    assert_eq!(IpRange::default().to_string(), "<uninitialized IPRange>");
    assert_eq!(SocketAddress::default().to_string(), "<uninitialized SocketAddress>");
    assert!(!IpAddress::Unspecified.is_initialized());
}
