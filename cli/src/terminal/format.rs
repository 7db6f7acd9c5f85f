use addrkit_common::{IpAddress, IpRange};
use colored::*;
use std::net::Ipv6Addr;

use crate::terminal::colors;

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

// 2000::/3
fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    0x3F >= first_byte && first_byte >= 0x20
}

pub fn address_type_str(addr: &IpAddress) -> &'static str {
    match addr {
        IpAddress::V4(_) => "IPv4",
        IpAddress::V6(v6) => ipv6_to_type_str(v6),
        IpAddress::Unspecified => "unset",
    }
}

pub fn colored_address(addr: &IpAddress) -> ColoredString {
    match addr {
        IpAddress::V4(_) => addr.to_string().color(colors::IPV4_ADDR),
        IpAddress::V6(_) => addr.to_string().color(colors::IPV6_ADDR),
        IpAddress::Unspecified => addr.to_string().color(colors::UNSET),
    }
}

pub fn colored_range(range: &IpRange) -> ColoredString {
    if !range.is_initialized() {
        return range.to_string().color(colors::UNSET);
    }
    let address: ColoredString = colored_address(&range.host());
    let prefix: ColoredString = range.length().to_string().color(colors::PREFIX);
    format!("{address}{}{prefix}", "/".color(colors::SEPARATOR)).normal()
}

pub fn yes_no(value: bool) -> ColoredString {
    if value { "yes".green() } else { "no".bright_black() }
}

pub fn ranges_to_key_value_pair(ranges: &[IpRange]) -> Vec<(String, ColoredString)> {
    ranges
        .iter()
        .map(|range| (String::from(address_type_str(&range.host())), colored_range(range)))
        .collect()
}
