use addrkit_common::config::Config;
use addrkit_common::network::address::choose_random_address;
use addrkit_common::network::transition::{
    compat_ipv4_address, embedded_ipv4_client_address, isatap_ipv4_address, mapped_ipv4_address,
    six_to_four_ipv4_address, teredo_info,
};
use addrkit_common::IpAddress;
use addrkit_protocols::hex::{ipv6_to_colonless_hex, to_hex};
use addrkit_protocols::{Packed, to_ptr_string};
use anyhow::Context;
use colored::*;

use crate::terminal::format::{address_type_str, colored_address, yes_no};
use crate::terminal::print;

const KEYS: &[&str] = &[
    "Address", "Type", "URI", "Packed", "Hex", "PTR", "Any", "Loopback", "Normalized",
    "Dualstack", "Compat", "Mapped", "6to4", "ISATAP", "Teredo", "Client",
];

pub fn address(inputs: &[String], pick_random: bool, cfg: &Config) -> anyhow::Result<()> {
    let addresses: Vec<IpAddress> = inputs
        .iter()
        .map(|s| cfg.parse_address(s).with_context(|| format!("Failed to parse {s:?}")))
        .collect::<anyhow::Result<_>>()?;

    let chosen: Vec<IpAddress> = if pick_random {
        choose_random_address(&addresses).into_iter().collect()
    } else {
        addresses
    };

    print::set_key_width(KEYS);
    for addr in &chosen {
        print::header(&format!("{} address", addr.family()), cfg.quiet);
        describe(addr, cfg.quiet);
    }
    Ok(())
}

fn describe(addr: &IpAddress, q_level: u8) {
    print::aligned_line("Address", colored_address(addr));
    if q_level > 1 {
        return;
    }
    print::aligned_line("Type", address_type_str(addr));
    print::aligned_line("URI", addr.to_uri_string());
    print::aligned_line("Packed", to_hex(&addr.to_packed()));
    if addr.is_ipv6() {
        print::aligned_line("Hex", ipv6_to_colonless_hex(addr));
    }
    print::aligned_line("PTR", to_ptr_string(addr));
    print::aligned_line("Any", yes_no(addr.is_any()));
    let loopback = match (addr.is_loopback(), addr.is_canonical_loopback()) {
        (true, false) => "yes (non-canonical)".yellow(),
        (is_loopback, _) => yes_no(is_loopback),
    };
    print::aligned_line("Loopback", loopback);
    print::aligned_line("Normalized", colored_address(&addr.normalized()));
    print::aligned_line("Dualstack", colored_address(&addr.dualstack()));

    let embedded = [
        ("Compat", compat_ipv4_address(addr)),
        ("Mapped", mapped_ipv4_address(addr)),
        ("6to4", six_to_four_ipv4_address(addr)),
        ("ISATAP", isatap_ipv4_address(addr)),
    ];
    for (key, v4) in embedded {
        if let Some(v4) = v4 {
            print::aligned_line(key, colored_address(&v4));
        }
    }
    if let Some(teredo) = teredo_info(addr) {
        print::aligned_line(
            "Teredo",
            format!(
                "server {} flags {:#06x} port {} client {}",
                teredo.server, teredo.flags, teredo.port, teredo.client
            ),
        );
    }
    if let Some(client) = embedded_ipv4_client_address(addr) {
        print::aligned_line("Client", colored_address(&client));
    }
}
