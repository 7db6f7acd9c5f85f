use addrkit_common::config::Config;
use addrkit_common::network::netmask::mask_length_to_address;
use addrkit_common::network::transition::six_to_four_ipv6_range;
use addrkit_common::{AddressFamily, IpRange};
use addrkit_core::arithmetic::address_count;
use addrkit_protocols::Packed;
use addrkit_protocols::hex::to_hex;
use anyhow::Context;

use crate::terminal::format::{colored_address, colored_range};
use crate::terminal::print;

pub fn range(input: &str, cfg: &Config) -> anyhow::Result<()> {
    let range: IpRange = cfg
        .parse_range(input)
        .with_context(|| format!("Failed to parse range {input:?}"))?;

    print::header(&format!("{} range", range.family()), cfg.quiet);
    print::set_key_width(&["Range", "Network", "Broadcast", "Size", "Packed", "Netmask", "6to4"]);

    print::aligned_line("Range", colored_range(&range));
    if cfg.quiet > 1 {
        return Ok(());
    }
    print::aligned_line("Network", colored_address(&range.network_address()));
    print::aligned_line("Broadcast", colored_address(&range.broadcast_address()));
    let size = match address_count(&range) {
        Some(count) => count.to_string(),
        None => String::from("2^128"),
    };
    print::aligned_line("Size", size);
    print::aligned_line("Packed", to_hex(&range.to_packed()));
    if range.family() == AddressFamily::Inet {
        let netmask = mask_length_to_address(range.family(), range.length())?;
        print::aligned_line("Netmask", colored_address(&netmask));
    }
    if let Some(six_to_four) = six_to_four_ipv6_range(&range) {
        print::aligned_line("6to4", colored_range(&six_to_four));
    }
    Ok(())
}
