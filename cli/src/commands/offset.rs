use addrkit_common::config::Config;
use addrkit_core::{index_in_range, is_range_index_valid, nth_address_in_range};
use anyhow::{Context, bail};

use crate::terminal::format::{colored_address, colored_range};
use crate::terminal::print;

pub fn nth(range: &str, index: u128, cfg: &Config) -> anyhow::Result<()> {
    let range = cfg.parse_range(range).with_context(|| format!("Failed to parse range {range:?}"))?;
    if !is_range_index_valid(&range, index) {
        bail!("Index {index} is out of bounds for {range}");
    }

    let addr = nth_address_in_range(&range, index);
    print::header("address in range", cfg.quiet);
    print::set_key_width(&["Range", "Index", "Address"]);
    print::aligned_line("Range", colored_range(&range));
    print::aligned_line("Index", index.to_string());
    print::aligned_line("Address", colored_address(&addr));
    Ok(())
}

pub fn index(range: &str, address: &str, cfg: &Config) -> anyhow::Result<()> {
    let range = cfg.parse_range(range).with_context(|| format!("Failed to parse range {range:?}"))?;
    let addr = cfg.parse_address(address).with_context(|| format!("Failed to parse {address:?}"))?;
    if !range.contains(&addr) {
        bail!("{addr} is not within {range}");
    }

    let index = index_in_range(&range, &addr);
    print::header("index in range", cfg.quiet);
    print::set_key_width(&["Range", "Address", "Index"]);
    print::aligned_line("Range", colored_range(&range));
    print::aligned_line("Address", colored_address(&addr));
    print::aligned_line("Index", index.to_string());
    Ok(())
}
