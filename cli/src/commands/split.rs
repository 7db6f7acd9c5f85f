use addrkit_common::config::Config;
use addrkit_core::interval_to_subnets;
use anyhow::Context;

use crate::terminal::format::colored_range;
use crate::terminal::print;

pub fn split(first: &str, last: &str, cfg: &Config) -> anyhow::Result<()> {
    let first_addr = cfg.parse_address(first).with_context(|| format!("Failed to parse {first:?}"))?;
    let last_addr = cfg.parse_address(last).with_context(|| format!("Failed to parse {last:?}"))?;

    let subnets = interval_to_subnets(&first_addr, &last_addr)
        .with_context(|| format!("Can't split {first_addr} - {last_addr}"))?;

    print::header(&format!("{} ranges", subnets.len()), cfg.quiet);
    print::numbered_list(subnets.iter().map(colored_range));
    Ok(())
}
