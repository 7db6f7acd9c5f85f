use addrkit_common::config::Config;
use addrkit_core::subtract_range;
use anyhow::Context;

use crate::terminal::format::colored_range;
use crate::terminal::print;

pub fn subtract(outer: &str, inner: &str, cfg: &Config) -> anyhow::Result<()> {
    let outer_range = cfg.parse_range(outer).with_context(|| format!("Failed to parse range {outer:?}"))?;
    let inner_range = cfg.parse_range(inner).with_context(|| format!("Failed to parse range {inner:?}"))?;

    let diff = subtract_range(&outer_range, &inner_range)?;

    print::header(&format!("{outer_range} minus {inner_range}"), cfg.quiet);
    print::numbered_list(diff.iter().map(colored_range));
    Ok(())
}
