use addrkit_common::config::Config;
use addrkit_protocols::{from_ptr_string, to_ptr_string};
use anyhow::Context;

use crate::terminal::format::colored_address;
use crate::terminal::print;

pub fn ptr(name: &str, cfg: &Config) -> anyhow::Result<()> {
    let mut addr = from_ptr_string(name).with_context(|| format!("Failed to decode {name:?}"))?;
    if cfg.normalize {
        addr = addr.normalized();
    }

    print::header("reverse dns", cfg.quiet);
    print::set_key_width(&["Address", "PTR"]);
    print::aligned_line("Address", colored_address(&addr));
    print::aligned_line("PTR", to_ptr_string(&addr));
    Ok(())
}
