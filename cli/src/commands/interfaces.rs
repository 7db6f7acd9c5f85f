use addrkit_common::config::Config;
use addrkit_common::network::interface::{NetworkInterfaceExtension, get_addressed_interfaces};
use tracing::debug;

use crate::mprint;
use crate::terminal::format::ranges_to_key_value_pair;
use crate::terminal::print;

pub fn interfaces(cfg: &Config) -> anyhow::Result<()> {
    let interfaces = get_addressed_interfaces();
    debug!("Found {} addressed interface(s)", interfaces.len());

    print::header("local networks", cfg.quiet);
    for (idx, interface) in interfaces.iter().enumerate() {
        if idx > 0 && cfg.quiet == 0 {
            mprint!();
        }
        print::tree_head(idx, &interface.name);
        let mut ranges = interface.ranges();
        ranges.sort();
        print::as_tree_one_level(ranges_to_key_value_pair(&ranges));
    }
    Ok(())
}
