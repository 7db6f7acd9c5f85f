mod commands;
mod terminal;

use addrkit_common::config::Config;
use commands::{
    CommandLine, Commands, address, interfaces, offset, ptr, range, socket, split, subtract,
};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        normalize: commands.normalize,
        truncate: commands.truncate,
        quiet: commands.quiet,
    };

    let result = match commands.command {
        Commands::Address {
            addresses,
            pick_random,
        } => address::address(&addresses, pick_random, &cfg),
        Commands::Range { range } => range::range(&range, &cfg),
        Commands::Split { first, last } => split::split(&first, &last, &cfg),
        Commands::Subtract { outer, inner } => subtract::subtract(&outer, &inner, &cfg),
        Commands::Nth { range, index } => offset::nth(&range, index, &cfg),
        Commands::Index { range, address } => offset::index(&range, &address, &cfg),
        Commands::Socket {
            socket,
            default_port,
        } => socket::socket(&socket, default_port, &cfg),
        Commands::Ptr { name } => ptr::ptr(&name, &cfg),
        Commands::Interfaces => interfaces::interfaces(&cfg),
    };

    print::end_of_program(cfg.quiet);
    result
}
