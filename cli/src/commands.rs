pub mod address;
pub mod interfaces;
pub mod offset;
pub mod ptr;
pub mod range;
pub mod socket;
pub mod split;
pub mod subtract;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "addrkit")]
#[command(about = "Inspect and manipulate IP addresses, ranges and socket addresses.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Collapse IPv4-mapped IPv6 addresses (::ffff:a.b.c.d) to IPv4
    #[arg(long, global = true)]
    pub normalize: bool,

    /// Zero host bits beyond the prefix instead of rejecting the range
    #[arg(long, global = true)]
    pub truncate: bool,

    /// Less decoration; repeat for bare output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Debug logging; repeat for trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Describe one or more addresses
    #[command(alias = "a")]
    Address {
        #[arg(required = true)]
        addresses: Vec<String>,
        /// Describe one of the given addresses, picked at random
        #[arg(long)]
        pick_random: bool,
    },
    /// Describe a CIDR range
    #[command(alias = "r")]
    Range { range: String },
    /// Split an address interval into CIDR ranges
    #[command(alias = "s")]
    Split { first: String, last: String },
    /// Remove a range from an enclosing range
    #[command(alias = "x")]
    Subtract { outer: String, inner: String },
    /// Address at an index of a range
    #[command(alias = "n")]
    Nth { range: String, index: u128 },
    /// Index of an address within a range
    #[command(alias = "i")]
    Index { range: String, address: String },
    /// Describe a socket address
    #[command(alias = "k")]
    Socket {
        socket: String,
        /// Port to assume when SOCKET has none
        #[arg(short = 'p', long)]
        default_port: Option<u16>,
    },
    /// Decode a reverse DNS name
    #[command(alias = "p")]
    Ptr { name: String },
    /// List the networks of local interfaces
    #[command(alias = "l")]
    Interfaces,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
