use addrkit_common::config::Config;
use addrkit_common::{AddressFamily, SocketAddress};
use addrkit_core::sockaddr::{
    dualstack_socket_address, normalize_socket_address, to_family, to_family_for_bind,
};
use addrkit_protocols::Packed;
use addrkit_protocols::hex::to_hex;
use anyhow::Context;
use colored::*;

use crate::terminal::format::colored_address;
use crate::terminal::print;

pub fn socket(input: &str, default_port: Option<u16>, cfg: &Config) -> anyhow::Result<()> {
    let parsed = match default_port {
        Some(port) => SocketAddress::parse_with_default_port(input, port),
        None => input.parse(),
    };
    let mut socket: SocketAddress =
        parsed.with_context(|| format!("Failed to parse socket address {input:?}"))?;
    if cfg.normalize {
        socket = normalize_socket_address(&socket);
    }

    print::header("socket address", cfg.quiet);
    print::set_key_width(&["Socket", "Host", "Port", "Packed", "Dualstack", "IPv4", "IPv6", "IPv6 bind"]);
    print::aligned_line("Socket", socket.to_string());
    if cfg.quiet > 1 {
        return Ok(());
    }
    print::aligned_line("Host", colored_address(&socket.host()));
    print::aligned_line("Port", socket.port().to_string());
    print::aligned_line("Packed", to_hex(&socket.to_packed()));
    print::aligned_line("Dualstack", dualstack_socket_address(&socket).to_string());

    let mappings = [
        ("IPv4", to_family(AddressFamily::Inet, &socket)),
        ("IPv6", to_family(AddressFamily::Inet6, &socket)),
        ("IPv6 bind", to_family_for_bind(AddressFamily::Inet6, &socket)),
    ];
    for (key, mapped) in mappings {
        let value: ColoredString = match mapped {
            Ok(os) => os.to_string().normal(),
            Err(e) => e.to_string().bright_black(),
        };
        print::aligned_line(key, value);
    }
    Ok(())
}
