//! Interop with `pnet` networks and the host's interfaces.

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use tracing::debug;

use crate::network::address::IpAddress;
use crate::network::range::IpRange;

impl From<Ipv4Network> for IpRange {
    fn from(net: Ipv4Network) -> Self {
        IpRange::new(IpAddress::V4(net.ip()), i32::from(net.prefix()))
    }
}

impl From<Ipv6Network> for IpRange {
    fn from(net: Ipv6Network) -> Self {
        IpRange::new(IpAddress::V6(net.ip()), i32::from(net.prefix()))
    }
}

/// Interface networks carry the interface's own address as host, so the
/// conversion truncates: `192.168.1.17/24` becomes `192.168.1.0/24`.
impl From<IpNetwork> for IpRange {
    fn from(net: IpNetwork) -> Self {
        match net {
            IpNetwork::V4(v4) => v4.into(),
            IpNetwork::V6(v6) => v6.into(),
        }
    }
}

pub trait NetworkInterfaceExtension {
    /// Every configured address of the interface.
    fn addresses(&self) -> Vec<IpAddress>;
    /// Every attached network, truncated to its CIDR range.
    fn ranges(&self) -> Vec<IpRange>;
    fn ipv4_ranges(&self) -> Vec<IpRange>;
    fn ipv6_ranges(&self) -> Vec<IpRange>;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn addresses(&self) -> Vec<IpAddress> {
        self.ips.iter().map(|net| IpAddress::from(net.ip())).collect()
    }

    fn ranges(&self) -> Vec<IpRange> {
        self.ips.iter().copied().map(IpRange::from).collect()
    }

    fn ipv4_ranges(&self) -> Vec<IpRange> {
        self.ips
            .iter()
            .filter_map(|ip| {
                if let IpNetwork::V4(ipv4) = ip {
                    Some(IpRange::from(*ipv4))
                } else {
                    None
                }
            })
            .collect()
    }

    fn ipv6_ranges(&self) -> Vec<IpRange> {
        self.ips
            .iter()
            .filter_map(|ip| {
                if let IpNetwork::V6(ipv6) = ip {
                    Some(IpRange::from(*ipv6))
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Up interfaces that carry at least one address, loopback included.
pub fn get_addressed_interfaces() -> Vec<NetworkInterface> {
    let all = datalink::interfaces();
    let total = all.len();
    let addressed: Vec<NetworkInterface> = all
        .into_iter()
        .filter(|i| i.is_up() && !i.ips.is_empty())
        .collect();
    debug!("{} of {} interfaces are up and addressed", addressed.len(), total);
    addressed
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
