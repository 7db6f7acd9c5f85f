pub mod config;
pub mod error;
pub mod network;

pub use error::AddrError;
pub use network::address::{AddressFamily, IpAddress};
pub use network::range::IpRange;
pub use network::socket::SocketAddress;
