use crate::error::AddrError;
use crate::network::address::IpAddress;
use crate::network::range::IpRange;

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Collapses IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) to plain IPv4
    /// right after parsing.
    pub normalize: bool,
    /// Accepts ranges with host bits set and zeroes them.
    ///
    /// Without it, `10.1.2.3/8` is rejected.
    pub truncate: bool,
    /// Suppresses headers and decoration.
    pub quiet: u8,
}

impl Config {
    /// Parses an address the way the configuration asks for.
    pub fn parse_address(&self, s: &str) -> Result<IpAddress, AddrError> {
        let addr: IpAddress = s.parse()?;
        if self.normalize {
            return Ok(addr.normalized());
        }
        Ok(addr)
    }

    /// Parses a range, truncating it instead of failing when `truncate` is set.
    pub fn parse_range(&self, s: &str) -> Result<IpRange, AddrError> {
        if self.truncate {
            IpRange::parse_truncating(s)
        } else {
            s.parse()
        }
    }
}
