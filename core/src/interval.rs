use addrkit_common::network::bits::Bits;
use addrkit_common::network::host_order::HostOrder;
use addrkit_common::{AddrError, IpAddress, IpRange};
use tracing::debug;

/// Decomposes the inclusive interval `[first, last]` into the shortest
/// ordered list of disjoint CIDR ranges covering exactly that interval.
///
/// ```
/// # use addrkit_core::interval_to_subnets;
/// let first = "10.0.0.1".parse().unwrap();
/// let last = "10.0.0.6".parse().unwrap();
/// let subnets: Vec<String> = interval_to_subnets(&first, &last)
///     .unwrap()
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(subnets, ["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/31", "10.0.0.6/32"]);
/// ```
pub fn interval_to_subnets(first: &IpAddress, last: &IpAddress) -> Result<Vec<IpRange>, AddrError> {
    if first.family() != last.family() {
        return Err(AddrError::FamilyMismatch);
    }
    if !first.is_initialized() {
        return Err(AddrError::Uninitialized);
    }
    if last < first {
        return Err(AddrError::InvalidInterval);
    }

    let subnets = match first {
        IpAddress::V4(_) => cover::<u32>(first, last),
        IpAddress::V6(_) => cover::<u128>(first, last),
        IpAddress::Unspecified => unreachable!("initialized bounds were checked"),
    };

    debug!(%first, %last, count = subnets.len(), "Decomposed interval");
    Ok(subnets)
}

fn cover<T: HostOrder>(first: &IpAddress, last: &IpAddress) -> Vec<IpRange> {
    let last = T::from_address(last);
    let mut cur = T::from_address(first);
    let mut subnets = Vec::new();
    loop {
        let subnet = widest_subnet_at(cur, last);
        subnets.push(subnet);
        let broadcast = T::from_address(&subnet.broadcast_address());
        // Covering the top of the address space ends the walk.
        if broadcast >= last || broadcast == T::MAX {
            break;
        }
        cur = broadcast.wrapping_inc();
    }
    subnets
}

/// The shortest prefix whose network address is `cur` and whose broadcast
/// address does not pass `last`.
///
/// The host part is bounded by the alignment of `cur` (its lowest set bit)
/// and by the number of addresses left (the floor of their log2).
fn widest_subnet_at<T: HostOrder>(cur: T, last: T) -> IpRange {
    let alignment = if cur == T::ZERO {
        T::BITS
    } else {
        cur.find_lsb_set_non_zero()
    };
    let remaining = match (last.to_u128() - cur.to_u128()).checked_add(1) {
        Some(count) => count.log2_floor().unwrap_or(0),
        None => u128::BITS,
    };
    let host_bits = alignment.min(remaining);
    IpRange::new_unchecked(cur.into_address(), (T::BITS - host_bits) as i32)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
