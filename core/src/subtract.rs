use addrkit_common::network::host_order::HostOrder;
use addrkit_common::{AddrError, IpAddress, IpRange};
use tracing::debug;

/// Computes `outer \ sub` as a chain of sibling ranges, most specific first.
///
/// Walking up from `sub`, each ancestor between `sub` and `outer` has one
/// child that does not contain `sub`; that sibling is emitted. With 8-bit
/// addresses, `outer` = `b7 b6 b5 b4/4` and `sub` = `b7..b0/8` give
///
/// ```text
/// b7 b6 b5 b4 b3 b2 b1 ~b0 /8
/// b7 b6 b5 b4 b3 b2 ~b1    /7
/// b7 b6 b5 b4 b3 ~b2       /6
/// b7 b6 b5 b4 ~b3          /5
/// ```
///
/// The result holds `sub.length() - outer.length()` ranges which, together
/// with `sub`, partition `outer`.
pub fn subtract_range(outer: &IpRange, sub: &IpRange) -> Result<Vec<IpRange>, AddrError> {
    if !sub.is_proper_sub_range_of(outer) {
        return Err(AddrError::NotProperSubRange {
            outer: outer.to_string(),
            inner: sub.to_string(),
        });
    }

    let diff = match sub.host() {
        IpAddress::V4(_) => siblings::<u32>(outer.length(), sub),
        IpAddress::V6(_) => siblings::<u128>(outer.length(), sub),
        IpAddress::Unspecified => unreachable!("proper sub-ranges are initialized"),
    };

    debug!(%outer, %sub, count = diff.len(), "Subtracted range");
    Ok(diff)
}

fn siblings<T: HostOrder>(outer_length: i32, sub: &IpRange) -> Vec<IpRange> {
    let mut ancestor = T::from_address(&sub.host());
    let mut diff = Vec::with_capacity((sub.length() - outer_length) as usize);
    for length in (outer_length + 1..=sub.length()).rev() {
        let boundary = T::ONE << (T::BITS - length as u32);
        diff.push(IpRange::new_unchecked((ancestor ^ boundary).into_address(), length));
        ancestor = ancestor & !boundary;
    }
    diff
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
