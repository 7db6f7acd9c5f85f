use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use addrkit_common::network::range::truncate_ip_address;
use addrkit_common::{IpAddress, IpRange, SocketAddress};
use addrkit_core::arithmetic::address_count;
use addrkit_core::{
    index_in_range, interval_to_subnets, is_range_index_valid, nth_address_in_range, plus_n,
    subtract_range,
};
use addrkit_protocols::Packed;

use crate::util::{ip, range, sa, sample_addresses};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn every_prefix(addr: &IpAddress) -> impl Iterator<Item = IpRange> + '_ {
    (0..=addr.bit_length() as i32).map(move |length| IpRange::new(*addr, length))
}

/// True if `ranges`, sorted, tile `[first, last]` with no gap or overlap.
fn tiles_exactly(mut ranges: Vec<IpRange>, first: &IpAddress, last: &IpAddress) -> bool {
    ranges.sort();
    let mut expected = Some(*first);
    for r in &ranges {
        if expected != Some(r.network_address()) {
            return false;
        }
        expected = plus_n(&r.broadcast_address(), 1);
    }
    ranges.last().map(|r| r.broadcast_address()) == Some(*last)
}

/*************************************************************
                       Round trips
**************************************************************/

#[test]
fn text_round_trips() {
    for addr in sample_addresses() {
        assert_eq!(addr.to_string().parse::<IpAddress>(), Ok(addr));
        for r in every_prefix(&addr) {
            assert_eq!(r.to_string().parse::<IpRange>(), Ok(r), "{r}");
        }
        let socket = SocketAddress::new(addr, 8080);
        assert_eq!(socket.to_string().parse::<SocketAddress>(), Ok(socket));
    }
}

#[test]
fn packed_round_trips() {
    for addr in sample_addresses() {
        assert_eq!(IpAddress::from_packed(&addr.to_packed()), Ok(addr));
        for r in every_prefix(&addr) {
            assert_eq!(IpRange::from_packed(&r.to_packed()), Ok(r), "{r}");
        }
        let socket = SocketAddress::new(addr, 65535);
        assert_eq!(SocketAddress::from_packed(&socket.to_packed()), Ok(socket));
    }
}

#[test]
fn ptr_round_trips() {
    use addrkit_protocols::{from_ptr_string, to_ptr_string};
    for addr in sample_addresses() {
        assert_eq!(from_ptr_string(&to_ptr_string(&addr)), Ok(addr));
    }
}

/*************************************************************
                       Truncation
**************************************************************/

#[test]
fn truncation_is_idempotent() {
    for addr in sample_addresses() {
        for length in 0..=addr.bit_length() as i32 {
            let once = truncate_ip_address(&addr, length);
            assert_eq!(truncate_ip_address(&once, length), once);
            assert!(IpRange::new(addr, length).is_valid());
            assert!(IpRange::new(addr, length).contains(&addr));
        }
    }
}

/*************************************************************
                    Index arithmetic
**************************************************************/

#[test]
fn every_index_of_small_ranges_maps_back() {
    for s in ["10.0.0.0/24", "255.255.255.0/25", "2001:db8::/120", "::/126"] {
        let r = range(s);
        let count = address_count(&r).unwrap();
        for i in 0..count {
            let addr = nth_address_in_range(&r, i);
            assert!(r.contains(&addr));
            assert_eq!(index_in_range(&r, &addr), i);
        }
        assert!(!is_range_index_valid(&r, count));
        assert_eq!(nth_address_in_range(&r, count - 1), r.broadcast_address());
    }
}

#[test]
fn index_edges_of_large_ranges() {
    for r in [IpRange::any4(), IpRange::any6(), range("2001:db8::/32"), range("128.0.0.0/1")] {
        let last = match address_count(&r) {
            Some(count) => count - 1,
            None => u128::MAX,
        };
        for i in [0, 1, last / 2, last] {
            let addr = nth_address_in_range(&r, i);
            assert!(r.contains(&addr));
            assert_eq!(index_in_range(&r, &addr), i);
        }
        assert_eq!(nth_address_in_range(&r, 0), r.network_address());
        assert_eq!(nth_address_in_range(&r, last), r.broadcast_address());
    }
}

/*************************************************************
                    Partition and cover
**************************************************************/

#[test]
fn subtraction_partitions_the_outer_range() {
    let cases = [
        ("0.0.0.0/0", "10.0.0.0/7"),
        ("0.0.0.0/0", "255.255.255.255/32"),
        ("10.0.0.0/8", "10.20.30.40/32"),
        ("192.168.0.0/16", "192.168.128.0/17"),
        ("::/0", "2001:db8::/32"),
        ("2001:db8::/32", "2001:db8:1234:5678::1/128"),
    ];
    for (outer, sub) in cases {
        let (outer, sub) = (range(outer), range(sub));
        let diff = subtract_range(&outer, &sub).unwrap();

        assert_eq!(diff.len() as i32, sub.length() - outer.length());
        for pair in diff.windows(2) {
            assert_eq!(pair[0].length(), pair[1].length() + 1, "each step doubles in size");
        }
        for piece in &diff {
            assert!(piece.is_valid());
            assert!(piece.is_proper_sub_range_of(&outer));
            assert!(!piece.contains(&sub.host()));
        }

        let mut pieces = diff.clone();
        pieces.push(sub);
        assert!(
            tiles_exactly(pieces, &outer.network_address(), &outer.broadcast_address()),
            "{outer} - {sub}"
        );
    }
}

#[test]
fn intervals_are_covered_exactly_and_minimally() {
    let cases = [
        ("0.0.0.0", "255.255.255.255"),
        ("0.0.0.1", "255.255.255.254"),
        ("10.0.0.1", "10.0.0.6"),
        ("1.2.3.4", "1.2.3.4"),
        ("192.168.1.17", "192.168.9.200"),
        ("2001:db8::1", "2001:db8::1:0"),
        ("::", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
    ];
    for (first, last) in cases {
        let (first, last) = (ip(first), ip(last));
        let subnets = interval_to_subnets(&first, &last).unwrap();
        assert!(subnets.windows(2).all(|w| w[0] < w[1]), "output is ordered");
        assert!(tiles_exactly(subnets.clone(), &first, &last), "{first} - {last}");

        // No two neighbours could be merged into their common parent.
        for pair in subnets.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.length() == b.length() && a.length() > 0 {
                let parent = IpRange::new(a.host(), a.length() - 1);
                assert!(parent.host() != a.host() || !parent.contains(&b.host()));
            }
        }
    }
}

#[test]
fn covering_law() {
    for addr in sample_addresses() {
        assert_eq!(
            interval_to_subnets(&addr, &addr),
            Ok(vec![IpRange::from_host(addr)])
        );
    }
    assert_eq!(
        interval_to_subnets(&IpRange::any4().network_address(), &IpRange::any4().broadcast_address()),
        Ok(vec![IpRange::any4()])
    );
}

/*************************************************************
                         Ordering
**************************************************************/

fn assert_strict_total_order<T: Ord + Hash + std::fmt::Debug>(values: &[T]) {
    for a in values {
        assert!(!(a < a), "{a:?} < itself");
        for b in values {
            let relations = [a < b, a == b, b < a].iter().filter(|r| **r).count();
            assert_eq!(relations, 1, "{a:?} vs {b:?}");
            if a == b {
                assert_eq!(hash_of(a), hash_of(b));
            }
            for c in values {
                if a < b && b < c {
                    assert!(a < c, "{a:?} < {b:?} < {c:?}");
                }
            }
        }
    }
}

#[test]
fn address_ordering() {
    let mut values = sample_addresses();
    values.push(IpAddress::Unspecified);
    assert_strict_total_order(&values);

    values.sort();
    assert_eq!(values[0], IpAddress::Unspecified);
    assert_ne!(hash_of(&IpAddress::Unspecified), hash_of(&IpAddress::any4()));
    assert_ne!(hash_of(&IpAddress::Unspecified), hash_of(&IpAddress::any6()));
    assert!(ip("255.255.255.255") < ip("::"));
}

#[test]
fn range_ordering() {
    let mut values: Vec<IpRange> = sample_addresses()
        .iter()
        .flat_map(|addr| {
            [0, 8, 31, 64, 128]
                .into_iter()
                .filter(|len| *len <= addr.bit_length() as i32)
                .map(|len| IpRange::new(*addr, len))
        })
        .collect();
    values.push(IpRange::default());
    values.sort();
    values.dedup();
    assert_strict_total_order(&values);
    assert_eq!(values[0], IpRange::default());
}

#[test]
fn socket_address_ordering() {
    let values = [
        SocketAddress::default(),
        sa("0.0.0.0:0"),
        sa("1.2.3.4:80"),
        sa("1.2.3.4:443"),
        sa("1.2.3.5:1"),
        sa("[::]:0"),
        sa("[::1]:80"),
    ];
    assert_strict_total_order(&values);
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}
