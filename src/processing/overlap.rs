//! Closed-interval overlap test.

use crate::models::AddressRange;

/// True when two inclusive ranges share at least one address.
///
/// Ranges that only touch at a single address overlap.
pub fn overlaps(r1: &AddressRange, r2: &AddressRange) -> bool {
    r1.start <= r2.end && r1.end >= r2.start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::convert;

    fn range(start: u64, end: u64) -> AddressRange {
        AddressRange { start, end }
    }

    #[test]
    fn test_self_overlap() {
        for cidr in ["0.0.0.0/0", "10.0.0.0/8", "192.168.1.1/32"] {
            let r = convert(cidr).unwrap();
            assert!(overlaps(&r, &r), "{cidr} should overlap itself");
        }
    }

    #[test]
    fn test_symmetric() {
        let ranges = [
            range(0, 10),
            range(5, 15),
            range(10, 10),
            range(11, 20),
            range(30, 40),
        ];
        for a in &ranges {
            for b in &ranges {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_boundary_inclusive() {
        let r1 = range(100, 199);
        assert!(!overlaps(&r1, &range(200, 299)));
        assert!(overlaps(&r1, &range(199, 299)));
        assert!(!overlaps(&range(0, 99), &r1));
        assert!(overlaps(&range(0, 100), &r1));
    }

    #[test]
    fn test_containment() {
        let outer = convert("10.0.0.0/8").unwrap();
        let inner = convert("10.20.30.0/24").unwrap();
        assert!(overlaps(&outer, &inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_adjacent_blocks() {
        let a = convert("10.0.0.0/24").unwrap();
        let b = convert("10.0.1.0/24").unwrap();
        assert!(!overlaps(&a, &b));
    }
}
