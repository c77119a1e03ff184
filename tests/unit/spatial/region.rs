//! Tests for region bounds, centers and the closed overlap test

#[cfg(test)]
mod tests {
    use roomcarve::spatial::region::Region;

    // Tests exclusive bounds and area follow the anchor and extents
    // Verified by making end_x inclusive
    #[test]
    fn test_bounds_and_area() {
        let region = Region::new(2, 3, 4, 5);
        assert_eq!(region.end_x(), 6);
        assert_eq!(region.end_y(), 8);
        assert_eq!(region.area(), 20);
        assert_eq!(Region::square(1, 1, 3), Region::new(1, 1, 3, 3));
    }

    // Tests centers round toward the anchor for even and odd extents
    // Verified by rounding the half extent up
    #[test]
    fn test_center_uses_integer_division() {
        assert_eq!(Region::square(1, 1, 2).center(), [2, 2]);
        assert_eq!(Region::square(3, 1, 3).center(), [4, 2]);
        assert_eq!(Region::new(0, 10, 5, 1).center(), [2, 10]);
    }

    // Tests containment is half-open on both axes
    // Verified by accepting cells on the far edge
    #[test]
    fn test_contains_half_open() {
        let region = Region::square(1, 1, 3);
        assert!(region.contains([1, 1]));
        assert!(region.contains([3, 3]));
        assert!(!region.contains([4, 3]));
        assert!(!region.contains([3, 4]));
        assert!(!region.contains([0, 2]));
    }

    // Tests regions separated by a gap do not intersect
    // Verified by inverting the x separation check
    #[test]
    fn test_separated_regions_do_not_intersect() {
        let left = Region::square(1, 1, 3);
        let right = Region::square(5, 1, 3);
        let below = Region::square(1, 5, 3);

        assert!(!left.intersects(&right));
        assert!(!left.intersects(&below));
    }

    // Tests regions sharing only a boundary line still intersect
    // Verified by switching to a strict overlap test
    #[test]
    fn test_touching_regions_intersect() {
        let left = Region::square(1, 1, 3);
        let adjacent = Region::square(4, 1, 3);
        let diagonal = Region::square(4, 4, 2);

        assert!(left.intersects(&adjacent));
        assert!(left.intersects(&diagonal));
        assert!(left.intersects(&left));
    }

    // Tests the overlap test gives the same answer in both directions
    // Verified by dropping the y-axis comparison on one side
    #[test]
    fn test_intersects_is_symmetric() {
        let regions = [
            Region::square(0, 0, 2),
            Region::square(2, 0, 3),
            Region::square(3, 3, 1),
            Region::new(6, 1, 1, 5),
            Region::new(1, 4, 5, 1),
            Region::square(10, 10, 4),
        ];

        for first in &regions {
            for second in &regions {
                assert_eq!(
                    first.intersects(second),
                    second.intersects(first),
                    "{first:?} vs {second:?}"
                );
            }
        }
    }

    // Tests a contained region intersects its container
    // Verified by requiring an edge crossing
    #[test]
    fn test_nested_regions_intersect() {
        let outer = Region::square(0, 0, 10);
        let inner = Region::square(3, 4, 2);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
