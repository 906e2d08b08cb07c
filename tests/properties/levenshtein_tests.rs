use proptest::prelude::*;

use traytrack::search::distance;

proptest! {
    #[test]
    fn test_distance_identity(text in ".{0,24}") {
        prop_assert_eq!(distance(&text, &text), 0);
    }

    #[test]
    fn test_distance_symmetric(a in ".{0,16}", b in ".{0,16}") {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_distance_triangle(a in "[a-e]{0,10}", b in "[a-e]{0,10}", c in "[a-e]{0,10}") {
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }

    #[test]
    fn test_distance_bounded_by_lengths(a in ".{0,16}", b in ".{0,16}") {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    #[test]
    fn test_distance_to_empty_is_length(text in ".{0,24}") {
        prop_assert_eq!(distance(&text, ""), text.chars().count());
    }
}
