use super::*;
use proptest::prelude::*;

mod compare {
    use super::*;

    #[test]
    fn test_ignores_case() {
        assert_eq!(compare("Firefox", "FIREFOX"), Ordering::Equal);
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
        assert_eq!(compare("Zoo", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_shorter_prefix_sorts_first() {
        assert_eq!(compare("fire", "Firefox"), Ordering::Less);
        assert_eq!(compare("", "a"), Ordering::Less);
    }

    #[test]
    fn test_non_ascii_folding() {
        assert_eq!(compare("ÉCOLE", "école"), Ordering::Equal);
        assert_eq!(compare("Straße", "STRAßE"), Ordering::Equal);
    }
}

mod compare_prefix {
    use super::*;

    #[test]
    fn test_prefix_is_equal() {
        assert_eq!(compare_prefix("File Manager", "fi"), Ordering::Equal);
        assert_eq!(compare_prefix("File Manager", "FILE MAN"), Ordering::Equal);
        assert_eq!(compare_prefix("File", ""), Ordering::Equal);
    }

    #[test]
    fn test_shorter_string_is_less() {
        assert_eq!(compare_prefix("fi", "file"), Ordering::Less);
    }

    #[test]
    fn test_diverging_string_keeps_order() {
        assert_eq!(compare_prefix("Calculator", "fi"), Ordering::Less);
        assert_eq!(compare_prefix("Gimp", "fi"), Ordering::Greater);
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with("Firefox Browser", "FIREFOX b"));
        assert!(!starts_with("Firefox Browser", "browser"));
    }
}

mod prefix_range {
    use super::*;

    const SORTED: [&str; 6] = ["Calculator", "file", "File Manager", "Firefox", "fish", "GIMP"];

    fn matches(prefix: &str) -> Vec<&'static str> {
        SORTED[prefix_range(&SORTED, |s| *s, prefix)].to_vec()
    }

    #[test]
    fn test_finds_contiguous_run() {
        assert_eq!(matches("fi"), vec!["file", "File Manager", "Firefox", "fish"]);
        assert_eq!(matches("FILE"), vec!["file", "File Manager"]);
        assert_eq!(matches("firefox"), vec!["Firefox"]);
    }

    #[test]
    fn test_empty_prefix_spans_everything() {
        assert_eq!(matches(""), SORTED.to_vec());
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(matches("firefoxes").is_empty());
        assert!(matches("a").is_empty());
        assert!(matches("zzz").is_empty());
    }

    #[test]
    fn test_empty_slice() {
        let empty: [&str; 0] = [];
        assert_eq!(prefix_range(&empty, |s| *s, "x"), 0..0);
    }
}

proptest! {
    #[test]
    fn prop_prefix_range_agrees_with_linear_scan(
        mut words in prop::collection::vec("[a-dA-D]{0,5}", 0..40),
        prefix in "[a-dA-D]{0,3}",
    ) {
        sort_by(&mut words, |w| w.as_str());
        prop_assert!(is_sorted_by(&words, |w| w.as_str()));

        let range = prefix_range(&words, |w| w.as_str(), &prefix);
        for (i, word) in words.iter().enumerate() {
            prop_assert_eq!(range.contains(&i), starts_with(word, &prefix));
        }
    }

    #[test]
    fn prop_compare_is_case_blind(s in "[a-zA-Z ]{0,12}") {
        prop_assert_eq!(compare(&s, &s.to_uppercase()), Ordering::Equal);
        prop_assert!(starts_with(&s.to_lowercase(), &s.to_uppercase()));
    }
}

mod fold_key {
    use super::*;

    #[test]
    fn test_key_order_matches_compare() {
        let words = ["Zeta", "alpha", "ALPHABET", "Émile", "beta", "_x", "42"];
        for a in words {
            for b in words {
                assert_eq!(fold_key(a).cmp(&fold_key(b)), compare(a, b), "{a} vs {b}");
            }
        }
    }
}
