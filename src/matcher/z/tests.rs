use rstest::rstest;

use super::*;

#[test]
fn test_overlapping_trace() {
    let result = find("aaaa", "aa", false);
    assert_eq!(result.matches, vec![0, 1, 2]);
    assert_eq!(
        result.steps,
        vec![
            Step::Extend { position: 1, z: 1 },
            Step::UpdateBox {
                position: 1,
                left: 1,
                right: 2
            },
            Step::Extend { position: 3, z: 1 },
            Step::Extend { position: 3, z: 2 },
            Step::UpdateBox {
                position: 3,
                left: 3,
                right: 5
            },
            Step::Found { position: 0 },
            Step::ZBox {
                position: 4,
                mirror: 1,
                z: 1
            },
            Step::Extend { position: 4, z: 2 },
            Step::UpdateBox {
                position: 4,
                left: 4,
                right: 6
            },
            Step::Found { position: 1 },
            Step::ZBox {
                position: 5,
                mirror: 1,
                z: 1
            },
            Step::Extend { position: 5, z: 2 },
            Step::UpdateBox {
                position: 5,
                left: 5,
                right: 7
            },
            Step::Found { position: 2 },
            Step::ZBox {
                position: 6,
                mirror: 1,
                z: 1
            },
        ]
    );
    assert_eq!(result.comparisons, 5);
}

#[rstest]
#[case("$$$", "$", vec![0, 1, 2])]
#[case("a#b#", "#", vec![1, 3])]
#[case("\0a\0", "\0", vec![0, 2])]
#[case("ab|ab", "b|a", vec![1])]
fn test_separator_never_collides(#[case] text: &str, #[case] pattern: &str, #[case] expected: Vec<usize>) {
    assert_eq!(find(text, pattern, false).matches, expected);
}

#[test]
fn test_pattern_longer_than_text() {
    let result = find("ab", "abc", false);
    assert!(result.matches.is_empty());
    assert!(result.found().next().is_none());
}

#[test]
fn test_no_extension_means_no_comparisons() {
    let result = find("xyz", "abc", false);
    assert!(result.matches.is_empty());
    assert!(result.steps.is_empty());
    assert_eq!(result.comparisons, 0);
}
