use rstest::rstest;

use super::*;

const ALGORITHMS: [(&str, MatchFn); 3] = [("kmp", kmp::find), ("rabin-karp", rabin_karp::find), ("z", z::find)];

fn naive(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| text[i..i + pattern.len()] == pattern[..])
        .collect()
}

fn random_string(alphabet: &[u8], max_len: usize) -> String {
    let len = rand::random::<u8>() as usize % (max_len + 1);
    (0..len)
        .map(|_| alphabet[rand::random::<u8>() as usize % alphabet.len()] as char)
        .collect()
}

#[rstest]
#[case("aaaa", "aa", false, vec![0, 1, 2])]
#[case("ABCabc", "abc", true, vec![0, 3])]
#[case("ABCabc", "abc", false, vec![3])]
#[case("abababcabababcabcabc", "ababc", false, vec![2, 9])]
#[case("xyz", "abc", false, vec![])]
#[case("", "abc", false, vec![])]
#[case("abc", "abc", false, vec![0])]
#[case("ab", "abc", false, vec![])]
#[case("mississippi", "issi", false, vec![1, 4])]
#[case("ÄäÄ", "ä", true, vec![0, 1, 2])]
#[case("naïve café, NAÏVE CAFÉ", "café", true, vec![6, 18])]
fn test_matches(
    #[case] text: &str,
    #[case] pattern: &str,
    #[case] case_insensitive: bool,
    #[case] expected: Vec<usize>,
) {
    for (name, find) in ALGORITHMS {
        let result = find(text, pattern, case_insensitive);
        assert_eq!(result.matches, expected, "{}", name);
        assert_eq!(result.found().collect::<Vec<_>>(), expected, "{}", name);
    }
}

#[rstest]
#[case("abc", false)]
#[case("", false)]
#[case("ABC", true)]
fn test_empty_pattern(#[case] text: &str, #[case] case_insensitive: bool) {
    for (name, find) in ALGORITHMS {
        assert_eq!(find(text, "", case_insensitive), MatchResult::default(), "{}", name);
    }
}

#[test]
fn test_no_match_has_no_found_steps() {
    for (name, find) in ALGORITHMS {
        let result = find("xyz", "abc", false);
        assert!(result.matches.is_empty(), "{}", name);
        assert!(!result.steps.iter().any(|s| matches!(s, Step::Found { .. })), "{}", name);
    }
}

#[test]
fn test_idempotence() {
    for (name, find) in ALGORITHMS {
        let first = find("abababcabababcabcabc", "abab", true);
        let second = find("abababcabababcabcabc", "abab", true);
        assert_eq!(first, second, "{}", name);
    }
}

#[test]
fn test_original_text_positions_under_folding() {
    let text = "İİab";
    for (name, find) in ALGORITHMS {
        assert_eq!(find(text, "AB", true).matches, vec![2], "{}", name);
    }
}

#[test]
fn test_equivalence_with_naive_scan() {
    for _ in 0..300 {
        let alphabet: &[u8] = if rand::random::<bool>() { b"ab" } else { b"abcd" };
        let text = random_string(alphabet, 40);
        let mut pattern = random_string(alphabet, 5);
        if pattern.is_empty() {
            pattern.push('a');
        }

        let expected = naive(&text, &pattern);
        for (name, find) in ALGORITHMS {
            let result = find(&text, &pattern, false);
            assert_eq!(result.matches, expected, "{} on {:?} / {:?}", name, text, pattern);
            assert_eq!(result.found().collect::<Vec<_>>(), expected, "{}", name);
        }
    }
}

#[test]
fn test_positions_within_bounds() {
    for (name, find) in ALGORITHMS {
        let text = "abcabcabc";
        let result = find(text, "cab", false);
        for &pos in &result.matches {
            assert!(pos + 3 <= text.len(), "{}", name);
            assert_eq!(&text[pos..pos + 3], "cab", "{}", name);
        }
    }
}

#[test]
fn test_result_serialization() {
    let mut result = kmp::find("aa", "a", false);
    result.pattern = Some("a".into());
    result.algorithm = Some(AlgorithmId::Kmp);
    result.elapsed = Some(Duration::from_micros(1500));

    let value: json::Value = json::to_value(&result).unwrap();
    assert_eq!(value["matches"], json::json!([0, 1]));
    assert_eq!(value["algorithm"], "kmp");
    assert_eq!(value["elapsed"], 1.5);
    assert_eq!(value["steps"][0]["kind"], "match");
    assert_eq!(result.pattern_len(), Some(1));

    let value = json::to_value(MatchResult::default()).unwrap();
    assert!(value.get("elapsed").is_none());
    assert!(value.get("pattern").is_none());
}
