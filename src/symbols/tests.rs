use rstest::rstest;

use super::*;

#[rstest]
#[case('A', 'a')]
#[case('z', 'z')]
#[case('7', '7')]
#[case('Ä', 'ä')]
#[case('Σ', 'σ')]
#[case('İ', 'İ')]
fn test_fold(#[case] input: char, #[case] expected: char) {
    assert_eq!(fold(input), expected);
}

#[test]
fn test_symbols_preserve_length() {
    let text = "İstanbul ÄBC";
    let folded = Symbols::new(text, true);
    assert_eq!(folded.len(), text.chars().count());
    assert_eq!(folded[0], 'İ');
    assert_eq!(folded[9], 'ä');
}

#[test]
fn test_symbols_case_sensitive() {
    let symbols = Symbols::new("ABCabc", false);
    assert_eq!(*symbols, vec!['A', 'B', 'C', 'a', 'b', 'c']);

    let symbols = Symbols::new("ABCabc", true);
    assert_eq!(*symbols, vec!['a', 'b', 'c', 'a', 'b', 'c']);
}
