use super::*;
use crate::matcher::rabin_karp;

#[test]
fn test_forward_and_backward() {
    let result = rabin_karp::find("xb,", "ab", false);
    let mut playback = Playback::new(&result.steps);
    assert_eq!(playback.len(), 3);
    assert_eq!(playback.current(), Some(&result.steps[0]));

    assert_eq!(playback.forward(), Some(&result.steps[1]));
    assert_eq!(playback.forward(), Some(&result.steps[2]));
    assert!(playback.is_finished());
    assert_eq!(playback.forward(), None);
    assert_eq!(playback.index(), 2);

    assert_eq!(playback.backward(), Some(&result.steps[1]));
    assert_eq!(playback.backward(), Some(&result.steps[0]));
    assert_eq!(playback.backward(), None);
    assert_eq!(playback.index(), 0);
}

#[test]
fn test_seek_is_clamped_and_repeatable() {
    let result = rabin_karp::find("abcabc", "abc", false);
    let mut playback = Playback::new(&result.steps);

    let step = playback.seek(3).cloned();
    assert_eq!(playback.seek(3).cloned(), step);
    assert_eq!(playback.seek(1000), result.steps.last());
    assert!(playback.is_finished());
    assert_eq!(playback.progress(), 1.0);

    playback.reset();
    assert_eq!(playback.index(), 0);
}

#[test]
fn test_empty_trace() {
    let mut playback = Playback::new(&[]);
    assert!(playback.is_empty());
    assert_eq!(playback.current(), None);
    assert_eq!(playback.forward(), None);
    assert_eq!(playback.backward(), None);
    assert_eq!(playback.seek(5), None);
    assert!(playback.is_finished());
    assert_eq!(playback.progress(), 1.0);
}
