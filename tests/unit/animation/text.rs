use super::*;

#[test]
fn reveal_is_zero_before_start_and_saturates() {
    let text = "mycoolproject.com"; // 17 chars
    assert_eq!(typed_slice(text, 0, 17, 2).unwrap(), "");
    assert_eq!(typed_slice(text, 16, 17, 2).unwrap(), "");
    assert_eq!(typed_slice(text, 17, 17, 2).unwrap(), "");
    assert_eq!(typed_slice(text, 19, 17, 2).unwrap(), "m");
    assert_eq!(typed_slice(text, 25, 17, 2).unwrap(), "myco");
    assert_eq!(typed_slice(text, 51, 17, 2).unwrap(), text);
    assert_eq!(typed_slice(text, 1000, 17, 2).unwrap(), text);
}

#[test]
fn reveal_is_non_decreasing_in_frame() {
    let text = "Love the project! How can I contribute?";
    let mut prev = 0;
    for frame in 0..200 {
        let n = revealed_chars(frame, 10, 2, text.chars().count()).unwrap();
        assert!(n >= prev, "reveal shrank at frame {frame}");
        assert!(n <= text.chars().count());
        prev = n;
    }
    assert_eq!(prev, text.chars().count());
}

#[test]
fn slices_respect_char_boundaries() {
    let text = "héllo wörld";
    for frame in 0..40 {
        // Must never panic on a multi-byte boundary.
        let slice = typed_slice(text, frame, 0, 2).unwrap();
        assert!(text.starts_with(slice));
    }
    assert_eq!(typed_slice(text, 2, 0, 2).unwrap(), "h");
    assert_eq!(typed_slice(text, 4, 0, 2).unwrap(), "hé");
}

#[test]
fn type_on_frames_counts_chars_not_bytes() {
    assert_eq!(type_on_frames("abc", 2), 6);
    assert_eq!(type_on_frames("héllo", 3), 15);
}

#[test]
fn zero_frames_per_char_is_rejected() {
    assert!(revealed_chars(10, 0, 0, 5).is_err());
    assert!(typed_slice("abc", 10, 0, 0).is_err());
    assert!(caret_visible("abc", 10, 0, 0).is_err());
}

#[test]
fn caret_blinks_on_a_sixteen_frame_cycle() {
    assert_eq!(caret_opacity(0), 1.0);
    assert_eq!(caret_opacity(3), 1.0);
    assert_eq!(caret_opacity(6), 0.5);
    assert_eq!(caret_opacity(8), 0.0);
    assert_eq!(caret_opacity(11), 0.0);
    assert_eq!(caret_opacity(14), 0.5);
    // The cycle repeats.
    assert_eq!(caret_opacity(16), caret_opacity(0));
    assert_eq!(caret_opacity(22), caret_opacity(6));
}

#[test]
fn caret_retires_shortly_after_typing_completes() {
    // "abc" at 2 frames/char finishes at frame 6 and holds 10 more.
    assert!(caret_visible("abc", 0, 0, 2).unwrap());
    assert!(caret_visible("abc", 6, 0, 2).unwrap());
    assert!(caret_visible("abc", 16, 0, 2).unwrap());
    assert!(!caret_visible("abc", 17, 0, 2).unwrap());
}
