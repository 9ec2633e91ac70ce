//! Folding and unfolding properties.

use mozvcard_test::physical_lines;
use mozvcard_test::rfc::error::RfcError;
use mozvcard_test::rfc::rfc::vcard::{fold, unfold};

const SAMPLES: &[&str] = &[
    "",
    "FN:Jane Doe",
    "NOTE:The quick brown fox jumps over the lazy dog, again and again; forever.",
    "NOTE:aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    "PHOTO:data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==",
    "NOTE:Ünïcødé text — with wide characters 日本語 and emoji 🎉 scattered around, long enough to fold twice over.",
    "X-TAB:\tleading tab and trailing space ",
];

#[test_log::test]
fn short_lines_are_unchanged() {
    for sample in SAMPLES {
        for width in [20, 40, 78, 200] {
            if sample.chars().count() < width {
                assert_eq!(fold(sample, width).unwrap(), *sample);
            }
        }
    }
}

#[test]
fn widths_below_twenty_fail() {
    for width in 0..20 {
        assert!(matches!(
            fold("FN:Jane Doe", width),
            Err(RfcError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn physical_lines_fit_the_width() {
    for sample in SAMPLES {
        for width in [20, 21, 35, 78] {
            let folded = fold(sample, width).unwrap();
            for (i, line) in physical_lines(&folded).into_iter().enumerate() {
                let columns = line.chars().count();
                assert!(columns <= width, "{width}: line {i} has {columns} columns");
                if i > 0 {
                    assert!(line.starts_with(' '), "continuation {i} lacks fold marker");
                }
            }
        }
    }
}

#[test]
fn unfold_inverts_fold() {
    for sample in SAMPLES {
        for width in [20, 33, 78] {
            assert_eq!(unfold(&fold(sample, width).unwrap()), *sample);
        }
    }
}

#[test]
fn unfold_is_global_and_left_to_right() {
    assert_eq!(unfold("A\r\n B\r\n\tC\r\nD\r\n  E"), "ABC\r\nD E");
}
