//! Tests for line classification.

use super::*;

fn setting(key: &str, value: &str, enabled: bool) -> LineClass {
    LineClass::Setting {
        key: key.to_string(),
        value: value.to_string(),
        enabled,
    }
}

mod classify_fn {
    use super::*;

    #[test]
    fn empty_line_is_blank() {
        assert_eq!(classify(""), LineClass::Blank);
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert_eq!(classify("   \t  "), LineClass::Blank);
    }

    #[test]
    fn double_hash_is_section() {
        assert_eq!(classify("## General settings"), LineClass::Section);
    }

    #[test]
    fn indented_banner_is_section() {
        assert_eq!(classify("   ## Indented banner"), LineClass::Section);
    }

    #[test]
    fn triple_hash_is_section() {
        assert_eq!(classify("### heavy banner"), LineClass::Section);
    }

    #[test]
    fn plain_pair_is_enabled_setting() {
        assert_eq!(classify("PORT=8080"), setting("PORT", "8080", true));
    }

    #[test]
    fn commented_pair_is_disabled_setting() {
        assert_eq!(classify("# PORT=8080"), setting("PORT", "8080", false));
    }

    #[test]
    fn enabled_and_disabled_extract_identically() {
        let enabled = classify("DOMAIN=https://vault.example.com");
        let disabled = classify("# DOMAIN=https://vault.example.com");

        let LineClass::Setting { key: k1, value: v1, .. } = enabled else {
            panic!("expected setting");
        };
        let LineClass::Setting { key: k2, value: v2, .. } = disabled else {
            panic!("expected setting");
        };
        assert_eq!(k1, k2);
        assert_eq!(v1, v2);
    }

    #[test]
    fn hash_without_space_still_disables() {
        assert_eq!(classify("#PORT=8080"), setting("PORT", "8080", false));
    }

    #[test]
    fn empty_value_is_allowed() {
        assert_eq!(classify("ADMIN_TOKEN="), setting("ADMIN_TOKEN", "", true));
    }

    #[test]
    fn value_may_contain_equals_and_hashes() {
        assert_eq!(
            classify("OPTS=a=b#c"),
            setting("OPTS", "a=b#c", true)
        );
    }

    #[test]
    fn underscores_and_digits_in_key() {
        assert_eq!(classify("WEB_PORT_2=80"), setting("WEB_PORT_2", "80", true));
    }

    #[test]
    fn lowercase_key_is_not_a_setting() {
        assert_eq!(classify("port=8080"), LineClass::Other);
    }

    #[test]
    fn commented_lowercase_pair_is_a_comment() {
        assert_eq!(classify("# port=8080"), LineClass::Comment);
    }

    #[test]
    fn hash_text_is_comment() {
        assert_eq!(classify("# just a note"), LineClass::Comment);
    }

    #[test]
    fn double_stripped_hash_stays_comment() {
        // Only one '#' is stripped before the pattern test, so "# # X=1"
        // does not classify as a setting.
        assert_eq!(classify("# # X=1"), LineClass::Comment);
    }

    #[test]
    fn freeform_text_is_other() {
        assert_eq!(classify("hello world"), LineClass::Other);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(classify("  PORT=8080  "), setting("PORT", "8080", true));
    }
}

mod classify_lines_fn {
    use super::*;

    #[test]
    fn keeps_raw_text_untrimmed() {
        let lines = classify_lines("  PORT=8080  ");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].raw, "  PORT=8080  ");
        assert!(lines[0].is_setting());
    }

    #[test]
    fn trailing_newline_adds_no_phantom_line() {
        let lines = classify_lines("A=1\nB=2\n");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn strips_carriage_returns() {
        let lines = classify_lines("A=1\r\nB=2\r\n");
        assert_eq!(lines[0].class, super::setting("A", "1", true));
        assert_eq!(lines[0].raw, "A=1");
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(classify_lines("").is_empty());
    }

    #[test]
    fn interior_blank_lines_are_kept() {
        let lines = classify_lines("A=1\n\nB=2");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].class, LineClass::Blank);
    }
}
