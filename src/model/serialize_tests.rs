//! Tests for the serializer and parse/serialize round trips.

use super::*;
use crate::model::{Entry, parse};

#[test]
fn empty_list_produces_empty_text() {
    assert_eq!(serialize(&[]), "");
}

#[test]
fn enabled_setting_renders_plain() {
    let entries = [Entry::setting("PORT", "8080", true, "", "PORT=8080")];
    assert_eq!(serialize(&entries), "PORT=8080\n");
}

#[test]
fn toggling_off_renders_commented_line() {
    let mut entries = parse("FOO=bar");
    entries[0].enabled = false;
    assert_eq!(serialize(&entries), "# FOO=bar\n");
}

#[test]
fn toggling_back_on_restores_plain_line() {
    let mut entries = parse("# FOO=bar");
    entries[0].enabled = true;
    assert_eq!(serialize(&entries), "FOO=bar\n");
}

#[test]
fn description_renders_one_comment_line_per_line() {
    let entries = [Entry::setting(
        "PORT",
        "8080",
        true,
        "first line\nsecond line",
        "",
    )];
    assert_eq!(serialize(&entries), "# first line\n# second line\nPORT=8080\n");
}

#[test]
fn description_above_disabled_setting() {
    let entries = [Entry::setting("DOMAIN", "https://x", false, "where we live", "")];
    assert_eq!(serialize(&entries), "# where we live\n# DOMAIN=https://x\n");
}

#[test]
fn banner_and_comment_passthrough_preserve_whitespace() {
    let entries = [
        Entry::section("  ## padded banner  "),
        Entry::comment("#comment  with  spacing\t"),
        Entry::comment(""),
    ];
    assert_eq!(
        serialize(&entries),
        "  ## padded banner  \n#comment  with  spacing\t\n\n"
    );
}

#[test]
fn round_trip_is_exact_for_description_free_subset() {
    // Banners, blank lines, and settings without descriptions need no
    // normalization at all.
    let text = "## Section One\nPORT=8000\n\n## Section Two\n# DOMAIN=https://x\nTOKEN=\n";
    assert_eq!(serialize(&parse(text)), text);
}

#[test]
fn description_formatting_is_normalized_on_round_trip() {
    let text = "#   padded   note\nPORT=8080\n";
    assert_eq!(serialize(&parse(text)), "# padded   note\nPORT=8080\n");
}

#[test]
fn round_trip_is_structurally_idempotent() {
    // A setting's original line is regenerated on save ("#PORT=1" becomes
    // "# PORT=1"), so the comparison clears that cosmetic field on setting
    // entries. Everything else must match field for field.
    fn normalized(mut entries: Vec<Entry>) -> Vec<Entry> {
        for entry in &mut entries {
            if entry.is_setting() {
                entry.original_line.clear();
            }
        }
        entries
    }

    let texts = [
        "## Section\n#note\nPORT=8080\n",
        "# orphan\n## Banner\nA=1",
        "# dropped\n\nB=2\n",
        "stray text\n#PORT=1\n\n\n## End",
        "",
        "# only a comment",
    ];

    for text in texts {
        let first = parse(text);
        let second = parse(&serialize(&first));
        assert_eq!(
            normalized(first),
            normalized(second),
            "idempotence broke for {text:?}"
        );
    }
}

#[test]
fn edited_value_survives_a_save_cycle() {
    let mut entries = parse("# How loud to log\nLOG_LEVEL=info\n");
    entries[0].value = "debug".to_string();

    let saved = serialize(&entries);
    assert_eq!(saved, "# How loud to log\nLOG_LEVEL=debug\n");

    let reparsed = parse(&saved);
    assert_eq!(reparsed[0].value, "debug");
    assert_eq!(reparsed[0].description, "How loud to log");
}
