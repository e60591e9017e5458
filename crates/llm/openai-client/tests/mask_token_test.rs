//! Tests for [`openai_client::mask_token`], used whenever the summarization key is logged.

use openai_client::mask_token;

/// **Test: Eleven characters or fewer reveal nothing.**
#[test]
fn short_keys_are_fully_hidden() {
    for key in ["", "x", "sk-abc", "sk-12345678"] {
        assert_eq!(mask_token(key), "***", "key {:?} leaked", key);
    }
}

/// **Test: Twelve characters is the first length that shows head and tail.**
#[test]
fn twelve_characters_show_head_and_tail() {
    assert_eq!(mask_token("sk-osrs-wiki"), "sk-osrs***wiki");
}

/// **Test: A realistic key keeps only seven leading and four trailing characters.**
#[test]
fn realistic_key_keeps_seven_and_four() {
    let masked = mask_token("sk-proj-Zr8wQ2mN4pL6tY1uV3xK9bC0");
    assert_eq!(masked, "sk-proj***9bC0");
    assert!(!masked.contains("Zr8wQ2"));
}

/// **Test: Non-ASCII keys are hidden instead of being sliced mid-character.**
#[test]
fn non_ascii_keys_are_fully_hidden() {
    assert_eq!(mask_token("ключ-очень-длинный-секрет"), "***");
}
