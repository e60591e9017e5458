//! Unit tests for command parsing and help text.

use super::*;

const BOT_NAME: &str = "osrs_wiki_bot";

/// **Test: Multi-word arguments are kept whole.**
#[test]
fn test_parse_search_keeps_full_query() {
    let cmd = Command::parse("/search dragon scimitar", BOT_NAME).unwrap();
    assert_eq!(cmd, Command::Search("dragon scimitar".to_string()));
}

/// **Test: Commands addressed to this bot by name parse like bare commands.**
#[test]
fn test_parse_with_bot_mention() {
    let cmd = Command::parse("/info@osrs_wiki_bot fishing", BOT_NAME).unwrap();
    assert_eq!(cmd, Command::Info("fishing".to_string()));
}

#[test]
fn test_parse_argumentless_commands() {
    assert_eq!(Command::parse("/random", BOT_NAME).unwrap(), Command::Random);
    assert_eq!(Command::parse("/help", BOT_NAME).unwrap(), Command::Help);
    assert_eq!(
        Command::parse("/recent 8", BOT_NAME).unwrap(),
        Command::Recent("8".to_string())
    );
}

#[test]
fn test_parse_rejects_unknown_and_plain_text() {
    assert!(Command::parse("/teleport varrock", BOT_NAME).is_err());
    assert!(Command::parse("hello there", BOT_NAME).is_err());
}

/// **Test: Empty or unparsable /recent argument falls back to 5; numbers pass through unclamped.**
#[test]
fn test_parse_recent_limit() {
    assert_eq!(parse_recent_limit(""), 5);
    assert_eq!(parse_recent_limit("   "), 5);
    assert_eq!(parse_recent_limit("lots"), 5);
    assert_eq!(parse_recent_limit(" 8 "), 8);
    assert_eq!(parse_recent_limit("15"), 15);
    assert_eq!(parse_recent_limit("-2"), -2);
}

#[test]
fn test_usage_hint_only_for_commands_with_arguments() {
    assert!(usage_hint(&Command::Search(String::new()))
        .unwrap()
        .contains("/search"));
    assert!(usage_hint(&Command::Ai(String::new())).unwrap().contains("/ai"));
    assert!(usage_hint(&Command::Random).is_none());
    assert!(usage_hint(&Command::Recent(String::new())).is_none());
}

#[test]
fn test_help_text_lists_every_command() {
    let help = help_text();
    for name in ["/help", "/search", "/info", "/random", "/recent", "/ai"] {
        assert!(help.contains(name), "help text is missing {}", name);
    }
    assert!(help.contains("/search dragon scimitar"));
}
