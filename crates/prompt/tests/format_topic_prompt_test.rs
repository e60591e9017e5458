//! Unit tests for `prompt::format_topic_prompt` and `prompt::summary_messages`.
//!
//! External interactions: none (pure function tests).

use prompt::{
    format_topic_prompt, summary_messages, ChatMessage, MessageRole, TOPIC_ANSWER_POINTS,
    TOPIC_SYSTEM_MESSAGE,
};

/// **Test: The prompt names the topic and embeds the wiki text verbatim.**
#[test]
fn prompt_embeds_topic_and_wiki_text() {
    let out = format_topic_prompt("money making", "Money making is the act of earning coins.");
    assert!(out.contains("about 'money making'"));
    assert!(out.contains("Wiki Information:\nMoney making is the act of earning coins."));
}

/// **Test: Every answer point appears, numbered from 1 in order.**
#[test]
fn prompt_lists_numbered_answer_points() {
    let out = format_topic_prompt("fishing", "text");
    let mut last = 0;
    for (i, point) in TOPIC_ANSWER_POINTS.iter().enumerate() {
        let line = format!("{}. {}", i + 1, point);
        let pos = out.find(&line).expect("point present");
        assert!(pos > last);
        last = pos;
    }
    assert!(out.ends_with("Format your response in a clear, structured way."));
}

/// **Test: summary_messages is exactly [system, user] with the prompt passed through unchanged.**
#[test]
fn summary_messages_are_system_then_user() {
    let prompt = format_topic_prompt("Zulrah", "Zulrah is a boss.");
    let messages = summary_messages(&prompt);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], ChatMessage::system(TOPIC_SYSTEM_MESSAGE));
    assert_eq!(messages[1].role, MessageRole::User);
    assert_eq!(messages[1].content, prompt);
}
