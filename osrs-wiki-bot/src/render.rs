//! Plain-text rendering of a [`FormattedResponse`] for chat and terminal output.

use crate::core::{FormattedResponse, ResponseStatus};

fn status_marker(status: ResponseStatus) -> &'static str {
    match status {
        ResponseStatus::Ok => "",
        ResponseStatus::NotFound | ResponseStatus::ContentUnavailable => "❌ ",
        ResponseStatus::ConfigurationMissing => "⚙️ ",
        ResponseStatus::TransportFailure | ResponseStatus::UpstreamFailure => "⚠️ ",
    }
}

/// Title, link, body, fields (each with its own link), then footer, separated by blank lines.
pub fn render(response: &FormattedResponse) -> String {
    let mut blocks = vec![format!("{}{}", status_marker(response.status), response.title)];

    if let Some(url) = &response.url {
        blocks.push(url.clone());
    }
    if !response.description.is_empty() {
        blocks.push(response.description.clone());
    }
    for field in &response.fields {
        let mut block = format!("{}\n{}", field.name, field.value);
        if let Some(url) = &field.url {
            block.push('\n');
            block.push_str(url);
        }
        blocks.push(block);
    }
    if let Some(footer) = &response.footer {
        blocks.push(footer.clone());
    }

    blocks.join("\n\n")
}
