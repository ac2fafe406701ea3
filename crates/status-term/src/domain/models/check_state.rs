#[cfg(test)]
#[path = "check_state_test.rs"]
mod tests;

use reqwest::StatusCode;

/// Outcome of the status check as seen by the UI loop.
#[derive(Debug, Default)]
pub enum CheckState {
    #[default]
    Idle,
    Resolved(u16),
    Failed(anyhow::Error),
}

impl CheckState {
    pub fn is_terminal(&self) -> bool {
        return !matches!(self, CheckState::Idle);
    }

    pub fn status(&self) -> Option<u16> {
        if let CheckState::Resolved(code) = self {
            return Some(*code);
        }

        return None;
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        if let CheckState::Failed(err) = self {
            return Some(err);
        }

        return None;
    }
}

/// Standard reason phrase for a status code, or an empty string when the code
/// has none. Phrases follow the long-standing names where newer RFCs renamed
/// them.
pub fn status_text(code: u16) -> &'static str {
    let text = match code {
        103 => "Early Hints",
        413 => "Request Entity Too Large",
        414 => "Request URI Too Long",
        416 => "Requested Range Not Satisfiable",
        425 => "Too Early",
        _ => StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or(""),
    };

    return text;
}
