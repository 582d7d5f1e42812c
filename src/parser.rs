//! Assistant response parsing
//!
//! Splits a raw model reply into conversational prose and an optional
//! structured action envelope embedded as a JSON object.

use serde::{Deserialize, Serialize};

/// Structured action embedded in assistant text.
///
/// `amount` stays optional here; it defaults to zero at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionEnvelope {
    pub action: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl ActionEnvelope {
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

/// Outcome of parsing one assistant reply.
///
/// Both halves are ordinary typed absences: a reply can carry prose, an
/// action, both, or neither.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    pub conversational: Option<String>,
    pub action: Option<ActionEnvelope>,
}

/// Locate the first shallow `{...}` span in `text`.
///
/// Bounded scan, not a JSON tokenizer: everything from the first `{` up to
/// the next `}` is taken. A nested object yields a truncated span that
/// fails to decode, and the action is reported absent.
fn find_envelope_span(text: &str) -> Option<(usize, usize)> {
    let start = text.find('{')?;
    let close = text[start..].find('}')?;
    Some((start, start + close + 1))
}

/// Parse a model reply into `(conversational prose, action envelope)`.
///
/// Only the first brace span is considered. Decode failures never surface
/// to the caller; they read as "no action present".
pub fn parse_response(text: &str) -> ParsedResponse {
    let span = find_envelope_span(text);

    let action = span
        .and_then(|(start, end)| serde_json::from_str::<ActionEnvelope>(&text[start..end]).ok());

    let remainder = match span {
        Some((start, end)) => format!("{}{}", &text[..start], &text[end..]),
        None => text.to_string(),
    };

    let trimmed = remainder.trim();
    let conversational = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    };

    ParsedResponse {
        conversational,
        action,
    }
}
