//! Best-effort extraction of destination records from chat-model output.
//!
//! Models are asked for recommendations in free text, so the reply is either
//! a JSON document (possibly wrapped in prose or a code fence) or a list of
//! `Destination N:` sections with labelled lines:
//!
//! ```text
//! Destination 1:
//! Name: Lisbon
//! Country: Portugal
//! Description: Hills, trams and custard tarts.
//! Budget: $1200 - $1800
//! Best Time to Visit: March - May
//! Why Visit:
//! - Historic neighbourhoods
//! - Seafood
//! ```
//!
//! [`parse_ai_response`] tries JSON first and falls back to the labelled
//! format. It never fails: anything unreadable yields an empty list.

use log::debug;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::models::ai_destination::AiDestination;

static SECTION_MARKER: LazyLock<Regex> = LazyLock::new(|| compile(r"Destination \d+:"));
static NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"Name: ([^\n]+)"));
static COUNTRY: LazyLock<Regex> = LazyLock::new(|| compile(r"Country: ([^\n]+)"));
static IMAGE: LazyLock<Regex> = LazyLock::new(|| compile(r"Image: ([^\n]+)"));
static BUDGET: LazyLock<Regex> = LazyLock::new(|| compile(r"Budget: ([^\n]+)"));
static BEST_TIME: LazyLock<Regex> = LazyLock::new(|| compile(r"Best Time to Visit: ([^\n]+)"));
static DESCRIPTION_END: LazyLock<Regex> =
    LazyLock::new(|| compile(r"Budget:|Best Time|Why Visit"));
static HIGHLIGHT_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"[-•]"));

const DESCRIPTION_LABEL: &str = "Description: ";
const WHY_VISIT_LABEL: &str = "Why Visit:";

fn compile(pattern: &str) -> Regex {
    // Patterns are literals in this file; a failure here is a programming error.
    Regex::new(pattern).expect("invalid built-in pattern")
}

/// Extract destination records from a model reply.
pub fn parse_ai_response(response: &str) -> Vec<AiDestination> {
    if let Some(destinations) = parse_json_block(response) {
        debug!("Parsed {} destinations from JSON reply", destinations.len());
        return destinations;
    }

    let destinations = parse_labelled_sections(response);
    debug!(
        "Parsed {} destinations from labelled reply",
        destinations.len()
    );
    destinations
}

/// Parse the span from the first `{` to the last `}` and read its
/// `destinations` array. `None` means the caller should try the text format.
fn parse_json_block(response: &str) -> Option<Vec<AiDestination>> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end < start {
        return None;
    }

    let document: Value = serde_json::from_str(&response[start..=end]).ok()?;
    let entries = document.get("destinations")?.as_array()?;

    Some(entries.iter().filter_map(destination_from_value).collect())
}

fn destination_from_value(value: &Value) -> Option<AiDestination> {
    let object = value.as_object()?;
    let text = |keys: &[&str]| -> String {
        keys.iter()
            .filter_map(|key| object.get(*key))
            .find_map(scalar_text)
            .unwrap_or_default()
    };

    let highlights = match object.get("highlights") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(scalar_text)
            .filter(|item| !item.is_empty())
            .collect(),
        Some(other) => scalar_text(other)
            .filter(|item| !item.is_empty())
            .into_iter()
            .collect(),
        None => Vec::new(),
    };

    Some(AiDestination {
        name: text(&["name"]),
        country: text(&["country"]),
        image: text(&["image", "imageUrl"]),
        description: text(&["description"]),
        budget: text(&["budget"]),
        best_time_to_visit: text(&["bestTimeToVisit", "best_time_to_visit"]),
        highlights,
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_labelled_sections(response: &str) -> Vec<AiDestination> {
    SECTION_MARKER
        .split(response)
        .filter(|section| !section.is_empty())
        .filter_map(parse_section)
        .collect()
}

fn parse_section(section: &str) -> Option<AiDestination> {
    let name = capture_line(&NAME, section)?;

    Some(AiDestination {
        name,
        country: capture_line(&COUNTRY, section).unwrap_or_default(),
        image: capture_line(&IMAGE, section).unwrap_or_default(),
        description: description(section).unwrap_or_default(),
        budget: capture_line(&BUDGET, section).unwrap_or_default(),
        best_time_to_visit: capture_line(&BEST_TIME, section).unwrap_or_default(),
        highlights: highlights(section),
    })
}

fn capture_line(pattern: &Regex, section: &str) -> Option<String> {
    pattern
        .captures(section)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Text after `Description: ` up to the next budget / best-time / why-visit
/// label, or the end of the section.
fn description(section: &str) -> Option<String> {
    let start = section.find(DESCRIPTION_LABEL)? + DESCRIPTION_LABEL.len();
    let rest = &section[start..];
    let end = DESCRIPTION_END
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}

/// Bullet items after `Why Visit:` up to the first blank line.
fn highlights(section: &str) -> Vec<String> {
    let Some(start) = section.find(WHY_VISIT_LABEL) else {
        return Vec::new();
    };
    let rest = &section[start + WHY_VISIT_LABEL.len()..];
    let block = match rest.find("\n\n") {
        Some(end) => &rest[..end],
        None => rest,
    };

    HIGHLIGHT_SEPARATOR
        .split(block)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
