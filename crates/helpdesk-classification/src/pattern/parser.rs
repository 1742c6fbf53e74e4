//! Strict parsing of the generative reply into a [`ClassificationResult`].

use helpdesk_core::errors::{HelpdeskError, HelpdeskResult};
use helpdesk_core::models::{ClassificationResult, Confidence, GroupScore};
use helpdesk_core::Taxonomy;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClassification {
    primary_group: RawGroupScore,
    #[serde(default)]
    alternative_groups: Vec<RawGroupScore>,
}

#[derive(Deserialize)]
struct RawGroupScore {
    name: String,
    confidence: f64,
    #[serde(default)]
    reasoning: String,
}

fn malformed(reason: impl Into<String>) -> HelpdeskError {
    HelpdeskError::MalformedResponse {
        reason: reason.into(),
    }
}

/// Strip an optional Markdown code fence around the JSON body.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. "json") on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn convert(raw: RawGroupScore, taxonomy: &Taxonomy) -> HelpdeskResult<GroupScore> {
    let wanted = raw.name.trim();
    let group = taxonomy
        .groups()
        .iter()
        .find(|g| g.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| malformed(format!("unknown support group '{wanted}'")))?;

    if !raw.confidence.is_finite() || !(0.0..=100.0).contains(&raw.confidence) {
        return Err(malformed(format!(
            "confidence {} for '{}' is outside 0-100",
            raw.confidence, group.name
        )));
    }

    Ok(GroupScore {
        name: group.name.clone(),
        confidence: Confidence::from_f64(raw.confidence),
        reasoning: raw.reasoning.trim().to_string(),
    })
}

/// Parse a reply as the classification shape.
///
/// Accepts a bare JSON object or one wrapped in a code fence. Group names
/// must belong to `taxonomy` (case-insensitive; canonical spelling is
/// returned). Alternatives repeating the primary are dropped and the list is
/// truncated to two.
pub fn parse_response(raw: &str, taxonomy: &Taxonomy) -> HelpdeskResult<ClassificationResult> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(malformed("empty reply"));
    }

    let parsed: RawClassification =
        serde_json::from_str(body).map_err(|e| malformed(format!("invalid JSON: {e}")))?;

    let primary = convert(parsed.primary_group, taxonomy)?;
    let alternatives = parsed
        .alternative_groups
        .into_iter()
        .map(|alt| convert(alt, taxonomy))
        .collect::<HelpdeskResult<Vec<_>>>()?;

    Ok(ClassificationResult::new(primary, alternatives))
}
