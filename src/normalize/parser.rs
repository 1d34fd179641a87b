use crate::{normalize_whitespace, PublicationRecord};
use serde_json::Value;

const DOI_RESOLVER: &str = "https://doi.org";

/// Normalized view of one entry from a work's `external-ids.external-id` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalId {
    pub id_type: String,
    pub value: String,
    pub url: String,
}

impl ExternalId {
    fn from_value(item: &Value) -> Self {
        Self {
            id_type: clean(item.get("external-id-type")),
            value: clean(item.get("external-id-value")),
            url: clean(item.pointer("/external-id-url/value")),
        }
    }

    fn is_doi(&self) -> bool {
        self.id_type.eq_ignore_ascii_case("doi")
    }
}

/// Strings are whitespace-normalized, numbers stringified, anything else is empty.
fn clean(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => normalize_whitespace(s),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Prefers the first DOI, otherwise the first identifier in response order.
pub fn pick_external_id(external_ids: Option<&Value>) -> Option<ExternalId> {
    let items = match external_ids.and_then(|ids| ids.get("external-id")) {
        Some(Value::Array(arr)) => arr,
        _ => return None,
    };

    let ids: Vec<ExternalId> = items.iter().map(ExternalId::from_value).collect();
    ids.iter()
        .find(|id| id.is_doi())
        .or_else(|| ids.first())
        .cloned()
}

/// Accepts the registry's string form ("2021") as well as a bare number.
/// Floats count only when they have no fractional part.
pub fn parse_year(summary: &Value) -> Option<i64> {
    match summary.pointer("/publication-date/year/value")? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|y| y.is_finite() && y.fract() == 0.0 && y.abs() < i64::MAX as f64)
                .map(|y| y as i64)
        }),
        _ => None,
    }
}

/// Returns `(doi, url)` for the chosen identifier.
pub fn doi_and_url(external_id: Option<&ExternalId>) -> (String, String) {
    match external_id {
        Some(ext) if ext.is_doi() && !ext.value.is_empty() => {
            let url = format!("{}/{}", DOI_RESOLVER, ext.value);
            (ext.value.clone(), url)
        }
        Some(ext) if !ext.url.is_empty() => (String::new(), ext.url.clone()),
        _ => (String::new(), String::new()),
    }
}

pub fn parse_work_summary(summary: &Value) -> PublicationRecord {
    let external_id = pick_external_id(summary.get("external-ids"));
    let (doi, url) = doi_and_url(external_id.as_ref());

    PublicationRecord {
        title: clean(summary.pointer("/title/title/value")),
        year: parse_year(summary),
        work_type: clean(summary.get("type")),
        doi,
        url,
        orcid_put_code: summary.get("put-code").cloned().unwrap_or(Value::Null),
    }
}
