use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Custom deserializer: accepts string or numeric ids
fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Null => Ok(None),
        _ => Ok(None),
    }
}

/// Create-call payload; the wire contract is snake_case.
#[derive(Debug, Serialize)]
pub struct ShortenRequest {
    pub original_url: String,
}

/// Raw create response as backends actually send it.
///
/// Field names vary between snake_case and camelCase deployments, so every
/// field carries an alias; `short_url` is the only field a usable response
/// must have.
#[derive(Debug, Deserialize)]
pub struct RawShortenResponse {
    #[serde(alias = "shortUrl")]
    pub short_url: String,
    #[serde(default, alias = "originalUrl")]
    pub original_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default, alias = "shortCode", deserialize_with = "deserialize_opt_id")]
    pub short_code: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clicks: Option<u64>,
    #[serde(default, alias = "clickCount")]
    pub click_count: Option<u64>,
}

/// Stable result shape every caller sees, regardless of backend spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortenResult {
    pub short_url: String,
    pub original_url: String,
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl RawShortenResponse {
    /// Collapse the heterogeneous wire shape into a [`ShortenResult`].
    ///
    /// Pure given its inputs: the fallback timestamp is passed in rather than
    /// read from the clock here.
    pub fn normalize(self, requested_url: &str, fallback_created_at: DateTime<Utc>) -> ShortenResult {
        ShortenResult {
            short_url: self.short_url,
            original_url: self
                .original_url
                .unwrap_or_else(|| requested_url.to_string()),
            id: self
                .id
                .or(self.short_code)
                .unwrap_or_else(|| "unknown".to_string()),
            created_at: self.created_at.unwrap_or(fallback_created_at),
            clicks: self.clicks.or(self.click_count).unwrap_or(0),
        }
    }
}

/// Raw read response for `GET /<short_code>`.
#[derive(Debug, Deserialize)]
pub struct RawLinkResponse {
    #[serde(alias = "originalUrl")]
    pub original_url: String,
    #[serde(alias = "shortUrl")]
    pub short_url: String,
    #[serde(default)]
    pub clicks: Option<u64>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Stored-link data with basic stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkStats {
    pub original_url: String,
    pub short_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl RawLinkResponse {
    pub fn normalize(self, fallback_created_at: DateTime<Utc>) -> LinkStats {
        LinkStats {
            original_url: self.original_url,
            short_url: self.short_url,
            clicks: self.clicks.unwrap_or(0),
            created_at: self.created_at.unwrap_or(fallback_created_at),
        }
    }
}
