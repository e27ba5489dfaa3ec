/*
 * Responsibility
 * - memories request/response DTOs (camelCase on the wire)
 * - summary projection + excerpt rule for list views
 * - loose boolean coercion for `isPublic` (JS-style truthiness)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::repos::memory_repo::MemoryRecord;

/// Longest content prefix shown in list views before truncation kicks in.
const EXCERPT_MAX_CHARS: usize = 115;
const EXCERPT_ELLIPSIS: &str = "...";

/// Body shape shared by create and update (update is a full replacement).
/// Owner is never part of the body; it always comes from the token.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryPayload {
    pub cover_url: String,
    pub content: String,
    pub type_media: String,
    #[serde(default, deserialize_with = "coerce_bool")]
    pub is_public: bool,
}

/// Accept whatever loosely-typed value a client sends for `isPublic` and
/// coerce it the way `Boolean(x)` would: false for null/0/"" and false
/// itself, true for everything else. Missing field defaults to false.
fn coerce_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Null => false,
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub cover_url: String,
    pub type_media: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl From<MemoryRecord> for MemoryResponse {
    fn from(r: MemoryRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            content: r.content,
            cover_url: r.cover_url,
            type_media: r.type_media,
            is_public: r.is_public,
            created_at: r.created_at,
        }
    }
}

/// Projection returned by the list endpoint: no full content, only an excerpt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySummaryResponse {
    pub id: Uuid,
    pub cover_url: String,
    pub type_media: String,
    pub excerpt: String,
    pub created_at: DateTime<Utc>,
}

impl From<MemoryRecord> for MemorySummaryResponse {
    fn from(r: MemoryRecord) -> Self {
        Self {
            id: r.id,
            cover_url: r.cover_url,
            type_media: r.type_media,
            excerpt: excerpt(&r.content),
            created_at: r.created_at,
        }
    }
}

/// First 115 characters + "..." when the content is longer, otherwise the
/// content verbatim. Counted in chars so multi-byte text never gets split
/// mid code point.
pub fn excerpt(content: &str) -> String {
    let mut chars = content.char_indices();
    match chars.nth(EXCERPT_MAX_CHARS) {
        // content has more than EXCERPT_MAX_CHARS chars: cut before this one
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + EXCERPT_ELLIPSIS.len());
            out.push_str(&content[..byte_idx]);
            out.push_str(EXCERPT_ELLIPSIS);
            out
        }
        None => content.to_string(),
    }
}
