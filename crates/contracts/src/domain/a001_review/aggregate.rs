use crate::domain::common::{value_text, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// A review from `GET /staff/review`.
///
/// Only the fields the list view reads are projected, and none of them is
/// required: a record with a missing or oddly typed field still decodes and
/// renders with blanks. Everything else the backend sends is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Number or numeric string, depending on the backend version
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub avatar_image_url: Option<Value>,
    /// Ответ провайдера: `{ content, user: { email } }`
    #[serde(rename = "ReviewReplies", default)]
    pub review_replies: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReviewRecord {
    /// Selection key; records without an id cannot be selected
    pub fn row_key(&self) -> Option<String> {
        self.id.as_ref().map(RecordId::to_string)
    }

    /// Email of the reply author, shown in the "Reviewer" column.
    /// Empty when the review has no reply yet.
    pub fn reviewer_name(&self) -> Cow<'_, str> {
        let email = self
            .review_replies
            .as_ref()
            .and_then(|r| r.get("user"))
            .and_then(|u| u.get("email"));
        value_text(email)
    }

    /// Rating as a number; absent or non-numeric ratings count as 0
    pub fn rating_value(&self) -> f64 {
        match &self.rating {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    pub fn has_reply(&self) -> bool {
        self.review_replies.is_some()
    }

    pub fn content_text(&self) -> Cow<'_, str> {
        value_text(self.content.as_ref())
    }

    pub fn status_text(&self) -> Cow<'_, str> {
        value_text(self.status.as_ref())
    }

    /// Avatar URL; only a string counts
    pub fn avatar_url(&self) -> &str {
        match &self.avatar_image_url {
            Some(Value::String(s)) => s,
            _ => "",
        }
    }
}
