//! Data Transfer Objects - request bodies for the posts API.
//!
//! Every field is optional on the wire so that presence checks happen in the
//! domain layer rather than in the JSON parser. Unknown fields are ignored.
//! Scalar values are stored as their text form; `null` counts as absent.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "text_field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub author: Option<String>,
}

/// Request to update a post. Only the present fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "text_field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub author: Option<String>,
}

/// Accepts any JSON scalar as text. Objects and arrays have no text form.
fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Array(_)) => Err(de::Error::custom("expected text, found an array")),
        Some(Value::Object(_)) => Err(de::Error::custom("expected text, found an object")),
    }
}
