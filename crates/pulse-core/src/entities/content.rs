//! Content read models - records owned by the remote content-management service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::value_objects::SortOrder;

/// A content record as returned by the content-management service.
///
/// This service never mutates content; everything beyond the fields the
/// aggregator reads (id, author, coordinates, draft flag) is carried opaquely
/// and passed through to the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: Uuid,
    pub from_user_id: Uuid,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub is_draft: bool,
    /// Author-denormalized display fields and anything else the remote
    /// service includes; opaque to this core
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request shape for `ContentGateway::find_by_ids`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQuery {
    pub content_ids: Vec<Uuid>,
    pub limit: i64,
    pub order: SortOrder,
    pub with_media: bool,
    pub with_user: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_content_created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,
    pub is_draft: bool,
}

/// One batch of hydrated content plus its media side-channel
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentBatch {
    #[serde(default)]
    pub items: Vec<ContentItem>,
    #[serde(default)]
    pub media: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_item_extra_fields_are_preserved() {
        let json = serde_json::json!({
            "id": "7f8f0c62-55ce-4f0e-9b4c-2e22a2a5e9a1",
            "fromUserId": "f0a9c3a1-93d4-4d10-8f3b-6a5d7c1a0b2e",
            "latitude": 37.7749,
            "longitude": -122.4194,
            "isDraft": false,
            "notificationMsg": "hello",
            "fromUserName": "alex"
        });
        let item: ContentItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.latitude, Some(37.7749));
        assert_eq!(item.extra.get("fromUserName").and_then(Value::as_str), Some("alex"));

        // Round-trips back out with the opaque fields intact
        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out.get("notificationMsg").and_then(Value::as_str), Some("hello"));
    }

    #[test]
    fn test_content_item_missing_coordinates() {
        let json = serde_json::json!({
            "id": "7f8f0c62-55ce-4f0e-9b4c-2e22a2a5e9a1",
            "fromUserId": "f0a9c3a1-93d4-4d10-8f3b-6a5d7c1a0b2e",
        });
        let item: ContentItem = serde_json::from_value(json).unwrap();
        assert!(item.latitude.is_none());
        assert!(!item.is_draft);
    }
}
