//! Instance lifecycle DTOs: listing stored instances, uploading new ones
//! and removing them again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::InstanceId;

/// Route name constants for the instance lifecycle endpoints.
pub const LIST_INSTANCES: &str = "list_instances";
pub const POST_INSTANCE: &str = "post_instance";
pub const GET_INSTANCE: &str = "get_instance";
pub const DELETE_INSTANCE: &str = "delete_instance";

/// Listing entry for one stored instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    pub id: InstanceId,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Response body after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedInstance {
    pub id: InstanceId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_route_constants() {
        assert_eq!(LIST_INSTANCES, "list_instances");
        assert_eq!(POST_INSTANCE, "post_instance");
        assert_eq!(GET_INSTANCE, "get_instance");
        assert_eq!(DELETE_INSTANCE, "delete_instance");
    }

    #[test]
    fn test_instance_info_serialization() {
        let info = InstanceInfo {
            id: InstanceId::new("abc123"),
            name: "demo".to_string(),
            uploaded_at: Utc.with_ymd_and_hms(2023, 7, 24, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"id\":\"abc123\""));
        assert!(json.contains("\"uploadedAt\""));
    }
}
