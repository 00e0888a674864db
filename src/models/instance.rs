//! Uploaded instance: a request/response pair under a content-derived id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::ids::InstanceId;
use super::request::Request;
use super::response::Response;

/// A stored scheduling instance.
///
/// The id is the SHA-256 hex digest of the serialized request and response,
/// so uploading identical content twice yields the same instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInstance {
    pub id: InstanceId,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub request: Request,
    pub response: Response,
}

impl ScheduleInstance {
    pub fn new(
        name: impl Into<String>,
        request: Request,
        response: Response,
    ) -> Result<Self, serde_json::Error> {
        let id = content_id(&request, &response)?;
        Ok(Self {
            id,
            name: name.into(),
            uploaded_at: Utc::now(),
            request,
            response,
        })
    }
}

/// Content hash of a request/response pair, used as the instance id.
pub fn content_id(request: &Request, response: &Response) -> Result<InstanceId, serde_json::Error> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(request)?);
    hasher.update(serde_json::to_vec(response)?);
    Ok(InstanceId::new(hex::encode(hasher.finalize())))
}
