//! Identifier newtypes shared across the instance model and the analyses.
//!
//! The solver's wire format uses plain strings for all identifiers; wrapping
//! them keeps depot, vehicle, and vehicle-type ids from being mixed up inside
//! the reconstruction code.

use serde::{Deserialize, Serialize};

/// Depot identifier (e.g. `depot_ZH`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DepotId(pub String);

/// Vehicle identifier, unique within a response's fleet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub String);

/// Vehicle type identifier (e.g. `IC`, `RE`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VehicleTypeId(pub String);

/// Stored instance identifier, derived from the content hash of the uploaded
/// request/response pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub String);

impl DepotId {
    pub fn new(value: impl Into<String>) -> Self {
        DepotId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl VehicleId {
    pub fn new(value: impl Into<String>) -> Self {
        VehicleId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl VehicleTypeId {
    pub fn new(value: impl Into<String>) -> Self {
        VehicleTypeId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl InstanceId {
    pub fn new(value: impl Into<String>) -> Self {
        InstanceId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DepotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for VehicleTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DepotId {
    fn from(value: &str) -> Self {
        DepotId(value.to_string())
    }
}
impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        VehicleId(value.to_string())
    }
}
impl From<&str> for VehicleTypeId {
    fn from(value: &str) -> Self {
        VehicleTypeId(value.to_string())
    }
}
impl From<&str> for InstanceId {
    fn from(value: &str) -> Self {
        InstanceId(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot_id_roundtrip() {
        let id = DepotId::new("depot_ZH");
        assert_eq!(id.as_str(), "depot_ZH");
        assert_eq!(id.to_string(), "depot_ZH");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = VehicleTypeId::new("IC");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"IC\"");
        let back: VehicleTypeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ids_are_ordered() {
        let a = VehicleId::new("v1");
        let b = VehicleId::new("v2");
        assert!(a < b);
    }
}
