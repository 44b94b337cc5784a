//! Staff Model (personal)

use serde::{Deserialize, Serialize};

/// On-floor presence status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    Active,
    Break,
    Off,
}

/// Staff member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    /// Free-text role title (Hovmästare, Kökschef, ...)
    pub role: String,
    pub status: StaffStatus,
    pub avatar: String,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreate {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Update staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub status: Option<StaffStatus>,
    pub avatar: Option<String>,
}
