//! Store Info Model

use serde::{Deserialize, Serialize};

/// Restaurant profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub open_hours: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "Bistro Noory".into(),
            address: String::new(),
            phone: String::new(),
            open_hours: String::new(),
        }
    }
}

/// Update store info payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfoUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub open_hours: Option<String>,
}
