//! 资源变更事件
//!
//! Every state mutation on the server publishes one `ChangeEvent` on the
//! in-process broadcast hub. Versions are per-resource monotonic counters so
//! a consumer can detect missed updates after a lagging subscription.

use serde::{Deserialize, Serialize};

/// A single resource change, fanned out to all subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    /// Resource type ("booking", "menu_item", "order", ...)
    pub resource: String,
    /// Per-resource monotonic version
    pub version: u64,
    /// What happened ("created", "updated", "deleted", "seated", "swapped", ...)
    pub action: String,
    /// Id of the affected entity
    pub id: String,
    /// Entity payload after the change (absent for deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// User-facing notification text, when the change warrants a toast
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
