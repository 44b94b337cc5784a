//! Scheduled Shift Model (veckoschema)
//!
//! One slot in the weekly schedule grid. Shifts are stored facts; overlap
//! between different staff is allowed, duplicate slots for the same member
//! are not.

use serde::{Deserialize, Serialize};

/// Day of the schedule week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl ShiftDay {
    pub const ALL: [ShiftDay; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];
}

/// Scheduled shift entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledShift {
    pub id: String,
    pub staff_id: String,
    /// Denormalized display name, resolved at creation
    pub staff_name: String,
    pub day: ShiftDay,
    /// Shift start (HH:MM)
    pub starts: String,
    /// Shift end (HH:MM)
    pub ends: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Create shift payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftCreate {
    pub staff_id: String,
    pub day: ShiftDay,
    pub starts: String,
    pub ends: String,
    pub note: Option<String>,
}
