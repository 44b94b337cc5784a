//! Dining Table View (桌台)
//!
//! Tables are not stored entities: the floor is a fixed numbered range
//! ("1".."N") derived at query time. A table is occupied when exactly one
//! active booking references it by id.

use serde::{Deserialize, Serialize};

use super::booking::Booking;

/// One table on the floor map, with its occupant if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupant: Option<Booking>,
}
