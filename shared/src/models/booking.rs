//! Booking Model (bokning)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking lifecycle status.
///
/// `completed` and `cancelled` bookings are excluded from every occupancy
/// query even if their `table` field is still set; the seating engine never
/// clears the pointer on those transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Arrived,
    Completed,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    /// Whether a booking in this status takes part in seating queries.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Allowed transitions. `completed`, `cancelled` and `noshow` are
    /// terminal; an arrived guest can still cancel before ordering.
    pub fn can_transition_to(self, next: Self) -> bool {
        match self {
            Self::Confirmed => matches!(next, Self::Arrived | Self::NoShow | Self::Cancelled),
            Self::Arrived => matches!(next, Self::Completed | Self::Cancelled),
            Self::Completed | Self::Cancelled | Self::NoShow => false,
        }
    }
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    /// Booking date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Booking time (HH:MM); informational, the seating engine never reads it
    pub time: String,
    pub guests: u32,
    pub status: BookingStatus,
    /// Table the booking is seated at; `None` = unseated (waiting list)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Create booking payload. New bookings start `confirmed` and unseated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub customer_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub guests: u32,
    pub notes: Option<String>,
}

/// Update booking payload. Status and table have dedicated operations and
/// are deliberately absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    pub customer_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub guests: Option<u32>,
    pub notes: Option<String>,
}
