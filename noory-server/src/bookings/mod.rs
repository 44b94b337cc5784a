//! BookingBook - booking collection owner and command surface
//!
//! This module handles:
//! - Booking CRUD
//! - Status transitions (check-in, no-show, completion, cancellation)
//! - Seating commands, delegated to the pure engine in [`crate::seating`]
//! - Change-event broadcasting (via [`EventHub`])
//!
//! # Command Flow
//!
//! ```text
//! seat(booking_id, table)
//!     ├─ 1. Validate the table id against the floor ("1"..=N)
//!     ├─ 2. Take the write lock
//!     ├─ 3. Run the pure transition (assign_to_table)
//!     ├─ 4. Swap the new collection in (functional update)
//!     ├─ 5. Broadcast the outcome notice
//!     └─ 6. Return the updated booking + outcome
//! ```
//!
//! The engine's silent no-ops are upgraded here for the network boundary:
//! unknown ids become [`BookingError::NotFound`]; the idempotent self-drop
//! stays a success (nothing changed, no event).

use chrono::NaiveDate;
use parking_lot::RwLock;
use shared::models::{Booking, BookingCreate, BookingStatus, BookingUpdate, TableView};
use thiserror::Error;
use uuid::Uuid;

use crate::events::EventHub;
use crate::seating::{self, SeatingOutcome};
use crate::utils::AppError;

const RESOURCE: &str = "booking";

/// Booking command errors
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Invalid status transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound(_) => AppError::not_found(err.to_string()),
            BookingError::UnknownTable(_) => AppError::validation(err.to_string()),
            BookingError::InvalidTransition { .. } => AppError::business_rule(err.to_string()),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

/// Owner of the booking collection.
///
/// All mutations run to completion under the write lock, so the seating
/// engine always sees a consistent collection and its single-occupancy
/// invariant survives interleaved commands.
pub struct BookingBook {
    bookings: RwLock<Vec<Booking>>,
    events: EventHub,
    table_count: u32,
}

impl BookingBook {
    pub fn new(events: EventHub, table_count: u32) -> Self {
        Self {
            bookings: RwLock::new(Vec::new()),
            events,
            table_count,
        }
    }

    /// Create with a pre-populated collection (seed / tests).
    pub fn with_bookings(events: EventHub, table_count: u32, bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
            events,
            table_count,
        }
    }

    fn next_id() -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("B{}", &uuid[..8])
    }

    fn is_known_table(&self, id: &str) -> bool {
        match id.parse::<u32>() {
            Ok(n) => n >= 1 && n <= self.table_count && n.to_string() == id,
            Err(_) => false,
        }
    }

    // ========== Queries ==========

    pub fn list(&self) -> Vec<Booking> {
        self.bookings.read().clone()
    }

    pub fn list_for_date(&self, date: NaiveDate) -> Vec<Booking> {
        self.bookings
            .read()
            .iter()
            .filter(|b| b.date == date)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> BookingResult<Booking> {
        self.bookings
            .read()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| BookingError::NotFound(id.to_string()))
    }

    /// The waiting list panel: active bookings without a table.
    pub fn unseated(&self) -> Vec<Booking> {
        let guard = self.bookings.read();
        seating::unseated_bookings(&guard).cloned().collect()
    }

    /// The floor map: every table with its occupant, derived on the fly.
    pub fn floor_map(&self) -> Vec<TableView> {
        let guard = self.bookings.read();
        (1..=self.table_count)
            .map(|n| {
                let id = n.to_string();
                let occupant = seating::occupant_of(&guard, &id).cloned();
                TableView { id, occupant }
            })
            .collect()
    }

    /// Count of bookings that still matter tonight (confirmed or arrived).
    pub fn active_count(&self) -> usize {
        self.bookings
            .read()
            .iter()
            .filter(|b| matches!(b.status, BookingStatus::Confirmed | BookingStatus::Arrived))
            .count()
    }

    // ========== Commands ==========

    /// Create a booking. New bookings start `confirmed` and unseated.
    pub fn create(&self, payload: BookingCreate) -> Booking {
        let booking = Booking {
            id: Self::next_id(),
            customer_name: payload.customer_name,
            date: payload.date,
            time: payload.time,
            guests: payload.guests,
            status: BookingStatus::Confirmed,
            table: None,
            notes: payload.notes,
        };
        self.bookings.write().push(booking.clone());
        tracing::info!(booking_id = %booking.id, guests = booking.guests, "Booking created");
        self.events.publish(
            RESOURCE,
            "created",
            &booking.id,
            Some(&booking),
            Some("Bokning skapad!".to_string()),
        );
        booking
    }

    pub fn update(&self, id: &str, payload: BookingUpdate) -> BookingResult<Booking> {
        let mut guard = self.bookings.write();
        let booking = guard
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        if let Some(name) = payload.customer_name {
            booking.customer_name = name;
        }
        if let Some(date) = payload.date {
            booking.date = date;
        }
        if let Some(time) = payload.time {
            booking.time = time;
        }
        if let Some(guests) = payload.guests {
            booking.guests = guests;
        }
        if let Some(notes) = payload.notes {
            booking.notes = Some(notes);
        }

        let updated = booking.clone();
        drop(guard);
        self.events
            .publish(RESOURCE, "updated", id, Some(&updated), None);
        Ok(updated)
    }

    pub fn remove(&self, id: &str) -> BookingResult<()> {
        let mut guard = self.bookings.write();
        let before = guard.len();
        guard.retain(|b| b.id != id);
        if guard.len() == before {
            return Err(BookingError::NotFound(id.to_string()));
        }
        drop(guard);
        self.events
            .publish::<()>(RESOURCE, "deleted", id, None, None);
        Ok(())
    }

    /// Set the status field only; the `table` pointer is deliberately left
    /// alone, even on completion/cancellation (stale pointers are filtered
    /// out of every occupancy query instead).
    pub fn set_status(&self, id: &str, next: BookingStatus) -> BookingResult<Booking> {
        let mut guard = self.bookings.write();
        let booking = guard
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        if !booking.status.can_transition_to(next) {
            return Err(BookingError::InvalidTransition {
                from: booking.status,
                to: next,
            });
        }

        booking.status = next;
        let updated = booking.clone();
        drop(guard);

        let notice = match next {
            BookingStatus::Arrived => Some("Gäst incheckad".to_string()),
            BookingStatus::NoShow => Some("Gäst markerad som No-show".to_string()),
            _ => None,
        };
        tracing::info!(booking_id = %id, status = ?next, "Booking status changed");
        self.events
            .publish(RESOURCE, "status", id, Some(&updated), notice);
        Ok(updated)
    }

    /// Seat a booking at a table (drop-on-table gesture).
    pub fn seat(&self, id: &str, table: &str) -> BookingResult<(Booking, SeatingOutcome)> {
        if !self.is_known_table(table) {
            return Err(BookingError::UnknownTable(table.to_string()));
        }

        let mut guard = self.bookings.write();
        let (next, outcome) = seating::assign_to_table(&guard, id, table);
        match &outcome {
            SeatingOutcome::NotFound => Err(BookingError::NotFound(id.to_string())),
            SeatingOutcome::AlreadySeated => {
                let booking = guard.iter().find(|b| b.id == id).cloned().expect("exists");
                Ok((booking, outcome))
            }
            _ => {
                *guard = next;
                let booking = guard.iter().find(|b| b.id == id).cloned().expect("exists");
                drop(guard);

                let action = match &outcome {
                    SeatingOutcome::Swapped { .. } => "swapped",
                    _ => "seated",
                };
                tracing::info!(booking_id = %id, table = %table, action, "Booking seated");
                self.events
                    .publish(RESOURCE, action, id, Some(&booking), outcome.notice());
                Ok((booking, outcome))
            }
        }
    }

    /// Return a booking to the waiting list (drop-on-unseated gesture).
    pub fn unseat(&self, id: &str) -> BookingResult<(Booking, SeatingOutcome)> {
        let mut guard = self.bookings.write();
        let (next, outcome) = seating::unseat(&guard, id);
        match &outcome {
            SeatingOutcome::NotFound => Err(BookingError::NotFound(id.to_string())),
            _ => {
                *guard = next;
                let booking = guard.iter().find(|b| b.id == id).cloned().expect("exists");
                drop(guard);

                tracing::info!(booking_id = %id, "Booking unseated");
                self.events
                    .publish(RESOURCE, "unseated", id, Some(&booking), outcome.notice());
                Ok((booking, outcome))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn book(events: EventHub) -> BookingBook {
        BookingBook::new(events, 12)
    }

    fn create_payload(name: &str) -> BookingCreate {
        BookingCreate {
            customer_name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            time: "18:30".to_string(),
            guests: 2,
            notes: None,
        }
    }

    #[test]
    fn create_starts_confirmed_and_unseated() {
        let book = book(EventHub::new());
        let b = book.create(create_payload("Anna"));
        assert_eq!(b.status, BookingStatus::Confirmed);
        assert!(b.table.is_none());
        assert!(b.id.starts_with('B'));
        assert_eq!(book.list().len(), 1);
    }

    #[test]
    fn status_machine_enforced() {
        let book = book(EventHub::new());
        let b = book.create(create_payload("Anna"));

        let b = book.set_status(&b.id, BookingStatus::Arrived).unwrap();
        assert_eq!(b.status, BookingStatus::Arrived);

        let b = book.set_status(&b.id, BookingStatus::Completed).unwrap();
        assert_eq!(b.status, BookingStatus::Completed);

        // Completed is terminal
        let err = book.set_status(&b.id, BookingStatus::Confirmed).unwrap_err();
        assert!(matches!(err, BookingError::InvalidTransition { .. }));
    }

    #[test]
    fn confirmed_cannot_jump_to_completed() {
        let book = book(EventHub::new());
        let b = book.create(create_payload("Anna"));
        let err = book.set_status(&b.id, BookingStatus::Completed).unwrap_err();
        assert!(matches!(err, BookingError::InvalidTransition { .. }));
    }

    #[test]
    fn completion_keeps_the_stale_table_pointer() {
        let book = book(EventHub::new());
        let b = book.create(create_payload("Anna"));
        book.seat(&b.id, "4").unwrap();
        book.set_status(&b.id, BookingStatus::Arrived).unwrap();
        book.set_status(&b.id, BookingStatus::Completed).unwrap();

        // The field keeps its value...
        assert_eq!(book.get(&b.id).unwrap().table.as_deref(), Some("4"));
        // ...but the table reads as free
        let map = book.floor_map();
        let t4 = map.iter().find(|t| t.id == "4").unwrap();
        assert!(t4.occupant.is_none());
    }

    #[test]
    fn seat_and_swap_through_the_manager() {
        let book = book(EventHub::new());
        let a = book.create(create_payload("Anna"));
        let j = book.create(create_payload("Johan"));

        book.seat(&a.id, "4").unwrap();
        book.seat(&j.id, "6").unwrap();

        let (moved, outcome) = book.seat(&a.id, "6").unwrap();
        assert_eq!(moved.table.as_deref(), Some("6"));
        assert!(matches!(outcome, SeatingOutcome::Swapped { .. }));
        assert_eq!(book.get(&j.id).unwrap().table.as_deref(), Some("4"));
    }

    #[test]
    fn seat_rejects_unknown_table() {
        let book = book(EventHub::new());
        let b = book.create(create_payload("Anna"));
        let err = book.seat(&b.id, "13").unwrap_err();
        assert!(matches!(err, BookingError::UnknownTable(_)));
        let err = book.seat(&b.id, "bar").unwrap_err();
        assert!(matches!(err, BookingError::UnknownTable(_)));
    }

    #[test]
    fn seat_unknown_booking_is_not_found() {
        let book = book(EventHub::new());
        let err = book.seat("nope", "4").unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }

    #[test]
    fn self_drop_returns_success_without_event() {
        let hub = EventHub::new();
        let book = book(hub.clone());
        let b = book.create(create_payload("Anna"));
        book.seat(&b.id, "4").unwrap();

        let version_before = hub.version("booking");
        let (_, outcome) = book.seat(&b.id, "4").unwrap();
        assert_eq!(outcome, SeatingOutcome::AlreadySeated);
        assert_eq!(hub.version("booking"), version_before, "no event published");
    }

    #[test]
    fn unseat_clears_and_repeats() {
        let book = book(EventHub::new());
        let b = book.create(create_payload("Anna"));
        book.seat(&b.id, "4").unwrap();

        let (b1, _) = book.unseat(&b.id).unwrap();
        assert!(b1.table.is_none());
        let (b2, _) = book.unseat(&b.id).unwrap();
        assert!(b2.table.is_none());
    }

    #[test]
    fn check_in_publishes_notice() {
        let hub = EventHub::new();
        let book = book(hub.clone());
        let mut rx = hub.subscribe();
        let b = book.create(create_payload("Anna"));
        let _ = rx.try_recv().unwrap(); // created event

        book.set_status(&b.id, BookingStatus::Arrived).unwrap();
        let event = rx.try_recv().unwrap();
        assert_eq!(event.action, "status");
        assert_eq!(event.notice.as_deref(), Some("Gäst incheckad"));
    }

    #[test]
    fn unseated_panel_matches_engine_filter() {
        let book = book(EventHub::new());
        let a = book.create(create_payload("Anna"));
        let b = book.create(create_payload("Johan"));
        let c = book.create(create_payload("Karin"));

        book.seat(&a.id, "4").unwrap();
        book.set_status(&c.id, BookingStatus::Cancelled).unwrap();

        let waiting: Vec<String> = book.unseated().into_iter().map(|b| b.id).collect();
        assert_eq!(waiting, vec![b.id]);
    }

    #[test]
    fn delete_removes_booking() {
        let book = book(EventHub::new());
        let b = book.create(create_payload("Anna"));
        book.remove(&b.id).unwrap();
        assert!(matches!(book.get(&b.id), Err(BookingError::NotFound(_))));
        assert!(matches!(book.remove(&b.id), Err(BookingError::NotFound(_))));
    }
}
