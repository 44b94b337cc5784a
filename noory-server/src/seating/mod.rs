//! Seating Assignment Engine
//!
//! Pure state transitions over the booking collection. The engine owns no
//! state and does no I/O: every operation takes the current collection and
//! returns the next version plus an outcome describing what happened
//! ([`BookingBook`](crate::bookings::BookingBook) swaps the new collection in
//! under its write lock).
//!
//! Invariant: for any table id, at most one *active* booking (status not
//! `completed`/`cancelled`) references it. Completed and cancelled bookings
//! may keep a stale `table` pointer; queries filter them out, so staleness
//! is never observable and never blocks a new assignment.

use shared::models::Booking;

/// Result of a seating transition.
///
/// `AlreadySeated` and `NotFound` are the two silent no-ops: the returned
/// collection is the input, unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum SeatingOutcome {
    /// Booking landed on an empty table
    Seated {
        booking_id: String,
        customer_name: String,
        table: String,
    },
    /// The target table had an active occupant; the occupant always lands on
    /// the mover's previous table (possibly none, unseating it)
    Swapped {
        booking_id: String,
        customer_name: String,
        other_id: String,
        other_name: String,
        table: String,
        previous_table: Option<String>,
    },
    /// Booking returned to the waiting list
    Unseated {
        booking_id: String,
        customer_name: String,
    },
    /// Dropped on the table it already occupies
    AlreadySeated,
    /// Unknown booking id
    NotFound,
}

impl SeatingOutcome {
    /// Whether the operation produced a new collection.
    pub fn changed(&self) -> bool {
        !matches!(self, Self::AlreadySeated | Self::NotFound)
    }

    /// User-facing notification text, `None` for the silent no-ops.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Seated {
                customer_name,
                table,
                ..
            } => Some(format!("{customer_name} placerad på bord {table}")),
            Self::Swapped {
                customer_name,
                other_name,
                ..
            } => Some(format!("Växlade plats: {customer_name} <-> {other_name}")),
            Self::Unseated { .. } => Some("Bokning borttagen från bord".to_string()),
            Self::AlreadySeated | Self::NotFound => None,
        }
    }
}

/// The at-most-one active booking seated at `table_id`.
///
/// Scans only active bookings: a stale reference on a completed or cancelled
/// booking is never returned.
pub fn occupant_of<'a>(bookings: &'a [Booking], table_id: &str) -> Option<&'a Booking> {
    bookings
        .iter()
        .find(|b| b.status.is_active() && b.table.as_deref() == Some(table_id))
}

/// The waiting list: active bookings without a table, original order kept.
pub fn unseated_bookings(bookings: &[Booking]) -> impl Iterator<Item = &Booking> {
    bookings
        .iter()
        .filter(|b| b.table.is_none() && b.status.is_active())
}

/// Move a booking onto a table, swapping with the active occupant if there
/// is one.
pub fn assign_to_table(
    bookings: &[Booking],
    booking_id: &str,
    target_table: &str,
) -> (Vec<Booking>, SeatingOutcome) {
    let Some(source) = bookings.iter().find(|b| b.id == booking_id) else {
        return (bookings.to_vec(), SeatingOutcome::NotFound);
    };

    // Idempotent self-drop guard
    if source.table.as_deref() == Some(target_table) {
        return (bookings.to_vec(), SeatingOutcome::AlreadySeated);
    }

    let previous_table = source.table.clone();
    let occupant = bookings
        .iter()
        .find(|b| {
            b.id != booking_id
                && b.status.is_active()
                && b.table.as_deref() == Some(target_table)
        })
        .map(|b| (b.id.clone(), b.customer_name.clone()));

    let next = bookings
        .iter()
        .cloned()
        .map(|mut b| {
            if b.id == booking_id {
                b.table = Some(target_table.to_string());
            } else if occupant.as_ref().is_some_and(|(id, _)| *id == b.id) {
                b.table = previous_table.clone();
            }
            b
        })
        .collect();

    let outcome = match occupant {
        Some((other_id, other_name)) => SeatingOutcome::Swapped {
            booking_id: source.id.clone(),
            customer_name: source.customer_name.clone(),
            other_id,
            other_name,
            table: target_table.to_string(),
            previous_table,
        },
        None => SeatingOutcome::Seated {
            booking_id: source.id.clone(),
            customer_name: source.customer_name.clone(),
            table: target_table.to_string(),
        },
    };

    (next, outcome)
}

/// Return a booking to the waiting list, regardless of its previous table.
/// Repeated unseat is idempotent.
pub fn unseat(bookings: &[Booking], booking_id: &str) -> (Vec<Booking>, SeatingOutcome) {
    let Some(source) = bookings.iter().find(|b| b.id == booking_id) else {
        return (bookings.to_vec(), SeatingOutcome::NotFound);
    };

    let outcome = SeatingOutcome::Unseated {
        booking_id: source.id.clone(),
        customer_name: source.customer_name.clone(),
    };

    let next = bookings
        .iter()
        .cloned()
        .map(|mut b| {
            if b.id == booking_id {
                b.table = None;
            }
            b
        })
        .collect();

    (next, outcome)
}

#[cfg(test)]
mod tests;
