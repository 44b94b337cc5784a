use chrono::NaiveDate;
use shared::models::{Booking, BookingStatus};

use super::*;

fn booking(id: &str, name: &str, table: Option<&str>, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        customer_name: name.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
        time: "18:00".to_string(),
        guests: 2,
        status,
        table: table.map(str::to_string),
        notes: None,
    }
}

fn table_of<'a>(bookings: &'a [Booking], id: &str) -> Option<&'a str> {
    bookings
        .iter()
        .find(|b| b.id == id)
        .and_then(|b| b.table.as_deref())
}

/// Single-occupancy invariant: no table is referenced by more than one
/// active booking.
fn assert_single_occupancy(bookings: &[Booking]) {
    for table in bookings.iter().filter_map(|b| b.table.as_deref()) {
        let holders = bookings
            .iter()
            .filter(|b| b.status.is_active() && b.table.as_deref() == Some(table))
            .count();
        assert!(
            holders <= 1,
            "table {} held by {} active bookings",
            table,
            holders
        );
    }
}

// ========================================================================
// assign_to_table
// ========================================================================

#[test]
fn move_to_empty_table() {
    let state = vec![
        booking("B1", "Anna", None, BookingStatus::Confirmed),
        booking("B2", "Johan", Some("6"), BookingStatus::Confirmed),
    ];

    let (next, outcome) = assign_to_table(&state, "B1", "9");

    assert_eq!(table_of(&next, "B1"), Some("9"));
    assert_eq!(table_of(&next, "B2"), Some("6"), "other bookings unchanged");
    assert!(matches!(outcome, SeatingOutcome::Seated { .. }));
    assert_eq!(outcome.notice().unwrap(), "Anna placerad på bord 9");
    assert_single_occupancy(&next);
}

#[test]
fn swap_between_two_seated_bookings() {
    let state = vec![
        booking("A", "Anna", Some("4"), BookingStatus::Arrived),
        booking("B", "Johan", Some("6"), BookingStatus::Confirmed),
        booking("C", "Karin", Some("8"), BookingStatus::Confirmed),
    ];

    let (next, outcome) = assign_to_table(&state, "A", "6");

    assert_eq!(table_of(&next, "A"), Some("6"));
    assert_eq!(table_of(&next, "B"), Some("4"), "occupant lands on the mover's old table");
    assert_eq!(table_of(&next, "C"), Some("8"), "bystander untouched");
    assert_eq!(outcome.notice().unwrap(), "Växlade plats: Anna <-> Johan");
    assert_single_occupancy(&next);
}

#[test]
fn swap_from_waiting_list_unseats_occupant() {
    // The concrete scenario: B1 arrived on table 4, B2 confirmed and
    // unseated. Assigning B2 to table 4 must unseat B1 (swap, not
    // displacement-to-limbo plus a copy).
    let state = vec![
        booking("B1", "Anna Lindberg", Some("4"), BookingStatus::Arrived),
        booking("B2", "Maria Svensson", None, BookingStatus::Confirmed),
    ];

    let (next, outcome) = assign_to_table(&state, "B2", "4");

    assert_eq!(table_of(&next, "B2"), Some("4"));
    assert_eq!(table_of(&next, "B1"), None, "occupant inherits the empty slot");
    assert!(matches!(outcome, SeatingOutcome::Swapped { .. }));
    assert_single_occupancy(&next);
}

#[test]
fn self_drop_is_a_noop() {
    let state = vec![booking("A", "Anna", Some("4"), BookingStatus::Confirmed)];

    let (next, outcome) = assign_to_table(&state, "A", "4");

    assert_eq!(outcome, SeatingOutcome::AlreadySeated);
    assert!(!outcome.changed());
    assert!(outcome.notice().is_none());
    assert_eq!(table_of(&next, "A"), Some("4"));
}

#[test]
fn unknown_booking_is_a_noop() {
    let state = vec![booking("A", "Anna", Some("4"), BookingStatus::Confirmed)];

    let (next, outcome) = assign_to_table(&state, "nope", "6");

    assert_eq!(outcome, SeatingOutcome::NotFound);
    assert!(!outcome.changed());
    assert_eq!(next.len(), 1);
    assert_eq!(table_of(&next, "A"), Some("4"));
}

#[test]
fn stale_completed_reference_does_not_block_assignment() {
    // A completed booking still pointing at table 7 must neither show up as
    // occupant nor force a swap.
    let state = vec![
        booking("done", "Erik", Some("7"), BookingStatus::Completed),
        booking("A", "Anna", None, BookingStatus::Confirmed),
    ];

    assert!(occupant_of(&state, "7").is_none());

    let (next, outcome) = assign_to_table(&state, "A", "7");

    assert!(matches!(outcome, SeatingOutcome::Seated { .. }));
    assert_eq!(table_of(&next, "A"), Some("7"));
    // The stale pointer is tolerated, not cleaned up
    assert_eq!(table_of(&next, "done"), Some("7"));
    assert_single_occupancy(&next);
}

#[test]
fn cancelled_occupant_is_ignored_too() {
    let state = vec![
        booking("gone", "Lars", Some("3"), BookingStatus::Cancelled),
        booking("A", "Anna", Some("5"), BookingStatus::Arrived),
    ];

    let (next, outcome) = assign_to_table(&state, "A", "3");

    assert!(matches!(outcome, SeatingOutcome::Seated { .. }), "no swap with a cancelled booking");
    assert_eq!(table_of(&next, "A"), Some("3"));
    assert_eq!(table_of(&next, "gone"), Some("3"));
}

#[test]
fn noshow_booking_still_occupies_its_table() {
    // Only completed/cancelled are excluded from occupancy; a no-show that
    // was already seated keeps its table until someone takes it.
    let state = vec![
        booking("ns", "Erik", Some("2"), BookingStatus::NoShow),
        booking("A", "Anna", None, BookingStatus::Confirmed),
    ];

    assert_eq!(occupant_of(&state, "2").unwrap().id, "ns");

    let (next, outcome) = assign_to_table(&state, "A", "2");
    assert!(matches!(outcome, SeatingOutcome::Swapped { .. }));
    assert_eq!(table_of(&next, "ns"), None);
    assert_single_occupancy(&next);
}

// ========================================================================
// unseat
// ========================================================================

#[test]
fn unseat_clears_table_and_is_idempotent() {
    let state = vec![booking("A", "Anna", Some("4"), BookingStatus::Arrived)];

    let (next, outcome) = unseat(&state, "A");
    assert_eq!(table_of(&next, "A"), None);
    assert!(matches!(outcome, SeatingOutcome::Unseated { .. }));
    assert_eq!(outcome.notice().unwrap(), "Bokning borttagen från bord");

    let (again, outcome) = unseat(&next, "A");
    assert_eq!(table_of(&again, "A"), None);
    assert!(matches!(outcome, SeatingOutcome::Unseated { .. }));
}

#[test]
fn unseat_unknown_booking_is_a_noop() {
    let state = vec![booking("A", "Anna", Some("4"), BookingStatus::Arrived)];
    let (next, outcome) = unseat(&state, "nope");
    assert_eq!(outcome, SeatingOutcome::NotFound);
    assert_eq!(table_of(&next, "A"), Some("4"));
}

// ========================================================================
// queries
// ========================================================================

#[test]
fn unseated_bookings_filters_and_keeps_order() {
    let state = vec![
        booking("1", "A", None, BookingStatus::Confirmed),
        booking("2", "B", Some("4"), BookingStatus::Confirmed),
        booking("3", "C", None, BookingStatus::Cancelled),
        booking("4", "D", None, BookingStatus::Completed),
        booking("5", "E", None, BookingStatus::NoShow),
        booking("6", "F", None, BookingStatus::Confirmed),
    ];

    let waiting: Vec<&str> = unseated_bookings(&state).map(|b| b.id.as_str()).collect();

    // cancelled/completed and seated bookings are out; no-show stays visible
    assert_eq!(waiting, vec!["1", "5", "6"]);
}

#[test]
fn occupant_of_empty_table_is_none() {
    let state = vec![booking("A", "Anna", Some("4"), BookingStatus::Confirmed)];
    assert!(occupant_of(&state, "9").is_none());
    assert_eq!(occupant_of(&state, "4").unwrap().id, "A");
}

// ========================================================================
// invariant under operation sequences
// ========================================================================

#[test]
fn invariant_holds_across_a_busy_evening() {
    let mut state = vec![
        booking("B1", "Anna", Some("4"), BookingStatus::Arrived),
        booking("B2", "Johan", Some("6"), BookingStatus::Confirmed),
        booking("B3", "Företaget", Some("12"), BookingStatus::Confirmed),
        booking("B4", "Maria", None, BookingStatus::Confirmed),
        booking("B5", "Erik", None, BookingStatus::NoShow),
        booking("B6", "Lars", None, BookingStatus::Confirmed),
    ];

    let moves: &[(&str, Option<&str>)] = &[
        ("B4", Some("4")),  // swap with B1 → B1 unseated
        ("B1", Some("6")),  // swap with B2 → B2 unseated
        ("B2", Some("1")),  // empty table
        ("B5", Some("2")),  // no-show seated by mistake
        ("B5", None),       // and removed again
        ("B3", Some("12")), // self drop
        ("B6", Some("12")), // swap with B3
        ("B6", None),       // back to the waiting list
        ("B3", Some("12")), // B3 reclaims its table
    ];

    for (id, target) in moves {
        let (next, _) = match target {
            Some(table) => assign_to_table(&state, id, table),
            None => unseat(&state, id),
        };
        assert_single_occupancy(&next);
        state = next;
    }

    assert_eq!(table_of(&state, "B3"), Some("12"));
    assert_eq!(table_of(&state, "B6"), None);
}
