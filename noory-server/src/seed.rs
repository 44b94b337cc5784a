//! Demo seed data
//!
//! The back office runs without persistence by design: state is ephemeral
//! and reset on restart. Development and sales-demo runs therefore boot
//! with a populated restaurant: tonight's bookings, the menu card, the
//! roster and a stocked pantry.

use chrono::NaiveDate;
use shared::models::{
    Booking, BookingStatus, InventoryItem, MenuCategory, MenuItem, ScheduledShift, ShiftDay,
    StaffMember, StaffStatus, StockUnit, StoreInfo,
};

fn menu_item(
    id: &str,
    name: &str,
    category: MenuCategory,
    price: f64,
    cost_price: Option<f64>,
    description: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price,
        cost_price,
        sales_count: 0,
        description: description.to_string(),
        available: true,
        image: None,
        ingredients: vec![],
        modifiers: vec![],
    }
}

pub fn demo_menu() -> Vec<MenuItem> {
    use MenuCategory::*;
    vec![
        menu_item("1", "Löjromstoast", Starter, 195.0, Some(85.0), "Kalix löjrom, smetana, rödlök"),
        menu_item("2", "Råbiff", Starter, 165.0, Some(60.0), "Svensk oxrulle, dijonnaise, kapris"),
        menu_item("3", "Grillad Röding", Main, 295.0, Some(110.0), "Sandefjordsås, forellrom, dillpotatis"),
        menu_item("4", "Oxfilé Provencale", Main, 345.0, Some(140.0), "Råstekt potatis, vitlökssmör, haricots verts"),
        menu_item("5", "Wallenbergare", Main, 225.0, Some(75.0), "Potatispuré, gröna ärtor, lingon"),
        menu_item("6", "Tryffelpasta", Main, 245.0, Some(70.0), "Färsk tryffel, parmesan, grädde"),
        menu_item("7", "Crème Brûlée", Dessert, 115.0, Some(25.0), "Klassisk vanilj"),
        menu_item("8", "Chokladfondant", Dessert, 125.0, Some(30.0), "Vaniljglass, hallon"),
        menu_item("9", "Husets Rödvin", Drink, 110.0, Some(55.0), "Glas"),
        menu_item("10", "IPA Fat", Drink, 89.0, Some(22.0), "40cl"),
        menu_item("11", "Cola Zero", Drink, 39.0, Some(8.0), "33cl"),
        menu_item("12", "Kaffe", Drink, 35.0, Some(4.0), "Brygg"),
    ]
}

fn booking(
    id: &str,
    name: &str,
    date: NaiveDate,
    time: &str,
    guests: u32,
    status: BookingStatus,
    table: Option<&str>,
) -> Booking {
    Booking {
        id: id.to_string(),
        customer_name: name.to_string(),
        date,
        time: time.to_string(),
        guests,
        status,
        table: table.map(str::to_string),
        notes: None,
    }
}

/// Tonight's book, as the floor sees it at service start.
pub fn demo_bookings(today: NaiveDate) -> Vec<Booking> {
    use BookingStatus::*;
    vec![
        booking("B1", "Anna Lindberg", today, "17:00", 2, Arrived, Some("4")),
        booking("B2", "Johan Ek", today, "17:30", 4, Confirmed, Some("6")),
        booking("B3", "Företaget AB", today, "18:00", 8, Confirmed, Some("12")),
        booking("B4", "Maria Svensson", today, "18:30", 2, Confirmed, None),
        booking("B5", "Erik Granqvist", today, "19:00", 3, NoShow, None),
        booking("B6", "Lars Larsson", today, "19:30", 2, Confirmed, None),
        booking("B7", "Karin Persson", today, "20:00", 5, Confirmed, None),
    ]
}

pub fn demo_staff() -> Vec<StaffMember> {
    let staff = [
        ("S1", "Lisa Nilsson", "Hovmästare", StaffStatus::Active),
        ("S2", "Kalle Kock", "Kökschef", StaffStatus::Active),
        ("S3", "Sara Servis", "Servis", StaffStatus::Break),
        ("S4", "Pelle Plock", "Runner", StaffStatus::Off),
        ("S5", "Maja Bar", "Bartender", StaffStatus::Active),
    ];
    staff
        .iter()
        .enumerate()
        .map(|(i, (id, name, role, status))| StaffMember {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            status: *status,
            avatar: format!("https://picsum.photos/100/100?random={}", i + 1),
        })
        .collect()
}

fn shift(id: &str, staff_id: &str, staff_name: &str, day: ShiftDay, note: Option<&str>) -> ScheduledShift {
    ScheduledShift {
        id: id.to_string(),
        staff_id: staff_id.to_string(),
        staff_name: staff_name.to_string(),
        day,
        starts: "16:00".to_string(),
        ends: "23:00".to_string(),
        note: note.map(str::to_string),
    }
}

/// The service-heavy end of the week, plus an extra hand on Friday.
pub fn demo_shifts() -> Vec<ScheduledShift> {
    vec![
        shift("W1", "S3", "Sara Servis", ShiftDay::Thu, None),
        shift("W2", "S3", "Sara Servis", ShiftDay::Fri, None),
        shift("W3", "S3", "Sara Servis", ShiftDay::Sat, None),
        shift("W4", "S2", "Kalle Kock", ShiftDay::Fri, Some("Extra")),
        shift("W5", "S5", "Maja Bar", ShiftDay::Fri, None),
        shift("W6", "S5", "Maja Bar", ShiftDay::Sat, None),
    ]
}

fn stock(
    id: &str,
    name: &str,
    category: &str,
    quantity: f64,
    unit: StockUnit,
    min_threshold: f64,
    cost_price: f64,
    supplier: &str,
    stamp: &str,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        unit,
        min_threshold,
        cost_price,
        supplier: supplier.to_string(),
        last_updated: stamp.to_string(),
    }
}

pub fn demo_inventory() -> Vec<InventoryItem> {
    let stamp = chrono::Utc::now().to_rfc3339();
    vec![
        // Four bottles left, below the reorder threshold
        stock("I1", "Husets Rödvin", "Dryck", 4.0, StockUnit::Piece, 6.0, 55.0, "Vinimport AB", &stamp),
        stock("I2", "Oxfilé", "Kött", 8.5, StockUnit::Kg, 3.0, 400.0, "Gårdsgrossisten", &stamp),
        stock("I3", "Kalix Löjrom", "Fisk", 1.2, StockUnit::Kg, 0.5, 2400.0, "Norrfisk", &stamp),
        stock("I4", "Vispgrädde", "Mejeri", 6.0, StockUnit::Liter, 4.0, 28.0, "Mejerigrossisten", &stamp),
        stock("I5", "Kaffe", "Kolonial", 12.0, StockUnit::Packet, 4.0, 89.0, "Bönor & Blad", &stamp),
    ]
}

pub fn demo_store_info() -> StoreInfo {
    StoreInfo {
        name: "Bistro Noory".to_string(),
        address: "Storgatan 1, Stockholm".to_string(),
        phone: "08-123 45 67".to_string(),
        open_hours: "11:00 - 22:00".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_bookings_respect_single_occupancy() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let bookings = demo_bookings(today);
        for b in &bookings {
            if let Some(table) = &b.table {
                let holders = bookings
                    .iter()
                    .filter(|other| {
                        other.status.is_active() && other.table.as_deref() == Some(table)
                    })
                    .count();
                assert_eq!(holders, 1, "table {table} double-booked in seed");
            }
        }
    }

    #[test]
    fn seeded_shifts_reference_seeded_staff() {
        let staff = demo_staff();
        for shift in demo_shifts() {
            assert!(staff.iter().any(|s| s.id == shift.staff_id));
        }
    }

    #[test]
    fn seed_has_a_low_stock_alert() {
        assert!(demo_inventory().iter().any(|i| i.is_low()));
    }
}
