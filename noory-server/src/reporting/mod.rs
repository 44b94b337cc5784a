//! Reporting - dashboard KPIs and sales aggregation
//!
//! Pure aggregation over the other managers' state: nothing here mutates
//! anything. Revenue is bucketed by *business day* (the cutoff pushes a
//! 01:30 nightcap onto the previous day's numbers), matching how the
//! statistics screens read.

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::Serialize;
use shared::models::{InventoryItem, Order, OrderStatus, ShiftDay};

use crate::bookings::BookingBook;
use crate::catalog::{InventoryService, MenuService};
use crate::orders::{OrderPad, money};
use crate::rota::RotaService;
use crate::utils::time;

/// Flat cost assumption for the staff-cost KPI (kr per scheduled hour).
/// Real wage data is out of scope; the trend still moves with the schedule.
const STAFF_HOURLY_COST: f64 = 180.0;

// ============================================================================
// Report types
// ============================================================================

/// Overview numbers behind the dashboard KPI cards
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewReport {
    pub revenue_today: f64,
    pub revenue_yesterday: f64,
    pub orders_today: u32,
    pub average_order_value: f64,
    pub active_bookings: u32,
    /// Scheduled staff cost as a share of today's revenue, when there is any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_cost_pct: Option<f64>,
    pub staff_on_floor: u32,
    pub staff_total: u32,
    /// Value of stock on hand (Σ quantity × cost price)
    pub stock_value: f64,
}

/// One bar in the weekly sales chart
#[derive(Debug, Clone, Serialize)]
pub struct WeekdaySales {
    /// Short Swedish weekday label (Mån..Sön)
    pub name: String,
    pub value: f64,
}

/// One row in the popularity list
#[derive(Debug, Clone, Serialize)]
pub struct TopSeller {
    pub name: String,
    pub sales: u32,
    /// Gross margin fraction, when the card knows the item's cost price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
}

// ============================================================================
// Pure aggregation helpers
// ============================================================================

/// Paid revenue and order count inside `[start, end)` millis.
pub fn revenue_in_window(orders: &[Order], start: i64, end: i64) -> (f64, u32) {
    let mut sum = 0.0;
    let mut count = 0;
    for order in orders {
        if order.status != OrderStatus::Paid {
            continue;
        }
        let Some(paid_at) = order.paid_at else {
            continue;
        };
        if paid_at >= start && paid_at < end {
            sum += order.total;
            count += 1;
        }
    }
    (money::round2(sum), count)
}

/// Paid revenue per weekday for the week starting at `monday`.
pub fn bucket_week(orders: &[Order], monday: NaiveDate, cutoff: NaiveTime, tz: Tz) -> [f64; 7] {
    let mut buckets = [0.0; 7];
    for order in orders {
        if order.status != OrderStatus::Paid {
            continue;
        }
        let Some(paid_at) = order.paid_at else {
            continue;
        };
        let date = time::business_date_of_millis(paid_at, cutoff, tz);
        let offset = (date - monday).num_days();
        if (0..7).contains(&offset) {
            buckets[offset as usize] += order.total;
        }
    }
    for bucket in &mut buckets {
        *bucket = money::round2(*bucket);
    }
    buckets
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mån",
        Weekday::Tue => "Tis",
        Weekday::Wed => "Ons",
        Weekday::Thu => "Tor",
        Weekday::Fri => "Fre",
        Weekday::Sat => "Lör",
        Weekday::Sun => "Sön",
    }
}

fn shift_day_of(weekday: Weekday) -> ShiftDay {
    match weekday {
        Weekday::Mon => ShiftDay::Mon,
        Weekday::Tue => ShiftDay::Tue,
        Weekday::Wed => ShiftDay::Wed,
        Weekday::Thu => ShiftDay::Thu,
        Weekday::Fri => ShiftDay::Fri,
        Weekday::Sat => ShiftDay::Sat,
        Weekday::Sun => ShiftDay::Sun,
    }
}

// ============================================================================
// Service
// ============================================================================

/// Read-only aggregation facade over the other managers.
pub struct ReportingService {
    orders: Arc<OrderPad>,
    bookings: Arc<BookingBook>,
    menu: Arc<MenuService>,
    inventory: Arc<InventoryService>,
    rota: Arc<RotaService>,
    tz: Tz,
    cutoff: NaiveTime,
}

impl ReportingService {
    pub fn new(
        orders: Arc<OrderPad>,
        bookings: Arc<BookingBook>,
        menu: Arc<MenuService>,
        inventory: Arc<InventoryService>,
        rota: Arc<RotaService>,
        tz: Tz,
        cutoff: NaiveTime,
    ) -> Self {
        Self {
            orders,
            bookings,
            menu,
            inventory,
            rota,
            tz,
            cutoff,
        }
    }

    fn day_window(&self, date: NaiveDate) -> (i64, i64) {
        let start = time::date_cutoff_millis(date, self.cutoff, self.tz);
        let end = time::date_cutoff_millis(date + Duration::days(1), self.cutoff, self.tz);
        (start, end)
    }

    /// Dashboard overview for the current business day.
    pub fn overview(&self) -> OverviewReport {
        let today = time::current_business_date(self.cutoff, self.tz);
        let ledger = self.orders.settled_orders();

        let (start, end) = self.day_window(today);
        let (revenue_today, orders_today) = revenue_in_window(&ledger, start, end);

        let (y_start, y_end) = self.day_window(today - Duration::days(1));
        let (revenue_yesterday, _) = revenue_in_window(&ledger, y_start, y_end);

        let average_order_value = if orders_today > 0 {
            money::round2(revenue_today / orders_today as f64)
        } else {
            0.0
        };

        let staff_cost_pct = if revenue_today > 0.0 {
            let hours = self.rota.scheduled_hours(shift_day_of(today.weekday()));
            Some(money::round2(hours * STAFF_HOURLY_COST / revenue_today * 100.0))
        } else {
            None
        };

        let (staff_on_floor, staff_total) = self.rota.headcount();

        OverviewReport {
            revenue_today,
            revenue_yesterday,
            orders_today,
            average_order_value,
            active_bookings: self.bookings.active_count() as u32,
            staff_cost_pct,
            staff_on_floor: staff_on_floor as u32,
            staff_total: staff_total as u32,
            stock_value: self.inventory.stock_value(),
        }
    }

    /// Sales per weekday for the week containing the current business day.
    pub fn weekly_sales(&self) -> Vec<WeekdaySales> {
        let today = time::current_business_date(self.cutoff, self.tz);
        let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        let buckets = bucket_week(&self.orders.settled_orders(), monday, self.cutoff, self.tz);

        buckets
            .iter()
            .enumerate()
            .map(|(i, &value)| WeekdaySales {
                name: weekday_label((monday + Duration::days(i as i64)).weekday()).to_string(),
                value,
            })
            .collect()
    }

    /// Best sellers by units sold through the POS.
    pub fn top_sellers(&self, limit: usize) -> Vec<TopSeller> {
        self.menu
            .top_sellers(limit)
            .into_iter()
            .map(|item| TopSeller {
                margin: item.margin(),
                name: item.name,
                sales: item.sales_count,
            })
            .collect()
    }

    /// Items at or below their reorder threshold.
    pub fn low_stock_alerts(&self) -> Vec<InventoryItem> {
        self.inventory.low_stock()
    }
}
