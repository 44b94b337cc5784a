//! OrderPad - POS order processing
//!
//! This module handles:
//! - Opening an order on a table (one open order per table)
//! - Adding/removing lines, with prices snapshotted from the menu card
//! - Settling the bill, which freezes the order into the sales ledger
//! - Change-event broadcasting (via [`EventHub`])
//!
//! Settled orders stay in the collection as the revenue ledger that
//! [`crate::reporting`] aggregates; there is no persistence by design.

pub mod money;

use parking_lot::RwLock;
use shared::models::{Order, OrderLine, OrderStatus};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::MenuService;
use crate::events::EventHub;
use crate::utils::{AppError, time};

const RESOURCE: &str = "order";

/// Order command errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    #[error("Line not found: {0}")]
    LineNotFound(String),

    #[error("Table {0} already has an open order")]
    TableOccupied(String),

    #[error("Order already paid: {0}")]
    AlreadyPaid(String),

    #[error("Menu item is unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_) | OrderError::ItemNotFound(_) | OrderError::LineNotFound(_) => {
                AppError::not_found(err.to_string())
            }
            OrderError::TableOccupied(_) => AppError::conflict(err.to_string()),
            OrderError::AlreadyPaid(_) | OrderError::Unavailable(_) => {
                AppError::business_rule(err.to_string())
            }
            OrderError::InvalidAmount(_) | OrderError::InvalidQuantity(_) => {
                AppError::validation(err.to_string())
            }
        }
    }
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Owner of the POS orders, open and settled.
pub struct OrderPad {
    orders: RwLock<Vec<Order>>,
    menu: Arc<MenuService>,
    events: EventHub,
}

impl OrderPad {
    pub fn new(events: EventHub, menu: Arc<MenuService>) -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
            menu,
            events,
        }
    }

    fn next_id() -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("O{}", &uuid[..8])
    }

    fn next_line_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    // ========== Queries ==========

    pub fn list(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    pub fn open_orders(&self) -> Vec<Order> {
        self.orders
            .read()
            .iter()
            .filter(|o| o.status == OrderStatus::Open)
            .cloned()
            .collect()
    }

    /// The sales ledger: everything that has been paid.
    pub fn settled_orders(&self) -> Vec<Order> {
        self.orders
            .read()
            .iter()
            .filter(|o| o.status == OrderStatus::Paid)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> OrderResult<Order> {
        self.orders
            .read()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    // ========== Commands ==========

    /// Open a new order on a table. A table carries at most one open order.
    pub fn open(&self, table: &str) -> OrderResult<Order> {
        let mut guard = self.orders.write();
        if let Some(existing) = guard
            .iter()
            .find(|o| o.status == OrderStatus::Open && o.table == table)
        {
            return Err(OrderError::TableOccupied(existing.table.clone()));
        }

        let order = Order {
            id: Self::next_id(),
            table: table.to_string(),
            status: OrderStatus::Open,
            lines: Vec::new(),
            total: 0.0,
            opened_at: time::now_millis(),
            paid_at: None,
        };
        guard.push(order.clone());
        drop(guard);

        tracing::info!(order_id = %order.id, table = %order.table, "Order opened");
        self.events
            .publish(RESOURCE, "opened", &order.id, Some(&order), None);
        Ok(order)
    }

    /// Add a line. Name and price are snapshotted from the menu card at
    /// this moment; later menu edits never re-price the line.
    pub fn add_line(&self, order_id: &str, menu_item_id: &str, quantity: u32) -> OrderResult<Order> {
        money::validate_quantity(quantity)?;

        let item = self
            .menu
            .get(menu_item_id)
            .map_err(|_| OrderError::ItemNotFound(menu_item_id.to_string()))?;
        if !item.available {
            return Err(OrderError::Unavailable(item.name));
        }
        money::validate_price(item.price)?;

        let mut guard = self.orders.write();
        let order = guard
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
        if order.status == OrderStatus::Paid {
            return Err(OrderError::AlreadyPaid(order_id.to_string()));
        }

        order.lines.push(OrderLine {
            line_id: Self::next_line_id(),
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity,
            line_total: money::line_total(item.price, quantity),
        });
        order.total = money::order_total(order.lines.iter().map(|l| l.line_total));

        let updated = order.clone();
        drop(guard);
        self.events
            .publish(RESOURCE, "updated", order_id, Some(&updated), None);
        Ok(updated)
    }

    pub fn remove_line(&self, order_id: &str, line_id: &str) -> OrderResult<Order> {
        let mut guard = self.orders.write();
        let order = guard
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
        if order.status == OrderStatus::Paid {
            return Err(OrderError::AlreadyPaid(order_id.to_string()));
        }

        let before = order.lines.len();
        order.lines.retain(|l| l.line_id != line_id);
        if order.lines.len() == before {
            return Err(OrderError::LineNotFound(line_id.to_string()));
        }
        order.total = money::order_total(order.lines.iter().map(|l| l.line_total));

        let updated = order.clone();
        drop(guard);
        self.events
            .publish(RESOURCE, "updated", order_id, Some(&updated), None);
        Ok(updated)
    }

    /// Empty the order ("Rensa").
    pub fn clear_lines(&self, order_id: &str) -> OrderResult<Order> {
        let mut guard = self.orders.write();
        let order = guard
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
        if order.status == OrderStatus::Paid {
            return Err(OrderError::AlreadyPaid(order_id.to_string()));
        }

        order.lines.clear();
        order.total = 0.0;

        let updated = order.clone();
        drop(guard);
        self.events
            .publish(RESOURCE, "updated", order_id, Some(&updated), None);
        Ok(updated)
    }

    /// Settle the bill. A single unconditional transition to `paid`: there
    /// is no payment processing here. Zero-total orders settle too
    /// (complimentary covers). Sold units feed the menu's popularity
    /// counters and the order enters the revenue ledger.
    pub fn settle(&self, order_id: &str) -> OrderResult<Order> {
        let mut guard = self.orders.write();
        let order = guard
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
        if order.status == OrderStatus::Paid {
            return Err(OrderError::AlreadyPaid(order_id.to_string()));
        }

        order.status = OrderStatus::Paid;
        order.paid_at = Some(time::now_millis());
        let settled = order.clone();
        drop(guard);

        for line in &settled.lines {
            self.menu.bump_sales(&line.menu_item_id, line.quantity);
        }

        tracing::info!(order_id = %order_id, total = settled.total, "Order settled");
        self.events.publish(
            RESOURCE,
            "settled",
            order_id,
            Some(&settled),
            Some(format!("Nota betald: bord {}", settled.table)),
        );
        Ok(settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MenuCategory, MenuItemCreate};

    fn fixture() -> (OrderPad, Arc<MenuService>) {
        let events = EventHub::new();
        let menu = Arc::new(MenuService::new(events.clone()));
        let pad = OrderPad::new(events, menu.clone());
        (pad, menu)
    }

    fn menu_item(menu: &MenuService, name: &str, price: f64) -> String {
        menu.create(MenuItemCreate {
            name: name.to_string(),
            category: MenuCategory::Drink,
            price,
            cost_price: None,
            description: String::new(),
            available: true,
            image: None,
            ingredients: vec![],
            modifiers: vec![],
        })
        .id
    }

    #[test]
    fn open_and_add_lines() {
        let (pad, menu) = fixture();
        let coffee = menu_item(&menu, "Kaffe", 35.0);
        let beer = menu_item(&menu, "IPA Fat", 89.0);

        let order = pad.open("4").unwrap();
        let order = pad.add_line(&order.id, &coffee, 2).unwrap();
        let order = pad.add_line(&order.id, &beer, 1).unwrap();

        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines[0].line_total, 70.0);
        assert_eq!(order.total, 159.0);
    }

    #[test]
    fn one_open_order_per_table() {
        let (pad, _) = fixture();
        pad.open("4").unwrap();
        let err = pad.open("4").unwrap_err();
        assert!(matches!(err, OrderError::TableOccupied(_)));

        // A different table is fine
        pad.open("5").unwrap();
    }

    #[test]
    fn table_frees_up_after_settle() {
        let (pad, _) = fixture();
        let order = pad.open("4").unwrap();
        pad.settle(&order.id).unwrap();
        pad.open("4").unwrap();
    }

    #[test]
    fn line_price_is_a_snapshot() {
        let (pad, menu) = fixture();
        let wine = menu_item(&menu, "Husets Rödvin", 110.0);

        let order = pad.open("7").unwrap();
        pad.add_line(&order.id, &wine, 1).unwrap();

        // Menu price rises, existing line keeps its price
        menu.update(
            &wine,
            shared::models::MenuItemUpdate {
                name: None,
                category: None,
                price: Some(130.0),
                cost_price: None,
                description: None,
                available: None,
                image: None,
                ingredients: None,
                modifiers: None,
            },
        )
        .unwrap();

        let order = pad.get(&order.id).unwrap();
        assert_eq!(order.lines[0].unit_price, 110.0);
        assert_eq!(order.total, 110.0);
    }

    #[test]
    fn unavailable_item_rejected() {
        let (pad, menu) = fixture();
        let item = menu_item(&menu, "Löjromstoast", 195.0);
        menu.update(
            &item,
            shared::models::MenuItemUpdate {
                name: None,
                category: None,
                price: None,
                cost_price: None,
                description: None,
                available: Some(false),
                image: None,
                ingredients: None,
                modifiers: None,
            },
        )
        .unwrap();

        let order = pad.open("2").unwrap();
        let err = pad.add_line(&order.id, &item, 1).unwrap_err();
        assert!(matches!(err, OrderError::Unavailable(_)));
    }

    #[test]
    fn settle_bumps_sales_and_freezes_order() {
        let (pad, menu) = fixture();
        let coffee = menu_item(&menu, "Kaffe", 35.0);

        let order = pad.open("3").unwrap();
        pad.add_line(&order.id, &coffee, 3).unwrap();
        let settled = pad.settle(&order.id).unwrap();

        assert_eq!(settled.status, OrderStatus::Paid);
        assert!(settled.paid_at.is_some());
        assert_eq!(menu.get(&coffee).unwrap().sales_count, 3);

        // Frozen: no more mutations
        assert!(matches!(
            pad.add_line(&order.id, &coffee, 1).unwrap_err(),
            OrderError::AlreadyPaid(_)
        ));
        assert!(matches!(
            pad.settle(&order.id).unwrap_err(),
            OrderError::AlreadyPaid(_)
        ));
        assert_eq!(pad.settled_orders().len(), 1);
    }

    #[test]
    fn empty_order_settles() {
        let (pad, _) = fixture();
        let order = pad.open("9").unwrap();
        let settled = pad.settle(&order.id).unwrap();
        assert_eq!(settled.total, 0.0);
        assert_eq!(settled.status, OrderStatus::Paid);
    }

    #[test]
    fn remove_and_clear_lines() {
        let (pad, menu) = fixture();
        let coffee = menu_item(&menu, "Kaffe", 35.0);
        let cola = menu_item(&menu, "Cola Zero", 39.0);

        let order = pad.open("6").unwrap();
        let order = pad.add_line(&order.id, &coffee, 1).unwrap();
        let order = pad.add_line(&order.id, &cola, 1).unwrap();

        let line_id = order.lines[0].line_id.clone();
        let order = pad.remove_line(&order.id, &line_id).unwrap();
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.total, 39.0);

        assert!(matches!(
            pad.remove_line(&order.id, "ghost").unwrap_err(),
            OrderError::LineNotFound(_)
        ));

        let order = pad.clear_lines(&order.id).unwrap();
        assert!(order.lines.is_empty());
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn zero_quantity_rejected() {
        let (pad, menu) = fixture();
        let coffee = menu_item(&menu, "Kaffe", 35.0);
        let order = pad.open("1").unwrap();
        assert!(matches!(
            pad.add_line(&order.id, &coffee, 0).unwrap_err(),
            OrderError::InvalidQuantity(_)
        ));
    }
}
