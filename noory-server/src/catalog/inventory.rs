//! Inventory service (lager)

use parking_lot::RwLock;
use shared::models::{InventoryItem, InventoryItemCreate, InventoryItemUpdate};
use uuid::Uuid;

use super::{CatalogError, CatalogResult};
use crate::events::EventHub;
use crate::orders::money;

const RESOURCE: &str = "inventory_item";

/// Owner of the stock list. `last_updated` is server-stamped on every
/// mutation, never taken from the client.
pub struct InventoryService {
    items: RwLock<Vec<InventoryItem>>,
    events: EventHub,
}

impl InventoryService {
    pub fn new(events: EventHub) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            events,
        }
    }

    pub fn with_items(events: EventHub, items: Vec<InventoryItem>) -> Self {
        Self {
            items: RwLock::new(items),
            events,
        }
    }

    fn next_id() -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("I{}", &uuid[..8])
    }

    fn stamp() -> String {
        chrono::Utc::now().to_rfc3339()
    }

    // ========== Queries ==========

    pub fn list(&self) -> Vec<InventoryItem> {
        self.items.read().clone()
    }

    pub fn get(&self, id: &str) -> CatalogResult<InventoryItem> {
        self.items
            .read()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::InventoryItemNotFound(id.to_string()))
    }

    /// Items at or below their reorder threshold, for the dashboard alerts.
    pub fn low_stock(&self) -> Vec<InventoryItem> {
        self.items
            .read()
            .iter()
            .filter(|i| i.is_low())
            .cloned()
            .collect()
    }

    /// Total value of stock on hand.
    pub fn stock_value(&self) -> f64 {
        let sum: f64 = self.items.read().iter().map(|i| i.stock_value()).sum();
        money::round2(sum)
    }

    // ========== Commands ==========

    pub fn create(&self, payload: InventoryItemCreate) -> InventoryItem {
        let item = InventoryItem {
            id: Self::next_id(),
            name: payload.name,
            category: payload.category,
            quantity: payload.quantity,
            unit: payload.unit,
            min_threshold: payload.min_threshold,
            cost_price: payload.cost_price,
            supplier: payload.supplier,
            last_updated: Self::stamp(),
        };
        self.items.write().push(item.clone());
        self.events
            .publish(RESOURCE, "created", &item.id, Some(&item), None);
        item
    }

    pub fn update(&self, id: &str, payload: InventoryItemUpdate) -> CatalogResult<InventoryItem> {
        let mut guard = self.items.write();
        let item = guard
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CatalogError::InventoryItemNotFound(id.to_string()))?;

        if let Some(name) = payload.name {
            item.name = name;
        }
        if let Some(category) = payload.category {
            item.category = category;
        }
        if let Some(quantity) = payload.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = payload.unit {
            item.unit = unit;
        }
        if let Some(min_threshold) = payload.min_threshold {
            item.min_threshold = min_threshold;
        }
        if let Some(cost_price) = payload.cost_price {
            item.cost_price = cost_price;
        }
        if let Some(supplier) = payload.supplier {
            item.supplier = supplier;
        }
        item.last_updated = Self::stamp();

        let updated = item.clone();
        drop(guard);

        let notice = if updated.is_low() {
            Some(format!("Lågt lager: {}", updated.name))
        } else {
            None
        };
        self.events
            .publish(RESOURCE, "updated", id, Some(&updated), notice);
        Ok(updated)
    }

    pub fn remove(&self, id: &str) -> CatalogResult<()> {
        let mut guard = self.items.write();
        let before = guard.len();
        guard.retain(|i| i.id != id);
        if guard.len() == before {
            return Err(CatalogError::InventoryItemNotFound(id.to_string()));
        }
        drop(guard);
        self.events
            .publish::<()>(RESOURCE, "deleted", id, None, None);
        Ok(())
    }
}
