//! Menu card service

use parking_lot::RwLock;
use shared::models::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate};
use uuid::Uuid;

use super::{CatalogError, CatalogResult};
use crate::events::EventHub;

const RESOURCE: &str = "menu_item";

/// Owner of the menu card.
pub struct MenuService {
    items: RwLock<Vec<MenuItem>>,
    events: EventHub,
}

impl MenuService {
    pub fn new(events: EventHub) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            events,
        }
    }

    pub fn with_items(events: EventHub, items: Vec<MenuItem>) -> Self {
        Self {
            items: RwLock::new(items),
            events,
        }
    }

    fn next_id() -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("M{}", &uuid[..8])
    }

    // ========== Queries ==========

    pub fn list(&self) -> Vec<MenuItem> {
        self.items.read().clone()
    }

    pub fn list_by_category(&self, category: MenuCategory) -> Vec<MenuItem> {
        self.items
            .read()
            .iter()
            .filter(|i| i.category == category)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> CatalogResult<MenuItem> {
        self.items
            .read()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::MenuItemNotFound(id.to_string()))
    }

    /// Best-selling items first; items that never sold are excluded.
    pub fn top_sellers(&self, limit: usize) -> Vec<MenuItem> {
        let mut sold: Vec<MenuItem> = self
            .items
            .read()
            .iter()
            .filter(|i| i.sales_count > 0)
            .cloned()
            .collect();
        sold.sort_by(|a, b| b.sales_count.cmp(&a.sales_count));
        sold.truncate(limit);
        sold
    }

    // ========== Commands ==========

    pub fn create(&self, payload: MenuItemCreate) -> MenuItem {
        let item = MenuItem {
            id: Self::next_id(),
            name: payload.name,
            category: payload.category,
            price: payload.price,
            cost_price: payload.cost_price,
            sales_count: 0,
            description: payload.description,
            available: payload.available,
            image: payload.image,
            ingredients: payload.ingredients,
            modifiers: payload.modifiers,
        };
        self.items.write().push(item.clone());
        self.events
            .publish(RESOURCE, "created", &item.id, Some(&item), None);
        item
    }

    pub fn update(&self, id: &str, payload: MenuItemUpdate) -> CatalogResult<MenuItem> {
        let mut guard = self.items.write();
        let item = guard
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CatalogError::MenuItemNotFound(id.to_string()))?;

        if let Some(name) = payload.name {
            item.name = name;
        }
        if let Some(category) = payload.category {
            item.category = category;
        }
        if let Some(price) = payload.price {
            item.price = price;
        }
        if let Some(cost_price) = payload.cost_price {
            item.cost_price = Some(cost_price);
        }
        if let Some(description) = payload.description {
            item.description = description;
        }
        if let Some(available) = payload.available {
            item.available = available;
        }
        if let Some(image) = payload.image {
            item.image = Some(image);
        }
        if let Some(ingredients) = payload.ingredients {
            item.ingredients = ingredients;
        }
        if let Some(modifiers) = payload.modifiers {
            item.modifiers = modifiers;
        }

        let updated = item.clone();
        drop(guard);
        self.events
            .publish(RESOURCE, "updated", id, Some(&updated), None);
        Ok(updated)
    }

    pub fn remove(&self, id: &str) -> CatalogResult<()> {
        let mut guard = self.items.write();
        let before = guard.len();
        guard.retain(|i| i.id != id);
        if guard.len() == before {
            return Err(CatalogError::MenuItemNotFound(id.to_string()));
        }
        drop(guard);
        self.events
            .publish::<()>(RESOURCE, "deleted", id, None, None);
        Ok(())
    }

    /// Record sold units for popularity analysis. Missing items are ignored:
    /// the menu item may have been deleted after the line was added.
    pub fn bump_sales(&self, id: &str, units: u32) {
        let mut guard = self.items.write();
        if let Some(item) = guard.iter_mut().find(|i| i.id == id) {
            item.sales_count += units;
        }
    }
}
