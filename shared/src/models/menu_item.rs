//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu card category. Wire values keep the card's Swedish section names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuCategory {
    #[serde(rename = "Förrätt")]
    Starter,
    #[serde(rename = "Varmrätt")]
    Main,
    #[serde(rename = "Efterrätt")]
    Dessert,
    #[serde(rename = "Dryck")]
    Drink,
}

/// Optional add-on for a menu item (extra sauce, side, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modifier {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: MenuCategory,
    pub price: f64,
    /// Ingredient cost, for margin calculation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    /// Units sold through the POS, for popularity analysis
    #[serde(default)]
    pub sales_count: u32,
    pub description: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Inventory item references
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
}

impl MenuItem {
    /// Gross margin fraction, when a cost price is known and the item is
    /// not given away for free.
    pub fn margin(&self) -> Option<f64> {
        let cost = self.cost_price?;
        if self.price <= 0.0 {
            return None;
        }
        Some((self.price - cost) / self.price)
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub category: MenuCategory,
    pub price: f64,
    pub cost_price: Option<f64>,
    pub description: String,
    #[serde(default = "default_available")]
    pub available: bool,
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

fn default_available() -> bool {
    true
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<MenuCategory>,
    pub price: Option<f64>,
    pub cost_price: Option<f64>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub image: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub modifiers: Option<Vec<Modifier>>,
}
