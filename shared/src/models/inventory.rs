//! Inventory Model (lager)

use serde::{Deserialize, Serialize};

/// Stock-keeping unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockUnit {
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "liter")]
    Liter,
    /// Pieces (styck)
    #[serde(rename = "st")]
    Piece,
    /// Packages (paket)
    #[serde(rename = "pkt")]
    Packet,
}

/// Inventory item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: StockUnit,
    /// Reorder alert threshold
    pub min_threshold: f64,
    pub cost_price: f64,
    pub supplier: String,
    /// ISO 8601 timestamp, server-stamped on every mutation
    pub last_updated: String,
}

impl InventoryItem {
    /// Below or at the reorder threshold.
    pub fn is_low(&self) -> bool {
        self.quantity <= self.min_threshold
    }

    pub fn stock_value(&self) -> f64 {
        self.quantity * self.cost_price
    }
}

/// Create inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemCreate {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: StockUnit,
    pub min_threshold: f64,
    pub cost_price: f64,
    pub supplier: String,
}

/// Update inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<StockUnit>,
    pub min_threshold: Option<f64>,
    pub cost_price: Option<f64>,
    pub supplier: Option<String>,
}
