//! Catalog services - menu card and inventory
//!
//! Two small in-memory managers with the same shape as the booking book:
//! a locked collection, CRUD commands, change events. The POS resolves
//! prices through [`MenuService`]; the dashboard's low-stock alerts come
//! from [`InventoryService`].

mod inventory;
mod menu;

use thiserror::Error;

pub use inventory::InventoryService;
pub use menu::MenuService;

use crate::utils::AppError;

/// Catalog lookup errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Inventory item not found: {0}")]
    InventoryItemNotFound(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::not_found(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
