//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`bookings`] - 预订与座位分配接口
//! - [`tables`] - 桌台地图接口
//! - [`orders`] - POS 订单接口
//! - [`menu`] - 菜单管理接口
//! - [`inventory`] - 库存管理接口
//! - [`staff`] - 员工管理接口
//! - [`shifts`] - 排班管理接口
//! - [`reports`] - 统计报表接口
//! - [`store_info`] - 餐厅信息接口

pub mod bookings;
pub mod health;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod reports;
pub mod shifts;
pub mod staff;
pub mod store_info;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
