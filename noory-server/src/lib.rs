//! Noory Back-Office Server - 餐厅后台管理服务
//!
//! # 架构概述
//!
//! 本模块是后台服务的主入口，提供以下核心功能：
//!
//! - **座位引擎** (`seating`): 纯函数的桌台分配状态机 (移动/交换/撤座)
//! - **预订管理** (`bookings`): 预订集合的唯一持有者与命令入口
//! - **POS 订单** (`orders`): 开台、点单、结账与销售台账
//! - **目录** (`catalog`): 菜单与库存
//! - **排班** (`rota`): 员工与周排班
//! - **报表** (`reporting`): KPI 与销售聚合
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! noory-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── seating/       # 座位分配引擎 (纯函数)
//! ├── bookings/      # 预订管理
//! ├── orders/        # POS 订单与金额计算
//! ├── catalog/       # 菜单、库存
//! ├── rota/          # 员工、排班
//! ├── reporting/     # 统计报表
//! ├── api/           # HTTP 路由和处理器
//! ├── events.rs      # 变更事件广播
//! ├── seed.rs        # 演示数据
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod bookings;
pub mod catalog;
pub mod core;
pub mod events;
pub mod orders;
pub mod reporting;
pub mod rota;
pub mod seating;
pub mod seed;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app};
pub use events::EventHub;
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{AppError, AppResponse, AppResult};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    _   __
   / | / /___  ____  _______  __
  /  |/ / __ \/ __ \/ ___/ / / /
 / /|  / /_/ / /_/ / /  / /_/ /
/_/ |_/\____/\____/_/   \__, /
                       /____/
    "#
    );
}
