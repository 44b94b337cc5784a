use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{StoreInfo, StoreInfoUpdate};

use crate::bookings::BookingBook;
use crate::catalog::{InventoryService, MenuService};
use crate::core::Config;
use crate::events::EventHub;
use crate::orders::OrderPad;
use crate::reporting::ReportingService;
use crate::rota::RotaService;
use crate::seed;
use crate::utils::time;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是后台服务的核心数据结构，持有所有管理器的共享引用。
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | events | 变更事件广播中心 |
/// | bookings | 预订与桌台分配 |
/// | menu | 菜单管理 |
/// | inventory | 库存管理 |
/// | orders | POS 订单 |
/// | rota | 员工与排班 |
/// | reports | 统计报表 (只读聚合) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 变更事件广播中心
    pub events: EventHub,
    /// 预订集合与座位引擎入口
    pub bookings: Arc<BookingBook>,
    /// 菜单服务
    pub menu: Arc<MenuService>,
    /// 库存服务
    pub inventory: Arc<InventoryService>,
    /// POS 订单服务
    pub orders: Arc<OrderPad>,
    /// 员工排班服务
    pub rota: Arc<RotaService>,
    /// 报表服务
    pub reports: Arc<ReportingService>,
    /// 餐厅信息
    store_info: Arc<RwLock<StoreInfo>>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 无持久层：集合为进程内状态，按需载入演示数据
    /// (`SEED_DEMO_DATA`，默认开启)。
    pub fn initialize(config: &Config) -> Self {
        let events = EventHub::new();

        let (bookings, menu, inventory, rota, store_info) = if config.seed_demo_data {
            let today = time::current_business_date(config.cutoff(), config.tz());
            tracing::info!(%today, "Seeding demo data");
            (
                BookingBook::with_bookings(
                    events.clone(),
                    config.table_count,
                    seed::demo_bookings(today),
                ),
                MenuService::with_items(events.clone(), seed::demo_menu()),
                InventoryService::with_items(events.clone(), seed::demo_inventory()),
                RotaService::with_staff(events.clone(), seed::demo_staff(), seed::demo_shifts()),
                seed::demo_store_info(),
            )
        } else {
            (
                BookingBook::new(events.clone(), config.table_count),
                MenuService::new(events.clone()),
                InventoryService::new(events.clone()),
                RotaService::new(events.clone()),
                StoreInfo::default(),
            )
        };

        let bookings = Arc::new(bookings);
        let menu = Arc::new(menu);
        let inventory = Arc::new(inventory);
        let rota = Arc::new(rota);
        let orders = Arc::new(OrderPad::new(events.clone(), menu.clone()));
        let reports = Arc::new(ReportingService::new(
            orders.clone(),
            bookings.clone(),
            menu.clone(),
            inventory.clone(),
            rota.clone(),
            config.tz(),
            config.cutoff(),
        ));

        Self {
            config: config.clone(),
            events,
            bookings,
            menu,
            inventory,
            orders,
            rota,
            reports,
            store_info: Arc::new(RwLock::new(store_info)),
        }
    }

    /// 获取餐厅信息
    pub fn store_info(&self) -> StoreInfo {
        self.store_info.read().clone()
    }

    /// 更新餐厅信息
    pub fn update_store_info(&self, payload: StoreInfoUpdate) -> StoreInfo {
        let mut guard = self.store_info.write();
        if let Some(name) = payload.name {
            guard.name = name;
        }
        if let Some(address) = payload.address {
            guard.address = address;
        }
        if let Some(phone) = payload.phone {
            guard.phone = phone;
        }
        if let Some(open_hours) = payload.open_hours {
            guard.open_hours = open_hours;
        }
        let updated = guard.clone();
        drop(guard);

        self.events
            .publish("store_info", "updated", "store", Some(&updated), None);
        updated
    }
}
