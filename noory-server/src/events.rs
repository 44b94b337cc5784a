//! 事件广播中心
//!
//! In-process fan-out of resource change events. Every manager publishes
//! through one shared [`EventHub`]; subscribers (push channels, tests) get a
//! [`ChangeEvent`] per mutation, carrying the user-facing notice when the
//! change warrants a toast.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use shared::ChangeEvent;
use tokio::sync::broadcast;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 4096;

/// 资源版本管理器
///
/// 使用 DashMap 实现无锁并发的版本号管理。
/// 每种资源类型维护独立的版本号，支持原子递增。
#[derive(Debug, Default)]
struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    /// 递增指定资源的版本号并返回新值
    fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 获取指定资源的当前版本号（不存在返回 0）
    fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

/// Change-event hub shared by all managers.
///
/// Cloning is cheap (Arc + channel handle). Publishing never blocks and
/// never fails: with no subscribers the event is simply dropped.
#[derive(Clone, Debug)]
pub struct EventHub {
    tx: broadcast::Sender<ChangeEvent>,
    versions: Arc<ResourceVersions>,
}

impl EventHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            tx,
            versions: Arc::new(ResourceVersions::default()),
        }
    }

    /// Subscribe to all change events.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }

    /// Current version of a resource type.
    pub fn version(&self, resource: &str) -> u64 {
        self.versions.get(resource)
    }

    /// 广播资源变更
    ///
    /// 版本号自动递增，客户端可通过版本号判断数据新旧。
    ///
    /// # 参数
    /// - `resource`: 资源类型 (如 "booking", "menu_item")
    /// - `action`: 变更类型 ("created", "updated", "deleted", "seated", ...)
    /// - `id`: 资源 ID
    /// - `data`: 资源数据 (deleted 时为 None)
    /// - `notice`: 用户提示文本 (可选)
    pub fn publish<T: Serialize>(
        &self,
        resource: &str,
        action: &str,
        id: &str,
        data: Option<&T>,
        notice: Option<String>,
    ) {
        let version = self.versions.increment(resource);
        let event = ChangeEvent {
            resource: resource.to_string(),
            version,
            action: action.to_string(),
            id: id.to_string(),
            data: data.and_then(|d| serde_json::to_value(d).ok()),
            notice,
        };
        tracing::debug!(resource, action, id, version, "change event");
        let _ = self.tx.send(event);
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}
