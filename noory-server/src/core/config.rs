use chrono::NaiveTime;
use chrono_tz::Tz;

use crate::utils::time;

/// 服务器配置 - 后台服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | TIMEZONE | Europe/Stockholm | 业务时区 |
/// | TABLE_COUNT | 12 | 餐厅桌台数量 |
/// | BUSINESS_DAY_CUTOFF | 04:00 | 营业日边界 (HH:MM) |
/// | SEED_DEMO_DATA | true | 启动时载入演示数据 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SEED_DEMO_DATA=false cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// IANA 时区名，用于营业日计算
    pub timezone: String,
    /// 桌台数量，桌台编号为 "1"..=N
    pub table_count: u32,
    /// 营业日边界 (HH:MM)；之前的时刻仍算前一营业日
    pub business_day_cutoff: String,
    /// 启动时载入演示数据 (无持久化，状态随进程存亡)
    pub seed_demo_data: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            timezone: std::env::var("TIMEZONE").unwrap_or_else(|_| "Europe/Stockholm".into()),
            table_count: std::env::var("TABLE_COUNT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(12),
            business_day_cutoff: std::env::var("BUSINESS_DAY_CUTOFF")
                .unwrap_or_else(|_| "04:00".into()),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, seed_demo_data: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_demo_data = seed_demo_data;
        config
    }

    /// Business timezone; unknown names fall back to UTC with a warning.
    pub fn tz(&self) -> Tz {
        self.timezone.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown TIMEZONE '{}', falling back to UTC", self.timezone);
            chrono_tz::UTC
        })
    }

    /// Parsed business-day cutoff.
    pub fn cutoff(&self) -> NaiveTime {
        time::parse_cutoff(&self.business_day_cutoff)
    }

    /// The derived table universe, "1"..=table_count.
    pub fn table_ids(&self) -> Vec<String> {
        (1..=self.table_count).map(|n| n.to_string()).collect()
    }

    /// Whether an id names a table on the floor.
    pub fn is_known_table(&self, id: &str) -> bool {
        match id.parse::<u32>() {
            // Reject zero-padded forms ("04") so ids stay canonical
            Ok(n) => n >= 1 && n <= self.table_count && n.to_string() == id,
            Err(_) => false,
        }
    }
}
