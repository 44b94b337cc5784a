//! Reports API Handlers
//!
//! The overview endpoint assembles the dashboard's KPI cards on top of the
//! raw numbers, so the client renders strings and trends as-is.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::orders::money;
use crate::reporting::{OverviewReport, TopSeller, WeekdaySales};
use shared::models::InventoryItem;

// ============================================================================
// Response Types
// ============================================================================

/// One dashboard KPI card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub label: String,
    pub value: String,
    /// Percentage vs the comparison period
    pub trend: f64,
    pub trend_up: bool,
}

/// Full overview response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub kpis: Vec<Kpi>,
    pub overview: OverviewReport,
    pub alerts: Vec<InventoryItem>,
}

#[derive(Debug, Deserialize)]
pub struct TopSellersQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

fn trend_pct(current: f64, previous: f64) -> f64 {
    if previous <= 0.0 {
        return 0.0;
    }
    money::round2((current - previous) / previous * 100.0)
}

fn format_kr(value: f64) -> String {
    // Whole kronor on the cards, öre stays in the raw numbers
    format!("{:.0} kr", value)
}

fn build_kpis(overview: &OverviewReport) -> Vec<Kpi> {
    let revenue_trend = trend_pct(overview.revenue_today, overview.revenue_yesterday);
    vec![
        Kpi {
            label: "Dagens Försäljning".to_string(),
            value: format_kr(overview.revenue_today),
            trend: revenue_trend,
            trend_up: revenue_trend >= 0.0,
        },
        Kpi {
            label: "Aktiva Bokningar".to_string(),
            value: overview.active_bookings.to_string(),
            trend: 0.0,
            trend_up: true,
        },
        Kpi {
            label: "Snittnota".to_string(),
            value: format_kr(overview.average_order_value),
            trend: 0.0,
            trend_up: true,
        },
        Kpi {
            label: "Personalkostnad %".to_string(),
            value: overview
                .staff_cost_pct
                .map(|p| format!("{:.0}%", p))
                .unwrap_or_else(|| "–".to_string()),
            trend: 0.0,
            trend_up: overview.staff_cost_pct.unwrap_or(0.0) <= 30.0,
        },
    ]
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/reports/overview - 看板总览 (KPI 卡片 + 告警)
pub async fn overview(State(state): State<ServerState>) -> Json<OverviewResponse> {
    let overview = state.reports.overview();
    Json(OverviewResponse {
        kpis: build_kpis(&overview),
        alerts: state.reports.low_stock_alerts(),
        overview,
    })
}

/// GET /api/reports/weekly-sales - 本周销售柱状数据
pub async fn weekly_sales(State(state): State<ServerState>) -> Json<Vec<WeekdaySales>> {
    Json(state.reports.weekly_sales())
}

/// GET /api/reports/top-sellers - 热销菜品
pub async fn top_sellers(
    State(state): State<ServerState>,
    Query(query): Query<TopSellersQuery>,
) -> Json<Vec<TopSeller>> {
    Json(state.reports.top_sellers(query.limit))
}
