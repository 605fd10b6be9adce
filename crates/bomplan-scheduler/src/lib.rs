//! # Production Scheduler
//!
//! 生產任務圖構建與貪婪排程（甘特圖資料來源）

pub mod scheduler;
pub mod task_graph;

// Re-export 主要類型
pub use scheduler::{ListScheduler, ScheduleOutcome};
pub use task_graph::{ProductionTask, TaskGraphBuilder};

use serde::{Deserialize, Serialize};

use bomplan_calc::ExplosionCalculator;
use bomplan_core::{Catalog, Order};

/// 排程後的單一工序（甘特圖列）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledOperation {
    /// 產品ID
    pub product_id: String,

    /// 工序名稱
    pub operation: String,

    /// 設備類型
    pub equipment_type: String,

    /// 工序順序號
    pub number: u32,

    /// 開始時刻（分鐘）
    pub start_minute: f64,

    /// 工時（分鐘）
    pub duration_minutes: f64,

    /// 完成時刻（分鐘）
    pub finish_minute: f64,
}

/// 生產排程分析結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSummary {
    /// 排程後的工序（依設備類型、開始時刻排序）
    pub operations: Vec<ScheduledOperation>,

    /// 最短總生產時間（分鐘，makespan）
    pub total_minutes: f64,

    /// 是否完整排程（false 表示任務圖含循環，結果為部分排程）
    pub complete: bool,
}

impl ProductionSummary {
    /// 創建空的分析結果
    pub fn empty() -> Self {
        Self {
            operations: Vec::new(),
            total_minutes: 0.0,
            complete: true,
        }
    }
}

/// 生產排程計算器
pub struct ProductionCalculator;

impl ProductionCalculator {
    /// 分析訂單的生產排程與最短總工時
    pub fn analyze(catalog: &Catalog, order: &Order) -> bomplan_core::Result<ProductionSummary> {
        tracing::info!(
            "開始生產排程分析：訂單 {} 產品 {}",
            order.number,
            order.product_id
        );

        let explosion = ExplosionCalculator::explode(catalog, &order.product_id, 1)?;

        let mut tasks = TaskGraphBuilder::build(catalog, &explosion.product_units);
        let outcome = ListScheduler::schedule(&mut tasks);

        let mut operations: Vec<ScheduledOperation> = tasks
            .into_iter()
            .map(|t| ScheduledOperation {
                product_id: t.product_id,
                operation: t.operation,
                equipment_type: t.equipment_type,
                number: t.number,
                start_minute: t.start_minute,
                duration_minutes: t.duration_minutes,
                finish_minute: t.finish_minute,
            })
            .collect();

        // 甘特圖呈現順序：先依設備類型，再依開始時刻
        operations.sort_by(|a, b| {
            a.equipment_type.cmp(&b.equipment_type).then(
                a.start_minute
                    .partial_cmp(&b.start_minute)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
        });

        tracing::info!(
            "排程分析完成：{} 道工序，總工時 {} 分鐘",
            operations.len(),
            outcome.makespan
        );

        Ok(ProductionSummary {
            operations,
            total_minutes: outcome.makespan,
            complete: outcome.complete,
        })
    }
}
