//! # BOM Calculation Engine
//!
//! BOM 展開、缺料分析與領料計算

pub mod consumption;
pub mod explosion;
pub mod lead_time;
pub mod shortage;

// Re-export 主要類型
pub use consumption::{ConsumptionCalculator, ConsumptionReport, OrderWorkflow, StockMovement};
pub use explosion::{Explosion, ExplosionCalculator};
pub use lead_time::parse_supply_days;
pub use shortage::ShortageCalculator;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 缺料分析結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialsSummary {
    /// 需求明細（物料在前、配件在後）
    pub items: Vec<RequiredItem>,

    /// 缺料採購總成本（缺口數量 × 採購單價）
    pub total_missing_cost: Decimal,

    /// 最短備料天數（缺料項目中最長的供應商交期；可並行採購故取最大值）
    pub minimal_delivery_days: u32,
}

impl MaterialsSummary {
    /// 創建空的分析結果
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_missing_cost: Decimal::ZERO,
            minimal_delivery_days: 0,
        }
    }

    /// 是否存在缺料
    pub fn has_shortage(&self) -> bool {
        self.items.iter().any(|i| i.missing > 0)
    }
}

/// 單一物料/配件的需求明細
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredItem {
    /// 是否為原物料（false 表示外購配件）
    pub is_material: bool,

    /// 貨號
    pub article: String,

    /// 名稱
    pub name: String,

    /// 計量單位
    pub unit: String,

    /// 類別
    pub product_type: String,

    /// 需求量（展開後合計）
    pub required: i64,

    /// 可用量（各倉庫明細合計）
    pub available: i64,

    /// 缺口（低於零時夾為零）
    pub missing: i64,

    /// 採購單價
    pub purchase_price: Decimal,

    /// 成本單價（目前與採購單價相同）
    pub cost_price: Decimal,

    /// 供應商名稱
    pub supplier_name: String,

    /// 供應商交期原文
    pub supply_time_raw: String,

    /// 供應商交期（天）
    pub supply_days: u32,
}
