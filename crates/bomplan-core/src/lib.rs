//! # BomPlan Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod item;
pub mod order;
pub mod product;
pub mod status;

// Re-export 主要類型
pub use catalog::Catalog;
pub use item::{Accessory, Material, StockRow, Supplier, Warehouse};
pub use order::Order;
pub use product::{
    AccessoryRequirement, AssemblyComponent, MaterialRequirement, OperationSpec, Product,
};
pub use status::{OrderStatus, StatusChange};

/// 計劃引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("裝配結構存在循環: {}", .0.join(" -> "))]
    AssemblyCycle(Vec<String>),

    #[error("找不到物料或配件: {0}")]
    ItemNotFound(String),

    #[error("庫存不足: {name}（需要 {required}，可用 {available}）")]
    InsufficientStock {
        article: String,
        name: String,
        required: i64,
        available: i64,
    },

    #[error("不允許的狀態轉換: {from} -> {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
