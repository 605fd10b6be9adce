//! # BomPlan
//!
//! BOM 需求展開與生產排程引擎。
//!
//! 三個入口皆為對注入目錄快照的無狀態函數：
//! - [`analyze_materials`]：展開訂單需求，計算缺料、採購成本與最短備料天數
//! - [`analyze_production`]：構建生產任務圖並以貪婪列表排程求出總工時
//! - [`consume_for_order`]：訂單進入生產時的全有或全無領料

pub use bomplan_calc::{
    parse_supply_days, ConsumptionCalculator, ConsumptionReport, Explosion, ExplosionCalculator,
    MaterialsSummary, OrderWorkflow, RequiredItem, ShortageCalculator, StockMovement,
};
pub use bomplan_core::{
    Accessory, AccessoryRequirement, AssemblyComponent, Catalog, Material, MaterialRequirement,
    OperationSpec, Order, OrderStatus, PlanError, Product, Result, StatusChange, StockRow,
    Supplier, Warehouse,
};
pub use bomplan_scheduler::{
    ListScheduler, ProductionCalculator, ProductionSummary, ProductionTask, ScheduleOutcome,
    ScheduledOperation, TaskGraphBuilder,
};

/// 分析訂單的物料/配件需求、缺口成本與最短備料天數
pub fn analyze_materials(catalog: &Catalog, order: &Order) -> Result<MaterialsSummary> {
    ShortageCalculator::analyze(catalog, order)
}

/// 分析訂單的生產排程與最短總工時
pub fn analyze_production(catalog: &Catalog, order: &Order) -> Result<ProductionSummary> {
    ProductionCalculator::analyze(catalog, order)
}

/// 為訂單領料（全有或全無）
pub fn consume_for_order(catalog: &mut Catalog, order: &Order) -> Result<ConsumptionReport> {
    ConsumptionCalculator::consume_for_order(catalog, order)
}
