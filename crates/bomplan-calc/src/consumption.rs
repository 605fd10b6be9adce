//! 領料作業
//!
//! 訂單進入生產時依 BOM 展開結果扣減庫存。
//! 兩階段進行：先以總帳現有量核對全部需求，任何一項不足即整筆中止；
//! 核對通過後才逐項扣帳——先減總帳現有量（夾為零），
//! 再依倉庫ID升冪扣減各倉明細，扣完所有明細後的剩餘量直接捨棄。

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bomplan_core::{Catalog, Order, OrderStatus, PlanError, StatusChange};

use crate::explosion::{Explosion, ExplosionCalculator};

/// 單筆庫存異動記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    /// 異動ID
    pub id: Uuid,

    /// 貨號
    pub article: String,

    /// 是否為原物料
    pub is_material: bool,

    /// 扣減數量
    pub quantity: i64,
}

impl StockMovement {
    fn new(article: &str, is_material: bool, quantity: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            article: article.to_string(),
            is_material,
            quantity,
        }
    }
}

/// 領料結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionReport {
    /// 訂單編號
    pub order_number: i32,

    /// 異動明細
    pub movements: Vec<StockMovement>,
}

/// 領料計算器
pub struct ConsumptionCalculator;

impl ConsumptionCalculator {
    /// 為訂單領料（全有或全無）
    ///
    /// 任何一項物料/配件的總帳現有量不足，或貨號不在目錄中，
    /// 都會在未修改任何庫存前回報錯誤。
    pub fn consume_for_order(
        catalog: &mut Catalog,
        order: &Order,
    ) -> bomplan_core::Result<ConsumptionReport> {
        tracing::info!("開始領料：訂單 {} 產品 {}", order.number, order.product_id);

        let explosion = ExplosionCalculator::explode(catalog, &order.product_id, 1)?;

        // 階段一：核對，不動庫存
        Self::check_availability(catalog, &explosion)?;

        // 階段二：逐項扣帳
        let mut movements = Vec::new();

        for (article, &required) in &explosion.material_totals {
            if required <= 0 {
                continue;
            }
            Self::write_off_material(catalog, article, required);
            movements.push(StockMovement::new(article, true, required));
        }

        for (article, &required) in &explosion.accessory_totals {
            if required <= 0 {
                continue;
            }
            Self::write_off_accessory(catalog, article, required);
            movements.push(StockMovement::new(article, false, required));
        }

        tracing::info!("領料完成：訂單 {}，{} 筆異動", order.number, movements.len());

        Ok(ConsumptionReport {
            order_number: order.number,
            movements,
        })
    }

    /// 核對總帳現有量是否足以覆蓋展開需求
    fn check_availability(catalog: &Catalog, explosion: &Explosion) -> bomplan_core::Result<()> {
        for (article, &required) in &explosion.material_totals {
            let material = catalog
                .material(article)
                .ok_or_else(|| PlanError::ItemNotFound(article.clone()))?;

            if material.on_hand < required {
                return Err(PlanError::InsufficientStock {
                    article: article.clone(),
                    name: material.name.clone(),
                    required,
                    available: material.on_hand,
                });
            }
        }

        for (article, &required) in &explosion.accessory_totals {
            let accessory = catalog
                .accessory(article)
                .ok_or_else(|| PlanError::ItemNotFound(article.clone()))?;

            if accessory.on_hand < required {
                return Err(PlanError::InsufficientStock {
                    article: article.clone(),
                    name: accessory.name.clone(),
                    required,
                    available: accessory.on_hand,
                });
            }
        }

        Ok(())
    }

    fn write_off_material(catalog: &mut Catalog, article: &str, required: i64) {
        if let Some(material) = catalog.material_mut(article) {
            material.on_hand = (material.on_hand - required).max(0);
        }

        // 依倉庫ID升冪扣減，單倉可扣到零但不為負；
        // 各倉扣完仍有剩餘時直接捨棄（總帳與明細可能因此漂移）
        let mut remaining = required;
        for row in catalog.material_stock_rows_mut(article) {
            if remaining <= 0 {
                break;
            }
            let delta = remaining.min(row.quantity);
            row.quantity -= delta;
            remaining -= delta;
        }
    }

    fn write_off_accessory(catalog: &mut Catalog, article: &str, required: i64) {
        if let Some(accessory) = catalog.accessory_mut(article) {
            accessory.on_hand = (accessory.on_hand - required).max(0);
        }

        let mut remaining = required;
        for row in catalog.accessory_stock_rows_mut(article) {
            if remaining <= 0 {
                break;
            }
            let delta = remaining.min(row.quantity);
            row.quantity -= delta;
            remaining -= delta;
        }
    }
}

/// 訂單狀態流程
///
/// 「採購 -> 生產」的轉換會觸發領料；領料失敗時狀態保持不變。
pub struct OrderWorkflow;

impl OrderWorkflow {
    /// 轉換訂單狀態
    pub fn transition(
        catalog: &mut Catalog,
        order: &mut Order,
        new_status: OrderStatus,
        changed_at: NaiveDateTime,
        changed_by: &str,
    ) -> bomplan_core::Result<StatusChange> {
        if !order.status.can_transition_to(new_status) {
            return Err(PlanError::InvalidStatusTransition {
                from: order.status,
                to: new_status,
            });
        }

        if order.status == OrderStatus::Procurement && new_status == OrderStatus::Production {
            ConsumptionCalculator::consume_for_order(catalog, order)?;
        }

        let change = StatusChange::new(order.number, order.status, new_status, changed_at, changed_by);
        order.status = new_status;

        tracing::info!("訂單 {} 狀態轉換: {} -> {}", order.number, change.from, change.to);

        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomplan_core::{
        Accessory, AccessoryRequirement, AssemblyComponent, Material, MaterialRequirement,
        Product, StockRow,
    };
    use chrono::NaiveDate;

    fn order_for(product_id: &str) -> Order {
        Order::new(
            7,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            "測試訂單",
            product_id,
        )
    }

    fn conveyor_catalog() -> Catalog {
        // CONV-01 -> FRAME-01 x2；FRAME-01 用 STEEL-10 x3；CONV-01 用 MOTOR-5 x1
        let mut catalog = Catalog::new();
        catalog.add_product(Product::new("CONV-01", "輸送機"));
        catalog.add_product(Product::new("FRAME-01", "機架"));
        catalog.add_assembly(AssemblyComponent::new("CONV-01", "FRAME-01", 2));
        catalog.add_material_requirement(MaterialRequirement::new("FRAME-01", "STEEL-10", 3));
        catalog.add_accessory_requirement(AccessoryRequirement::new("CONV-01", "MOTOR-5", 1));
        catalog.add_material(Material::new("STEEL-10", "鋼板 10mm").with_on_hand(10));
        catalog.add_accessory(Accessory::new("MOTOR-5", "馬達 5kW").with_on_hand(2));
        catalog.add_material_stock(StockRow::new("STEEL-10", 1, 4));
        catalog.add_material_stock(StockRow::new("STEEL-10", 2, 6));
        catalog.add_accessory_stock(StockRow::new("MOTOR-5", 1, 2));
        catalog
    }

    #[test]
    fn test_consume_decrements_aggregate_and_rows_in_order() {
        let mut catalog = conveyor_catalog();

        // 需求：STEEL-10 = 2*3 = 6, MOTOR-5 = 1
        let report =
            ConsumptionCalculator::consume_for_order(&mut catalog, &order_for("CONV-01")).unwrap();

        assert_eq!(report.movements.len(), 2);
        assert_eq!(catalog.material("STEEL-10").unwrap().on_hand, 4);
        // 先扣倉庫1（4 -> 0），再扣倉庫2（6 -> 4）
        let rows = catalog.material_stock_rows("STEEL-10");
        assert_eq!(rows[0].quantity, 0);
        assert_eq!(rows[1].quantity, 4);
        assert_eq!(catalog.accessory("MOTOR-5").unwrap().on_hand, 1);
    }

    #[test]
    fn test_insufficient_stock_mutates_nothing() {
        let mut catalog = conveyor_catalog();
        // 馬達只剩 0，核對必定失敗
        catalog.accessory_mut("MOTOR-5").unwrap().on_hand = 0;

        let before = catalog.clone();
        let result = ConsumptionCalculator::consume_for_order(&mut catalog, &order_for("CONV-01"));

        match result {
            Err(PlanError::InsufficientStock { article, required, available, .. }) => {
                assert_eq!(article, "MOTOR-5");
                assert_eq!(required, 1);
                assert_eq!(available, 0);
            }
            other => panic!("預期庫存不足錯誤，實得 {:?}", other),
        }

        // 全有或全無：任何庫存都不得變動
        assert_eq!(catalog.material_stock, before.material_stock);
        assert_eq!(catalog.accessory_stock, before.accessory_stock);
        assert_eq!(
            catalog.material("STEEL-10").unwrap().on_hand,
            before.material("STEEL-10").unwrap().on_hand
        );
    }

    #[test]
    fn test_unknown_item_aborts_consumption() {
        let mut catalog = conveyor_catalog();
        catalog.add_material_requirement(MaterialRequirement::new("CONV-01", "GHOST-1", 1));

        let before = catalog.clone();
        let result = ConsumptionCalculator::consume_for_order(&mut catalog, &order_for("CONV-01"));

        assert!(matches!(result, Err(PlanError::ItemNotFound(_))));
        assert_eq!(catalog.material_stock, before.material_stock);
    }

    #[test]
    fn test_row_exhaustion_drops_remainder() {
        let mut catalog = conveyor_catalog();
        // 總帳足夠（10 >= 6），但倉庫明細只剩 2 + 1 = 3
        catalog.material_stock.clear();
        catalog.add_material_stock(StockRow::new("STEEL-10", 1, 2));
        catalog.add_material_stock(StockRow::new("STEEL-10", 2, 1));

        ConsumptionCalculator::consume_for_order(&mut catalog, &order_for("CONV-01")).unwrap();

        // 明細扣到零即止，剩餘 3 捨棄；總帳照常扣 6 -> 漂移屬既定行為
        let rows = catalog.material_stock_rows("STEEL-10");
        assert_eq!(rows[0].quantity, 0);
        assert_eq!(rows[1].quantity, 0);
        assert_eq!(catalog.material("STEEL-10").unwrap().on_hand, 4);
    }

    #[test]
    fn test_workflow_fires_consumption_on_production() {
        let mut catalog = conveyor_catalog();
        let mut order = order_for("CONV-01").with_status(OrderStatus::Procurement);
        let changed_at = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        let change = OrderWorkflow::transition(
            &mut catalog,
            &mut order,
            OrderStatus::Production,
            changed_at,
            "master01",
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Production);
        assert_eq!(change.from, OrderStatus::Procurement);
        // 領料確實發生
        assert_eq!(catalog.material("STEEL-10").unwrap().on_hand, 4);
    }

    #[test]
    fn test_workflow_blocks_on_shortage() {
        let mut catalog = conveyor_catalog();
        catalog.material_mut("STEEL-10").unwrap().on_hand = 1;
        let mut order = order_for("CONV-01").with_status(OrderStatus::Procurement);
        let changed_at = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        let result = OrderWorkflow::transition(
            &mut catalog,
            &mut order,
            OrderStatus::Production,
            changed_at,
            "master01",
        );

        assert!(result.is_err());
        // 狀態與庫存都維持原樣
        assert_eq!(order.status, OrderStatus::Procurement);
        assert_eq!(catalog.material_stock_total("STEEL-10"), 10);
    }

    #[test]
    fn test_other_transitions_skip_consumption() {
        let mut catalog = conveyor_catalog();
        let mut order = order_for("CONV-01");
        let changed_at = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        OrderWorkflow::transition(
            &mut catalog,
            &mut order,
            OrderStatus::Specification,
            changed_at,
            "manager01",
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Specification);
        assert_eq!(catalog.material("STEEL-10").unwrap().on_hand, 10);
    }

    #[test]
    fn test_workflow_rejects_stage_skipping() {
        let mut catalog = conveyor_catalog();
        // 新建訂單不可直接跳到生產
        let mut order = order_for("CONV-01");
        let changed_at = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        let result = OrderWorkflow::transition(
            &mut catalog,
            &mut order,
            OrderStatus::Production,
            changed_at,
            "master01",
        );

        assert!(matches!(
            result,
            Err(PlanError::InvalidStatusTransition { .. })
        ));
        // 狀態未變，也不得觸發領料
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(catalog.material("STEEL-10").unwrap().on_hand, 10);
    }

    #[test]
    fn test_terminal_status_rejects_transition() {
        let mut catalog = conveyor_catalog();
        let mut order = order_for("CONV-01").with_status(OrderStatus::Closed);
        let changed_at = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        let result = OrderWorkflow::transition(
            &mut catalog,
            &mut order,
            OrderStatus::New,
            changed_at,
            "manager01",
        );

        assert!(matches!(
            result,
            Err(PlanError::InvalidStatusTransition { .. })
        ));
    }
}
