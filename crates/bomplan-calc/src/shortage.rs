//! 缺料、成本與備料天數分析

use rust_decimal::Decimal;

use bomplan_core::{Catalog, Order};

use crate::explosion::ExplosionCalculator;
use crate::lead_time::parse_supply_days;
use crate::{MaterialsSummary, RequiredItem};

/// 缺料分析計算器
pub struct ShortageCalculator;

impl ShortageCalculator {
    /// 分析訂單的物料/配件需求、缺口成本與最短備料天數
    ///
    /// 以單位數 1 展開根產品；目錄中查不到的貨號直接略過（容錯降級），
    /// 可用量一律取各倉庫明細合計，不看總帳現有量。
    pub fn analyze(catalog: &Catalog, order: &Order) -> bomplan_core::Result<MaterialsSummary> {
        tracing::info!("開始缺料分析：訂單 {} 產品 {}", order.number, order.product_id);

        let explosion = ExplosionCalculator::explode(catalog, &order.product_id, 1)?;

        let mut result = MaterialsSummary::empty();

        // 物料
        for (article, &required) in &explosion.material_totals {
            let material = match catalog.material(article) {
                Some(m) => m,
                None => {
                    tracing::debug!("物料 {} 不在目錄中，略過", article);
                    continue;
                }
            };

            let available = catalog.material_stock_total(article);
            let price = material.price.unwrap_or(Decimal::ZERO);
            let supplier = material.supplier.as_deref().and_then(|s| catalog.supplier(s));

            result.items.push(Self::build_item(
                true, &material.article, &material.name, &material.unit,
                &material.product_type, required, available, price, supplier,
            ));
        }

        // 配件
        for (article, &required) in &explosion.accessory_totals {
            let accessory = match catalog.accessory(article) {
                Some(a) => a,
                None => {
                    tracing::debug!("配件 {} 不在目錄中，略過", article);
                    continue;
                }
            };

            let available = catalog.accessory_stock_total(article);
            let price = accessory.price.unwrap_or(Decimal::ZERO);
            let supplier = accessory.supplier.as_deref().and_then(|s| catalog.supplier(s));

            result.items.push(Self::build_item(
                false, &accessory.article, &accessory.name, &accessory.unit,
                &accessory.product_type, required, available, price, supplier,
            ));
        }

        // 缺口總成本：只計缺料項目
        result.total_missing_cost = result
            .items
            .iter()
            .filter(|i| i.missing > 0)
            .map(|i| Decimal::from(i.missing) * i.purchase_price)
            .sum();

        // 最短備料天數：各供應商可並行供貨，取缺料項目的最大交期
        result.minimal_delivery_days = result
            .items
            .iter()
            .filter(|i| i.missing > 0)
            .map(|i| i.supply_days)
            .max()
            .unwrap_or(0);

        tracing::info!(
            "缺料分析完成：{} 項需求，缺口成本 {}，備料 {} 天",
            result.items.len(),
            result.total_missing_cost,
            result.minimal_delivery_days
        );

        Ok(result)
    }

    #[allow(clippy::too_many_arguments)]
    fn build_item(
        is_material: bool,
        article: &str,
        name: &str,
        unit: &str,
        product_type: &str,
        required: i64,
        available: i64,
        price: Decimal,
        supplier: Option<&bomplan_core::Supplier>,
    ) -> RequiredItem {
        let supply_time_raw = supplier.map(|s| s.supply_time.clone()).unwrap_or_default();

        RequiredItem {
            is_material,
            article: article.to_string(),
            name: name.to_string(),
            unit: unit.to_string(),
            product_type: product_type.to_string(),
            required,
            available,
            missing: (required - available).max(0),
            purchase_price: price,
            // 目前設計：成本價與採購價相同
            cost_price: price,
            supplier_name: supplier.map(|s| s.name.clone()).unwrap_or_default(),
            supply_days: parse_supply_days(&supply_time_raw),
            supply_time_raw,
        }
    }
}
