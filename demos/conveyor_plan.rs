//! 輸送機訂單分析示例
//!
//! 展示三個引擎入口：缺料分析、生產排程、領料。

use bomplan::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== 輸送機訂單分析示例 ===\n");

    let mut catalog = Catalog::new();

    // 產品結構：輸送機 = 機架 x2 + 滾筒 x4
    catalog.add_product(Product::new("CONV-01", "帶式輸送機"));
    catalog.add_product(Product::new("FRAME-01", "機架"));
    catalog.add_product(Product::new("ROLLER-01", "滾筒"));
    catalog.add_assembly(AssemblyComponent::new("CONV-01", "FRAME-01", 2));
    catalog.add_assembly(AssemblyComponent::new("CONV-01", "ROLLER-01", 4));

    // 用料與配件
    catalog.add_material_requirement(MaterialRequirement::new("FRAME-01", "STEEL-10", 3));
    catalog.add_material_requirement(MaterialRequirement::new("ROLLER-01", "TUBE-40", 1));
    catalog.add_accessory_requirement(AccessoryRequirement::new("CONV-01", "MOTOR-5", 1));

    catalog.add_material(
        Material::new("STEEL-10", "鋼板 10mm")
            .with_unit("張")
            .with_price(Decimal::from(120))
            .with_supplier("鋼鐵行")
            .with_on_hand(10),
    );
    catalog.add_material(
        Material::new("TUBE-40", "鋼管 40mm")
            .with_unit("支")
            .with_price(Decimal::from(45))
            .with_supplier("鋼鐵行")
            .with_on_hand(10),
    );
    catalog.add_accessory(
        Accessory::new("MOTOR-5", "馬達 5kW")
            .with_price(Decimal::from(4500))
            .with_supplier("電機行")
            .with_on_hand(1),
    );
    catalog.add_supplier(Supplier::new("鋼鐵行", "14 дней"));
    catalog.add_supplier(Supplier::new("電機行", "30 дней"));

    catalog.add_warehouse(Warehouse::new(1, "主倉"));
    catalog.add_material_stock(StockRow::new("STEEL-10", 1, 4));
    catalog.add_material_stock(StockRow::new("TUBE-40", 1, 10));
    catalog.add_accessory_stock(StockRow::new("MOTOR-5", 1, 1));

    // 工藝路線
    catalog.add_operation(OperationSpec::new("FRAME-01", "下料", "剪床", 1, 10.0));
    catalog.add_operation(OperationSpec::new("FRAME-01", "焊接", "焊接站", 2, 30.0));
    catalog.add_operation(OperationSpec::new("ROLLER-01", "車削", "車床", 1, 12.0));
    catalog.add_operation(OperationSpec::new("CONV-01", "總裝", "裝配線", 1, 45.0));

    let order = Order::new(
        17,
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        "帶式輸送機一台",
        "CONV-01",
    );

    // 1. 缺料分析
    let materials = analyze_materials(&catalog, &order)?;
    println!("需求明細:");
    for item in &materials.items {
        println!(
            "  - {} {}: 需求 {} {}, 可用 {}, 缺口 {}, 供應商 {} ({} 天)",
            item.article, item.name, item.required, item.unit,
            item.available, item.missing, item.supplier_name, item.supply_days
        );
    }
    println!("缺口採購成本: {}", materials.total_missing_cost);
    println!("最短備料天數: {} 天\n", materials.minimal_delivery_days);

    // 2. 生產排程
    let production = analyze_production(&catalog, &order)?;
    println!("生產排程（甘特圖資料）:");
    for op in &production.operations {
        println!(
            "  [{}] {} / {}: {:.0} 分 ~ {:.0} 分（{:.0} 分鐘）",
            op.equipment_type, op.product_id, op.operation,
            op.start_minute, op.finish_minute, op.duration_minutes
        );
    }
    println!("最短總生產時間: {:.0} 分鐘\n", production.total_minutes);

    // 3. 領料（庫存不足時整筆拒絕）
    match consume_for_order(&mut catalog, &order) {
        Ok(report) => println!("領料成功：{} 筆異動", report.movements.len()),
        Err(err) => println!("領料被拒：{}", err),
    }

    Ok(())
}
