//! BOM 展開
//!
//! 自根產品出發深度優先展開裝配結構，將各層用量乘積
//! 累加成物料、配件與產品單位數的合計。
//! 同一子裝配可經多條路徑出現（菱形結構），每條路徑都要累計；
//! 路徑上重複出現同一產品則為循環，直接回報錯誤。

use std::collections::BTreeMap;

use bomplan_core::{Catalog, PlanError};

/// BOM 展開結果
///
/// 使用 BTreeMap 保證走訪順序與插入順序無關。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explosion {
    /// 物料需求合計（貨號 -> 數量）
    pub material_totals: BTreeMap<String, i64>,

    /// 配件需求合計（貨號 -> 數量）
    pub accessory_totals: BTreeMap<String, i64>,

    /// 各（子）產品所需單位數（產品ID -> 數量）
    pub product_units: BTreeMap<String, i64>,
}

impl Explosion {
    /// 創建空的展開結果
    pub fn empty() -> Self {
        Self::default()
    }
}

/// BOM 展開計算器
pub struct ExplosionCalculator;

impl ExplosionCalculator {
    /// 展開根產品的需求
    ///
    /// 目錄中查不到的產品ID視同沒有任何規格：不報錯，
    /// 其子樹展開為空（與分析入口的容錯降級一致）。
    ///
    /// # 參數
    /// * `root_product_id` - 根產品ID
    /// * `count` - 根產品單位數
    pub fn explode(
        catalog: &Catalog,
        root_product_id: &str,
        count: i64,
    ) -> bomplan_core::Result<Explosion> {
        let mut explosion = Explosion::empty();
        let mut path: Vec<String> = Vec::new();
        Self::descend(catalog, root_product_id, count, &mut path, &mut explosion)?;

        tracing::debug!(
            "BOM 展開完成: {} 物料 {} 項, 配件 {} 項, 產品 {} 項",
            root_product_id,
            explosion.material_totals.len(),
            explosion.accessory_totals.len(),
            explosion.product_units.len()
        );

        Ok(explosion)
    }

    fn descend(
        catalog: &Catalog,
        product_id: &str,
        count: i64,
        path: &mut Vec<String>,
        out: &mut Explosion,
    ) -> bomplan_core::Result<()> {
        // 循環偵測：以目前路徑判斷，菱形結構仍屬合法
        if path.iter().any(|p| p == product_id) {
            let mut cycle = path.clone();
            cycle.push(product_id.to_string());
            return Err(PlanError::AssemblyCycle(cycle));
        }

        *out.product_units.entry(product_id.to_string()).or_insert(0) += count;

        for req in catalog.material_requirements_of(product_id) {
            if req.count <= 0 {
                continue;
            }
            *out.material_totals
                .entry(req.material_id.clone())
                .or_insert(0) += req.count * count;
        }

        for req in catalog.accessory_requirements_of(product_id) {
            if req.count <= 0 {
                continue;
            }
            *out.accessory_totals
                .entry(req.accessory_id.clone())
                .or_insert(0) += req.count * count;
        }

        path.push(product_id.to_string());
        for asm in catalog.assembly_components(product_id) {
            if asm.count <= 0 {
                continue;
            }
            Self::descend(catalog, &asm.child_id, asm.count * count, path, out)?;
        }
        path.pop();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomplan_core::{
        AccessoryRequirement, AssemblyComponent, MaterialRequirement, Product,
    };
    use proptest::prelude::*;

    fn leaf_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_product(Product::new("ROLLER-01", "滾筒"));
        catalog.add_material_requirement(MaterialRequirement::new("ROLLER-01", "STEEL-10", 3));
        catalog.add_accessory_requirement(AccessoryRequirement::new("ROLLER-01", "BEARING-6204", 2));
        catalog
    }

    #[test]
    fn test_leaf_product_scales_by_count() {
        let catalog = leaf_catalog();

        let explosion = ExplosionCalculator::explode(&catalog, "ROLLER-01", 4).unwrap();

        assert_eq!(explosion.material_totals.get("STEEL-10"), Some(&12));
        assert_eq!(explosion.accessory_totals.get("BEARING-6204"), Some(&8));
        assert_eq!(explosion.product_units.get("ROLLER-01"), Some(&4));
        // 不應出現任何其他貨號
        assert_eq!(explosion.material_totals.len(), 1);
        assert_eq!(explosion.accessory_totals.len(), 1);
    }

    #[test]
    fn test_diamond_double_counts_shared_child() {
        // 菱形：ROOT -> A(2), ROOT -> B(3), A -> C(4), B -> C(5)
        let mut catalog = Catalog::new();
        catalog.add_product(Product::new("ROOT", "根"));
        catalog.add_assembly(AssemblyComponent::new("ROOT", "A", 2));
        catalog.add_assembly(AssemblyComponent::new("ROOT", "B", 3));
        catalog.add_assembly(AssemblyComponent::new("A", "C", 4));
        catalog.add_assembly(AssemblyComponent::new("B", "C", 5));
        catalog.add_material_requirement(MaterialRequirement::new("C", "STEEL-10", 1));

        let explosion = ExplosionCalculator::explode(&catalog, "ROOT", 1).unwrap();

        // C 經兩條路徑累計: 2*4 + 3*5 = 23
        assert_eq!(explosion.product_units.get("C"), Some(&23));
        assert_eq!(explosion.material_totals.get("STEEL-10"), Some(&23));
    }

    #[test]
    fn test_cycle_detected_as_error() {
        let mut catalog = Catalog::new();
        catalog.add_product(Product::new("A", "甲"));
        catalog.add_assembly(AssemblyComponent::new("A", "B", 1));
        catalog.add_assembly(AssemblyComponent::new("B", "A", 1));

        let result = ExplosionCalculator::explode(&catalog, "A", 1);

        match result {
            Err(PlanError::AssemblyCycle(path)) => {
                assert_eq!(path, vec!["A", "B", "A"]);
            }
            other => panic!("預期循環錯誤，實得 {:?}", other),
        }
    }

    #[test]
    fn test_zero_multiplier_treated_as_absent() {
        let mut catalog = Catalog::new();
        catalog.add_product(Product::new("ROOT", "根"));
        catalog.add_assembly(AssemblyComponent::new("ROOT", "A", 0));
        catalog.add_material_requirement(MaterialRequirement::new("ROOT", "STEEL-10", 0));
        catalog.add_material_requirement(MaterialRequirement::new("A", "PAINT-01", 5));

        let explosion = ExplosionCalculator::explode(&catalog, "ROOT", 1).unwrap();

        assert!(explosion.material_totals.is_empty());
        assert!(!explosion.product_units.contains_key("A"));
    }

    #[test]
    fn test_unknown_root_yields_empty_totals() {
        // 查不到的產品視同沒有規格：不報錯、合計為空
        let catalog = Catalog::new();

        let explosion = ExplosionCalculator::explode(&catalog, "NOPE", 1).unwrap();

        assert!(explosion.material_totals.is_empty());
        assert!(explosion.accessory_totals.is_empty());
        assert_eq!(explosion.product_units.get("NOPE"), Some(&1));
    }

    proptest! {
        /// 合計對兄弟節點的走訪順序不敏感：
        /// 任意打亂規格插入順序，展開結果不變。
        #[test]
        fn test_totals_invariant_under_edge_permutation(
            edges in Just(vec![
                ("ROOT", "A", 2i64),
                ("ROOT", "B", 3),
                ("A", "C", 4),
                ("B", "C", 5),
                ("C", "D", 2),
            ])
            .prop_shuffle()
        ) {
            let mut catalog = Catalog::new();
            catalog.add_product(Product::new("ROOT", "根"));
            for (parent, child, count) in &edges {
                catalog.add_assembly(AssemblyComponent::new(*parent, *child, *count));
            }
            catalog.add_material_requirement(MaterialRequirement::new("D", "STEEL-10", 1));
            catalog.add_accessory_requirement(AccessoryRequirement::new("C", "BOLT-M8", 6));

            let explosion = ExplosionCalculator::explode(&catalog, "ROOT", 1).unwrap();

            // C = 2*4 + 3*5 = 23, D = 23*2 = 46, BOLT = 23*6 = 138
            prop_assert_eq!(explosion.product_units.get("C"), Some(&23));
            prop_assert_eq!(explosion.material_totals.get("STEEL-10"), Some(&46));
            prop_assert_eq!(explosion.accessory_totals.get("BOLT-M8"), Some(&138));
        }
    }
}
