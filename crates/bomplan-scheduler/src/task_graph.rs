//! 生產任務圖構建
//!
//! 依展開後的產品單位數，把每個產品的工序實例化成任務：
//! 同產品工序依順序號串成線性鏈（後工序依賴前工序），
//! 產品之間再依裝配規格加上「父件首工序等待子件末工序」的邊。
//! 父件或子件沒有任何工序時不補邊，缺口不做傳遞性橋接。

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use bomplan_core::Catalog;

/// 生產任務：某產品的一道工序
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionTask {
    /// 任務ID（自 1 起連續編號，排序決定性的依據）
    pub id: usize,

    /// 產品ID
    pub product_id: String,

    /// 工序名稱
    pub operation: String,

    /// 設備類型
    pub equipment_type: String,

    /// 工序順序號
    pub number: u32,

    /// 任務總工時（分鐘）= 單位工時 × max(1, 單位數)
    pub duration_minutes: f64,

    /// 前置任務ID
    pub prereq_ids: Vec<usize>,

    /// 排程開始時刻（分鐘）
    pub start_minute: f64,

    /// 排程完成時刻（分鐘）
    pub finish_minute: f64,
}

/// 任務圖構建器
pub struct TaskGraphBuilder;

impl TaskGraphBuilder {
    /// 由產品單位數構建任務列表
    ///
    /// 走訪順序固定（BTreeMap 依產品ID排序），任務ID因此可重現。
    pub fn build(catalog: &Catalog, product_units: &BTreeMap<String, i64>) -> Vec<ProductionTask> {
        let mut tasks: Vec<ProductionTask> = Vec::new();
        let mut next_id = 1usize;

        // 各產品的首/末任務，供跨產品依賴使用
        let mut first_task: HashMap<String, usize> = HashMap::new();
        let mut last_task: HashMap<String, usize> = HashMap::new();

        for (product_id, &units) in product_units {
            if units == 0 {
                continue;
            }

            let specs = catalog.operation_specs(product_id);
            if specs.is_empty() {
                continue;
            }

            let mut prev: Option<usize> = None;
            for spec in specs {
                let task = ProductionTask {
                    id: next_id,
                    product_id: product_id.clone(),
                    operation: spec.operation.clone(),
                    equipment_type: spec.equipment_type.clone(),
                    number: spec.number,
                    duration_minutes: spec.minutes_per_unit * units.max(1) as f64,
                    prereq_ids: prev.into_iter().collect(),
                    start_minute: 0.0,
                    finish_minute: 0.0,
                };
                next_id += 1;

                first_task.entry(product_id.clone()).or_insert(task.id);
                last_task.insert(product_id.clone(), task.id);
                prev = Some(task.id);
                tasks.push(task);
            }
        }

        // 跨產品依賴：父件的首工序等待子件的末工序完成
        for parent_id in product_units.keys() {
            for asm in catalog.assembly_components(parent_id) {
                let (parent_first, child_last) =
                    match (first_task.get(parent_id), last_task.get(&asm.child_id)) {
                        (Some(&pf), Some(&cl)) => (pf, cl),
                        _ => continue,
                    };

                if let Some(task) = tasks.iter_mut().find(|t| t.id == parent_first) {
                    if !task.prereq_ids.contains(&child_last) {
                        task.prereq_ids.push(child_last);
                    }
                }
            }
        }

        tracing::debug!("任務圖構建完成：{} 個任務", tasks.len());

        tasks
    }
}
