//! 產品與規格模型

use serde::{Deserialize, Serialize};

/// 產品（成品或半成品）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID（唯一名稱）
    pub id: String,

    /// 顯示名稱
    pub name: String,
}

impl Product {
    /// 創建新的產品
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// 裝配規格：一個父產品需要 `count` 個子產品
///
/// 產品之間構成有向圖；`count <= 0` 視為不存在。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyComponent {
    /// 父產品ID
    pub product_id: String,

    /// 子產品ID
    pub child_id: String,

    /// 每單位父產品所需數量
    pub count: i64,
}

impl AssemblyComponent {
    /// 創建新的裝配規格
    pub fn new(product_id: impl Into<String>, child_id: impl Into<String>, count: i64) -> Self {
        Self {
            product_id: product_id.into(),
            child_id: child_id.into(),
            count,
        }
    }
}

/// 物料規格：每單位產品直接消耗的原物料（不含子裝配）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRequirement {
    /// 產品ID
    pub product_id: String,

    /// 物料貨號
    pub material_id: String,

    /// 每單位產品用量
    pub count: i64,
}

impl MaterialRequirement {
    /// 創建新的物料規格
    pub fn new(product_id: impl Into<String>, material_id: impl Into<String>, count: i64) -> Self {
        Self {
            product_id: product_id.into(),
            material_id: material_id.into(),
            count,
        }
    }
}

/// 配件規格：每單位產品直接消耗的外購配件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessoryRequirement {
    /// 產品ID
    pub product_id: String,

    /// 配件貨號
    pub accessory_id: String,

    /// 每單位產品用量
    pub count: i64,
}

impl AccessoryRequirement {
    /// 創建新的配件規格
    pub fn new(
        product_id: impl Into<String>,
        accessory_id: impl Into<String>,
        count: i64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            accessory_id: accessory_id.into(),
            count,
        }
    }
}

/// 工序規格：生產一單位產品的單一製程步驟
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationSpec {
    /// 產品ID
    pub product_id: String,

    /// 工序名稱
    pub operation: String,

    /// 設備類型（單位產能資源）
    pub equipment_type: String,

    /// 工序順序號（>= 1，同產品內依此排序）
    pub number: u32,

    /// 每單位產品加工時間（分鐘）
    pub minutes_per_unit: f64,
}

impl OperationSpec {
    /// 創建新的工序規格
    pub fn new(
        product_id: impl Into<String>,
        operation: impl Into<String>,
        equipment_type: impl Into<String>,
        number: u32,
        minutes_per_unit: f64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            operation: operation.into(),
            equipment_type: equipment_type.into(),
            number,
            minutes_per_unit,
        }
    }
}
