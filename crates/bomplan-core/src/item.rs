//! 物料、配件與供應商模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原物料主檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// 貨號
    pub article: String,

    /// 名稱
    pub name: String,

    /// 計量單位
    pub unit: String,

    /// 物料類別
    pub product_type: String,

    /// 單價（未維護時視為 0）
    pub price: Option<Decimal>,

    /// 供應商名稱
    pub supplier: Option<String>,

    /// 總帳現有量（與各倉庫明細並行維護）
    pub on_hand: i64,
}

impl Material {
    /// 創建新的物料
    pub fn new(article: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            article: article.into(),
            name: name.into(),
            unit: String::new(),
            product_type: String::new(),
            price: None,
            supplier: None,
            on_hand: 0,
        }
    }

    /// 建構器模式：設置計量單位
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// 建構器模式：設置類別
    pub fn with_product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = product_type.into();
        self
    }

    /// 建構器模式：設置單價
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// 建構器模式：設置供應商
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// 建構器模式：設置總帳現有量
    pub fn with_on_hand(mut self, on_hand: i64) -> Self {
        self.on_hand = on_hand;
        self
    }
}

/// 外購配件主檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accessory {
    /// 貨號
    pub article: String,

    /// 名稱
    pub name: String,

    /// 計量單位
    pub unit: String,

    /// 配件類別
    pub product_type: String,

    /// 單價（未維護時視為 0）
    pub price: Option<Decimal>,

    /// 供應商名稱
    pub supplier: Option<String>,

    /// 總帳現有量
    pub on_hand: i64,
}

impl Accessory {
    /// 創建新的配件
    pub fn new(article: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            article: article.into(),
            name: name.into(),
            unit: String::new(),
            product_type: String::new(),
            price: None,
            supplier: None,
            on_hand: 0,
        }
    }

    /// 建構器模式：設置計量單位
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// 建構器模式：設置類別
    pub fn with_product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = product_type.into();
        self
    }

    /// 建構器模式：設置單價
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// 建構器模式：設置供應商
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// 建構器模式：設置總帳現有量
    pub fn with_on_hand(mut self, on_hand: i64) -> Self {
        self.on_hand = on_hand;
        self
    }
}

/// 供應商
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    /// 名稱（唯一鍵）
    pub name: String,

    /// 地址
    pub address: String,

    /// 交期描述（自由文字，例如「14 дней」「10 天」）
    pub supply_time: String,
}

impl Supplier {
    /// 創建新的供應商
    pub fn new(name: impl Into<String>, supply_time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            supply_time: supply_time.into(),
        }
    }

    /// 建構器模式：設置地址
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

/// 倉庫
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    /// 倉庫ID
    pub id: i32,

    /// 名稱
    pub name: String,
}

impl Warehouse {
    /// 創建新的倉庫
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// 倉庫庫存明細：某貨號在某倉庫的數量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRow {
    /// 貨號
    pub article: String,

    /// 倉庫ID
    pub warehouse_id: i32,

    /// 數量（>= 0）
    pub quantity: i64,
}

impl StockRow {
    /// 創建新的庫存明細
    pub fn new(article: impl Into<String>, warehouse_id: i32, quantity: i64) -> Self {
        Self {
            article: article.into(),
            warehouse_id,
            quantity,
        }
    }
}
