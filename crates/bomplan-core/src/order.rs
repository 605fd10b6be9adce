//! 訂單模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::status::OrderStatus;

/// 生產訂單
///
/// 引擎只要求訂單攜帶根產品ID；其餘欄位供呼叫端與報表使用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 訂單編號
    pub number: i32,

    /// 下單日期
    pub date: NaiveDate,

    /// 訂單名稱
    pub name: String,

    /// 根產品ID
    pub product_id: String,

    /// 訂單金額
    pub cost: Decimal,

    /// 交貨日期
    pub due_date: NaiveDate,

    /// 目前狀態
    pub status: OrderStatus,
}

impl Order {
    /// 創建新的訂單
    pub fn new(
        number: i32,
        date: NaiveDate,
        name: impl Into<String>,
        product_id: impl Into<String>,
    ) -> Self {
        Self {
            number,
            date,
            name: name.into(),
            product_id: product_id.into(),
            cost: Decimal::ZERO,
            due_date: date,
            status: OrderStatus::New,
        }
    }

    /// 建構器模式：設置訂單金額
    pub fn with_cost(mut self, cost: Decimal) -> Self {
        self.cost = cost;
        self
    }

    /// 建構器模式：設置交貨日期
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}
