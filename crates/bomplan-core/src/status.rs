//! 訂單狀態流程

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 訂單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// 新建
    New,
    /// 已取消
    Cancelled,
    /// 編制規格
    Specification,
    /// 確認
    Confirmation,
    /// 採購
    Procurement,
    /// 生產
    Production,
    /// 品管
    Control,
    /// 完成
    Ready,
    /// 結案
    Closed,
}

impl OrderStatus {
    /// 全部狀態（依流程順序）
    pub const ALL: [OrderStatus; 9] = [
        OrderStatus::New,
        OrderStatus::Cancelled,
        OrderStatus::Specification,
        OrderStatus::Confirmation,
        OrderStatus::Procurement,
        OrderStatus::Production,
        OrderStatus::Control,
        OrderStatus::Ready,
        OrderStatus::Closed,
    ];

    /// 是否為終態（終態不允許再轉換）
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Closed)
    }

    /// 目前狀態允許的下一步狀態（逐站流程表，不可跳站）
    pub fn allowed_transitions(self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::New => &[OrderStatus::Specification, OrderStatus::Cancelled],
            OrderStatus::Specification => &[OrderStatus::Confirmation],
            OrderStatus::Confirmation => &[OrderStatus::Cancelled, OrderStatus::Procurement],
            OrderStatus::Procurement => &[OrderStatus::Production],
            OrderStatus::Production => &[OrderStatus::Control],
            OrderStatus::Control => &[OrderStatus::Ready],
            OrderStatus::Ready => &[OrderStatus::Closed],
            OrderStatus::Cancelled | OrderStatus::Closed => &[],
        }
    }

    /// 是否允許轉換到指定狀態
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::New => "新建",
            OrderStatus::Cancelled => "已取消",
            OrderStatus::Specification => "編制規格",
            OrderStatus::Confirmation => "確認",
            OrderStatus::Procurement => "採購",
            OrderStatus::Production => "生產",
            OrderStatus::Control => "品管",
            OrderStatus::Ready => "完成",
            OrderStatus::Closed => "結案",
        };
        write!(f, "{}", label)
    }
}

/// 狀態變更記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    /// 訂單編號
    pub order_number: i32,

    /// 原狀態
    pub from: OrderStatus,

    /// 新狀態
    pub to: OrderStatus,

    /// 變更時間
    pub changed_at: NaiveDateTime,

    /// 變更人
    pub changed_by: String,

    /// 備註
    pub comment: Option<String>,
}

impl StatusChange {
    /// 創建新的狀態變更記錄
    pub fn new(
        order_number: i32,
        from: OrderStatus,
        to: OrderStatus,
        changed_at: NaiveDateTime,
        changed_by: impl Into<String>,
    ) -> Self {
        Self {
            order_number,
            from,
            to,
            changed_at,
            changed_by: changed_by.into(),
            comment: None,
        }
    }

    /// 建構器模式：設置備註
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
