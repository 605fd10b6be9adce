//! 貪婪列表排程
//!
//! 單遍、不可搶占的列表排程：每一輪取出所有前置已完成的就緒任務，
//! 依工時遞減（同工時依任務ID）逐一指派到其設備類型的最早可用時刻。
//! 每種設備類型視為單台資源；就緒集合為空而任務未排完表示存在
//! 循環依賴，此時回傳部分排程而非錯誤。

use std::collections::{BTreeSet, HashMap};

use crate::task_graph::ProductionTask;

/// 排程結果摘要
#[derive(Debug, Clone, Copy)]
pub struct ScheduleOutcome {
    /// 總完工時間（最大完成時刻；無任務時為 0）
    pub makespan: f64,

    /// 是否完整排程（false 表示偵測到循環依賴，結果為部分排程）
    pub complete: bool,
}

/// 列表排程器
pub struct ListScheduler;

impl ListScheduler {
    /// 就地排程：填入各任務的開始/完成時刻
    pub fn schedule(tasks: &mut [ProductionTask]) -> ScheduleOutcome {
        let index: HashMap<usize, usize> =
            tasks.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

        let mut unscheduled: BTreeSet<usize> = tasks.iter().map(|t| t.id).collect();
        let mut completion: HashMap<usize, f64> = HashMap::new();
        // 設備類型不分大小寫
        let mut equipment_free: HashMap<String, f64> = HashMap::new();
        let mut complete = true;

        while !unscheduled.is_empty() {
            // 就緒任務：所有前置均已完成
            let mut ready: Vec<usize> = unscheduled
                .iter()
                .copied()
                .filter(|id| {
                    tasks[index[id]]
                        .prereq_ids
                        .iter()
                        .all(|p| completion.contains_key(p))
                })
                .collect();

            if ready.is_empty() {
                tracing::warn!("任務圖存在循環依賴，回傳部分排程（剩餘 {} 個任務）", unscheduled.len());
                complete = false;
                break;
            }

            // 工時長者優先，同工時依任務ID保證可重現
            ready.sort_by(|a, b| {
                tasks[index[b]]
                    .duration_minutes
                    .partial_cmp(&tasks[index[a]].duration_minutes)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.cmp(b))
            });

            for id in ready {
                let idx = index[&id];

                let prereq_finish = tasks[idx]
                    .prereq_ids
                    .iter()
                    .filter_map(|p| completion.get(p))
                    .fold(0.0_f64, |acc, &t| acc.max(t));

                let equipment_key = tasks[idx].equipment_type.to_lowercase();
                let equipment_available = equipment_free.get(&equipment_key).copied().unwrap_or(0.0);

                let start = prereq_finish.max(equipment_available);
                let finish = start + tasks[idx].duration_minutes;

                let task = &mut tasks[idx];
                task.start_minute = start;
                task.finish_minute = finish;

                completion.insert(id, finish);
                equipment_free.insert(equipment_key, finish);
                unscheduled.remove(&id);
            }
        }

        let makespan = completion.values().fold(0.0_f64, |acc, &t| acc.max(t));

        ScheduleOutcome { makespan, complete }
    }
}
