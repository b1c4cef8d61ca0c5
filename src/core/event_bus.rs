use chrono::{DateTime, Utc};
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::Serialize;

use crate::solver::Assignment;

/// 求解事件 - 通过 EventBus 传递给渲染/可视化协作方
///
/// 事件按操作发生的精确顺序发出；发送是同步完成的，
/// 引擎在发送返回前不会再次变更同一顶点的状态。
#[derive(Clone, Debug, Serialize)]
pub enum SolveEvent {
    /// 顶点被赋予颜色
    Assigned {
        vertex: String,
        color: String,
        timestamp: DateTime<Utc>,
    },

    /// 顶点的颜色赋值被撤销
    Unassigned {
        vertex: String,
        color: String,
        timestamp: DateTime<Utc>,
    },

    /// 求解成功，携带完整赋值
    SolveCompleted {
        assignment: Assignment,
        timestamp: DateTime<Utc>,
    },

    /// 当前调色板下无解
    SolveInfeasible { timestamp: DateTime<Utc> },
}

/// 事件发送器
pub type EventSender = Sender<SolveEvent>;

/// 事件接收器
pub type EventReceiver = Receiver<SolveEvent>;

/// 创建事件通道
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    unbounded()
}
