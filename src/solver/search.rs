use std::collections::HashSet;

use chrono::Utc;

use crate::core::event_bus::{EventSender, SolveEvent};
use crate::error::{ColoringError, ColoringResult};
use crate::graph::{ConstraintGraph, DomainStore};

use super::assignment::Assignment;
use super::consistency::is_consistent;
use super::propagation::enforce_arc_consistency;

/// 回溯搜索引擎 - 维护一次求解过程中的可变状态
///
/// 图定义借用自调用方且在求解期间不可变；候选域与部分解
/// 由引擎独占，随求解调用结束而销毁。
pub struct SearchEngine<'a> {
    /// 约束图（不可变）
    graph: &'a ConstraintGraph,

    /// 本次求解使用的调色板
    palette: Vec<String>,

    /// 每个顶点的候选颜色域
    domains: DomainStore,

    /// 事件发送器（可选）
    event_sender: Option<EventSender>,
}

impl<'a> SearchEngine<'a> {
    /// 创建引擎并校验边界输入
    ///
    /// 调色板为空或包含重复颜色时立即失败，不进入搜索。
    pub fn new(
        graph: &'a ConstraintGraph,
        palette: &[String],
        event_sender: Option<EventSender>,
    ) -> ColoringResult<Self> {
        if palette.is_empty() {
            return Err(ColoringError::EmptyPalette);
        }
        let mut seen = HashSet::new();
        for color in palette {
            if !seen.insert(color.as_str()) {
                return Err(ColoringError::DuplicateColor(color.clone()));
            }
        }

        Ok(Self {
            graph,
            palette: palette.to_vec(),
            domains: DomainStore::new(graph, palette),
            event_sender,
        })
    }

    /// 执行回溯搜索，返回完整赋值或 [`ColoringError::Infeasible`]
    pub fn solve(mut self) -> ColoringResult<Assignment> {
        tracing::debug!(
            vertices = self.graph.vertex_count(),
            colors = self.palette.len(),
            "starting backtracking search"
        );

        let mut assignment = Assignment::new();
        if self.backtrack(&mut assignment)? {
            tracing::debug!(assigned = assignment.len(), "search completed");
            self.emit(SolveEvent::SolveCompleted {
                assignment: assignment.clone(),
                timestamp: Utc::now(),
            });
            Ok(assignment)
        } else {
            tracing::debug!("search exhausted, no valid coloring");
            self.emit(SolveEvent::SolveInfeasible {
                timestamp: Utc::now(),
            });
            Err(ColoringError::Infeasible)
        }
    }

    /// 递归搜索一步：传播 → 选变量 → 逐色尝试 → 失败回溯
    fn backtrack(&mut self, assignment: &mut Assignment) -> ColoringResult<bool> {
        if assignment.len() == self.graph.vertex_count() {
            return Ok(true);
        }

        // 每个决策点之前都对全图重新传播
        if !enforce_arc_consistency(self.graph, &mut self.domains)? {
            return Ok(false);
        }

        let vertex = match self.select_unassigned_variable(assignment) {
            Some(vertex) => vertex,
            // 赋值未完成时必然存在未赋值顶点
            None => return Ok(false),
        };

        // 在传播之后快照候选域，按调色板顺序逐个尝试
        let candidates = self.domains.get(&vertex)?.to_vec();
        for color in candidates {
            if is_consistent(self.graph, &vertex, &color, assignment)? {
                self.assign(&vertex, &color, assignment)?;
                if self.backtrack(assignment)? {
                    return Ok(true);
                }
            }
            // 尝试下一颜色前撤销本顶点：域恢复为完整调色板
            self.unassign(&vertex, assignment)?;
        }
        Ok(false)
    }

    /// 变量选择 - 静态度数最高的未赋值顶点，并列时取先插入者
    fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<String> {
        let graph = &self.graph.graph;
        let mut best: Option<(petgraph::stable_graph::NodeIndex, usize)> = None;

        for idx in graph.node_indices() {
            let node = graph.node_weight(idx)?;
            if assignment.contains_vertex(&node.id) {
                continue;
            }
            let degree = graph.neighbors(idx).count();
            match best {
                Some((_, best_degree)) if degree <= best_degree => {}
                _ => best = Some((idx, degree)),
            }
        }

        best.and_then(|(idx, _)| graph.node_weight(idx).map(|n| n.id.clone()))
    }

    /// 赋值：域收缩为单元素，记录入部分解，发出 Assigned 事件
    fn assign(
        &mut self,
        vertex: &str,
        color: &str,
        assignment: &mut Assignment,
    ) -> ColoringResult<()> {
        self.domains.collapse(vertex, color)?;
        assignment.push(vertex.to_string(), color.to_string());
        tracing::trace!(vertex, color, "assigned");
        self.emit(SolveEvent::Assigned {
            vertex: vertex.to_string(),
            color: color.to_string(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// 撤销赋值：域恢复为完整调色板，移除部分解记录
    ///
    /// 域恢复无条件执行；只有实际移除了赋值记录时才发出 Unassigned 事件。
    fn unassign(&mut self, vertex: &str, assignment: &mut Assignment) -> ColoringResult<()> {
        self.domains.reset(vertex, &self.palette)?;
        if let Some(color) = assignment.remove(vertex) {
            tracing::trace!(vertex, %color, "unassigned");
            self.emit(SolveEvent::Unassigned {
                vertex: vertex.to_string(),
                color,
                timestamp: Utc::now(),
            });
        }
        Ok(())
    }

    fn emit(&self, event: SolveEvent) {
        if let Some(sender) = &self.event_sender {
            // 接收端关闭不影响求解
            let _ = sender.send(event);
        }
    }
}

/// 求解入口 - 给定约束图与调色板，返回一个合法着色；无解时返回
/// [`ColoringError::Infeasible`]
pub fn solve(graph: &ConstraintGraph, palette: &[String]) -> ColoringResult<Assignment> {
    SearchEngine::new(graph, palette, None)?.solve()
}

/// 求解入口（带事件通知）- 每次赋值/撤销按发生顺序发往 `sender`
pub fn solve_with_events(
    graph: &ConstraintGraph,
    palette: &[String],
    sender: EventSender,
) -> ColoringResult<Assignment> {
    SearchEngine::new(graph, palette, Some(sender))?.solve()
}
