use crate::error::ColoringResult;
use crate::graph::ConstraintGraph;

use super::assignment::Assignment;

/// 一致性检查 - 判断 (vertex, color) 是否与已提交的部分解相容
///
/// 仅当某个邻居已在 `assignment` 中被赋予同一颜色时返回 false；
/// 只检查已提交的赋值，不读取候选域。
pub fn is_consistent(
    graph: &ConstraintGraph,
    vertex: &str,
    color: &str,
    assignment: &Assignment,
) -> ColoringResult<bool> {
    let neighbors = graph.neighbors(vertex)?;

    for (assigned_vertex, assigned_color) in assignment.iter() {
        if assigned_color == color && neighbors.contains(assigned_vertex) {
            return Ok(false);
        }
    }
    Ok(true)
}
