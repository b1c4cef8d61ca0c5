use crate::error::ColoringResult;
use crate::graph::{ConstraintGraph, DomainStore};

/// AC-3 弧一致性传播
///
/// 工作表以全部有向弧初始化（每条边两个方向），按 LIFO 顺序处理。
/// 返回 `Ok(true)` 表示传播后全图弧一致；`Ok(false)` 表示某个顶点的
/// 候选域被清空（当前分支不可满足）。
pub fn enforce_arc_consistency(
    graph: &ConstraintGraph,
    domains: &mut DomainStore,
) -> ColoringResult<bool> {
    let mut worklist = graph.arcs();

    while let Some((xi, xj)) = worklist.pop() {
        if revise(domains, &xi, &xj)? {
            if domains.get(&xi)?.is_empty() {
                tracing::debug!(vertex = %xi, "domain wiped out during propagation");
                return Ok(false);
            }
            // 域收缩后重新检查所有依赖弧 (xk, xi)
            for xk in graph.neighbors(&xi)? {
                worklist.push((xk, xi.clone()));
            }
        }
    }
    Ok(true)
}

/// revise 操作 - 使 Domain(xi) 对 xj 弧一致
///
/// 仅保留在 Domain(xj) 中存在不同颜色的候选；对不等式约束而言，
/// 只有当 Domain(xj) 收缩为单元素集合时才会发生剪枝。
/// 返回是否移除了候选颜色。
fn revise(domains: &mut DomainStore, xi: &str, xj: &str) -> ColoringResult<bool> {
    let xj_colors = domains.get(xj)?.to_vec();
    let xi_colors = domains.get(xi)?;

    let kept: Vec<String> = xi_colors
        .iter()
        .filter(|color| xj_colors.iter().any(|other| other != *color))
        .cloned()
        .collect();

    if kept.len() < xi_colors.len() {
        domains.set(xi, kept)?;
        return Ok(true);
    }
    Ok(false)
}
