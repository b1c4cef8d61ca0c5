use std::collections::HashMap;

use crate::error::{ColoringError, ColoringResult};

use super::builder::ConstraintGraph;

/// 域存储 - 每个顶点当前仍然合法的候选颜色集合
///
/// 候选集保持调色板顺序；AC-3 传播只会收缩集合，
/// 回溯时由搜索引擎通过 [`DomainStore::reset`] 恢复。
/// 变更是就地且立即生效的，调用方负责在回溯时恢复状态。
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: HashMap<String, Vec<String>>,
}

impl DomainStore {
    /// 为图中每个顶点初始化完整调色板
    pub fn new(graph: &ConstraintGraph, palette: &[String]) -> Self {
        let domains = graph
            .vertex_ids()
            .into_iter()
            .map(|id| (id, palette.to_vec()))
            .collect();
        Self { domains }
    }

    /// 读取顶点当前候选颜色
    pub fn get(&self, id: &str) -> ColoringResult<&[String]> {
        self.domains
            .get(id)
            .map(|colors| colors.as_slice())
            .ok_or_else(|| ColoringError::UnknownVertex(id.to_string()))
    }

    /// 覆写顶点候选颜色；顶点必须已存在
    pub fn set(&mut self, id: &str, colors: Vec<String>) -> ColoringResult<()> {
        let slot = self
            .domains
            .get_mut(id)
            .ok_or_else(|| ColoringError::UnknownVertex(id.to_string()))?;
        *slot = colors;
        Ok(())
    }

    /// 赋值后将域收缩为单元素集合
    pub fn collapse(&mut self, id: &str, color: &str) -> ColoringResult<()> {
        self.set(id, vec![color.to_string()])
    }

    /// 撤销赋值后恢复为完整调色板
    pub fn reset(&mut self, id: &str, palette: &[String]) -> ColoringResult<()> {
        self.set(id, palette.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<String> {
        vec!["red".to_string(), "green".to_string(), "blue".to_string()]
    }

    fn store() -> DomainStore {
        let graph = ConstraintGraph::from_edges([("a", "b")]).unwrap();
        DomainStore::new(&graph, &palette())
    }

    #[test]
    fn test_initialized_to_full_palette() {
        let store = store();
        assert_eq!(store.get("a").unwrap(), palette().as_slice());
        assert_eq!(store.get("b").unwrap(), palette().as_slice());
    }

    #[test]
    fn test_collapse_and_reset() {
        let mut store = store();
        store.collapse("a", "green").unwrap();
        assert_eq!(store.get("a").unwrap(), ["green".to_string()].as_slice());

        store.reset("a", &palette()).unwrap();
        assert_eq!(store.get("a").unwrap(), palette().as_slice());
    }

    #[test]
    fn test_unknown_vertex() {
        let mut store = store();
        assert_eq!(
            store.get("zz").unwrap_err(),
            ColoringError::UnknownVertex("zz".to_string())
        );
        assert_eq!(
            store.set("zz", vec![]).unwrap_err(),
            ColoringError::UnknownVertex("zz".to_string())
        );
    }
}
