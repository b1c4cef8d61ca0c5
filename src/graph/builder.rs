use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::error::{ColoringError, ColoringResult};

use super::types::*;

/// 约束图 - 不可变的无向图结构，构图完成后供求解器查询
#[derive(Debug, Default)]
pub struct ConstraintGraph {
    /// 图结构
    pub graph: StableUnGraph<VertexNode, ConstraintEdge>,

    /// 顶点 ID 到 NodeIndex 的映射
    pub node_index_map: NodeIndexMap,
}

impl ConstraintGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从边列表构建约束图（端点顶点自动加入）
    pub fn from_edges<I, S>(edges: I) -> ColoringResult<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// 添加顶点；顶点已存在时返回现有索引
    pub fn add_vertex(&mut self, id: impl Into<String>) -> NodeIndex {
        let id = id.into();
        if let Some(idx) = self.node_index_map.get(&id) {
            return *idx;
        }
        let idx = self.graph.add_node(VertexNode { id: id.clone() });
        self.node_index_map.insert(id, idx);
        idx
    }

    /// 添加约束边；未出现过的端点顶点自动加入，重复边合并
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>) -> ColoringResult<()> {
        let u = u.into();
        let v = v.into();
        if u == v {
            return Err(ColoringError::SelfLoop(u));
        }

        let u_idx = self.add_vertex(u.clone());
        let v_idx = self.add_vertex(v.clone());

        if self.graph.find_edge(u_idx, v_idx).is_none() {
            self.graph.add_edge(u_idx, v_idx, ConstraintEdge { u, v });
        }
        Ok(())
    }

    /// 根据顶点 ID 查找索引
    fn index_of(&self, id: &str) -> ColoringResult<NodeIndex> {
        self.node_index_map
            .get(id)
            .copied()
            .ok_or_else(|| ColoringError::UnknownVertex(id.to_string()))
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.node_index_map.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// 所有顶点 ID，按插入顺序
    pub fn vertex_ids(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx).map(|n| n.id.clone()))
            .collect()
    }

    /// 获取顶点的所有邻居 ID
    pub fn neighbors(&self, id: &str) -> ColoringResult<Vec<String>> {
        let idx = self.index_of(id)?;

        let neighbors: Vec<String> = self
            .graph
            .neighbors(idx)
            .filter_map(|n| self.graph.node_weight(n).map(|node| node.id.clone()))
            .collect();

        Ok(neighbors)
    }

    /// 顶点在原始图中的静态度数
    pub fn degree(&self, id: &str) -> ColoringResult<usize> {
        let idx = self.index_of(id)?;
        Ok(self.graph.neighbors(idx).count())
    }

    /// 所有有向弧：每条无向边产生 (u, v) 与 (v, u) 两个方向，
    /// 先列出全部正向弧再列出全部反向弧
    pub fn arcs(&self) -> Vec<(String, String)> {
        let forward: Vec<(String, String)> = self
            .graph
            .edge_references()
            .map(|e| (e.weight().u.clone(), e.weight().v.clone()))
            .collect();

        let mut arcs = forward.clone();
        arcs.extend(forward.into_iter().map(|(u, v)| (v, u)));
        arcs
    }
}
