use petgraph::stable_graph::NodeIndex;

/// 图顶点
#[derive(Debug, Clone)]
pub struct VertexNode {
    /// 顶点 ID（构图后不可变）
    pub id: String,
}

/// 约束边（"相邻顶点颜色必须不同" 的二元约束）
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintEdge {
    /// 边的一端
    pub u: String,

    /// 边的另一端
    pub v: String,
}

/// 顶点 ID 到 petgraph NodeIndex 的映射
pub type NodeIndexMap = std::collections::HashMap<String, NodeIndex>;
