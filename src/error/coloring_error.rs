//! Solver-level error types.

use thiserror::Error;

/// Solver-level errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColoringError {
    #[error("No valid coloring exists for the graph")]
    Infeasible,
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),
    #[error("Empty palette")]
    EmptyPalette,
    #[error("Duplicate color in palette: {0}")]
    DuplicateColor(String),
    #[error("Self-loop edge on vertex: {0}")]
    SelfLoop(String),
}

impl ColoringError {
    /// 是否为求解边界校验错误（非搜索结果）
    pub fn is_boundary_error(&self) -> bool {
        !matches!(self, ColoringError::Infeasible)
    }
}
