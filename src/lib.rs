//! # XColor — A CSP Graph Vertex-Coloring Engine
//!
//! `xcolor` solves graph vertex-coloring as a constraint-satisfaction
//! problem: assign every vertex of an undirected graph a color from a fixed
//! palette so that no two adjacent vertices share a color, or report that no
//! such assignment exists. The engine combines:
//!
//! - **Backtracking search**: depth-first exploration of partial assignments
//!   with exact undo on failure, driven by a most-constraining-variable
//!   (highest static degree) heuristic and palette-order value selection.
//! - **AC-3 propagation**: worklist-based arc-consistency enforcement over
//!   per-vertex candidate-color domains before every decision point, with
//!   early infeasibility detection on domain wipe-out.
//! - **Event notifications**: every assign/unassign is emitted in operation
//!   order on an event channel, so a rendering or visualization collaborator
//!   can follow the search without the core carrying any rendering
//!   dependency.
//!
//! Infeasibility is a normal, typed outcome
//! ([`ColoringError::Infeasible`](error::ColoringError::Infeasible)), never
//! a panic; malformed inputs (unknown vertices, an empty or duplicated
//! palette) fail fast at the API boundary.
//!
//! # Quick Start
//!
//! ```rust
//! use xcolor::graph::ConstraintGraph;
//! use xcolor::solver::solve;
//!
//! let graph = ConstraintGraph::from_edges([("a", "b"), ("b", "c"), ("a", "c")]).unwrap();
//! let palette = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
//!
//! let assignment = solve(&graph, &palette).unwrap();
//! assert_eq!(assignment.len(), 3);
//! assert_ne!(assignment.color_of("a"), assignment.color_of("b"));
//! ```

pub mod core;
pub mod error;
pub mod graph;
pub mod solver;

pub use crate::core::{create_event_channel, EventReceiver, EventSender, SolveEvent};
pub use crate::error::{ColoringError, ColoringResult};
pub use crate::graph::{ConstraintGraph, DomainStore};
pub use crate::solver::{solve, solve_with_events, Assignment, SearchEngine};
