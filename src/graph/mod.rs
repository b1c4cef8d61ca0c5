//! Graph construction and representation.
//!
//! The [`ConstraintGraph`] is the immutable constraint network — vertices
//! plus undirected "must differ" edges — queried by the
//! [`SearchEngine`](crate::solver::SearchEngine). The [`DomainStore`] holds
//! the mutable per-vertex candidate-color sets the solver prunes and
//! restores during search.

pub mod builder;
pub mod domains;
pub mod types;

pub use builder::*;
pub use domains::*;
pub use types::*;
