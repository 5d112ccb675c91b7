//! Routing module
//!
//! Static route table mapping exact or prefix path patterns to one handler
//! each. The table is built once from the catalog and never changes.

mod matcher;

pub use matcher::{RouteKind, RouteTable};
