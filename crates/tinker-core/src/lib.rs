//! Navigation layer for the Tinker Space Command dashboard.
//!
//! - **[`ViewId`]** — the views a path can select.
//! - **[`RouteTable`]** — immutable, ordered `pattern → view` table.
//!   [`resolve()`](RouteTable::resolve) turns a navigation path into a
//!   [`RouteMatch`] (view + parameters) or [`RouteError::NotFound`];
//!   [`path_for()`](RouteTable::path_for) goes the other way.
//!
//! Resolution is pure and synchronous. The table is built once at startup
//! and handed to whatever drives navigation.

pub mod error;
pub mod route;
pub mod view;

pub use error::RouteError;
pub use route::{Route, RouteMatch, RouteParams, RouteTable};
pub use view::ViewId;
