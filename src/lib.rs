//! tornado-rs: layout and geometry engine for tornado charts.
//!
//! A tornado chart mirrors two measures around a shared vertical axis, one
//! horizontal bar per category and series. The crate converts tabular input
//! into typed data points, virtualizes large category sets behind a
//! scrollbar, and lays out columns, labels and the category gutter as
//! backend-agnostic draw commands.

pub mod api;
pub mod convert;
pub mod core;
pub mod error;
pub mod format;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod telemetry;

pub use api::{TornadoChart, TornadoChartConfig};
pub use error::{TornadoError, TornadoResult};
