//! Toolbridge — interoperability helpers for agent tool runtimes.
//!
//! Adapts tools published by one agent framework into the shape a second
//! framework consumes, plus the small supporting glue: environment and
//! credential loading, console logging setup, and presentation presets.

pub mod adapter;
pub mod env;
pub mod logging;
pub mod schema;
pub mod theme;
pub mod types;
