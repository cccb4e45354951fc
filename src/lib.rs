//! Cappella: incremental music library search with a keyboard-driven
//! selection model and a terminal front end.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod view;
