//! Pathfinder Core Library
//!
//! Shortest paths and minimum spanning trees over weighted map graphs.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod map;
