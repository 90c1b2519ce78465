//! Greedy nesting of 2D parts onto a rectangular sheet.
//!
//! The crate is organised bottom-up: a small geometry kernel, the entities that describe a nesting
//! problem, an [`OccupancyLedger`](ledger::OccupancyLedger) of what has been committed so far,
//! pluggable [`PlacementSearch`](search::PlacementSearch) strategies and the
//! [`NestingEngine`](engine::NestingEngine) that ties them together.

/// Geometric primitives and base algorithms
pub mod geometry;

/// Entities to model a sheet nesting problem
pub mod entities;

/// Deterministic ordering of parts before placement
pub mod sorting;

/// Strategies that look for a legal position of a single part
pub mod search;

/// Record of committed geometry and remaining free space
pub mod ledger;

/// Orchestration of sorting, search and commits
pub mod engine;

/// Utilization and waste of a finished layout
pub mod metrics;

/// Error taxonomy of the engine
pub mod error;

/// Importing problem instances and exporting solutions
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
