//! Strawberry Fields greenhouse covering solver.
//!
//! Given a rectangular grid of strawberries and a cardinality bound `K`,
//! approximates a minimum-cost set of at most `K` pairwise-disjoint
//! axis-aligned rectangles ("greenhouses") covering every strawberry.
//! Not a proved optimum: this is a three-phase approximation pipeline
//! (chain-pruned candidate generation, greedy disjoint cover, local
//! search over pairwise joins) chosen to run in well under a second on
//! grids up to 50x50.

#![warn(missing_debug_implementations)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]

/// rectangle handles and the per-run bump allocator
pub mod arena;
/// per-run grid + arena bundle, threaded through the pipeline explicitly
pub mod context;
/// CLI-facing typed errors
pub mod error;
/// phase 1: chain-pruned candidate rectangle generation
pub mod generator;
/// grid state and the strawberry weight query
pub mod grid;
/// text format input/output
pub mod io;
/// A..Z,a..z,0 cover labeling
pub mod label;
/// phase 2: greedy disjoint cover
pub mod matcher;
/// the Rectangle record and its lazily-materialized span
pub mod rect;
/// phase 3: the local-search driver
pub mod search;
/// join construction and the Shade value object
pub mod shade;
/// the join/rectangle intersection classifier
pub mod slice;
/// orchestrates the full pipeline for one puzzle
pub mod solver;
