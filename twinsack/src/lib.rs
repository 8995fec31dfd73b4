//! Problem library for the two-knapsack allocation problem: partition a catalog of items
//! between two disjoint, capacity-constrained bags so that the selected items meet a combined
//! calorie requirement at minimum total cost.

/// Entities to model the two-knapsack allocation problem
pub mod entities;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
