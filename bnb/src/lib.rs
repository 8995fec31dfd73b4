//! Branch-and-bound optimizer for the two-knapsack allocation problem modelled in [`twinsack`].

use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod opt;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
