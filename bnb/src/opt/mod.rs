pub mod bound;
pub mod incumbent;
pub mod optimizer;
pub mod parallel;
pub mod search;
pub mod stats;

#[doc(inline)]
pub use optimizer::BnBOptimizer;
