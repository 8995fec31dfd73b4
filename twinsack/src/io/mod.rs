mod export;
mod import;

/// External (serializable) representations of all entities.
pub mod ext_repr;

/// Exports the outcome of a solve out of the library.
pub use export::export;

/// Imports an instance into the library.
pub use import::import;
