// Domain layer: board model, phrase catalog and ports (interfaces).
// No external dependencies beyond std/serde.

pub mod catalog;
pub mod model;
pub mod ports;
