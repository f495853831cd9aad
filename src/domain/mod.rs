// Domain layer: resource descriptors, outcomes and ports (interfaces).
// No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
