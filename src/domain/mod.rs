// Domain layer: the earthquake record and the ports the core depends on.

pub mod model;
pub mod ports;
