// Domain layer: shared models and ports. Pattern implementations live in core.

pub mod model;
pub mod ports;
