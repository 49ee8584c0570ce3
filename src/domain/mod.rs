// Domain layer: plain records and the output port. No I/O here.

pub mod model;
pub mod ports;
