// Domain layer: survey models and ports (interfaces). No knowledge of HTTP,
// CLI or output targets.

pub mod model;
pub mod ports;
