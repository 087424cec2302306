// Domain layer: remote API models and the invocation port shared by every resource wrapper.

pub mod model;
pub mod ports;
