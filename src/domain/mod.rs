// Domain layer: the portfolio document, the contact form and the ports the core talks through.

pub mod fallback;
pub mod model;
pub mod ports;
