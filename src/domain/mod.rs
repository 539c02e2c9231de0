// Domain layer: keyword models and the port to the ads API.

pub mod model;
pub mod ports;
