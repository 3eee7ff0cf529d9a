// Domain layer: value types and ports. Nothing here touches the network or the filesystem.

pub mod model;
pub mod ports;
