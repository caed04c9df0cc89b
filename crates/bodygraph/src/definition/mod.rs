pub mod centers;
pub mod channels;
pub mod engine;

pub use centers::{home_center, Center};
pub use channels::{canonical_channels, channel_centers, Channel, CHANNEL_COUNT};
pub use engine::{build_center_graph, compute_definition, has_motor_to_throat, Definition};
