pub mod mapper;
pub mod table;

pub use mapper::{gate_and_line, gate_bounds, line_within, GateLine};
pub use table::{gate_range, gate_ranges, GateRange, GATE_COUNT, LINES_PER_GATE};
