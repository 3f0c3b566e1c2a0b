//! Output serialization and terminal display

pub mod display;
pub mod writer;

pub use display::print_build_summary;
pub use writer::write_graph;
