pub mod accumulator;
pub mod projection;

pub use accumulator::Accumulator;
pub use projection::project;
