mod component;
mod render;
mod state;

pub use component::GraphCanvas;
pub use state::{RANGE_MAX, RANGE_MIN, RANGE_STEP};
