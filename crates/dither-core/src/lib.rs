pub mod bayer;
pub mod clock;
pub mod config;
pub mod constants;
pub mod field;
pub mod grid;
pub mod paint;
pub mod pointer;
pub mod quantize;

pub use clock::{FrameState, Phase};
pub use config::{ConfigError, RenderConfig};
pub use grid::SampleGrid;
