//! Samples a four-harmonic square wave along with its numerical derivative and running integral,
//! and plots all three as coloured point sets. This crate knows nothing about windows. Drawing,
//! presenting and event handling go through the `Surface` trait, which the `calc_plot_sdl2` crate
//! implements on top of an SDL window.

mod driver;
mod plot;
mod sampler;
mod series;
mod surface;

pub use driver::{DriverConfig, IDLE_DELAY, RunStatus, Simulation};
pub use plot::{Plot, PlotPoint};
pub use rgb_int::Rgb24;
pub use sampler::{
    DOMAIN, SAMPLE_DELAY, STEP, Sample, Sampler, VERTICAL_SCALE, screen_x,
    screen_y, square_wave,
};
pub use series::Series;
pub use surface::{Surface, SurfaceEvents};
