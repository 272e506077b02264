use crate::plot::Plot;
use std::{thread, time::Duration};

/// What happened to the window since the previous poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceEvents {
    pub close_requested: bool,
    /// The window contents were lost (e.g. it was uncovered) and should be repainted.
    pub exposed: bool,
}

/// The window and rendering context that the plot is drawn into.
pub trait Surface {
    /// Clear the back buffer, draw every point in `plot`, and swap buffers.
    fn present(&mut self, plot: &Plot);

    /// Drain pending window events without blocking.
    fn poll_events(&mut self) -> SurfaceEvents;

    /// Block the calling thread.
    fn delay(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
