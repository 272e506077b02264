use crate::{
    plot::Plot,
    sampler::{SAMPLE_DELAY, Sampler},
    surface::Surface,
};
use std::time::Duration;

/// How long to sleep on each iteration of the loop after sampling is complete.
pub const IDLE_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Still sampling. Each frame draws one more sample.
    Draw,
    /// Passed the end of the domain. Nothing new gets drawn.
    Done,
}

#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    pub sample_delay: Duration,
    pub idle_delay: Duration,
    /// Leave the loop as soon as sampling is complete rather than idling until the window is
    /// closed.
    pub exit_when_done: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            sample_delay: SAMPLE_DELAY,
            idle_delay: IDLE_DELAY,
            exit_when_done: false,
        }
    }
}

/// All the state of a run: the sampler, the points plotted so far and whether there is anything
/// left to draw.
pub struct Simulation {
    sampler: Sampler,
    plot: Plot,
    status: RunStatus,
    config: DriverConfig,
}

impl Simulation {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            sampler: Sampler::new(),
            plot: Plot::new(),
            status: RunStatus::Draw,
            config,
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn plot(&self) -> &Plot {
        &self.plot
    }

    /// Take the next sample and add its points to the plot, then hold for the sample delay
    /// before advancing. Once the sampler is exhausted this switches to `RunStatus::Done` and
    /// draws nothing.
    pub fn sample_and_plot<S: Surface>(&mut self, surface: &mut S) {
        match self.sampler.sample() {
            Some(sample) => {
                log::trace!("{:?}", sample);
                self.plot.add_sample(&sample);
                surface.delay(self.config.sample_delay);
                self.sampler.advance();
            }
            None => {
                if self.status == RunStatus::Draw {
                    log::info!(
                        "Sampling complete after {} samples (final integral: {})",
                        self.sampler.num_samples(),
                        self.sampler.integral(),
                    );
                }
                self.status = RunStatus::Done;
            }
        }
    }

    /// Run a single frame.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        match self.status {
            RunStatus::Draw => {
                self.sample_and_plot(surface);
                surface.present(&self.plot);
            }
            RunStatus::Done => surface.delay(self.config.idle_delay),
        }
    }

    /// Run frames until the window is closed (or until sampling is complete if configured to
    /// exit when done).
    pub fn run<S: Surface>(&mut self, surface: &mut S) {
        // Clear both buffers before anything is drawn.
        let empty = Plot::new();
        surface.present(&empty);
        surface.present(&empty);
        loop {
            let events = surface.poll_events();
            if events.close_requested {
                log::info!("Window close requested");
                break;
            }
            if self.status == RunStatus::Done {
                if self.config.exit_when_done {
                    break;
                }
                if events.exposed {
                    surface.present(&self.plot);
                }
            }
            self.tick(surface);
        }
    }
}
