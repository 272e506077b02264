use crate::{
    sampler::{Sample, screen_x, screen_y},
    series::Series,
};

/// A point in normalized screen coordinates, where both axes run from -1 to 1 and positive y is
/// up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f32,
    pub y: f32,
}

/// Every point emitted so far, one list per series, in the order they were emitted. Presenting a
/// frame redraws all of these since the back buffer isn't preserved between presents.
#[derive(Debug, Clone, Default)]
pub struct Plot {
    series: [Vec<PlotPoint>; 3],
}

impl Plot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one point per series for the given sample.
    pub fn add_sample(&mut self, sample: &Sample) {
        let x = screen_x(sample.x);
        for series in Series::ALL {
            self.series[series.index()].push(PlotPoint {
                x,
                y: screen_y(sample.value(series)),
            });
        }
    }

    pub fn points(&self, series: Series) -> &[PlotPoint] {
        &self.series[series.index()]
    }

    /// Iterate over each series along with its points.
    pub fn iter(&self) -> impl Iterator<Item = (Series, &[PlotPoint])> {
        Series::ALL
            .into_iter()
            .map(|series| (series, self.points(series)))
    }

    /// The number of samples added. Each contributes one point to every series.
    pub fn num_samples(&self) -> usize {
        self.series[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_samples() == 0
    }
}
