use crate::series::Series;
use std::time::Duration;

/// Samples are taken for `x` in `[0, DOMAIN]`. This is roughly 4 pi, ie. two full cycles of the
/// fundamental.
pub const DOMAIN: f32 = 12.56;

/// Distance between consecutive samples. Also the `dx` used for the derivative and integral.
pub const STEP: f32 = 0.01;

/// How long to hold each drawn sample so the curves build up at a visible rate.
pub const SAMPLE_DELAY: Duration = Duration::from_micros(400);

/// All three series are scaled by this before plotting.
pub const VERTICAL_SCALE: f32 = 0.25;

/// Sum of the first four odd harmonics of a square wave, with amplitudes 1, 1/3, 1/5 and 1/7.
pub fn square_wave(x: f32) -> f32 {
    x.sin()
        + (3.0 * x).sin() / 3.0
        + (5.0 * x).sin() / 5.0
        + (7.0 * x).sin() / 7.0
}

/// Map `x` from `[0, DOMAIN]` to the horizontal screen range `[-1, 1]`.
pub fn screen_x(x: f32) -> f32 {
    (2.0 * x / DOMAIN) - 1.0
}

pub fn screen_y(value: f32) -> f32 {
    VERTICAL_SCALE * value
}

/// The values computed at a single point in the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub derivative: f32,
    pub integral: f32,
}

impl Sample {
    pub fn value(&self, series: Series) -> f32 {
        match series {
            Series::Function => self.y,
            Series::Derivative => self.derivative,
            Series::Integral => self.integral,
        }
    }
}

/// Walks the domain one step at a time, keeping enough state to estimate the derivative (the
/// previous function value) and the integral (a left Riemann sum).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sampler {
    x: f32,
    y: f32,
    prev_y: f32,
    derivative: f32,
    integral: f32,
    num_samples: usize,
}

impl Sampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_exhausted(&self) -> bool {
        self.x > DOMAIN
    }

    /// Compute the sample at the current `x`, updating the derivative and integral. Returns
    /// `None` without touching any state once `x` has passed the end of the domain. This does not
    /// move `x`; call `advance` for that.
    pub fn sample(&mut self) -> Option<Sample> {
        if self.is_exhausted() {
            return None;
        }
        self.y = square_wave(self.x);
        self.derivative = (self.y - self.prev_y) / STEP;
        self.integral += self.y * STEP;
        self.prev_y = self.y;
        self.num_samples += 1;
        Some(Sample {
            x: self.x,
            y: self.y,
            derivative: self.derivative,
            integral: self.integral,
        })
    }

    pub fn advance(&mut self) {
        self.x += STEP;
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn integral(&self) -> f32 {
        self.integral
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() <= epsilon
    }

    fn run_to_completion(sampler: &mut Sampler) -> Vec<Sample> {
        let mut samples = Vec::new();
        while let Some(sample) = sampler.sample() {
            samples.push(sample);
            sampler.advance();
        }
        samples
    }

    #[test]
    fn square_wave_known_values() {
        assert_eq!(square_wave(0.0), 0.0);
        let quarter = std::f32::consts::FRAC_PI_2;
        let expected = 1.0 - (1.0 / 3.0) + (1.0 / 5.0) - (1.0 / 7.0);
        assert!(close(square_wave(quarter), expected, 1e-5));
        assert!(close(square_wave(-quarter), -expected, 1e-5));
    }

    #[test]
    fn first_sample_is_all_zero() {
        let mut sampler = Sampler::new();
        let sample = sampler.sample().unwrap();
        assert_eq!(
            sample,
            Sample {
                x: 0.0,
                y: 0.0,
                derivative: 0.0,
                integral: 0.0,
            }
        );
    }

    #[test]
    fn function_matches_harmonic_sum_over_domain() {
        let mut sampler = Sampler::new();
        for sample in run_to_completion(&mut sampler) {
            let x = sample.x;
            let expected = x.sin()
                + (3.0 * x).sin() / 3.0
                + (5.0 * x).sin() / 5.0
                + (7.0 * x).sin() / 7.0;
            assert_eq!(sample.y, expected);
        }
    }

    #[test]
    fn deterministic() {
        let a = run_to_completion(&mut Sampler::new());
        let b = run_to_completion(&mut Sampler::new());
        assert_eq!(a, b);
    }

    #[test]
    fn x_advances_by_step_until_past_domain() {
        let mut sampler = Sampler::new();
        let samples = run_to_completion(&mut sampler);
        let mut expected_x = 0.0f32;
        for sample in &samples {
            assert_eq!(sample.x, expected_x);
            assert!(sample.x <= DOMAIN);
            expected_x += STEP;
        }
        assert!(sampler.x() > DOMAIN);
        // 0.00, 0.01, ..., 12.56 give 1257 samples. Rounding while accumulating `x` can drop the
        // last one.
        assert!(samples.len() == 1256 || samples.len() == 1257);
        assert_eq!(sampler.num_samples(), samples.len());
    }

    #[test]
    fn derivative_is_forward_difference() {
        let mut sampler = Sampler::new();
        let samples = run_to_completion(&mut sampler);
        for pair in samples.windows(2) {
            let expected = (pair[1].y - pair[0].y) / STEP;
            assert_eq!(pair[1].derivative, expected);
        }
        // The square wave is increasing steeply at 0, so after one step the derivative is
        // positive and close to 4 (the sum of the harmonic slopes, 1 + 1 + 1 + 1).
        assert!(close(samples[1].derivative, 4.0, 0.05));
    }

    #[test]
    fn integral_is_left_riemann_sum() {
        let mut sampler = Sampler::new();
        let samples = run_to_completion(&mut sampler);
        let mut sum = 0.0f64;
        for sample in &samples {
            sum += sample.y as f64 * STEP as f64;
            assert!(close(sample.integral, sum as f32, 1e-3));
        }
        // Two whole cycles of an odd periodic function integrate to roughly zero.
        assert!(close(sampler.integral(), 0.0, 0.02));
    }

    #[test]
    fn exhausted_sampler_is_idempotent() {
        let mut sampler = Sampler::new();
        run_to_completion(&mut sampler);
        let before = sampler.clone();
        for _ in 0..10 {
            assert_eq!(sampler.sample(), None);
        }
        assert_eq!(sampler, before);
    }

    #[test]
    fn horizontal_mapping_spans_screen() {
        assert_eq!(screen_x(0.0), -1.0);
        assert_eq!(screen_x(DOMAIN), 1.0);
        assert_eq!(screen_x(DOMAIN / 2.0), 0.0);
    }

    #[test]
    fn vertical_mapping_is_quarter_scale() {
        assert_eq!(screen_y(1.0), 0.25);
        assert_eq!(screen_y(-2.0), -0.5);
    }
}
