//! The fixed sampling grid and the render loop
use crate::waveform::WaveformSpec;

/// Index of a sample within the sampled stretch of signal.
pub type SampleT = u32;

/// How many samples are evaluated per second of signal.
pub const SAMPLE_RATE: SampleT = 1000;
/// How long the sampled stretch of signal is, in seconds.
pub const DURATION_SECS: f64 = 1.0;
/// Total number of samples in a render.
///
/// Both endpoints of the `[0, DURATION_SECS]` interval are included, hence
/// one more than the sample rate.
pub const SAMPLE_COUNT: usize = SAMPLE_RATE as usize + 1;

/// A single sampled point of a waveform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Time offset from the start of the signal, in seconds
    pub time: f64,
    /// Amplitude of the waveform at `time`
    pub value: f64,
}

/// Converts a sample index into its time offset on the grid.
#[must_use]
pub fn sample_time(index: SampleT) -> f64 {
    f64::from(index) / f64::from(SAMPLE_RATE)
}

/// Samples `spec` over the whole duration.
///
/// The output has exactly [`SAMPLE_COUNT`] entries in strictly increasing
/// time order, from `0.0` up to and including [`DURATION_SECS`].
#[must_use]
pub fn render(spec: &WaveformSpec) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(SAMPLE_COUNT);
    for i in 0..=SAMPLE_RATE {
        let time = sample_time(i);
        samples.push(Sample {
            time,
            value: spec.value_at(time),
        });
    }
    samples
}

#[cfg(test)]
use crate::waveform::{WaveKind, assert_close};

#[test]
fn test_grid_shape() {
    let spec = WaveformSpec::new(WaveKind::Sine, 5.0, 2.0, 0.0).unwrap();
    let samples = render(&spec);
    assert_eq!(samples.len(), SAMPLE_COUNT);
    assert_close(samples[0].time, 0.0);
    assert_close(samples[SAMPLE_COUNT - 1].time, DURATION_SECS);
    for (i, sample) in samples.iter().enumerate() {
        assert_close(sample.time, f64::from(u32::try_from(i).unwrap()) / 1000.0);
    }
    assert!(samples.windows(2).all(|pair| pair[0].time < pair[1].time));
}

#[test]
fn test_render_values_match_generator() {
    let spec = WaveformSpec::new(WaveKind::Square, 3.0, 0.5, 1.0).unwrap();
    let samples = render(&spec);
    for sample in &samples {
        assert_close(sample.value, spec.value_at(sample.time));
    }
    // Worked example: 2·sin(2π·5·0.05) = 2·sin(π/2) = 2 at sample 50
    let sine = WaveformSpec::new(WaveKind::Sine, 5.0, 2.0, 0.0).unwrap();
    assert_close(render(&sine)[50].value, 2.0);
}
