#![doc = include_str!("../README.md")]
// The error enums document the individual failure cases.
#![allow(clippy::missing_errors_doc)]

mod csv;
mod result;
mod sampling;
mod waveform;

pub use {
    csv::{CSV_HEADER, save_csv, write_csv},
    result::{SpecError, SpecResult},
    sampling::{DURATION_SECS, SAMPLE_COUNT, SAMPLE_RATE, Sample, SampleT, render, sample_time},
    waveform::{WaveKind, WaveformSpec, parse_param},
};

#[cfg(feature = "testing")]
pub use csv::parse_csv;
