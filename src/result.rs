use thiserror::Error;

/// Error that can happen when building a waveform spec from user input
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpecError {
    /// Waveform selection outside the menu range
    #[error("Invalid waveform choice: {0} (must be 1, 2 or 3)")]
    InvalidChoice(u32),
    /// Input that should have been a number wasn't one
    #[error("Malformed numeric input")]
    InvalidNumber,
    /// The triangle wave's period is the reciprocal of the frequency, so a
    /// frequency of zero would divide by zero. Negative and non-finite
    /// frequencies are rejected along with it.
    #[error("Frequency must be a positive number, got {0}")]
    NonPositiveFrequency(f64),
}

/// Result of attempting to build a [`WaveformSpec`](crate::WaveformSpec)
pub type SpecResult<T = ()> = Result<T, SpecError>;
