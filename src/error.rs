use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    WavError(#[from] hound::Error),

    #[error(transparent)]
    WartError(#[from] WartError),
}

#[derive(Debug, thiserror::Error)]
pub enum WartError {
    /// Only 8-bit unsigned mono PCM can be quantized.
    #[error(
        "unsupported WAV format: {channels} channel(s), {bits_per_sample} bits, {sample_format} \
         (expected 1 channel, 8 bits, integer)"
    )]
    UnsupportedFormat {
        channels: u16,
        bits_per_sample: u16,
        sample_format: SampleFormat,
    },

    #[error("invalid array name {0:?}: must be a C identifier")]
    InvalidName(String),
}

/// Displayable mirror of `hound::SampleFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Int,
    Float,
}

impl From<hound::SampleFormat> for SampleFormat {
    fn from(format: hound::SampleFormat) -> Self {
        match format {
            hound::SampleFormat::Int => SampleFormat::Int,
            hound::SampleFormat::Float => SampleFormat::Float,
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleFormat::Int => f.write_str("integer"),
            SampleFormat::Float => f.write_str("float"),
        }
    }
}
