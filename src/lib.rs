//! Convert 8-bit unsigned mono audio into a C array of PWM symbols.
//!
//! Each sample becomes one byte that, sent through a UART and a low-pass
//! filter, reproduces the sample's amplitude as a duty cycle between 0.1
//! and 0.9. The UART must run at ten times the audio sample rate.
//!
//! The conversion is lossy: 256 sample values collapse onto 9 levels.

pub mod config;
pub mod encoder;
pub mod error;
pub mod quantizer;
pub mod source;
pub mod tables;

pub use config::{InputKind, Options};
pub use encoder::{encode, EncodeStats, Encoder, HeaderStyle};
pub use error::{Error, WartError};
pub use quantizer::Quantizer;
pub use source::{RawSource, SampleSource, WavSource};

use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Converts `options.infile` and writes the header to `options.output_path()`.
pub fn convert_file(options: &Options) -> Result<EncodeStats, Error> {
    let style = options.header_style()?;
    let quantizer = Quantizer::new();
    let encoder = Encoder::with_style(&quantizer, style);

    let outpath = options.output_path();
    info!(
        "converting {} -> {}",
        options.infile.display(),
        outpath.display()
    );

    // Open the input before creating the output.
    let stats = match options.input {
        InputKind::Wav => {
            let source = WavSource::open(&options.infile)?;
            write_header(&encoder, source, File::create(&outpath)?)?
        }
        InputKind::Raw => {
            let source = RawSource::open(&options.infile)?;
            write_header(&encoder, source, File::create(&outpath)?)?
        }
    };
    Ok(stats)
}

fn write_header<S: SampleSource>(
    encoder: &Encoder<'_>,
    source: S,
    file: File,
) -> Result<EncodeStats, Error> {
    let mut sink = BufWriter::new(file);
    let stats = encoder.encode(source, &mut sink)?;
    sink.flush()?;
    Ok(stats)
}
