//! Audio sources that feed 8-bit unsigned mono samples to the encoder.

use crate::error::{Error, WartError};
use byteorder::ReadBytesExt;
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// A finite stream of 8-bit unsigned samples, read once in order.
pub trait SampleSource {
    /// Fills `buf` with up to `buf.len()` samples and returns how many were
    /// read. Zero means the stream is exhausted.
    fn read_samples(&mut self, buf: &mut [u8]) -> Result<usize, Error>;
}

impl<'a> SampleSource for &'a [u8] {
    fn read_samples(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let data: &'a [u8] = *self;
        let n = buf.len().min(data.len());
        let (head, tail) = data.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

impl<S: SampleSource + ?Sized> SampleSource for &mut S {
    fn read_samples(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        (**self).read_samples(buf)
    }
}

/// Samples decoded from a RIFF/WAVE container.
pub struct WavSource<R: Read> {
    samples: hound::WavIntoSamples<R, i8>,
    spec: hound::WavSpec,
}

impl WavSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let reader = hound::WavReader::open(path)?;
        Self::from_reader(reader)
    }
}

impl<R: Read> WavSource<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        Self::from_reader(hound::WavReader::new(reader)?)
    }

    fn from_reader(reader: hound::WavReader<R>) -> Result<Self, Error> {
        let spec = reader.spec();
        if spec.channels != 1
            || spec.bits_per_sample != 8
            || spec.sample_format != hound::SampleFormat::Int
        {
            return Err(Error::WartError(WartError::UnsupportedFormat {
                channels: spec.channels,
                bits_per_sample: spec.bits_per_sample,
                sample_format: spec.sample_format.into(),
            }));
        }

        info!(
            "WAV input: {} samples at {} Hz, play back at {} baud",
            reader.len(),
            spec.sample_rate,
            uart_baud_rate(spec.sample_rate)
        );
        if reader.len() == 0 {
            warn!("WAV input contains no samples");
        }

        Ok(WavSource {
            samples: reader.into_samples(),
            spec,
        })
    }

    pub fn spec(&self) -> hound::WavSpec {
        self.spec
    }
}

impl<R: Read> SampleSource for WavSource<R> {
    fn read_samples(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let mut n = 0;
        while n < buf.len() {
            match self.samples.next() {
                // hound recenters unsigned 8-bit PCM around zero.
                Some(sample) => buf[n] = (sample? as u8) ^ 0x80,
                None => break,
            }
            n += 1;
        }
        Ok(n)
    }
}

/// Headerless 8-bit unsigned PCM.
pub struct RawSource<R: Read> {
    reader: R,
}

impl RawSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Ok(RawSource::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: Read> RawSource<R> {
    pub fn new(reader: R) -> Self {
        RawSource { reader }
    }
}

impl<R: Read> SampleSource for RawSource<R> {
    fn read_samples(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let mut n = 0;
        while n < buf.len() {
            match self.reader.read_u8() {
                Ok(sample) => buf[n] = sample,
                Err(ref e) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
            n += 1;
        }
        Ok(n)
    }
}

/// UART speed needed to play the output: ten bits per sample.
pub fn uart_baud_rate(sample_rate: u32) -> u64 {
    u64::from(sample_rate) * 10
}
