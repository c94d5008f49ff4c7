use crate::error::Error;
use crate::quantizer::Quantizer;
use crate::source::SampleSource;
use crate::tables::CHUNK_SIZE;
use log::{debug, info};
use std::fmt::Write as _;
use std::io::Write;

/// Names used in the generated C header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderStyle {
    pub array_name: String,
    pub include_guard: String,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        HeaderStyle {
            array_name: "wart".to_string(),
            include_guard: "_WART_H_".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    pub samples: usize,
    pub lines: usize,
}

pub struct Encoder<'q> {
    quantizer: &'q Quantizer,
    style: HeaderStyle,
}

impl<'q> Encoder<'q> {
    pub fn new(quantizer: &'q Quantizer) -> Self {
        Self::with_style(quantizer, HeaderStyle::default())
    }

    pub fn with_style(quantizer: &'q Quantizer, style: HeaderStyle) -> Self {
        Encoder { quantizer, style }
    }

    pub fn style(&self) -> &HeaderStyle {
        &self.style
    }

    /// Writes the whole header: preamble, one line per chunk of samples,
    /// postamble. The last line is shorter when the sample count is not a
    /// multiple of `CHUNK_SIZE`.
    pub fn encode<S, W>(&self, mut source: S, mut sink: W) -> Result<EncodeStats, Error>
    where
        S: SampleSource,
        W: Write,
    {
        let mut stats = EncodeStats::default();
        let mut chunk = [0u8; CHUNK_SIZE];

        self.write_preamble(&mut sink)?;
        loop {
            let n = source.read_samples(&mut chunk)?;
            if n == 0 {
                break;
            }
            writeln!(sink, "{}", self.format_line(&chunk[..n]))?;
            stats.samples += n;
            stats.lines += 1;
        }
        self.write_postamble(&mut sink)?;

        debug!("wrote {} data lines", stats.lines);
        info!("encoded {} samples", stats.samples);
        Ok(stats)
    }

    /// Formats one chunk as an indented run of `0xHH,` literals.
    pub fn format_line(&self, samples: &[u8]) -> String {
        let mut line = String::with_capacity(2 + samples.len() * 5);
        line.push_str("  ");
        for &sample in samples {
            // Writing to a String cannot fail.
            let _ = write!(line, "0x{:02x},", self.quantizer.lookup(sample));
        }
        line
    }

    fn write_preamble<W: Write>(&self, mut sink: W) -> Result<(), Error> {
        let guard = &self.style.include_guard;
        writeln!(sink, "#ifndef {}", guard)?;
        writeln!(sink, "#define {}", guard)?;
        writeln!(sink)?;
        writeln!(sink, "#include <stdint.h>")?;
        writeln!(sink)?;
        writeln!(sink, "const uint8_t {}[] = {{", self.style.array_name)?;
        Ok(())
    }

    fn write_postamble<W: Write>(&self, mut sink: W) -> Result<(), Error> {
        writeln!(sink, "}};")?;
        writeln!(sink, "#endif // #ifndef {}", self.style.include_guard)?;
        Ok(())
    }
}

/// Encodes `source` into `sink` with the default `wart` header names.
pub fn encode<S, W>(source: S, sink: W, quantizer: &Quantizer) -> Result<EncodeStats, Error>
where
    S: SampleSource,
    W: Write,
{
    Encoder::new(quantizer).encode(source, sink)
}
