use crate::encoder::HeaderStyle;
use crate::error::{Error, WartError};
use std::path::PathBuf;

pub const DEFAULT_INFILE: &str = "wart.wav";
pub const DEFAULT_NAME: &str = "wart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// 8-bit unsigned mono RIFF/WAVE.
    Wav,
    /// Headerless 8-bit unsigned PCM.
    Raw,
}

/// Options for one file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub infile: PathBuf,
    pub outfile: Option<PathBuf>,
    pub name: String,
    pub input: InputKind,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            infile: PathBuf::from(DEFAULT_INFILE),
            outfile: None,
            name: DEFAULT_NAME.to_string(),
            input: InputKind::Wav,
        }
    }
}

impl Options {
    /// The explicit output path, or the input path with a `.h` extension.
    pub fn output_path(&self) -> PathBuf {
        match self.outfile {
            Some(ref path) => path.clone(),
            None => self.infile.with_extension("h"),
        }
    }

    pub fn header_style(&self) -> Result<HeaderStyle, Error> {
        if !is_c_identifier(&self.name) {
            return Err(Error::WartError(WartError::InvalidName(self.name.clone())));
        }
        Ok(HeaderStyle {
            array_name: self.name.clone(),
            include_guard: format!("_{}_H_", self.name.to_ascii_uppercase()),
        })
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
