//! End-to-end conversion of files on disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wart::{convert_file, Error, InputKind, Options, WartError};

fn write_wav(path: &Path, spec: hound::WavSpec, samples: &[i8]) {
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

fn mono8(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 8,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Signed form of an unsigned 8-bit sample, as hound writes it.
fn signed(sample: u8) -> i8 {
    (sample ^ 0x80) as i8
}

#[test]
fn converts_wav_to_default_header_path() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("beep.wav");
    let samples: Vec<i8> = [0u8, 128, 255].iter().map(|&s| signed(s)).collect();
    write_wav(&infile, mono8(11520), &samples);

    let options = Options {
        infile: infile.clone(),
        ..Options::default()
    };
    let stats = convert_file(&options).unwrap();
    assert_eq!(stats.samples, 3);
    assert_eq!(stats.lines, 1);

    let header = fs::read_to_string(dir.path().join("beep.h")).unwrap();
    assert_eq!(
        header,
        "#ifndef _WART_H_\n\
         #define _WART_H_\n\
         \n\
         #include <stdint.h>\n\
         \n\
         const uint8_t wart[] = {\n  \
         0x00,0xf0,0xff,\n\
         };\n\
         #endif // #ifndef _WART_H_\n"
    );
}

#[test]
fn full_ramp_chunks_into_lines_of_32() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("ramp.wav");
    let outfile = dir.path().join("out.h");
    let samples: Vec<i8> = (0..=255u8).chain(0..10u8).map(signed).collect();
    write_wav(&infile, mono8(8000), &samples);

    let options = Options {
        infile,
        outfile: Some(outfile.clone()),
        name: "ramp".to_string(),
        input: InputKind::Wav,
    };
    let stats = convert_file(&options).unwrap();
    assert_eq!(stats.samples, 266);
    assert_eq!(stats.lines, 9);

    let header = fs::read_to_string(&outfile).unwrap();
    assert!(header.starts_with("#ifndef _RAMP_H_\n"));
    let lines: Vec<&str> = header.lines().filter(|l| l.starts_with("  ")).collect();
    assert_eq!(lines.len(), 9);
    for line in &lines[..8] {
        assert_eq!(line.matches(',').count(), 32);
    }
    assert_eq!(lines[8].matches(',').count(), 10);
    assert!(lines[0].starts_with("  0x00,"));
    assert!(lines[7].ends_with("0xff,"));
}

#[test]
fn converts_raw_pcm() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("tone.raw");
    fs::write(&infile, [255u8, 0, 128]).unwrap();

    let options = Options {
        infile,
        input: InputKind::Raw,
        ..Options::default()
    };
    convert_file(&options).unwrap();

    let header = fs::read_to_string(dir.path().join("tone.h")).unwrap();
    assert!(header.contains("= {\n  0xff,0x00,0xf0,\n};\n"));
}

#[test]
fn converting_twice_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("noise.wav");
    let samples: Vec<i8> = (0..500u32).map(|i| signed((i * 97 % 256) as u8)).collect();
    write_wav(&infile, mono8(11025), &samples);

    let first = Options {
        infile: infile.clone(),
        outfile: Some(dir.path().join("a.h")),
        ..Options::default()
    };
    let second = Options {
        outfile: Some(dir.path().join("b.h")),
        ..first.clone()
    };
    convert_file(&first).unwrap();
    convert_file(&second).unwrap();

    assert_eq!(
        fs::read(dir.path().join("a.h")).unwrap(),
        fs::read(dir.path().join("b.h")).unwrap()
    );
}

#[test]
fn rejects_16_bit_input() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("loud.wav");
    let spec = hound::WavSpec {
        bits_per_sample: 16,
        ..mono8(44100)
    };
    let mut writer = hound::WavWriter::create(&infile, spec).unwrap();
    writer.write_sample(0i16).unwrap();
    writer.finalize().unwrap();

    let options = Options {
        infile,
        ..Options::default()
    };
    match convert_file(&options) {
        Err(Error::WartError(WartError::UnsupportedFormat {
            bits_per_sample, ..
        })) => assert_eq!(bits_per_sample, 16),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!dir.path().join("loud.h").exists());
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let options = Options {
        infile: dir.path().join("absent.wav"),
        ..Options::default()
    };
    assert!(convert_file(&options).is_err());
    assert!(!dir.path().join("absent.h").exists());
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("ok.raw");
    fs::write(&infile, [1u8, 2, 3]).unwrap();

    let options = Options {
        infile,
        outfile: Some(dir.path().join("no_such_dir").join("ok.h")),
        input: InputKind::Raw,
        ..Options::default()
    };
    assert!(matches!(convert_file(&options), Err(Error::IoError(_))));
}
