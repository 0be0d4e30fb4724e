//! Serializing sampled data as CSV

use {
    crate::sampling::Sample,
    std::{
        fs::File,
        io::{self, BufWriter, Write},
        path::Path,
    },
};

/// Header row of the output
pub const CSV_HEADER: &str = "Time,Value";

/// Writes `samples` in CSV form: the header row, then one `time,value` row
/// per sample, both fields fixed-point with exactly 6 digits after the
/// decimal point.
pub fn write_csv(out: &mut impl Write, samples: &[Sample]) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for sample in samples {
        writeln!(out, "{:.6},{:.6}", sample.time, sample.value)?;
    }
    Ok(())
}

/// Saves `samples` as a CSV file at `path`, replacing any existing file.
///
/// The data is flushed before returning, so `Ok` means the whole table made
/// it to the file.
pub fn save_csv(path: impl AsRef<Path>, samples: &[Sample]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(&mut writer, samples)?;
    writer.flush()
}

/// (testing-only) Parse CSV data produced by [`write_csv`] back into samples.
///
/// Returns `None` if the header or any row doesn't match the output format.
#[cfg(any(test, feature = "testing"))]
#[must_use]
pub fn parse_csv(data: &str) -> Option<Vec<Sample>> {
    let mut lines = data.lines();
    if lines.next()? != CSV_HEADER {
        return None;
    }
    lines
        .map(|line| {
            let (time, value) = line.split_once(',')?;
            Some(Sample {
                time: time.parse().ok()?,
                value: value.parse().ok()?,
            })
        })
        .collect()
}

#[test]
fn test_csv_format() {
    let samples = [
        Sample {
            time: 0.0,
            value: 0.0,
        },
        Sample {
            time: 0.05,
            value: -2.0,
        },
    ];
    let mut out = Vec::new();
    write_csv(&mut out, &samples).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "Time,Value\n0.000000,0.000000\n0.050000,-2.000000\n");
}

#[test]
fn test_csv_roundtrip() {
    use crate::{
        sampling::render,
        waveform::{WaveKind, WaveformSpec},
    };
    let spec = WaveformSpec::new(WaveKind::Triangle, 7.0, 1.5, 0.0).unwrap();
    let samples = render(&spec);
    let mut out = Vec::new();
    write_csv(&mut out, &samples).unwrap();
    let parsed = parse_csv(std::str::from_utf8(&out).unwrap()).unwrap();
    assert_eq!(parsed.len(), samples.len());
    // 6 fractional digits of precision survive the round trip
    for (p, s) in std::iter::zip(&parsed, &samples) {
        assert!((p.time - s.time).abs() < 5e-7);
        assert!((p.value - s.value).abs() < 5e-7);
    }
}
