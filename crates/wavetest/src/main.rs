//! Testing utilities for wavegen

use {
    anstyle::AnsiColor,
    clap::Parser,
    std::{
        error::Error,
        io::{self},
        path::PathBuf,
    },
    wavegen::{WaveKind, WaveformSpec},
};

#[derive(clap::Parser)]
enum Args {
    DumpSamples { out_path: PathBuf },
    CompareSamples,
    DumpCsv { out_path: PathBuf },
    CompareCsv,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    if let Err(e) = std::fs::create_dir_all(basedir()) {
        eprintln!("Error: Failed to create test dir: {e}");
    }
    match args {
        Args::DumpSamples { out_path } => dump_samples_file(out_path)?,
        Args::CompareSamples => cmp_samples()?,
        Args::DumpCsv { out_path } => dump_csv_file(out_path)?,
        Args::CompareCsv => cmp_csv()?,
    }
    Ok(())
}

/// Specs whose sample tables serve as regression references
fn reference_specs() -> Vec<WaveformSpec> {
    [
        (WaveKind::Sine, 5.0, 2.0, 0.0),
        (WaveKind::Sine, 440.0, 1.0, std::f64::consts::FRAC_PI_2),
        (WaveKind::Square, 5.0, 2.0, 0.0),
        (WaveKind::Square, 3.0, 0.5, 1.0),
        (WaveKind::Triangle, 5.0, 2.0, 0.0),
        (WaveKind::Triangle, 7.0, 1.5, 0.0),
    ]
    .into_iter()
    .map(|(kind, freq, amp, phase)| WaveformSpec::new(kind, freq, amp, phase).unwrap())
    .collect()
}

fn dump_samples_buf() -> Vec<u8> {
    let mut out = Vec::new();
    for spec in reference_specs() {
        let values: Vec<f64> = wavegen::render(&spec).iter().map(|s| s.value).collect();
        out.extend_from_slice(bytemuck::cast_slice(&values));
    }
    out
}

fn dump_samples_file(out_path: PathBuf) -> io::Result<()> {
    std::fs::write(out_path, dump_samples_buf())?;
    Ok(())
}

fn dump_csv_buf() -> Vec<u8> {
    let mut out = Vec::new();
    wavegen::write_csv(&mut out, &wavegen::render(&reference_specs()[0])).unwrap();
    out
}

fn dump_csv_file(out_path: PathBuf) -> io::Result<()> {
    std::fs::write(out_path, dump_csv_buf())?;
    Ok(())
}

fn basedir() -> PathBuf {
    std::env::temp_dir().join("wavegen-test")
}

fn cmp_samples() -> Result<(), Box<dyn Error>> {
    let path = basedir().join("clean-samples.bin");
    if !path.exists() {
        return Err(format!("Need clean file at '{}'", path.display()).into());
    }
    let clean = std::fs::read(path)?;
    let dirty = dump_samples_buf();
    if clean == dirty {
        pass("Sample tables match");
    } else {
        fail("Sample table mismatch");
    }
    Ok(())
}

fn cmp_csv() -> Result<(), Box<dyn Error>> {
    let path = basedir().join("clean-waveform.csv");
    if !path.exists() {
        return Err(format!("Need clean file at '{}'", path.display()).into());
    }
    let clean = std::fs::read_to_string(path)?;
    let Some(clean_samples) = wavegen::parse_csv(&clean) else {
        fail("Clean capture doesn't parse as sample CSV");
        return Ok(());
    };
    let fresh = wavegen::render(&reference_specs()[0]);
    if fresh.len() != clean_samples.len() {
        fail("Sample count mismatch");
        return Ok(());
    }
    // The CSV keeps 6 fractional digits, so compare at that precision
    let close = std::iter::zip(&fresh, &clean_samples).all(|(f, c)| {
        (f.time - c.time).abs() < 5e-7 && (f.value - c.value).abs() < 5e-7
    });
    if close {
        pass("CSV matches regenerated samples");
    } else {
        fail("CSV mismatch against regenerated samples");
    }
    Ok(())
}

fn pass(msg: &str) {
    let style = anstyle::Style::new()
        .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)))
        .bold();
    eprintln!("{style}[PASS]{style:#} {msg}");
}

fn fail(msg: &str) {
    let style = anstyle::Style::new()
        .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)))
        .bold();
    eprintln!("{style}[FAIL]{style:#} {msg}");
}
