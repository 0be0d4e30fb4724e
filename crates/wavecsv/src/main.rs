//! Interactive command line waveform sampler
#![forbid(unsafe_code)]

use {
    std::io::{self, BufRead, Write},
    wavegen::{WaveKind, WaveformSpec},
};

/// Name of the output file, written to the current working directory
const OUT_FILENAME: &str = "waveform_data.csv";

fn main() -> io::Result<()> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    writeln!(stdout, "Choose waveform to generate:")?;
    writeln!(stdout, "1. Sine Wave\n2. Square Wave\n3. Triangle Wave")?;
    write!(stdout, "Enter your choice (1/2/3): ")?;
    stdout.flush()?;
    // A non-numeric selection counts as an invalid choice, same as any
    // number outside the menu.
    let choice = read_line(&mut stdin)?.trim().parse().unwrap_or(0);
    let kind = match WaveKind::from_choice(choice) {
        Ok(kind) => kind,
        Err(_) => {
            writeln!(stdout, "Invalid choice!")?;
            return Err(io::Error::other("Invalid waveform choice"));
        }
    };

    let frequency = prompt_param(&mut stdin, &mut stdout, &mut stderr, "Enter frequency (Hz): ")?;
    let amplitude = prompt_param(&mut stdin, &mut stdout, &mut stderr, "Enter amplitude: ")?;
    let phase = prompt_param(
        &mut stdin,
        &mut stdout,
        &mut stderr,
        "Enter phase shift (in radians, optional, default is 0): ",
    )?;

    let spec = match WaveformSpec::new(kind, frequency, amplitude, phase) {
        Ok(spec) => spec,
        Err(e) => {
            writeln!(stderr, "{e}")?;
            return Err(io::Error::other("Invalid waveform parameters"));
        }
    };

    let samples = wavegen::render(&spec);
    if let Err(e) = wavegen::save_csv(OUT_FILENAME, &samples) {
        writeln!(stderr, "Unable to open file: {OUT_FILENAME}")?;
        return Err(e);
    }
    writeln!(stdout, "Data saved to {OUT_FILENAME}")?;
    Ok(())
}

fn read_line(stdin: &mut io::StdinLock<'_>) -> io::Result<String> {
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line)
}

/// Prompt for one numeric waveform parameter. Anything that doesn't parse as
/// a number is a fatal input error.
fn prompt_param(
    stdin: &mut io::StdinLock<'_>,
    stdout: &mut io::StdoutLock<'_>,
    stderr: &mut io::StderrLock<'_>,
    prompt: &str,
) -> io::Result<f64> {
    write!(stdout, "{prompt}")?;
    stdout.flush()?;
    let line = read_line(stdin)?;
    match wavegen::parse_param(&line) {
        Ok(num) => Ok(num),
        Err(e) => {
            writeln!(stderr, "Failed to read '{}': {e}", line.trim())?;
            Err(io::Error::other("Malformed numeric input"))
        }
    }
}
