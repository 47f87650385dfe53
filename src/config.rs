use std::path::PathBuf;

use clap::Parser;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything a run needs, resolved up front. No other state exists.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "calib-smooth",
    version,
    about = "Smooth the quaternion channels of a motion-rig calibration recording"
)]
pub struct Config {
    /// Input recording: one sample per line, comma-separated channels.
    pub input_path: PathBuf,

    /// Destination for the smoothed recording.
    pub output_path: PathBuf,

    /// Moving-average window in samples. Must be positive and even so the
    /// half-window splits cleanly around each sample.
    #[arg(long, default_value_t = 10, value_parser = parse_window_size)]
    pub window_size: usize,

    /// Settling rows dropped from the start of the first segment.
    #[arg(long, default_value_t = 100)]
    pub ignore_lines: usize,

    /// Channel value that identifies a repeat-event marker row.
    #[arg(long, default_value_t = 10.0)]
    pub sentinel: f32,
}

fn parse_window_size(s: &str) -> Result<usize, String> {
    let window: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a whole number"))?;
    if window == 0 || window % 2 != 0 {
        return Err(format!("window size must be positive and even, got {window}"));
    }
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_accepts_even() {
        assert_eq!(parse_window_size("10"), Ok(10));
        assert_eq!(parse_window_size("2"), Ok(2));
    }

    #[test]
    fn window_size_rejects_odd_and_zero() {
        assert!(parse_window_size("0").is_err());
        assert!(parse_window_size("7").is_err());
        assert!(parse_window_size("ten").is_err());
    }
}
