//! The calibration-smoothing pipeline.
//!
//! ```text
//!  raw lines
//!      │
//!      ▼
//!  ┌─────────┐
//!  │  parse   │  lines → samples, uniform width enforced
//!  └─────────┘
//!      │
//!      ▼
//!  ┌─────────┐
//!  │ segment  │  split at repeat-event markers → Dataset
//!  └─────────┘
//!      │
//!      ▼
//!  ┌─────────┐
//!  │ smooth   │  moving average over quaternion columns, per segment
//!  └─────────┘
//!      │
//!      ▼
//!  ┌─────────┐
//!  │  trim    │  drop settling rows from the first segment
//!  └─────────┘
//!      │
//!      ▼
//!  ┌───────────┐
//!  │ reconstruct│  re-serialize, markers between and after segments
//!  └───────────┘
//! ```

pub mod marker;
pub mod model;
pub mod parse;
pub mod reconstruct;
pub mod segment;
pub mod smooth;

use log::info;

use crate::config::Config;
use self::model::PipelineError;

/// Run the whole pipeline over the raw input lines.
///
/// Pure apart from logging: the same lines and configuration always
/// produce the same output lines. Any error leaves no output at all.
pub fn run(lines: &[String], config: &Config) -> Result<Vec<String>, PipelineError> {
    let rows = parse::parse_rows(lines)?;
    info!("parsed {} rows", rows.len());

    let exemplar = marker::exemplar_line(&rows, lines, config.sentinel).map(str::to_owned);

    let mut dataset = segment::split_at_markers(rows, config.sentinel);
    if dataset.is_empty() {
        return Err(PipelineError::EmptyInput);
    }
    let marker_line = exemplar.ok_or(PipelineError::EmptyInput)?;
    info!("found {} segments", dataset.len());

    for seg in &mut dataset.segments {
        smooth::filter_segment(seg, config.window_size);
    }

    dataset.trim_calibration(config.ignore_lines);

    Ok(reconstruct::reconstruct(&dataset, &marker_line))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config(window_size: usize, ignore_lines: usize) -> Config {
        Config {
            input_path: PathBuf::new(),
            output_path: PathBuf::new(),
            window_size,
            ignore_lines,
            sentinel: 10.0,
        }
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn end_to_end_on_a_hand_computed_recording() {
        // Two segments of three rows each once the boundary rule has
        // consumed the marker, the row before it, and the final row.
        // With window 2 a three-row ramp averages to one flat value.
        let input = lines(&[
            "1,1", "2,2", "3,3", "4,4", "10,10", "5,5", "6,6", "7,7", "8,8",
        ]);
        let output = run(&input, &config(2, 1)).unwrap();

        assert_eq!(
            output,
            lines(&[
                "1.5,1.5", "1.5,1.5", "10,10", "5.5,5.5", "5.5,5.5", "5.5,5.5", "10,10",
            ])
        );
    }

    #[test]
    fn over_length_trim_empties_the_first_segment_but_keeps_markers() {
        let input = lines(&[
            "1,1", "2,2", "3,3", "4,4", "10,10", "5,5", "6,6", "7,7", "8,8",
        ]);
        let output = run(&input, &config(2, 100)).unwrap();

        assert_eq!(
            output,
            lines(&["10,10", "5.5,5.5", "5.5,5.5", "5.5,5.5", "10,10"])
        );
    }

    #[test]
    fn marker_lines_reuse_the_original_text() {
        // The exemplar keeps whatever formatting the recording used.
        let input = lines(&["1,1", "2,2", "3,3", "4,4", "10.0,10", "5,5", "6,6", "7,7", "8,8"]);
        let output = run(&input, &config(2, 0)).unwrap();

        assert_eq!(output.iter().filter(|l| *l == "10.0,10").count(), 2);
    }

    #[test]
    fn empty_input_is_a_named_error() {
        assert_eq!(
            run(&[], &config(10, 100)).unwrap_err(),
            PipelineError::EmptyInput
        );
    }

    #[test]
    fn marker_only_input_is_a_named_error() {
        let input = lines(&["10,10", "10,10"]);
        assert_eq!(
            run(&input, &config(10, 100)).unwrap_err(),
            PipelineError::EmptyInput
        );
    }
}
