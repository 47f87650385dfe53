use log::trace;

use super::model::Segment;

// ---------------------------------------------------------------------------
// Channel selection
// ---------------------------------------------------------------------------

/// Whether a column carries quaternion data and should be smoothed.
///
/// Channels arrive in groups of five per sensor: four quaternion
/// components followed by one MMG channel. With `max = width % 5`, a
/// column is the MMG channel exactly when `column % 5 == 0` and
/// `column > max`; everything else is quaternion data.
pub fn is_smoothed_column(column: usize, width: usize) -> bool {
    let max = width % 5;
    !(column % 5 == 0 && column > max)
}

/// Smooth every quaternion column of the segment in place. MMG columns
/// keep their recorded values.
pub fn filter_segment(segment: &mut Segment, window_size: usize) {
    let Some(width) = segment.rows.first().map(Vec::len) else {
        return;
    };

    for column in 0..width {
        if !is_smoothed_column(column, width) {
            continue;
        }

        let column_trace: Vec<f32> = segment.rows.iter().map(|row| row[column]).collect();
        let filtered = moving_average(&column_trace, window_size);
        for (row, value) in segment.rows.iter_mut().zip(filtered) {
            row[column] = value;
        }
        trace!("smoothed column {column} over {} rows", segment.len());
    }
}

// ---------------------------------------------------------------------------
// Moving average
// ---------------------------------------------------------------------------

/// Centered moving average with a fixed divisor, rounded to 3 decimals.
///
/// With half-window `h = window_size / 2`, the window at index `i` covers
/// `[i - h, i + h)` and the sum is always divided by the full window size.
/// Samples near either edge, where no full window fits, are flat-extended
/// from the nearest fully averaged sample rather than computed from a
/// partial window. A trace with no fully averaged interior sample at all
/// is returned unchanged.
pub fn moving_average(trace: &[f32], window_size: usize) -> Vec<f32> {
    let n = trace.len();
    let h = window_size / 2;
    if h == 0 || n <= 2 * h {
        return trace.to_vec();
    }

    let mut output = vec![0.0f32; n];
    for i in h..n - h {
        let sum: f32 = trace[i - h..i + h].iter().sum();
        output[i] = round3(sum / window_size as f32);
    }

    // Flat-extend both edges from the first/last interior sample.
    for i in 0..h {
        output[i] = output[h];
        output[n - 1 - i] = output[n - 1 - h];
    }

    output
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
