use thiserror::Error;

// ---------------------------------------------------------------------------
// Core types
// ---------------------------------------------------------------------------

/// One recorded row: every channel value at a single instant. All samples
/// in a recording share the same width.
pub type Sample = Vec<f32>;

/// A contiguous run of samples between two repeat-event boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub rows: Vec<Sample>,
}

impl Segment {
    /// Number of samples in the segment.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The segmented recording, in original temporal order. Each pipeline
/// stage mutates it in place; no segment is shared between stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub segments: Vec<Segment>,
}

impl Dataset {
    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Drop the settling run from the start of the first segment. The rig
    /// needs a moment to stabilise after a recording starts, so those rows
    /// are calibration noise. Trimming past the end leaves an empty first
    /// segment, which later stages accept.
    pub fn trim_calibration(&mut self, ignore_lines: usize) {
        if let Some(first) = self.segments.first_mut() {
            let cut = ignore_lines.min(first.rows.len());
            first.rows.drain(..cut);
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A failed run writes no output; every variant aborts the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("line {line}: '{token}' is not a valid number")]
    Parse { line: usize, token: String },

    #[error("line {line}: row has {found} channels, expected {expected}")]
    Shape {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("recording contains no data segments")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(lens: &[usize]) -> Dataset {
        Dataset {
            segments: lens
                .iter()
                .map(|&n| Segment {
                    rows: (0..n).map(|i| vec![i as f32]).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn trim_drops_leading_rows_of_first_segment_only() {
        let mut ds = dataset(&[5, 4]);
        ds.trim_calibration(2);
        assert_eq!(ds.segments[0].len(), 3);
        assert_eq!(ds.segments[0].rows[0], vec![2.0]);
        assert_eq!(ds.segments[1].len(), 4);
    }

    #[test]
    fn trim_past_end_leaves_empty_first_segment() {
        let mut ds = dataset(&[3, 4]);
        ds.trim_calibration(100);
        assert!(ds.segments[0].is_empty());
        assert_eq!(ds.segments[1].len(), 4);
    }

    #[test]
    fn trim_on_empty_dataset_is_a_no_op() {
        let mut ds = dataset(&[]);
        ds.trim_calibration(10);
        assert!(ds.is_empty());
    }
}
