use log::debug;

use super::marker;
use super::model::{Dataset, Sample, Segment};

// ---------------------------------------------------------------------------
// Segmentation
// ---------------------------------------------------------------------------

/// Split the recording into segments at repeat-event markers.
///
/// The end of the stream acts as one final implicit boundary. Each boundary
/// consumes the marker row itself and the sample immediately preceding it:
/// the rig emits a transition sample just before every repeat event, and
/// that sample carries no calibration data. The same rule applies at the
/// implicit end boundary, so the last row of the stream is never part of a
/// segment. Boundaries that enclose no samples produce no segment.
pub fn split_at_markers(rows: Vec<Sample>, sentinel: f32) -> Dataset {
    let mut boundaries = marker::marker_indices(&rows, sentinel);
    let marker_count = boundaries.len();
    boundaries.push(rows.len());

    let mut segments = Vec::new();
    let mut start = 0usize;

    for boundary in boundaries {
        let end = boundary.saturating_sub(1).max(start);
        if end > start {
            segments.push(Segment {
                rows: rows[start..end].to_vec(),
            });
        }
        start = boundary + 1;
    }

    debug!(
        "segmented {} rows at {} markers into {} segments",
        rows.len(),
        marker_count,
        segments.len()
    );

    Dataset { segments }
}
