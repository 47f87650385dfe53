use super::model::{Dataset, Sample};

// ---------------------------------------------------------------------------
// Reconstruction
// ---------------------------------------------------------------------------

/// Serialize one sample back to a recording line.
fn render_row(row: &Sample) -> String {
    row.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Reassemble the segments into the output line sequence.
///
/// The exemplar marker line is re-inserted between every adjacent pair of
/// segments and once more after the last one: the recording format always
/// ends with a marker row, so N segments produce N marker lines. Empty
/// segments contribute no data lines but still take part in the marker
/// placement.
pub fn reconstruct(dataset: &Dataset, marker_line: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, segment) in dataset.segments.iter().enumerate() {
        if i > 0 {
            lines.push(marker_line.to_string());
        }
        lines.extend(segment.rows.iter().map(render_row));
    }
    lines.push(marker_line.to_string());

    lines
}
