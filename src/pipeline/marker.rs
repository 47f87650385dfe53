use super::model::Sample;

// ---------------------------------------------------------------------------
// Repeat-event markers
// ---------------------------------------------------------------------------

/// True iff every channel in the row equals the sentinel exactly. The rig
/// writes markers as an integer-valued constant across all channels, so
/// comparison is exact, no epsilon.
pub fn is_marker(row: &[f32], sentinel: f32) -> bool {
    row.iter().all(|&v| v == sentinel)
}

/// Indices of all marker rows in the recording.
pub fn marker_indices(rows: &[Sample], sentinel: f32) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| is_marker(row, sentinel))
        .map(|(i, _)| i)
        .collect()
}

/// The raw text of the first marker row, kept verbatim so reconstruction
/// re-emits boundaries exactly as the recording wrote them. A marker-free
/// recording falls back to its first line.
pub fn exemplar_line<'a>(rows: &[Sample], lines: &'a [String], sentinel: f32) -> Option<&'a str> {
    let index = rows
        .iter()
        .position(|row| is_marker(row, sentinel))
        .unwrap_or(0);
    lines.get(index).map(String::as_str)
}
