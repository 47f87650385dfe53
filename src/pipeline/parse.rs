use super::model::{PipelineError, Sample};

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Parse one line of the recording into a sample.
///
/// Tokens are split at commas; empty tokens (from consecutive delimiters or
/// a trailing comma) are skipped rather than parsed. `line_no` is 1-based
/// and only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Sample, PipelineError> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f32>().map_err(|_| PipelineError::Parse {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse every raw line, checking each row against the width of the first.
/// The rig writes a uniform channel layout; a width mismatch means the
/// recording is corrupt and the run stops before any smoothing happens.
pub fn parse_rows(lines: &[String]) -> Result<Vec<Sample>, PipelineError> {
    let mut rows = Vec::with_capacity(lines.len());
    let mut width: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        let row = parse_line(line, i + 1)?;
        match width {
            None => width = Some(row.len()),
            Some(expected) if row.len() != expected => {
                return Err(PipelineError::Shape {
                    line: i + 1,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_floats() {
        assert_eq!(
            parse_line("1.0,-2.5,0.125", 1).unwrap(),
            vec![1.0, -2.5, 0.125]
        );
    }

    #[test]
    fn skips_empty_tokens() {
        assert_eq!(parse_line("1.0,,2.5,", 1).unwrap(), vec![1.0, 2.5]);
    }

    #[test]
    fn tolerates_whitespace_around_tokens() {
        assert_eq!(parse_line(" 1.0 , 2.0", 1).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn reports_bad_token_with_line_number() {
        let err = parse_line("1.0,oops", 3).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Parse {
                line: 3,
                token: "oops".to_string()
            }
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let lines = vec!["1,2".to_string(), "1,2,3".to_string()];
        let err = parse_rows(&lines).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Shape {
                line: 2,
                expected: 2,
                found: 3
            }
        );
    }
}
