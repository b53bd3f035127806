use scalargrad_core::{Graph, ValueId};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Custom error type for data loading.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}, field {field}: cannot parse {token:?} as a number")]
    Parse {
        line: usize,
        field: usize,
        token: String,
    },
}

/// Reads a delimited numeric text file into one `f64` row per line.
///
/// Fields are split on `delimiter` and trimmed; blank lines are skipped.
/// Rows are returned as parsed, without any width check — datasets with a
/// ragged trailing line surface naturally as a parse error or a short
/// row at the consumer.
pub fn read_delimited(
    path: impl AsRef<Path>,
    delimiter: char,
) -> Result<Vec<Vec<f64>>, DataError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut rows = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (field_idx, token) in line.split(delimiter).enumerate() {
            let token = token.trim();
            let value = token.parse::<f64>().map_err(|_| DataError::Parse {
                line: line_idx + 1,
                field: field_idx + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Comma-separated convenience wrapper around [`read_delimited`].
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>, DataError> {
    read_delimited(path, ',')
}

/// Installs every value as a leaf node in `graph`, preserving the row
/// structure. Done once up front so the resulting ids stay below any
/// training-iteration checkpoint and survive per-iteration release.
pub fn leaf_rows(graph: &mut Graph, rows: &[Vec<f64>]) -> Vec<Vec<ValueId>> {
    rows.iter()
        .map(|row| row.iter().map(|&v| graph.leaf(v)).collect())
        .collect()
}
