//! Rendering of result matrices

use crate::error::SessionError;
use spmx_core::{encode, SparseMatrix};

/// Header printed before a text result
pub const RESULT_HEADER: &str = "Result Matrix:";

/// How the result matrix is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Result Matrix:` followed by the matrix in file format
    #[default]
    Text,
    /// A JSON object with `rows`, `cols` and `entries`
    #[cfg(feature = "json")]
    Json,
}

impl OutputFormat {
    /// Render `matrix`, ending with a newline
    pub fn render(&self, matrix: &SparseMatrix) -> Result<String, SessionError> {
        match self {
            OutputFormat::Text => Ok(format!("{RESULT_HEADER}\n{}", encode(matrix))),
            #[cfg(feature = "json")]
            OutputFormat::Json => {
                let doc = spmx_core::MatrixDocument::from(matrix);
                Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_render() {
        let m = SparseMatrix::from_triples(1, 1, [(0, 0, 23)]);
        assert_eq!(
            OutputFormat::Text.render(&m).unwrap(),
            "Result Matrix:\nrows=1\ncols=1\n(0, 0, 23)\n"
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_render() {
        let m = SparseMatrix::from_triples(2, 3, [(1, 2, -4)]);
        let rendered = OutputFormat::Json.render(&m).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "rows": 2,
                "cols": 3,
                "entries": [{ "row": 1, "col": 2, "value": -4 }]
            })
        );
    }
}
