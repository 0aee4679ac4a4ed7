//! Question bank loading
//!
//! A question bank is a headerless CSV file where every record is exactly
//! `question,answer`. Loading happens entirely before a session starts.

use crate::error::{QuizError, Result};
use crate::quiz::problem::Problem;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load all problems from a CSV file, in file order
pub fn load_problems(path: &Path) -> Result<Vec<Problem>> {
    let file = File::open(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let problems = parse_problems(file)?;
    debug!("Loaded {} problems from {}", problems.len(), path.display());
    Ok(problems)
}

/// Parse problems from any CSV source
pub fn parse_problems<R: Read>(source: R) -> Result<Vec<Problem>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut problems = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != 2 {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(QuizError::Format {
                line,
                fields: record.len(),
            });
        }

        problems.push(Problem::new(&record[0], &record[1]));
    }

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_preserves_file_order() {
        let data = "5+5,10\n1+1,2\ncapital of France, Paris \n";
        let problems = parse_problems(data.as_bytes()).unwrap();

        assert_eq!(problems.len(), 3);
        assert_eq!(problems[0].question(), "5+5");
        assert_eq!(problems[1].question(), "1+1");
        assert_eq!(problems[2].question(), "capital of France");
        assert_eq!(problems[2].answer(), "paris");
    }

    #[test]
    fn test_first_row_is_not_a_header() {
        let problems = parse_problems("question,answer\n".as_bytes()).unwrap();
        assert_eq!(problems, vec![Problem::new("question", "answer")]);
    }

    #[test]
    fn test_quoted_fields() {
        let data = "\"what is 3,000 + 1?\",\"3,001\"\n";
        let problems = parse_problems(data.as_bytes()).unwrap();
        assert_eq!(problems[0].question(), "what is 3,000 + 1?");
        assert_eq!(problems[0].answer(), "3,001");
    }

    #[test]
    fn test_three_fields_is_format_error() {
        let data = "1+1,2\n2+2,4,extra\n";
        let err = parse_problems(data.as_bytes()).unwrap_err();
        assert!(matches!(err, QuizError::Format { line: 2, fields: 3 }));
    }

    #[test]
    fn test_one_field_is_format_error() {
        let err = parse_problems("lonely\n".as_bytes()).unwrap_err();
        assert!(matches!(err, QuizError::Format { line: 1, fields: 1 }));
    }

    #[test]
    fn test_empty_source_yields_no_problems() {
        assert!(parse_problems("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "2+2,4").unwrap();
        writeln!(file, "capital of France,Paris").unwrap();

        let problems = load_problems(file.path()).unwrap();
        assert_eq!(
            problems,
            vec![
                Problem::new("2+2", "4"),
                Problem::new("capital of France", "paris"),
            ]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        let err = load_problems(&path).unwrap_err();
        match err {
            QuizError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
