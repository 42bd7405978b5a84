//! Text encoding of a [`ProblemInstance`].
//!
//! ```text
//! NNN BBBBBB W R
//! iii iii ... v.vvvv v.vvvv ...
//! ```
//!
//! The header holds `n` (zero-padded to 3 digits), the evaluation budget
//! (zero-padded to 6 digits), the row width `W` and the row count `R`. Each
//! of the `R` lines that follow lists the row's `W` variable indices
//! zero-padded to 3 digits, then its `2^W` values with 4 decimal digits.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{GeneratorError, Result, ResultExt};

use super::{Adjacency, ProblemInstance, ValueTable};

impl fmt::Display for ProblemInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:03} {:06} {} {}",
            self.n,
            self.eval_budget,
            self.row_width(),
            self.row_count()
        )?;

        for (links, values) in self.adjacency.rows().iter().zip(self.table.rows()) {
            let indices: Vec<String> = links.iter().map(|x| format!("{:03}", x)).collect();
            let cells: Vec<String> = values.iter().map(|v| format!("{:.4}", v)).collect();
            writeln!(f, "{} {}", indices.join(" "), cells.join(" "))?;
        }

        Ok(())
    }
}

impl FromStr for ProblemInstance {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().filter(|line| !line.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| malformed("missing header line".to_string()))?;
        let fields = parse_fields::<usize>(header, "header")?;
        let &[n, eval_budget, width, row_count] = fields.as_slice() else {
            return Err(malformed(format!(
                "header needs 4 fields, found {}",
                fields.len()
            )));
        };
        if width == 0 || width >= usize::BITS as usize {
            return Err(malformed(format!("unsupported row width {}", width)));
        }

        let mut links = Vec::new();
        let mut values = Vec::new();
        for r in 0..row_count {
            let line = lines
                .next()
                .ok_or_else(|| malformed(format!("expected {} rows, found {}", row_count, r)))?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let expected = width + (1 << width);
            if tokens.len() != expected {
                return Err(malformed(format!(
                    "row {} has {} fields, expected {}",
                    r,
                    tokens.len(),
                    expected
                )));
            }

            links.push(parse_tokens::<usize>(&tokens[..width], r)?);
            values.push(parse_tokens::<f64>(&tokens[width..], r)?);
        }

        if lines.next().is_some() {
            return Err(malformed(format!("trailing data after {} rows", row_count)));
        }

        ProblemInstance::new(n, eval_budget, Adjacency::new(links), ValueTable::new(values))
    }
}

impl ProblemInstance {
    /// Writes the encoded instance to `path`, replacing any existing file.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path).context(format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write!(writer, "{}", self).context(format!("failed to write {}", path.display()))?;
        writer
            .flush()
            .context(format!("failed to flush {}", path.display()))?;
        Ok(())
    }

    pub fn read_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).context(format!("failed to read {}", path.display()))?;
        text.parse()
    }
}

fn malformed(message: String) -> GeneratorError {
    GeneratorError::MalformedInstance(message)
}

fn parse_fields<T: FromStr>(line: &str, what: &str) -> Result<Vec<T>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| malformed(format!("invalid {} field '{}'", what, token)))
        })
        .collect()
}

fn parse_tokens<T: FromStr>(tokens: &[&str], row: usize) -> Result<Vec<T>> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse()
                .map_err(|_| malformed(format!("row {}: invalid field '{}'", row, token)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> ProblemInstance {
        ProblemInstance::new(
            3,
            18,
            Adjacency::new(vec![vec![0, 1], vec![1, 2], vec![2, 0]]),
            ValueTable::new(vec![
                vec![0.1, 0.25, 0.5, 1.0],
                vec![0.0, 0.33333, 0.66667, 0.9],
                vec![0.12345, 0.5, 0.5, 0.5],
            ]),
        )
        .unwrap()
    }

    #[test]
    fn test_encoding_is_byte_exact() {
        let expected = "\
003 000018 2 3
000 001 0.1000 0.2500 0.5000 1.0000
001 002 0.0000 0.3333 0.6667 0.9000
002 000 0.1235 0.5000 0.5000 0.5000
";
        assert_eq!(tiny().to_string(), expected);
    }

    #[test]
    fn test_parse_reads_back() {
        let parsed: ProblemInstance = tiny().to_string().parse().unwrap();
        assert_eq!(parsed.adjacency(), tiny().adjacency());
        assert_eq!(parsed.eval_budget(), 18);
        assert!((parsed.table().rows()[1][1] - 0.3333).abs() < 1e-12);
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let text = "003 000018 2 1\n000 001 0.1 0.2 0.3\n";
        let err = text.parse::<ProblemInstance>().unwrap_err();
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn test_parse_rejects_missing_rows() {
        let text = "003 000018 2 2\n000 001 0.1 0.2 0.3 0.4\n";
        assert!(text.parse::<ProblemInstance>().is_err());
    }

    #[test]
    fn test_parse_rejects_huge_row_count() {
        let text = "003 000018 2 18446744073709551615\n000 001 0.1 0.2 0.3 0.4\n";
        match text.parse::<ProblemInstance>() {
            Err(GeneratorError::MalformedInstance(msg)) => assert!(msg.contains("expected")),
            other => panic!("Expected MalformedInstance, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_header() {
        assert!("003 000018 2\n".parse::<ProblemInstance>().is_err());
        assert!("abc 000018 2 1\n".parse::<ProblemInstance>().is_err());
        assert!("".parse::<ProblemInstance>().is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_index() {
        let text = "003 000018 2 1\n000 003 0.1 0.2 0.3 0.4\n";
        assert!(matches!(
            text.parse::<ProblemInstance>(),
            Err(GeneratorError::MalformedInstance(_))
        ));
    }
}
