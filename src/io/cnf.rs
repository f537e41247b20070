//! # 2-CNF
//!
//! A formula is given by one clause per line, each consisting of exactly two literals:
//!
//! ```text
//! 0 1
//! -0 2
//! -2 -1
//! ```
//!
//! A literal is a variable index `k` for `x_k` or `-k` for `¬x_k`, so `-0` is `¬x_0`.
//! Blank lines are skipped.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::*;
use crate::algo::{Clause, Literal, TwoCnf};

impl TwoCnf {
    /// Reads a formula from the given reader.
    ///
    /// # Errors
    /// Returns [`GraphError::Parse`] for lines without exactly two valid literals
    /// and [`GraphError::Io`] if reading fails.
    pub fn try_read<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = ContentLines::new(reader, None);
        let mut formula = TwoCnf::new();

        while let Some((line, content)) = lines.next_line()? {
            let tokens: Vec<&str> = content.split_whitespace().collect();
            raise_error_unless!(
                tokens.len() == 2,
                line,
                format!("Expected a clause of two literals, found {} tokens", tokens.len())
            );

            let a: Literal = tokens[0].parse().map_err(|e: String| parse_error!(line, e))?;
            let b: Literal = tokens[1].parse().map_err(|e: String| parse_error!(line, e))?;
            tracing::trace!("Read clause ({a} ∨ {b}) in line {line}");

            formula.add_clause(a, b);
        }

        tracing::debug!(
            "Read formula with {} variables and {} clauses",
            formula.number_of_variables(),
            formula.number_of_clauses()
        );
        Ok(formula)
    }

    /// Reads a formula from a file, see [`TwoCnf::try_read`].
    /// A missing or unreadable file is reported as [`GraphError::Io`].
    pub fn try_read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read(BufReader::new(File::open(path)?))
    }

    /// Returns the clauses as a formula
    pub fn from_clauses<I: IntoIterator<Item = (Literal, Literal)>>(clauses: I) -> Self {
        clauses.into_iter().map(|(a, b)| Clause(a, b)).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_formula() {
        let formula = TwoCnf::try_read("0 1\n\n-0 2\n  -2   -1  \n".as_bytes()).unwrap();

        assert_eq!(
            formula,
            TwoCnf::from_clauses([
                (Literal::positive(0), Literal::positive(1)),
                (Literal::negative(0), Literal::positive(2)),
                (Literal::negative(2), Literal::negative(1)),
            ])
        );
        assert_eq!(formula.number_of_variables(), 3);
        assert_eq!(formula.to_string(), "0 1\n-0 2\n-2 -1\n");
    }

    #[test]
    fn malformed_clauses() {
        for (input, bad_line) in [
            ("0 1\n2\n", 2),
            ("0 1 2\n", 1),
            ("\n\n0 x\n", 3),
            ("0 1\n--1 0\n", 2),
        ] {
            match TwoCnf::try_read(input.as_bytes()) {
                Err(GraphError::Parse { line, .. }) => assert_eq!(line, bad_line, "{input:?}"),
                other => panic!("{input:?} yields {other:?}"),
            }
        }
    }

    #[test]
    fn empty_input() {
        let formula: TwoCnf = "\n\n".parse().unwrap();
        assert_eq!(formula.number_of_clauses(), 0);
        assert_eq!(formula.number_of_variables(), 0);
    }
}
