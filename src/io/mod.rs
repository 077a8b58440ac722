/*!
# IO

Utilities for reading and writing graphs as whitespace-delimited text.

## Format

A graph file lists the number of vertices `V`, the number of edges `E` and then `E` edge records
`u v [w]`, where `u` and `v` are 0-based endpoints and `w` is the weight (or capacity) of weighted
edge kinds:
```text
4
3
0 1 0.5
1 2 1.25
2 3 -2
```
Tokens may be separated by arbitrary whitespace, including line breaks. Lines starting with a
configurable comment identifier are skipped.

Malformed input (negative or missing counts, endpoints out of range, unparsable or non-finite weights,
trailing tokens) is rejected with [`GraphError::Parse`] naming the offending line.

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`EdgeListRead`] and [`EdgeListWrite`] are shorthands on the representations themselves.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Lines, Write},
    path::Path,
    str::FromStr,
};

use crate::error::*;

pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Shorthand for creating a parse error at a given line
macro_rules! parse_error {
    ($line: expr, $($info: tt)+) => {
        GraphError::Parse {
            line: $line,
            reason: format!($($info)+),
        }
    };
}

/// Shorthand for returning a parse error early when a condition fails
macro_rules! raise_error_unless {
    ($cond: expr, $line: expr, $($info: tt)+) => {
        if !($cond) {
            return Err(parse_error!($line, $($info)+));
        }
    };
}

use parse_error;
use raise_error_unless;

/// Splits the non-comment lines of a reader into whitespace-delimited tokens
/// while keeping track of the current (1-based) line number
pub(crate) struct TokenReader<'a, R> {
    lines: Lines<R>,
    line: usize,
    tokens: std::vec::IntoIter<String>,
    comment_identifier: Option<&'a str>,
}

impl<'a, R: BufRead> TokenReader<'a, R> {
    pub(crate) fn new(reader: R, comment_identifier: Option<&'a str>) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            tokens: Vec::new().into_iter(),
            comment_identifier,
        }
    }

    /// Returns the line of the most recently returned token
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token or `None` at the end of the input
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.tokens.next() {
                return Ok(Some(token));
            }

            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line?;
            self.line += 1;

            if self
                .comment_identifier
                .is_some_and(|c| line.trim_start().starts_with(c))
            {
                continue;
            }

            self.tokens = line
                .split_whitespace()
                .map(String::from)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }

    /// Parses the next token as a `T`; `name` describes the expected value in error messages
    pub(crate) fn parse_next<T: FromStr>(&mut self, name: &str) -> Result<T> {
        let token = self.next_token()?;
        let Some(token) = token else {
            return Err(parse_error!(
                self.line,
                "premature end of input when parsing {name}"
            ));
        };

        token
            .parse()
            .map_err(|_| parse_error!(self.line, "cannot parse {name} from `{token}`"))
    }

    /// Fails if there are tokens left
    pub(crate) fn expect_end(&mut self) -> Result<()> {
        let token = self.next_token()?;
        raise_error_unless!(
            token.is_none(),
            self.line,
            "unexpected trailing token `{}`",
            token.unwrap_or_default()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines_and_skip_comments() {
        let input = "# header\n 3   1\n\n# edge\n2\n   x";
        let mut tokens = TokenReader::new(input.as_bytes(), Some("#"));

        assert_eq!(tokens.parse_next::<u32>("a").unwrap(), 3);
        assert_eq!(tokens.line(), 2);
        assert_eq!(tokens.parse_next::<u32>("b").unwrap(), 1);
        assert_eq!(tokens.parse_next::<u32>("c").unwrap(), 2);
        assert_eq!(tokens.line(), 5);

        assert!(matches!(
            tokens.parse_next::<u32>("d"),
            Err(GraphError::Parse { line: 6, .. })
        ));
        assert!(tokens.expect_end().is_ok());
    }

    #[test]
    fn comments_are_tokens_without_identifier() {
        let mut tokens = TokenReader::new("# 1".as_bytes(), None);
        assert!(tokens.parse_next::<u32>("count").is_err());
        assert!(tokens.parse_next::<u32>("count").is_ok());
        assert!(matches!(
            tokens.parse_next::<u32>("count"),
            Err(GraphError::Parse { line: 1, reason }) if reason.contains("premature end")
        ));
    }
}
