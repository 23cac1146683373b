// Copyright (c) 2015-2021 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Reading files in DIMACS format.
//!
//! A DIMACS file is line based. Empty lines and lines starting with `c` are
//! comments, every other line starts with a one letter descriptor followed
//! by whitespace separated fields.

pub mod max;

use std::fmt;
use std::io::{self, BufRead, BufReader, Lines, Read};
use std::str::FromStr;

use thiserror::Error;

/// Error when reading a file in DIMACS format.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Format error on line {line}: {msg}")]
    Format { line: usize, msg: String },
    #[error("Data error on line {line}: {msg}")]
    Data { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reads the non-comment lines of a DIMACS file.
struct LineReader<R> {
    lines: Lines<BufReader<R>>,
    line_number: usize,
}

impl<R: Read> LineReader<R> {
    fn new(reader: R) -> Self {
        LineReader {
            lines: BufReader::new(reader).lines(),
            line_number: 0,
        }
    }

    /// Return the fields of the next non-comment line.
    fn next_line(&mut self) -> Result<Option<Fields>> {
        for line in &mut self.lines {
            let line = line?;
            self.line_number += 1;
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('c') {
                continue;
            }
            return Ok(Some(Fields {
                line: self.line_number,
                fields: line.split_whitespace().map(String::from).collect::<Vec<_>>().into_iter(),
            }));
        }
        Ok(None)
    }

    /// Return the fields following the descriptor of the next line.
    ///
    /// It is an error if there is no next line or if its descriptor is not
    /// `descriptor`.
    fn expect_line(&mut self, descriptor: &str) -> Result<Fields> {
        let mut fields = self.next_line()?.ok_or_else(|| Error::Format {
            line: self.line_number,
            msg: format!("unexpected end of file, expected '{}' line", descriptor),
        })?;
        let d = fields.str()?;
        if d != descriptor {
            return Err(Error::Format {
                line: fields.line,
                msg: format!("unexpected line, expected '{}', got '{}'", descriptor, d),
            });
        }
        Ok(fields)
    }
}

/// The remaining fields of a line.
struct Fields {
    line: usize,
    fields: std::vec::IntoIter<String>,
}

impl Fields {
    fn str(&mut self) -> Result<String> {
        let line = self.line;
        self.fields.next().ok_or_else(|| Error::Format {
            line,
            msg: "missing field".to_string(),
        })
    }

    fn number<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let line = self.line;
        self.str()?.parse().map_err(|e| Error::Format {
            line,
            msg: format!("{}", e),
        })
    }

    /// Ensures that all fields have been consumed.
    fn end(&mut self) -> Result<()> {
        match self.fields.next() {
            Some(s) => Err(Error::Format {
                line: self.line,
                msg: format!("unexpected field at end of line: {}", s),
            }),
            None => Ok(()),
        }
    }
}
