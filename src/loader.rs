use std::{
    num::ParseIntError,
    path::{Path, PathBuf},
    str::FromStr,
};

use logos::Logos;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::DayRecord;

const HEADER_TOKEN: &str = "date";

#[derive(Logos, Debug, PartialEq)]
enum Token {
    #[token(",")]
    Comma,
    #[regex(r"\r\n|\r|\n")]
    Crlf,
    // `""` inside quotes is an escaped quote
    #[regex(r#""([^"]|"")*""#)]
    Quoted,
    #[regex(r#"[^,"\r\n][^,\r\n]*"#)]
    Field,
}

/// All the days of a weather file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub days: Vec<DayRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[derive(Debug, Error, miette::Diagnostic)]
pub enum LoadError {
    #[error("Could not read `{}`", path.display())]
    #[diagnostic(code(weather::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line}: {reason}")]
    #[diagnostic(code(weather::load::lex))]
    Lex { line: usize, reason: &'static str },
    #[error("Line {line}: expected 3 fields (date, min, max), found {found}")]
    #[diagnostic(code(weather::load::missing_field))]
    MissingField { line: usize, found: usize },
    #[error("Line {line}: {column} temperature `{value}` is not an integer")]
    #[diagnostic(code(weather::load::bad_temperature))]
    BadTemperature {
        line: usize,
        column: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Read a weather CSV file.
///
/// The whole file is read before parsing starts, nothing stays open once this
/// returns.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = Dataset::from_str(&content)?;
    debug!(path = %path.display(), days = dataset.len(), "loaded weather data");
    Ok(dataset)
}

impl FromStr for Dataset {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('\u{feff}').unwrap_or(s);
        let mut days = Vec::new();

        for row in split_rows(s)? {
            if row.fields[0] == HEADER_TOKEN {
                trace!(line = row.line, "skipping header row");
                continue;
            }

            let day = row.into_day()?;
            if day.min_temp > day.max_temp {
                warn!(
                    date = %day.date,
                    min = day.min_temp,
                    max = day.max_temp,
                    "minimum above maximum"
                );
            }
            days.push(day);
        }

        Ok(Self { days })
    }
}

/// One non-empty CSV line. `fields` always holds at least one entry.
#[derive(Debug, PartialEq)]
struct Row {
    line: usize,
    fields: Vec<String>,
}

impl Row {
    fn into_day(self) -> Result<DayRecord, LoadError> {
        let line = self.line;
        let found = self.fields.len();
        let mut fields = self.fields.into_iter();
        let (Some(date), Some(min), Some(max)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(LoadError::MissingField { line, found });
        };

        Ok(DayRecord {
            date,
            min_temp: parse_temperature(line, "minimum", min)?,
            max_temp: parse_temperature(line, "maximum", max)?,
        })
    }
}

fn parse_temperature(line: usize, column: &'static str, value: String) -> Result<i32, LoadError> {
    match value.trim().parse() {
        Ok(temp) => Ok(temp),
        Err(source) => Err(LoadError::BadTemperature {
            line,
            column,
            value,
            source,
        }),
    }
}

fn split_rows(s: &str) -> Result<Vec<Row>, LoadError> {
    let mut lexer = Token::lexer(s);
    let mut rows = Vec::new();

    let mut line = 1;
    let mut row_line = 1;
    let mut fields: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    while let Some(token) = lexer.next() {
        match token {
            // text right after a closing quote belongs to the same field
            Ok(Token::Field) => current
                .get_or_insert_with(String::new)
                .push_str(lexer.slice()),
            Ok(Token::Quoted) => {
                let slice = lexer.slice();
                line += slice.matches('\n').count();
                current
                    .get_or_insert_with(String::new)
                    .push_str(&slice[1..slice.len() - 1].replace("\"\"", "\""));
            }
            Ok(Token::Comma) => fields.push(current.take().unwrap_or_default()),
            Ok(Token::Crlf) => {
                finish_row(&mut rows, row_line, &mut fields, &mut current);
                line += 1;
                row_line = line;
            }
            Err(()) => {
                let reason = if lexer.slice().starts_with('"') {
                    "unterminated quoted field"
                } else {
                    "unexpected character"
                };
                return Err(LoadError::Lex { line, reason });
            }
        }
    }
    finish_row(&mut rows, row_line, &mut fields, &mut current);

    Ok(rows)
}

fn finish_row(
    rows: &mut Vec<Row>,
    line: usize,
    fields: &mut Vec<String>,
    current: &mut Option<String>,
) {
    // blank line
    if fields.is_empty() && current.is_none() {
        return;
    }
    fields.push(current.take().unwrap_or_default());
    rows.push(Row {
        line,
        fields: std::mem::take(fields),
    });
}
