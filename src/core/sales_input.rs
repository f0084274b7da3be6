use crate::domain::model::{SalesRecord, ITEM_COUNT};
use crate::utils::error::{Result, ValidationError};
use std::io::{BufRead, Write};

/// Parses comma-split tokens into integers.
///
/// The count is checked before the tokens, so `"a,b"` reports the wrong count.
pub fn validate<S: AsRef<str>>(raw_tokens: &[S]) -> std::result::Result<Vec<i64>, ValidationError> {
    if raw_tokens.len() != ITEM_COUNT {
        return Err(ValidationError::WrongCount {
            got: raw_tokens.len(),
            expected: ITEM_COUNT,
        });
    }

    raw_tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            token
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::NonInteger {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Splits one line of operator input on commas and validates it as a sales row.
pub fn parse_sales_line(line: &str) -> std::result::Result<SalesRecord, ValidationError> {
    let tokens: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(',').collect();
    let values = validate(&tokens)?;
    SalesRecord::try_from(values)
}

/// Keeps asking until the operator enters a valid sales row.
///
/// Returns an `UnexpectedEof` I/O error if input closes before that happens.
pub fn prompt_sales<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SalesRecord> {
    loop {
        writeln!(output, "Please enter sales data from the last market.")?;
        writeln!(output, "Data should be six numbers, separated by commas.")?;
        writeln!(output, "Example: 10,20,30,40,50,60\n")?;
        write!(output, "Enter your data here: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before valid sales data was entered",
            )
            .into());
        }

        match parse_sales_line(&line) {
            Ok(record) => {
                writeln!(output, "Data is valid!")?;
                tracing::debug!("Accepted sales data: {:?}", record.values());
                return Ok(record);
            }
            Err(e) => {
                tracing::warn!("Rejected sales input {:?}: {}", line.trim_end(), e);
                writeln!(output, "Invalid data: {}, please try again.\n", e)?;
            }
        }
    }
}
