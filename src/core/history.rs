use crate::core::SheetStore;
use crate::utils::error::Result;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown format '{}', expected table or csv", other)),
        }
    }
}

pub async fn fetch_sales_history<S: SheetStore>(store: &S, worksheet: &str) -> Result<Vec<Vec<String>>> {
    let rows = store.read_all_rows(worksheet).await?;
    tracing::info!("Read {} rows from worksheet '{}'", rows.len(), worksheet);
    Ok(rows)
}

pub fn render<W: Write>(rows: &[Vec<String>], format: OutputFormat, out: &mut W) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "The worksheet is empty.")?;
        return Ok(());
    }

    match format {
        OutputFormat::Table => render_table(rows, out),
        OutputFormat::Csv => render_csv(rows, out),
    }
}

/// Left-aligned columns, padded to the widest cell; ragged rows are padded with blanks.
fn render_table<W: Write>(rows: &[Vec<String>], out: &mut W) -> Result<()> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for row in rows {
        let line = (0..columns)
            .map(|i| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = widths[i])
            })
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn render_csv<W: Write>(rows: &[Vec<String>], out: &mut W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Vec<String>> {
        [
            vec!["cheese", "ham", "turkey"],
            vec!["10", "200", "3"],
            vec!["7", "8"],
        ]
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let mut out = Vec::new();
        render(&sample(), OutputFormat::Table, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "cheese  ham  turkey");
        assert_eq!(lines[1], "10      200  3");
        assert_eq!(lines[2], "7       8");
    }

    #[test]
    fn test_render_csv() {
        let mut out = Vec::new();
        render(&sample(), OutputFormat::Csv, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "cheese,ham,turkey\n10,200,3\n7,8\n"
        );
    }

    #[test]
    fn test_render_empty_worksheet() {
        let mut out = Vec::new();
        render(&[], OutputFormat::Csv, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "The worksheet is empty.\n");
    }
}
