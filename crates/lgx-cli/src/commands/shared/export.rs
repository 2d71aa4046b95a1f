//! CSV export of table rows.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use lgx_core::responses::ExportResponse;
use serde::Serialize;

/// Serialize `rows` as CSV into any writer. Returns the row count.
pub fn write_rows<R: Serialize, W: Write>(rows: &[R], writer: W) -> anyhow::Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row).context("failed to write CSV row")?;
    }
    csv.flush().context("failed to flush CSV output")?;
    Ok(rows.len())
}

/// Write `rows` to `path`, or to stdout when no path is given.
pub fn write_csv<R: Serialize>(rows: &[R], path: Option<&Path>) -> anyhow::Result<ExportResponse> {
    let count = match path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_rows(rows, file)?
        }
        None => write_rows(rows, std::io::stdout().lock())?,
    };
    tracing::debug!(rows = count, path = ?path, "csv export written");
    Ok(ExportResponse {
        rows: count,
        path: path.map(|p| p.display().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Row {
        docket: &'static str,
        weight_kg: f64,
    }

    #[test]
    fn writes_header_and_rows() {
        let mut buffer = Vec::new();
        let rows = [
            Row { docket: "LGX-1001", weight_kg: 12.5 },
            Row { docket: "LGX-1002", weight_kg: 3.0 },
        ];
        let count = write_rows(&rows, &mut buffer).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "docket,weight_kg\nLGX-1001,12.5\nLGX-1002,3.0\n"
        );
    }

    #[test]
    fn writes_file_and_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let response = write_csv(&[Row { docket: "LGX-7", weight_kg: 1.0 }], Some(&path)).unwrap();
        assert_eq!(response.rows, 1);
        assert_eq!(response.path, Some(path.display().to_string()));
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("docket,weight_kg"));
    }
}
