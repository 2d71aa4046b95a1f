//! Plain-text tables for terminal output.
//!
//! Summary rows keep their field order by going through the CSV serializer,
//! which emits headers in declaration order. Status-like columns are
//! colored by lifecycle stage.

use serde::Serialize;

const MIN_WIDTH: usize = 4;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Columns in the field order of `R`.
    pub fn from_rows<R: Serialize>(rows: &[R]) -> anyhow::Result<Self> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rows {
            writer.serialize(row)?;
        }
        let bytes = writer.into_inner().map_err(|error| anyhow::anyhow!("{error}"))?;

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()?;
        Ok(Self { headers, rows })
    }

    /// Two-column `field | value` table for a single document.
    #[must_use]
    pub fn key_value(entries: Vec<(String, String)>) -> Self {
        Self {
            headers: vec!["field".to_string(), "value".to_string()],
            rows: entries.into_iter().map(|(k, v)| vec![k, v]).collect(),
        }
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        if self.rows.is_empty() {
            return String::from("(no rows)");
        }

        let widths = column_widths(self, options.max_width);
        let status_columns: Vec<bool> = self
            .headers
            .iter()
            .map(|h| matches!(h.as_str(), "status" | "state"))
            .collect();

        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(&clip(h, *w), *w, false))
            .collect::<Vec<_>>()
            .join(GAP);
        let divider = "-".repeat(header.chars().count());

        let mut out = vec![header, divider];
        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(i, width)| {
                    let cell = clip(row.get(i).map_or("-", String::as_str), *width);
                    let padded = pad(&cell, *width, is_numeric(&cell));
                    if options.color && status_columns[i] {
                        paint(&cell, &padded)
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join(GAP);
            out.push(line.trim_end().to_string());
        }
        out.join("\n")
    }
}

/// Natural column widths, narrowed from the widest column down until the
/// table fits `max_width`.
fn column_widths(table: &Table, max_width: Option<usize>) -> Vec<usize> {
    let mut widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_WIDTH)
        })
        .collect();

    let Some(max_width) = max_width else {
        return widths;
    };
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    let mut total: usize = widths.iter().sum::<usize>() + gaps;
    while total > max_width {
        let Some((widest, _)) = widths
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > MIN_WIDTH)
            .max_by_key(|(_, w)| **w)
        else {
            break;
        };
        widths[widest] -= 1;
        total -= 1;
    }
    widths
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Weights, counts, and distances are right-aligned.
fn is_numeric(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_digit() || c == '-') && value.parse::<f64>().is_ok()
}

/// Wrap a padded cell in the color of its lifecycle stage.
fn paint(value: &str, padded: &str) -> String {
    let code = match value {
        "delivered" | "received" | "closed" | "active" | "persisted" => "32",
        "booked" | "draft" | "open" | "staged" | "manifested" | "in_transit" | "reached_hub"
        | "out_for_delivery" | "dispatched" => "33",
        "cancelled" | "undelivered" | "inactive" => "31",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
