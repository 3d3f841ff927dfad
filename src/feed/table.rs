// table.rs
use crate::domain::normalize::{is_absent, normalize_codlocal};
use crate::domain::{Field, Record, Table};
use crate::feed::FeedError;
use csv::ReaderBuilder;

/// Parses the published CSV into a `Table`.
///
/// Every cell is kept as text. Header names are trimmed, short rows are
/// allowed, and the facility code is normalized in place so lookups and the
/// selector always see the zero-padded form.
pub fn parse_table(csv_text: &str) -> Result<Table, FeedError> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let key = Field::Codlocal.aliases()[0];
    if !headers.iter().any(|h| h == key) {
        return Err(FeedError::MissingColumn(key));
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let raw = result?;
        let mut record: Record = headers
            .iter()
            .zip(raw.iter())
            .map(|(h, v)| (h.as_str(), v))
            .collect();

        let code = record
            .get(key)
            .filter(|c| !is_absent(Some(*c)))
            .map(normalize_codlocal);

        match code {
            Some(code) => {
                record.insert(key, code);
                rows.push(record);
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} rows without {key}");
    }

    let table = Table::from_rows(rows);
    if table.keys().len() < table.len() {
        log::warn!(
            "Feed has {} duplicate {key} rows; keeping the first of each",
            table.len() - table.keys().len()
        );
    }

    Ok(table)
}
