use chrono::SecondsFormat;
use serde::Serialize;

use crate::export::{Export, ExportError};
use crate::model::PlacementRecord;

#[derive(Serialize)]
struct PlacementExportRow {
    placement_id: String,
    title: String,
    genre: String,
    pages: Option<u64>,
    outcome: String,
    recorded_at: String,
}

fn to_export_row(record: &PlacementRecord) -> PlacementExportRow {
    PlacementExportRow {
        placement_id: record.id.to_string(),
        title: record.title.clone(),
        genre: record.genre.clone(),
        pages: record.pages,
        outcome: record.outcome.as_str().to_string(),
        recorded_at: record
            .recorded_at
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

impl Export for [PlacementRecord] {
    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in self {
            wtr.serialize(to_export_row(record))?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        use std::io::Write;

        writeln!(buffer, "| Title | Genre | Pages | Outcome | Recorded |")?;
        writeln!(buffer, "|-------|-------|-------|---------|----------|")?;

        for record in self {
            let row = to_export_row(record);
            let pages = row
                .pages
                .map(|p| p.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            writeln!(
                buffer,
                "| {} | {} | {} | {} | {} |",
                row.title, row.genre, pages, row.outcome, row.recorded_at
            )?;
        }
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        let rows: Vec<PlacementExportRow> = self.iter().map(to_export_row).collect();
        serde_json::to_string(&rows).map_err(ExportError::JsonToString)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, Placement};
    use chrono::{DateTime, Utc};
    use std::str::FromStr;
    use uuid::Uuid;

    fn build_record(outcome: Placement) -> PlacementRecord {
        let book = Book::new(
            "Strata: Stories from Deep Time".to_string(),
            vec!["Laura Poppick".to_string()],
            "non-fiction".to_string(),
            Some(288),
            false,
        );
        let mut record = PlacementRecord::new(&book, outcome);
        record.id = Uuid::nil();
        record.recorded_at = DateTime::<Utc>::from_str("2025-06-01T12:00:00Z").unwrap();
        record
    }

    #[test]
    fn test_placements_to_csv() {
        let records = [build_record(Placement::Placed)];
        let expected = [
            "placement_id,title,genre,pages,outcome,recorded_at",
            "00000000-0000-0000-0000-000000000000,Strata: Stories from Deep Time,non-fiction,288,placed,2025-06-01T12:00:00Z",
            "",
        ]
        .join("\n");
        assert_eq!(records.to_csv().unwrap(), expected);
    }

    #[test]
    fn test_placements_to_md() {
        let records = [build_record(Placement::NoRoom)];
        let expected = [
            "| Title | Genre | Pages | Outcome | Recorded |",
            "|-------|-------|-------|---------|----------|",
            "| Strata: Stories from Deep Time | non-fiction | 288 | no room available | 2025-06-01T12:00:00Z |",
            "",
        ]
        .join("\n");
        assert_eq!(records.to_md().unwrap(), expected);
    }

    #[test]
    fn test_placements_to_json() {
        let records = [build_record(Placement::Placed)];
        let json = records.to_json().unwrap();
        assert!(json.contains("\"placement_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"outcome\":\"placed\""));
    }
}
