use crate::data::{ScheduleRow, ScheduleType};
use crate::state::store::Snapshot;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The structured form handed to the notification pane on save.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub date: String,
    pub schedule_type: ScheduleType,
    pub entries: Vec<ScheduleRow>,
}

impl From<&Snapshot> for ExportDocument {
    fn from(snapshot: &Snapshot) -> Self {
        ExportDocument {
            date: snapshot.selected_date.format(DATE_FORMAT).to_string(),
            schedule_type: snapshot.schedule_type,
            entries: snapshot.rows.clone(),
        }
    }
}

pub fn export_snapshot(snapshot: &Snapshot) -> Result<String> {
    serde_json::to_string_pretty(&ExportDocument::from(snapshot))
        .context("failed to serialize schedule")
}

#[cfg(test)]
pub fn parse_export(text: &str) -> Result<ExportDocument> {
    serde_json::from_str(text).context("failed to parse exported schedule")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Field, LabelLayout};
    use crate::state::store::ScheduleEntryStore;
    use chrono::NaiveDate;

    fn store(layout: LabelLayout) -> ScheduleEntryStore {
        ScheduleEntryStore::new(
            NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            ScheduleType::NonInstructional,
            layout,
        )
    }

    #[test]
    fn test_export_keys_and_date_format() {
        let text = export_snapshot(&store(LabelLayout::Single).snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["date"], "2025-03-07");
        assert_eq!(value["scheduleType"], "non-instructional");
        assert_eq!(value["entries"][0]["time"], "9:00 AM");
        assert_eq!(value["entries"][0]["activity"], "");
        assert_eq!(value["entries"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_export_paired_rows() {
        let text = export_snapshot(&store(LabelLayout::Paired).snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["entries"][0]["start"], "9:00 AM");
        assert_eq!(value["entries"][0]["end"], "10:30 AM");
        assert!(value["entries"][0].get("time").is_none());
    }

    #[test]
    fn test_export_then_parse_reproduces_edits() {
        let mut s = store(LabelLayout::Paired);
        s.update_cell(0, Field::Activity, "Staff meeting").unwrap();
        s.update_cell(1, Field::Start, "10:45 AM").unwrap();
        let idx = s.append_row();
        s.update_cell(idx, Field::End, "4:00 PM").unwrap();

        let snap = s.snapshot();
        let doc = parse_export(&export_snapshot(&snap).unwrap()).unwrap();
        assert_eq!(doc.entries, snap.rows);
        assert_eq!(doc.schedule_type, ScheduleType::NonInstructional);
    }

    #[test]
    fn test_appended_row_exports_empty_strings() {
        let mut s = store(LabelLayout::Single);
        let before = s.snapshot().rows.len();
        s.append_row();
        let doc = parse_export(&export_snapshot(&s.snapshot()).unwrap()).unwrap();
        assert_eq!(doc.entries.len(), before + 1);
        let last = doc.entries.last().unwrap();
        assert_eq!(last.get(Field::Time), Some(""));
        assert_eq!(last.activity, "");
    }

    #[test]
    fn test_parse_export_rejects_garbage() {
        let err = parse_export("{ not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse exported schedule"));
    }
}
