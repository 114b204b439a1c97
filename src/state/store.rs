use crate::calc::generate;
use crate::data::{Field, LabelLayout, ScheduleRow, ScheduleType};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("row {index} is out of range ({len} rows)")]
    OutOfRange { index: usize, len: usize },
    #[error("field '{field}' does not exist in the {layout} layout")]
    FieldNotInLayout { field: Field, layout: LabelLayout },
}

/// Point-in-time copy of the sheet, used for export.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub selected_date: NaiveDate,
    pub schedule_type: ScheduleType,
    pub rows: Vec<ScheduleRow>,
}

/// Owns the selected date, schedule type and the ordered row list.
///
/// Rows are replaced wholesale when the schedule type changes and grow by one
/// on append; nothing removes a row.
#[derive(Debug)]
pub struct ScheduleEntryStore {
    selected_date: NaiveDate,
    schedule_type: ScheduleType,
    layout: LabelLayout,
    rows: Vec<ScheduleRow>,
}

impl ScheduleEntryStore {
    pub fn new(selected_date: NaiveDate, schedule_type: ScheduleType, layout: LabelLayout) -> Self {
        ScheduleEntryStore {
            selected_date,
            schedule_type,
            layout,
            rows: generate(schedule_type, layout),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn schedule_type(&self) -> ScheduleType {
        self.schedule_type
    }

    pub fn layout(&self) -> LabelLayout {
        self.layout
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, field: Field) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(field))
    }

    /// `None` keeps the current date.
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        if let Some(d) = date {
            self.selected_date = d;
        }
    }

    /// Switching templates resets the sheet: every row, and any text typed
    /// into it, is replaced by a fresh generation.
    pub fn set_schedule_type(&mut self, schedule_type: ScheduleType) {
        self.schedule_type = schedule_type;
        self.rows = generate(schedule_type, self.layout);
        tracing::info!(
            schedule_type = %schedule_type,
            rows = self.rows.len(),
            "regenerated schedule"
        );
    }

    /// Returns false (and changes nothing) for a token that names no schedule type.
    pub fn set_schedule_type_token(&mut self, token: &str) -> bool {
        match token.parse() {
            Ok(t) => {
                self.set_schedule_type(t);
                true
            }
            Err(err) => {
                tracing::warn!("ignoring schedule type change: {err}");
                false
            }
        }
    }

    /// Stores `value` verbatim in the addressed cell.
    pub fn update_cell(&mut self, row: usize, field: Field, value: &str) -> Result<(), StoreError> {
        let len = self.rows.len();
        let layout = self.layout;
        let entry = self
            .rows
            .get_mut(row)
            .ok_or(StoreError::OutOfRange { index: row, len })?;
        let slot = entry
            .get_mut(field)
            .ok_or(StoreError::FieldNotInLayout { field, layout })?;
        value.clone_into(slot);
        Ok(())
    }

    /// Appends a blank row and returns its index.
    pub fn append_row(&mut self) -> usize {
        self.rows.push(ScheduleRow::blank(self.layout));
        self.rows.len() - 1
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            selected_date: self.selected_date,
            schedule_type: self.schedule_type,
            rows: self.rows.clone(),
        }
    }
}
