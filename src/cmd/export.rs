use crate::data::{LabelLayout, ScheduleType};
use crate::state::{export_snapshot, ScheduleEntryStore};
use anyhow::Result;
use chrono::NaiveDate;

/// Prints the snapshot of a freshly generated sheet.
pub fn run(date: NaiveDate, schedule_type: ScheduleType, layout: LabelLayout) -> Result<()> {
    let mut out = std::io::stdout();
    write_export(date, schedule_type, layout, &mut out)
}

pub(crate) fn write_export<W: std::io::Write>(
    date: NaiveDate,
    schedule_type: ScheduleType,
    layout: LabelLayout,
    out: &mut W,
) -> Result<()> {
    let store = ScheduleEntryStore::new(date, schedule_type, layout);
    writeln!(out, "{}", export_snapshot(&store.snapshot())?)?;
    Ok(())
}
