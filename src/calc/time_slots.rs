use crate::data::{LabelLayout, ScheduleRow, ScheduleType, SlotLabel, SlotParams};

/// Decides whether a slot starting at a given minute still belongs to the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Keep a slot whose start is at or before the day's end. The last row
    /// opens exactly at `end` and has no duration.
    SlotStartWithinDay,
    /// Keep a slot only if it finishes at or before the day's end.
    SlotEndWithinDay,
}

impl BoundaryPolicy {
    fn admits(self, slot_start: u32, params: SlotParams) -> bool {
        match self {
            BoundaryPolicy::SlotStartWithinDay => slot_start <= params.end,
            BoundaryPolicy::SlotEndWithinDay => slot_start + params.interval <= params.end,
        }
    }
}

/// Boundary rule used for every generated sheet.
pub const BOUNDARY_POLICY: BoundaryPolicy = BoundaryPolicy::SlotStartWithinDay;

/// Formats minutes-from-midnight as a 12-hour clock label, e.g. `8:30 AM`.
pub fn format_clock(minutes: u32) -> String {
    let hour = minutes / 60;
    let minute = minutes % 60;
    let ampm = if hour < 12 { "AM" } else { "PM" };
    let display_hour = ((hour + 11) % 12) + 1;
    format!("{display_hour}:{minute:02} {ampm}")
}

pub fn generate(schedule_type: ScheduleType, layout: LabelLayout) -> Vec<ScheduleRow> {
    generate_with(schedule_type.params(), BOUNDARY_POLICY, layout)
}

/// Generates the sheet for a token under `policy`. An unrecognized token
/// yields the Standard parameters.
pub fn generate_for_token(
    token: &str,
    policy: BoundaryPolicy,
    layout: LabelLayout,
) -> Vec<ScheduleRow> {
    let schedule_type = token.parse().unwrap_or_else(|err| {
        tracing::warn!("{err}; generating the standard schedule");
        ScheduleType::Standard
    });
    generate_with(schedule_type.params(), policy, layout)
}

pub fn generate_with(
    params: SlotParams,
    policy: BoundaryPolicy,
    layout: LabelLayout,
) -> Vec<ScheduleRow> {
    // A zero interval would never advance.
    let step = params.interval.max(1);
    let mut rows = Vec::new();
    let mut min = params.start;
    while policy.admits(min, params) {
        let label = match layout {
            LabelLayout::Single => SlotLabel::Single {
                time: format_clock(min),
            },
            LabelLayout::Paired => SlotLabel::Paired {
                start: format_clock(min),
                end: format_clock((min + params.interval).min(params.end)),
            },
        };
        rows.push(ScheduleRow::new(label));
        min += step;
    }
    rows
}
