use serde::{Deserialize, Serialize};
use std::fmt;

/// How a row's time label is shaped: one clock string, or a start/end pair.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LabelLayout {
    #[default]
    Single,
    Paired,
}

impl LabelLayout {
    /// Editable fields in display order. The first entry receives focus
    /// when a row is appended.
    pub fn fields(self) -> &'static [Field] {
        match self {
            LabelLayout::Single => &[Field::Time, Field::Activity],
            LabelLayout::Paired => &[Field::Start, Field::End, Field::Activity],
        }
    }

    pub fn first_field(self) -> Field {
        self.fields()[0]
    }

    pub fn has_field(self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    pub fn empty_label(self) -> SlotLabel {
        match self {
            LabelLayout::Single => SlotLabel::Single {
                time: String::new(),
            },
            LabelLayout::Paired => SlotLabel::Paired {
                start: String::new(),
                end: String::new(),
            },
        }
    }
}

impl fmt::Display for LabelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelLayout::Single => f.write_str("single"),
            LabelLayout::Paired => f.write_str("paired"),
        }
    }
}

/// The closed set of cells a row exposes for editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Time,
    Start,
    End,
    Activity,
}

impl Field {
    pub fn title(self) -> &'static str {
        match self {
            Field::Time => "Time",
            Field::Start => "Start",
            Field::End => "End",
            Field::Activity => "Activity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Time => f.write_str("time"),
            Field::Start => f.write_str("start"),
            Field::End => f.write_str("end"),
            Field::Activity => f.write_str("activity"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum SlotLabel {
    Single { time: String },
    Paired { start: String, end: String },
}

/// One time slot. Serializes flat as `{time, activity}` or
/// `{start, end, activity}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleRow {
    #[serde(flatten)]
    pub label: SlotLabel,
    pub activity: String,
}

impl ScheduleRow {
    pub fn new(label: SlotLabel) -> Self {
        ScheduleRow {
            label,
            activity: String::new(),
        }
    }

    pub fn blank(layout: LabelLayout) -> Self {
        ScheduleRow::new(layout.empty_label())
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match (&self.label, field) {
            (_, Field::Activity) => Some(&self.activity),
            (SlotLabel::Single { time }, Field::Time) => Some(time),
            (SlotLabel::Paired { start, .. }, Field::Start) => Some(start),
            (SlotLabel::Paired { end, .. }, Field::End) => Some(end),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> Option<&mut String> {
        match (&mut self.label, field) {
            (_, Field::Activity) => Some(&mut self.activity),
            (SlotLabel::Single { time }, Field::Time) => Some(time),
            (SlotLabel::Paired { start, .. }, Field::Start) => Some(start),
            (SlotLabel::Paired { end, .. }, Field::End) => Some(end),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(time: &str, activity: &str) -> ScheduleRow {
        ScheduleRow {
            label: SlotLabel::Single {
                time: time.to_string(),
            },
            activity: activity.to_string(),
        }
    }

    #[test]
    fn test_fields_per_layout() {
        assert_eq!(LabelLayout::Single.fields(), &[Field::Time, Field::Activity]);
        assert_eq!(
            LabelLayout::Paired.fields(),
            &[Field::Start, Field::End, Field::Activity]
        );
        assert_eq!(LabelLayout::Single.first_field(), Field::Time);
        assert_eq!(LabelLayout::Paired.first_field(), Field::Start);
    }

    #[test]
    fn test_has_field() {
        assert!(LabelLayout::Single.has_field(Field::Time));
        assert!(!LabelLayout::Single.has_field(Field::End));
        assert!(LabelLayout::Paired.has_field(Field::End));
        assert!(!LabelLayout::Paired.has_field(Field::Time));
    }

    #[test]
    fn test_blank_row_is_empty() {
        let row = ScheduleRow::blank(LabelLayout::Paired);
        assert_eq!(row.get(Field::Start), Some(""));
        assert_eq!(row.get(Field::End), Some(""));
        assert_eq!(row.get(Field::Activity), Some(""));
    }

    #[test]
    fn test_get_mismatched_field_is_none() {
        let row = single("8:30 AM", "");
        assert_eq!(row.get(Field::Start), None);
        assert_eq!(row.get(Field::Time), Some("8:30 AM"));
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut row = single("8:30 AM", "");
        *row.get_mut(Field::Activity).unwrap() = "Reading".to_string();
        assert_eq!(row.activity, "Reading");
        assert!(row.get_mut(Field::End).is_none());
    }

    #[test]
    fn test_single_row_serializes_flat() {
        let json = serde_json::to_value(single("9:00 AM", "Math")).unwrap();
        assert_eq!(json, serde_json::json!({ "time": "9:00 AM", "activity": "Math" }));
    }

    #[test]
    fn test_paired_row_parses_from_flat_object() {
        let row: ScheduleRow =
            serde_json::from_str(r#"{"start":"9:00 AM","end":"10:00 AM","activity":"Lab"}"#)
                .unwrap();
        assert!(matches!(row.label, SlotLabel::Paired { .. }));
        assert_eq!(row.get(Field::End), Some("10:00 AM"));
        assert_eq!(row.activity, "Lab");
    }

    #[test]
    fn test_layout_yaml_tokens() {
        let yaml = serde_norway::to_string(&LabelLayout::Paired).unwrap();
        assert_eq!(yaml.trim(), "paired");
        let parsed: LabelLayout = serde_norway::from_str("single").unwrap();
        assert_eq!(parsed, LabelLayout::Single);
    }
}
