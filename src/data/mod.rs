pub mod app_settings;
pub mod persistence;
pub mod row;
pub mod schedule_type;

pub use app_settings::AppSettings;
pub use row::{Field, LabelLayout, ScheduleRow, SlotLabel};
pub use schedule_type::{ScheduleType, SlotParams};
