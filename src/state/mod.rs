pub mod editor;
pub mod export;
pub mod focus;
pub mod store;

pub use editor::{Editor, Intent, Notifier};
pub use export::export_snapshot;
#[cfg(test)]
pub use export::parse_export;
pub use focus::FocusState;
pub use store::ScheduleEntryStore;
