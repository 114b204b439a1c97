use crate::data::{AppSettings, LabelLayout, ScheduleType};
use crate::state::{Editor, ScheduleEntryStore};
use crate::ui::editor_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::{Local, NaiveDate};

/// Resolved startup parameters for the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Startup {
    pub date: NaiveDate,
    pub schedule_type: ScheduleType,
    pub layout: LabelLayout,
}

/// Command-line values win over config.yaml. An unknown `--schedule-type`
/// token is ignored like any other unrecognized selector value.
pub(crate) fn resolve_startup(
    settings: &AppSettings,
    today: NaiveDate,
    date: Option<NaiveDate>,
    schedule_type: Option<&str>,
    paired: bool,
) -> Startup {
    let schedule_type = match schedule_type.map(str::parse::<ScheduleType>) {
        Some(Ok(t)) => t,
        Some(Err(err)) => {
            tracing::warn!("{err}; using configured schedule type");
            settings.schedule_type()
        }
        None => settings.schedule_type(),
    };
    let layout = if paired {
        LabelLayout::Paired
    } else {
        settings.label_layout
    };
    Startup {
        date: date.unwrap_or(today),
        schedule_type,
        layout,
    }
}

pub fn run(date: Option<NaiveDate>, schedule_type: Option<&str>, paired: bool) -> Result<()> {
    let settings = AppSettings::load()?;
    let today = Local::now().date_naive();
    let startup = resolve_startup(&settings, today, date, schedule_type, paired);
    tracing::info!(?startup, "starting editor");

    let store = ScheduleEntryStore::new(startup.date, startup.schedule_type, startup.layout);
    let mut app = App::new(Editor::new(store), today);

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_defaults_come_from_settings() {
        let settings = AppSettings {
            default_schedule_type: "extended".to_string(),
            label_layout: LabelLayout::Paired,
        };
        let s = resolve_startup(&settings, d(2025, 1, 6), None, None, false);
        assert_eq!(
            s,
            Startup {
                date: d(2025, 1, 6),
                schedule_type: ScheduleType::Extended,
                layout: LabelLayout::Paired,
            }
        );
    }

    #[test]
    fn test_cli_values_override_settings() {
        let settings = AppSettings::default();
        let s = resolve_startup(
            &settings,
            d(2025, 1, 6),
            Some(d(2025, 2, 14)),
            Some("non-instructional"),
            true,
        );
        assert_eq!(s.date, d(2025, 2, 14));
        assert_eq!(s.schedule_type, ScheduleType::NonInstructional);
        assert_eq!(s.layout, LabelLayout::Paired);
    }

    #[test]
    fn test_unknown_cli_schedule_type_is_ignored() {
        let settings = AppSettings {
            default_schedule_type: "extended".to_string(),
            ..AppSettings::default()
        };
        let s = resolve_startup(&settings, d(2025, 1, 6), None, Some("winter"), false);
        assert_eq!(s.schedule_type, ScheduleType::Extended);
    }
}
