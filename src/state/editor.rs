use crate::data::Field;
use crate::state::export::export_snapshot;
use crate::state::focus::{EditFocusController, FocusIntent, FocusState};
use crate::state::store::ScheduleEntryStore;
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::VecDeque;

/// Receives the serialized snapshot on save.
pub trait Notifier {
    fn notify(&mut self, title: &str, body: &str);
}

/// A user intent forwarded by the rendering surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    SetDate(Option<NaiveDate>),
    SetScheduleType(String),
    ClickCell { row: usize, field: Field },
    Char(char),
    Backspace,
    Confirm,
    Advance,
    LoseFocus,
    AppendRow,
    Save,
}

/// Owns the sheet and its focus, and applies intents one at a time in the
/// order they were submitted.
#[derive(Debug)]
pub struct Editor {
    store: ScheduleEntryStore,
    focus: EditFocusController,
    queue: VecDeque<Intent>,
}

impl Editor {
    pub fn new(store: ScheduleEntryStore) -> Self {
        Editor {
            store,
            focus: EditFocusController::new(),
            queue: VecDeque::new(),
        }
    }

    pub fn store(&self) -> &ScheduleEntryStore {
        &self.store
    }

    pub fn focus(&self) -> FocusState {
        self.focus.state()
    }

    pub fn is_editing(&self, row: usize, field: Field) -> bool {
        self.focus.is_editing(row, field)
    }

    pub fn submit(&mut self, intent: Intent) {
        self.queue.push_back(intent);
    }

    pub fn process_pending(&mut self, notifier: &mut dyn Notifier) {
        while let Some(intent) = self.queue.pop_front() {
            self.apply(intent, notifier);
        }
    }

    /// Submits one intent and drains the queue.
    pub fn dispatch(&mut self, intent: Intent, notifier: &mut dyn Notifier) {
        self.submit(intent);
        self.process_pending(notifier);
    }

    /// Serializes the current sheet. Reads only.
    pub fn handle_save(&self) -> Result<String> {
        export_snapshot(&self.store.snapshot())
    }

    fn apply(&mut self, intent: Intent, notifier: &mut dyn Notifier) {
        let edited = match intent {
            Intent::SetDate(date) => {
                self.store.set_date(date);
                Ok(())
            }
            Intent::SetScheduleType(token) => {
                if self.store.set_schedule_type_token(&token) {
                    self.focus.reset();
                }
                Ok(())
            }
            Intent::ClickCell { row, field } => {
                self.focus.apply(FocusIntent::ClickCell { row, field }, &self.store);
                Ok(())
            }
            Intent::Confirm => {
                self.focus.apply(FocusIntent::Confirm, &self.store);
                Ok(())
            }
            Intent::Advance => {
                self.focus.apply(FocusIntent::Advance, &self.store);
                Ok(())
            }
            Intent::LoseFocus => {
                self.focus.apply(FocusIntent::LoseFocus, &self.store);
                Ok(())
            }
            Intent::Char(c) => self.focus.type_char(c, &mut self.store),
            Intent::Backspace => self.focus.backspace(&mut self.store),
            Intent::AppendRow => {
                let row = self.store.append_row();
                self.focus.focus_appended(row, self.store.layout());
                Ok(())
            }
            Intent::Save => {
                match self.handle_save() {
                    Ok(body) => {
                        tracing::info!(
                            date = %self.store.selected_date(),
                            rows = self.store.len(),
                            "schedule saved"
                        );
                        notifier.notify("Schedule Saved", &body);
                    }
                    Err(err) => tracing::error!("save failed: {err:#}"),
                }
                Ok(())
            }
        };
        if let Err(err) = edited {
            tracing::debug!("edit dropped: {err}");
        }
    }
}
