use crate::data::{Field, LabelLayout};
use crate::state::store::{ScheduleEntryStore, StoreError};

/// Which cell, if any, is accepting keystrokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Idle,
    Editing { row: usize, field: Field },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusIntent {
    ClickCell { row: usize, field: Field },
    /// Enter.
    Confirm,
    /// Tab.
    Advance,
    /// Blur of the active input.
    LoseFocus,
}

/// Pure transition function for the edit-focus machine.
///
/// Clicks addressed to a row that does not exist, or to a field the layout
/// does not have, leave the state unchanged.
pub fn transition(
    state: FocusState,
    intent: FocusIntent,
    row_count: usize,
    layout: LabelLayout,
) -> FocusState {
    match intent {
        FocusIntent::ClickCell { row, field } => {
            if row < row_count && layout.has_field(field) {
                FocusState::Editing { row, field }
            } else {
                state
            }
        }
        FocusIntent::Confirm | FocusIntent::LoseFocus => FocusState::Idle,
        FocusIntent::Advance => match state {
            FocusState::Editing {
                row,
                field: Field::Start,
            } => FocusState::Editing {
                row,
                field: Field::End,
            },
            _ => FocusState::Idle,
        },
    }
}

/// Tracks edit focus and writes keystrokes straight into the store.
///
/// There is no draft buffer: every keystroke lands in the store, and leaving
/// a cell keeps whatever text it holds.
#[derive(Debug, Default)]
pub struct EditFocusController {
    state: FocusState,
}

impl EditFocusController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn is_editing(&self, row: usize, field: Field) -> bool {
        self.state == FocusState::Editing { row, field }
    }

    pub fn apply(&mut self, intent: FocusIntent, store: &ScheduleEntryStore) -> FocusState {
        let next = transition(self.state, intent, store.len(), store.layout());
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, ?intent, "focus transition");
        }
        self.state = next;
        next
    }

    /// Opens a freshly appended row for editing on its first field.
    pub fn focus_appended(&mut self, row: usize, layout: LabelLayout) {
        self.state = FocusState::Editing {
            row,
            field: layout.first_field(),
        };
    }

    pub fn reset(&mut self) {
        self.state = FocusState::Idle;
    }

    /// Appends `c` to the focused cell. Ignored while idle.
    pub fn type_char(&self, c: char, store: &mut ScheduleEntryStore) -> Result<(), StoreError> {
        self.edit(store, |value| value.push(c))
    }

    /// Removes the last character of the focused cell. Ignored while idle.
    pub fn backspace(&self, store: &mut ScheduleEntryStore) -> Result<(), StoreError> {
        self.edit(store, |value| {
            value.pop();
        })
    }

    fn edit(
        &self,
        store: &mut ScheduleEntryStore,
        change: impl FnOnce(&mut String),
    ) -> Result<(), StoreError> {
        let FocusState::Editing { row, field } = self.state else {
            return Ok(());
        };
        let mut value = store.cell(row, field).unwrap_or_default().to_string();
        change(&mut value);
        store.update_cell(row, field, &value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScheduleType;
    use chrono::NaiveDate;

    fn store(layout: LabelLayout) -> ScheduleEntryStore {
        ScheduleEntryStore::new(
            NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
            ScheduleType::Standard,
            layout,
        )
    }

    fn editing(row: usize, field: Field) -> FocusState {
        FocusState::Editing { row, field }
    }

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(EditFocusController::new().state(), FocusState::Idle);
    }

    #[test]
    fn test_click_from_idle_starts_editing() {
        let s = transition(
            FocusState::Idle,
            FocusIntent::ClickCell { row: 2, field: Field::Activity },
            9,
            LabelLayout::Single,
        );
        assert_eq!(s, editing(2, Field::Activity));
    }

    #[test]
    fn test_click_while_editing_jumps() {
        let s = transition(
            editing(2, Field::Activity),
            FocusIntent::ClickCell { row: 5, field: Field::Time },
            9,
            LabelLayout::Single,
        );
        assert_eq!(s, editing(5, Field::Time));
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let s = transition(
            editing(1, Field::Time),
            FocusIntent::ClickCell { row: 9, field: Field::Time },
            9,
            LabelLayout::Single,
        );
        assert_eq!(s, editing(1, Field::Time));
    }

    #[test]
    fn test_click_on_foreign_field_is_ignored() {
        let s = transition(
            FocusState::Idle,
            FocusIntent::ClickCell { row: 0, field: Field::End },
            9,
            LabelLayout::Single,
        );
        assert_eq!(s, FocusState::Idle);
    }

    #[test]
    fn test_confirm_and_blur_go_idle_from_any_field() {
        for field in [Field::Time, Field::Start, Field::End, Field::Activity] {
            for intent in [FocusIntent::Confirm, FocusIntent::LoseFocus] {
                let s = transition(editing(0, field), intent, 9, LabelLayout::Paired);
                assert_eq!(s, FocusState::Idle);
            }
        }
    }

    #[test]
    fn test_advance_from_start_moves_to_end() {
        let s = transition(editing(4, Field::Start), FocusIntent::Advance, 9, LabelLayout::Paired);
        assert_eq!(s, editing(4, Field::End));
    }

    #[test]
    fn test_advance_from_other_fields_goes_idle() {
        for field in [Field::Time, Field::End, Field::Activity] {
            let s = transition(editing(4, field), FocusIntent::Advance, 9, LabelLayout::Paired);
            assert_eq!(s, FocusState::Idle, "{field}");
        }
        let s = transition(FocusState::Idle, FocusIntent::Advance, 9, LabelLayout::Paired);
        assert_eq!(s, FocusState::Idle);
    }

    #[test]
    fn test_typing_updates_store_live() {
        let mut st = store(LabelLayout::Single);
        let mut focus = EditFocusController::new();
        focus.apply(FocusIntent::ClickCell { row: 0, field: Field::Activity }, &st);
        for c in "Art".chars() {
            focus.type_char(c, &mut st).unwrap();
        }
        assert_eq!(st.cell(0, Field::Activity), Some("Art"));
        focus.backspace(&mut st).unwrap();
        assert_eq!(st.cell(0, Field::Activity), Some("Ar"));
        focus.apply(FocusIntent::LoseFocus, &st);
        assert_eq!(st.cell(0, Field::Activity), Some("Ar"));
    }

    #[test]
    fn test_typing_while_idle_is_ignored() {
        let mut st = store(LabelLayout::Single);
        let before = st.snapshot();
        let focus = EditFocusController::new();
        focus.type_char('x', &mut st).unwrap();
        focus.backspace(&mut st).unwrap();
        assert_eq!(st.snapshot(), before);
    }

    #[test]
    fn test_backspace_on_empty_cell_stays_empty() {
        let mut st = store(LabelLayout::Single);
        let mut focus = EditFocusController::new();
        focus.apply(FocusIntent::ClickCell { row: 0, field: Field::Activity }, &st);
        focus.backspace(&mut st).unwrap();
        assert_eq!(st.cell(0, Field::Activity), Some(""));
    }

    #[test]
    fn test_focus_appended_uses_first_field() {
        let mut focus = EditFocusController::new();
        focus.focus_appended(9, LabelLayout::Paired);
        assert!(focus.is_editing(9, Field::Start));
        focus.reset();
        assert_eq!(focus.state(), FocusState::Idle);
    }
}
