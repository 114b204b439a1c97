use crate::data::{Field, ScheduleType};
use crate::state::{Editor, FocusState, Intent, Notifier};
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

const EDIT_BG: Color = Color::Rgb(40, 44, 52);
const HEADER_BG: Color = Color::Rgb(40, 44, 52);
const TOAST_HEIGHT: u16 = 14;

/// Last notification shown in the toast pane.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct ToastSlot(pub Option<Toast>);

impl Notifier for ToastSlot {
    fn notify(&mut self, title: &str, body: &str) {
        self.0 = Some(Toast {
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}

pub struct App {
    editor: Editor,
    today: NaiveDate,
    /// Browse cursor while no cell is being edited.
    cursor_row: usize,
    /// Index into the layout's field list.
    cursor_col: usize,
    toast: ToastSlot,
    table_state: TableState,
}

impl App {
    pub fn new(editor: Editor, today: NaiveDate) -> Self {
        App {
            editor,
            today,
            cursor_row: 0,
            cursor_col: 0,
            toast: ToastSlot::default(),
            table_state: TableState::default(),
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        self.editor.dispatch(intent, &mut self.toast);
        self.sync_cursor();
    }

    /// Keeps the browse cursor on the focused cell and inside the table.
    fn sync_cursor(&mut self) {
        let fields = self.editor.store().layout().fields();
        if let FocusState::Editing { row, field } = self.editor.focus() {
            self.cursor_row = row;
            self.cursor_col = fields.iter().position(|f| *f == field).unwrap_or(0);
        }
        let len = self.editor.store().len();
        self.cursor_row = self.cursor_row.min(len.saturating_sub(1));
        self.cursor_col = self.cursor_col.min(fields.len() - 1);
    }

    fn cursor_field(&self) -> Field {
        self.editor.store().layout().fields()[self.cursor_col]
    }

    fn shift_date(&mut self, days: i64) {
        let date = self
            .editor
            .store()
            .selected_date()
            .checked_add_signed(Duration::days(days));
        self.dispatch(Intent::SetDate(date));
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if let FocusState::Editing { .. } = self.editor.focus() {
            match code {
                KeyCode::Enter => self.dispatch(Intent::Confirm),
                KeyCode::Tab => self.dispatch(Intent::Advance),
                KeyCode::Esc => self.dispatch(Intent::LoseFocus),
                KeyCode::Backspace => self.dispatch(Intent::Backspace),
                KeyCode::Char(c) if modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                    self.dispatch(Intent::Char(c))
                }
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Up => {
                self.cursor_row = self.cursor_row.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.cursor_row + 1 < self.editor.store().len() {
                    self.cursor_row += 1;
                }
            }
            KeyCode::Left => {
                self.cursor_col = self.cursor_col.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor_col + 1 < self.editor.store().layout().fields().len() {
                    self.cursor_col += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                let field = self.cursor_field();
                self.dispatch(Intent::ClickCell {
                    row: self.cursor_row,
                    field,
                });
            }
            KeyCode::Char('[') => self.shift_date(-1),
            KeyCode::Char(']') => self.shift_date(1),
            KeyCode::Char('{') => self.shift_date(-7),
            KeyCode::Char('}') => self.shift_date(7),
            KeyCode::Char('T') => self.dispatch(Intent::SetDate(Some(self.today))),
            KeyCode::Char('t') => {
                let next = self.editor.store().schedule_type().next();
                self.dispatch(Intent::SetScheduleType(next.token().to_string()));
            }
            KeyCode::Char('a') => self.dispatch(Intent::AppendRow),
            KeyCode::Char('s') => self.dispatch(Intent::Save),
            KeyCode::Esc => self.toast.0 = None,
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    pub fn render(&mut self, f: &mut Frame) {
        let toast_height = if self.toast.0.is_some() { TOAST_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // date + schedule type
                Constraint::Min(6),               // slot table
                Constraint::Length(toast_height), // last save
                Constraint::Length(3),            // key help
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_table(f, chunks[1]);
        self.render_toast(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let store = self.editor.store();
        let line = Line::from(vec![
            Span::styled("Date: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(long_date(store.selected_date())),
            Span::raw("    "),
            Span::styled("Schedule: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                store.schedule_type().display_name(),
                Style::default().fg(schedule_color(store.schedule_type())),
            ),
        ]);
        let p = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Plan activities by time slot for the day "),
        );
        f.render_widget(p, area);
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        let store = self.editor.store();
        let fields = store.layout().fields();
        let editing = matches!(self.editor.focus(), FocusState::Editing { .. });

        let header = Row::new(fields.iter().map(|field| {
            Cell::from(field.title()).style(Style::default().add_modifier(Modifier::BOLD))
        }))
        .style(Style::default().bg(HEADER_BG));

        let rows: Vec<Row> = store
            .rows()
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let cells: Vec<Cell> = fields
                    .iter()
                    .enumerate()
                    .map(|(col, &field)| {
                        let value = entry.get(field).unwrap_or_default();
                        if self.editor.is_editing(idx, field) {
                            Cell::from(format!("{value}▏"))
                                .style(Style::default().bg(EDIT_BG).fg(Color::White))
                        } else {
                            let mut cell = if field == Field::Activity && value.is_empty() {
                                Cell::from("Enter activity").style(
                                    Style::default()
                                        .fg(Color::DarkGray)
                                        .add_modifier(Modifier::ITALIC),
                                )
                            } else {
                                Cell::from(value.to_string())
                            };
                            if !editing && idx == self.cursor_row && col == self.cursor_col {
                                cell = cell.style(Style::default().add_modifier(Modifier::REVERSED));
                            }
                            cell
                        }
                    })
                    .collect();
                Row::new(cells)
            })
            .collect();

        let widths: Vec<Constraint> = fields
            .iter()
            .map(|field| match field {
                Field::Activity => Constraint::Min(20),
                _ => Constraint::Length(12),
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(" Schedule "));

        self.table_state.select(Some(self.cursor_row));
        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_toast(&self, f: &mut Frame, area: Rect) {
        let Some(toast) = &self.toast.0 else {
            return;
        };
        let p = Paragraph::new(toast.body.as_str())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", toast.title))
                    .style(Style::default().fg(Color::Green)),
            );
        f.render_widget(p, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let text = match self.editor.focus() {
            FocusState::Editing { .. } => "type to edit · Enter done · Tab next · Esc leave cell",
            FocusState::Idle => {
                "arrows move · Enter edit · a add row · t schedule type · [ ] day · { } week · T today · s save · q quit"
            }
        };
        let p = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Long date like `September 8th, 2025`.
pub(crate) fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

pub(crate) fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn schedule_color(schedule_type: ScheduleType) -> Color {
    match schedule_type {
        ScheduleType::Standard => Color::Cyan,
        ScheduleType::Extended => Color::Yellow,
        ScheduleType::NonInstructional => Color::Magenta,
    }
}
