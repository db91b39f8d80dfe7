use std::iter::once;

use chrono::{Local, NaiveDate};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use rust_decimal::Decimal;

use crate::errors::SpesaError;
use crate::format::format_amount;
use crate::ledger::{Ledger, SortDirection};
use crate::parse::parse_amount;
use crate::SpesaConfig;

use super::actions::{
    form_event, key_pressed, table_action, DashboardAction, EditAction, FormEvent,
};
use super::chart::render_categories;
use super::TuiWidget;

/// A single editable text field with a character cursor.
#[derive(Debug, Default)]
struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    fn with_value(value: String) -> Self {
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_char(&mut self, c: char) {
        let before = self.value.chars().take(self.cursor);
        let after = self.value.chars().skip(self.cursor);
        self.value = before.chain(once(c)).chain(after).collect();
        self.cursor += 1;
    }

    fn delete_left(&mut self) {
        if self.cursor > 0 {
            let before = self.value.chars().take(self.cursor - 1);
            let after = self.value.chars().skip(self.cursor);
            self.value = before.chain(after).collect();
            self.cursor -= 1;
        }
    }

    fn delete_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            let before = self.value.chars().take(self.cursor);
            let after = self.value.chars().skip(self.cursor + 1);
            self.value = before.chain(after).collect();
        }
    }

    fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Title,
    Amount,
    Date,
    Category,
}

impl FormField {
    const ALL: [FormField; 4] = [Self::Title, Self::Amount, Self::Date, Self::Category];

    fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Amount => "Amount",
            Self::Date => "Date",
            Self::Category => "Category",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Title => Self::Category,
            Self::Amount => Self::Title,
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
        }
    }
}

#[derive(Debug)]
struct ExpenseForm {
    title: InputField,
    amount: InputField,
    date: InputField,
    category: InputField,
}

impl ExpenseForm {
    fn new() -> Self {
        Self {
            title: InputField::default(),
            amount: InputField::default(),
            date: InputField::with_value(Local::now().date_naive().to_string()),
            category: InputField::default(),
        }
    }

    fn field(&self, field: FormField) -> &InputField {
        match field {
            FormField::Title => &self.title,
            FormField::Amount => &self.amount,
            FormField::Date => &self.date,
            FormField::Category => &self.category,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut InputField {
        match field {
            FormField::Title => &mut self.title,
            FormField::Amount => &mut self.amount,
            FormField::Date => &mut self.date,
            FormField::Category => &mut self.category,
        }
    }

    /// Checks the submission rules: all four fields filled, the amount a
    /// positive number, the date well-formed.
    fn validated(&self) -> Result<(String, Decimal, NaiveDate, String), String> {
        let title = self.title.value().trim();
        let category = self.category.value().trim();
        if title.is_empty()
            || category.is_empty()
            || self.amount.value().trim().is_empty()
            || self.date.value().trim().is_empty()
        {
            return Err("All fields are required".to_string());
        }
        let amount = parse_amount(self.amount.value())
            .map_err(|_| "Amount must be a number".to_string())?;
        if amount <= Decimal::ZERO {
            return Err("Amount must be positive".to_string());
        }
        let date: NaiveDate = self
            .date
            .value()
            .trim()
            .parse()
            .map_err(|_| "Date must be YYYY-MM-DD".to_string())?;
        Ok((title.to_string(), amount, date, category.to_string()))
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Form(FormField),
    Table,
}

/// The interactive surface: input form, expense table with row selection,
/// sort and clear controls, and the category chart.
pub struct Dashboard {
    ledger: Ledger,
    config: SpesaConfig,
    form: ExpenseForm,
    focus: Focus,
    selected: usize,
    sort: Option<SortDirection>,
    notice: Option<String>,
}

impl Dashboard {
    pub fn new(ledger: Ledger, config: SpesaConfig) -> Self {
        Self {
            ledger,
            config,
            form: ExpenseForm::new(),
            focus: Focus::Form(FormField::Title),
            selected: 0,
            sort: None,
            notice: None,
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.ledger.len().saturating_sub(1));
    }

    fn report<T>(&mut self, result: Result<T, SpesaError>) {
        if let Err(e) = result {
            self.notice = Some(e.to_string());
        }
    }

    fn submit(&mut self) {
        match self.form.validated() {
            Ok((title, amount, date, category)) => {
                let result = self.ledger.add_item(title, amount, date, category);
                if result.is_ok() {
                    self.form.reset();
                    self.focus = Focus::Form(FormField::Title);
                    self.notice = None;
                }
                self.report(result);
            }
            // The submission is skipped; the notice is the only feedback.
            Err(msg) => self.notice = Some(msg),
        }
    }

    fn delete_selected(&mut self) {
        let Some(item) = self.ledger.items().get(self.selected) else {
            return;
        };
        let id = item.id;
        let result = self.ledger.delete_item(id);
        self.report(result);
        self.clamp_selection();
    }

    fn cycle_sort(&mut self) {
        self.sort = match self.sort {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        let result = self.ledger.sort_by_amount(self.sort);
        self.report(result);
    }

    fn clear_all(&mut self) {
        let result = self.ledger.clear_items();
        self.report(result);
        self.form.reset();
        self.selected = 0;
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(25),
            ])
            .split(area);

        for (field, chunk) in FormField::ALL.into_iter().zip(chunks.iter()) {
            let focused = self.focus == Focus::Form(field);
            let border_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label());
            let input = self.form.field(field);
            frame.render_widget(Paragraph::new(input.value()).block(block), *chunk);
            if focused {
                frame.set_cursor(chunk.x + input.cursor() as u16 + 1, chunk.y + 1);
            }
        }
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let title = match self.sort {
            None => "Expenses".to_string(),
            Some(SortDirection::Ascending) => "Expenses (ascending)".to_string(),
            Some(SortDirection::Descending) => "Expenses (descending)".to_string(),
        };
        let header = Row::new(["id", "title", "amount", "category", "date"])
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        let rows: Vec<Row> = self
            .ledger
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let amount = Line::from(format_amount(item.amount, &self.config))
                    .alignment(Alignment::Right);
                let row = Row::new([
                    Cell::new(item.id.to_string()),
                    Cell::new(item.title.clone()),
                    Cell::new(amount),
                    Cell::new(item.category.clone()),
                    Cell::new(item.date.to_string()),
                ]);
                if self.focus == Focus::Table && i == self.selected {
                    row.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    row
                }
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(12),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(table, area);
    }

    fn render_notice(&self, frame: &mut Frame, area: Rect) {
        if let Some(notice) = &self.notice {
            let line = Paragraph::new(notice.as_str()).style(Style::default().fg(Color::Red));
            frame.render_widget(line, area);
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = match self.focus {
            Focus::Form(_) => "tab: next field | enter: add | esc: expense list",
            Focus::Table => "j/k: select | d: delete | s: sort | c: clear all | a: add | q: quit",
        };
        let line = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, area);
    }
}

impl TuiWidget for Dashboard {
    fn handle_events(&mut self) -> Option<DashboardAction> {
        let code = key_pressed()?;
        match self.focus {
            Focus::Table => {
                let action = table_action(code)?;
                self.perform_action(action)
            }
            Focus::Form(_) => match form_event(code)? {
                FormEvent::Edit(action) => {
                    self.perform_edit_action(action);
                    None
                }
                FormEvent::Act(action) => self.perform_action(action),
            },
        }
    }

    fn perform_action(&mut self, action: DashboardAction) -> Option<DashboardAction> {
        match action {
            DashboardAction::NextField => {
                if let Focus::Form(field) = self.focus {
                    self.focus = Focus::Form(field.next());
                }
            }
            DashboardAction::PrevField => {
                if let Focus::Form(field) = self.focus {
                    self.focus = Focus::Form(field.prev());
                }
            }
            DashboardAction::MoveUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            DashboardAction::MoveDown => {
                self.selected += 1;
                self.clamp_selection();
            }
            DashboardAction::ToTop => self.selected = 0,
            DashboardAction::ToBottom => {
                self.selected = self.ledger.len().saturating_sub(1);
            }
            DashboardAction::Submit => self.submit(),
            DashboardAction::DeleteRow => self.delete_selected(),
            DashboardAction::CycleSort => self.cycle_sort(),
            DashboardAction::ClearAll => self.clear_all(),
            DashboardAction::FocusForm => {
                self.focus = Focus::Form(FormField::Title);
            }
            DashboardAction::FocusTable => {
                self.focus = Focus::Table;
                self.clamp_selection();
            }
            DashboardAction::Exit => return Some(DashboardAction::Exit),
        }
        None
    }

    fn perform_edit_action(&mut self, action: EditAction) {
        let Focus::Form(field) = self.focus else {
            return;
        };
        let input = self.form.field_mut(field);
        match action {
            EditAction::Insert(c) => input.insert_char(c),
            EditAction::MoveLeft => input.move_left(),
            EditAction::MoveRight => input.move_right(),
            EditAction::DeleteLeft => input.delete_left(),
            EditAction::DeleteRight => input.delete_right(),
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(8),
                Constraint::Length(1),
            ])
            .split(frame.size());

        self.render_form(frame, chunks[0]);
        self.render_notice(frame, chunks[1]);
        self.render_table(frame, chunks[2]);
        render_categories(frame, chunks[3], &self.ledger.categories(), &self.config);
        self.render_help(frame, chunks[4]);
    }
}
