//! Form rows rendered from the popup's buffers, plus focus handling.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// How a row takes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; typed characters append.
    Text,
    /// A fixed set of options cycled with ←/→.
    Choice,
    /// A 1–5 scale set with digits or ←/→.
    Rating,
}

/// A single row of a rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Display label shown in the row's border.
    pub label: String,
    /// Text to display as the value.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field is marked with `*`.
    pub required: bool,
    pub kind: FieldKind,
}

impl FormField {
    /// Creates a text row.
    pub fn text(label: impl Into<String>, value: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            error: None,
            required,
            kind: FieldKind::Text,
        }
    }

    /// Creates a row of the given kind.
    pub fn new(label: impl Into<String>, value: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::text(label, value, false)
        }
    }

    /// Marks the row as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attaches an error message.
    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

/// Focus position within a list of rows whose length may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    index: usize,
}

impl Focus {
    /// Returns the focused index.
    pub fn index(self) -> usize {
        self.index
    }

    /// Moves focus to the next row, wrapping around.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    /// Moves focus to the previous row, wrapping around.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    /// Pulls focus back inside `len` rows after rows disappear.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Returns focus to the first row.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Rows to show when only `capacity` fit, keeping `focus` in view.
pub fn visible_window(len: usize, focus: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 {
        return 0..0;
    }
    if len <= capacity {
        return 0..len;
    }
    let start = focus
        .saturating_sub(capacity / 2)
        .min(len - capacity);
    start..start + capacity
}

/// Renders form rows within the given area, scrolling to keep focus visible.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(fields: &[FormField], focus: usize, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let capacity = usize::from(area.height / row_height);
    let window = visible_window(fields.len(), focus, capacity);
    let constraints: Vec<Constraint> = window
        .clone()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (row, i) in window.enumerate() {
        let field = &fields[i];
        let is_focused = i == focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = match field.kind {
            FieldKind::Text => vec![Span::raw(&field.value)],
            FieldKind::Choice => vec![Span::raw(format!("‹ {} ›", field.value))],
            FieldKind::Rating => rating_spans(&field.value),
        };
        if is_focused && field.kind == FieldKind::Text {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[row]);

        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[row].x + 2,
                y: rows[row].y + row_height.saturating_sub(1),
                width: rows[row].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}

fn rating_spans(value: &str) -> Vec<Span<'static>> {
    (1..=5)
        .flat_map(|n| {
            let label = n.to_string();
            let style = if label == value {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            [Span::styled(format!(" {label} "), style), Span::raw(" ")]
        })
        .collect()
}
