//! Status bar widget: backend target and submission progress.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Where registrations are sent.
    pub api_target: String,
    /// Whether a submission is awaiting its outcome.
    pub submitting: bool,
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, DarkGray):
/// - Idle:       `API http://localhost:3000/api/register`
/// - Submitting: `API http://localhost:3000/api/register  Submitting...` (Yellow)
///
/// Renders nothing if `ctx.api_target` is empty.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.api_target.is_empty() {
        return;
    }

    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled(format!("API {}", ctx.api_target), dim)];
    if ctx.submitting {
        spans.push(Span::styled("  ", dim));
        spans.push(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_target() {
        let ctx = StatusBarContext {
            api_target: "http://localhost:3000/api/register".into(),
            submitting: false,
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("API http://localhost:3000"));
        assert!(!output.contains("Submitting"));
    }

    #[test]
    fn renders_submitting() {
        let ctx = StatusBarContext {
            api_target: "http://x/api/register".into(),
            submitting: true,
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("Submitting..."));
    }

    #[test]
    fn renders_nothing_without_target() {
        let output = render_status_bar(&StatusBarContext::default(), 40);
        assert!(output.trim().is_empty());
    }
}
