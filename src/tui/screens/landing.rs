//! Landing screen: the waitlist buttons underneath the popup.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::UserType;
use crate::popup::Command;
use crate::tui::action::Action;

const HEADLINE: &str = "Join the LawVriksh Beta: Be the First to Experience";
const TAGLINE: &str = "\"Know your rights. Show your insights\"";

/// Maps a key on the landing screen to an [`Action`].
pub fn handle_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('u') | KeyCode::Char('U') => {
            Action::Popup(Command::OpenRegistration(UserType::User))
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            Action::Popup(Command::OpenRegistration(UserType::Creator))
        }
        KeyCode::Char('n') | KeyCode::Char('N') => Action::Popup(Command::OpenNotInterested),
        KeyCode::Char('v') | KeyCode::Char('V') => Action::Popup(Command::OpenViewMore),
        KeyCode::Char('f') | KeyCode::Char('F') => Action::Popup(Command::OpenFeedback),
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Renders the landing screen.
#[mutants::skip]
pub fn draw_landing(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" LawVriksh ")
        .title_bottom(Line::from(" v: View More ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(HEADLINE, Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::styled(TAGLINE, Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from("Join Our Waiting List :"),
        Line::from(""),
        Line::from("[u] USER      [c] Creator"),
        Line::from("────────────────────────"),
        Line::from("[n] Not found Interest"),
        Line::from(""),
        Line::styled(
            "f: feedback  v: view more  q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let [body] = Layout::vertical([Constraint::Min(0)]).areas(inner);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn user_type_buttons() {
        assert_eq!(
            handle_key(press(KeyCode::Char('u'))),
            Action::Popup(Command::OpenRegistration(UserType::User))
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('c'))),
            Action::Popup(Command::OpenRegistration(UserType::Creator))
        );
    }

    #[test]
    fn other_buttons() {
        assert_eq!(
            handle_key(press(KeyCode::Char('n'))),
            Action::Popup(Command::OpenNotInterested)
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('v'))),
            Action::Popup(Command::OpenViewMore)
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('f'))),
            Action::Popup(Command::OpenFeedback)
        );
    }

    #[test]
    fn q_and_esc_quit() {
        assert_eq!(handle_key(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key(press(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn unhandled_key_is_none() {
        assert_eq!(handle_key(press(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn renders_headline_and_buttons() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_landing(frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                output.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            output.push('\n');
        }
        assert!(output.contains("Join Our Waiting List"));
        assert!(output.contains("[c] Creator"));
    }
}
