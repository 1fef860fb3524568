//! Popup overlay: renders the controller's content and turns keys into commands.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::model::{
    CONTACT_CHOICES, FeedbackField, GENDER_OPTIONS, RatingField, RegistrationField,
    is_low_rating, parse_rating, validate_registration,
};
use crate::popup::{Command, ContentVariant, FEATURES, MenuEntry, PopupController};
use crate::tui::action::Action;
use crate::tui::widgets::{FieldKind, Focus, FormField, draw_form};

/// A focusable row of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Registration(RegistrationField),
    Feedback(FeedbackField),
    Menu(MenuEntry),
}

/// Focusable rows for `content`, given the current buffer values.
///
/// Issue rows appear only for ratings below 3; the contact email row only
/// once the visitor agrees to be contacted.
pub fn slots(content: ContentVariant, controller: &PopupController) -> Vec<Slot> {
    match content {
        ContentVariant::RegistrationForm(_) => RegistrationField::ALL
            .into_iter()
            .map(Slot::Registration)
            .collect(),
        ContentVariant::FeedbackSurvey => {
            let feedback = controller.feedback();
            let mut rows = Vec::new();
            for rating in RatingField::ALL {
                rows.push(Slot::Feedback(FeedbackField::Rating(rating)));
                if is_low_rating(feedback.rating(rating)) {
                    rows.push(Slot::Feedback(FeedbackField::Issue(rating)));
                }
            }
            rows.extend(FeedbackField::SUGGESTIONS.into_iter().map(Slot::Feedback));
            rows.push(Slot::Feedback(FeedbackField::AdditionalComments));
            rows.push(Slot::Feedback(FeedbackField::ContactWilling));
            if feedback.wants_contact() {
                rows.push(Slot::Feedback(FeedbackField::ContactEmail));
            }
            rows
        }
        ContentVariant::ViewMoreMenu => MenuEntry::ALL.into_iter().map(Slot::Menu).collect(),
        ContentVariant::ThankYou(_) | ContentVariant::FeatureList => Vec::new(),
    }
}

/// View state kept alongside the controller: focus and per-field errors.
#[derive(Debug, Clone, Default)]
pub struct PopupView {
    focus: Focus,
    field_errors: Vec<(RegistrationField, String)>,
    shown: Option<ContentVariant>,
}

impl PopupView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the focused row.
    pub fn focus(&self) -> usize {
        self.focus.index()
    }

    /// Error shown under `field`, if the last submit attempt flagged it.
    pub fn field_error(&self, field: RegistrationField) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    /// Follows the controller after a transition.
    ///
    /// New content starts at the first row with no field errors; otherwise
    /// focus is pulled back inside rows that disappeared.
    pub fn sync(&mut self, controller: &PopupController) {
        let content = controller.content();
        if content != self.shown {
            self.shown = content;
            self.focus.reset();
            self.field_errors.clear();
            return;
        }
        if let Some(content) = content {
            self.focus.clamp(slots(content, controller).len());
        }
    }

    /// Handles a key while the popup is open.
    pub fn handle_key(&mut self, key: KeyEvent, controller: &PopupController) -> Action {
        let Some(content) = controller.content() else {
            return Action::None;
        };
        let rows = slots(content, controller);

        match key.code {
            KeyCode::Esc => Action::Popup(Command::Close),
            KeyCode::Tab => {
                self.focus.next(rows.len());
                Action::None
            }
            KeyCode::BackTab => {
                self.focus.prev(rows.len());
                Action::None
            }
            KeyCode::Enter => self.activate(content, &rows, controller),
            _ => match rows.get(self.focus.index()) {
                Some(Slot::Registration(field)) => self.edit_registration(*field, key, controller),
                Some(Slot::Feedback(field)) => edit_feedback(*field, key, controller),
                Some(Slot::Menu(_)) | None => Action::None,
            },
        }
    }

    fn activate(
        &mut self,
        content: ContentVariant,
        rows: &[Slot],
        controller: &PopupController,
    ) -> Action {
        match content {
            ContentVariant::RegistrationForm(_) => {
                self.field_errors = validate_registration(controller.registration())
                    .into_iter()
                    .map(|(field, e)| (field, e.to_string()))
                    .collect();
                if self.field_errors.is_empty() {
                    Action::Popup(Command::SubmitRegistration)
                } else {
                    Action::None
                }
            }
            ContentVariant::FeedbackSurvey => Action::Popup(Command::SubmitFeedback),
            ContentVariant::ViewMoreMenu => match rows.get(self.focus.index()) {
                Some(Slot::Menu(entry)) => Action::Popup(entry.command()),
                _ => Action::None,
            },
            ContentVariant::ThankYou(_) | ContentVariant::FeatureList => {
                Action::Popup(Command::Close)
            }
        }
    }

    fn edit_registration(
        &mut self,
        field: RegistrationField,
        key: KeyEvent,
        controller: &PopupController,
    ) -> Action {
        let current = controller.registration().get(field);
        let value = if field == RegistrationField::Gender {
            let options = GENDER_OPTIONS.map(|(value, _)| value);
            let next = match key.code {
                KeyCode::Right => cycle(&options, current, true),
                KeyCode::Left => cycle(&options, current, false),
                _ => return Action::None,
            };
            next.to_string()
        } else {
            match edit_text(current, key) {
                Some(value) => value,
                None => return Action::None,
            }
        };
        self.field_errors.retain(|(f, _)| *f != field);
        Action::Popup(Command::UpdateRegistrationField(field, value))
    }
}

fn edit_feedback(field: FeedbackField, key: KeyEvent, controller: &PopupController) -> Action {
    let current = controller.feedback().get(field);
    let value = match field {
        FeedbackField::Rating(_) => edit_rating(current, key),
        FeedbackField::ContactWilling => match key.code {
            KeyCode::Right => Some(cycle(&CONTACT_CHOICES, current, true).to_string()),
            KeyCode::Left => Some(cycle(&CONTACT_CHOICES, current, false).to_string()),
            _ => None,
        },
        _ => edit_text(current, key),
    };
    match value {
        Some(value) => Action::Popup(Command::UpdateFeedbackField(field, value)),
        None => Action::None,
    }
}

fn edit_text(current: &str, key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(ch) => {
            let mut value = current.to_string();
            value.push(ch);
            Some(value)
        }
        KeyCode::Backspace => {
            let mut value = current.to_string();
            value.pop()?;
            Some(value)
        }
        _ => None,
    }
}

fn edit_rating(current: &str, key: KeyEvent) -> Option<String> {
    let selected = parse_rating(current).filter(|n| (1..=5).contains(n));
    let next = match key.code {
        KeyCode::Char(ch @ '1'..='5') => ch.to_string(),
        KeyCode::Right => selected.map_or(1, |n| (n + 1).min(5)).to_string(),
        KeyCode::Left => selected.map_or(1, |n| (n - 1).max(1)).to_string(),
        KeyCode::Backspace | KeyCode::Delete => String::new(),
        _ => return None,
    };
    Some(next)
}

/// Next (or previous) entry of `options` after `current`, wrapping.
fn cycle<'a>(options: &[&'a str], current: &str, forward: bool) -> &'a str {
    let len = options.len();
    let at = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (at + 1) % len
    } else {
        (at + len - 1) % len
    };
    options[next]
}

fn gender_label(value: &str) -> &'static str {
    GENDER_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(GENDER_OPTIONS[0].1, |(_, label)| label)
}

fn contact_label(value: &str) -> &'static str {
    match value {
        "yes" => "Yes",
        "no" => "No",
        _ => "Select",
    }
}

fn form_row(view: &PopupView, slot: Slot, controller: &PopupController) -> Option<FormField> {
    let row = match slot {
        Slot::Registration(RegistrationField::Gender) => FormField::new(
            RegistrationField::Gender.label(),
            gender_label(&controller.registration().gender),
            FieldKind::Choice,
        ),
        Slot::Registration(field) => FormField::text(
            field.label(),
            controller.registration().get(field),
            field.is_required(),
        )
        .with_error(view.field_error(field).map(str::to_string)),
        Slot::Feedback(FeedbackField::Rating(r)) => FormField::new(
            format!("{}: {}", r.section(), r.question()),
            controller.feedback().rating(r),
            FieldKind::Rating,
        ),
        Slot::Feedback(field @ FeedbackField::Issue(r)) => FormField::text(
            format!("{} {}", r.question(), field.label()),
            controller.feedback().issue(r),
            true,
        ),
        Slot::Feedback(FeedbackField::ContactWilling) => FormField::new(
            FeedbackField::ContactWilling.label(),
            contact_label(&controller.feedback().contact_willing),
            FieldKind::Choice,
        ),
        Slot::Feedback(field) => {
            FormField::text(field.label(), controller.feedback().get(field), false)
        }
        Slot::Menu(_) => return None,
    };
    Some(row)
}

/// Renders the popup over `area`; does nothing when it is closed.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_popup(view: &PopupView, controller: &PopupController, frame: &mut Frame, area: Rect) {
    let Some(content) = controller.content() else {
        return;
    };

    let [popup_area] = Layout::horizontal([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    let [popup_area] = Layout::vertical([Constraint::Percentage(90)])
        .flex(Flex::Center)
        .areas(popup_area);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(format!(" {} ", content.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [body, error_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let rows = slots(content, controller);
    match content {
        ContentVariant::RegistrationForm(_) | ContentVariant::FeedbackSurvey => {
            let fields: Vec<FormField> = rows
                .iter()
                .filter_map(|slot| form_row(view, *slot, controller))
                .collect();
            draw_form(&fields, view.focus(), frame, body);
        }
        ContentVariant::ThankYou(message) => {
            let paragraph = Paragraph::new(message.text())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, body);
        }
        ContentVariant::FeatureList => {
            let lines: Vec<Line> = FEATURES
                .iter()
                .flat_map(|(title, description)| {
                    [
                        Line::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
                        Line::from(*description),
                        Line::from(""),
                    ]
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
        }
        ContentVariant::ViewMoreMenu => {
            let lines: Vec<Line> = rows
                .iter()
                .enumerate()
                .filter_map(|(i, slot)| match slot {
                    Slot::Menu(entry) if i == view.focus() => Some(Line::styled(
                        format!("> {}", entry.label()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Slot::Menu(entry) => Some(Line::from(format!("  {}", entry.label()))),
                    _ => None,
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), body);
        }
    }

    let error = controller.error_message();
    if !error.is_empty() {
        let error = Paragraph::new(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let submit = if controller.is_submitting() {
        "Submitting..."
    } else {
        "Submit"
    };
    let footer = match content {
        ContentVariant::RegistrationForm(_) | ContentVariant::FeedbackSurvey => format!(
            "Tab/Shift+Tab: next/prev  ←/→: choose  Enter: {submit}  Esc: close"
        ),
        ContentVariant::ViewMoreMenu => "Tab: next  Enter: open  Esc: close".into(),
        ContentVariant::ThankYou(_) | ContentVariant::FeatureList => "Enter/Esc: close".into(),
    };
    let footer = Paragraph::new(Line::from(footer)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::model::UserType;
    use crate::popup::Effect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    /// Feeds a key through the view and applies the resulting command.
    fn key(view: &mut PopupView, controller: &mut PopupController, code: KeyCode) -> Action {
        let action = view.handle_key(press(code), controller);
        if let Action::Popup(command) = action.clone() {
            let _ = controller.handle(command);
        }
        view.sync(controller);
        action
    }

    fn type_str(view: &mut PopupView, controller: &mut PopupController, s: &str) {
        for ch in s.chars() {
            key(view, controller, KeyCode::Char(ch));
        }
    }

    fn opened(command: Command) -> (PopupView, PopupController) {
        let mut controller = PopupController::new();
        let _ = controller.handle(command);
        let mut view = PopupView::new();
        view.sync(&controller);
        (view, controller)
    }

    fn render(view: &PopupView, controller: &PopupController) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_popup(view, controller, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    mod registration {
        use super::*;

        fn form() -> (PopupView, PopupController) {
            opened(Command::OpenRegistration(UserType::Creator))
        }

        #[test]
        fn typing_fills_focused_field() {
            let (mut view, mut controller) = form();
            type_str(&mut view, &mut controller, "Asha q");
            assert_eq!(controller.registration().name, "Asha q");
            assert!(controller.is_open());

            key(&mut view, &mut controller, KeyCode::Backspace);
            assert_eq!(controller.registration().name, "Asha ");
        }

        #[test]
        fn tab_moves_to_next_field() {
            let (mut view, mut controller) = form();
            key(&mut view, &mut controller, KeyCode::Tab);
            type_str(&mut view, &mut controller, "a@b.com");
            assert_eq!(controller.registration().email, "a@b.com");
            assert_eq!(controller.registration().name, "");
        }

        #[test]
        fn enter_on_empty_form_flags_required_fields() {
            let (mut view, mut controller) = form();
            let action = key(&mut view, &mut controller, KeyCode::Enter);
            assert_eq!(action, Action::None);
            assert!(!controller.is_submitting());
            assert_eq!(
                view.field_error(RegistrationField::Name),
                Some("Name is required")
            );
            assert!(view.field_error(RegistrationField::Phone).is_some());
            assert!(view.field_error(RegistrationField::Gender).is_none());
        }

        #[test]
        fn invalid_email_is_flagged() {
            let (mut view, mut controller) = form();
            type_str(&mut view, &mut controller, "A");
            key(&mut view, &mut controller, KeyCode::Tab);
            type_str(&mut view, &mut controller, "not-an-email");
            key(&mut view, &mut controller, KeyCode::Tab);
            type_str(&mut view, &mut controller, "123");

            assert_eq!(key(&mut view, &mut controller, KeyCode::Enter), Action::None);
            assert_eq!(
                view.field_error(RegistrationField::Email),
                Some("Please enter a valid email address")
            );
        }

        #[test]
        fn editing_clears_that_fields_error() {
            let (mut view, mut controller) = form();
            key(&mut view, &mut controller, KeyCode::Enter);
            type_str(&mut view, &mut controller, "A");
            assert!(view.field_error(RegistrationField::Name).is_none());
            assert!(view.field_error(RegistrationField::Email).is_some());
        }

        #[test]
        fn valid_form_submits() {
            let (mut view, mut controller) = form();
            type_str(&mut view, &mut controller, "A");
            key(&mut view, &mut controller, KeyCode::Tab);
            type_str(&mut view, &mut controller, "a@b.com");
            key(&mut view, &mut controller, KeyCode::Tab);
            type_str(&mut view, &mut controller, "123");

            let action = view.handle_key(press(KeyCode::Enter), &controller);
            assert_eq!(action, Action::Popup(Command::SubmitRegistration));
            let effect = controller.handle(Command::SubmitRegistration);
            assert!(matches!(effect, Effect::Register { .. }));
            assert!(controller.is_submitting());
        }

        #[test]
        fn gender_cycles_with_arrows() {
            let (mut view, mut controller) = form();
            key(&mut view, &mut controller, KeyCode::BackTab);
            key(&mut view, &mut controller, KeyCode::BackTab);
            assert_eq!(view.focus(), 3);

            key(&mut view, &mut controller, KeyCode::Right);
            assert_eq!(controller.registration().gender, "male");
            key(&mut view, &mut controller, KeyCode::Left);
            key(&mut view, &mut controller, KeyCode::Left);
            assert_eq!(controller.registration().gender, "prefer-not-to-say");

            key(&mut view, &mut controller, KeyCode::Char('x'));
            assert_eq!(controller.registration().gender, "prefer-not-to-say");
        }

        #[test]
        fn renders_title_and_submit_label() {
            let (view, controller) = form();
            let output = render(&view, &controller);
            assert!(output.contains("Join as Creator"));
            assert!(output.contains("Name *"));
            assert!(output.contains("Enter: Submit"));
        }

        #[test]
        fn renders_submitting_label() {
            let (view, mut controller) = form();
            let _ = controller.handle(Command::SubmitRegistration);
            let output = render(&view, &controller);
            assert!(output.contains("Enter: Submitting..."));
        }
    }

    mod survey {
        use super::*;

        fn survey() -> (PopupView, PopupController) {
            opened(Command::OpenFeedback)
        }

        #[test]
        fn low_rating_adds_issue_row() {
            let (mut view, mut controller) = survey();
            let before = slots(ContentVariant::FeedbackSurvey, &controller).len();
            assert_eq!(before, 12);

            key(&mut view, &mut controller, KeyCode::Char('2'));
            assert_eq!(controller.feedback().visual_design, "2");
            let rows = slots(ContentVariant::FeedbackSurvey, &controller);
            assert_eq!(rows.len(), 13);
            assert_eq!(
                rows[1],
                Slot::Feedback(FeedbackField::Issue(RatingField::VisualDesign))
            );

            key(&mut view, &mut controller, KeyCode::Tab);
            type_str(&mut view, &mut controller, "too busy");
            assert_eq!(controller.feedback().visual_design_issue, "too busy");
        }

        #[test]
        fn rating_ignores_out_of_range_digits() {
            let (mut view, mut controller) = survey();
            key(&mut view, &mut controller, KeyCode::Char('7'));
            assert_eq!(controller.feedback().visual_design, "");
            key(&mut view, &mut controller, KeyCode::Char('a'));
            assert_eq!(controller.feedback().visual_design, "");
        }

        #[test]
        fn rating_arrows_step_within_scale() {
            let (mut view, mut controller) = survey();
            key(&mut view, &mut controller, KeyCode::Right);
            assert_eq!(controller.feedback().visual_design, "1");
            for _ in 0..6 {
                key(&mut view, &mut controller, KeyCode::Right);
            }
            assert_eq!(controller.feedback().visual_design, "5");
            key(&mut view, &mut controller, KeyCode::Left);
            assert_eq!(controller.feedback().visual_design, "4");
            key(&mut view, &mut controller, KeyCode::Backspace);
            assert_eq!(controller.feedback().visual_design, "");
        }

        #[test]
        fn contact_yes_reveals_email_row() {
            let (mut view, mut controller) = survey();
            key(&mut view, &mut controller, KeyCode::BackTab);
            assert_eq!(view.focus(), 11);

            key(&mut view, &mut controller, KeyCode::Right);
            assert_eq!(controller.feedback().contact_willing, "yes");
            let rows = slots(ContentVariant::FeedbackSurvey, &controller);
            assert_eq!(rows.last(), Some(&Slot::Feedback(FeedbackField::ContactEmail)));

            key(&mut view, &mut controller, KeyCode::Tab);
            type_str(&mut view, &mut controller, "x@y.z");
            assert_eq!(controller.feedback().contact_email, "x@y.z");
        }

        #[test]
        fn hidden_row_pulls_focus_back() {
            let (mut view, mut controller) = survey();
            key(&mut view, &mut controller, KeyCode::BackTab);
            key(&mut view, &mut controller, KeyCode::Right);
            key(&mut view, &mut controller, KeyCode::Tab);
            assert_eq!(view.focus(), 12);

            let _ = controller.handle(Command::UpdateFeedbackField(
                FeedbackField::ContactWilling,
                "no".into(),
            ));
            view.sync(&controller);
            assert_eq!(view.focus(), 11);
        }

        #[test]
        fn enter_with_unexplained_low_rating_shows_message() {
            let (mut view, mut controller) = survey();
            key(&mut view, &mut controller, KeyCode::Char('1'));
            let action = key(&mut view, &mut controller, KeyCode::Enter);
            assert_eq!(action, Action::Popup(Command::SubmitFeedback));
            assert!(!controller.is_submitting());

            let output = render(&view, &controller);
            assert!(output.contains("Please explain what you didn't like"));
        }
    }

    mod menu {
        use super::*;

        #[test]
        fn enter_opens_focused_entry() {
            let (mut view, mut controller) = opened(Command::OpenViewMore);
            key(&mut view, &mut controller, KeyCode::Enter);
            assert_eq!(controller.content(), Some(ContentVariant::FeedbackSurvey));
            assert_eq!(view.focus(), 0);
        }

        #[test]
        fn second_entry_opens_features() {
            let (mut view, mut controller) = opened(Command::OpenViewMore);
            key(&mut view, &mut controller, KeyCode::Tab);
            key(&mut view, &mut controller, KeyCode::Enter);
            assert_eq!(controller.content(), Some(ContentVariant::FeatureList));
        }

        #[test]
        fn renders_entries() {
            let (view, controller) = opened(Command::OpenViewMore);
            let output = render(&view, &controller);
            assert!(output.contains("Explore More"));
            assert!(output.contains("> Suggestion & Feedback"));
            assert!(output.contains("View Features"));
        }
    }

    mod closing {
        use super::*;

        #[test]
        fn esc_closes_any_content() {
            for command in [
                Command::OpenRegistration(UserType::User),
                Command::OpenFeedback,
                Command::OpenViewMore,
                Command::OpenFeatures,
                Command::OpenNotInterested,
            ] {
                let (mut view, mut controller) = opened(command.clone());
                key(&mut view, &mut controller, KeyCode::Esc);
                assert!(!controller.is_open(), "{command:?}");
            }
        }

        #[test]
        fn enter_closes_thank_you() {
            let (mut view, mut controller) = opened(Command::OpenNotInterested);
            let output = render(&view, &controller);
            assert!(output.contains("Thank You!"));

            key(&mut view, &mut controller, KeyCode::Enter);
            assert!(!controller.is_open());
            assert!(render(&view, &controller).trim().is_empty());
        }

        #[test]
        fn enter_closes_features() {
            let (mut view, mut controller) = opened(Command::OpenFeatures);
            assert!(render(&view, &controller).contains("Monetize Your Expertise"));
            key(&mut view, &mut controller, KeyCode::Enter);
            assert!(!controller.is_open());
        }

        #[test]
        fn keys_do_nothing_when_closed() {
            let controller = PopupController::new();
            let mut view = PopupView::new();
            assert_eq!(
                view.handle_key(press(KeyCode::Enter), &controller),
                Action::None
            );
        }
    }

    #[test]
    fn sync_resets_focus_on_new_content() {
        let (mut view, mut controller) = opened(Command::OpenFeedback);
        key(&mut view, &mut controller, KeyCode::Tab);
        key(&mut view, &mut controller, KeyCode::Tab);
        assert_eq!(view.focus(), 2);

        let _ = controller.handle(Command::OpenViewMore);
        view.sync(&controller);
        assert_eq!(view.focus(), 0);
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(&CONTACT_CHOICES, "", true), "yes");
        assert_eq!(cycle(&CONTACT_CHOICES, "no", true), "");
        assert_eq!(cycle(&CONTACT_CHOICES, "", false), "no");
        assert_eq!(cycle(&CONTACT_CHOICES, "unknown", true), "yes");
    }
}
