use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tracing::debug;

use crate::api::{SubmissionService, SubmitError};
use crate::popup::{Effect, PopupController, SubmissionId, execute};

use super::action::Action;
use super::error::AppError;
use super::screens::{PopupView, draw_landing, draw_popup, landing};
use super::widgets::{StatusBarContext, draw_status_bar};

/// How long the event loop waits for input before checking for outcomes.
const TICK: Duration = Duration::from_millis(100);

type Outcome = (SubmissionId, Result<(), SubmitError>);

/// Top-level application state.
pub struct App {
    popup: PopupController,
    view: PopupView,
    status: StatusBarContext,
    should_quit: bool,
}

impl App {
    /// Creates an `App` on the landing screen with the popup closed.
    ///
    /// `api_target` is shown in the status bar.
    pub fn new(api_target: impl Into<String>) -> Self {
        Self {
            popup: PopupController::new(),
            view: PopupView::new(),
            status: StatusBarContext {
                api_target: api_target.into(),
                submitting: false,
            },
            should_quit: false,
        }
    }

    /// Main event loop: draw → apply finished submissions → read event →
    /// dispatch → spawn any submission on `runtime`.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B, S>(
        &mut self,
        terminal: &mut Terminal<B>,
        runtime: &Handle,
        service: S,
    ) -> Result<(), AppError>
    where
        B: ratatui::backend::Backend,
        S: SubmissionService + Clone + Send + Sync + 'static,
    {
        let (tx, rx): (Sender<Outcome>, Receiver<Outcome>) = mpsc::channel();
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            while let Ok((id, result)) = rx.try_recv() {
                self.complete(id, result);
            }

            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                let effect = self.handle_key(key);
                if effect.is_none() {
                    continue;
                }
                let service = service.clone();
                let tx = tx.clone();
                runtime.spawn(async move {
                    if let Some(outcome) = execute(&service, effect).await
                        && tx.send(outcome).is_err()
                    {
                        debug!("event loop gone before submission finished");
                    }
                });
            }
        }
        Ok(())
    }

    /// Renders the landing screen, the popup overlay, and the status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        draw_landing(frame, main);
        draw_popup(&self.view, &self.popup, frame, main);
        draw_status_bar(&self.status, frame, status);
    }

    /// Handles a key event: the popup takes input while open, the landing
    /// screen otherwise. Returns the submission to perform, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        if key.kind != KeyEventKind::Press {
            return Effect::None;
        }

        let action = if self.popup.is_open() {
            self.view.handle_key(key, &self.popup)
        } else {
            landing::handle_key(key)
        };
        self.apply(action)
    }

    /// Feeds a finished submission back into the popup.
    pub fn complete(&mut self, id: SubmissionId, result: Result<(), SubmitError>) {
        self.popup.complete(id, result);
        self.sync();
    }

    fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::None => Effect::None,
            Action::Quit => {
                self.should_quit = true;
                Effect::None
            }
            Action::Popup(command) => {
                let effect = self.popup.handle(command);
                self.sync();
                effect
            }
        }
    }

    fn sync(&mut self) {
        self.view.sync(&self.popup);
        self.status.submitting = self.popup.is_submitting();
    }

    /// Returns the popup controller.
    pub fn popup(&self) -> &PopupController {
        &self.popup
    }

    /// Returns the status bar state.
    pub fn status(&self) -> &StatusBarContext {
        &self.status
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
