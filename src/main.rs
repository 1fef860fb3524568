#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};

use lawvriksh_onboard::api::HttpSubmissionService;
use lawvriksh_onboard::config::{API_URL_ENV, Config};
use lawvriksh_onboard::logging;
use lawvriksh_onboard::tui::{App, AppError};

#[derive(Parser)]
#[command(name = "lawvriksh-onboard")]
#[command(about = "Join the LawVriksh beta waitlist or send feedback")]
#[command(version)]
struct Args {
    /// Backend base URL (e.g., http://localhost:3000)
    /// Overrides LAWVRIKSH_API_URL and the config file
    #[arg(long)]
    api_url: Option<String>,

    /// Check that the backend answers GET /api/health, then exit
    #[arg(long)]
    check: bool,
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args).map_err(Into::into)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn run(args: Args) -> Result<(), AppError> {
    let config = Config::load()?.with_overrides(std::env::var(API_URL_ENV).ok(), args.api_url);
    let _guard = logging::init(&logging::log_dir()?, config.log_filter())?;

    let endpoints = config.endpoints()?;
    info!(register = %endpoints.register, feedback = %endpoints.feedback, "starting");
    let service = HttpSubmissionService::new(endpoints);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    if args.check {
        let target = service.endpoints().health.clone();
        return match runtime.block_on(service.health()) {
            Ok(()) => {
                println!("{target}: ok");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "health check failed");
                println!("{target}: {e}");
                Err(e.into())
            }
        };
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(service.endpoints().register.as_str());
    let result = app.run(&mut terminal, runtime.handle(), service);

    let restore_result = restore_terminal();
    match result {
        Err(e) => Err(e),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
