use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use tipline::{App, TipError};
use tipline::config::{self, Config, ConfigResult, KeyEventMode};
use tipline::lookup::{LookupClient, worker};

/// Interpreter input boxes with doc and dir tooltips
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interpreter input boxes with server-backed doc and dir tooltips"
)]
struct Args {
    /// Lookup server base URL (overrides [server] url)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Session suffix appended to /doc and /dir
    #[arg(long, value_name = "SUFFIX")]
    session: Option<String>,

    /// Input box id; repeat for several boxes
    #[arg(long = "input", value_name = "ID")]
    inputs: Vec<String>,

    /// How typed characters reach the tooltip controller
    #[arg(long, value_enum, value_name = "MODE")]
    key_events: Option<KeyEventMode>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(server) = self.server {
            config.server.url = server;
        }
        if let Some(session) = self.session {
            config.server.session = session;
        }
        if !self.inputs.is_empty() {
            config.inputs.ids = self.inputs;
        }
        if let Some(mode) = self.key_events {
            config.tooltip.key_events = mode;
        }
    }
}

fn main() -> Result<()> {
    #[cfg(debug_assertions)]
    init_logging()?;

    color_eyre::install()?;

    let args = Args::parse();

    let mut config_result = config::load_config();
    args.apply(&mut config_result.config);
    config::validate(&config_result.config)?;

    let client = LookupClient::new(&config_result.config.server.url)?;

    let terminal = init_terminal()?;
    let app = App::new(&config_result.config);
    let result = run(terminal, app, client, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== TIPLINE DEBUG SESSION ENDED ===");

    Ok(())
}

/// Writes to /tmp/tipline-debug.log at DEBUG level
#[cfg(debug_assertions)]
fn init_logging() -> Result<(), TipError> {
    use std::io::Write;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/tipline-debug.log")?;

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== TIPLINE DEBUG SESSION STARTED ===");
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, mouse and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    client: LookupClient,
    config_result: ConfigResult,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    setup_lookup_worker(&mut app, client);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the lookup worker thread and channels
fn setup_lookup_worker(app: &mut App, client: LookupClient) {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.tooltip.set_channels(request_tx, response_rx);

    // Exits once the app, and with it the request sender, is dropped
    worker::spawn_worker(client, request_rx, response_tx);
}
