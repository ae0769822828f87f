use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

use userdeck::adapters::ReqwestHttpClient;
use userdeck::app::{App, AppMessage, Platform};
use userdeck::cli::{exit_code, parse_args, run_cli_command, CliCommand, Shortcut, USAGE};
use userdeck::config::DeckConfig;
use userdeck::logging::{init_logging, LogTarget};
use userdeck::terminal::{setup_panic_hook, TerminalManager};
use userdeck::ui;

/// Redraw/tick interval (about 60 frames per second).
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("userdeck: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config = match DeckConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("userdeck: {}", e);
            eprintln!("{}", e.recovery_hint());
            std::process::exit(2);
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;

    let shortcut = match command {
        CliCommand::RunTui { shortcut } => shortcut,
        other => {
            init_logging(&config.log_filter, &LogTarget::Stderr)?;
            if let Some(Err(e)) = runtime.block_on(run_cli_command(other, &config)) {
                tracing::error!("{} ({})", e, e.category().as_str());
                eprintln!("Error [{}]: {}", e.error_code(), e.user_message());
                eprintln!("{}", e.recovery_hint());
                std::process::exit(exit_code(&e));
            }
            return Ok(());
        }
    };

    init_logging(&config.log_filter, &LogTarget::default_file())?;
    tracing::info!("Starting userdeck {}", userdeck::cli::VERSION);

    runtime.block_on(run_tui(config, shortcut))
}

async fn run_tui(config: DeckConfig, shortcut: Option<Shortcut>) -> Result<()> {
    let client = ReqwestHttpClient::with_timeout(config.timeout)?;
    let source = App::source_from(client, &config.endpoint);
    let platform = Platform::system(config.download_dir.as_deref());

    let mut app = App::new(source, platform);
    if let Some(shortcut) = shortcut {
        app.apply_shortcut(shortcut);
    }
    app.platform.affordances.request_wake_lock();

    // Restore the terminal before the panic message prints
    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    if let Err(e) = &result {
        tracing::error!("Event loop failed: {}", e);
    }
    tracing::info!("userdeck exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    // Input closed
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
