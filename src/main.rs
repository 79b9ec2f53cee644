use chatdeck::adapters::JsonFileStorage;
use chatdeck::app::App;
use chatdeck::cli::{parse_args, run_cli_command};
use chatdeck::startup::{init_logging, StartupConfig};
use chatdeck::terminal::{setup_panic_hook, TerminalManager};
use chatdeck::traits::KeyValueStorage;
use chatdeck::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args(std::env::args())?;
    let config = StartupConfig::from_env().with_data_dir_override(args.data_dir);

    // CLI commands print to stdout; no log file, no terminal takeover.
    if let Some(result) = run_cli_command(&args.command, &config) {
        return result;
    }

    let data_dir = config.resolve_data_dir();
    match &data_dir {
        Some(dir) => {
            if let Err(e) = init_logging(dir, &config.log_filter) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        None => eprintln!("Warning: no home directory; settings will not be saved"),
    }

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let app = App::new(JsonFileStorage::new(data_dir));

    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), app, &config));
    term_manager.restore();

    if let Err(e) = &result {
        tracing::error!("Exited with error: {:?}", e);
    }
    tracing::info!("chatdeck exiting");
    result
}

async fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>, config: &StartupConfig) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: KeyValueStorage,
{
    let mut event_stream = EventStream::new();
    let mut ticker = tokio::time::interval(config.tick_rate);

    loop {
        if app.is_dirty() {
            terminal.draw(|f| ui::render(f, &app))?;
            app.clear_dirty();
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind != KeyEventKind::Release => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.handle_resize(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => {
                        tracing::warn!("Terminal event stream closed");
                        break;
                    }
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
