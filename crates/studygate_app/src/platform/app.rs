use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use engine_logging::{engine_info, engine_warn};
use studygate_core::{update, AppState, Msg};
use studygate_engine::{Categorizer, Clock, LocalClock, ReqwestClient, SystemNavigator};

use super::config;
use super::effects::EffectRunner;
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render::render;

const CLOCK_INTERVAL: Duration = Duration::from_secs(30);

pub enum AppEvent {
    Input(Command),
    InputClosed,
    Msg(Msg),
}

pub fn run_app(config_path: &Path) -> Result<()> {
    let config = config::load_with_env(config_path)?;
    engine_info!("Starting with {:?}", config);

    let client = ReqwestClient::new(config.client_settings()).context("building HTTP client")?;
    let clock = Arc::new(LocalClock);
    let categorizer = Categorizer::new(Arc::new(client), Arc::new(SystemNavigator), clock.clone());

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(categorizer, event_tx.clone())?;

    spawn_input_reader(event_tx.clone());

    // Keeps the gate current while the window opens or closes with no user input.
    let tick_tx = event_tx;
    let tick_clock = clock.clone();
    thread::spawn(move || loop {
        if tick_tx
            .send(AppEvent::Msg(Msg::ClockTicked(tick_clock.now())))
            .is_err()
        {
            break;
        }
        thread::sleep(CLOCK_INTERVAL);
    });

    let mut app = App::new(runner);
    println!("{HELP}\n");

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Input(Command::Quit) | AppEvent::InputClosed => break,
            AppEvent::Input(Command::Help) => println!("{HELP}"),
            AppEvent::Input(Command::Show) => app.print(),
            AppEvent::Input(Command::Unknown(word)) => {
                println!("Unknown command {word:?}.\n{HELP}");
            }
            AppEvent::Input(Command::Dispatch(msgs)) => {
                app.dispatch(Msg::ClockTicked(clock.now()));
                for msg in msgs {
                    app.dispatch(msg);
                }
                app.print_if_dirty();
            }
            AppEvent::Msg(msg) => {
                app.dispatch(msg);
                app.print_if_dirty();
            }
        }
    }

    engine_info!("Shutting down");
    app.runner.shutdown();
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let event = match line {
                Ok(line) => AppEvent::Input(parse_command(&line)),
                Err(err) => {
                    engine_warn!("Failed to read input: {}", err);
                    AppEvent::InputClosed
                }
            };
            let closed = matches!(event, AppEvent::InputClosed);
            if event_tx.send(event).is_err() || closed {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn print_if_dirty(&mut self) {
        if self.state.consume_dirty() {
            self.print();
        }
    }

    fn print(&self) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", render(&self.state.view()));
        let _ = stdout.flush();
    }
}
