mod fixture;
mod renderer;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use fixture::Scenario;
use playback::{PlayerState, SimulatedResource, TranscriptPlayer};
use ratatui::DefaultTerminal;

/// Tail of silence after the last word before the media "ends".
const TAIL_SECS: f64 = 0.25;

const TICK: Duration = Duration::from_millis(50);
const SEEK_STEP_SECS: f64 = 0.5;

#[derive(clap::Parser)]
#[command(name = "karaoke", about = "Replay a scenario transcript with karaoke highlighting")]
struct Args {
    #[arg(short, long, default_value_t = Scenario::Delays)]
    scenario: Scenario,
}

pub struct App {
    pub title: String,
    pub player: TranscriptPlayer<SimulatedResource>,
}

impl App {
    fn new(scenario: &Scenario) -> Self {
        let use_case = scenario.use_case();
        let alignment = use_case.fixture_alignment();
        let mut player = TranscriptPlayer::new(&alignment);

        let duration = player
            .segments()
            .last()
            .map(|s| s.end() + TAIL_SECS)
            .unwrap_or(TAIL_SECS);
        player.bind(SimulatedResource::new(duration));
        pump(&mut player);

        Self {
            title: use_case.config().title.to_string(),
            player,
        }
    }
}

fn pump(player: &mut TranscriptPlayer<SimulatedResource>) {
    let events = player
        .resource_mut()
        .map(SimulatedResource::drain_events)
        .unwrap_or_default();
    for event in events {
        player.handle_event(event);
    }
}

#[tokio::main]
async fn main() {
    use clap::Parser;
    let args = Args::parse();

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, App::new(&args.scenario)).await;
    ratatui::restore();

    match result {
        Ok(app) => {
            let words = app
                .player
                .segments()
                .iter()
                .filter(|s| s.is_word())
                .count();
            println!("Done. {} words in the {} transcript.", words, app.title);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(terminal: &mut DefaultTerminal, mut app: App) -> std::io::Result<App> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &app))?;

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') => {
                        if app.player.is_playing() {
                            app.player.pause();
                        } else {
                            if app.player.state() == PlayerState::Ended {
                                app.player.seek_to_time(0.0);
                            }
                            app.player.play().await;
                        }
                        pump(&mut app.player);
                    }
                    KeyCode::Char('s') => {
                        if app.player.is_scrubbing() {
                            app.player.end_scrubbing();
                        } else {
                            app.player.start_scrubbing();
                        }
                    }
                    KeyCode::Right => {
                        let target = app.player.current_time() + SEEK_STEP_SECS;
                        app.player.seek_to_time(target);
                        pump(&mut app.player);
                    }
                    KeyCode::Left => {
                        let target = app.player.current_time() - SEEK_STEP_SECS;
                        app.player.seek_to_time(target);
                        pump(&mut app.player);
                    }
                    KeyCode::Home => {
                        app.player.seek_to_time(0.0);
                        pump(&mut app.player);
                    }
                    KeyCode::End => {
                        let duration = app.player.duration();
                        app.player.seek_to_time(duration);
                        pump(&mut app.player);
                    }
                    _ => {}
                }
            }
        } else {
            let dt = last_tick.elapsed().as_secs_f64();
            last_tick = Instant::now();
            if let Some(sim) = app.player.resource_mut() {
                sim.advance(dt);
            }
            pump(&mut app.player);
        }
    }

    Ok(app)
}
