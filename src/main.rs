mod constants;
mod input;
mod minigame;
mod session;
mod species;
mod ui;

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use constants::REALTIME_FRAME_MS;
use input::ThrustAdapter;
use minigame::types::Phase;
use session::ReelSession;
use ui::reel_scene;
use ui::species_select::{self, SpeciesMenu};

enum Screen {
    SpeciesSelect,
    Fishing,
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;

    // Key-release reporting needs the enhanced keyboard protocol; without
    // it the input adapter falls back to its synthetic hold window.
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, release_events);

    // Cleanup terminal
    if release_events {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    release_events: bool,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut menu = SpeciesMenu::new();
    let mut screen = Screen::SpeciesSelect;
    let mut session: Option<ReelSession> = None;

    // The session reports its outcome here exactly once; the menu shows it.
    let last_result: Rc<Cell<Option<bool>>> = Rc::new(Cell::new(None));

    'app: loop {
        match screen {
            Screen::SpeciesSelect => {
                menu.last_result = last_result.get();
                terminal.draw(|frame| species_select::draw(frame, &menu))?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Char('Q') => break 'app,
                            KeyCode::Up => menu.previous(),
                            KeyCode::Down => menu.next(),
                            KeyCode::Enter => {
                                let species = menu.selected_species();
                                let mut new_session = ReelSession::start(species.name())
                                    .expect("menu species are always in the catalog");
                                let outcome = Rc::clone(&last_result);
                                new_session.set_on_end(move |won| outcome.set(Some(won)));
                                session = Some(new_session);
                                screen = Screen::Fishing;
                            }
                            _ => {}
                        }
                    }
                }
            }

            Screen::Fishing => {
                let mut live = session
                    .take()
                    .expect("session is initialized when entering the reel scene");
                let mut adapter = ThrustAdapter::new(release_events);
                let mut last_frame = Instant::now();

                loop {
                    terminal.draw(|frame| reel_scene::draw(frame, &live))?;

                    // Drain pending input before the next physics frame.
                    if event::poll(Duration::from_millis(5))? {
                        while event::poll(Duration::from_millis(0))? {
                            let ev = event::read()?;

                            if live.phase() != Phase::Fishing {
                                // Result overlay: any key press returns to the menu.
                                if matches!(&ev, Event::Key(key) if key.kind == KeyEventKind::Press)
                                {
                                    screen = Screen::SpeciesSelect;
                                    continue 'app;
                                }
                                continue;
                            }

                            if let Event::Key(key) = &ev {
                                if key.code == KeyCode::Esc && key.kind == KeyEventKind::Press {
                                    live.stop();
                                    screen = Screen::SpeciesSelect;
                                    continue 'app;
                                }
                            }

                            if let Some(engaged) = adapter.handle_event(&ev) {
                                live.set_thrust(engaged);
                            }
                        }
                    }

                    if last_frame.elapsed() >= Duration::from_millis(REALTIME_FRAME_MS) {
                        if let Some(engaged) = adapter.on_frame() {
                            live.set_thrust(engaged);
                        }
                        live.tick(&mut rng);
                        last_frame = Instant::now();
                    }
                }
            }
        }
    }

    Ok(())
}
