use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::config::Difficulty;
use crate::game::session::Session;

/// Milliseconds between frame ticks (~60 per second).
pub const TICK_RATE_MS: u64 = 16;

/// Frame ticks that make up one countdown second.
const TICKS_PER_SECOND: u64 = 1000 / TICK_RATE_MS;

/// Which screen the app is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Countdown,
    Playing,
    Result,
}

/// The three-second intro counter. Steps once per elapsed second; the
/// session does not exist until it finishes, so it cannot overlap with
/// gameplay ticking. Not cancelable once started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u8,
    ticks: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            remaining: 3,
            ticks: 0,
        }
    }

    /// Advances by one frame tick, stepping the second counter whenever a
    /// full second of ticks has accumulated. Returns true once finished.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= TICKS_PER_SECOND {
            self.ticks = 0;
            self.step();
        }
        self.remaining == 0
    }

    /// One one-second step.
    pub fn step(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// The digit to display, or None once the count has run out.
    pub fn digit(&self) -> Option<u8> {
        (self.remaining > 0).then_some(self.remaining)
    }
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    /// Title screen tile selection.
    pub selected: usize,
    pub countdown: Countdown,
    pub difficulty: Option<Difficulty>,
    pub session: Option<Session>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: Screen::Title,
            selected: 0,
            countdown: Countdown::new(),
            difficulty: None,
            session: None,
        }
    }

    pub fn on_tick(&mut self) {
        match self.screen {
            Screen::Countdown => {
                if self.countdown.tick() {
                    self.start_playing();
                }
            }
            Screen::Playing => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                if !session.is_running() {
                    return;
                }
                session.tick();
                if session.outcome().is_some() {
                    self.screen = Screen::Result;
                }
            }
            Screen::Title | Screen::Result => {}
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Title => self.on_title_key(key),
            // The countdown cannot be canceled or skipped
            Screen::Countdown => {}
            Screen::Playing => self.on_playing_key(key),
            Screen::Result => self.on_result_key(key),
        }
    }

    /// Difficulty selection arrives as the chosen tile's name string. An
    /// unrecognized name is rejected and no countdown starts.
    pub fn select_difficulty(&mut self, name: &str) {
        if let Ok(difficulty) = name.parse::<Difficulty>() {
            self.difficulty = Some(difficulty);
            self.countdown = Countdown::new();
            self.screen = Screen::Countdown;
        }
    }

    fn start_playing(&mut self) {
        let Some(difficulty) = self.difficulty else {
            return;
        };
        self.session = Some(Session::new(difficulty));
        self.screen = Screen::Playing;
    }

    /// Back to the title screen. The session is dropped whole; nothing
    /// carries over into the next game.
    fn restart(&mut self) {
        self.session = None;
        self.difficulty = None;
        self.screen = Screen::Title;
    }

    fn on_title_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let count = Difficulty::all().len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Left => self.selected = (self.selected + count - 1) % count,
            KeyCode::Right => self.selected = (self.selected + 1) % count,
            KeyCode::Char('1') => self.select_difficulty("easy"),
            KeyCode::Char('2') => self.select_difficulty("normal"),
            KeyCode::Char('3') => self.select_difficulty("hard"),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_difficulty(Difficulty::all()[self.selected].name());
            }
            _ => {}
        }
    }

    fn on_playing_key(&mut self, key: KeyEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        // Press and release both matter here: the flags stay set exactly as
        // long as the key is held.
        let pressed = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);
        match key.code {
            KeyCode::Left => {
                if pressed {
                    session.paddle.press_left();
                } else {
                    session.paddle.release_left();
                }
            }
            KeyCode::Right => {
                if pressed {
                    session.paddle.press_right();
                } else {
                    session.paddle.release_right();
                }
            }
            _ => {}
        }
    }

    fn on_result_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            _ => {}
        }
    }
}
