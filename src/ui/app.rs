//! Main TUI application state and logic

use crate::catalog::{Algorithm, Family};
use crate::config::{generate_array, pick_target, ArrayConfig, Speed};
use crate::errors::PlaybackError;
use crate::player::Player;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Bars,
    Info,
    Code,
}

impl FocusedPane {
    /// Move focus to the next pane (bars -> info -> code)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Bars => FocusedPane::Info,
            FocusedPane::Info => FocusedPane::Code,
            FocusedPane::Code => FocusedPane::Bars,
        }
    }
}

/// Everything the app needs to produce its first trace
pub struct Session {
    pub algorithm: Algorithm,
    pub input: Vec<i64>,
    pub target: i64,
    pub array_config: ArrayConfig,
    pub speed: Speed,
    pub rng: StdRng,
}

/// The main application state
pub struct App {
    pub algorithm: Algorithm,

    /// Caller's array; every run clones it
    pub input: Vec<i64>,

    /// Search target (ignored by sorting algorithms)
    pub target: i64,

    pub array_config: ArrayConfig,

    pub speed: Speed,

    rng: StdRng,

    /// Cursor over the current trace
    pub player: Player,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub info_scroll: usize,
    pub code_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session) -> Self {
        let player = Player::new(session.algorithm.run(&session.input, session.target));
        App {
            algorithm: session.algorithm,
            input: session.input,
            target: session.target,
            array_config: session.array_config,
            speed: session.speed,
            rng: session.rng,
            player,
            focused_pane: FocusedPane::Bars,
            info_scroll: 0,
            code_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.speed.delay() {
                self.advance_playback();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// One auto-play tick; `Instant` speed finishes the trace at once
    fn advance_playback(&mut self) {
        if self.speed == Speed::Instant {
            self.player.jump_to_end();
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
            return;
        }
        match self.player.step_forward() {
            Ok(()) => self.status_message = "Playing...".to_string(),
            Err(PlaybackError::AtEnd) | Err(PlaybackError::AtStart) => {
                self.is_playing = false;
                self.status_message = "Playback complete".to_string();
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[0]);

        // Left column: bars (top) | step info (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        super::panes::render_bars_pane(
            frame,
            left_rows[0],
            super::panes::BarsRenderData {
                run: self.player.run(),
                position: self.player.position(),
            },
            self.focused_pane == FocusedPane::Bars,
        );

        super::panes::render_info_pane(
            frame,
            left_rows[1],
            super::panes::InfoRenderData {
                algorithm: self.algorithm,
                run: self.player.run(),
                description: self.player.description(),
                stats: self.player.stats(),
                array_len: self.input.len(),
            },
            self.focused_pane == FocusedPane::Info,
            &mut self.info_scroll,
        );

        super::panes::render_code_pane(
            frame,
            columns[1],
            self.algorithm.info().code,
            self.focused_pane == FocusedPane::Code,
            &mut self.code_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.player.position(),
                total_steps: self.player.total_steps(),
                speed: self.speed,
                is_playing: self.is_playing,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.player.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Info => self.info_scroll = self.info_scroll.saturating_sub(1),
                FocusedPane::Code => self.code_scroll = self.code_scroll.saturating_sub(1),
                FocusedPane::Bars => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Info => self.info_scroll = self.info_scroll.saturating_add(1),
                FocusedPane::Code => self.code_scroll = self.code_scroll.saturating_add(1),
                FocusedPane::Bars => {}
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        if self.player.is_at_end() {
                            self.player.rewind_to_start();
                        }
                        self.last_play_time = Instant::now()
                            .checked_sub(self.speed.delay())
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.player.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.player.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('a') => self.select_algorithm(self.algorithm.next()),
            KeyCode::Char('A') => self.select_algorithm(self.algorithm.prev()),
            KeyCode::Char('r') => self.regenerate_array(),
            KeyCode::Char('t') => {
                if self.algorithm.family() == Family::Searching {
                    self.target = pick_target(&self.input, &mut self.rng);
                    self.rebuild();
                    self.status_message = format!("New target: {}", self.target);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.speed = self.speed.faster();
                self.status_message = format!("Speed: {}", self.speed);
            }
            KeyCode::Char('-') => {
                self.speed = self.speed.slower();
                self.status_message = format!("Speed: {}", self.speed);
            }
            _ => {}
        }
    }

    fn step_forward(&mut self) {
        match self.player.step_forward() {
            Ok(()) => self.status_message = "Stepped forward".to_string(),
            Err(e) => self.status_message = format!("Cannot step forward: {}", e),
        }
    }

    fn step_backward(&mut self) {
        match self.player.step_backward() {
            Ok(()) => self.status_message = "Stepped backward".to_string(),
            Err(e) => self.status_message = format!("Cannot step backward: {}", e),
        }
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.code_scroll = 0;
        self.rebuild();
        self.status_message = format!("Selected {}", algorithm);
    }

    fn regenerate_array(&mut self) {
        self.array_config = ArrayConfig {
            size: self.array_config.size,
            ..ArrayConfig::for_family(self.algorithm.family())
        };
        match generate_array(&self.array_config, &mut self.rng) {
            Ok(array) => {
                self.input = array;
                self.target = pick_target(&self.input, &mut self.rng);
                self.rebuild();
                self.status_message = "Generated new array".to_string();
            }
            Err(e) => self.status_message = format!("Cannot generate array: {}", e),
        }
    }

    /// Discard the current trace and record a fresh one from the current inputs
    fn rebuild(&mut self) {
        self.is_playing = false;
        self.info_scroll = 0;
        self.player = Player::new(self.algorithm.run(&self.input, self.target));
        tracing::info!(
            algorithm = %self.algorithm,
            len = self.input.len(),
            steps = self.player.total_steps(),
            "trace rebuilt"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searching::SearchAlgorithm;
    use crate::sorting::SortAlgorithm;
    use rand::SeedableRng;

    fn app(algorithm: Algorithm, input: Vec<i64>) -> App {
        App::new(Session {
            algorithm,
            array_config: ArrayConfig::for_family(algorithm.family()),
            target: input.first().copied().unwrap_or(0),
            input,
            speed: Speed::Medium,
            rng: StdRng::seed_from_u64(42),
        })
    }

    #[test]
    fn test_arrow_keys_move_player() {
        let mut app = app(Algorithm::Sort(SortAlgorithm::Bubble), vec![3, 2, 1]);
        app.handle_key_event(KeyEvent::from(KeyCode::Right));
        app.handle_key_event(KeyEvent::from(KeyCode::Right));
        assert_eq!(app.player.position(), 2);

        app.handle_key_event(KeyEvent::from(KeyCode::Left));
        assert_eq!(app.player.position(), 1);

        app.handle_key_event(KeyEvent::from(KeyCode::Enter));
        assert!(app.player.is_at_end());
        app.handle_key_event(KeyEvent::from(KeyCode::Right));
        assert!(app.status_message.starts_with("Cannot step forward"));
    }

    #[test]
    fn test_switching_algorithm_keeps_input_and_resets_cursor() {
        let mut app = app(Algorithm::Sort(SortAlgorithm::Bubble), vec![3, 2, 1]);
        app.handle_key_event(KeyEvent::from(KeyCode::Char('5')));
        app.handle_key_event(KeyEvent::from(KeyCode::Char('a')));

        assert_eq!(app.algorithm, Algorithm::Sort(SortAlgorithm::Quick));
        assert_eq!(app.player.position(), 0);
        assert_eq!(app.player.run().name(), "Quick Sort");
        assert_eq!(app.input, vec![3, 2, 1]);
    }

    #[test]
    fn test_regenerate_uses_family_range() {
        let mut app = app(Algorithm::Search(SearchAlgorithm::Linear), vec![1, 2, 3]);
        app.array_config.size = 30;
        app.handle_key_event(KeyEvent::from(KeyCode::Char('r')));

        assert_eq!(app.input.len(), 30);
        assert!(app.input.iter().all(|v| (10..=100).contains(v)));
        assert!(app.input.contains(&app.target));
    }

    #[test]
    fn test_instant_speed_finishes_in_one_tick() {
        let mut app = app(Algorithm::Sort(SortAlgorithm::Merge), vec![5, 4, 3, 2, 1]);
        app.speed = Speed::Instant;
        app.is_playing = true;
        app.advance_playback();
        assert!(app.player.is_at_end());
        app.advance_playback();
        assert!(!app.is_playing);
    }
}
