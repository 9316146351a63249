//! Main TUI application state and logic

use crate::config::random::random_config;
use crate::config::SimulationConfig;
use crate::session::Session;
use crate::ui::panes::{self, TraceRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// The run being viewed
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Source for the reshuffle keys
    rng: StdRng,
}

impl App {
    pub fn new(session: Session) -> Self {
        let status_message = if session.timeline_len() == 0 {
            String::from("Nothing to simulate for this input")
        } else {
            String::from("Ready!")
        };

        App {
            session,
            should_quit: false,
            status_message,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            rng: StdRng::from_entropy(),
        }
    }

    /// Swap in a new config; playback rewinds with the regenerated traces
    fn apply(&mut self, config: SimulationConfig) {
        let summary = match config.describe_param() {
            Some(param) => format!("{}, {}", config.algorithm, param),
            None => config.algorithm.to_string(),
        };
        self.session.reconfigure(config);
        self.status_message = if self.session.timeline_len() == 0 {
            format!("{}: nothing to simulate", summary)
        } else {
            summary
        };
    }

    fn step_param(&mut self, delta: i64) {
        match self.session.config().step_param(delta) {
            Some(config) => self.apply(config),
            None => {
                self.status_message = format!(
                    "{} has no parameter to change there",
                    self.session.config().algorithm
                );
            }
        }
    }

    fn randomize(&mut self, target_exists: bool) {
        let config = random_config(self.session.config().algorithm, &mut self.rng, target_exists);
        self.apply(config);
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Auto-advance; the controller disarms itself at the last step
            let was_playing = self.session.controller().is_playing();
            if self.session.controller_mut().tick(Instant::now()) {
                self.status_message = "Playing...".to_string();
            }
            if was_playing && !self.session.controller().is_playing() {
                self.status_message = "Playback complete".to_string();
                self.report_outcome();
            }

            // Poll with a timeout so auto-play keeps ticking
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

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Trace panels, stats, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(size);

        let mut panels = Vec::new();
        let mode = self.session.mode();
        if mode.shows_brute_force() {
            panels.push(self.brute_force_data());
        }
        if mode.shows_optimal() {
            panels.push(self.optimal_data());
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, panels.len() as u32); panels.len()])
            .split(main_chunks[0]);

        for (data, column) in panels.iter().zip(columns.iter()) {
            Self::render_trace(frame, *column, data);
        }

        panes::render_stats_pane(
            frame,
            main_chunks[1],
            self.session.config(),
            self.session.stats(),
        );

        panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.session.controller(),
            mode,
        );
    }

    /// Array on top, inspector below
    fn render_trace(frame: &mut Frame, area: Rect, data: &TraceRenderData) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        panes::render_array_pane(frame, rows[0], data);
        panes::render_inspector_pane(frame, rows[1], data);
    }

    fn optimal_data(&self) -> TraceRenderData<'_> {
        let index = self.session.optimal_index();
        TraceRenderData {
            title: "Optimal",
            complexity: self.session.config().algorithm.complexity().optimal,
            step: self.session.current_optimal(),
            index,
            len: self.session.optimal().len(),
            is_active: self.is_advancing(index),
        }
    }

    fn brute_force_data(&self) -> TraceRenderData<'_> {
        let index = self.session.brute_force_index();
        TraceRenderData {
            title: "Brute force",
            complexity: self.session.config().algorithm.complexity().brute_force,
            step: self.session.current_brute_force(),
            index,
            len: self.session.brute_force().len(),
            is_active: self.is_advancing(index),
        }
    }

    /// A side is frozen once the timeline has run past its last step
    fn is_advancing(&self, display_index: Option<usize>) -> bool {
        display_index == Some(self.session.controller().current_index())
    }

    /// Log the final outcome for anyone tailing the log file
    fn report_outcome(&self) {
        if let Some(outcome) = self.session.outcome() {
            info!(
                "{} finished: optimal {:?}, brute force {:?}, saved {} steps ({}%)",
                outcome.algorithm,
                outcome.optimal.map(|o| o.phase),
                outcome.brute_force.map(|o| o.phase),
                outcome.stats.saved_ops,
                outcome.stats.efficiency_gain
            );
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let controller = self.session.controller_mut();
                controller.pause();
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if controller.step_forward() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                let mode = self.session.mode().next();
                self.session.set_mode(mode);
                self.status_message = format!("Showing {}", mode);
            }
            KeyCode::Left => {
                self.session.controller_mut().pause();
                self.status_message = if self.session.controller_mut().step_back() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.session.controller_mut().pause();
                self.status_message = if self.session.controller_mut().step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
                if self.session.controller().at_end() {
                    self.report_outcome();
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    let controller = self.session.controller_mut();
                    let was_playing = controller.is_playing();
                    self.status_message = if controller.toggle(Instant::now()) {
                        "Playing...".to_string()
                    } else if was_playing {
                        "Paused".to_string()
                    } else {
                        "Nothing left to play".to_string()
                    };
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.session.controller_mut().faster();
                self.status_message = format!("Speed {}x", self.session.controller().speed());
            }
            KeyCode::Char('-') => {
                self.session.controller_mut().slower();
                self.status_message = format!("Speed {}x", self.session.controller().speed());
            }
            KeyCode::Enter => {
                // Jump to end of the timeline
                let controller = self.session.controller_mut();
                controller.pause();
                controller.seek(usize::MAX);
                self.status_message = "Jumped to end".to_string();
                self.report_outcome();
            }
            KeyCode::Backspace => {
                self.session.controller_mut().reset();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('[') => self.step_param(-1),
            KeyCode::Char(']') => self.step_param(1),
            // Random input; lowercase keeps the target reachable
            KeyCode::Char('r') => self.randomize(true),
            KeyCode::Char('R') => self.randomize(false),
            KeyCode::Char('a') => {
                let algorithm = self.session.config().algorithm.next();
                self.apply(SimulationConfig::preset(algorithm));
            }
            _ => {}
        }
    }
}
