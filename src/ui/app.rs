//! Main TUI application state and logic

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::engine::{run_operation, Operation};
use crate::list::DoublyLinkedList;
use crate::playback::{PlaybackController, PlaybackMode, BASE_PERIOD_MS};

/// How far one press of `+`/`-` moves the speed slider.
const SPEED_STEP: u64 = 200;

/// Which operation the open prompt is collecting input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptOp {
    InsertBeginning,
    InsertEnd,
    InsertPosition,
    Delete,
}

impl PromptOp {
    fn title(self) -> &'static str {
        match self {
            PromptOp::InsertBeginning => "insert at beginning",
            PromptOp::InsertEnd => "insert at end",
            PromptOp::InsertPosition => "insert at position",
            PromptOp::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptField {
    Value,
    Position,
}

/// In-progress operation input, typed into the status bar.
#[derive(Debug)]
struct Prompt {
    op: PromptOp,
    value: String,
    position: String,
    field: PromptField,
}

impl Prompt {
    fn new(op: PromptOp) -> Self {
        Prompt {
            op,
            value: String::new(),
            position: String::new(),
            field: PromptField::Value,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self.field {
            PromptField::Value => &mut self.value,
            PromptField::Position => &mut self.position,
        }
    }

    fn display(&self) -> String {
        match self.field {
            PromptField::Value => format!("{}: value = {}_ (enter to confirm, esc to cancel)", self.op.title(), self.value),
            PromptField::Position => format!(
                "{}: value = {}, position = {}_ (enter to confirm, esc to cancel)",
                self.op.title(),
                self.value,
                self.position
            ),
        }
    }
}

/// The main application state
pub struct App {
    /// The list under visualization
    pub list: DoublyLinkedList,

    /// Playback over the most recent operation's trace
    pub controller: PlaybackController,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Open operation prompt, if any
    prompt: Option<Prompt>,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app over a seeded list.
    pub fn new(list: DoublyLinkedList) -> Self {
        App {
            list,
            controller: PlaybackController::new(),
            should_quit: false,
            status_message: String::from("Ready! Press b/e/p/d to run an operation."),
            prompt: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Auto-play: apply a due tick, if any
            if self.controller.poll(Instant::now()) {
                self.status_message = match self.controller.mode() {
                    PlaybackMode::Finished => "Playback complete".to_string(),
                    _ => self.current_step_message(),
                };
            }

            // Poll with timeout so auto-play keeps ticking between key events
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
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        super::panes::render_list_pane(frame, rows[0], &self.list, self.controller.current_step());

        super::panes::render_trace_pane(
            frame,
            rows[1],
            self.controller.trace(),
            self.controller.cursor(),
        );

        let prompt_line = self.prompt.as_ref().map(|p| p.display());
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            prompt_line.as_deref(),
            self.controller.cursor(),
            self.controller.trace().len(),
            self.controller.mode(),
            self.controller.speed(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('b') => self.open_prompt(PromptOp::InsertBeginning),
            KeyCode::Char('e') => self.open_prompt(PromptOp::InsertEnd),
            KeyCode::Char('p') => self.open_prompt(PromptOp::InsertPosition),
            KeyCode::Char('d') => self.open_prompt(PromptOp::Delete),
            KeyCode::Char(' ') => {
                // Toggle auto-play (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Left => {
                self.controller.step_backward();
                self.status_message = self.current_step_message();
            }
            KeyCode::Right => {
                self.controller.step_forward();
                self.status_message = self.current_step_message();
            }
            KeyCode::Char('r') | KeyCode::Backspace => {
                self.controller.reset();
                self.status_message = "Rewound to the first step".to_string();
            }
            KeyCode::Enter => {
                self.controller.seek_to_end();
                self.status_message = self.current_step_message();
            }
            KeyCode::Char('+') | KeyCode::Up => {
                let speed = (self.controller.speed() + SPEED_STEP).min(BASE_PERIOD_MS);
                self.controller.set_speed(speed);
                self.status_message = format!(
                    "Speed {} (tick every {}ms)",
                    speed,
                    self.controller.period().as_millis()
                );
            }
            KeyCode::Char('-') | KeyCode::Down => {
                let speed = self.controller.speed().saturating_sub(SPEED_STEP);
                self.controller.set_speed(speed);
                self.status_message = format!(
                    "Speed {} (tick every {}ms)",
                    speed,
                    self.controller.period().as_millis()
                );
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                self.status_message = "Cancelled".to_string();
            }
            KeyCode::Enter => self.submit_prompt(),
            KeyCode::Backspace => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.buffer_mut().pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.buffer_mut().push(c);
                }
            }
            _ => {}
        }
    }

    fn open_prompt(&mut self, op: PromptOp) {
        self.controller.pause();
        self.prompt = Some(Prompt::new(op));
    }

    fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        // The position prompt collects two fields; enter moves on to the second
        if prompt.op == PromptOp::InsertPosition && prompt.field == PromptField::Value {
            prompt.field = PromptField::Position;
            return;
        }

        let prompt = match self.prompt.take() {
            Some(p) => p,
            None => return,
        };

        let value: i64 = match prompt.value.parse() {
            Ok(v) => v,
            Err(_) => {
                self.status_message = format!("'{}' is not a valid value", prompt.value);
                return;
            }
        };

        let op = match prompt.op {
            PromptOp::InsertBeginning => Operation::InsertAtBeginning { value },
            PromptOp::InsertEnd => Operation::InsertAtEnd { value },
            PromptOp::InsertPosition => {
                let position: usize = match prompt.position.parse() {
                    Ok(p) => p,
                    Err(_) => {
                        self.status_message =
                            format!("'{}' is not a valid position", prompt.position);
                        return;
                    }
                };
                Operation::InsertAtPosition { value, position }
            }
            PromptOp::Delete => Operation::Delete { value },
        };

        let trace = run_operation(&mut self.list, op);
        let steps = trace.len();
        self.controller.load(trace);
        self.status_message = format!("Recorded {} steps. Space to play, → to step.", steps);
    }

    fn toggle_play(&mut self) {
        match self.controller.mode() {
            PlaybackMode::Playing => {
                self.controller.pause();
                self.status_message = "Paused".to_string();
            }
            _ => {
                self.controller.play(Instant::now());
                self.status_message = match self.controller.mode() {
                    PlaybackMode::Playing => "Playing...".to_string(),
                    _ => "Nothing to play. Run an operation first.".to_string(),
                };
            }
        }
    }

    fn current_step_message(&self) -> String {
        self.controller
            .current_step()
            .map(|s| s.message.clone())
            .unwrap_or_else(|| "No trace loaded".to_string())
    }
}
