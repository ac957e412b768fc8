//! Main TUI application state and logic

use crate::display::LatestDisplay;
use crate::input::{decode_key, Input};
use crate::session::Session;
use crate::ui::panes::{self, Button};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long a pressed button stays highlighted
const PRESS_FLASH: Duration = Duration::from_millis(150);

/// Width of the calculator body in columns
const BODY_WIDTH: u16 = 36;

/// The main application state
pub struct App {
    /// Calculator session; its display sink holds the text for the display pane
    pub session: Session<LatestDisplay>,

    /// Keypad buttons as placed by the last render (used for mouse hit-testing)
    pub buttons: Vec<Button>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last pressed input and when, for the keypad highlight
    pub last_press: Option<(Input, Instant)>,
}

impl App {
    pub fn new() -> Self {
        App {
            session: Session::new(LatestDisplay::default()),
            buttons: Vec::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_press: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("calculator started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so the press highlight can expire
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        info!("calculator closed");
        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let body_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Center a fixed-width body
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(BODY_WIDTH),
                Constraint::Min(0),
            ])
            .split(body_area);

        // Display (top) | Keypad (bottom)
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(columns[1]);

        let calculator = self.session.calculator();

        panes::render_display_pane(
            frame,
            rows[0],
            self.session.display().text(),
            calculator.pending_operator(),
            calculator.is_error(),
        );

        let pressed = self
            .last_press
            .filter(|(_, at)| at.elapsed() < PRESS_FLASH)
            .map(|(input, _)| input);
        self.buttons = panes::render_keypad_pane(frame, rows[1], pressed);

        panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.session.calculator().phase(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {
                if let Some(input) = decode_key(key) {
                    self.press(input);
                }
            }
        }
    }

    /// Handle mouse events: a left click presses the button under the pointer
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(button) = panes::hit_test(&self.buttons, mouse.column, mouse.row) else {
            return;
        };
        debug!(label = button.label, "button clicked");
        let input = button.input;
        self.press(input);
    }

    /// Feed one input to the session and update the status line
    fn press(&mut self, input: Input) {
        self.last_press = Some((input, Instant::now()));
        self.status_message = match self.session.handle(input) {
            Ok(()) => format!("Pressed {}", input.label()),
            Err(e) => e.to_string(),
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
