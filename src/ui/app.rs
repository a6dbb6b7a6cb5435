//! Main TUI application state and logic

use crate::compiler::{compile, CompileReport};
use crate::ui::editor::EditorBuffer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::info;

/// Lines moved by PageUp/PageDown in the output pane
const PAGE_SIZE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// Source text being edited
    pub editor: EditorBuffer,

    /// Report of the last compile, if any
    pub report: Option<CompileReport>,

    /// Text shown in the output pane
    pub output: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app editing `source`
    pub fn new(source: &str) -> Self {
        App {
            editor: EditorBuffer::from_text(source),
            report: None,
            output: String::new(),
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

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

        // Title bar, panes, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[1]);

        super::panes::render_title_bar(frame, main_chunks[0]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.editor,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_output_pane(
            frame,
            columns[1],
            &self.output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        let counts = self
            .report
            .as_ref()
            .map(|report| (report.errors.len(), report.warnings.len()));
        super::panes::render_status_bar(frame, main_chunks[2], &self.status_message, counts);
    }

    /// Compile the editor contents and show the report
    pub fn compile_source(&mut self) {
        let report = compile(&self.editor.text());
        info!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "compiled editor contents"
        );

        self.output = report.render();
        self.output_scroll = 0;
        self.status_message = format!(
            "Compilation Finished: {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
        self.report = Some(report);
    }

    /// Empty the output pane
    pub fn clear_output(&mut self) {
        self.output.clear();
        self.output_scroll = 0;
        self.report = None;
        self.status_message = "Output cleared".to_string();
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::F(5) => self.compile_source(),
            KeyCode::Char('r') if ctrl => self.compile_source(),
            KeyCode::F(6) => self.clear_output(),
            KeyCode::Char('l') if ctrl => self.clear_output(),
            KeyCode::Tab => self.focused_pane = self.focused_pane.next(),
            KeyCode::PageUp => {
                self.output_scroll = self.output_scroll.saturating_sub(PAGE_SIZE);
            }
            KeyCode::PageDown => {
                self.output_scroll = self.output_scroll.saturating_add(PAGE_SIZE);
            }
            _ => match self.focused_pane {
                FocusedPane::Source => self.handle_editor_key(key),
                FocusedPane::Output => self.handle_output_key(key),
            },
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key.code {
            KeyCode::Char(c) => self.editor.insert_char(c),
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::BackTab => self.editor.insert_indent(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Delete => self.editor.delete(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            _ => {}
        }
    }

    fn handle_output_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.output_scroll = self.output_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.output_scroll = self.output_scroll.saturating_add(1);
            }
            KeyCode::Home => self.output_scroll = 0,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_ctrl(app: &mut App, c: char) {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_type_and_compile() {
        let mut app = App::new("");
        for c in "esal() { y = 3; }".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::F(5));

        let report = app.report.as_ref().unwrap();
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings, vec!["Undeclared variable 'y' at line 1".to_string()]);
        assert!(app.output.contains("WARNINGS"));
        assert_eq!(
            app.status_message,
            "Compilation Finished: 0 error(s), 1 warning(s)"
        );
    }

    #[test]
    fn test_clear_output() {
        let mut app = App::new("esal() { }");
        press_ctrl(&mut app, 'r');
        assert!(!app.output.is_empty());

        press_ctrl(&mut app, 'l');
        assert!(app.output.is_empty());
        assert!(app.report.is_none());
        // ctrl shortcuts never reach the editor
        assert_eq!(app.editor.text(), "esal() { }");
    }

    #[test]
    fn test_focus_routes_arrow_keys() {
        let mut app = App::new("a\nb");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.editor.cursor(), (1, 0));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Output);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.editor.cursor(), (1, 0));
        assert_eq!(app.output_scroll, 1);

        // typing in the output pane does nothing
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.editor.text(), "a\nb");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new("");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new("");
        press_ctrl(&mut app, 'q');
        assert!(app.should_quit);

        let mut app = App::new("");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.editor.text(), "q");
    }
}
