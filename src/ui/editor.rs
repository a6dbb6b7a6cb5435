//! Text buffer behind the source editor pane
//!
//! Lines are stored without their terminating newline. The cursor column is
//! counted in characters, not bytes.

/// Spaces inserted for a tab key press
const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl EditorBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    /// Load `text`, cursor at the start.
    pub fn from_text(text: &str) -> Self {
        // a final newline leaves one empty line, which is where typing continues
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        Self {
            lines,
            row: 0,
            col: 0,
        }
    }

    /// Full buffer contents joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(row, column)` of the cursor, both 0-based
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_col();
        self.lines[self.row].insert(at, ch);
        self.col += 1;
    }

    pub fn insert_indent(&mut self) {
        let at = self.byte_col();
        self.lines[self.row].insert_str(at, INDENT);
        self.col += INDENT.chars().count();
    }

    /// Split the current line at the cursor.
    pub fn insert_newline(&mut self) {
        let at = self.byte_col();
        let rest = self.lines[self.row].split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Delete the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let at = self.byte_col();
            self.lines[self.row].remove(at);
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&current);
        }
    }

    /// Delete the character under the cursor, joining lines at line end.
    pub fn delete(&mut self) {
        if self.col < self.line_len(self.row) {
            let at = self.byte_col();
            self.lines[self.row].remove(at);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.line_len(self.row);
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_col(&self) -> usize {
        let line = &self.lines[self.row];
        line.char_indices()
            .nth(self.col)
            .map_or(line.len(), |(idx, _)| idx)
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_newlines() {
        let mut buffer = EditorBuffer::new();
        for ch in "## x;".chars() {
            buffer.insert_char(ch);
        }
        buffer.insert_newline();
        buffer.insert_indent();
        buffer.insert_char('@');

        assert_eq!(buffer.text(), "## x;\n    @");
        assert_eq!(buffer.cursor(), (1, 5));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buffer = EditorBuffer::from_text("ab\ncd");
        buffer.move_down();
        buffer.move_home();
        buffer.backspace();

        assert_eq!(buffer.text(), "abcd");
        assert_eq!(buffer.cursor(), (0, 2));

        buffer.backspace();
        assert_eq!(buffer.text(), "acd");
    }

    #[test]
    fn test_delete_joins_lines() {
        let mut buffer = EditorBuffer::from_text("ab\ncd");
        buffer.move_end();
        buffer.delete();
        assert_eq!(buffer.text(), "abcd");

        buffer.move_home();
        buffer.delete();
        assert_eq!(buffer.text(), "bcd");
    }

    #[test]
    fn test_cursor_clamps_to_shorter_lines() {
        let mut buffer = EditorBuffer::from_text("long line\nab\n");
        buffer.move_end();
        buffer.move_down();
        assert_eq!(buffer.cursor(), (1, 2));
        buffer.move_down();
        assert_eq!(buffer.cursor(), (2, 0));
        buffer.move_down();
        assert_eq!(buffer.cursor(), (2, 0));

        buffer.move_left();
        assert_eq!(buffer.cursor(), (1, 2));
        buffer.move_right();
        assert_eq!(buffer.cursor(), (2, 0));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut buffer = EditorBuffer::from_text("é");
        buffer.move_end();
        buffer.insert_char('x');
        assert_eq!(buffer.text(), "éx");
        buffer.move_left();
        buffer.backspace();
        assert_eq!(buffer.text(), "x");
    }
}
