use ropey::Rope;
use unicode_width::UnicodeWidthStr;

/// Characters ropey counts as line breaks besides `'\n'`.
const LINE_BREAKS: [char; 6] = ['\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}'];

/// Rewrite every line break as `'\n'` (or a space for single-line text)
/// so the rope's lines match the cursor's.
pub(crate) fn normalize_breaks(text: &str, single_line: bool) -> String {
    let text = text.replace("\r\n", "\n").replace(LINE_BREAKS, "\n");
    if single_line {
        text.replace('\n', " ")
    } else {
        text
    }
}

fn is_line_break(ch: char) -> bool {
    ch == '\n' || LINE_BREAKS.contains(&ch)
}

/// Cursor position in a text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (byte offset within the line).
    pub col: usize,
    /// Remembered column for vertical movement (sticky column).
    col_memory: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            col_memory: 0,
        }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            col_memory: col,
        }
    }

    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_memory = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editable text backing one form field.
///
/// A single-line buffer never contains `'\n'`: [`TextBuffer::split_line`]
/// is ignored and pasted newlines become spaces.
#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: Cursor,
    single_line: bool,
    dirty: bool,
}

impl TextBuffer {
    /// Empty single-line buffer (the title field).
    pub fn single_line() -> Self {
        Self {
            rope: Rope::new(),
            cursor: Cursor::new(),
            single_line: true,
            dirty: false,
        }
    }

    /// Empty multi-line buffer (the content field).
    pub fn multi_line() -> Self {
        Self {
            rope: Rope::new(),
            cursor: Cursor::new(),
            single_line: false,
            dirty: false,
        }
    }

    /// Replace the whole text and park the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(&normalize_breaks(text, self.single_line));
        self.move_to_end();
        self.dirty = false;
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
        self.cursor = Cursor::new();
        self.dirty = false;
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the text changed since the last `set_text`/`clear`.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line without its trailing newline.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let s = self.rope.line(line_idx).to_string();
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Length of a line in bytes (without trailing newline).
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.len())
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Terminal column of the cursor within its line.
    pub fn cursor_display_col(&self) -> usize {
        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let col = self.cursor.col.min(line.len());
        line[..col].width()
    }

    pub fn insert_char(&mut self, ch: char) {
        if is_line_break(ch) {
            self.split_line();
            return;
        }
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, ch);
        self.cursor.set_col(self.cursor.col + ch.len_utf8());
        self.dirty = true;
    }

    /// Insert pasted text at the cursor.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let s = normalize_breaks(s, self.single_line);
        let char_idx = self.cursor_char_idx();
        self.rope.insert(char_idx, &s);

        let lines: Vec<&str> = s.split('\n').collect();
        if lines.len() > 1 {
            self.cursor.line += lines.len() - 1;
            self.cursor.set_col(lines.last().map_or(0, |l| l.len()));
        } else {
            self.cursor.set_col(self.cursor.col + s.len());
        }
        self.dirty = true;
    }

    /// Break the line at the cursor. Ignored for single-line buffers.
    pub fn split_line(&mut self) {
        if self.single_line {
            return;
        }
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, '\n');
        self.cursor.line += 1;
        self.cursor.set_col(0);
        self.dirty = true;
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        self.clamp_col();
        if self.cursor.col == 0 && self.cursor.line == 0 {
            return false;
        }

        let char_idx = self.cursor_char_idx();
        if self.cursor.col == 0 {
            let prev_line_len = self.line_len(self.cursor.line - 1);
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.line -= 1;
            self.cursor.set_col(prev_line_len);
        } else {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let prev_char_len = line[..self.cursor.col]
                .chars()
                .next_back()
                .map_or(1, char::len_utf8);
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.set_col(self.cursor.col - prev_char_len);
        }
        self.dirty = true;
        true
    }

    /// Delete the character at the cursor (Delete).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        self.clamp_col();
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col >= line_len && self.cursor.line + 1 >= self.line_count() {
            return false;
        }
        let char_idx = self.cursor_char_idx();
        self.rope.remove(char_idx..=char_idx);
        self.dirty = true;
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor.set_col(0);
    }

    pub fn move_end(&mut self) {
        let len = self.line_len(self.cursor.line);
        self.cursor.set_col(len);
    }

    pub fn move_to_end(&mut self) {
        let last_line = self.line_count().saturating_sub(1);
        self.cursor.line = last_line;
        self.cursor.set_col(self.line_len(last_line));
    }

    /// Keep the column inside the current line before slicing it.
    fn clamp_col(&mut self) {
        let len = self.line_len(self.cursor.line);
        if self.cursor.col > len {
            self.cursor.col = len;
        }
    }

    fn cursor_char_idx(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.line);
        let line_str: String = self.rope.line(self.cursor.line).chars().collect();
        let byte_col = self.cursor.col.min(line_str.len());
        line_start + line_str[..byte_col].chars().count()
    }

    fn move_left(&mut self) {
        self.clamp_col();
        if self.cursor.col > 0 {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let prev_char_len = line[..self.cursor.col]
                .chars()
                .next_back()
                .map_or(1, char::len_utf8);
            self.cursor.set_col(self.cursor.col - prev_char_len);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.set_col(self.line_len(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        self.clamp_col();
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col < line_len {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let next_char_len = line[self.cursor.col..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.cursor.set_col(self.cursor.col + next_char_len);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        }
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            let max_col = self.line_len(self.cursor.line);
            self.cursor.col = self.cursor.col_memory.min(max_col);
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            let max_col = self.line_len(self.cursor.line);
            self.cursor.col = self.cursor.col_memory.min(max_col);
        }
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field("text", &self.rope.to_string())
            .field("cursor", &self.cursor)
            .field("single_line", &self.single_line)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(text: &str) -> TextBuffer {
        let mut buf = TextBuffer::multi_line();
        buf.set_text(text);
        buf
    }

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = TextBuffer::multi_line();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_set_text_moves_cursor_to_end_and_is_clean() {
        let buf = content("hello\nworld");
        assert_eq!(buf.cursor(), Cursor::at(1, 5));
        assert!(!buf.is_dirty());
        assert_eq!(buf.text(), "hello\nworld");
    }

    #[test]
    fn test_insert_char_marks_dirty() {
        let mut buf = TextBuffer::single_line();
        buf.insert_char('a');
        buf.insert_char('b');
        assert_eq!(buf.text(), "ab");
        assert!(buf.is_dirty());
    }

    #[test]
    fn test_insert_in_middle() {
        let mut buf = content("hllo");
        buf.move_home();
        buf.move_cursor(Direction::Right);
        buf.insert_char('e');
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_single_line_ignores_newlines() {
        let mut buf = TextBuffer::single_line();
        buf.insert_str("one\ntwo\r\nthree");
        buf.split_line();
        buf.insert_char('\n');
        assert_eq!(buf.text(), "one two three");
        assert_eq!(buf.line_count(), 1);
    }

    #[test]
    fn test_single_line_set_text_flattens() {
        let mut buf = TextBuffer::single_line();
        buf.set_text("a\nb");
        assert_eq!(buf.text(), "a b");
    }

    #[test]
    fn test_multi_line_split_and_join() {
        let mut buf = content("hello");
        buf.split_line();
        buf.insert_str("world");
        assert_eq!(buf.text(), "hello\nworld");

        buf.move_home();
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "helloworld");
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    #[test]
    fn test_insert_str_multi_line_places_cursor_after_text() {
        let mut buf = TextBuffer::multi_line();
        buf.insert_str("a\r\nbc");
        assert_eq!(buf.text(), "a\nbc");
        assert_eq!(buf.cursor(), Cursor::at(1, 2));
    }

    #[test]
    fn test_lone_carriage_return_splits_lines() {
        let mut buf = TextBuffer::multi_line();
        buf.insert_str("a\rb");
        assert_eq!(buf.text(), "a\nb");
        assert_eq!(buf.cursor(), Cursor::at(1, 1));

        assert!(buf.delete_back());
        assert_eq!(buf.text(), "a\n");
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "a");
        assert_eq!(buf.cursor(), Cursor::at(0, 1));
    }

    #[test]
    fn test_typing_after_carriage_return_paste_stays_on_last_line() {
        let mut buf = TextBuffer::multi_line();
        buf.insert_str("a\rb");
        buf.insert_char('c');
        assert_eq!(buf.text(), "a\nbc");
        assert_eq!(buf.cursor(), Cursor::at(1, 2));
    }

    #[test]
    fn test_unicode_line_separators_become_newlines() {
        let mut buf = TextBuffer::multi_line();
        buf.insert_str("x\u{2028}y\u{85}z\u{2029}");
        assert_eq!(buf.text(), "x\ny\nz\n");
        assert_eq!(buf.cursor(), Cursor::at(3, 0));
        buf.insert_char('\r');
        assert_eq!(buf.line_count(), 5);
        assert!(buf.delete_back());
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "x\ny\nz");
    }

    #[test]
    fn test_single_line_flattens_every_break() {
        let mut buf = TextBuffer::single_line();
        buf.insert_str("a\rb\u{2029}c");
        buf.insert_char('\r');
        assert_eq!(buf.text(), "a b c");
        assert_eq!(buf.line_count(), 1);
    }

    #[test]
    fn test_set_text_normalizes_stored_breaks() {
        let mut buf = content("one\rtwo");
        assert_eq!(buf.text(), "one\ntwo");
        assert_eq!(buf.cursor(), Cursor::at(1, 3));
        buf.move_cursor(Direction::Left);
        buf.move_cursor(Direction::Right);
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "one\ntw");
    }

    #[test]
    fn test_stale_column_is_clamped() {
        let mut buf = content("abc");
        buf.cursor.col = 40;
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));

        buf.cursor.col = 40;
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "ab");
        assert!(!buf.delete_forward());
    }

    #[test]
    fn test_delete_back_at_origin_is_noop() {
        let mut buf = TextBuffer::single_line();
        assert!(!buf.delete_back());
    }

    #[test]
    fn test_delete_back_multibyte() {
        let mut buf = content("café");
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "caf");
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = content("ab");
        assert!(!buf.delete_forward());
        buf.move_home();
        assert!(buf.delete_forward());
        assert_eq!(buf.text(), "b");
    }

    #[test]
    fn test_vertical_movement_remembers_column() {
        let mut buf = content("long line\nab\nanother line");
        buf.move_cursor(Direction::Up);
        buf.move_cursor(Direction::Up);
        assert_eq!(buf.cursor().line, 0);
        assert_eq!(buf.cursor().col, 9);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().col, 2);
    }

    #[test]
    fn test_cursor_display_col_uses_width() {
        let mut buf = TextBuffer::single_line();
        buf.insert_str("日本");
        assert_eq!(buf.cursor_display_col(), 4);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut buf = content("x\ny");
        buf.insert_char('z');
        buf.clear();
        assert!(buf.is_empty());
        assert!(!buf.is_dirty());
        assert_eq!(buf.cursor(), Cursor::new());
    }
}
