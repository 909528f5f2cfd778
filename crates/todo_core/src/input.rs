//! Single-line editable text with a byte cursor that always sits on a char boundary.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextInput {
    text: String,
    /// Byte offset into `text` (0..=len).
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole text; cursor moves to the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.text.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Delete the char at the cursor.
    pub fn delete(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.text.drain(self.cursor..end);
        }
    }

    pub fn left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    pub fn right(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.cursor = end;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Drop everything from the cursor to the end.
    pub fn kill_to_end(&mut self) {
        self.text.truncate(self.cursor);
    }

    /// Return the text and leave the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(text: &str) -> TextInput {
        let mut t = TextInput::new();
        t.set(text);
        t
    }

    #[test]
    fn insert_ascii() {
        let mut t = TextInput::new();
        t.insert('a');
        t.insert('b');
        assert_eq!(t.text(), "ab");
        assert_eq!(t.cursor(), 2);
    }

    #[test]
    fn insert_multibyte() {
        let mut t = TextInput::new();
        t.insert('é');
        t.insert('牛');
        assert_eq!(t.text(), "é牛");
        assert_eq!(t.cursor(), "é牛".len());
    }

    #[test]
    fn backspace_at_zero_no_op() {
        let mut t = filled("x");
        t.home();
        t.backspace();
        assert_eq!(t.text(), "x");
    }

    #[test]
    fn backspace_multibyte() {
        let mut t = filled("a牛乳");
        t.backspace();
        assert_eq!(t.text(), "a牛");
        assert_eq!(t.cursor(), "a牛".len());
    }

    #[test]
    fn delete_forward_and_at_end() {
        let mut t = filled("abc");
        t.delete();
        assert_eq!(t.text(), "abc");
        t.home();
        t.delete();
        assert_eq!(t.text(), "bc");
        assert_eq!(t.cursor(), 0);
    }

    #[test]
    fn cursor_moves_by_char() {
        let mut t = filled("é🎉");
        t.left();
        assert_eq!(t.cursor(), "é".len());
        t.left();
        assert_eq!(t.cursor(), 0);
        t.left();
        assert_eq!(t.cursor(), 0);
        t.right();
        t.right();
        t.right();
        assert_eq!(t.cursor(), "é🎉".len());
    }

    #[test]
    fn insert_mid_text() {
        let mut t = filled("ac");
        t.left();
        t.insert('b');
        assert_eq!(t.text(), "abc");
        assert_eq!(&t.text()[..t.cursor()], "ab");
    }

    #[test]
    fn kill_to_end_keeps_prefix() {
        let mut t = filled("hello");
        t.left();
        t.left();
        t.kill_to_end();
        assert_eq!(t.text(), "hel");
    }

    #[test]
    fn take_returns_and_resets() {
        let mut t = filled("hello");
        assert_eq!(t.take(), "hello");
        assert!(t.is_empty());
        assert_eq!(t.cursor(), 0);
    }
}
