use unicode_segmentation::UnicodeSegmentation;

/// The `git> ` input line fed to the supervised process while a command
/// is running. Cursor positions are byte offsets that always sit on a
/// grapheme boundary.
#[derive(Debug, Default, Clone)]
pub struct InputLine {
    pub text: String,
    pub cursor: usize,
}

impl InputLine {
    fn grapheme_boundaries(&self) -> Vec<usize> {
        let mut boundaries: Vec<usize> = self.text.grapheme_indices(true).map(|(i, _)| i).collect();
        boundaries.push(self.text.len());
        boundaries
    }

    fn boundary_index_at_or_before(boundaries: &[usize], cursor: usize) -> usize {
        match boundaries.binary_search(&cursor) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        }
    }

    pub fn insert(&mut self, c: char) {
        let cursor = self.cursor.min(self.text.len());
        self.text.insert(cursor, c);
        self.cursor = cursor + c.len_utf8();
    }

    /// Remove the grapheme cluster before the cursor (UTF-8 safe)
    pub fn backspace(&mut self) {
        let boundaries = self.grapheme_boundaries();
        let idx = Self::boundary_index_at_or_before(&boundaries, self.cursor.min(self.text.len()));
        if idx == 0 {
            return;
        }
        let start = boundaries[idx - 1];
        let end = boundaries[idx];
        self.text.replace_range(start..end, "");
        self.cursor = start;
    }

    pub fn cursor_left(&mut self) {
        let boundaries = self.grapheme_boundaries();
        let idx = Self::boundary_index_at_or_before(&boundaries, self.cursor.min(self.text.len()));
        if idx > 0 {
            self.cursor = boundaries[idx - 1];
        }
    }

    pub fn cursor_right(&mut self) {
        let boundaries = self.grapheme_boundaries();
        let idx = Self::boundary_index_at_or_before(&boundaries, self.cursor.min(self.text.len()));
        if idx + 1 < boundaries.len() {
            self.cursor = boundaries[idx + 1];
        }
    }

    pub fn cursor_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Take the submitted line, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_take() {
        let mut input = InputLine::default();
        for c in "yes".chars() {
            input.insert(c);
        }
        assert_eq!(input.text, "yes");
        assert_eq!(input.take(), "yes");
        assert_eq!(input.text, "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_insert_mid_line() {
        let mut input = InputLine::default();
        for c in "ac".chars() {
            input.insert(c);
        }
        input.cursor_left();
        input.insert('b');
        assert_eq!(input.text, "abc");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_backspace_multibyte() {
        // "café" = 5 bytes: c(1) a(1) f(1) é(2)
        let mut input = InputLine {
            text: "café".to_string(),
            cursor: 5,
        };
        input.backspace();
        assert_eq!(input.text, "caf");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_cursor_movement_multibyte() {
        let mut input = InputLine {
            text: "café".to_string(),
            cursor: 5,
        };
        input.cursor_left();
        assert_eq!(input.cursor, 3); // before 'é'
        input.cursor_left();
        assert_eq!(input.cursor, 2);
        input.cursor_right();
        assert_eq!(input.cursor, 3);
        input.cursor_right();
        assert_eq!(input.cursor, 5);
        input.cursor_right();
        assert_eq!(input.cursor, 5); // clamped at end
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputLine {
            text: "x".to_string(),
            cursor: 0,
        };
        input.backspace();
        assert_eq!(input.text, "x");
    }

    #[test]
    fn test_cursor_start_end() {
        let mut input = InputLine {
            text: "hello".to_string(),
            cursor: 2,
        };
        input.cursor_end();
        assert_eq!(input.cursor, 5);
        input.cursor_start();
        assert_eq!(input.cursor, 0);
    }
}
