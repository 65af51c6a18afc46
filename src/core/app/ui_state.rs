use ratatui::prelude::Size;
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

use crate::ui::message_list::PrewrapCache;
use crate::ui::theme::Theme;
use crate::utils::scroll::ScrollState;

/// Presentation state for the chat screen: the input row, the transcript
/// scroll position and the active theme.
#[derive(Debug, Clone)]
pub struct UiState {
    input: String,
    textarea: TextArea<'static>,
    pub scroll: ScrollState,
    pub theme: Theme,
    pub current_theme_id: Option<String>,
    pub exit_requested: bool,
    pub last_term_size: Size,
    pub prewrap: PrewrapCache,
}

impl UiState {
    pub fn new(theme: Theme, current_theme_id: Option<String>) -> Self {
        let mut state = Self {
            input: String::new(),
            textarea: TextArea::default(),
            scroll: ScrollState::default(),
            theme,
            current_theme_id,
            exit_requested: false,
            last_term_size: Size::default(),
            prewrap: PrewrapCache::default(),
        };
        state.configure_textarea();
        state
    }

    pub(crate) fn configure_textarea(&mut self) {
        self.textarea.set_style(self.theme.input_text_style);
        self.textarea.set_cursor_style(self.theme.input_cursor_style);
        self.textarea.set_cursor_line_style(ratatui::style::Style::default());
    }

    pub fn get_input_text(&self) -> &str {
        &self.input
    }

    /// Cursor column in characters.
    pub fn input_cursor_column(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Display width of the input up to the cursor.
    pub fn input_cursor_display_width(&self) -> usize {
        let col = self.input_cursor_column();
        let prefix: String = self.input.chars().take(col).collect();
        UnicodeWidthStr::width(prefix.as_str())
    }

    pub fn set_input_text(&mut self, text: String) {
        let single_line = flatten_to_single_line(&text);
        self.textarea = TextArea::from([single_line]);
        self.textarea.move_cursor(CursorMove::End);
        self.configure_textarea();
        self.sync_input_from_textarea();
    }

    pub fn clear_input(&mut self) {
        self.textarea = TextArea::default();
        self.configure_textarea();
        self.sync_input_from_textarea();
    }

    pub fn insert_into_input(&mut self, text: &str) {
        let single_line = flatten_to_single_line(text);
        self.apply_textarea_edit(|ta| {
            ta.insert_str(&single_line);
        });
    }

    /// Run an edit against the textarea and keep the cached input text in sync.
    pub fn apply_textarea_edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        f(&mut self.textarea);
        self.sync_input_from_textarea();
    }

    fn sync_input_from_textarea(&mut self) {
        self.input = self.textarea.lines().join(" ");
    }
}

fn flatten_to_single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_textarea::{Input, Key};

    fn state() -> UiState {
        UiState::new(Theme::default_theme(), None)
    }

    #[test]
    fn typing_updates_input_text() {
        let mut ui = state();
        for ch in "hey".chars() {
            ui.apply_textarea_edit(|ta| {
                ta.input(Input {
                    key: Key::Char(ch),
                    ..Default::default()
                });
            });
        }
        assert_eq!(ui.get_input_text(), "hey");
        assert_eq!(ui.input_cursor_column(), 3);
    }

    #[test]
    fn clear_input_empties_text_and_cursor() {
        let mut ui = state();
        ui.set_input_text("something".into());
        ui.clear_input();
        assert_eq!(ui.get_input_text(), "");
        assert_eq!(ui.input_cursor_column(), 0);
    }

    #[test]
    fn inserted_newlines_become_spaces() {
        let mut ui = state();
        ui.set_input_text("a".into());
        ui.insert_into_input("b\r\nc\nd");
        assert_eq!(ui.get_input_text(), "ab c d");
    }

    #[test]
    fn cursor_width_counts_wide_characters() {
        let mut ui = state();
        ui.set_input_text("日本".into());
        assert_eq!(ui.input_cursor_column(), 2);
        assert_eq!(ui.input_cursor_display_width(), 4);
    }
}
