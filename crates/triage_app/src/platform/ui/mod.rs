pub mod constants;
pub mod input;
pub mod layout;
pub mod render;

use ratatui::widgets::ListState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    FolderPrompt {
        input: String,
    },
}

/// Presentation-only state that the core does not track.
#[derive(Debug, Default)]
pub struct UiState {
    pub list: ListState,
    pub mode: InputMode,
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl UiState {
    pub fn cursor(&self) -> Option<usize> {
        self.list.selected()
    }

    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.list.select(None);
            return;
        }
        let current = self.list.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.list.select(Some(next as usize));
    }

    /// Keeps the cursor inside a list of `len` rows after the listing changed.
    pub fn clamp_cursor(&mut self, len: usize) {
        match (self.list.selected(), len) {
            (_, 0) => self.list.select(None),
            (None, _) => self.list.select(Some(0)),
            (Some(idx), _) if idx >= len => self.list.select(Some(len - 1)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_within_bounds() {
        let mut ui = UiState::default();
        ui.move_cursor(1, 0);
        assert_eq!(ui.cursor(), None);

        ui.clamp_cursor(3);
        assert_eq!(ui.cursor(), Some(0));
        ui.move_cursor(-1, 3);
        assert_eq!(ui.cursor(), Some(0));
        ui.move_cursor(5, 3);
        assert_eq!(ui.cursor(), Some(2));

        ui.clamp_cursor(2);
        assert_eq!(ui.cursor(), Some(1));
        ui.clamp_cursor(0);
        assert_eq!(ui.cursor(), None);
    }
}
