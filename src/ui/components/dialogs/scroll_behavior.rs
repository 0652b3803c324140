use crossterm::event::KeyCode;
use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: usize = 10;

/// Scroll position shared by the read-only dialogs (help, logs, info, error).
///
/// The offset may run past the end of the content; rendering clamps it.
#[derive(Debug, Default)]
pub struct DialogScroll {
    pub offset: usize,
    pub state: ScrollbarState,
}

impl DialogScroll {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.state = ScrollbarState::new(0);
    }

    /// Apply a scrolling key, returning false when the key is not a scroll key
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        self.offset = match code {
            KeyCode::Up | KeyCode::Char('k') => self.offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.offset.saturating_add(1),
            KeyCode::PageUp => self.offset.saturating_sub(PAGE_SIZE),
            KeyCode::PageDown => self.offset.saturating_add(PAGE_SIZE),
            KeyCode::Home => 0,
            KeyCode::End => usize::MAX,
            _ => return false,
        };
        self.state = self.state.position(self.offset);
        true
    }
}
