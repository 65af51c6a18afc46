/// Vertical scroll position of the message list.
///
/// The list follows the newest message whenever the number of messages
/// changes between renders; otherwise the manual offset is kept and clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    max_offset: u16,
    followed_len: usize,
}

impl ScrollState {
    pub fn calculate_max_offset(total_lines: usize, viewport_height: u16) -> u16 {
        let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
        total.saturating_sub(viewport_height)
    }

    /// Reconcile the offset with the latest layout and return the offset to render.
    pub fn follow(&mut self, message_count: usize, total_lines: usize, viewport_height: u16) -> u16 {
        self.max_offset = Self::calculate_max_offset(total_lines, viewport_height);
        if message_count != self.followed_len {
            self.followed_len = message_count;
            self.offset = self.max_offset;
        } else {
            self.offset = self.offset.min(self.max_offset);
        }
        self.offset
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_transcript_never_scrolls() {
        let mut scroll = ScrollState::default();
        assert_eq!(scroll.follow(1, 3, 10), 0);
        scroll.scroll_down(5);
        assert_eq!(scroll.offset(), 0);
        assert!(scroll.is_at_bottom());
    }

    #[test]
    fn new_message_jumps_to_bottom() {
        let mut scroll = ScrollState::default();
        assert_eq!(scroll.follow(4, 30, 10), 20);

        scroll.scroll_up(7);
        assert_eq!(scroll.follow(4, 30, 10), 13);
        assert!(!scroll.is_at_bottom());

        assert_eq!(scroll.follow(5, 34, 10), 24);
        assert!(scroll.is_at_bottom());
    }

    #[test]
    fn shrinking_viewport_clamps_manual_offset() {
        let mut scroll = ScrollState::default();
        scroll.follow(2, 20, 5);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.follow(2, 20, 15), 5);
    }

    #[test]
    fn scroll_bounds_are_respected() {
        let mut scroll = ScrollState::default();
        scroll.follow(3, 25, 10);
        scroll.scroll_to_top();
        scroll.scroll_up(3);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_down(100);
        assert_eq!(scroll.offset(), 15);
    }
}
