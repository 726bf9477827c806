use vestnik_core::Tab;

use crate::mutations::FeedMutation;

/// Active tab and scroll position of the body.
#[derive(Debug, Clone)]
pub struct FeedState {
    pub tab: Tab,
    /// First visible body line.
    pub scroll: u16,
    /// Largest valid `scroll`, recomputed every frame.
    pub max_scroll: u16,
    /// Height of the body area in the last frame.
    pub viewport_height: u16,
}

impl FeedState {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            scroll: 0,
            max_scroll: 0,
            viewport_height: 0,
        }
    }

    pub fn apply(&mut self, mutation: FeedMutation) {
        match mutation {
            FeedMutation::SelectTab(tab) => {
                if tab != self.tab {
                    tracing::debug!(from = self.tab.name(), to = tab.name(), "tab changed");
                    self.tab = tab;
                    self.scroll = 0;
                }
            }
            FeedMutation::ScrollBy(delta) => {
                let next = i32::from(self.scroll) + delta;
                self.scroll = next.clamp(0, i32::from(self.max_scroll)) as u16;
            }
            FeedMutation::ScrollToTop => self.scroll = 0,
            FeedMutation::ScrollToBottom => self.scroll = self.max_scroll,
        }
    }

    /// Updates scroll bounds for the current content and viewport.
    pub fn update_layout(&mut self, content_height: usize, viewport_height: u16) {
        let overflow = content_height.saturating_sub(usize::from(viewport_height));
        self.max_scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(self.max_scroll);
        self.viewport_height = viewport_height;
    }

    /// Lines moved by PageUp/PageDown.
    pub fn page_size(&self) -> i32 {
        i32::from(self.viewport_height.saturating_sub(2).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_tab_resets_scroll() {
        let mut feed = FeedState::new(Tab::Main);
        feed.update_layout(100, 20);
        feed.apply(FeedMutation::ScrollBy(10));
        assert_eq!(feed.scroll, 10);

        feed.apply(FeedMutation::SelectTab(Tab::Popular));
        assert_eq!(feed.tab, Tab::Popular);
        assert_eq!(feed.scroll, 0);
    }

    #[test]
    fn test_select_same_tab_keeps_scroll() {
        let mut feed = FeedState::new(Tab::Video);
        feed.update_layout(100, 20);
        feed.apply(FeedMutation::ScrollBy(5));
        feed.apply(FeedMutation::SelectTab(Tab::Video));
        assert_eq!(feed.scroll, 5);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut feed = FeedState::new(Tab::Main);
        feed.update_layout(30, 20);
        feed.apply(FeedMutation::ScrollBy(-3));
        assert_eq!(feed.scroll, 0);
        feed.apply(FeedMutation::ScrollBy(50));
        assert_eq!(feed.scroll, 10);
        feed.apply(FeedMutation::ScrollToTop);
        assert_eq!(feed.scroll, 0);
        feed.apply(FeedMutation::ScrollToBottom);
        assert_eq!(feed.scroll, 10);
    }

    #[test]
    fn test_shrinking_content_clamps_scroll() {
        let mut feed = FeedState::new(Tab::Main);
        feed.update_layout(100, 20);
        feed.apply(FeedMutation::ScrollToBottom);
        assert_eq!(feed.scroll, 80);

        feed.update_layout(25, 20);
        assert_eq!(feed.scroll, 5);
    }

    #[test]
    fn test_page_size() {
        let mut feed = FeedState::new(Tab::Main);
        assert_eq!(feed.page_size(), 1);
        feed.update_layout(100, 20);
        assert_eq!(feed.page_size(), 18);
    }
}
