//! Content filter and feed layout.
//!
//! All functions here are pure: they borrow the store's items and return
//! references in store order.

use crate::models::{NewsItem, NewsType, Tab};

/// Category excluded from the regional tab.
pub const VIDEO_CATEGORY: &str = "Видео";

/// Minimum view count (exclusive) for the popular tab.
pub const POPULAR_VIEWS_THRESHOLD: u64 = 1000;

/// Returns whether an item passes the given tab's predicate.
///
/// Rules are evaluated in navigation order; only one applies per tab.
pub fn matches(item: &NewsItem, tab: Tab) -> bool {
    match tab {
        Tab::Main => true,
        Tab::Video => item.kind == NewsType::Video,
        Tab::Regional => item.category != VIDEO_CATEGORY,
        Tab::Popular => item
            .views
            .is_some_and(|views| views > POPULAR_VIEWS_THRESHOLD),
    }
}

/// Returns the subset of `items` visible under `tab`, preserving order.
pub fn filter(items: &[NewsItem], tab: Tab) -> Vec<&NewsItem> {
    items.iter().filter(|item| matches(item, tab)).collect()
}

/// Returns the featured item: the first one flagged, by insertion order.
pub fn featured(items: &[NewsItem]) -> Option<&NewsItem> {
    items.iter().find(|item| item.featured)
}

/// What the main area shows for a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLayout<'a> {
    /// Hero slot. Only filled on the main tab.
    pub hero: Option<&'a NewsItem>,
    /// Regular grid. Never contains a featured item, on any tab.
    pub grid: Vec<&'a NewsItem>,
}

impl FeedLayout<'_> {
    pub fn is_empty(&self) -> bool {
        self.hero.is_none() && self.grid.is_empty()
    }
}

/// Splits the filtered feed into the hero slot and the regular grid.
pub fn layout(items: &[NewsItem], tab: Tab) -> FeedLayout<'_> {
    let hero = if tab == Tab::Main { featured(items) } else { None };
    let grid = filter(items, tab)
        .into_iter()
        .filter(|item| !item.featured)
        .collect();
    FeedLayout { hero, grid }
}
