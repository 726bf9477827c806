//! Feed command handler.

use anyhow::{Context, Result};
use serde::Serialize;
use vestnik_core::config::Config;
use vestnik_core::feed::{self, FeedLayout};
use vestnik_core::format::{format_optional_views, tab_label};
use vestnik_core::{NewsItem, NewsStore, Tab};

#[derive(Serialize)]
struct FeedOutput<'a> {
    tab: Tab,
    hero: Option<&'a NewsItem>,
    grid: &'a [&'a NewsItem],
}

pub fn run(config: &Config, tab: Option<&str>, json: bool) -> Result<()> {
    let tab = tab.map_or_else(|| config.initial_tab(), Tab::resolve);
    let store = NewsStore::seed();
    let layout = feed::layout(store.items(), tab);
    tracing::debug!(tab = tab.name(), grid = layout.grid.len(), "feed");

    if json {
        let output = FeedOutput {
            tab,
            hero: layout.hero,
            grid: &layout.grid,
        };
        let text = serde_json::to_string_pretty(&output).context("serialize feed")?;
        println!("{text}");
    } else {
        print!("{}", render_text(&layout, tab));
    }
    Ok(())
}

fn meta(item: &NewsItem) -> String {
    let mut parts = vec![item.category.as_str(), item.author.as_str(), item.date.as_str()];
    let views = item
        .views
        .map(|_| format!("{} просмотров", format_optional_views(item.views)));
    if let Some(views) = views.as_deref() {
        parts.push(views);
    }
    parts.join(" · ")
}

fn render_text(layout: &FeedLayout<'_>, tab: Tab) -> String {
    let mut out = format!("{}\n\n", tab_label(tab));

    if let Some(hero) = layout.hero {
        out.push_str(&format!("Главная тема: {}\n  {}\n\n", hero.title, meta(hero)));
    }

    if layout.grid.is_empty() {
        out.push_str("В этом разделе пока нет материалов\n");
        return out;
    }
    for item in &layout.grid {
        out.push_str(&format!("- {}\n  {}\n", item.title, meta(item)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_main_has_hero() {
        let store = NewsStore::seed();
        let layout = feed::layout(store.items(), Tab::Main);
        let text = render_text(&layout, Tab::Main);
        assert!(text.starts_with("Главное\n"));
        assert!(text.contains("Главная тема: "));
        assert_eq!(text.matches("\n- ").count(), 7);
    }

    #[test]
    fn test_render_text_empty_grid() {
        let layout = FeedLayout {
            hero: None,
            grid: Vec::new(),
        };
        let text = render_text(&layout, Tab::Regional);
        assert!(text.contains("пока нет материалов"));
    }
}
