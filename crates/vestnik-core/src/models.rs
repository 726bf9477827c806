//! Domain types shared by the portal front-ends.

use serde::{Deserialize, Serialize};

/// Capability tier of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Reader,
    Moderator,
    Admin,
}

impl Role {
    /// Returns the lowercase identifier used in logs and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reader => "reader",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }
}

/// The current (simulated) user. Lives only in memory for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Kind of content a news item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsType {
    News,
    Article,
    Video,
    Photo,
    Poster,
    Weather,
}

/// A single entry of the news feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NewsType,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub image: String,
    pub author: String,
    /// Display string, not a parsed date.
    pub date: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

/// Content-filter selector shown as the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Main,
    Video,
    Regional,
    Popular,
}

impl Tab {
    /// All tabs in navigation order.
    pub fn all() -> &'static [Tab] {
        &[Tab::Main, Tab::Video, Tab::Regional, Tab::Popular]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Main => "main",
            Tab::Video => "video",
            Tab::Regional => "regional",
            Tab::Popular => "popular",
        }
    }

    /// Parses a tab identifier. Returns `None` for anything unrecognized.
    ///
    /// Matching ignores ASCII case and surrounding whitespace, since names
    /// come from a CLI flag or a hand-edited config file. Role matching on
    /// emails stays case-sensitive.
    pub fn from_name(name: &str) -> Option<Tab> {
        Tab::all()
            .iter()
            .copied()
            .find(|tab| tab.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Parses a tab identifier, falling back to [`Tab::Main`] (show all).
    ///
    /// Unrecognized names are never an error: they are logged and treated as
    /// the pass-through tab.
    pub fn resolve(name: &str) -> Tab {
        Tab::from_name(name).unwrap_or_else(|| {
            tracing::warn!(tab = name, "unrecognized tab, falling back to main");
            Tab::Main
        })
    }

    /// Position of the tab in the navigation bar.
    pub fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }

    /// Tab at the given navigation position, if any.
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::all().get(index).copied()
    }

    /// The next tab to the right, wrapping around.
    #[must_use]
    pub fn next(self) -> Tab {
        let all = Tab::all();
        all[(self.index() + 1) % all.len()]
    }

    /// The previous tab to the left, wrapping around.
    #[must_use]
    pub fn prev(self) -> Tab {
        let all = Tab::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}
