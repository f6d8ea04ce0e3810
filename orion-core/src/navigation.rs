use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownSection;

/// Navigation destinations shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Overview,
    Pos,
    Supply,
    Teams,
    Analytics,
    Schedule,
    Admin,
}

impl Section {
    /// All sections in sidebar order.
    pub const ALL: [Section; 7] = [
        Section::Overview,
        Section::Pos,
        Section::Supply,
        Section::Teams,
        Section::Analytics,
        Section::Schedule,
        Section::Admin,
    ];

    /// Stable string key of the section.
    pub fn key(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Pos => "pos",
            Section::Supply => "supply",
            Section::Teams => "teams",
            Section::Analytics => "analytics",
            Section::Schedule => "schedule",
            Section::Admin => "admin",
        }
    }

    /// Whether selecting this section also opens the POS overlay.
    ///
    /// Only the POS entry carries this extra effect; every other section just
    /// becomes the active one.
    pub fn opens_pos_overlay(self) -> bool {
        self == Section::Pos
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.key() == value)
            .ok_or_else(|| UnknownSection(value.to_string()))
    }
}

/// A sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub section: Section,
    pub badge: Option<&'static str>,
}

/// The fixed sidebar entries, in display order.
pub const NAVIGATION_ITEMS: [NavigationItem; 7] = [
    NavigationItem {
        label: "Overview",
        section: Section::Overview,
        badge: None,
    },
    NavigationItem {
        label: "Sales & POS",
        section: Section::Pos,
        badge: Some("Live"),
    },
    NavigationItem {
        label: "Supply Chain",
        section: Section::Supply,
        badge: None,
    },
    NavigationItem {
        label: "Teams",
        section: Section::Teams,
        badge: None,
    },
    NavigationItem {
        label: "Analytics",
        section: Section::Analytics,
        badge: None,
    },
    NavigationItem {
        label: "Scheduling",
        section: Section::Schedule,
        badge: None,
    },
    NavigationItem {
        label: "Admin & Controls",
        section: Section::Admin,
        badge: None,
    },
];
