//! Document sections that can be scrolled to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A section of the portfolio document, in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Hero,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// All sections in document order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Hero,
            Section::About,
            Section::Projects,
            Section::Experience,
            Section::Contact,
        ]
    }

    /// Stable lowercase identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// Heading shown above the section.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Selected Projects",
            Section::Experience => "Experience",
            Section::Contact => "Get In Touch",
        }
    }

    /// Short label for navigation tabs.
    pub fn tab_label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::all()
            .iter()
            .copied()
            .find(|section| section.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSection(s.to_string()))
    }
}
