use std::{fmt, str::FromStr};

use thiserror::Error;

/// Identity of one page section. The anchor doubles as the DOM id the
/// navigation jumps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Certificates,
    Work,
    Research,
    Education,
    Experience,
    Projects,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section anchor: {0}")]
pub struct UnknownSection(pub String);

impl SectionId {
    pub const ALL: [SectionId; 10] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Certificates,
        Self::Work,
        Self::Research,
        Self::Education,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Certificates => "certificates",
            Self::Work => "work",
            Self::Research => "research",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Certificates => "Certificates",
            Self::Work => "Work",
            Self::Research => "Research",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "hero" is accepted as an alias of the home anchor
        let s = s.trim_start_matches('#');
        if s == "hero" {
            return Ok(Self::Home);
        }
        Self::ALL
            .into_iter()
            .find(|id| id.anchor() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
