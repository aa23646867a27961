use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::sections::SectionId;

static PROFILE_CACHE: LazyLock<DashMap<Variant, Arc<Profile>>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
pub struct Records;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content record {0} is not embedded")]
    Missing(&'static str),
    #[error("couldn't parse content record {file}: {reason}")]
    Parse { file: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Social {
    pub linkedin: String,
    pub github: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, nominally 0-100. Not validated.
    pub level: i32,
}

impl Skill {
    pub fn fill_width(&self) -> String {
        format!("{}%", self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub tech: String,
    pub desc: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub logo: String,
    #[serde(default)]
    pub credential_id: Option<String>,
}

impl Certificate {
    pub fn byline(&self) -> String {
        match self.credential_id.as_deref() {
            Some(id) if !id.is_empty() => format!("{} • {} | {id}", self.issuer, self.date),
            _ => format!("{} • {}", self.issuer, self.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub detail: Option<String>,
    /// Sample entry awaiting real data.
    #[serde(default)]
    pub placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Research {
    pub title: String,
    pub venue: String,
    pub year: String,
    pub summary: String,
    #[serde(default)]
    pub link: Option<String>,
    /// Sample entry awaiting real data.
    #[serde(default)]
    pub placeholder: bool,
}

/// The whole content record for one page variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub about: String,
    pub picture: String,
    pub resume: String,
    pub social: Social,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub research: Vec<Research>,
}

impl Profile {
    /// Loads the embedded record for `variant`, parsing it on first use.
    pub fn load(variant: Variant) -> Result<Arc<Profile>, ContentError> {
        let cache = &*PROFILE_CACHE;
        if let Some(p) = cache.get(&variant) {
            return Ok(p.clone());
        }
        let profile = Arc::new(Self::parse(variant.record_file())?);
        cache.insert(variant, profile.clone());
        Ok(profile)
    }

    fn parse(file: &'static str) -> Result<Profile, ContentError> {
        let record = Records::get(file).ok_or(ContentError::Missing(file))?;
        serde_json::from_slice(&record.data).map_err(|e| ContentError::Parse {
            file,
            reason: e.to_string(),
        })
    }

    pub fn first_name(&self) -> &str {
        self.name
            .split_once(' ')
            .map_or(self.name.as_str(), |(first, _)| first)
    }

    pub fn last_name(&self) -> &str {
        self.name.split_once(' ').map_or("", |(_, rest)| rest)
    }
}

/// Class tokens for one visual theme. Kept as whole literals so the
/// tailwind scanner picks them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub page: &'static str,
    pub nav_scrolled: &'static str,
    pub accent_text: &'static str,
    pub accent_border: &'static str,
    pub accent_bg: &'static str,
    pub muted_text: &'static str,
    pub card: &'static str,
    pub spotlight_rgba: &'static str,
}

const NEURAL_THEME: Theme = Theme {
    page: "min-h-screen bg-[#0a0a0a] text-gray-200 font-sans overflow-x-hidden relative",
    nav_scrolled: "bg-[#0a0a0a]/70 border-[#ffffff10]",
    accent_text: "text-[#3b82f6]",
    accent_border: "border-[#3b82f6]",
    accent_bg: "bg-[#3b82f6]",
    muted_text: "text-gray-400",
    card: "border border-gray-700 rounded-lg",
    spotlight_rgba: "rgba(59,130,246,0.15)",
};

const SCHOLAR_THEME: Theme = Theme {
    page: "min-h-screen bg-stone-50 text-stone-800 font-serif overflow-x-hidden relative",
    nav_scrolled: "bg-stone-50/80 border-stone-200",
    accent_text: "text-emerald-700",
    accent_border: "border-emerald-700",
    accent_bg: "bg-emerald-700",
    muted_text: "text-stone-500",
    card: "border border-stone-200 rounded-xl bg-white",
    spotlight_rgba: "rgba(4,120,87,0.12)",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Neural,
    Scholar,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Self::Neural, Self::Scholar];

    fn record_file(self) -> &'static str {
        match self {
            Self::Neural => "neural.json",
            Self::Scholar => "scholar.json",
        }
    }

    /// Section order for the variant. Never re-sorted.
    pub fn layout(self) -> &'static [SectionId] {
        match self {
            Self::Neural => &[
                SectionId::Home,
                SectionId::About,
                SectionId::Skills,
                SectionId::Certificates,
                SectionId::Experience,
                SectionId::Projects,
                SectionId::Contact,
            ],
            Self::Scholar => &[
                SectionId::Home,
                SectionId::About,
                SectionId::Skills,
                SectionId::Work,
                SectionId::Research,
                SectionId::Education,
                SectionId::Experience,
                SectionId::Contact,
            ],
        }
    }

    /// Navigation entries. The neural page lists certificates after
    /// projects even though the section renders earlier.
    pub fn nav_items(self) -> impl Iterator<Item = SectionId> {
        let order: &'static [SectionId] = match self {
            Self::Neural => &[
                SectionId::About,
                SectionId::Skills,
                SectionId::Experience,
                SectionId::Projects,
                SectionId::Certificates,
                SectionId::Contact,
            ],
            Self::Scholar => &self.layout()[1..],
        };
        order.iter().copied()
    }

    /// Resolves a raw anchor such as a URL hash to a section rendered by
    /// this variant.
    pub fn resolve_anchor(self, raw: &str) -> Option<SectionId> {
        raw.parse::<SectionId>()
            .ok()
            .filter(|id| self.layout().contains(id))
    }

    /// Section the hero's "view expertise" action jumps to.
    pub fn showcase(self) -> SectionId {
        self.layout()
            .iter()
            .copied()
            .find(|id| matches!(id, SectionId::Projects | SectionId::Work))
            .unwrap_or(SectionId::Skills)
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Neural => &NEURAL_THEME,
            Self::Scholar => &SCHOLAR_THEME,
        }
    }

    /// Brand shown in the navigation bar, split into accent and plain parts.
    pub fn brand(self) -> (&'static str, &'static str) {
        match self {
            Self::Neural => ("SURESH", ".AI"),
            Self::Scholar => ("S.", "MAHESHWARI"),
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Neural => "/",
            Self::Scholar => "/scholar",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment.trim_matches('/') {
            "" => Some(Self::Neural),
            "scholar" => Some(Self::Scholar),
            _ => None,
        }
    }

    /// The other variant, used by the theme switch link.
    pub fn alternate(self) -> Self {
        match self {
            Self::Neural => Self::Scholar,
            Self::Scholar => Self::Neural,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neural => f.write_str("neural"),
            Self::Scholar => f.write_str("scholar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: i32) -> Skill {
        Skill {
            name: "x".to_string(),
            level,
        }
    }

    #[test]
    fn test_every_variant_loads() {
        for variant in Variant::ALL {
            let profile = Profile::load(variant).expect("embedded record should parse");
            assert!(!profile.name.is_empty());
            assert!(!profile.skills.is_empty());
        }
    }

    #[test]
    fn test_load_is_cached() {
        let a = Profile::load(Variant::Neural).unwrap();
        let b = Profile::load(Variant::Neural).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_skill_fill() {
        assert_eq!(skill(95).fill_width(), "95%");
        assert_eq!(skill(0).fill_width(), "0%");
        assert_eq!(skill(100).fill_width(), "100%");
        // out of range passes through untouched
        assert_eq!(skill(130).fill_width(), "130%");
        assert_eq!(skill(-5).fill_width(), "-5%");
    }

    #[test]
    fn test_certificate_byline() {
        let mut cert = Certificate {
            title: "Feature Engineering".to_string(),
            issuer: "Kaggle".to_string(),
            date: "Nov 2025".to_string(),
            skills: vec![],
            logo: "/logos/kaggle.png".to_string(),
            credential_id: Some(String::new()),
        };
        assert_eq!(cert.byline(), "Kaggle • Nov 2025");
        cert.credential_id = None;
        assert_eq!(cert.byline(), "Kaggle • Nov 2025");
        cert.credential_id = Some("#753,941".to_string());
        assert_eq!(cert.byline(), "Kaggle • Nov 2025 | #753,941");
    }

    #[test]
    fn test_name_split() {
        let mut profile = (*Profile::load(Variant::Neural).unwrap()).clone();
        assert_eq!(profile.first_name(), "Suresh");
        assert_eq!(profile.last_name(), "Maheshwari");
        profile.name = "Cher".to_string();
        assert_eq!(profile.first_name(), "Cher");
        assert_eq!(profile.last_name(), "");
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let json = r#"{
            "name": "A B", "title": "t", "tagline": "g", "location": "l",
            "about": "a", "picture": "/p.png", "resume": "/cv.pdf",
            "social": {"linkedin": "l", "github": "g", "email": "mailto:e"}
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(profile.skills.is_empty());
        assert!(profile.research.is_empty());
    }

    #[test]
    fn test_layouts() {
        assert_eq!(Variant::Neural.layout().first(), Some(&SectionId::Home));
        assert_eq!(Variant::Scholar.layout().last(), Some(&SectionId::Contact));
        assert!(Variant::Neural.nav_items().all(|id| id != SectionId::Home));
        assert!(Variant::Scholar.layout().contains(&SectionId::Research));
        assert!(!Variant::Scholar.layout().contains(&SectionId::Certificates));
        assert_eq!(Variant::Neural.showcase(), SectionId::Projects);
        assert_eq!(Variant::Scholar.showcase(), SectionId::Work);
    }

    #[test]
    fn test_paths() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_path_segment(variant.path()), Some(variant));
            assert_eq!(variant.alternate().alternate(), variant);
        }
        assert_eq!(Variant::from_path_segment("blog"), None);
    }

    #[test]
    fn test_nav_items_cover_layout() {
        let neural = Variant::Neural.nav_items().collect::<Vec<_>>();
        assert_eq!(
            neural,
            vec![
                SectionId::About,
                SectionId::Skills,
                SectionId::Experience,
                SectionId::Projects,
                SectionId::Certificates,
                SectionId::Contact,
            ]
        );
        for variant in Variant::ALL {
            let mut nav = variant.nav_items().collect::<Vec<_>>();
            let mut sections = variant.layout()[1..].to_vec();
            nav.sort_by_key(|id| id.anchor());
            sections.sort_by_key(|id| id.anchor());
            assert_eq!(nav, sections, "{variant}");
        }
    }

    #[test]
    fn test_scholar_samples_are_flagged() {
        let profile = Profile::load(Variant::Scholar).unwrap();
        assert!(!profile.research.is_empty());
        assert!(profile.research.iter().all(|paper| paper.placeholder));
        assert!(profile.education.iter().any(|edu| edu.placeholder));
        let neural = Profile::load(Variant::Neural).unwrap();
        assert_eq!(profile.about, neural.about);
    }

    #[test]
    fn test_resolve_anchor() {
        assert_eq!(Variant::Neural.resolve_anchor("#contact"), Some(SectionId::Contact));
        assert_eq!(Variant::Neural.resolve_anchor("hero"), Some(SectionId::Home));
        assert_eq!(Variant::Neural.resolve_anchor("#research"), None);
        assert_eq!(Variant::Scholar.resolve_anchor("#research"), Some(SectionId::Research));
        assert_eq!(Variant::Scholar.resolve_anchor(""), None);
    }
}
