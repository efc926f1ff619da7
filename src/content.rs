//! Page copy, loaded from the JSON document bundled at build time.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED_SITE_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content declares no navigation items")]
    EmptyNav,
    #[error("navigation lists section `{}` more than once", .0.as_str())]
    DuplicateNavTarget(SectionId),
    #[error("site content has an empty resume link")]
    MissingResume,
}

/// Sections that can be reached through anchor navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    Blue,
    Purple,
    Emerald,
    Pink,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Purple => "accent-purple",
            Self::Emerald => "accent-emerald",
            Self::Pink => "accent-pink",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Database,
    BrainCircuit,
    Terminal,
    Bot,
    Mic,
    Globe,
    Code,
    Cpu,
    Server,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Database => "⛁",
            Self::BrainCircuit => "✺",
            Self::Terminal => "⌘",
            Self::Bot => "◉",
            Self::Mic => "♪",
            Self::Globe => "◍",
            Self::Code => "⟨⟩",
            Self::Cpu => "▣",
            Self::Server => "▤",
        }
    }
}

/// A run of inline text, optionally emphasised.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Span {
    Plain(String),
    Strong {
        strong: String,
        #[serde(default)]
        accent: Option<Accent>,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub identity: Identity,
    pub boot_log: BootLog,
    pub nav: Navigation,
    pub about: About,
    pub skills: Skills,
    pub experience: Experience,
    pub projects: Projects,
    pub contact: Contact,
    pub footer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Identity {
    pub name: String,
    pub name_suffix: String,
    pub role_badge: String,
    pub hero_title: String,
    pub hero_accent: String,
    pub hero_summary: Vec<Span>,
    pub resume: Resume,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Resume {
    pub href: String,
    pub download_name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BootLog {
    pub title: String,
    pub lines: Vec<BootLine>,
    pub status_line: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BootLine {
    pub text: String,
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Navigation {
    pub items: Vec<NavItem>,
    pub contact_label: String,
    pub contact_short_label: String,
    pub projects_cta: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub target: SectionId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<Vec<Span>>,
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
    pub value: String,
    pub label: String,
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skills {
    pub heading: String,
    pub groups: Vec<SkillGroup>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub icon: Icon,
    pub accent: Accent,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Experience {
    pub heading: String,
    pub entries: Vec<ExperienceEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub current: bool,
    pub bullets: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Projects {
    pub heading: String,
    pub entries: Vec<Project>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub icon: Icon,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    pub github: ExternalLink,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExternalLink {
    pub href: String,
    pub label: String,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_SITE_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.nav.items.is_empty() {
            return Err(ContentError::EmptyNav);
        }

        let mut seen = HashSet::new();
        for item in &self.nav.items {
            if !seen.insert(item.target) {
                return Err(ContentError::DuplicateNavTarget(item.target));
            }
        }

        if self.identity.resume.href.trim().is_empty() {
            return Err(ContentError::MissingResume);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_value() -> serde_json::Value {
        serde_json::from_str(EMBEDDED_SITE_CONTENT).expect("embedded content is JSON")
    }

    #[test]
    fn embedded_content_parses_and_validates() {
        let content = SiteContent::embedded().expect("embedded content is valid");

        let targets: Vec<_> = content.nav.items.iter().map(|item| item.target).collect();
        assert_eq!(
            targets,
            vec![
                SectionId::About,
                SectionId::Skills,
                SectionId::Experience,
                SectionId::Projects
            ]
        );
        assert_eq!(content.skills.groups.len(), 3);
        assert_eq!(content.projects.entries.len(), 4);
        assert_eq!(
            content.experience.entries.iter().filter(|entry| entry.current).count(),
            1
        );
    }

    #[test]
    fn rich_text_spans_keep_emphasis_and_accent() {
        let content = SiteContent::embedded().expect("embedded content is valid");

        let Span::Strong { strong, accent } = &content.about.paragraphs[1][1] else {
            panic!("expected an emphasised span");
        };
        assert_eq!(strong, "data analytics solutions");
        assert_eq!(*accent, Some(Accent::Blue));
        assert!(matches!(
            &content.about.paragraphs[0][1],
            Span::Strong { accent: None, .. }
        ));
        assert!(matches!(&content.about.paragraphs[0][0], Span::Plain(text) if text == "I am a "));
    }

    #[test]
    fn duplicate_nav_target_is_rejected() {
        let mut value = embedded_value();
        value["nav"]["items"][1]["target"] = serde_json::json!("about");

        let result = SiteContent::from_json(&value.to_string());
        assert!(matches!(
            result,
            Err(ContentError::DuplicateNavTarget(SectionId::About))
        ));
    }

    #[test]
    fn empty_nav_is_rejected() {
        let mut value = embedded_value();
        value["nav"]["items"] = serde_json::json!([]);

        let result = SiteContent::from_json(&value.to_string());
        assert!(matches!(result, Err(ContentError::EmptyNav)));
    }

    #[test]
    fn blank_resume_link_is_rejected() {
        let mut value = embedded_value();
        value["identity"]["resume"]["href"] = serde_json::json!("  ");

        let result = SiteContent::from_json(&value.to_string());
        assert!(matches!(result, Err(ContentError::MissingResume)));
    }

    #[test]
    fn unknown_section_target_fails_to_parse() {
        let mut value = embedded_value();
        value["nav"]["items"][0]["target"] = serde_json::json!("blog");

        let result = SiteContent::from_json(&value.to_string());
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn section_href_is_an_anchor() {
        assert_eq!(SectionId::Projects.href(), "#projects");
    }
}
