//! Portfolio content, embedded at build time and parsed at startup.

use crate::theme::Theme;
use anyhow::{Context as _, bail, ensure};
use hashbrown::HashSet;
use log::debug;
use serde::Deserialize;

const PORTFOLIO_TOML: &str = include_str!("../content/portfolio.toml");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    #[serde(default)]
    pub theme: Theme,
    /// Navigation order. The first section is active before any scrolling.
    pub sections: Vec<SectionLink>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: Contact,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Owner {
    pub name: String,
    pub headline: String,
    /// Phrases cycled by the typewriter on the About section.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub summary: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SectionLink {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub period: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub soft: Vec<Skill>,
    #[serde(default)]
    pub technical: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub description: String,
    /// Percent, 0 to 100.
    pub proficiency: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum CertificationKind {
    #[default]
    #[strum(to_string = "Courses")]
    Course,
    #[strum(to_string = "Achievements")]
    Achievement,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    #[serde(default)]
    pub kind: CertificationKind,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub purpose: Option<String>,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Portfolio {
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|section| section.id.clone()).collect()
    }

    pub fn default_section(&self) -> &str {
        self.sections
            .first()
            .map(|section| section.id.as_str())
            .unwrap_or_default()
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.owner.name.trim().is_empty(), "owner name is empty");
        ensure!(!self.sections.is_empty(), "at least one section is required");
        let mut seen = HashSet::new();
        for section in &self.sections {
            ensure!(!section.id.is_empty(), "section `{}` has an empty id", section.label);
            if !seen.insert(section.id.as_str()) {
                bail!("section id `{}` is used more than once", section.id);
            }
        }
        if let Some(language) = self
            .skills
            .languages
            .iter()
            .find(|language| language.proficiency > 100)
        {
            bail!(
                "proficiency of `{}` is {}%, expected at most 100%",
                language.name,
                language.proficiency
            );
        }
        Ok(())
    }
}

/// Parses and validates portfolio content.
pub fn parse(source: &str) -> anyhow::Result<Portfolio> {
    let portfolio: Portfolio = toml::from_str(source).context("cannot parse portfolio content")?;
    portfolio.validate().context("invalid portfolio content")?;
    debug!(
        "Loaded portfolio of {} with {} sections and {} projects",
        portfolio.owner.name,
        portfolio.sections.len(),
        portfolio.projects.len()
    );
    Ok(portfolio)
}

/// The content bundled with the binary.
pub fn load() -> anyhow::Result<Portfolio> {
    parse(PORTFOLIO_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [owner]
        name = "Ada"
        headline = "Engineer"

        [[sections]]
        id = "about"
        label = "About"

        [skills]

        [contact]
    "#;

    #[test]
    fn bundled_content_is_valid() {
        let portfolio = load().unwrap();
        assert_eq!("about", portfolio.default_section());
        assert!(!portfolio.owner.roles.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(
            portfolio
                .section_ids()
                .iter()
                .all(|id| ["about", "education", "skills", "projects", "contact"]
                    .contains(&id.as_str()))
        );
    }

    #[test]
    fn optional_tables_default_to_empty() {
        let portfolio = parse(MINIMAL).unwrap();
        assert_eq!(Theme::Light, portfolio.theme);
        assert!(portfolio.education.is_empty());
        assert!(portfolio.skills.languages.is_empty());
        assert!(portfolio.contact.links.is_empty());
        assert_eq!(vec!["about".to_owned()], portfolio.section_ids());
    }

    #[test]
    fn theme_and_certification_kind_are_lowercase() {
        let source = format!(
            "theme = \"dark\"\n{MINIMAL}\n[[certifications]]\ntitle = \"T\"\nissuer = \"I\"\nkind = \"achievement\"\n"
        );
        let portfolio = parse(&source).unwrap();
        assert_eq!(Theme::Dark, portfolio.theme);
        assert_eq!(CertificationKind::Achievement, portfolio.certifications[0].kind);
        assert_eq!("Achievements", portfolio.certifications[0].kind.to_string());
    }

    #[test]
    fn duplicate_section_ids_are_rejected() {
        let source = format!("{MINIMAL}\n[[sections]]\nid = \"about\"\nlabel = \"Again\"\n");
        let err = parse(&source).unwrap_err();
        assert!(format!("{err:#}").contains("used more than once"), "{err:#}");
    }

    #[test]
    fn blank_owner_name_is_rejected() {
        let source = MINIMAL.replace("name = \"Ada\"", "name = \"  \"");
        let err = parse(&source).unwrap_err();
        assert!(format!("{err:#}").contains("owner name is empty"), "{err:#}");
    }

    #[test]
    fn proficiency_above_hundred_is_rejected() {
        let source = format!(
            "{MINIMAL}\n[[skills.languages]]\nname = \"C\"\ndescription = \"d\"\nproficiency = 120\n"
        );
        let err = parse(&source).unwrap_err();
        assert!(format!("{err:#}").contains("at most 100%"), "{err:#}");
    }

    #[test]
    fn missing_sections_are_rejected() {
        let err = parse("[owner]\nname = \"A\"\nheadline = \"B\"\n[skills]\n[contact]\n").unwrap_err();
        assert!(format!("{err:#}").contains("cannot parse"), "{err:#}");
    }
}
