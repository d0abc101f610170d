use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::DeserializeFromStr;
use std::path::PathBuf;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    #[default]
    #[strum(serialize = "Beginner", serialize = "Débutant", serialize = "debutant")]
    Beginner,
    #[strum(
        serialize = "Intermediate",
        serialize = "Intermédiaire",
        serialize = "intermediaire"
    )]
    Intermediate,
    #[strum(serialize = "Expert")]
    Expert,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemName(String);

crate::impl_string_newtype!(ItemName);

/// Experience label such as `1+` or `2+`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct YearsLabel(String);

crate::impl_string_newtype!(YearsLabel);

impl YearsLabel {
    const JUNIOR: &'static str = "1+";

    fn is_junior(&self) -> bool {
        self.0.trim() == Self::JUNIOR
    }

    /// Fraction of the experience bar to fill.
    pub fn fill(&self) -> f64 {
        if self.is_junior() { 0.7 } else { 0.9 }
    }

    pub fn unit(&self) -> &'static str {
        if self.is_junior() { "year" } else { "years" }
    }

    pub fn caption(&self) -> String {
        format!("{} {} of experience", self.0.trim(), self.unit())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyItem {
    pub name: ItemName,
    #[serde(default)]
    pub icon: Option<PathBuf>,
    #[serde(default)]
    pub proficiency: Proficiency,
    pub years: YearsLabel,
}

impl TechnologyItem {
    pub fn new(name: impl Into<String>, proficiency: Proficiency, years: impl Into<String>) -> Self {
        Self {
            name: ItemName::new(name),
            icon: None,
            proficiency,
            years: YearsLabel::new(years),
        }
    }
}

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: ItemName,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub content: String,
    #[serde(default = "default_rating", deserialize_with = "clamped_rating")]
    pub rating: u8,
    #[serde(default)]
    pub project: String,
}

impl Testimonial {
    pub fn byline(&self) -> String {
        match (self.role.is_empty(), self.company.is_empty()) {
            (false, false) => format!("{}, {} at {}", self.name, self.role, self.company),
            (false, true) => format!("{}, {}", self.name, self.role),
            (true, false) => format!("{}, {}", self.name, self.company),
            (true, true) => self.name.to_string(),
        }
    }

    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(MAX_RATING));
        format!(
            "{}{}",
            "★".repeat(filled),
            "☆".repeat(usize::from(MAX_RATING) - filled)
        )
    }
}

fn default_rating() -> u8 {
    MAX_RATING
}

fn clamped_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(u8::deserialize(deserializer)?.min(MAX_RATING))
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    #[strum(serialize = "frontend", serialize = "front-end")]
    Frontend,
    #[strum(serialize = "fullstack", serialize = "full-stack", serialize = "Full Stack")]
    FullStack,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::FullStack => "Full Stack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: ItemName,
    #[serde(default)]
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<ItemName>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub category: ProjectCategory,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl Project {
    pub fn stack(&self) -> String {
        self.technologies
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// Gallery filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, DeserializeFromStr)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    /// `All` first, then one entry per category.
    pub fn choices() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(ProjectCategory::iter().map(Self::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All projects",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == *category,
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.trim().parse().map(Self::Only)
        }
    }
}

/// Projects matching `filter`, in their configured order.
pub fn filter(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_deserialization() {
        let cases = vec![
            ("\"beginner\"", Proficiency::Beginner),
            ("\"Débutant\"", Proficiency::Beginner),
            ("\"INTERMEDIATE\"", Proficiency::Intermediate),
            ("\"Intermédiaire\"", Proficiency::Intermediate),
            ("\"intermediaire\"", Proficiency::Intermediate),
            ("\"expert\"", Proficiency::Expert),
        ];

        for (json, expected) in cases {
            let deserialized: Proficiency = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<Proficiency>("\"guru\"").is_err());
    }

    #[test]
    fn test_years_label_drives_bar_and_caption() {
        let junior = YearsLabel::new("1+");
        assert_eq!(junior.fill(), 0.7);
        assert_eq!(junior.caption(), "1+ year of experience");

        let senior = YearsLabel::new("2+");
        assert_eq!(senior.fill(), 0.9);
        assert_eq!(senior.caption(), "2+ years of experience");
    }

    #[test]
    fn test_testimonial_rating_is_clamped() {
        let testimonial: Testimonial = serde_json::from_str(
            r#"{"name": "Lisa Park", "role": "UX Director", "company": "DesignCorp",
                "content": "Seamless.", "rating": 9}"#,
        )
        .unwrap();
        assert_eq!(testimonial.rating, 5);
        assert_eq!(testimonial.stars(), "★★★★★");
        assert_eq!(testimonial.byline(), "Lisa Park, UX Director at DesignCorp");
    }

    #[test]
    fn test_testimonial_defaults() {
        let testimonial: Testimonial =
            serde_json::from_str(r#"{"name": "Anon", "content": "Great", "rating": 3}"#).unwrap();
        assert_eq!(testimonial.stars(), "★★★☆☆");
        assert_eq!(testimonial.byline(), "Anon");
    }

    fn project(title: &str, category: ProjectCategory) -> Project {
        Project {
            title: ItemName::new(title),
            subtitle: String::new(),
            description: format!("{title} description"),
            technologies: vec![ItemName::new("React"), ItemName::new("PHP")],
            featured: false,
            category,
            demo_url: None,
            source_url: None,
        }
    }

    #[test]
    fn test_filter_by_category() {
        let projects = vec![
            project("BizTrack 237", ProjectCategory::FullStack),
            project("DevSynch+", ProjectCategory::Frontend),
            project("DigiInscript", ProjectCategory::FullStack),
        ];

        assert_eq!(filter(&projects, ProjectFilter::All).len(), 3);

        let frontend: Vec<&str> = filter(&projects, ProjectFilter::Only(ProjectCategory::Frontend))
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(frontend, ["DevSynch+"]);

        let fullstack = filter(&projects, ProjectFilter::Only(ProjectCategory::FullStack));
        assert_eq!(fullstack[0].title.as_str(), "BizTrack 237");
        assert_eq!(fullstack[1].title.as_str(), "DigiInscript");
        assert!(filter(&[], ProjectFilter::All).is_empty());
    }

    #[test]
    fn test_filter_names() {
        assert_eq!("all".parse::<ProjectFilter>().unwrap(), ProjectFilter::All);
        assert_eq!(
            "Full Stack".parse::<ProjectFilter>().unwrap(),
            ProjectFilter::Only(ProjectCategory::FullStack)
        );
        assert!("backend".parse::<ProjectFilter>().is_err());

        let labels: Vec<&str> = ProjectFilter::choices().iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All projects", "Frontend", "Full Stack"]);
    }

    #[test]
    fn test_project_deserialization() {
        let project: Project = serde_json::from_str(
            r#"{"title": "RentHub", "description": "Rentals.", "category": "fullstack",
                "technologies": ["React", "TypeScript"], "featured": true}"#,
        )
        .unwrap();
        assert_eq!(project.category, ProjectCategory::FullStack);
        assert_eq!(project.stack(), "React · TypeScript");
        assert!(project.featured);
        assert!(project.demo_url.is_none());
    }
}
