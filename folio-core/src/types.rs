//! Typed CV schema for `personal-data.json`.
//!
//! Rendering works on the raw JSON tree; these types exist to validate the
//! document's shape and to summarise it. Every item field is optional because
//! templates treat absent values as normal. Unknown fields are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Identifier of an experience tab (`work`, `freelance`, `school`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(pub String);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TabId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A string-or-number leaf, as found in stats (`"5+"` or `12`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => s.fmt(f),
            Scalar::Number(n) => n.fmt(f),
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub current: Option<String>,
    #[serde(default)]
    pub expertise: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub supervisors: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceTab {
    pub id: TabId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    /// May contain inline HTML (`<br>`, `<strong>`, `<em>`).
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage.
    #[serde(default)]
    pub level: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

/// Root of `personal-data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalData {
    pub personal_info: PersonalInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    pub contact_info: Vec<ContactItem>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    pub experience_tabs: Vec<ExperienceTab>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
}

impl PersonalData {
    /// Top-level keys every document must carry.
    pub const REQUIRED_SECTIONS: &'static [&'static str] = &[
        "personalInfo",
        "contactInfo",
        "experienceTabs",
        "education",
        "skills",
        "projects",
    ];

    /// Look up an experience tab by id.
    pub fn tab(&self, id: &TabId) -> Option<&ExperienceTab> {
        self.experience_tabs.iter().find(|t| &t.id == id)
    }

    /// Total number of experience entries across all tabs.
    pub fn experience_count(&self) -> usize {
        self.experience_tabs.iter().map(|t| t.items.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_id_display() {
        assert_eq!(TabId::from("work").to_string(), "work");
        assert_eq!(TabId::from(String::from("school")), TabId::from("school"));
    }

    #[test]
    fn scalar_accepts_text_and_numbers() {
        let text: Scalar = serde_json::from_str("\"5+\"").unwrap();
        let num: Scalar = serde_json::from_str("12").unwrap();
        assert_eq!(text.to_string(), "5+");
        assert_eq!(num.to_string(), "12");
    }

    #[test]
    fn experience_item_fields_default() {
        let item: ExperienceItem = serde_json::from_str("{}").unwrap();
        assert!(item.title.is_none());
        assert!(item.achievements.is_empty());
        assert!(item.tags.is_empty());
    }

    #[test]
    fn tab_lookup_and_counts() {
        let data = PersonalData {
            personal_info: PersonalInfo {
                name: "Ada".into(),
                ..Default::default()
            },
            about: None,
            contact_info: vec![],
            social_links: vec![],
            experience_tabs: vec![
                ExperienceTab {
                    id: TabId::from("work"),
                    title: "Work".into(),
                    items: vec![ExperienceItem::default(), ExperienceItem::default()],
                },
                ExperienceTab {
                    id: TabId::from("school"),
                    title: "School".into(),
                    items: vec![ExperienceItem::default()],
                },
            ],
            education: vec![],
            skills: vec![],
            projects: vec![],
        };
        assert_eq!(data.experience_count(), 3);
        assert_eq!(data.tab(&TabId::from("school")).unwrap().title, "School");
        assert!(data.tab(&TabId::from("freelance")).is_none());
    }
}
