// src/types/profile.rs
//! Canonical career data record shared by every template

use serde::{Deserialize, Deserializer, Serialize};

// ===== Profile Structure =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub contact: Contact,
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>, // None with current = true means ongoing
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    pub field: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub honors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub level: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub proficiency: Option<String>,
}

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Returns the trimmed value when it carries any text.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl Profile {
    pub fn display_name(&self) -> &str {
        non_blank(&self.personal_info.full_name).unwrap_or("Your Name")
    }

    pub fn headline(&self) -> Option<&str> {
        non_blank(&self.personal_info.headline)
    }

    pub fn summary_text(&self) -> Option<&str> {
        non_blank(&self.summary)
    }

    /// Contact line items in display order, blank fields skipped
    pub fn contact_items(&self) -> Vec<String> {
        [
            &self.contact.email,
            &self.contact.phone,
            &self.personal_info.location,
            &self.contact.website,
            &self.contact.linkedin,
            &self.contact.github,
        ]
        .into_iter()
        .filter_map(non_blank)
        .map(str::to_string)
        .collect()
    }

    /// Skills grouped by category, preserving first-seen order.
    /// Uncategorised skills are grouped under `None`.
    pub fn skills_by_category(&self) -> Vec<(Option<String>, Vec<&Skill>)> {
        let mut groups: Vec<(Option<String>, Vec<&Skill>)> = Vec::new();

        for skill in self.skills.iter().filter(|s| !s.name.trim().is_empty()) {
            let category = non_blank(&skill.category).map(str::to_string);
            match groups.iter_mut().find(|(existing, _)| *existing == category) {
                Some((_, members)) => members.push(skill),
                None => groups.push((category, vec![skill])),
            }
        }

        groups
    }
}

impl Experience {
    /// "start - end" with "Present" for ongoing roles
    pub fn date_range(&self) -> Option<String> {
        let end = if self.current {
            Some("Present")
        } else {
            non_blank(&self.end_date)
        };
        format_range(non_blank(&self.start_date), end)
    }
}

impl Education {
    pub fn date_range(&self) -> Option<String> {
        format_range(non_blank(&self.start_date), non_blank(&self.end_date))
    }

    /// "Degree in Field" or just the degree
    pub fn qualification(&self) -> String {
        match non_blank(&self.field) {
            Some(field) if !self.degree.trim().is_empty() => {
                format!("{} in {}", self.degree.trim(), field)
            }
            Some(field) => field.to_string(),
            None => self.degree.trim().to_string(),
        }
    }
}

impl Project {
    pub fn date_range(&self) -> Option<String> {
        format_range(non_blank(&self.start_date), non_blank(&self.end_date))
    }
}

fn format_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{} - {}", start, end)),
        (Some(start), None) => Some(start.to_string()),
        (None, Some(end)) => Some(end.to_string()),
        (None, None) => None,
    }
}
