// src/types/resume.rs
//! Resume records: template binding, per-resume overrides and sharing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::profile::{non_blank, null_as_default, Profile};

// ===== Customizations =====

/// Per-resume overrides layered on top of a template's defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customizations {
    pub colors: Option<ColorOverrides>,
    pub fonts: Option<FontOverrides>,
    pub layout: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub hidden_sections: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub text: Option<String>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontOverrides {
    pub family: Option<String>,
    pub heading_size: Option<f32>,
    pub body_size: Option<f32>,
}

impl Customizations {
    /// Layout override, if one was actually supplied
    pub fn layout_override(&self) -> Option<&str> {
        non_blank(&self.layout)
    }

    /// Case-insensitive check against `hidden_sections`
    pub fn is_hidden(&self, section: &str) -> bool {
        self.hidden_sections
            .iter()
            .any(|hidden| hidden.trim().eq_ignore_ascii_case(section))
    }

    pub fn primary_color(&self) -> Option<&str> {
        self.colors.as_ref().and_then(|c| non_blank(&c.primary))
    }

    pub fn secondary_color(&self) -> Option<&str> {
        self.colors.as_ref().and_then(|c| non_blank(&c.secondary))
    }

    pub fn text_color(&self) -> Option<&str> {
        self.colors.as_ref().and_then(|c| non_blank(&c.text))
    }

    pub fn background_color(&self) -> Option<&str> {
        self.colors.as_ref().and_then(|c| non_blank(&c.background))
    }

    pub fn font_family(&self) -> Option<&str> {
        self.fonts.as_ref().and_then(|f| non_blank(&f.family))
    }

    pub fn heading_size(&self) -> Option<f32> {
        self.fonts
            .as_ref()
            .and_then(|f| f.heading_size)
            .filter(|size| *size > 0.0)
    }

    pub fn body_size(&self) -> Option<f32> {
        self.fonts
            .as_ref()
            .and_then(|f| f.body_size)
            .filter(|size| *size > 0.0)
    }
}

// ===== Resume =====

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
    Password,
    Expiring,
}

/// Outcome of a public-link access attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicAccess {
    Granted,
    PasswordRequired,
    Private,
    Expired,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub template_id: String,
    pub customizations: Option<Customizations>,
    /// Detached copy of the profile, set once content is edited per resume
    pub content: Option<Profile>,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: Visibility,
    pub expires_at: Option<DateTime<Utc>>,
    pub slug: Option<String>,
    pub short_id: Option<String>,
}

const SHORT_ID_LEN: usize = 8;

impl Resume {
    pub fn new(title: &str, template_id: &str) -> Self {
        Self {
            title: title.to_string(),
            template_id: template_id.to_string(),
            ..Default::default()
        }
    }

    /// The profile this resume renders: the frozen snapshot if any, else the live one
    pub fn effective_profile<'a>(&'a self, live: &'a Profile) -> &'a Profile {
        self.content.as_ref().unwrap_or(live)
    }

    pub fn is_frozen(&self) -> bool {
        self.content.is_some()
    }

    /// Detach from the live profile ("Edit Content")
    pub fn freeze_content(&mut self, live: &Profile) {
        if self.content.is_none() {
            self.content = Some(live.clone());
        }
    }

    /// Go back to mirroring the live profile
    pub fn sync_with_profile(&mut self) {
        self.content = None;
    }

    /// Assign `short_id` and `slug` if missing. Existing ids are kept so links stay stable.
    pub fn assign_sharing_ids(&mut self) {
        let short_id = self
            .short_id
            .get_or_insert_with(|| {
                uuid::Uuid::new_v4().simple().to_string()[..SHORT_ID_LEN].to_string()
            })
            .clone();

        if self.slug.is_none() {
            let base = slug::slugify(self.title.trim());
            self.slug = Some(if base.is_empty() {
                format!("resume-{}", short_id)
            } else {
                format!("{}-{}", base, short_id)
            });
        }
    }

    /// Decide whether a public link may show this resume
    pub fn public_access(&self, now: DateTime<Utc>, password_verified: bool) -> PublicAccess {
        match self.visibility {
            Visibility::Public => PublicAccess::Granted,
            Visibility::Private => PublicAccess::Private,
            Visibility::Password if password_verified => PublicAccess::Granted,
            Visibility::Password => PublicAccess::PasswordRequired,
            Visibility::Expiring => match self.expires_at {
                Some(expires_at) if now < expires_at => PublicAccess::Granted,
                _ => PublicAccess::Expired,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_resume_fields_read_as_missing() {
        let resume: Resume = serde_json::from_str(
            r#"{
                "title": null,
                "templateId": null,
                "visibility": null,
                "customizations": {"hiddenSections": null, "layout": null}
            }"#,
        )
        .unwrap();

        assert_eq!(resume.title, "");
        assert_eq!(resume.template_id, "");
        assert_eq!(resume.visibility, Visibility::Private);
        let customizations = resume.customizations.unwrap();
        assert!(customizations.hidden_sections.is_empty());
        assert_eq!(customizations.layout_override(), None);
    }

    #[test]
    fn test_resume_json_shape() {
        let resume: Resume = serde_json::from_str(
            r#"{
                "title": "Backend",
                "templateId": "Modern",
                "visibility": "expiring",
                "shortId": "ab12cd34",
                "customizations": {"layout": "two-column", "hiddenSections": ["Projects"]}
            }"#,
        )
        .unwrap();

        assert_eq!(resume.template_id, "Modern");
        assert_eq!(resume.visibility, Visibility::Expiring);
        let customizations = resume.customizations.unwrap();
        assert_eq!(customizations.layout_override(), Some("two-column"));
        assert!(customizations.is_hidden("projects"));
        assert!(!customizations.is_hidden("skills"));
    }

    #[test]
    fn test_blank_layout_is_not_an_override() {
        let customizations = Customizations {
            layout: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(customizations.layout_override(), None);
    }

    #[test]
    fn test_frozen_content_wins_over_live_profile() {
        let mut live = Profile::default();
        live.personal_info.full_name = Some("Live".to_string());

        let mut resume = Resume::new("CV", "modern");
        assert_eq!(resume.effective_profile(&live).display_name(), "Live");

        resume.freeze_content(&live);
        live.personal_info.full_name = Some("Changed".to_string());
        assert!(resume.is_frozen());
        assert_eq!(resume.effective_profile(&live).display_name(), "Live");

        resume.sync_with_profile();
        assert_eq!(resume.effective_profile(&live).display_name(), "Changed");
    }

    #[test]
    fn test_sharing_ids_are_stable() {
        let mut resume = Resume::new("Senior Rust Engineer", "modern");
        resume.assign_sharing_ids();

        let short_id = resume.short_id.clone().unwrap();
        assert_eq!(short_id.len(), 8);
        assert_eq!(
            resume.slug.as_deref(),
            Some(format!("senior-rust-engineer-{}", short_id).as_str())
        );

        resume.title = "Renamed".to_string();
        resume.assign_sharing_ids();
        assert_eq!(resume.short_id.as_deref(), Some(short_id.as_str()));
        assert!(resume.slug.unwrap().starts_with("senior-rust-engineer-"));
    }

    #[test]
    fn test_untitled_resume_gets_generic_slug() {
        let mut resume = Resume::new("", "modern");
        resume.assign_sharing_ids();
        assert!(resume.slug.unwrap().starts_with("resume-"));
    }

    #[test]
    fn test_public_access_rules() {
        let now = Utc::now();
        let mut resume = Resume::new("CV", "modern");

        assert_eq!(resume.public_access(now, false), PublicAccess::Private);

        resume.visibility = Visibility::Public;
        assert_eq!(resume.public_access(now, false), PublicAccess::Granted);

        resume.visibility = Visibility::Password;
        assert_eq!(resume.public_access(now, false), PublicAccess::PasswordRequired);
        assert_eq!(resume.public_access(now, true), PublicAccess::Granted);

        resume.visibility = Visibility::Expiring;
        assert_eq!(resume.public_access(now, false), PublicAccess::Expired);
        resume.expires_at = Some(now + Duration::hours(1));
        assert_eq!(resume.public_access(now, false), PublicAccess::Granted);
        assert_eq!(
            resume.public_access(now + Duration::hours(2), false),
            PublicAccess::Expired
        );
    }
}
