//! Profile domain model.
//!
//! # Responsibility
//! - Define the single resume/portfolio record and its nested entries.
//! - Provide the built-in placeholder and the empty profile.
//!
//! # Invariants
//! - Wire field names are camelCase and stable (`contactInfo`, `resumeLink`, ...).
//! - An optional link holding an empty string is treated as unset.
//! - Missing `coursework` in stored documents decodes as an empty list.

use serde::{Deserialize, Serialize};

/// One contact channel shown on the profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Channel kind, e.g. `phone`, `email`, `linkedin`, `github`.
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    /// Icon name rendered next to the value.
    pub icon: String,
}

impl ContactInfo {
    pub fn new(kind: impl Into<String>, value: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            icon: icon.into(),
        }
    }
}

/// One work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free-form date range, e.g. `Jan 2020 – Present`.
    pub dates: String,
    /// Bullet lines in display order.
    pub description: Vec<String>,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub dates: String,
    #[serde(default)]
    pub coursework: Vec<String>,
}

/// Canonical single-tenant profile record.
///
/// Saved wholesale on every write; there is no partial patch protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub contact_info: Vec<ContactInfo>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_link: Option<String>,
}

impl Profile {
    /// Returns a profile with every string empty and every list empty.
    ///
    /// Links are present but empty, matching what "clear all" persists.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            bio: String::new(),
            skills: Vec::new(),
            contact_info: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            resume_link: Some(String::new()),
            cv_link: Some(String::new()),
            profile_picture_url: Some(String::new()),
            projects_link: Some(String::new()),
        }
    }

    /// Returns the built-in placeholder written on first run and on reset.
    pub fn placeholder() -> Self {
        Self {
            name: "First Last".to_string(),
            title: "Job Title".to_string(),
            bio: "Short professional bio goes here. Describe experience level, domain focus, \
                  and key strengths in 2–4 sentences."
                .to_string(),
            skills: [
                "Skill A",
                "Skill B",
                "Skill C",
                "Technology X",
                "Framework Y",
                "Tool Z",
            ]
            .iter()
            .map(|skill| skill.to_string())
            .collect(),
            contact_info: vec![
                ContactInfo::new("phone", "(000)000-0000", "phone"),
                ContactInfo::new("email", "example@example.com", "email"),
                ContactInfo::new("linkedin", "linkedin.com/in/placeholder", "work"),
                ContactInfo::new("github", "github.com/username-placeholder", "code"),
            ],
            experience: vec![placeholder_experience(), placeholder_experience()],
            education: vec![
                placeholder_education(&["Course 1", "Course 2"]),
                placeholder_education(&["Course 1", "Course 2", "Course 3"]),
            ],
            resume_link: Some("/resume.pdf".to_string()),
            cv_link: Some("/csv.pdf".to_string()),
            profile_picture_url: Some("/pfp.jpg".to_string()),
            projects_link: Some("https://github.com/username-placeholder".to_string()),
        }
    }

    /// Returns the resume link when it is set and non-empty.
    pub fn resume_link(&self) -> Option<&str> {
        non_empty(self.resume_link.as_deref())
    }

    /// Returns the CV link when it is set and non-empty.
    pub fn cv_link(&self) -> Option<&str> {
        non_empty(self.cv_link.as_deref())
    }

    pub fn profile_picture_url(&self) -> Option<&str> {
        non_empty(self.profile_picture_url.as_deref())
    }

    pub fn projects_link(&self) -> Option<&str> {
        non_empty(self.projects_link.as_deref())
    }

    /// Returns the first contact entry of the given kind.
    pub fn contact(&self, kind: &str) -> Option<&ContactInfo> {
        self.contact_info.iter().find(|contact| contact.kind == kind)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::empty()
    }
}

fn placeholder_experience() -> Experience {
    Experience {
        title: "Job Title Placeholder".to_string(),
        company: "Company Name Placeholder".to_string(),
        location: "City, State".to_string(),
        dates: "Start Date – End Date".to_string(),
        description: vec![
            "Description line 1 placeholder.".to_string(),
            "Description line 2 placeholder.".to_string(),
            "Description line 3 placeholder.".to_string(),
        ],
    }
}

fn placeholder_education(courses: &[&str]) -> Education {
    Education {
        degree: "Degree Name Placeholder".to_string(),
        institution: "Institution Name Placeholder".to_string(),
        location: "City, State".to_string(),
        dates: "Start Date – End Date".to_string(),
        coursework: courses.iter().map(|course| course.to_string()).collect(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::Profile;

    #[test]
    fn empty_link_counts_as_unset() {
        let profile = Profile::empty();
        assert_eq!(profile.resume_link(), None);
        assert_eq!(profile.projects_link(), None);
    }

    #[test]
    fn placeholder_uses_first_last_name() {
        let profile = Profile::placeholder();
        assert_eq!(profile.name, "First Last");
        assert_eq!(profile.cv_link(), Some("/csv.pdf"));
        assert_eq!(
            profile.contact("email").map(|c| c.value.as_str()),
            Some("example@example.com")
        );
        assert!(profile.contact("gitlab").is_none());
    }
}
