//! Resume projection of the profile.
//!
//! Education and the skills breakdown are part of the shape but are never
//! filled from the profile.

use crate::model::profile::{Experience, Profile};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumeContact {
    pub phone: String,
    pub email: String,
    /// Absolute URL, or empty.
    pub linkedin: String,
    /// Absolute URL, or empty.
    pub gitlab: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeEducation {
    pub university: String,
    pub location: String,
    pub degree: String,
    pub dates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSkills {
    pub languages: Vec<String>,
    pub frameworks_libraries: Vec<String>,
    pub developer_tools: Vec<String>,
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeData {
    pub contact: ResumeContact,
    pub summary: String,
    pub education: Vec<ResumeEducation>,
    pub experience: Vec<Experience>,
    pub skills: ResumeSkills,
}

/// Builds the resume projection from the current profile.
pub fn resume_data(profile: &Profile) -> ResumeData {
    let value_of = |kind: &str| {
        profile
            .contact(kind)
            .map(|contact| contact.value.clone())
            .unwrap_or_default()
    };
    let url_of = |kind: &str| {
        profile
            .contact(kind)
            .map(|contact| format!("https://{}", contact.value))
            .unwrap_or_default()
    };

    ResumeData {
        contact: ResumeContact {
            phone: value_of("phone"),
            email: value_of("email"),
            linkedin: url_of("linkedin"),
            gitlab: url_of("gitlab"),
        },
        summary: profile.bio.clone(),
        education: Vec::new(),
        experience: profile.experience.clone(),
        skills: ResumeSkills::default(),
    }
}
