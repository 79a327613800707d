//! Editable mirror of the profile.
//!
//! # Invariants
//! - List removal is positional: removing index `i` removes whatever is at
//!   `i` now and shifts later entries down by one.
//! - Optional links are edited as plain strings; absent links become empty.

use crate::model::profile::{ContactInfo, Education, Experience, Profile};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NEW_CONTACT_ICON: &str = "contact_mail";

/// Which draft list an index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftList {
    Skills,
    ContactInfo,
    Experience,
    ExperienceDescription,
    Education,
    EducationCoursework,
}

impl DraftList {
    fn as_str(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::ContactInfo => "contactInfo",
            Self::Experience => "experience",
            Self::ExperienceDescription => "experience.description",
            Self::Education => "education",
            Self::EducationCoursework => "education.coursework",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    IndexOutOfRange {
        list: DraftList,
        index: usize,
        len: usize,
    },
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { list, index, len } => write!(
                f,
                "index {index} out of range for `{}` (len {len})",
                list.as_str()
            ),
        }
    }
}

impl Error for DraftError {}

pub type DraftResult<T> = Result<T, DraftError>;

/// In-progress edit of the profile; never persisted partially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub resume_link: String,
    pub cv_link: String,
    pub profile_picture_url: String,
    pub projects_link: String,
    pub skills: Vec<String>,
    pub contact_info: Vec<ContactInfo>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

impl ProfileDraft {
    /// Snapshots `profile` into a fresh draft.
    pub fn from_profile(profile: &Profile) -> Self {
        let link = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            name: profile.name.clone(),
            title: profile.title.clone(),
            bio: profile.bio.clone(),
            resume_link: link(&profile.resume_link),
            cv_link: link(&profile.cv_link),
            profile_picture_url: link(&profile.profile_picture_url),
            projects_link: link(&profile.projects_link),
            skills: profile.skills.clone(),
            contact_info: profile.contact_info.clone(),
            experience: profile.experience.clone(),
            education: profile.education.clone(),
        }
    }

    /// Assembles a full profile from the draft.
    pub fn to_profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            title: self.title.clone(),
            bio: self.bio.clone(),
            skills: self.skills.clone(),
            contact_info: self.contact_info.clone(),
            experience: self.experience.clone(),
            education: self.education.clone(),
            resume_link: Some(self.resume_link.clone()),
            cv_link: Some(self.cv_link.clone()),
            profile_picture_url: Some(self.profile_picture_url.clone()),
            projects_link: Some(self.projects_link.clone()),
        }
    }

    /// Appends a skill from typed input. Blank input is ignored.
    ///
    /// Returns whether a skill was added.
    pub fn add_skill(&mut self, input: &str) -> bool {
        let skill = input.trim();
        if skill.is_empty() {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, index: usize) -> DraftResult<String> {
        remove_at(&mut self.skills, index, DraftList::Skills)
    }

    pub fn add_contact(&mut self) {
        self.contact_info
            .push(ContactInfo::new("", "", NEW_CONTACT_ICON));
    }

    pub fn remove_contact(&mut self, index: usize) -> DraftResult<ContactInfo> {
        remove_at(&mut self.contact_info, index, DraftList::ContactInfo)
    }

    /// Appends a blank experience entry with one empty description line.
    pub fn add_experience(&mut self) {
        self.experience.push(Experience {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            dates: String::new(),
            description: vec![String::new()],
        });
    }

    pub fn remove_experience(&mut self, index: usize) -> DraftResult<Experience> {
        remove_at(&mut self.experience, index, DraftList::Experience)
    }

    pub fn add_experience_description(&mut self, experience_index: usize) -> DraftResult<()> {
        self.experience_at(experience_index)?
            .description
            .push(String::new());
        Ok(())
    }

    pub fn remove_experience_description(
        &mut self,
        experience_index: usize,
        line_index: usize,
    ) -> DraftResult<String> {
        let entry = self.experience_at(experience_index)?;
        remove_at(
            &mut entry.description,
            line_index,
            DraftList::ExperienceDescription,
        )
    }

    /// Appends a blank education entry with no coursework.
    pub fn add_education(&mut self) {
        self.education.push(Education {
            degree: String::new(),
            institution: String::new(),
            location: String::new(),
            dates: String::new(),
            coursework: Vec::new(),
        });
    }

    pub fn remove_education(&mut self, index: usize) -> DraftResult<Education> {
        remove_at(&mut self.education, index, DraftList::Education)
    }

    pub fn add_education_coursework(&mut self, education_index: usize) -> DraftResult<()> {
        self.education_at(education_index)?
            .coursework
            .push(String::new());
        Ok(())
    }

    pub fn remove_education_coursework(
        &mut self,
        education_index: usize,
        course_index: usize,
    ) -> DraftResult<String> {
        let entry = self.education_at(education_index)?;
        remove_at(
            &mut entry.coursework,
            course_index,
            DraftList::EducationCoursework,
        )
    }

    fn experience_at(&mut self, index: usize) -> DraftResult<&mut Experience> {
        let len = self.experience.len();
        self.experience
            .get_mut(index)
            .ok_or(DraftError::IndexOutOfRange {
                list: DraftList::Experience,
                index,
                len,
            })
    }

    fn education_at(&mut self, index: usize) -> DraftResult<&mut Education> {
        let len = self.education.len();
        self.education
            .get_mut(index)
            .ok_or(DraftError::IndexOutOfRange {
                list: DraftList::Education,
                index,
                len,
            })
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize, list: DraftList) -> DraftResult<T> {
    if index >= items.len() {
        return Err(DraftError::IndexOutOfRange {
            list,
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}

#[cfg(test)]
mod tests {
    use super::{DraftError, DraftList, ProfileDraft};
    use crate::model::profile::Profile;

    #[test]
    fn snapshot_round_trips_placeholder() {
        let profile = Profile::placeholder();
        assert_eq!(ProfileDraft::from_profile(&profile).to_profile(), profile);
    }

    #[test]
    fn absent_links_become_empty_strings() {
        let mut profile = Profile::empty();
        profile.cv_link = None;
        let draft = ProfileDraft::from_profile(&profile);
        assert_eq!(draft.cv_link, "");
        assert_eq!(draft.to_profile().cv_link, Some(String::new()));
    }

    #[test]
    fn blank_skill_input_is_ignored() {
        let mut draft = ProfileDraft::from_profile(&Profile::empty());
        assert!(!draft.add_skill("   "));
        assert!(draft.add_skill("  Rust "));
        assert_eq!(draft.skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn nested_index_errors_name_the_outer_list() {
        let mut draft = ProfileDraft::from_profile(&Profile::empty());
        assert_eq!(
            draft.add_experience_description(0),
            Err(DraftError::IndexOutOfRange {
                list: DraftList::Experience,
                index: 0,
                len: 0
            })
        );
    }
}
