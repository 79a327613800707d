//! Section menu derived from profile content.

use crate::model::profile::Profile;

/// Candidate sections of the display view's menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuSection {
    Education,
    Resume,
    Cv,
    Skills,
    Experience,
}

impl MenuSection {
    /// All candidates in menu order.
    pub const ALL: [MenuSection; 5] = [
        MenuSection::Education,
        MenuSection::Resume,
        MenuSection::Cv,
        MenuSection::Skills,
        MenuSection::Experience,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Resume => "Resume",
            Self::Cv => "CV",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
        }
    }

    /// SVG path data for the menu icon (24x24 viewbox).
    pub fn icon(self) -> &'static str {
        match self {
            Self::Education => "M5 13.18v4L12 21l7-3.82v-4L12 17l-7-3.82zM12 3L1 9l11 6 9-4.91V17h2V9L12 3z",
            Self::Resume => "M11 7h2v2h-2zm0 4h2v6h-2zm1-9C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8z",
            Self::Cv => "M14 2H6c-1.1 0-1.99.9-1.99 2L4 20c0 1.1.89 2 1.99 2H18c1.1 0 2-.9 2-2V8l-6-6zm2 16H8v-2h8v2zm0-4H8v-2h8v2zm-3-5V3.5L18.5 9H13z",
            Self::Skills => "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z",
            Self::Experience => "M20 6h-4V4c0-1.11-.89-2-2-2h-4c-1.11 0-2 .89-2 2v2H4c-1.11 0-1.99.89-1.99 2L2 19c0 1.11.89 2 2 2h16c1.11 0 2-.89 2-2V8c0-1.11-.89-2-2-2zm-6 0h-4V4h4v2z",
        }
    }

    /// Whether the profile has data backing this section.
    pub fn has_content(self, profile: &Profile) -> bool {
        match self {
            Self::Education => !profile.education.is_empty(),
            Self::Resume => profile.resume_link().is_some(),
            Self::Cv => profile.cv_link().is_some(),
            Self::Skills => !profile.skills.is_empty(),
            Self::Experience => !profile.experience.is_empty(),
        }
    }
}

/// Returns the menu sections to show, in fixed menu order.
pub fn visible_menu_sections(profile: &Profile) -> Vec<MenuSection> {
    MenuSection::ALL
        .into_iter()
        .filter(|section| section.has_content(profile))
        .collect()
}

/// Maps a menu label to the id of the on-page section it scrolls to.
///
/// `About` has no menu entry but is still addressable.
pub fn section_id_for_label(label: &str) -> Option<&'static str> {
    match label {
        "About" => Some("about"),
        "Education" => Some("education"),
        "Resume" => Some("resume"),
        "CV" => Some("cv"),
        "Experience" => Some("experience"),
        "Skills" => Some("skills"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{section_id_for_label, visible_menu_sections, MenuSection};
    use crate::model::profile::Profile;

    #[test]
    fn placeholder_shows_every_section() {
        assert_eq!(
            visible_menu_sections(&Profile::placeholder()),
            MenuSection::ALL.to_vec()
        );
    }

    #[test]
    fn empty_profile_shows_nothing() {
        assert!(visible_menu_sections(&Profile::empty()).is_empty());
    }

    #[test]
    fn unknown_label_has_no_section() {
        assert_eq!(section_id_for_label("CV"), Some("cv"));
        assert_eq!(section_id_for_label("Projects"), None);
    }
}
