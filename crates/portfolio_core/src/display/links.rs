//! Contact actions, document downloads and page title.

use crate::model::profile::Profile;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// What a click on a contact entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    /// Open an absolute URL in a new tab.
    OpenLink(String),
    /// Copy `value` to the clipboard and announce it with `label`.
    Copy { value: String, label: &'static str },
}

/// Resolves the click action for one contact entry.
pub fn contact_action(kind: &str, value: &str) -> ContactAction {
    match kind {
        "linkedin" | "gitlab" | "website" => ContactAction::OpenLink(absolute_url(value)),
        _ => ContactAction::Copy {
            value: value.to_string(),
            label: contact_label(kind),
        },
    }
}

/// Human label for a contact kind.
pub fn contact_label(kind: &str) -> &'static str {
    match kind {
        "phone" => "Phone number",
        "email" => "Email",
        "linkedin" => "LinkedIn",
        "gitlab" => "GitLab",
        "github" => "GitHub",
        "website" => "Website",
        _ => "Contact info",
    }
}

fn absolute_url(value: &str) -> String {
    if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://{value}")
    }
}

/// Downloadable documents linked from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    Cv,
}

impl DocumentKind {
    fn suffix(self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Cv => "CV",
        }
    }
}

/// A link plus the file name the browser should save it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub href: String,
    pub file_name: String,
}

/// Returns the download for `kind`, or `None` when its link is not set.
pub fn document_download(profile: &Profile, kind: DocumentKind) -> Option<Download> {
    let href = match kind {
        DocumentKind::Resume => profile.resume_link()?,
        DocumentKind::Cv => profile.cv_link()?,
    };
    Some(Download {
        href: href.to_string(),
        file_name: download_file_name(&profile.name, kind),
    })
}

/// `First_Last_Resume.pdf`, or `Resume.pdf` for an empty name.
pub fn download_file_name(name: &str, kind: DocumentKind) -> String {
    if name.is_empty() {
        return format!("{}.pdf", kind.suffix());
    }
    format!("{}_{}.pdf", WHITESPACE_RE.replace_all(name, "_"), kind.suffix())
}

/// Browser title for the profile, if the name is set.
pub fn page_title(profile: &Profile) -> Option<String> {
    if profile.name.is_empty() {
        None
    } else {
        Some(format!("{} - Portfolio", profile.name))
    }
}

#[cfg(test)]
mod tests {
    use super::{contact_action, download_file_name, ContactAction, DocumentKind};

    #[test]
    fn link_contacts_open_and_others_copy() {
        assert_eq!(
            contact_action("linkedin", "linkedin.com/in/x"),
            ContactAction::OpenLink("https://linkedin.com/in/x".to_string())
        );
        assert_eq!(
            contact_action("website", "http://example.com"),
            ContactAction::OpenLink("http://example.com".to_string())
        );
        assert_eq!(
            contact_action("fax", "123"),
            ContactAction::Copy {
                value: "123".to_string(),
                label: "Contact info"
            }
        );
    }

    #[test]
    fn file_name_collapses_whitespace_runs() {
        assert_eq!(
            download_file_name("Ada  Lovelace\tKing", DocumentKind::Cv),
            "Ada_Lovelace_King_CV.pdf"
        );
        assert_eq!(download_file_name("", DocumentKind::Resume), "Resume.pdf");
    }
}
