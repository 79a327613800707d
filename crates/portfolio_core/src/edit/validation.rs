//! Submit-time validation of a profile draft.
//!
//! Only required and min-length rules exist. An empty required field reports
//! `Required` and skips its min-length check. Links and coursework lines are
//! unconstrained.

use crate::edit::draft::ProfileDraft;
use std::error::Error;
use std::fmt::{Display, Formatter};

const NAME_MIN_CHARS: usize = 2;
const TITLE_MIN_CHARS: usize = 5;
const BIO_MIN_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
}

/// One failed rule, addressed by a dotted field path such as
/// `experience[1].description[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub rule: Rule,
}

/// All violations found in one draft, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether `field` has any violation.
    pub fn has(&self, field: &str) -> bool {
        self.violations.iter().any(|violation| violation.field == field)
    }

    fn required(&mut self, field: impl Into<String>, value: &str) {
        if value.is_empty() {
            self.violations.push(FieldViolation {
                field: field.into(),
                rule: Rule::Required,
            });
        }
    }

    fn required_min(&mut self, field: &str, value: &str, min_chars: usize) {
        if value.is_empty() {
            self.required(field, value);
        } else if value.chars().count() < min_chars {
            self.violations.push(FieldViolation {
                field: field.to_string(),
                rule: Rule::MinLength(min_chars),
            });
        }
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self
            .violations
            .iter()
            .map(|violation| violation.field.as_str())
            .collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl Error for ValidationReport {}

/// Checks every rule and returns the full report on failure.
pub fn validate_draft(draft: &ProfileDraft) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    report.required_min("name", &draft.name, NAME_MIN_CHARS);
    report.required_min("title", &draft.title, TITLE_MIN_CHARS);
    report.required_min("bio", &draft.bio, BIO_MIN_CHARS);

    for (i, skill) in draft.skills.iter().enumerate() {
        report.required(format!("skills[{i}]"), skill);
    }

    for (i, contact) in draft.contact_info.iter().enumerate() {
        report.required(format!("contactInfo[{i}].type"), &contact.kind);
        report.required(format!("contactInfo[{i}].value"), &contact.value);
        report.required(format!("contactInfo[{i}].icon"), &contact.icon);
    }

    for (i, entry) in draft.experience.iter().enumerate() {
        report.required(format!("experience[{i}].title"), &entry.title);
        report.required(format!("experience[{i}].company"), &entry.company);
        report.required(format!("experience[{i}].location"), &entry.location);
        report.required(format!("experience[{i}].dates"), &entry.dates);
        for (j, line) in entry.description.iter().enumerate() {
            report.required(format!("experience[{i}].description[{j}]"), line);
        }
    }

    for (i, entry) in draft.education.iter().enumerate() {
        report.required(format!("education[{i}].degree"), &entry.degree);
        report.required(format!("education[{i}].institution"), &entry.institution);
        report.required(format!("education[{i}].location"), &entry.location);
        report.required(format!("education[{i}].dates"), &entry.dates);
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_draft, Rule};
    use crate::edit::draft::ProfileDraft;
    use crate::model::profile::Profile;

    #[test]
    fn placeholder_is_valid() {
        assert!(validate_draft(&ProfileDraft::from_profile(&Profile::placeholder())).is_ok());
    }

    #[test]
    fn empty_required_field_reports_required_only() {
        let mut draft = ProfileDraft::from_profile(&Profile::placeholder());
        draft.name.clear();
        let report = validate_draft(&draft).unwrap_err();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, Rule::Required);
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let mut draft = ProfileDraft::from_profile(&Profile::placeholder());
        draft.name = "é".to_string();
        draft.title = "Ingé".to_string();
        let report = validate_draft(&draft).unwrap_err();
        assert!(report.has("name"));
        assert!(report.has("title"));

        draft.name = "Ré".to_string();
        draft.title = "Ingén".to_string();
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn blank_coursework_is_allowed_but_blank_description_is_not() {
        let mut draft = ProfileDraft::from_profile(&Profile::placeholder());
        draft.add_education_coursework(0).unwrap();
        assert!(validate_draft(&draft).is_ok());

        draft.add_experience_description(1).unwrap();
        let report = validate_draft(&draft).unwrap_err();
        assert!(report.has("experience[1].description[3]"));
    }
}
