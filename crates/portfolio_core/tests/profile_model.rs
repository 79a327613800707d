use portfolio_core::{ContactInfo, Profile};
use serde_json::json;

#[test]
fn profile_serialization_uses_expected_wire_fields() {
    let json = serde_json::to_value(Profile::placeholder()).unwrap();

    assert_eq!(json["name"], "First Last");
    assert_eq!(json["contactInfo"][0]["type"], "phone");
    assert_eq!(json["contactInfo"][0]["icon"], "phone");
    assert_eq!(json["resumeLink"], "/resume.pdf");
    assert_eq!(json["profilePictureUrl"], "/pfp.jpg");
    assert_eq!(json["projectsLink"], "https://github.com/username-placeholder");
    assert_eq!(json["education"][1]["coursework"].as_array().unwrap().len(), 3);
    assert!(json.get("contact_info").is_none());
}

#[test]
fn absent_links_are_omitted_from_the_document() {
    let mut profile = Profile::empty();
    profile.resume_link = None;

    let json = serde_json::to_value(&profile).unwrap();
    assert!(json.get("resumeLink").is_none());
    assert_eq!(json["cvLink"], "");
}

#[test]
fn minimal_stored_document_decodes() {
    let profile: Profile = serde_json::from_value(json!({
        "name": "Ada",
        "title": "Mathematician",
        "bio": "Wrote the first published algorithm.",
        "skills": ["Analysis"],
        "contactInfo": [{"type": "email", "value": "ada@example.com", "icon": "email"}],
        "experience": [],
        "education": [{
            "degree": "Private tutoring",
            "institution": "Home",
            "location": "London",
            "dates": "1830s"
        }]
    }))
    .unwrap();

    assert_eq!(profile.cv_link, None);
    assert!(profile.education[0].coursework.is_empty());
    assert_eq!(
        profile.contact_info,
        vec![ContactInfo::new("email", "ada@example.com", "email")]
    );
}

#[test]
fn placeholder_shape_matches_first_run_content() {
    let profile = Profile::placeholder();
    assert_eq!(profile.skills.len(), 6);
    assert_eq!(profile.contact_info.len(), 4);
    assert_eq!(profile.experience.len(), 2);
    assert!(profile
        .experience
        .iter()
        .all(|entry| entry.description.len() == 3));
    assert_eq!(profile.education[0].coursework, vec!["Course 1", "Course 2"]);
}
