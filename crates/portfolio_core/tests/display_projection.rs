use portfolio_core::{
    contact_action, document_download, page_title, resume_data, section_id_for_label,
    visible_menu_sections, ContactAction, ContactInfo, DocumentKind, Education, MenuSection,
    Profile, SectionNavigator,
};

fn labels(profile: &Profile) -> Vec<&'static str> {
    visible_menu_sections(profile)
        .into_iter()
        .map(MenuSection::label)
        .collect()
}

#[test]
fn skills_menu_tracks_skill_list() {
    let mut profile = Profile::empty();
    assert!(!labels(&profile).contains(&"Skills"));

    profile.skills.push("Rust".to_string());
    assert_eq!(labels(&profile), vec!["Skills"]);

    profile.skills.clear();
    assert!(!labels(&profile).contains(&"Skills"));
}

#[test]
fn document_menus_track_link_presence() {
    let mut profile = Profile::empty();
    profile.resume_link = Some("/resume.pdf".to_string());
    assert_eq!(labels(&profile), vec!["Resume"]);

    profile.resume_link = Some(String::new());
    profile.cv_link = Some("/cv.pdf".to_string());
    assert_eq!(labels(&profile), vec!["CV"]);

    profile.cv_link = None;
    assert!(labels(&profile).is_empty());
}

#[test]
fn menu_keeps_fixed_order() {
    let mut profile = Profile::empty();
    profile.experience = Profile::placeholder().experience;
    profile.education.push(Education {
        degree: "BSc".to_string(),
        institution: "Somewhere".to_string(),
        location: "City".to_string(),
        dates: "2010".to_string(),
        coursework: Vec::new(),
    });
    profile.skills.push("Rust".to_string());

    assert_eq!(labels(&profile), vec!["Education", "Skills", "Experience"]);
}

#[test]
fn resume_projection_passes_bio_and_experience_through() {
    let mut profile = Profile::placeholder();
    profile
        .contact_info
        .push(ContactInfo::new("gitlab", "gitlab.com/someone", "code"));

    let resume = resume_data(&profile);

    assert_eq!(resume.summary, profile.bio);
    assert_eq!(resume.experience, profile.experience);
    assert_eq!(resume.contact.email, "example@example.com");
    assert_eq!(resume.contact.gitlab, "https://gitlab.com/someone");
    assert!(resume.education.is_empty());
}

#[test]
fn resume_projection_of_empty_profile_is_blank() {
    let resume = resume_data(&Profile::empty());
    assert_eq!(resume.contact.phone, "");
    assert_eq!(resume.contact.linkedin, "");
    assert_eq!(resume.summary, "");
    assert!(resume.experience.is_empty());
}

#[test]
fn resume_serializes_with_camel_case_skill_groups() {
    let json = serde_json::to_value(resume_data(&Profile::placeholder())).unwrap();
    assert!(json["skills"]["frameworksLibraries"].as_array().unwrap().is_empty());
    assert!(json["skills"]["developerTools"].as_array().unwrap().is_empty());
    assert_eq!(json["contact"]["phone"], "(000)000-0000");
}

#[test]
fn menu_selection_scrolls_to_matching_anchor() {
    let mut nav = SectionNavigator::new(["about", "experience", "skills"], None);

    let target = section_id_for_label("Skills").unwrap();
    assert!(nav.scroll_to(target));
    assert_eq!(nav.active_section(), "skills");

    let target = section_id_for_label("Education").unwrap();
    assert!(!nav.scroll_to(target));
    assert_eq!(nav.active_section(), "skills");
}

#[test]
fn downloads_exist_only_for_set_links() {
    let profile = Profile::placeholder();
    let resume = document_download(&profile, DocumentKind::Resume).unwrap();
    assert_eq!(resume.href, "/resume.pdf");
    assert_eq!(resume.file_name, "First_Last_Resume.pdf");

    let mut unnamed = Profile::empty();
    unnamed.cv_link = Some("/cv.pdf".to_string());
    assert_eq!(
        document_download(&unnamed, DocumentKind::Cv).unwrap().file_name,
        "CV.pdf"
    );
    assert_eq!(document_download(&unnamed, DocumentKind::Resume), None);
}

#[test]
fn contact_clicks_copy_or_open() {
    assert_eq!(
        contact_action("email", "a@b.c"),
        ContactAction::Copy {
            value: "a@b.c".to_string(),
            label: "Email"
        }
    );
    assert_eq!(
        contact_action("gitlab", "gitlab.com/x"),
        ContactAction::OpenLink("https://gitlab.com/x".to_string())
    );
}

#[test]
fn page_title_requires_name() {
    assert_eq!(
        page_title(&Profile::placeholder()).as_deref(),
        Some("First Last - Portfolio")
    );
    assert_eq!(page_title(&Profile::empty()), None);
}
