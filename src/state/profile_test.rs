use super::*;

fn profile() -> Profile {
    Profile {
        username: "Ann".to_owned(),
        email: "ann@x.com".to_owned(),
        about_me: Some("hi".to_owned()),
        ..Profile::default()
    }
}

#[test]
fn loaded_seeds_form_from_profile() {
    let mut editor = ProfileEditor::default();
    assert!(editor.loading);
    editor.loaded(profile());
    assert!(!editor.loading);
    assert_eq!(editor.form.about_me, "hi");
    assert_eq!(editor.form.contact_number, "");
}

#[test]
fn save_is_single_flight_and_merges() {
    let mut editor = ProfileEditor::default();
    assert_eq!(editor.begin_save(), None);
    editor.loaded(profile());
    editor.form.company_name = "Technians".to_owned();

    let body = editor.begin_save().unwrap();
    assert_eq!(editor.begin_save(), None);
    editor.saved(&body);

    assert!(!editor.saving);
    let shown = editor.profile.as_ref().unwrap();
    assert_eq!(shown.company_name.as_deref(), Some("Technians"));
    assert_eq!(shown.username, "Ann");
}

#[test]
fn failed_save_keeps_displayed_profile() {
    let mut editor = ProfileEditor::default();
    editor.loaded(profile());
    editor.form.about_me = "changed".to_owned();
    editor.begin_save();
    editor.failed("Failed to save profile");
    assert!(!editor.saving);
    assert_eq!(editor.profile.as_ref().and_then(|p| p.about_me.as_deref()), Some("hi"));
}

#[test]
fn blank_profile_image_is_absent() {
    let mut p = profile();
    assert_eq!(profile_image(&p), None);
    p.profile_image = Some(String::new());
    assert_eq!(profile_image(&p), None);
    p.profile_image = Some("https://img/x.png".to_owned());
    assert_eq!(profile_image(&p), Some("https://img/x.png"));
}
