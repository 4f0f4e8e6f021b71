//! Profile page state: the loaded profile plus the edit form.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{Profile, ProfileUpdate};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileEditor {
    pub profile: Option<Profile>,
    pub form: ProfileUpdate,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl Default for ProfileEditor {
    fn default() -> Self {
        Self { profile: None, form: ProfileUpdate::default(), loading: true, saving: false, error: None }
    }
}

impl ProfileEditor {
    pub fn loaded(&mut self, profile: Profile) {
        self.form = ProfileUpdate::from_profile(&profile);
        self.profile = Some(profile);
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: &str) {
        self.loading = false;
        self.saving = false;
        self.error = Some(message.to_owned());
    }

    /// Start a save. Returns the body to post, or `None` if one is in flight
    /// or nothing has loaded.
    pub fn begin_save(&mut self) -> Option<ProfileUpdate> {
        if self.saving || self.profile.is_none() {
            return None;
        }
        self.saving = true;
        Some(self.form.clone())
    }

    /// Merge what was saved into the displayed profile.
    pub fn saved(&mut self, update: &ProfileUpdate) {
        self.saving = false;
        if let Some(profile) = self.profile.as_mut() {
            update.apply_to(profile);
        }
    }
}

/// Avatar image for a profile, if it has a usable one.
#[must_use]
pub fn profile_image(profile: &Profile) -> Option<&str> {
    profile.profile_image.as_deref().filter(|url| !url.trim().is_empty())
}
