//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Auth payloads use the backend's camelCase keys; user, profile, and todo
//! rows use its snake_case column names. Deserializers are lenient about
//! nulls and flag encodings so a sloppy row never fails a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::state::session::{Session, SignupMethod};

/// `{ "message": ... }` error body.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `/api/auth/login` and `/api/auth/google`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub token: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub signup_method: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_superuser: bool,
}

impl SessionPayload {
    /// Build the session to persist. A missing image is stored as `""`; a
    /// missing or unknown signup method falls back to `default_method`.
    #[must_use]
    pub fn into_session(self, default_method: SignupMethod) -> Session {
        let signup_method = self
            .signup_method
            .as_deref()
            .and_then(SignupMethod::parse)
            .unwrap_or(default_method);
        Session {
            token: Some(self.token),
            display_name: self.name,
            avatar_url: Some(self.profile_image.unwrap_or_default()),
            signup_method: Some(signup_method),
            is_superuser: self.is_superuser,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct VerifyOtpRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub otp: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct GoogleExchangeRequest<'a> {
    pub token: &'a str,
}

/// A row of `/api/auth/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: i64,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub signup_method: String,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_superuser: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `/api/auth/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub email: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub signup_method: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub about_me: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Editable profile fields, posted back as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub about_me: String,
    pub contact_number: String,
    pub company_name: String,
}

impl ProfileUpdate {
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            about_me: profile.about_me.clone().unwrap_or_default(),
            contact_number: profile.contact_number.clone().unwrap_or_default(),
            company_name: profile.company_name.clone().unwrap_or_default(),
        }
    }

    /// Merge saved fields into the displayed profile.
    pub fn apply_to(&self, profile: &mut Profile) {
        profile.about_me = Some(self.about_me.clone());
        profile.contact_number = Some(self.contact_number.clone());
        profile.company_name = Some(self.company_name.clone());
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub status: bool,
}

/// Body of `POST /api/todos` and the edit form of `PUT /api/todos/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct TodoStatusUpdate {
    pub status: bool,
}

fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalize a flag sent as bool, number, string, or anything else via [`truthy`].
pub(crate) fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(truthy(&value))
}

/// JavaScript truthiness: `false`, `0`, `""` and `null` are false; every
/// other value, including `"false"`, `"0"`, `{}` and `[]`, is true.
#[must_use]
pub fn truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
