use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::validate::{lenient_string, parse_int_in_range, require_email, require_text};
use crate::records::FieldErrors;
use crate::session::{AuthError, Session};

/// The signed-in student. One per session, no id of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub course: String,
    pub year: u8,
    pub student_id: String,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub course: String,
    #[serde(deserialize_with = "lenient_string")]
    pub year: String,
    pub profile_picture: Option<String>,
}

impl ProfileDraft {
    pub fn from_profile(p: &Profile) -> Self {
        Self {
            name: p.name.clone(),
            email: p.email.clone(),
            course: p.course.clone(),
            year: p.year.to_string(),
            profile_picture: p.profile_picture.clone(),
        }
    }
}

/// Checks the draft and builds the replacement profile. The student id is
/// not editable and always comes from `current`.
pub fn validate_profile(draft: &ProfileDraft, current: &Profile) -> Result<Profile, FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "name", "Name", &draft.name);
    require_email(&mut errors, "email", &draft.email);
    require_text(&mut errors, "course", "Course", &draft.course);
    let year = parse_int_in_range(&mut errors, "year", "Year", &draft.year, 1, 4);
    let year = year.and_then(|y| u8::try_from(y).ok()).unwrap_or(current.year);
    errors.into_result(Profile {
        name: draft.name.clone(),
        email: draft.email.clone(),
        course: draft.course.clone(),
        year,
        student_id: current.student_id.clone(),
        profile_picture: draft.profile_picture.clone(),
    })
}

#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    #[error("validation failed: {}", .0.field_list())]
    Validation(FieldErrors),
    #[error("profile form is not open")]
    FormClosed,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ProfileError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::FormClosed => "form_closed",
            Self::Auth(e) => e.code(),
        }
    }
}

/// Edit overlay for the profile page. Only ever in edit mode.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ProfileEditor {
    #[default]
    Closed,
    Open { draft: ProfileDraft, errors: FieldErrors },
}

impl ProfileEditor {
    pub fn open_edit(&mut self, session: &Session) -> Result<(), ProfileError> {
        let user = session.user().ok_or(AuthError::NotAuthenticated)?;
        *self = Self::Open {
            draft: ProfileDraft::from_profile(user),
            errors: FieldErrors::new(),
        };
        Ok(())
    }

    pub fn change(&mut self, next: ProfileDraft, field: Option<&str>) -> Result<(), ProfileError> {
        let Self::Open { draft, errors } = self else {
            return Err(ProfileError::FormClosed);
        };
        *draft = next;
        if let Some(field) = field {
            errors.clear_field(field);
        }
        Ok(())
    }

    /// Replaces the session user wholesale on success.
    pub fn submit(
        &mut self,
        session: &mut Session,
        next: Option<ProfileDraft>,
    ) -> Result<Profile, ProfileError> {
        let Self::Open { draft, errors } = self else {
            return Err(ProfileError::FormClosed);
        };
        if let Some(next) = next {
            *draft = next;
        }
        let Some(current) = session.user() else {
            *self = Self::Closed;
            return Err(AuthError::NotAuthenticated.into());
        };
        match validate_profile(draft, current) {
            Ok(profile) => {
                session.update_profile(profile.clone())?;
                *self = Self::Closed;
                Ok(profile)
            }
            Err(fields) => {
                *errors = fields.clone();
                Err(ProfileError::Validation(fields))
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }
}
