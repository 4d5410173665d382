//! Customer profile panel
//!
//! Editable personal details plus a book of saved delivery addresses. Edits
//! go to a draft copy; [`Profile::save`] commits it and [`Profile::cancel`]
//! throws it away.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Please enter an address")]
    BlankAddress,

    #[error("Name cannot be empty")]
    BlankName,

    #[error("Profile is not being edited")]
    NotEditing,
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        let code = match err {
            ProfileError::BlankAddress | ProfileError::BlankName => ErrorCode::RequiredField,
            ProfileError::NotEditing => ErrorCode::InvalidRequest,
        };
        AppError::with_message(code, err.to_string())
    }
}

pub type ProfileResult<T> = Result<T, ProfileError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    pub name: String,
    /// Login email, not editable from the panel
    pub email: String,
    pub phone: String,
    pub student_id: String,
    /// Current delivery address
    pub address: String,
}

/// Saved delivery addresses, in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedAddresses {
    entries: Vec<String>,
}

impl SavedAddresses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trimmed address. Blank input is rejected.
    pub fn add(&mut self, address: &str) -> ProfileResult<usize> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ProfileError::BlankAddress);
        }
        self.entries.push(address.to_string());
        Ok(self.entries.len() - 1)
    }

    /// Delete by position; out of range is a no-op
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Profile {
    details: ProfileDetails,
    draft: Option<ProfileDetails>,
    addresses: SavedAddresses,
}

impl Profile {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            details: ProfileDetails {
                email: email.into(),
                ..ProfileDetails::default()
            },
            ..Self::default()
        }
    }

    pub fn details(&self) -> &ProfileDetails {
        &self.details
    }

    /// Follow the session's email, including into an open draft
    pub fn set_email(&mut self, email: impl Into<String>) {
        let email = email.into();
        if let Some(draft) = self.draft.as_mut() {
            draft.email.clone_from(&email);
        }
        self.details.email = email;
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Open the editor on a copy of the saved details. No-op when already open.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.details.clone());
        }
    }

    /// Editable copy, while editing
    pub fn draft_mut(&mut self) -> Option<&mut ProfileDetails> {
        self.draft.as_mut()
    }

    /// Commit the draft. A blank name keeps the editor open.
    pub fn save(&mut self) -> ProfileResult<&ProfileDetails> {
        let draft = self.draft.as_mut().ok_or(ProfileError::NotEditing)?;
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ProfileError::BlankName);
        }
        draft.name = name.to_string();
        draft.phone = draft.phone.trim().to_string();
        if let Some(draft) = self.draft.take() {
            self.details = draft;
        }
        tracing::debug!("Profile saved");
        Ok(&self.details)
    }

    /// Discard the draft, keeping the saved details
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    pub fn addresses(&self) -> &SavedAddresses {
        &self.addresses
    }

    pub fn add_address(&mut self, address: &str) -> ProfileResult<usize> {
        self.addresses.add(address)
    }

    pub fn remove_address(&mut self, index: usize) -> Option<String> {
        self.addresses.remove(index)
    }

    /// Make a saved address the current one. Returns false when out of range.
    pub fn select_address(&mut self, index: usize) -> bool {
        let Some(address) = self.addresses.get(index).map(str::to_string) else {
            return false;
        };
        if let Some(draft) = self.draft.as_mut() {
            draft.address.clone_from(&address);
        }
        self.details.address = address;
        true
    }

    /// Whether the saved address at `index` is the current one
    pub fn is_default_address(&self, index: usize) -> bool {
        self.addresses
            .get(index)
            .is_some_and(|a| a == self.details.address)
    }
}
