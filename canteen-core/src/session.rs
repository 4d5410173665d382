//! Authentication session
//!
//! Login → Verification → Authenticated. The role chosen at login decides
//! the initial top-level view.

use crate::code_input::{CODE_LENGTH, CodeEntry};
use crate::config::CoreConfig;
use serde::{Deserialize, Serialize};
use shared::client::AuthResponse;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStep {
    #[default]
    Login,
    Verification,
    Authenticated,
}

/// Top-level view shown once authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Customer,
    Restaurant,
}

impl ViewMode {
    fn initial_for(role: UserRole) -> Self {
        if role.is_partner() {
            ViewMode::Restaurant
        } else {
            ViewMode::Customer
        }
    }
}

/// Whether `code` is a complete verification code
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Default)]
pub struct Session {
    step: AuthStep,
    email: String,
    role: Option<UserRole>,
    token: Option<String>,
    view: ViewMode,
    code_entry: CodeEntry,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self {
            code_entry: CodeEntry::from_config(config),
            ..Self::default()
        }
    }

    pub fn step(&self) -> AuthStep {
        self.step
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    /// Bearer token issued at login, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn is_authenticated(&self) -> bool {
        self.step == AuthStep::Authenticated
    }

    /// Verification screen state
    pub fn code_entry(&self) -> &CodeEntry {
        &self.code_entry
    }

    pub fn code_entry_mut(&mut self) -> &mut CodeEntry {
        &mut self.code_entry
    }

    /// Login form accepted; show the verification screen
    pub fn credentials_accepted(&mut self, email: impl Into<String>, role: UserRole) {
        self.email = email.into();
        self.role = Some(role);
        self.step = AuthStep::Verification;
        self.code_entry.reset();
        tracing::info!(email = %self.email, role = %role, "Credentials accepted, awaiting verification code");
    }

    /// Same as [`credentials_accepted`](Self::credentials_accepted), keeping
    /// the token from the backend's login answer
    pub fn login_succeeded(&mut self, auth: &AuthResponse, role: UserRole) {
        self.token = Some(auth.token.clone());
        self.credentials_accepted(auth.email.clone(), role);
    }

    /// Back from the verification screen to the login form
    pub fn back(&mut self) -> AppResult<()> {
        self.require(AuthStep::Verification)?;
        self.step = AuthStep::Login;
        Ok(())
    }

    /// Check the code and enter the app. Returns the initial view.
    pub fn verify(&mut self, code: &str) -> AppResult<ViewMode> {
        self.require(AuthStep::Verification)?;
        if !is_valid_code(code) {
            return Err(AppError::new(ErrorCode::VerificationCodeInvalid));
        }
        let role = self.role.unwrap_or_default();
        self.step = AuthStep::Authenticated;
        self.view = ViewMode::initial_for(role);
        tracing::info!(email = %self.email, view = ?self.view, "Session authenticated");
        Ok(self.view)
    }

    /// Partners may look at the customer view and come back; customers are
    /// confined to the customer view.
    pub fn switch_view(&mut self, view: ViewMode) -> AppResult<()> {
        if !self.is_authenticated() {
            return Err(AppError::not_authenticated());
        }
        if view == ViewMode::Restaurant && !self.role.is_some_and(|r| r.is_partner()) {
            return Err(AppError::with_message(
                ErrorCode::RoleRequired,
                "Restaurant partner access required",
            )
            .with_detail("role", self.role.unwrap_or_default().as_str()));
        }
        self.view = view;
        Ok(())
    }

    /// Back to the login form with everything cleared
    pub fn logout(&mut self) {
        tracing::info!(email = %self.email, "Logged out");
        self.step = AuthStep::Login;
        self.email.clear();
        self.role = None;
        self.token = None;
        self.view = ViewMode::Customer;
        self.code_entry.reset();
    }

    fn require(&self, step: AuthStep) -> AppResult<()> {
        if self.step != step {
            return Err(AppError::invalid_request(format!(
                "Not allowed in {:?} step",
                self.step
            )));
        }
        Ok(())
    }
}
