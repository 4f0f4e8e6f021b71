//! Two-step email signup: request a code, then verify it.
//!
//! DESIGN
//! ======
//! `OtpFlow` is plain data held in a `RwSignal` so the inline signup step and
//! the `/otp-verification` route render the same flow and the same resend
//! countdown. Network calls live in `AuthGateway`; pages call `begin_*` to get
//! the request payload, await the gateway, then report the outcome back with
//! `*_succeeded` / `*_failed`.
//!
//! STATES
//! ======
//! `Collecting -> Submitting -> AwaitingCode -> Submitting -> Verified`.
//! A failed request returns to `Collecting`; a failed verification returns to
//! `AwaitingCode` with the identity intact. Retries are unlimited.

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

use serde::Serialize;

use super::timer::ResendTimer;

pub const OTP_LEN: usize = 6;
pub const PASSWORD_MIN_LEN: usize = 6;

/// Candidate account data captured before the code is sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PendingIdentity {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    Email,
    Password,
}

/// Six independently addressable single-digit cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpCode {
    cells: [Option<char>; OTP_LEN],
}

impl OtpCode {
    /// Parse a complete code, e.g. one pasted in full.
    #[must_use]
    pub fn from_digits(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() != OTP_LEN || !raw.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let mut code = Self::default();
        for (cell, c) in code.cells.iter_mut().zip(raw.chars()) {
            *cell = Some(c);
        }
        Some(code)
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Cell contents for rendering into an `<input>` value.
    #[must_use]
    pub fn cell_text(&self, index: usize) -> String {
        self.cell(index).map(String::from).unwrap_or_default()
    }

    /// Apply an edit to cell `index`.
    ///
    /// Accepts an empty value (clears the cell) or exactly one ASCII digit;
    /// anything else leaves the cell unchanged. Returns the cell that should
    /// receive focus next, if any.
    pub fn input(&mut self, index: usize, value: &str) -> Option<usize> {
        if index >= OTP_LEN {
            return None;
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.cells[index] = None;
                None
            }
            (Some(c), None) if c.is_ascii_digit() => {
                self.cells[index] = Some(c);
                (index + 1 < OTP_LEN).then_some(index + 1)
            }
            _ => None,
        }
    }

    /// Focus target for Backspace pressed in cell `index`.
    ///
    /// Only an empty cell hands focus back, and never past the first cell.
    #[must_use]
    pub fn backspace(&self, index: usize) -> Option<usize> {
        (index > 0 && index < OTP_LEN && self.cells[index].is_none()).then(|| index - 1)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The six-digit string, once every cell is filled.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.cells.iter().copied().collect::<Option<String>>()
    }

    pub fn clear(&mut self) {
        self.cells = [None; OTP_LEN];
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OtpStep {
    #[default]
    Collecting,
    /// A request-code or verify-code call is outstanding.
    Submitting,
    AwaitingCode,
    Verified,
}

/// Client-local signup state machine. One per signup attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpFlow {
    identity: PendingIdentity,
    code: OtpCode,
    step: OtpStep,
    code_requested: bool,
    resending: bool,
    timer: ResendTimer,
    error: Option<String>,
}

/// Trim and check the signup form fields.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_identity(identity: &PendingIdentity) -> Result<PendingIdentity, &'static str> {
    let name = identity.name.trim();
    let email = identity.email.trim();
    if name.is_empty() || email.is_empty() || identity.password.is_empty() {
        return Err("Fill in name, email, and password.");
    }
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));
    if !valid_email {
        return Err("Enter a valid email address.");
    }
    if identity.password.chars().count() < PASSWORD_MIN_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(PendingIdentity { name: name.to_owned(), email: email.to_owned(), password: identity.password.clone() })
}

impl OtpFlow {
    #[must_use]
    pub fn identity(&self) -> &PendingIdentity {
        &self.identity
    }

    #[must_use]
    pub fn code(&self) -> &OtpCode {
        &self.code
    }

    #[must_use]
    pub fn step(&self) -> OtpStep {
        self.step
    }

    #[must_use]
    pub fn timer(&self) -> ResendTimer {
        self.timer
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a request, verification, or resend is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.step == OtpStep::Submitting || self.resending
    }

    /// Whether the code cells are visible.
    #[must_use]
    pub fn code_requested(&self) -> bool {
        self.code_requested
    }

    /// Identity fields are read-only once a code has been requested.
    #[must_use]
    pub fn identity_locked(&self) -> bool {
        self.code_requested || self.step != OtpStep::Collecting
    }

    /// Edit an identity field. Returns `false` when the identity is locked.
    pub fn set_field(&mut self, field: IdentityField, value: String) -> bool {
        if self.identity_locked() {
            return false;
        }
        match field {
            IdentityField::Name => self.identity.name = value,
            IdentityField::Email => self.identity.email = value,
            IdentityField::Password => self.identity.password = value,
        }
        true
    }

    /// Start the request-code call.
    ///
    /// # Errors
    ///
    /// Rejects when a code was already requested, a call is outstanding, or
    /// the form does not validate.
    pub fn begin_request(&mut self) -> Result<PendingIdentity, &'static str> {
        if self.code_requested {
            return Err("A code has already been sent. Enter it below.");
        }
        if self.step != OtpStep::Collecting {
            return Err("Please wait for the current request to finish.");
        }
        let identity = validate_identity(&self.identity)?;
        self.identity = identity.clone();
        self.step = OtpStep::Submitting;
        self.error = None;
        Ok(identity)
    }

    pub fn request_succeeded(&mut self) {
        if self.step != OtpStep::Submitting || self.code_requested {
            return;
        }
        self.step = OtpStep::AwaitingCode;
        self.code_requested = true;
        self.code.clear();
        self.timer.reset();
    }

    pub fn request_failed(&mut self, message: String) {
        if self.step != OtpStep::Submitting || self.code_requested {
            return;
        }
        self.step = OtpStep::Collecting;
        self.error = Some(message);
    }

    /// Edit a code cell. Returns the next focus target.
    pub fn input_digit(&mut self, index: usize, value: &str) -> Option<usize> {
        if self.step != OtpStep::AwaitingCode {
            return None;
        }
        self.code.input(index, value)
    }

    /// Focus target for Backspace in cell `index`.
    #[must_use]
    pub fn backspace(&self, index: usize) -> Option<usize> {
        if self.step != OtpStep::AwaitingCode {
            return None;
        }
        self.code.backspace(index)
    }

    /// Fill every cell from a pasted code. Returns `false` if `raw` is not six digits.
    pub fn paste_code(&mut self, raw: &str) -> bool {
        if self.step != OtpStep::AwaitingCode {
            return false;
        }
        match OtpCode::from_digits(raw) {
            Some(code) => {
                self.code = code;
                true
            }
            None => false,
        }
    }

    /// Submit control state: enabled iff six digits are present and nothing is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.step == OtpStep::AwaitingCode && !self.resending && self.code.is_complete()
    }

    /// Start the verify call.
    ///
    /// # Errors
    ///
    /// Rejects when no code is pending, a call is outstanding, or the code is incomplete.
    pub fn begin_verify(&mut self) -> Result<(PendingIdentity, String), &'static str> {
        if self.is_busy() {
            return Err("Please wait for the current request to finish.");
        }
        if self.step != OtpStep::AwaitingCode {
            return Err("Request a verification code first.");
        }
        let code = self.code.value().ok_or("Please enter a valid 6-digit OTP")?;
        self.step = OtpStep::Submitting;
        self.error = None;
        Ok((self.identity.clone(), code))
    }

    /// Returns `false` when the flow was abandoned while the call was out.
    pub fn verify_succeeded(&mut self) -> bool {
        if self.step == OtpStep::Submitting && self.code_requested {
            self.step = OtpStep::Verified;
            return true;
        }
        false
    }

    pub fn verify_failed(&mut self, message: String) {
        if self.step == OtpStep::Submitting && self.code_requested {
            self.step = OtpStep::AwaitingCode;
            self.error = Some(message);
        }
    }

    /// Advance the resend countdown by one second.
    pub fn tick(&mut self) -> bool {
        self.timer.tick()
    }

    #[must_use]
    pub fn can_resend(&self) -> bool {
        self.step == OtpStep::AwaitingCode && !self.resending && self.timer.can_resend()
    }

    /// Start a resend call for the same identity.
    ///
    /// # Errors
    ///
    /// Rejects while the countdown is running or another call is in flight.
    pub fn begin_resend(&mut self) -> Result<PendingIdentity, &'static str> {
        if !self.can_resend() {
            return Err("Please wait before requesting another code.");
        }
        self.resending = true;
        self.error = None;
        Ok(self.identity.clone())
    }

    pub fn resend_succeeded(&mut self) {
        if !self.resending {
            return;
        }
        self.resending = false;
        self.timer.reset();
        self.code.clear();
    }

    pub fn resend_failed(&mut self, message: String) {
        if !self.resending {
            return;
        }
        self.resending = false;
        self.error = Some(message);
    }

    /// Discard the attempt and start over with an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// User-initiated restart ("use a different email"). Refused while a
    /// call is outstanding so a late response cannot land on the new attempt.
    pub fn abandon(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.reset();
        true
    }
}
