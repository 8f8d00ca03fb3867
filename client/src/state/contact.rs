//! Contact form state and simulated submission.
//!
//! DESIGN
//! ======
//! The form never talks to a server. Submission is modeled as a small state
//! machine (`Idle -> Submitting -> Success | Error`) driven by an injected
//! delay, so the same code runs under `gloo-timers` in the browser and an
//! immediately-ready future in tests. The in-flight delay is wrapped in an
//! abortable task; the component aborts it on cleanup so navigating away
//! mid-submission leaves nothing behind.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable, Aborted};
use thiserror::Error;

/// Stand-in for network latency.
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Editable fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const REQUIRED: [FormField; 4] = [FormField::Name, FormField::Email, FormField::Subject, FormField::Message];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    /// HTML `name`/`id` attribute.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

/// Optional classification of the inquiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    WebApp,
    MobileApp,
    Systems,
    Consulting,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::WebApp,
        ProjectType::MobileApp,
        ProjectType::Systems,
        ProjectType::Consulting,
        ProjectType::Other,
    ];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            ProjectType::WebApp => "web-app",
            ProjectType::MobileApp => "mobile-app",
            ProjectType::Systems => "systems",
            ProjectType::Consulting => "consulting",
            ProjectType::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::WebApp => "Web application",
            ProjectType::MobileApp => "Mobile application",
            ProjectType::Systems => "Systems / backend",
            ProjectType::Consulting => "Consulting",
            ProjectType::Other => "Something else",
        }
    }

    /// Parse a `<select>` value. The empty placeholder option maps to `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

/// Submission lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionStatus {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(FormField),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    AlreadySubmitting,
}

/// Snapshot of the fields taken when submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub project_type: Option<ProjectType>,
}

/// Result of the (simulated) transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    Failed(String),
}

/// Contact form fields plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub project_type: Option<ProjectType>,
    pub status: SubmissionStatus,
}

impl ContactFormState {
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Update a field. Editing after a finished submission re-arms the form.
    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value;
        self.rearm();
    }

    pub fn set_project_type(&mut self, project_type: Option<ProjectType>) {
        self.project_type = project_type;
        self.rearm();
    }

    fn rearm(&mut self) {
        if matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Error(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Check required fields and email shape.
    ///
    /// # Errors
    ///
    /// Returns the first missing required field, or `InvalidEmail`.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in FormField::REQUIRED {
            if self.field(field).trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and move to `Submitting`.
    ///
    /// # Errors
    ///
    /// Fails without changing status if validation fails or a submission is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, FormError> {
        if self.status.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        self.validate()?;
        self.status = SubmissionStatus::Submitting;
        Ok(ContactSubmission {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
            project_type: self.project_type,
        })
    }

    /// Apply the transport outcome. Fields are cleared only on delivery.
    pub fn finish(&mut self, outcome: SubmissionOutcome) {
        if !self.status.is_submitting() {
            return;
        }
        match outcome {
            SubmissionOutcome::Delivered => {
                *self = Self { status: SubmissionStatus::Success, ..Self::default() };
            }
            SubmissionOutcome::Failed(reason) => {
                self.status = SubmissionStatus::Error(reason);
            }
        }
    }
}

/// Syntactic email check mirroring `<input type="email">`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Simulated delivery: wait `delay`, then report success.
///
/// The simulation has no failure path; `SubmissionOutcome::Failed` exists for
/// a real transport.
pub async fn simulate_submission<S, F>(submission: ContactSubmission, delay: Duration, sleep: S) -> SubmissionOutcome
where
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    log::debug!(
        "simulating contact submission from {} ({} chars)",
        submission.email,
        submission.message.len()
    );
    sleep(delay).await;
    SubmissionOutcome::Delivered
}

/// In-flight submission that can be cancelled from outside.
pub struct SubmissionTask<F> {
    future: Abortable<F>,
    handle: AbortHandle,
}

impl<F: Future> SubmissionTask<F> {
    pub fn new(future: F) -> Self {
        let (handle, registration) = AbortHandle::new_pair();
        Self { future: Abortable::new(future, registration), handle }
    }

    /// Handle for cancelling the task, e.g. from a cleanup hook.
    #[must_use]
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.clone()
    }

    /// Run to completion, or `Err(Aborted)` if cancelled first.
    ///
    /// # Errors
    ///
    /// Returns `Aborted` when the handle was aborted before the inner future
    /// finished.
    pub async fn run(self) -> Result<F::Output, Aborted> {
        self.future.await
    }
}
