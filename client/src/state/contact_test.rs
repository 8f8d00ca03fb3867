use std::cell::Cell;

use futures::executor::block_on;

use super::*;

fn filled() -> ContactFormState {
    ContactFormState {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Let's build something.".to_owned(),
        project_type: Some(ProjectType::Systems),
        status: SubmissionStatus::Idle,
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_accepts_complete_form() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn validate_reports_each_missing_field() {
    for field in FormField::REQUIRED {
        let mut form = filled();
        form.set_field(field, "   ".to_owned());
        assert_eq!(form.validate(), Err(FormError::MissingField(field)));
    }
}

#[test]
fn project_type_is_optional() {
    let mut form = filled();
    form.set_project_type(None);
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn validate_rejects_malformed_email() {
    let mut form = filled();
    form.set_field(FormField::Email, "ada.example.com".to_owned());
    assert_eq!(form.validate(), Err(FormError::InvalidEmail));
}

#[test]
fn email_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@b..co"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email(""));
}

#[test]
fn form_error_messages_name_the_field() {
    assert_eq!(FormError::MissingField(FormField::Subject).to_string(), "Subject is required");
    assert_eq!(FormError::InvalidEmail.to_string(), "Enter a valid email address");
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn empty_form_stays_idle_on_submit() {
    let mut form = ContactFormState::default();
    assert_eq!(form.begin_submit(), Err(FormError::MissingField(FormField::Name)));
    assert_eq!(form.status, SubmissionStatus::Idle);
}

#[test]
fn successful_submission_clears_fields() {
    let mut form = filled();
    let submission = form.begin_submit().expect("form is valid");
    assert_eq!(form.status, SubmissionStatus::Submitting);
    assert_eq!(submission.email, "ada@example.com");

    let outcome = block_on(simulate_submission(submission, SIMULATED_SUBMIT_DELAY, |_| async {}));
    assert_eq!(outcome, SubmissionOutcome::Delivered);

    form.finish(outcome);
    assert_eq!(form.status, SubmissionStatus::Success);
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.subject.is_empty());
    assert!(form.message.is_empty());
    assert_eq!(form.project_type, None);
}

#[test]
fn failed_submission_keeps_fields() {
    let mut form = filled();
    form.begin_submit().expect("form is valid");
    form.finish(SubmissionOutcome::Failed("offline".to_owned()));
    assert_eq!(form.status, SubmissionStatus::Error("offline".to_owned()));
    assert_eq!(form.name, "Ada");
    assert_eq!(form.message, "Let's build something.");
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let mut form = filled();
    form.begin_submit().expect("form is valid");
    assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
    assert!(form.status.is_submitting());
}

#[test]
fn finish_without_submit_is_ignored() {
    let mut form = filled();
    form.finish(SubmissionOutcome::Delivered);
    assert_eq!(form.status, SubmissionStatus::Idle);
    assert_eq!(form.name, "Ada");
}

#[test]
fn editing_after_success_returns_to_idle() {
    let mut form = filled();
    form.begin_submit().expect("form is valid");
    form.finish(SubmissionOutcome::Delivered);
    form.set_field(FormField::Name, "Grace".to_owned());
    assert_eq!(form.status, SubmissionStatus::Idle);
}

#[test]
fn submission_trims_values() {
    let mut form = filled();
    form.set_field(FormField::Name, "  Ada  ".to_owned());
    let submission = form.begin_submit().expect("form is valid");
    assert_eq!(submission.name, "Ada");
}

// =============================================================
// Simulated transport and cancellation
// =============================================================

#[test]
fn simulate_submission_waits_the_given_delay() {
    let requested = Cell::new(Duration::ZERO);
    let outcome = block_on(simulate_submission(filled().begin_submit().unwrap(), SIMULATED_SUBMIT_DELAY, |d| {
        requested.set(d);
        async {}
    }));
    assert_eq!(outcome, SubmissionOutcome::Delivered);
    assert_eq!(requested.get(), Duration::from_millis(1000));
}

#[test]
fn submission_task_completes_when_not_aborted() {
    let task = SubmissionTask::new(async { SubmissionOutcome::Delivered });
    assert_eq!(block_on(task.run()), Ok(SubmissionOutcome::Delivered));
}

#[test]
fn aborted_task_never_produces_outcome() {
    let task = SubmissionTask::new(async { SubmissionOutcome::Delivered });
    task.abort_handle().abort();
    assert_eq!(block_on(task.run()), Err(Aborted));
}

// =============================================================
// ProjectType
// =============================================================

#[test]
fn project_type_round_trips_select_values() {
    for kind in ProjectType::ALL {
        assert_eq!(ProjectType::from_value(kind.value()), Some(kind));
    }
    assert_eq!(ProjectType::from_value(""), None);
}
