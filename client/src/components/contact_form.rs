//! Contact form wired to the simulated submission flow.
//!
//! DESIGN
//! ======
//! All rules live in `state::contact::ContactFormState`; this component only
//! binds inputs and drives the async task. The in-flight task is aborted when
//! the form unmounts so a late completion never writes into a dropped signal.

use futures::future::AbortHandle;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::contact::{ContactFormState, FormError, FormField, ProjectType, SubmissionStatus};

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let error = RwSignal::new(None::<FormError>);
    let pending = StoredValue::new(None::<AbortHandle>);

    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_update_value(Option::take) {
            handle.abort();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(result) = form.try_update(ContactFormState::begin_submit) else {
            return;
        };
        match result {
            Ok(submission) => {
                error.set(None);
                start_submission(form, pending, submission);
            }
            Err(err) => {
                log::debug!("contact form rejected: {err}");
                error.set(Some(err));
            }
        }
    };

    let submitting = move || form.with(|f| f.status.is_submitting());

    view! {
        <form class="card flex flex-col gap-5 p-8" on:submit=on_submit>
            <div class="grid gap-5 md:grid-cols-2">
                <TextField form=form error=error field=FormField::Name input_type="text" autocomplete="name"/>
                <TextField form=form error=error field=FormField::Email input_type="email" autocomplete="email"/>
            </div>
            <TextField form=form error=error field=FormField::Subject input_type="text" autocomplete="off"/>

            <label class="field">
                <span class="field__label">"Project type"</span>
                <select
                    class="field__input"
                    prop:value=move || form.with(|f| f.project_type.map_or("", ProjectType::value).to_owned())
                    on:change=move |ev| {
                        let kind = ProjectType::from_value(&event_target_value(&ev));
                        form.update(|f| f.set_project_type(kind));
                    }
                >
                    <option value="">"Select one (optional)"</option>
                    {ProjectType::ALL
                        .into_iter()
                        .map(|kind| view! { <option value=kind.value()>{kind.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <label class="field">
                <span class="field__label">{FormField::Message.label()}" *"</span>
                <textarea
                    class="field__input min-h-40"
                    name=FormField::Message.key()
                    required=true
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| {
                        error.set(None);
                        form.update(|f| f.set_field(FormField::Message, event_target_value(&ev)));
                    }
                ></textarea>
            </label>

            {move || error.get().map(|err| view! { <p class="form-status form-status--error" role="alert">{err.to_string()}</p> })}
            {move || form.with(|f| match &f.status {
                SubmissionStatus::Success => Some(view! {
                    <p class="form-status form-status--success" role="status">
                        "Thanks! Your message is on its way. I'll reply within two working days."
                    </p>
                }.into_any()),
                SubmissionStatus::Error(reason) => Some(view! {
                    <p class="form-status form-status--error" role="alert">{format!("Sending failed: {reason}")}</p>
                }.into_any()),
                SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
            })}

            <button type="submit" class="btn btn--primary self-start" disabled=submitting aria-busy=move || submitting().to_string()>
                {move || if submitting() { "Sending…" } else { "Send message" }}
            </button>
        </form>
    }
}

/// Single-line required input bound to one form field.
#[component]
fn TextField(
    form: RwSignal<ContactFormState>,
    error: RwSignal<Option<FormError>>,
    field: FormField,
    input_type: &'static str,
    autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{field.label()}" *"</span>
            <input
                class="field__input"
                type=input_type
                name=field.key()
                autocomplete=autocomplete
                required=true
                prop:value=move || form.with(|f| f.field(field).to_owned())
                on:input=move |ev| {
                    error.set(None);
                    form.update(|f| f.set_field(field, event_target_value(&ev)));
                }
            />
        </label>
    }
}

#[cfg(feature = "hydrate")]
fn start_submission(
    form: RwSignal<ContactFormState>,
    pending: StoredValue<Option<AbortHandle>>,
    submission: crate::state::contact::ContactSubmission,
) {
    use crate::state::contact::{SIMULATED_SUBMIT_DELAY, SubmissionTask, simulate_submission};

    let task = SubmissionTask::new(simulate_submission(submission, SIMULATED_SUBMIT_DELAY, gloo_timers::future::sleep));
    pending.set_value(Some(task.abort_handle()));

    leptos::task::spawn_local(async move {
        match task.run().await {
            Ok(outcome) => {
                pending.try_set_value(None);
                form.try_update(|f| f.finish(outcome));
            }
            Err(_) => log::debug!("contact submission cancelled"),
        }
    });
}

// Submit events only fire in the browser.
#[cfg(not(feature = "hydrate"))]
fn start_submission(
    _form: RwSignal<ContactFormState>,
    _pending: StoredValue<Option<AbortHandle>>,
    _submission: crate::state::contact::ContactSubmission,
) {
}
