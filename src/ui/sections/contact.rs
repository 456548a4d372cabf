//! Quote request form
//!
//! Validation runs on submit and per field on blur; editing a field clears
//! its hint. A passing form is posted once through [`FetchTransport`] and
//! the result is reported through the toast queue.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::lead::earliest_moving_date;
use crate::core::submission::send_lead;
use crate::core::{LeadField, LeadForm, SectionId, SubmitOutcome, SubmitStart};
use crate::ui::common::{DateField, FormField, InlineSpinner, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_client::{FetchTransport, lead_endpoint, today};
use crate::ui::notifications::use_notifications;

use super::SectionHeader;

/// Reactive handles for one form control
#[derive(Clone, Copy)]
struct FieldBinding {
    value: Signal<String>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
    error: Signal<Option<String>>,
}

impl FieldBinding {
    fn new(form: RwSignal<LeadForm>, field: LeadField) -> Self {
        Self {
            value: Signal::derive(move || form.with(|f| f.request().field(field))),
            on_input: Callback::new(move |value: String| {
                form.update(|f| f.set_field(field, value));
            }),
            on_blur: Callback::new(move |_| {
                form.update(|f| f.check_field(field, today()));
            }),
            error: Signal::derive(move || form.with(|f| f.errors().message(field))),
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let notifications = use_notifications();
    let form = RwSignal::new(LeadForm::new(today()));
    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let min_date = Signal::derive(|| earliest_moving_date(today()).format("%Y-%m-%d").to_string());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(SubmitStart::Ready(request)) = form.try_update(|f| f.begin_submit(today())) else {
            return;
        };

        spawn_local(async move {
            log!("Submitting quote request");
            let transport = FetchTransport;
            let outcome = send_lead(&transport, &lead_endpoint(), &request).await;

            match &outcome {
                SubmitOutcome::Accepted => log!("Quote request accepted"),
                SubmitOutcome::Rejected { status, messages } => warn!(
                    "Quote request rejected with status {} ({} errors)",
                    status,
                    messages.len()
                ),
                SubmitOutcome::TransportFailed(e) => warn!("Quote request failed: {}", e),
            }

            let notices = form
                .try_update(|f| f.finish_submit(&outcome, today()))
                .unwrap_or_default();
            notifications.notify_all(notices);
        });
    };

    let name = FieldBinding::new(form, LeadField::Name);
    let moving_date = FieldBinding::new(form, LeadField::MovingDate);
    let phone = FieldBinding::new(form, LeadField::Phone);
    let email = FieldBinding::new(form, LeadField::Email);
    let moving_from = FieldBinding::new(form, LeadField::MovingFrom);
    let moving_to = FieldBinding::new(form, LeadField::MovingTo);
    let message = FieldBinding::new(form, LeadField::Message);

    view! {
        <section id=SectionId::Contact.as_str() class="py-20 px-4 bg-slate-50">
            <div class="max-w-4xl mx-auto">
                <SectionHeader
                    eyebrow="Contact"
                    title="Request a Quote"
                    subtitle="Fill in the details below and we'll get back to you shortly"
                />

                <form
                    on:submit=on_submit
                    class="landing-scroll-animate bg-white rounded-2xl shadow-lg p-6 sm:p-10 space-y-6"
                    novalidate=true
                >
                    <div class="grid md:grid-cols-2 gap-6">
                        <FormField
                            id="lead-name"
                            label=LeadField::Name.label()
                            required=true
                            placeholder="Your full name"
                            value=name.value
                            on_input=name.on_input
                            on_blur=name.on_blur
                            disabled=submitting
                            error=name.error
                        />
                        <DateField
                            id="lead-moving-date"
                            label=LeadField::MovingDate.label()
                            required=true
                            min=min_date
                            value=moving_date.value
                            on_input=moving_date.on_input
                            on_blur=moving_date.on_blur
                            disabled=submitting
                            error=moving_date.error
                        />
                        <FormField
                            id="lead-phone"
                            label=LeadField::Phone.label()
                            required=true
                            input_type="tel"
                            placeholder="10-digit mobile number"
                            value=phone.value
                            on_input=phone.on_input
                            on_blur=phone.on_blur
                            disabled=submitting
                            error=phone.error
                        />
                        <FormField
                            id="lead-email"
                            label=LeadField::Email.label()
                            required=true
                            input_type="email"
                            placeholder="you@example.com"
                            value=email.value
                            on_input=email.on_input
                            on_blur=email.on_blur
                            disabled=submitting
                            error=email.error
                        />
                        <FormField
                            id="lead-moving-from"
                            label=LeadField::MovingFrom.label()
                            required=true
                            placeholder="Current city"
                            value=moving_from.value
                            on_input=moving_from.on_input
                            on_blur=moving_from.on_blur
                            disabled=submitting
                            error=moving_from.error
                        />
                        <FormField
                            id="lead-moving-to"
                            label=LeadField::MovingTo.label()
                            required=true
                            placeholder="Destination city"
                            value=moving_to.value
                            on_input=moving_to.on_input
                            on_blur=moving_to.on_blur
                            disabled=submitting
                            error=moving_to.error
                        />
                    </div>

                    <TextAreaField
                        id="lead-message"
                        label=LeadField::Message.label()
                        placeholder="Anything we should know? Floor, lift access, fragile items..."
                        rows=4
                        value=message.value
                        on_input=message.on_input
                        disabled=submitting
                    />

                    <button
                        type="submit"
                        class="landing-btn-primary inline-flex items-center justify-center gap-2 w-full sm:w-52 disabled:opacity-60"
                        disabled=move || submitting.get()
                        aria-busy=move || submitting.get().to_string()
                    >
                        {move || if submitting.get() {
                            view! {
                                <InlineSpinner />
                                "Submitting..."
                            }.into_any()
                        } else {
                            view! {
                                "Submit Request"
                                <Icon name=icons::SEND class="w-5 h-5" />
                            }.into_any()
                        }}
                    </button>
                </form>
            </div>
        </section>
    }
}
