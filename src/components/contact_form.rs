//! Contact form bound to the third-party form endpoint.
//!
//! Validation runs before anything leaves the machine; one representative
//! error is surfaced inline. While a delivery is pending the submit control
//! is disabled, which is the only double-submission guard needed. On
//! success the fields clear after a short fixed delay.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use portfolio_core::contact::{
    ContactMessage, ContactService, FormspreeTransport, SubmitOutcome,
};
use portfolio_core::content::{self, Icon};
use portfolio_core::PortfolioError;

use crate::components::icon;

/// Delay between the success response and clearing the fields.
const CLEAR_DELAY_MS: u64 = 100;

#[component]
pub fn ContactForm() -> Element {
    let service = use_hook(|| {
        Arc::new(ContactService::new(FormspreeTransport::new(
            content::CONTACT_FORM_ID,
        )))
    });

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message_body = use_signal(String::new);

    let mut pending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut succeeded = use_signal(|| false);

    let submit = move |_| {
        if pending() {
            return;
        }

        let outbound = ContactMessage {
            name: name(),
            email: email(),
            subject: subject(),
            message: message_body(),
        };

        // Client-side validation gates the outbound call entirely; only the
        // first failure is shown.
        if let Err(errors) = outbound.validate() {
            if let Some(first) = errors.first() {
                error.set(Some(first.message.clone()));
            }
            return;
        }

        error.set(None);
        pending.set(true);

        let service = service.clone();
        spawn(async move {
            match service.submit(&outbound).await {
                Ok(SubmitOutcome::Accepted) => {
                    succeeded.set(true);
                    tokio::time::sleep(Duration::from_millis(CLEAR_DELAY_MS)).await;
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message_body.set(String::new());
                }
                Ok(SubmitOutcome::Rejected(errors)) => {
                    let text = errors
                        .first()
                        .map(|e| e.message.clone())
                        .unwrap_or_else(|| "Submission was rejected.".to_string());
                    error.set(Some(text));
                }
                Err(PortfolioError::Validation(errors)) => {
                    // Unreachable in practice; the form validated above
                    if let Some(first) = errors.first() {
                        error.set(Some(first.message.clone()));
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "contact form delivery failed");
                    error.set(Some(
                        "Something went wrong sending your message. Please try again.".to_string(),
                    ));
                }
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "card contact-card",
            h2 { class: "section-title", "Send a Message" }

            if succeeded() {
                div { class: "form-success",
                    {icon(Icon::CheckCircle, 48)}
                    h3 { "Message Sent!" }
                    p { class: "muted",
                        "Thank you for reaching out. I'll get back to you as soon as possible."
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| {
                            succeeded.set(false);
                            error.set(None);
                        },
                        "Send Another Message"
                    }
                }
            } else {
                div { class: "contact-fields",
                    input {
                        class: "input",
                        name: "name",
                        placeholder: "Your Name",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    input {
                        class: "input",
                        name: "email",
                        r#type: "email",
                        placeholder: "Your Email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    input {
                        class: "input",
                        name: "subject",
                        placeholder: "Subject",
                        value: "{subject}",
                        oninput: move |e| subject.set(e.value()),
                    }
                    textarea {
                        class: "input contact-textarea",
                        name: "message",
                        placeholder: "Your Message",
                        value: "{message_body}",
                        oninput: move |e| message_body.set(e.value()),
                    }

                    if let Some(text) = error() {
                        p { class: "form-error", "{text}" }
                    }

                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        disabled: pending(),
                        onclick: submit,
                        if pending() {
                            "Sending..."
                        } else {
                            "Send Message "
                            {icon(Icon::Send, 16)}
                        }
                    }
                }
            }
        }
    }
}
