use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::magic::MagicButton;

// The form is a stub: it waits this long, then always reports success.
const FAKE_SEND_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Sent,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct FormData {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FormErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    subject: Option<&'static str>,
    message: Option<&'static str>,
}

impl FormErrors {
    fn is_clean(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

impl FormData {
    fn validate(&self) -> FormErrors {
        FormErrors {
            name: (self.name.trim().chars().count() < 2)
                .then_some("Name must be at least 2 characters."),
            email: (!looks_like_email(&self.email))
                .then_some("Please enter a valid email address."),
            subject: (self.subject.trim().chars().count() < 5)
                .then_some("Subject must be at least 5 characters."),
            message: (self.message.trim().chars().count() < 10)
                .then_some("Message must be at least 10 characters."),
        }
    }
}

// Good enough for a form that never actually sends anything: one '@' with a
// dotted domain and no whitespace.
fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    if s.contains(char::is_whitespace) {
        return false;
    }
    s.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (state, set_state) = signal(SubmitState::default());
    let (errors, set_errors) = signal(FormErrors::default());
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            subject_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let data = FormData {
            name: name.value(),
            email: email.value(),
            subject: subject.value(),
            message: message.value(),
        };
        let checked = data.validate();
        set_errors(checked);
        if !checked.is_clean() {
            return;
        }

        set_state(SubmitState::Submitting);
        log::info!("pretending to send contact form from {}", data.email);
        let handle = set_timeout_with_handle(
            move || {
                set_state(SubmitState::Sent);
                name.set_value("");
                email.set_value("");
                subject.set_value("");
                message.set_value("");
            },
            FAKE_SEND_DELAY,
        )
        .ok();
        pending.set_value(handle);
    };

    let field_error = move |err: fn(&FormErrors) -> Option<&'static str>| {
        move || {
            err(&errors.get()).map(|msg| {
                view! { <p class="text-sm text-red-500 mt-1">{msg}</p> }
            })
        }
    };

    let input_class = "w-full px-4 py-2 rounded-md border border-muted/40 bg-background/60 focus:outline-none focus:ring-2 focus:ring-primary transition-all duration-200";

    view! {
        <Title text="Contact" />
        <section class="container py-12 md:py-16 lg:py-20 px-4">
            <div class="mx-auto grid max-w-[64rem] gap-8 md:grid-cols-2">
                <div class="space-y-6 section-content">
                    <h1 class="font-heading text-3xl sm:text-4xl md:text-5xl">"Get in Touch"</h1>
                    <p class="text-lg text-muted">
                        "Have a project in mind or just want to say hello? Feel free to reach out to me using the form or through my social channels."
                    </p>
                    <div class="space-y-4 pt-4">
                        <h2 class="text-xl font-semibold">"Connect with me"</h2>
                        <div class="flex flex-col space-y-3 text-muted">
                            <span class="flex items-center gap-3">
                                <i class="extra-email"></i>
                                "johndoe@example.com"
                            </span>
                            <span class="flex items-center gap-3">
                                <i class="devicon-github-plain"></i>
                                "github.com/johndoe-dev"
                            </span>
                            <span class="flex items-center gap-3">
                                <i class="devicon-linkedin-plain"></i>
                                "linkedin.com/in/john-doe-developer"
                            </span>
                        </div>
                    </div>
                </div>
                <div class="rounded-lg border border-muted/40 bg-background/60 p-6 section-content">
                    <form class="space-y-6" on:submit=submit>
                        <div>
                            <label class="block text-sm font-medium mb-1" for="contact_name">
                                "Name"
                            </label>
                            <input
                                id="contact_name"
                                node_ref=name_ref
                                class=input_class
                                placeholder="Your name"
                            />
                            {field_error(|e| e.name)}
                        </div>
                        <div>
                            <label class="block text-sm font-medium mb-1" for="contact_email">
                                "Email"
                            </label>
                            <input
                                id="contact_email"
                                node_ref=email_ref
                                class=input_class
                                placeholder="your.email@example.com"
                            />
                            {field_error(|e| e.email)}
                        </div>
                        <div>
                            <label class="block text-sm font-medium mb-1" for="contact_subject">
                                "Subject"
                            </label>
                            <input
                                id="contact_subject"
                                node_ref=subject_ref
                                class=input_class
                                placeholder="What is this regarding?"
                            />
                            {field_error(|e| e.subject)}
                        </div>
                        <div>
                            <label class="block text-sm font-medium mb-1" for="contact_message">
                                "Message"
                            </label>
                            <textarea
                                id="contact_message"
                                node_ref=message_ref
                                class=format!("{input_class} min-h-[150px] resize-none")
                                placeholder="Your message here..."
                            ></textarea>
                            {field_error(|e| e.message)}
                        </div>
                        {move || {
                            (state() == SubmitState::Sent)
                                .then(|| {
                                    view! {
                                        <div class="rounded-md bg-green-500/15 px-4 py-3 text-sm text-green-500">
                                            "Message sent successfully! I'll get back to you soon."
                                        </div>
                                    }
                                })
                        }}
                        <MagicButton
                            shimmer=true
                            class="w-full h-11 px-8 bg-primary text-background disabled:pointer-events-none disabled:opacity-50"
                        >
                            {move || {
                                if state() == SubmitState::Submitting {
                                    "Sending..."
                                } else {
                                    "Send Message"
                                }
                            }}
                        </MagicButton>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormData {
        FormData {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "I have a project you might like.".to_string(),
        }
    }

    #[test]
    fn a_complete_form_validates_clean() {
        assert!(valid_form().validate().is_clean());
    }

    #[test]
    fn each_field_reports_its_own_error() {
        let mut form = valid_form();
        form.name = "A".to_string();
        form.subject = "Hi".to_string();
        form.message = "Too short".to_string();
        let errors = form.validate();
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.subject.is_some());
        assert!(errors.message.is_some());
        assert!(!errors.is_clean());
    }

    #[test]
    fn whitespace_does_not_count_toward_minimums() {
        let mut form = valid_form();
        form.name = "  a  ".to_string();
        assert!(form.validate().name.is_some());
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("ada@example.com"));
        assert!(looks_like_email("  ada@example.co.uk "));
        assert!(!looks_like_email(""));
        assert!(!looks_like_email("ada"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@example"));
        assert!(!looks_like_email("ada@.com"));
        assert!(!looks_like_email("ada@example.com."));
        assert!(!looks_like_email("ada lovelace@example.com"));
    }
}
