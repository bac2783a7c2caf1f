use gloo_timers::callback::Timeout;
use log::info;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::{Animated, Animation};
use crate::components::about::SectionHeading;
use crate::config::NOTICE_DURATION_MS;
use crate::content::CONTACT_CHANNELS;
use crate::section::SectionId;

pub const ACKNOWLEDGMENT: &str = "메시지가 전송되었습니다! (데모용)";

/// What the visitor typed. Nothing is checked and nothing leaves the page.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// An uncontrolled form control the draft is read from.
pub trait FormField {
    fn value(&self) -> String;
    fn clear(&self);
}

impl FormField for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }

    fn clear(&self) {
        self.set_value("");
    }
}

impl FormField for HtmlTextAreaElement {
    fn value(&self) -> String {
        HtmlTextAreaElement::value(self)
    }

    fn clear(&self) {
        self.set_value("");
    }
}

fn read(field: Option<&dyn FormField>) -> String {
    field.map(|f| f.value()).unwrap_or_default()
}

pub struct Submission {
    pub draft: ContactDraft,
    pub notice: &'static str,
}

/// Reads whatever is in the fields, empties them and returns the notice to
/// show. There is no validation gate: every call is acknowledged, and a
/// field that is not mounted reads as empty.
pub fn submit(
    name: Option<&dyn FormField>,
    email: Option<&dyn FormField>,
    message: Option<&dyn FormField>,
) -> Submission {
    let draft = ContactDraft {
        name: read(name),
        email: read(email),
        message: read(message),
    };
    for field in [name, email, message].into_iter().flatten() {
        field.clear();
    }
    Submission {
        draft,
        notice: ACKNOWLEDGMENT,
    }
}

fn log_submission(draft: &ContactDraft) {
    match serde_json::to_string(draft) {
        Ok(json) => info!("contact form submitted (not sent anywhere): {}", json),
        Err(e) => gloo_console::error!(format!("Failed to serialize contact draft: {}", e)),
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();
    let notice = use_state(|| None::<&'static str>);
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let notice = notice.clone();
        let dismiss_timer = dismiss_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name_ref.cast::<HtmlInputElement>();
            let email = email_ref.cast::<HtmlInputElement>();
            let message = message_ref.cast::<HtmlTextAreaElement>();

            let submission = submit(
                name.as_ref().map(|f| f as &dyn FormField),
                email.as_ref().map(|f| f as &dyn FormField),
                message.as_ref().map(|f| f as &dyn FormField),
            );
            log_submission(&submission.draft);

            notice.set(Some(submission.notice));
            let hide = notice.setter();
            // replacing the handle cancels a previous pending dismissal
            *dismiss_timer.borrow_mut() = Some(Timeout::new(NOTICE_DURATION_MS, move || hide.set(None)));
        })
    };

    html! {
        // novalidate: the browser must not block submit on a malformed email
        <form class="card contact-form" novalidate=true {onsubmit}>
            <h3>{"메시지 보내기"}</h3>
            <input ref={name_ref} type="text" name="name" placeholder="이름" />
            <input ref={email_ref} type="email" name="email" placeholder="이메일" />
            <textarea ref={message_ref} rows="4" name="message" placeholder="메시지"></textarea>
            <button type="submit" class="submit-button">{"보내기"}</button>
            {
                if let Some(text) = *notice {
                    html! { <div class="form-notice" role="status">{text}</div> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={SectionId::Contact.id()} class="page-section">
            <div class="section-inner">
                <SectionHeading title="Contact" />

                <div class="two-columns">
                    <Animated class="contact-intro" animation={Animation::slide_from_left()}>
                        <h3 class="column-title">{"함께 만들어요"}</h3>
                        <p class="body-text">
                            {"새로운 프로젝트나 협업 기회가 있으시다면 언제든 연락해주세요. \
                              함께 멋진 웹 경험을 만들어가고 싶습니다."}
                        </p>
                        <div class="channel-list">
                            {
                                for CONTACT_CHANNELS.iter().map(|channel| html! {
                                    <div class="channel" key={channel.label}>
                                        <div class={classes!("channel-icon", channel.accent)}>
                                            <span>{channel.icon}</span>
                                        </div>
                                        <div>
                                            <p class="channel-label">{channel.label}</p>
                                            <p class="channel-value">{channel.value}</p>
                                        </div>
                                    </div>
                                })
                            }
                        </div>
                    </Animated>

                    <Animated animation={Animation::slide_from_right()}>
                        <ContactForm />
                    </Animated>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeField(RefCell<String>);

    impl FakeField {
        fn new(text: &str) -> Self {
            FakeField(RefCell::new(text.to_string()))
        }
    }

    impl FormField for FakeField {
        fn value(&self) -> String {
            self.0.borrow().clone()
        }

        fn clear(&self) {
            self.0.borrow_mut().clear();
        }
    }

    #[test]
    fn empty_fields_are_still_acknowledged() {
        let (name, email, message) = (FakeField::new(""), FakeField::new(""), FakeField::new(""));
        let submission = submit(Some(&name), Some(&email), Some(&message));
        assert_eq!(submission.notice, ACKNOWLEDGMENT);
        assert_eq!(submission.draft, ContactDraft::default());
    }

    #[test]
    fn malformed_email_is_acknowledged_and_kept_verbatim() {
        let name = FakeField::new("Kim");
        let email = FakeField::new("not-an-email");
        let message = FakeField::new("hello");
        let submission = submit(Some(&name), Some(&email), Some(&message));
        assert_eq!(submission.notice, ACKNOWLEDGMENT);
        assert_eq!(submission.draft.email, "not-an-email");
        assert_eq!(submission.draft.name, "Kim");
        assert_eq!(submission.draft.message, "hello");
    }

    #[test]
    fn submit_clears_every_field() {
        let name = FakeField::new("Kim");
        let email = FakeField::new("a@b.c");
        let message = FakeField::new("hi");
        submit(Some(&name), Some(&email), Some(&message));
        assert_eq!(name.value(), "");
        assert_eq!(email.value(), "");
        assert_eq!(message.value(), "");
    }

    #[test]
    fn unmounted_fields_read_as_empty() {
        let submission = submit(None, None, None);
        assert_eq!(submission.notice, ACKNOWLEDGMENT);
        assert_eq!(submission.draft, ContactDraft::default());
    }

    #[test]
    fn draft_serializes_every_field() {
        let draft = ContactDraft {
            name: "정".into(),
            email: "a@b.c".into(),
            message: String::new(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["name"], "정");
        assert_eq!(json["email"], "a@b.c");
        assert_eq!(json["message"], "");
    }
}
