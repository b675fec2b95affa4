use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    HtmlDocument, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config;
use crate::contact::csrf::cookie_value;
use crate::contact::form::{ContactSubmission, Service};
use crate::contact::phone::format_uae_phone;
use crate::contact::submit::{
    submit, ContactResponse, ContactTransport, FormMessage, MessageSlot, SubmitOutcome,
    TransportError,
};

/// Posts submissions to the backend with gloo-net.
pub struct GlooTransport {
    url: String,
}

impl GlooTransport {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl ContactTransport for GlooTransport {
    async fn post(
        &self,
        submission: &ContactSubmission,
        csrf_token: Option<&str>,
    ) -> Result<ContactResponse, TransportError> {
        let mut request = Request::post(&self.url);
        if let Some(token) = csrf_token {
            request = request.header(config::CSRF_HEADER, token);
        }
        let response = request
            .json(submission)
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        if !response.ok() {
            info!("contact endpoint answered {}", response.status());
        }
        response
            .json::<ContactResponse>()
            .await
            .map_err(|e| TransportError(e.to_string()))
    }
}

fn csrf_token() -> Option<String> {
    let document: HtmlDocument = web_sys::window()?.document()?.dyn_into().ok()?;
    let cookies = document.cookie().ok()?;
    cookie_value(&cookies, config::CSRF_COOKIE)
}

pub enum SlotAction {
    Show(FormMessage, u32),
    Expire(u32),
}

impl Reducible for MessageSlot {
    type Action = SlotAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut slot = (*self).clone();
        match action {
            SlotAction::Show(message, ticket) => slot.show(message, ticket),
            SlotAction::Expire(ticket) => slot.expire(ticket),
        }
        slot.into()
    }
}

/// Shows `message` under a fresh ticket. Messages that hide on their own
/// get an expiry for that ticket only.
pub fn post_message<D>(tickets: &RefCell<u32>, message: FormMessage, dispatch: D)
where
    D: Fn(SlotAction) + Clone + 'static,
{
    let ticket = {
        let mut counter = tickets.borrow_mut();
        *counter += 1;
        *counter
    };
    if let Some(ms) = message.hide_after_ms {
        let expire = dispatch.clone();
        Timeout::new(ms, move || expire(SlotAction::Expire(ticket))).forget();
    }
    dispatch(SlotAction::Show(message, ticket));
}

/// Classes for a field's wrapper: `focused` while it has focus, `has-value`
/// once it holds anything.
pub fn group_classes(focused: bool, value: &str) -> Classes {
    classes!(
        "form-group",
        focused.then(|| "focused"),
        (!value.is_empty()).then(|| "has-value")
    )
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);
    let focused = use_state_eq(|| None::<Field>);
    let sending = use_state(|| false);
    let slot = use_reducer(MessageSlot::default);
    let tickets = use_mut_ref(|| 0u32);
    let message_ref = use_node_ref();

    // Bring each new message into view.
    {
        let message_ref = message_ref.clone();
        use_effect_with_deps(
            move |shown: &Option<FormMessage>| {
                if shown.is_some() {
                    if let Some(element) = message_ref.cast::<web_sys::Element>() {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Nearest);
                        element.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }
                || ()
            },
            slot.current().cloned(),
        );
    }

    let show = {
        let slot = slot.clone();
        Rc::new(move |shown: FormMessage| {
            let slot = slot.clone();
            post_message(&tickets, shown, move |action| slot.dispatch(action));
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let service = service.clone();
        let message = message.clone();
        let sending = sending.clone();
        let show = show.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            let submission = ContactSubmission {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                service: (*service).clone(),
                message: (*message).clone(),
            };
            if let Err(err) = submission.validate() {
                show(FormMessage::from_result(&Err(err.into())));
                return;
            }

            sending.set(true);
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let service = service.clone();
            let message = message.clone();
            let sending = sending.clone();
            let show = show.clone();
            spawn_local(async move {
                let transport = GlooTransport::new(config::contact_url());
                let token = csrf_token();
                let result = submit(&transport, &submission, token.as_deref()).await;
                match &result {
                    Ok(_) => info!("contact form submitted for {}", submission.email),
                    Err(err) => warn!("contact form failed: {}", err),
                }
                let outcome = SubmitOutcome::from_result(&result);
                if outcome.clear_fields {
                    for field in [&name, &email, &phone, &service, &message] {
                        field.set(String::new());
                    }
                }
                show(outcome.message);
                sending.set(false);
            });
        })
    };

    let onfocus = |field: Field| {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(Some(field)))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(None))
    };
    let is_focused = |field: Field| *focused == Some(field);

    let on_text = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(format_uae_phone(&input.value()));
        })
    };
    let on_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    html! {
        <form class="contact-form" id="contactForm" {onsubmit} novalidate={true}>
            <div class="form-row">
                <div class={group_classes(is_focused(Field::Name), &name)}>
                    <label for="name">{"Full Name *"}</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="alfred john"
                        maxlength="100"
                        value={(*name).clone()}
                        oninput={on_text(&name)}
                        onfocus={onfocus(Field::Name)}
                        onblur={onblur.clone()}
                    />
                </div>
                <div class={group_classes(is_focused(Field::Email), &email)}>
                    <label for="email">{"Email Address *"}</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="alfred@example.com"
                        value={(*email).clone()}
                        oninput={on_text(&email)}
                        onfocus={onfocus(Field::Email)}
                        onblur={onblur.clone()}
                    />
                </div>
            </div>
            <div class="form-row">
                <div class={group_classes(is_focused(Field::Phone), &phone)}>
                    <label for="phone">{"Phone Number *"}</label>
                    <input
                        type="tel"
                        id="phone"
                        placeholder="+971 XX XXX XXXX"
                        maxlength="20"
                        value={(*phone).clone()}
                        oninput={on_phone}
                        onfocus={onfocus(Field::Phone)}
                        onblur={onblur.clone()}
                    />
                </div>
                <div class={group_classes(is_focused(Field::Service), &service)}>
                    <label for="service">{"Service Required"}</label>
                    <select
                        id="service"
                        onchange={on_service}
                        onfocus={onfocus(Field::Service)}
                        onblur={onblur.clone()}
                    >
                        <option value="" selected={service.is_empty()}>{"Select a service"}</option>
                        {
                            Service::ALL.iter().map(|choice| html! {
                                <option
                                    value={choice.value()}
                                    selected={*service == choice.value()}
                                >
                                    {choice.label()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
            </div>
            <div class={group_classes(is_focused(Field::Message), &message)}>
                <label for="message">{"Message *"}</label>
                <textarea
                    id="message"
                    rows="6"
                    placeholder="Tell us about your project requirements..."
                    value={(*message).clone()}
                    oninput={on_message}
                    onfocus={onfocus(Field::Message)}
                    onblur={onblur}
                />
            </div>
            <button type="submit" class="submit-btn" disabled={*sending}>
                { if *sending { "Sending..." } else { "Send Message" } }
            </button>
            {
                match slot.current() {
                    Some(shown) => html! {
                        <div ref={message_ref} class={shown.class()} style="display: block;">
                            {&shown.text}
                        </div>
                    },
                    None => html! {
                        <div ref={message_ref} class="form-message" style="display: none;"></div>
                    },
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::submit::{MessageKind, SubmitError};
    use pretty_assertions::assert_eq;

    #[test]
    fn field_groups_track_focus_and_content() {
        let idle = group_classes(false, "");
        assert!(idle.contains("form-group"));
        assert!(!idle.contains("focused"));
        assert!(!idle.contains("has-value"));

        let typing = group_classes(true, "al");
        assert!(typing.contains("focused"));
        assert!(typing.contains("has-value"));

        let filled = group_classes(false, "alfred");
        assert!(!filled.contains("focused"));
        assert!(filled.contains("has-value"));
    }

    #[test]
    fn stale_expiry_does_not_hide_a_newer_message() {
        let first = FormMessage::from_result(&Ok("Thanks".to_string()));
        let second = FormMessage::from_result(&Err(SubmitError::Rejected("No".into())));

        let slot = Rc::new(MessageSlot::default())
            .reduce(SlotAction::Show(first, 1))
            .reduce(SlotAction::Show(second, 2))
            .reduce(SlotAction::Expire(1));
        assert_eq!(slot.current().map(|m| m.kind), Some(MessageKind::Error));

        let slot = slot.reduce(SlotAction::Expire(2));
        assert_eq!(slot.current(), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use crate::contact::submit::SubmitError;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    type SharedSlot = Rc<RefCell<Rc<MessageSlot>>>;

    fn slot_with_dispatch() -> (SharedSlot, impl Fn(SlotAction) + Clone + 'static) {
        let slot: SharedSlot = Rc::new(RefCell::new(Rc::new(MessageSlot::default())));
        let target = slot.clone();
        let dispatch = move |action: SlotAction| {
            let next = target.borrow().clone().reduce(action);
            *target.borrow_mut() = next;
        };
        (slot, dispatch)
    }

    fn quick_success(text: &str) -> FormMessage {
        FormMessage {
            hide_after_ms: Some(20),
            ..FormMessage::from_result(&Ok(text.to_string()))
        }
    }

    #[wasm_bindgen_test]
    async fn success_message_goes_away_on_its_own() {
        let (slot, dispatch) = slot_with_dispatch();
        let tickets = RefCell::new(0);

        post_message(&tickets, quick_success("ok"), dispatch);
        assert_eq!(
            slot.borrow().current().map(|m| m.text.clone()),
            Some("ok".to_string())
        );

        TimeoutFuture::new(80).await;
        assert_eq!(slot.borrow().current(), None);
    }

    #[wasm_bindgen_test]
    async fn old_expiry_leaves_a_newer_error_alone() {
        let (slot, dispatch) = slot_with_dispatch();
        let tickets = RefCell::new(0);

        post_message(&tickets, quick_success("sent"), dispatch.clone());
        post_message(
            &tickets,
            FormMessage::from_result(&Err(SubmitError::Rejected("nope".into()))),
            dispatch,
        );

        TimeoutFuture::new(80).await;
        assert_eq!(
            slot.borrow().current().map(|m| m.text.clone()),
            Some("nope".to_string())
        );
    }
}
