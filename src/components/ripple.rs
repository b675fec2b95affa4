use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::dom::rect_of;
use crate::engine::Rect;
use crate::Route;

pub const RIPPLE_MS: u32 = 600;

/// Square ripple covering the button, centred on the click point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

pub fn ripple_geometry(button: &Rect, client_x: f64, client_y: f64) -> Ripple {
    let size = button.width.max(button.height);
    Ripple {
        size,
        left: client_x - button.left - size / 2.0,
        top: client_y - button.top - size / 2.0,
    }
}

fn spawn_ripple(button: &Element, client_x: f64, client_y: f64) -> Option<()> {
    let ripple = ripple_geometry(&rect_of(button)?, client_x, client_y);
    let span: HtmlElement = button
        .owner_document()?
        .create_element("span")
        .ok()?
        .dyn_into()
        .ok()?;
    let style = span.style();
    let size = format!("{}px", ripple.size);
    style.set_property("width", &size).ok()?;
    style.set_property("height", &size).ok()?;
    style.set_property("left", &format!("{}px", ripple.left)).ok()?;
    style.set_property("top", &format!("{}px", ripple.top)).ok()?;
    span.class_list().add_1("ripple").ok()?;
    button.append_child(&span).ok()?;

    Timeout::new(RIPPLE_MS, move || span.remove()).forget();
    Some(())
}

#[derive(Properties, PartialEq)]
pub struct RippleLinkProps {
    pub to: Route,
    #[prop_or_default]
    pub classes: Classes,
    pub children: Children,
}

/// A call-to-action that ripples where it was clicked, then navigates.
#[function_component(RippleLink)]
pub fn ripple_link(props: &RippleLinkProps) -> Html {
    let navigator = use_navigator();

    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(button) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
                if spawn_ripple(&button, e.client_x() as f64, e.client_y() as f64).is_none() {
                    debug!("ripple skipped");
                }
            }
            if let Some(navigator) = &navigator {
                navigator.push(&to);
            }
        })
    };

    html! {
        <a class={classes!("btn", props.classes.clone())} href={props.to.to_path()} {onclick}>
            { for props.children.iter() }
            <style>
                {r#"
                .btn {
                    position: relative;
                    overflow: hidden;
                }
                .ripple {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.6);
                    transform: scale(0);
                    animation: ripple-animation 0.6s ease-out;
                    pointer-events: none;
                }
                @keyframes ripple-animation {
                    to {
                        transform: scale(2);
                        opacity: 0;
                    }
                }
                "#}
            </style>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ripple_is_centred_on_the_click() {
        let button = Rect::new(100.0, 50.0, 200.0, 60.0);
        assert_eq!(
            ripple_geometry(&button, 150.0, 130.0),
            Ripple {
                size: 200.0,
                left: 0.0,
                top: -70.0,
            }
        );
    }

    #[test]
    fn tall_buttons_use_their_height() {
        let button = Rect::new(0.0, 0.0, 40.0, 90.0);
        let ripple = ripple_geometry(&button, 20.0, 45.0);
        assert_eq!(ripple.size, 90.0);
        assert_eq!((ripple.left, ripple.top), (-25.0, 0.0));
    }
}
