use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::dom::page::use_scroll_frame;
use crate::engine::chrome::{BackToTopVariant, ChromeThresholds};
use crate::engine::frame::HandlerControl;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub variant: BackToTopVariant,
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    debug!("scrolling back to top");
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let visible = use_state_eq(|| false);
    let hovered = use_state_eq(|| false);

    {
        let visible = visible.clone();
        let thresholds = ChromeThresholds::default();
        use_scroll_frame(move |snapshot| {
            visible.set(thresholds.evaluate(snapshot.scroll_y).back_to_top_visible);
            HandlerControl::Keep
        });
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let style = format!(
        "{} {}",
        props.variant.visibility_style(*visible),
        props.variant.hover_style(*hovered)
    );

    html! {
        <>
            <button
                class="back-to-top"
                aria-label="Back to top"
                {style}
                onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
                {onmouseenter}
                {onmouseleave}
            >
                {"↑"}
            </button>
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 50%;
                    background: #f5a623;
                    color: #0c1624;
                    font-size: 1.4rem;
                    cursor: pointer;
                    z-index: 999;
                    transition: opacity 0.3s ease, visibility 0.3s ease, transform 0.3s ease, box-shadow 0.3s ease;
                }
                "#}
            </style>
        </>
    }
}
