use log::info;
use yew::prelude::*;

use super::anchors::SmoothAnchors;
use super::frame::FrameLoop;
use super::parallax::{HeroFadeBinding, ParallaxBinding};
use super::reveal::RevealGroup;
use crate::engine::frame::{HandlerControl, HandlerId};
use crate::engine::profile::PageEffects;
use crate::engine::ScrollSnapshot;

/// Everything a page wired up on mount. Dropping it unhooks the page.
pub struct PageRuntime {
    frame_loop: FrameLoop,
    handlers: Vec<HandlerId>,
    _anchors: SmoothAnchors,
}

impl PageRuntime {
    pub fn mount(frame_loop: &FrameLoop, effects: &PageEffects) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let mut handlers = Vec::new();

        // One-shot: unregisters itself once every group is fully revealed.
        let mut groups: Vec<RevealGroup> = effects
            .groups
            .iter()
            .map(|group| RevealGroup::mount(&document, *group))
            .filter(|group| !group.is_exhausted())
            .collect();
        if !groups.is_empty() {
            handlers.push(frame_loop.register(Box::new(move |snapshot: &ScrollSnapshot| {
                groups.retain_mut(|group| group.on_frame(snapshot) == HandlerControl::Keep);
                if groups.is_empty() {
                    HandlerControl::Done
                } else {
                    HandlerControl::Keep
                }
            })));
        }

        // Continuous: lives as long as the page.
        let layers: Vec<ParallaxBinding> = effects
            .parallax
            .iter()
            .map(|layer| ParallaxBinding::mount(&document, *layer))
            .filter(|binding| !binding.is_empty())
            .collect();
        let mut hero = effects
            .hero_fade
            .and_then(|fade| HeroFadeBinding::mount(&document, fade));
        if !layers.is_empty() || hero.is_some() {
            handlers.push(frame_loop.register(Box::new(move |snapshot: &ScrollSnapshot| {
                layers.iter().for_each(|layer| layer.on_frame(snapshot));
                if let Some(hero) = hero.as_mut() {
                    hero.on_frame(snapshot);
                }
                HandlerControl::Keep
            })));
        }

        let anchors = SmoothAnchors::install(&document, effects.push_anchor_history);
        info!(
            "{} page effects mounted ({} frame handlers)",
            effects.name,
            handlers.len()
        );

        frame_loop.prime();

        Some(Self {
            frame_loop: frame_loop.clone(),
            handlers,
            _anchors: anchors,
        })
    }
}

impl Drop for PageRuntime {
    fn drop(&mut self) {
        for id in self.handlers.drain(..) {
            self.frame_loop.unregister(id);
        }
    }
}

/// Wires a page's scroll effects for as long as the calling component is mounted.
#[hook]
pub fn use_page_effects(effects: PageEffects) {
    let frame_loop = use_context::<FrameLoop>();
    use_effect_with_deps(
        move |frame_loop: &Option<FrameLoop>| {
            let runtime = frame_loop
                .as_ref()
                .and_then(|frame_loop| PageRuntime::mount(frame_loop, &effects));
            move || drop(runtime)
        },
        frame_loop,
    );
}

/// Registers `handler` with the app's frame loop while the component is mounted.
/// The handler runs once right away, then once per frame with scroll activity.
#[hook]
pub fn use_scroll_frame<F>(handler: F)
where
    F: FnMut(&ScrollSnapshot) -> HandlerControl + 'static,
{
    let frame_loop = use_context::<FrameLoop>();
    use_effect_with_deps(
        move |frame_loop: &Option<FrameLoop>| {
            let registered = frame_loop.clone().map(|frame_loop| {
                let id = frame_loop.register(Box::new(handler));
                frame_loop.prime();
                (frame_loop, id)
            });
            move || {
                if let Some((frame_loop, id)) = registered {
                    frame_loop.unregister(id);
                }
            }
        },
        frame_loop,
    );
}
