use log::debug;
use web_sys::{Document, Element};

use super::{after, apply_reveal, counter, query_all, rect_of, set_style};
use crate::engine::frame::HandlerControl;
use crate::engine::profile::WatchGroup;
use crate::engine::reveal::RevealTracker;
use crate::engine::ScrollSnapshot;

/// One watch group bound to the elements it matched on this page.
pub struct RevealGroup {
    group: WatchGroup,
    tracker: RevealTracker<Element>,
}

impl RevealGroup {
    /// Finds the group's elements and puts them in their hidden state.
    pub fn mount(document: &Document, group: WatchGroup) -> Self {
        let elements = query_all(document, group.selector);
        debug!("{} watching {} elements", group.selector, elements.len());

        if let Some(presentation) = group.presentation {
            for (index, element) in elements.iter().enumerate() {
                for write in presentation.prepare(index) {
                    set_style(element, &write);
                }
            }
        }
        if let (Some(cascade), true) = (group.cascade, group.prepare_cascade) {
            for host in &elements {
                for (index, child) in query_all(host, cascade.child_selector).iter().enumerate() {
                    for write in cascade.presentation.prepare(index) {
                        set_style(child, &write);
                    }
                }
            }
        }

        Self {
            tracker: RevealTracker::new(elements, group.config, group.stagger_ms),
            group,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.tracker.is_exhausted()
    }

    pub fn on_frame(&mut self, snapshot: &ScrollSnapshot) -> HandlerControl {
        for transition in self.tracker.evaluate(snapshot, rect_of) {
            let Some(watched) = self.tracker.element(transition.index) else {
                continue;
            };
            let element = watched.item.clone();
            let group = self.group;
            after(transition.delay_ms, move || reveal(&element, &group));
        }
        if self.tracker.is_exhausted() {
            HandlerControl::Done
        } else {
            HandlerControl::Keep
        }
    }
}

fn reveal(element: &Element, group: &WatchGroup) {
    if let Some(presentation) = group.presentation {
        apply_reveal(element, &presentation.reveal());
    }
    if let Some(binding) = group.counter {
        counter::start_for_host(element, &binding);
    }
    if let Some(cascade) = group.cascade {
        let write = cascade.presentation.reveal();
        for (index, child) in query_all(element, cascade.child_selector).into_iter().enumerate() {
            let write = write.clone();
            after(cascade.delay_for(index), move || apply_reveal(&child, &write));
        }
    }
}
