use super::ScrollSnapshot;

pub type HandlerId = u32;

/// What a frame handler wants after it has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerControl {
    Keep,
    Done,
}

/// Fans one animation frame out to every registered handler.
///
/// The dispatcher owns the "frame already requested" flag: scroll events that
/// arrive while a frame is pending are dropped, so handlers run at most once
/// per frame however many events fired in between.
///
/// Handlers are taken out for the duration of a tick (`begin_tick` /
/// `end_tick`) so the caller can run them without holding a borrow on the
/// dispatcher. Registrations and removals made while a tick is in flight are
/// reconciled in `end_tick`.
pub struct FrameDispatcher<H> {
    handlers: Vec<(HandlerId, H)>,
    next_id: HandlerId,
    pending: bool,
    in_tick: bool,
    removed_during_tick: Vec<HandlerId>,
}

impl<H> Default for FrameDispatcher<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FrameDispatcher<H> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
            pending: false,
            in_tick: false,
            removed_during_tick: Vec::new(),
        }
    }

    pub fn register(&mut self, handler: H) -> HandlerId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.handlers.push((id, handler));
        id
    }

    /// Removes a handler. Returns false if it was not known, or if it is
    /// currently running (it is then dropped when the tick ends).
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        if let Some(pos) = self.handlers.iter().position(|(hid, _)| *hid == id) {
            self.handlers.remove(pos);
            return true;
        }
        if self.in_tick {
            self.removed_during_tick.push(id);
        }
        false
    }

    /// Call on every scroll/resize event. Returns true when the caller has to
    /// request an animation frame; false means one is already on its way.
    pub fn on_scroll(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Takes the current handlers out for the requested frame and clears the
    /// pending flag.
    pub fn begin_tick(&mut self) -> Vec<(HandlerId, H)> {
        self.pending = false;
        self.take_handlers()
    }

    /// Like `begin_tick`, for a run outside the frame cycle (after mount).
    /// A frame already requested stays pending, so scroll events arriving
    /// before it fires still do not request another one.
    pub fn begin_prime(&mut self) -> Vec<(HandlerId, H)> {
        self.take_handlers()
    }

    fn take_handlers(&mut self) -> Vec<(HandlerId, H)> {
        self.in_tick = true;
        std::mem::take(&mut self.handlers)
    }

    /// Puts back the handlers that asked to stay, ahead of anything that was
    /// registered while they ran.
    pub fn end_tick(&mut self, ran: Vec<(HandlerId, H, HandlerControl)>) {
        let removed = std::mem::take(&mut self.removed_during_tick);
        let registered_meanwhile = std::mem::take(&mut self.handlers);
        self.handlers = ran
            .into_iter()
            .filter(|(id, _, control)| *control == HandlerControl::Keep && !removed.contains(id))
            .map(|(id, handler, _)| (id, handler))
            .chain(registered_meanwhile)
            .collect();
        self.in_tick = false;
    }

    /// Runs every handler against one snapshot. Returns how many ran.
    pub fn tick<F>(&mut self, snapshot: &ScrollSnapshot, mut run: F) -> usize
    where
        F: FnMut(&mut H, &ScrollSnapshot) -> HandlerControl,
    {
        let batch = self.begin_tick();
        let count = batch.len();
        let ran = batch
            .into_iter()
            .map(|(id, mut handler)| {
                let control = run(&mut handler, snapshot);
                (id, handler, control)
            })
            .collect();
        self.end_tick(ran);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snap(y: f64) -> ScrollSnapshot {
        ScrollSnapshot::new(y, 800.0, 1280.0)
    }

    #[test]
    fn burst_of_scroll_events_requests_one_frame() {
        let mut dispatcher: FrameDispatcher<u32> = FrameDispatcher::new();
        let requested = (0..10).filter(|_| dispatcher.on_scroll()).count();
        assert_eq!(requested, 1);
        assert!(dispatcher.is_pending());

        dispatcher.tick(&snap(10.0), |_, _| HandlerControl::Keep);
        assert!(!dispatcher.is_pending());
        assert!(dispatcher.on_scroll());
    }

    #[test]
    fn priming_keeps_a_requested_frame_pending() {
        let mut dispatcher = FrameDispatcher::new();
        dispatcher.register(0u32);
        assert!(dispatcher.on_scroll());

        let ran = dispatcher
            .begin_prime()
            .into_iter()
            .map(|(id, h)| (id, h, HandlerControl::Keep))
            .collect();
        dispatcher.end_tick(ran);

        assert!(dispatcher.is_pending());
        assert!(!dispatcher.on_scroll());
        assert_eq!(dispatcher.len(), 1);

        dispatcher.tick(&snap(0.0), |_, _| HandlerControl::Keep);
        assert!(dispatcher.on_scroll());
    }

    #[test]
    fn every_handler_sees_the_same_snapshot() {
        let mut dispatcher = FrameDispatcher::new();
        dispatcher.register(Vec::new());
        dispatcher.register(Vec::new());
        dispatcher.register(Vec::new());

        dispatcher.tick(&snap(120.0), |seen: &mut Vec<f64>, s| {
            seen.push(s.scroll_y);
            HandlerControl::Keep
        });
        let batch = dispatcher.begin_tick();
        let seen: Vec<Vec<f64>> = batch.iter().map(|(_, h)| h.clone()).collect();
        assert_eq!(seen, vec![vec![120.0], vec![120.0], vec![120.0]]);
    }

    #[test]
    fn done_handlers_are_dropped() {
        let mut dispatcher = FrameDispatcher::new();
        dispatcher.register(1u32);
        dispatcher.register(2u32);
        dispatcher.tick(&snap(0.0), |h, _| {
            if *h == 1 {
                HandlerControl::Done
            } else {
                HandlerControl::Keep
            }
        });
        assert_eq!(dispatcher.len(), 1);
        assert_eq!(dispatcher.tick(&snap(0.0), |_, _| HandlerControl::Keep), 1);
    }

    #[test]
    fn changes_during_a_tick_are_reconciled() {
        let mut dispatcher = FrameDispatcher::new();
        let a = dispatcher.register("a");
        let b = dispatcher.register("b");

        let batch = dispatcher.begin_tick();
        assert!(!dispatcher.unregister(b));
        let c = dispatcher.register("c");
        let ran = batch
            .into_iter()
            .map(|(id, h)| (id, h, HandlerControl::Keep))
            .collect();
        dispatcher.end_tick(ran);

        let ids: Vec<HandlerId> = dispatcher.begin_tick().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, c]);
    }
}
