use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use super::session::Session;
use super::step::{self, Reveal, Step, Timings};
use super::timer::{TimerId, TimerQueue};
use crate::script::ScriptRegistry;
use crate::surface::{surface_name, OutputSurface, SegmentStyle, SurfaceSet};

/// What a scheduled continuation does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Reveal the next unit of the session
    Reveal,
    /// Start the script over after it finished
    Restart,
    /// Deferred start requested by the selector
    Start,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub demo_id: String,
    pub kind: TickKind,
}

/// Notifications for front-ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Surface cleared and typing began from the first line
    Started { demo_id: String },
    /// Text was added to the demo's surface
    Revealed { demo_id: String, text: String },
    /// Last line done, restart is scheduled
    Finished { demo_id: String },
    /// Every session stopped and every surface cleared
    Stopped,
}

/// Drives typing animations, at most one per demo identifier
///
/// All state lives here: sessions, the globally active demo, the output
/// surfaces and a logical-time timer queue. Nothing reads a real clock;
/// call [`TypingEngine::advance_to`] to let time pass.
#[derive(Debug)]
pub struct TypingEngine {
    registry: Arc<ScriptRegistry>,
    surfaces: SurfaceSet,
    sessions: HashMap<String, Session>,
    active_demo: Option<String>,
    timers: TimerQueue<Tick>,
    timings: Timings,
    events: Vec<EngineEvent>,
}

impl TypingEngine {
    /// Engine with one surface per registered script and default timings
    pub fn new(registry: Arc<ScriptRegistry>) -> Self {
        let surfaces = SurfaceSet::for_demos(registry.ids());
        Self {
            registry,
            surfaces,
            sessions: HashMap::new(),
            active_demo: None,
            timers: TimerQueue::new(),
            timings: Timings::default(),
            events: Vec::new(),
        }
    }

    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Replace the view the engine renders into
    pub fn with_surfaces(mut self, surfaces: SurfaceSet) -> Self {
        self.surfaces = surfaces;
        self
    }

    pub fn registry(&self) -> &ScriptRegistry {
        &self.registry
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn surfaces(&self) -> &SurfaceSet {
        &self.surfaces
    }

    /// Surface bound to a demo identifier
    pub fn surface(&self, demo_id: &str) -> Option<&OutputSurface> {
        self.surfaces.for_demo(demo_id)
    }

    pub fn session(&self, demo_id: &str) -> Option<&Session> {
        self.sessions.get(demo_id)
    }

    /// The single demo allowed to render
    pub fn active_demo(&self) -> Option<&str> {
        self.active_demo.as_deref()
    }

    pub fn set_active_demo(&mut self, demo_id: &str) {
        self.active_demo = Some(demo_id.to_string());
    }

    pub fn clear_active_demo(&mut self) {
        self.active_demo = None;
    }

    #[inline]
    pub fn is_current(&self, demo_id: &str) -> bool {
        self.active_demo.as_deref() == Some(demo_id)
    }

    /// Logical time of the engine
    #[inline]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// When the next continuation is due, if any
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Number of outstanding continuations across all demos
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn has_pending(&self, demo_id: &str) -> bool {
        self.sessions
            .get(demo_id)
            .and_then(|s| s.pending)
            .is_some_and(|id| self.timers.is_pending(id))
    }

    /// Take the notifications gathered since the last call
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cancel every continuation, end every session and empty every surface
    pub fn stop_all(&mut self) {
        let mut cancelled = 0;
        for session in self.sessions.values_mut() {
            if let Some(id) = session.pending.take() {
                if self.timers.cancel(id) {
                    cancelled += 1;
                }
            }
        }
        self.sessions.clear();
        self.surfaces.clear_all();
        self.events.push(EngineEvent::Stopped);
        debug!(cancelled, "Stopped all typing demos");
    }

    /// Start (or restart) the demo from its first line
    ///
    /// Unknown demos and demos without a surface are ignored. Only this
    /// demo's pending continuation is cancelled; other sessions keep going.
    pub fn start(&mut self, demo_id: &str) {
        if !self.registry.contains(demo_id) {
            debug!(demo_id, "No script registered, ignoring start");
            return;
        }
        let Some(surface) = self.surfaces.get_mut(&surface_name(demo_id)) else {
            debug!(demo_id, "No output surface, ignoring start");
            return;
        };
        surface.clear();

        self.cancel_pending(demo_id);
        self.sessions
            .insert(demo_id.to_string(), Session::started(demo_id));
        self.events.push(EngineEvent::Started {
            demo_id: demo_id.to_string(),
        });
        debug!(demo_id, "Typing demo started");

        self.reveal_next(demo_id);
    }

    /// Start the demo after `delay`, if it is still the active demo by then
    ///
    /// The deferred start takes the demo's single pending slot, so `start`
    /// and `stop_all` cancel it like any other continuation.
    pub fn schedule_start(&mut self, demo_id: &str, delay: Duration) {
        if !self.registry.contains(demo_id) {
            debug!(demo_id, "No script registered, ignoring deferred start");
            return;
        }
        self.cancel_pending(demo_id);
        let id = self.timers.schedule_after(
            delay,
            Tick {
                demo_id: demo_id.to_string(),
                kind: TickKind::Start,
            },
        );
        self.sessions
            .insert(demo_id.to_string(), Session::waiting(demo_id, id));
    }

    /// Fire every continuation due at or before `now`, in due order
    ///
    /// Returns the number of continuations fired.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while let Some((id, tick)) = self.timers.pop_due(now) {
            self.fire(id, tick);
            fired += 1;
        }
        self.timers.advance_clock(now);
        fired
    }

    pub fn advance_by(&mut self, elapsed: Duration) -> usize {
        self.advance_to(self.now() + elapsed)
    }

    fn cancel_pending(&mut self, demo_id: &str) {
        if let Some(id) = self.sessions.get_mut(demo_id).and_then(|s| s.pending.take()) {
            self.timers.cancel(id);
        }
    }

    fn is_live(&self, demo_id: &str) -> bool {
        self.is_current(demo_id) && self.sessions.get(demo_id).is_some_and(|s| s.active)
    }

    fn fire(&mut self, id: TimerId, tick: Tick) {
        // Only the session's own handle may drive it
        let owned = match self.sessions.get_mut(&tick.demo_id) {
            Some(session) if session.pending == Some(id) => {
                session.pending = None;
                true
            }
            _ => false,
        };
        if !owned {
            trace!(demo_id = %tick.demo_id, "Dropping orphaned continuation");
            return;
        }

        match tick.kind {
            TickKind::Reveal => self.reveal_next(&tick.demo_id),
            TickKind::Restart => {
                if self.is_live(&tick.demo_id) {
                    self.start(&tick.demo_id);
                } else {
                    trace!(demo_id = %tick.demo_id, "Skipping restart of stale demo");
                }
            }
            TickKind::Start => {
                if self.is_current(&tick.demo_id) {
                    self.start(&tick.demo_id);
                } else {
                    trace!(demo_id = %tick.demo_id, "Skipping deferred start of inactive demo");
                }
            }
        }
    }

    /// One tick of the session: reveal a unit, finish a line or finish the script
    fn reveal_next(&mut self, demo_id: &str) {
        let Some(cursor) = self.sessions.get(demo_id).map(|s| s.cursor) else {
            return;
        };
        if !self.is_live(demo_id) {
            trace!(demo_id, "Stale tick, session ends");
            return;
        }
        let Some(script) = self.registry.get_script(demo_id) else {
            return;
        };
        let Some(surface) = self.surfaces.get_mut(&surface_name(demo_id)) else {
            return;
        };

        let (kind, delay, next) = match step::advance(script, cursor, &self.timings) {
            Step::Finished { restart_after } => {
                surface.remove_cursor();
                self.events.push(EngineEvent::Finished {
                    demo_id: demo_id.to_string(),
                });
                debug!(demo_id, "Typing demo finished, restart scheduled");
                (TickKind::Restart, restart_after, cursor)
            }
            Step::NextLine { next, delay } => (TickKind::Reveal, delay, next),
            Step::Reveal { reveal, next, delay } => {
                let text = match reveal {
                    Reveal::Whole { line, text } => {
                        surface.open_line(line, text, SegmentStyle::Selected);
                        text.to_string()
                    }
                    Reveal::Char {
                        line,
                        ch,
                        opens_line,
                        emphasize,
                    } => {
                        if opens_line || !surface.append_char(line, ch) {
                            let style = if emphasize {
                                SegmentStyle::Emphasized
                            } else {
                                SegmentStyle::Plain
                            };
                            surface.open_line(line, ch.encode_utf8(&mut [0; 4]), style);
                        }
                        ch.to_string()
                    }
                };
                surface.place_cursor();
                self.events.push(EngineEvent::Revealed {
                    demo_id: demo_id.to_string(),
                    text,
                });
                (TickKind::Reveal, delay, next)
            }
        };

        let id = self.timers.schedule_after(
            delay,
            Tick {
                demo_id: demo_id.to_string(),
                kind,
            },
        );
        if let Some(session) = self.sessions.get_mut(demo_id) {
            session.cursor = next;
            session.pending = Some(id);
        }
    }
}
