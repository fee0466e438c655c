//! Scroll-synchronized category selector.
//!
//! Keeps a single active [`Selection`] in step with the page scroll position
//! while letting an explicit chip click take precedence for a cooldown
//! window. The selector is a plain state machine: the host forwards
//! [`SurfaceEvent`]s to [`ScrollSpy::handle`] and reads back the new
//! selection when it changes.
//!
//! Evaluation is rate-limited to one pass per animation frame. Listener
//! registrations, the pending frame and any armed timers are released when
//! the selector is dropped.

use std::time::Duration;

use serde::Serialize;

use crate::layout::{FrameId, LayoutSurface, ListenerId, ListenerKind, SurfaceEvent, TimerId};
use crate::menu::{SectionId, MENU_ANCHOR};

/// Extra distance below the sticky header at which a section counts as
/// reached.
pub const DEFAULT_LOOKAHEAD: f64 = 50.0;

/// How far above the menu top the page must be scrolled to select "all".
pub const DEFAULT_TOP_THRESHOLD: f64 = 150.0;

/// How long a manual selection suppresses automatic tracking.
pub const DEFAULT_OVERRIDE_COOLDOWN: Duration = Duration::from_millis(1000);

/// Delay before the first evaluation after mount.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Anchor ids of the sticky site header and category strip.
pub const DEFAULT_STICKY_ANCHORS: [&str; 2] = ["site-header", "category-filter"];

/// Height assumed for the sticky stack when none of its elements is rendered.
pub const DEFAULT_FALLBACK_HEADER_HEIGHT: f64 = 112.0;

/// The active category indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "section", rename_all = "snake_case")]
pub enum Selection {
    All,
    Section(SectionId),
}

/// Tunables for [`ScrollSpy`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpyConfig {
    /// Element wrapping the whole menu; its top decides the "all" zone.
    pub container_anchor: String,
    /// Sticky elements stacked above the content. Their rendered heights are
    /// summed on every evaluation.
    pub sticky_anchors: Vec<String>,
    pub fallback_header_height: f64,
    pub lookahead: f64,
    pub top_threshold: f64,
    pub override_cooldown: Duration,
    pub settle_delay: Duration,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            container_anchor: MENU_ANCHOR.to_string(),
            sticky_anchors: DEFAULT_STICKY_ANCHORS.iter().map(|a| a.to_string()).collect(),
            fallback_header_height: DEFAULT_FALLBACK_HEADER_HEIGHT,
            lookahead: DEFAULT_LOOKAHEAD,
            top_threshold: DEFAULT_TOP_THRESHOLD,
            override_cooldown: DEFAULT_OVERRIDE_COOLDOWN,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

pub struct ScrollSpy<S: LayoutSurface> {
    surface: S,
    config: ScrollSpyConfig,
    sections: Vec<SectionId>,
    active: Selection,
    manual_override: bool,
    pending_frame: Option<FrameId>,
    settle_timer: Option<TimerId>,
    cooldown_timer: Option<TimerId>,
    listeners: Vec<ListenerId>,
}

impl<S: LayoutSurface> ScrollSpy<S> {
    /// Attach to `surface` for the given rendered sections.
    ///
    /// With no sections the selector stays inert at [`Selection::All`] and
    /// registers nothing.
    pub fn mount(mut surface: S, sections: Vec<SectionId>, config: ScrollSpyConfig) -> Self {
        let mut listeners = Vec::new();
        let mut settle_timer = None;

        if !sections.is_empty() {
            listeners.push(surface.listen(ListenerKind::Scroll));
            listeners.push(surface.listen(ListenerKind::Resize));
            settle_timer = Some(surface.set_timer(config.settle_delay));
        }

        Self {
            surface,
            config,
            sections,
            active: Selection::All,
            manual_override: false,
            pending_frame: None,
            settle_timer,
            cooldown_timer: None,
            listeners,
        }
    }

    pub fn active(&self) -> Selection {
        self.active
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// True while a manual selection holds off automatic tracking.
    pub fn is_auto_tracking_suppressed(&self) -> bool {
        self.manual_override
    }

    /// Feed a host callback. Returns the new selection if it changed.
    pub fn handle(&mut self, event: SurfaceEvent) -> Option<Selection> {
        match event {
            SurfaceEvent::Scroll | SurfaceEvent::Resize => {
                self.schedule();
                None
            }
            SurfaceEvent::Frame(frame) => {
                if self.pending_frame != Some(frame) {
                    return None;
                }
                self.pending_frame = None;
                if self.manual_override {
                    return None;
                }
                self.evaluate()
            }
            SurfaceEvent::Timer(timer) => {
                if self.settle_timer == Some(timer) {
                    self.settle_timer = None;
                    self.schedule();
                } else if self.cooldown_timer == Some(timer) {
                    self.cooldown_timer = None;
                    self.manual_override = false;
                    // The smooth scroll has landed somewhere; catch up.
                    self.schedule();
                }
                None
            }
        }
    }

    /// Explicit user selection (chip click).
    ///
    /// Takes effect immediately, suppresses automatic tracking for the
    /// configured cooldown and scrolls the page to the chosen section, or to
    /// the top for [`Selection::All`]. Returns the new selection if it
    /// changed.
    pub fn select(&mut self, selection: Selection) -> Option<Selection> {
        let changed = self.active != selection;
        self.active = selection;
        self.suppress_auto_tracking_for(self.config.override_cooldown);

        match selection {
            Selection::All => self.surface.scroll_to(0.0),
            Selection::Section(section) => {
                if let Some(rect) = self.surface.element_rect(&section.anchor()) {
                    let target = rect.top + self.surface.scroll_offset() - self.header_height();
                    self.surface.scroll_to(target.max(0.0));
                }
            }
        }

        changed.then_some(selection)
    }

    /// Hold off automatic tracking for `duration`, restarting any running
    /// cooldown.
    pub fn suppress_auto_tracking_for(&mut self, duration: Duration) {
        self.manual_override = true;
        self.cancel_pending_frame();
        if let Some(timer) = self.cooldown_timer.take() {
            self.surface.clear_timer(timer);
        }
        self.cooldown_timer = Some(self.surface.set_timer(duration));
    }

    /// Combined rendered height of the sticky stack.
    pub fn header_height(&self) -> f64 {
        let heights: Vec<f64> = self
            .config
            .sticky_anchors
            .iter()
            .filter_map(|anchor| self.surface.element_rect(anchor))
            .map(|rect| rect.height)
            .collect();

        if heights.is_empty() {
            self.config.fallback_header_height
        } else {
            heights.iter().sum()
        }
    }

    fn schedule(&mut self) {
        if self.sections.is_empty() || self.manual_override || self.pending_frame.is_some() {
            return;
        }
        self.pending_frame = Some(self.surface.request_frame());
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(frame) = self.pending_frame.take() {
            self.surface.cancel_frame(frame);
        }
    }

    fn evaluate(&mut self) -> Option<Selection> {
        let next = self.locate()?;
        if next == self.active {
            return None;
        }
        self.active = next;
        Some(next)
    }

    /// Where the current scroll position puts the selector, if anywhere.
    fn locate(&self) -> Option<Selection> {
        let offset = self.surface.scroll_offset();

        let mut tops: Vec<(SectionId, f64)> = self
            .sections
            .iter()
            .filter_map(|section| {
                self.surface
                    .element_rect(&section.anchor())
                    .map(|rect| (*section, rect.top + offset))
            })
            .collect();
        tops.sort_by(|a, b| a.1.total_cmp(&b.1));

        let menu_top = self
            .surface
            .element_rect(&self.config.container_anchor)
            .map(|rect| rect.top + offset)
            .or_else(|| tops.first().map(|(_, top)| *top))?;
        if offset < menu_top - self.config.top_threshold {
            return Some(Selection::All);
        }

        let checkpoint = offset + self.header_height() + self.config.lookahead;
        tops.iter()
            .rev()
            .find(|(_, top)| *top <= checkpoint)
            .or_else(|| tops.first())
            .map(|(section, _)| Selection::Section(*section))
    }
}

impl<S: LayoutSurface> Drop for ScrollSpy<S> {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            self.surface.unlisten(listener);
        }
        self.cancel_pending_frame();
        if let Some(timer) = self.settle_timer.take() {
            self.surface.clear_timer(timer);
        }
        if let Some(timer) = self.cooldown_timer.take() {
            self.surface.clear_timer(timer);
        }
    }
}
