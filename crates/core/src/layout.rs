//! Layout capability interface.
//!
//! The scroll-synchronized selector and the chip strip never touch a UI
//! toolkit directly. A host (browser glue, a native shell, a test double)
//! implements [`LayoutSurface`] and forwards its scroll, resize, frame and
//! timer callbacks as [`SurfaceEvent`]s.

use std::time::Duration;

/// An axis-aligned box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Handle of a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Handle of a one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Handle of a registered event listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Window-level events a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    Resize,
}

/// Callbacks the host forwards to whoever registered for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Scroll,
    Resize,
    Frame(FrameId),
    Timer(TimerId),
}

/// What the scroll selector needs from the page layout.
///
/// All queries are best-effort: a missing element is `None`, never an error.
pub trait LayoutSurface {
    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;

    /// Bounding box of the element with `anchor` as id, relative to the
    /// viewport.
    fn element_rect(&self, anchor: &str) -> Option<Rect>;

    /// Smoothly scroll the page to an absolute vertical offset.
    fn scroll_to(&mut self, offset: f64);

    fn request_frame(&mut self) -> FrameId;

    fn cancel_frame(&mut self, frame: FrameId);

    fn set_timer(&mut self, delay: Duration) -> TimerId;

    fn clear_timer(&mut self, timer: TimerId);

    fn listen(&mut self, kind: ListenerKind) -> ListenerId;

    fn unlisten(&mut self, listener: ListenerId);
}

impl<S: LayoutSurface + ?Sized> LayoutSurface for &mut S {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn element_rect(&self, anchor: &str) -> Option<Rect> {
        (**self).element_rect(anchor)
    }

    fn scroll_to(&mut self, offset: f64) {
        (**self).scroll_to(offset)
    }

    fn request_frame(&mut self) -> FrameId {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, frame: FrameId) {
        (**self).cancel_frame(frame)
    }

    fn set_timer(&mut self, delay: Duration) -> TimerId {
        (**self).set_timer(delay)
    }

    fn clear_timer(&mut self, timer: TimerId) {
        (**self).clear_timer(timer)
    }

    fn listen(&mut self, kind: ListenerKind) -> ListenerId {
        (**self).listen(kind)
    }

    fn unlisten(&mut self, listener: ListenerId) {
        (**self).unlisten(listener)
    }
}
