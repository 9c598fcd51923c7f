use pathviz_paths::AnimationFrame;

/// Receiver of dispatched frames.
pub trait FrameSink {
    /// Called once per delivered frame, in sequence order.
    fn on_frame(&mut self, frame: AnimationFrame);

    /// Called when playback has delivered the whole sequence.
    fn on_complete(&mut self) {}
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn on_frame(&mut self, frame: AnimationFrame) {
        (**self).on_frame(frame);
    }

    fn on_complete(&mut self) {
        (**self).on_complete();
    }
}

/// A [`FrameSink`] made of two closures. See [`callbacks`].
pub struct Callbacks<F, C> {
    on_frame: F,
    on_complete: C,
}

/// Build a sink from an `on_frame` and an `on_complete` closure.
///
/// ```
/// use pathviz_anim::{FrameSink, callbacks};
/// use pathviz_core::Point;
/// use pathviz_paths::AnimationFrame;
///
/// let mut seen = Vec::new();
/// let mut done = false;
/// let mut sink = callbacks(|f| seen.push(f), || done = true);
/// sink.on_frame(AnimationFrame::visit(Point::new(1, 1)));
/// sink.on_complete();
/// drop(sink);
/// assert_eq!(seen.len(), 1);
/// assert!(done);
/// ```
pub fn callbacks<F, C>(on_frame: F, on_complete: C) -> Callbacks<F, C>
where
    F: FnMut(AnimationFrame),
    C: FnMut(),
{
    Callbacks {
        on_frame,
        on_complete,
    }
}

impl<F, C> FrameSink for Callbacks<F, C>
where
    F: FnMut(AnimationFrame),
    C: FnMut(),
{
    fn on_frame(&mut self, frame: AnimationFrame) {
        (self.on_frame)(frame);
    }

    fn on_complete(&mut self) {
        (self.on_complete)();
    }
}
