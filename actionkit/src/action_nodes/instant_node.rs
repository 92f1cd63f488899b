use crate::{Action, Reversible, StepAction, Tag};

/// Wraps any action so it behaves as a one-shot, durationless action.
///
/// `step` ignores `dt` and drives the inner action straight to its
/// fully-applied state. Reports done even before the first `step`; the
/// runtime still steps it once before releasing it.
pub struct InstantState<A> {
    inner: A,
    tag: Tag,
}

impl<A> InstantState<A> {
    pub fn new(inner: A) -> Self {
        Self { inner, tag: 0 }
    }
}

impl<A, S> Action<S> for InstantState<A>
where
    A: Action<S>,
{
    fn start(&mut self, target: &mut S) {
        self.inner.start(target);
    }

    fn stop(&mut self, target: &mut S) {
        self.inner.stop(target);
    }

    fn update(&mut self, target: &mut S, progress: f32) {
        self.inner.update(target, progress);
    }
}

impl<A, S> StepAction<S> for InstantState<A>
where
    A: Action<S>,
{
    fn step(&mut self, _dt: f64, target: &mut S) {
        // One inner update per step; idempotence is the inner action's
        // concern
        self.inner.update(target, 1.0);
    }

    fn is_done(&self) -> bool {
        true
    }

    fn tag(&self) -> Tag {
        self.tag
    }

    fn set_tag(&mut self, tag: Tag) {
        self.tag = tag;
    }
}

impl<A> Reversible for InstantState<A>
where
    A: Reversible,
{
    fn reversed(&self) -> Self {
        Self {
            inner: self.inner.reversed(),
            tag: self.tag,
        }
    }
}
