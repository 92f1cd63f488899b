/// Caller-assigned identity for a running action.
///
/// Not required to be unique; the owning runtime uses it for lookup and
/// cancellation only.
pub type Tag = i32;

/// Base capability every action variant satisfies.
///
/// `S` is the target the action mutates. The target is owned by the scene
/// graph and handed in on every call; actions never store it.
///
/// All hooks default to no-ops so concrete actions only override what they
/// need.
pub trait Action<S> {
    /// Invoked once when the action is bound to its target.
    ///
    /// Relative actions capture initial target state here. Finite actions
    /// reset their elapsed time to zero.
    fn start(&mut self, target: &mut S) {
        let _ = target;
    }

    /// Invoked once when the runtime releases the action.
    ///
    /// Safe to call repeatedly.
    fn stop(&mut self, target: &mut S) {
        let _ = target;
    }

    /// Applies the action's effect for `progress` in `[0, 1]`.
    fn update(&mut self, target: &mut S, progress: f32) {
        let _ = (target, progress);
    }
}

/// A steppable, completable action.
///
/// The runtime drives this once per frame: `start` once, then `step(dt)`
/// with `dt` = seconds since the previous frame until `is_done` reads true,
/// then `stop` once. `dt` is not validated here; callers supply
/// non-negative values.
pub trait StepAction<S>: Action<S> {
    /// Advances internal timing by `dt` seconds and derives the normalized
    /// progress fed into `update`.
    fn step(&mut self, dt: f64, target: &mut S);

    /// Whether the action has run to completion. No side effects.
    fn is_done(&self) -> bool;

    fn tag(&self) -> Tag;

    fn set_tag(&mut self, tag: Tag);
}

/// Timing surface of a duration-aware action.
pub trait FiniteTime {
    /// Total running time in seconds, fixed at creation.
    fn duration(&self) -> f64;

    /// Time consumed so far. May exceed `duration` by the completion
    /// overshoot of the final step.
    fn elapsed(&self) -> f64;
}

/// A duration-aware steppable action. Blanket-implemented; this is the
/// inner-action bound of [`RepeatForeverState`](crate::RepeatForeverState).
pub trait FiniteAction<S>: StepAction<S> + FiniteTime {}

impl<S, T> FiniteAction<S> for T where T: StepAction<S> + FiniteTime {}

/// Optional capability: build the logically inverted action.
pub trait Reversible {
    fn reversed(&self) -> Self
    where
        Self: Sized;
}
