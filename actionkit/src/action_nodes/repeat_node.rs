use crate::{Action, FiniteAction, FiniteTime, Reversible, StepAction, Tag};

/// Restarts a finite inner action every time it completes, forever.
///
/// Elapsed time overshooting the inner action's duration at a cycle
/// boundary is replayed into the fresh cycle, so no time is dropped or
/// double-counted across restarts. Never reports done; the owning runtime
/// stops it externally, which also means it cannot sit inside a bounded
/// composition.
pub struct RepeatForeverState<A> {
    inner: A,
    tag: Tag,
}

impl<A> RepeatForeverState<A>
where
    A: FiniteTime,
{
    pub fn new(inner: A) -> Self {
        assert!(inner.duration() > 0.0);
        Self { inner, tag: 0 }
    }
}

impl<A, S> Action<S> for RepeatForeverState<A>
where
    A: Action<S>,
{
    fn start(&mut self, target: &mut S) {
        self.inner.start(target);
    }

    fn stop(&mut self, target: &mut S) {
        self.inner.stop(target);
    }
}

impl<A, S> StepAction<S> for RepeatForeverState<A>
where
    A: FiniteAction<S>,
{
    #[tracing::instrument(level = "trace", name = "RepeatForever", skip_all)]
    fn step(&mut self, dt: f64, target: &mut S) {
        self.inner.step(dt, target);
        if self.inner.is_done() {
            let diff = self.inner.elapsed() - self.inner.duration();
            // Rebind first so start-of-cycle captures see the target as the
            // finished cycle left it, then replay the leftover time into
            // the fresh cycle
            self.inner.start(target);
            self.inner.step(0.0, target);
            self.inner.step(diff, target);
        }
    }

    fn is_done(&self) -> bool {
        false
    }

    fn tag(&self) -> Tag {
        self.tag
    }

    fn set_tag(&mut self, tag: Tag) {
        self.tag = tag;
    }
}

impl<A> Reversible for RepeatForeverState<A>
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_action_interface::{MoveByState, Recorder, Sprite, TimedProbe};

    #[test]
    fn test_overshoot_is_carried_into_next_cycle() {
        let mut recorder = Recorder::default();
        let mut repeat = RepeatForeverState::new(TimedProbe::new(2.0));

        repeat.start(&mut recorder);
        assert_eq!(recorder.starts, 1);

        // D + x with x = 0.5: one restart, x left on the new cycle
        repeat.step(2.5, &mut recorder);
        assert_eq!(recorder.starts, 2);
        assert_eq!(repeat.inner.elapsed(), 0.5);
    }

    #[test]
    fn test_step_of_exactly_one_duration() {
        let mut recorder = Recorder::default();
        let mut repeat = RepeatForeverState::new(TimedProbe::new(2.0));

        repeat.start(&mut recorder);
        repeat.step(2.0, &mut recorder);

        assert_eq!(recorder.starts, 2);
        assert_eq!(repeat.inner.elapsed(), 0.0);
    }

    #[test]
    fn test_no_drift_across_cycle_boundaries() {
        let mut recorder = Recorder::default();
        let mut repeat = RepeatForeverState::new(TimedProbe::new(2.0));

        repeat.start(&mut recorder);
        for _ in 0..8 {
            repeat.step(1.0, &mut recorder);
        }

        // 8 seconds over 2-second cycles: 4 restarts, nothing left over
        assert_eq!(recorder.starts, 5);
        assert_eq!(repeat.inner.elapsed(), 0.0);
    }

    #[test]
    fn test_update_sequence_across_restart() {
        let mut recorder = Recorder::default();
        let mut repeat = RepeatForeverState::new(TimedProbe::new(2.0));

        repeat.start(&mut recorder);
        repeat.step(1.0, &mut recorder);
        repeat.step(1.5, &mut recorder);

        // Second step completes the cycle (1.0), the forced zero-step
        // reapplies at the cycle origin (0.0), the diff-step replays the
        // 0.5 overshoot (0.25)
        assert_eq!(recorder.updates, vec![0.5, 1.0, 0.0, 0.25]);
        assert_eq!(recorder.starts, 2);
        assert_eq!(repeat.inner.elapsed(), 0.5);
    }

    #[test]
    fn test_never_done() {
        let repeat = RepeatForeverState::new(TimedProbe::new(2.0));
        let repeat_ref: &dyn StepAction<Recorder> = &repeat;
        assert!(!repeat_ref.is_done());
    }

    #[test]
    fn test_relative_action_has_no_seam_at_restart() {
        let mut sprite = Sprite::default();
        let mut repeat = RepeatForeverState::new(MoveByState::new(2.0, 10.0));

        repeat.start(&mut sprite);
        repeat.step(1.0, &mut sprite);
        assert_eq!(sprite.x, 5.0);

        // Crossing the boundary recaptures the origin at x = 10 before the
        // overshoot is replayed; the position is continuous
        repeat.step(1.5, &mut sprite);
        assert_eq!(sprite.x, 12.5);

        repeat.stop(&mut sprite);
    }

    #[test]
    fn test_reversed_runs_the_inverted_inner_action() {
        let mut sprite = Sprite::default();
        let repeat = RepeatForeverState::new(MoveByState::new(2.0, 10.0));
        let mut reversed = repeat.reversed();

        reversed.start(&mut sprite);
        reversed.step(1.0, &mut sprite);
        assert_eq!(sprite.x, -5.0);
    }

    #[test]
    #[should_panic]
    fn test_zero_duration_inner_is_rejected() {
        let _repeat = RepeatForeverState::new(TimedProbe::new(0.0));
    }
}
