use crate::{Phase, StepAction, Tag};

/// Runtime-facing holder for one running action.
///
/// The owning scene graph drives this once per frame and reads or
/// subscribes to the [`Phase`] mirror; editor and debug overlays observe
/// the channel without borrowing the action. One `Track` holds exactly one
/// action; scheduling stays with the owner.
pub struct Track<S> {
    action: Box<dyn StepAction<S>>,
    phase: tokio::sync::watch::Sender<Phase>,
}

impl<S> Track<S> {
    pub fn new(action: Box<dyn StepAction<S>>) -> Self {
        let (phase, _) = tokio::sync::watch::channel(Phase::Idle);
        Self { action, phase }
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    #[tracing::instrument(level = "trace", name = "Track::start", skip_all)]
    pub fn start(&mut self, target: &mut S) {
        self.action.start(target);
        self.phase.send_replace(Phase::Running);
    }

    /// Advances the action by `dt` seconds.
    ///
    /// A track that was never started, or was already stopped, ignores the
    /// call and stays `Idle`. Completion does not gate further steps;
    /// retaining or releasing a finished action is the caller's policy.
    #[tracing::instrument(level = "trace", name = "Track::step", skip(self, target), ret)]
    pub fn step(&mut self, dt: f64, target: &mut S) -> Phase {
        if *self.phase.borrow() == Phase::Idle {
            return Phase::Idle;
        }

        self.action.step(dt, target);
        let phase = if self.action.is_done() {
            Phase::Done
        } else {
            Phase::Running
        };
        self.phase.send_replace(phase);
        phase
    }

    #[tracing::instrument(level = "trace", name = "Track::stop", skip_all)]
    pub fn stop(&mut self, target: &mut S) {
        self.action.stop(target);
        self.phase.send_replace(Phase::Idle);
    }

    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    pub fn is_done(&self) -> bool {
        self.action.is_done()
    }

    pub fn tag(&self) -> Tag {
        self.action.tag()
    }
}
