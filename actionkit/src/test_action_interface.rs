use crate::{Action, FiniteTime, Reversible, StepAction, Tag, Timer};

/// Target that records every lifecycle call made against it.
#[derive(Debug, Default)]
pub struct Recorder {
    pub starts: usize,
    pub stops: usize,
    pub updates: Vec<f32>,
}

/// Durationless probe; every hook writes into the target.
pub struct ProbeAction;

impl Action<Recorder> for ProbeAction {
    fn start(&mut self, target: &mut Recorder) {
        target.starts += 1;
    }

    fn stop(&mut self, target: &mut Recorder) {
        target.stops += 1;
    }

    fn update(&mut self, target: &mut Recorder, progress: f32) {
        target.updates.push(progress);
    }
}

/// Finite probe that records its update sequence.
pub struct TimedProbe {
    timer: Timer,
    tag: Tag,
}

impl TimedProbe {
    pub fn new(duration: f64) -> Self {
        Self {
            timer: Timer::new(duration),
            tag: 0,
        }
    }
}

impl Action<Recorder> for TimedProbe {
    fn start(&mut self, target: &mut Recorder) {
        self.timer.reset();
        target.starts += 1;
    }

    fn stop(&mut self, target: &mut Recorder) {
        target.stops += 1;
    }

    fn update(&mut self, target: &mut Recorder, progress: f32) {
        target.updates.push(progress);
    }
}

impl StepAction<Recorder> for TimedProbe {
    fn step(&mut self, dt: f64, target: &mut Recorder) {
        self.timer.advance(dt);
        let progress = self.timer.progress();
        self.update(target, progress);
    }

    fn is_done(&self) -> bool {
        self.timer.is_done()
    }

    fn tag(&self) -> Tag {
        self.tag
    }

    fn set_tag(&mut self, tag: Tag) {
        self.tag = tag;
    }
}

impl FiniteTime for TimedProbe {
    fn duration(&self) -> f64 {
        self.timer.duration()
    }

    fn elapsed(&self) -> f64 {
        self.timer.elapsed()
    }
}

#[derive(Debug, Default)]
pub struct Sprite {
    pub x: f32,
}

/// Relative move along one axis; captures the starting position on `start`.
pub struct MoveByState {
    timer: Timer,
    dx: f32,
    from: f32,
    tag: Tag,
}

impl MoveByState {
    pub fn new(duration: f64, dx: f32) -> Self {
        Self {
            timer: Timer::new(duration),
            dx,
            from: 0.0,
            tag: 0,
        }
    }
}

impl Action<Sprite> for MoveByState {
    fn start(&mut self, target: &mut Sprite) {
        self.timer.reset();
        self.from = target.x;
    }

    fn update(&mut self, target: &mut Sprite, progress: f32) {
        target.x = self.from + self.dx * progress;
    }
}

impl StepAction<Sprite> for MoveByState {
    fn step(&mut self, dt: f64, target: &mut Sprite) {
        self.timer.advance(dt);
        let progress = self.timer.progress();
        self.update(target, progress);
    }

    fn is_done(&self) -> bool {
        self.timer.is_done()
    }

    fn tag(&self) -> Tag {
        self.tag
    }

    fn set_tag(&mut self, tag: Tag) {
        self.tag = tag;
    }
}

impl FiniteTime for MoveByState {
    fn duration(&self) -> f64 {
        self.timer.duration()
    }

    fn elapsed(&self) -> f64 {
        self.timer.elapsed()
    }
}

impl Reversible for MoveByState {
    fn reversed(&self) -> Self {
        Self::new(self.timer.duration(), -self.dx)
    }
}
