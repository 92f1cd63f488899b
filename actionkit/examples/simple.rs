use actionkit::{
    Action, FiniteTime, InstantState, RepeatForeverState, StepAction, Tag, Timer, Track,
};

#[derive(Debug, Default)]
struct Sprite {
    opacity: f32,
}

/// Fades the sprite in over one cycle.
struct FadeCycle {
    timer: Timer,
    tag: Tag,
}

impl FadeCycle {
    fn new(duration: f64) -> Self {
        Self {
            timer: Timer::new(duration),
            tag: 0,
        }
    }
}

impl Action<Sprite> for FadeCycle {
    fn start(&mut self, _target: &mut Sprite) {
        self.timer.reset();
    }

    fn update(&mut self, target: &mut Sprite, progress: f32) {
        target.opacity = progress;
    }
}

impl StepAction<Sprite> for FadeCycle {
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

impl FiniteTime for FadeCycle {
    fn duration(&self) -> f64 {
        self.timer.duration()
    }

    fn elapsed(&self) -> f64 {
        self.timer.elapsed()
    }
}

/// Snaps the sprite to fully visible.
struct Show;

impl Action<Sprite> for Show {
    fn update(&mut self, target: &mut Sprite, _progress: f32) {
        target.opacity = 1.0;
    }
}

fn main() {
    let mut sprite = Sprite::default();

    let mut show: Track<Sprite> = Track::new(Box::new(InstantState::new(Show)));
    show.start(&mut sprite);
    show.step(0.0, &mut sprite);
    show.stop(&mut sprite);
    println!("After show: {:?}", sprite);

    let mut fade: Track<Sprite> = Track::new(Box::new(RepeatForeverState::new(FadeCycle::new(1.0))));
    fade.start(&mut sprite);
    for frame in 0..10 {
        let phase = fade.step(0.25, &mut sprite);
        println!("Frame {}: {:?} {:?}", frame, phase, sprite);
    }
    fade.stop(&mut sprite);
}
