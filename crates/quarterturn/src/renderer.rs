use quarterturn_core::{AnimationDescriptor, AnimationRing, Cube, Direction, Renderer, Tick};

/// Renderer that logs what a graphical front end would draw.
#[derive(Debug)]
pub(crate) struct HeadlessRenderer {
    animations: AnimationRing,
    turn_time: u32,
    cube_updates: usize,
}
impl HeadlessRenderer {
    pub(crate) fn new(max_animations: usize, turn_time: u32) -> Self {
        Self {
            animations: AnimationRing::new(max_animations),
            turn_time,
            cube_updates: 0,
        }
    }

    pub(crate) fn animations(&self) -> &AnimationRing {
        &self.animations
    }
    pub(crate) fn turn_time(&self) -> u32 {
        self.turn_time
    }
    /// Returns how many times the displayed cube has been updated.
    pub(crate) fn cube_updates(&self) -> usize {
        self.cube_updates
    }

    /// Logs the animations that are playing at `now`.
    pub(crate) fn draw(&self, now: Tick) {
        for (anim, t) in self.animations.active(now, self.turn_time) {
            let total = match anim.direction {
                Direction::Cw => 90.0,
                Direction::Ccw => -90.0,
                Direction::Double => 180.0,
            };
            let degrees = t * total;
            log::trace!(
                "t={now}: {} stickers at {degrees:.0}° around {}",
                anim.sticker_count(),
                anim.axis,
            );
        }
    }
}
impl Renderer for HeadlessRenderer {
    fn update_cube(&mut self, cube: &Cube) -> eyre::Result<()> {
        self.cube_updates += 1;
        log::trace!("cube state:\n{cube}");
        Ok(())
    }

    fn send_animation(&mut self, animation: AnimationDescriptor) -> eyre::Result<()> {
        log::info!(
            "t={}: animating {} stickers around {}{}",
            animation.start_time,
            animation.sticker_count(),
            animation.axis,
            animation.direction,
        );
        self.animations.push(animation);
        Ok(())
    }

    fn update_turn_time(&mut self, turn_time: u32) {
        log::debug!("animations now take {turn_time} ms");
        self.turn_time = turn_time;
    }
}
