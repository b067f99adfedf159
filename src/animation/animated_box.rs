// src/animation/animated_box.rs
//
// The on-screen box: four springs chasing the last committed BoxProps.
// A new commit while settling simply redirects the springs.

use crate::store::{BoxProps, SpringProps};

use super::Spring;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Settling,
    AtRest,
}

impl AnimationPhase {
    pub fn label(&self) -> &'static str {
        match self {
            AnimationPhase::Settling => "settling",
            AnimationPhase::AtRest => "at rest",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimatedBox {
    x: Spring,
    y: Spring,
    w: Spring,
    h: Spring,
    target: BoxProps,
    config: SpringProps,
    size_changes: u32,
}

impl AnimatedBox {
    pub fn new(target: BoxProps, config: SpringProps) -> Self {
        let mut animated = Self {
            x: Spring::new(target.x),
            y: Spring::new(target.y),
            w: Spring::new(target.w),
            h: Spring::new(target.h),
            target,
            config,
            size_changes: 0,
        };
        animated.size_changed();
        animated
    }

    /// Applies a committed snapshot. Returns false when nothing changed.
    pub fn retarget(&mut self, target: &BoxProps, config: &SpringProps) -> bool {
        if *target == self.target && *config == self.config {
            return false;
        }

        let size_changed = target.w != self.target.w || target.h != self.target.h;
        let config_changed = *config != self.config;

        self.config = *config;
        self.target = *target;
        let velocity = config.velocity;
        let targets = [target.x, target.y, target.w, target.h];
        for (spring, value) in self.springs_mut().into_iter().zip(targets) {
            spring.set_target(value, velocity);
            // new physics restart the motion even when the target stays put
            if config_changed {
                spring.restart(velocity);
            }
        }

        if size_changed {
            self.size_changed();
        }
        true
    }

    fn springs_mut(&mut self) -> [&mut Spring; 4] {
        [&mut self.x, &mut self.y, &mut self.w, &mut self.h]
    }

    fn size_changed(&mut self) {
        self.size_changes += 1;
        tracing::info!("Width {}px, height {}px", self.target.w, self.target.h);
    }

    /// How many times the target size was logged, counting the initial one.
    pub fn size_changes(&self) -> u32 {
        self.size_changes
    }

    /// Advances every spring by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let config = self.config;
        for spring in self.springs_mut() {
            spring.update(dt, &config);
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        let springs = [&self.x, &self.y, &self.w, &self.h];
        if springs.iter().all(|s| s.is_at_rest()) {
            AnimationPhase::AtRest
        } else {
            AnimationPhase::Settling
        }
    }

    /// Interpolated values for the current frame.
    pub fn current(&self) -> BoxProps {
        BoxProps {
            x: self.x.position,
            y: self.y.position,
            w: self.w.position,
            h: self.h.position,
        }
    }

    pub fn target(&self) -> &BoxProps {
        &self.target
    }

    pub fn config(&self) -> &SpringProps {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn props(x: f32, y: f32, w: f32, h: f32) -> BoxProps {
        BoxProps { x, y, w, h }
    }

    fn settle(animated: &mut AnimatedBox) {
        for _ in 0..1200 {
            if animated.phase() == AnimationPhase::AtRest {
                return;
            }
            animated.update(FRAME);
        }
    }

    #[test]
    fn test_starts_at_rest_on_target() {
        let start = props(0.0, 0.0, 300.0, 50.0);
        let animated = AnimatedBox::new(start, SpringProps::default());
        assert_eq!(animated.phase(), AnimationPhase::AtRest);
        assert_eq!(animated.current(), start);
    }

    #[test]
    fn test_retarget_settles_on_new_snapshot() {
        let mut animated = AnimatedBox::new(props(0.0, 0.0, 300.0, 50.0), SpringProps::default());
        let next = props(40.0, 80.0, 450.0, 120.0);

        assert!(animated.retarget(&next, &SpringProps::default()));
        assert_eq!(animated.phase(), AnimationPhase::Settling);

        animated.update(FRAME);
        let mid = animated.current();
        assert!(mid.w > 300.0 && mid.w < 450.0);

        settle(&mut animated);
        assert_eq!(animated.phase(), AnimationPhase::AtRest);
        assert_eq!(animated.current(), next);
    }

    #[test]
    fn test_same_snapshot_is_not_a_change() {
        let start = props(1.0, 2.0, 3.0, 4.0);
        let mut animated = AnimatedBox::new(start, SpringProps::default());
        assert!(!animated.retarget(&start, &SpringProps::default()));
        assert_eq!(animated.phase(), AnimationPhase::AtRest);
    }

    #[test]
    fn test_new_spring_config_restarts_settling() {
        let start = props(1.0, 2.0, 3.0, 4.0);
        let mut animated = AnimatedBox::new(start, SpringProps::default());
        let stiffer = SpringProps {
            tension: 400.0,
            velocity: 5.0,
            ..SpringProps::default()
        };
        assert!(animated.retarget(&start, &stiffer));
        assert_eq!(animated.config(), &stiffer);
        assert_eq!(animated.phase(), AnimationPhase::Settling);

        settle(&mut animated);
        assert_eq!(animated.phase(), AnimationPhase::AtRest);
        assert_eq!(animated.current(), start);
    }

    #[test]
    fn test_new_spring_config_without_velocity_settles_in_one_step() {
        let start = props(1.0, 2.0, 3.0, 4.0);
        let mut animated = AnimatedBox::new(start, SpringProps::default());
        let looser = SpringProps {
            friction: 5.0,
            ..SpringProps::default()
        };
        animated.retarget(&start, &looser);
        assert_eq!(animated.phase(), AnimationPhase::Settling);
        animated.update(FRAME);
        assert_eq!(animated.phase(), AnimationPhase::AtRest);
        assert_eq!(animated.current(), start);
    }

    #[test]
    fn test_size_logged_once_at_mount() {
        let animated = AnimatedBox::new(props(0.0, 0.0, 300.0, 50.0), SpringProps::default());
        assert_eq!(animated.size_changes(), 1);
    }

    #[test]
    fn test_size_logged_on_width_change() {
        let mut animated = AnimatedBox::new(props(0.0, 0.0, 300.0, 50.0), SpringProps::default());
        animated.retarget(&props(0.0, 0.0, 450.0, 50.0), &SpringProps::default());
        assert_eq!(animated.size_changes(), 2);
        animated.retarget(&props(0.0, 0.0, 450.0, 80.0), &SpringProps::default());
        assert_eq!(animated.size_changes(), 3);
    }

    #[test]
    fn test_offset_change_is_not_a_size_change() {
        let mut animated = AnimatedBox::new(props(0.0, 0.0, 300.0, 50.0), SpringProps::default());
        assert!(animated.retarget(&props(120.0, 0.0, 300.0, 50.0), &SpringProps::default()));
        assert!(animated.retarget(&props(120.0, 60.0, 300.0, 50.0), &SpringProps::default()));
        assert_eq!(animated.size_changes(), 1);
    }

    #[test]
    fn test_last_commit_wins() {
        let mut animated = AnimatedBox::new(props(0.0, 0.0, 100.0, 100.0), SpringProps::default());
        animated.retarget(&props(200.0, 0.0, 100.0, 100.0), &SpringProps::default());
        for _ in 0..5 {
            animated.update(FRAME);
        }
        let last = props(-30.0, 10.0, 60.0, 70.0);
        animated.retarget(&last, &SpringProps::default());
        assert_eq!(animated.target(), &last);

        settle(&mut animated);
        assert_eq!(animated.current(), last);
    }
}
