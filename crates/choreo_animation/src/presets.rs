//! Named animation presets
//!
//! Each preset expands synchronously and deterministically into plain
//! property tracks with fixed literal keyframe tables. Presets that depend
//! on a target's geometry (roll, wobble, stand-up, wave) read it from the
//! stage at invocation time and emit per-target tracks, so later resizes do
//! not change an already-built batch. A target measured at zero size simply
//! yields zero-magnitude keyframes.

use crate::builder::BatchBuilder;
use crate::easing::Easing;
use crate::group::properties;

impl BatchBuilder {
    /// Vertical bounce in place
    pub fn bounce(self) -> Self {
        self.translation_y(&[0.0, 0.0, -30.0, 0.0, -15.0, 0.0, 0.0])
    }

    /// Scale up from small with an overshoot settle
    pub fn bounce_in(self) -> Self {
        self.alpha(&[0.0, 1.0, 1.0, 1.0])
            .scale_x(&[0.3, 1.05, 0.9, 1.0])
            .scale_y(&[0.3, 1.05, 0.9, 1.0])
    }

    /// Shrink away with a small wind-up
    pub fn bounce_out(self) -> Self {
        self.scale_y(&[1.0, 0.9, 1.05, 0.3])
            .scale_x(&[1.0, 0.9, 1.05, 0.3])
            .alpha(&[1.0, 1.0, 1.0, 0.0])
    }

    pub fn fade_in(self) -> Self {
        self.alpha(&[0.0, 0.25, 0.5, 0.75, 1.0])
    }

    pub fn fade_out(self) -> Self {
        self.alpha(&[1.0, 0.75, 0.5, 0.25, 0.0])
    }

    /// Blink fully off and on twice
    pub fn flash(self) -> Self {
        self.alpha(&[1.0, 0.0, 1.0, 0.0, 1.0])
    }

    /// Flip around the horizontal axis with a settle
    pub fn flip_horizontal(self) -> Self {
        self.rotation_x(&[90.0, -15.0, 15.0, 0.0])
    }

    /// Flip around the vertical axis with a settle
    pub fn flip_vertical(self) -> Self {
        self.rotation_y(&[90.0, -15.0, 15.0, 0.0])
    }

    /// Gentle heartbeat scale
    pub fn pulse(self) -> Self {
        self.scale_y(&[1.0, 1.1, 1.0]).scale_x(&[1.0, 1.1, 1.0])
    }

    /// Roll in from the left while fading up. Entry offset is each target's
    /// content width, read at invocation time.
    pub fn roll_in(mut self) -> Self {
        for target in self.targets() {
            let geom = self.stage().geometry(target).unwrap_or_default();
            self.push_scalar_for(target, properties::ALPHA, vec![0.0, 1.0]);
            self.push_scalar_for(
                target,
                properties::TRANSLATION_X,
                vec![-geom.content_width(), 0.0],
            );
            self.push_scalar_for(target, properties::ROTATION, vec![-120.0, 0.0]);
        }
        self
    }

    /// Roll out to the right while fading away
    pub fn roll_out(mut self) -> Self {
        for target in self.targets() {
            let geom = self.stage().geometry(target).unwrap_or_default();
            self.push_scalar_for(target, properties::ALPHA, vec![1.0, 0.0]);
            self.push_scalar_for(target, properties::TRANSLATION_X, vec![0.0, geom.width]);
            self.push_scalar_for(target, properties::ROTATION, vec![0.0, 120.0]);
        }
        self
    }

    /// Rubber-band stretch and squash
    pub fn rubber(self) -> Self {
        self.scale_x(&[1.0, 1.25, 0.75, 1.15, 1.0])
            .scale_y(&[1.0, 0.75, 1.25, 0.85, 1.0])
    }

    /// Horizontal shake with a decaying amplitude, cycled five times
    pub fn shake(self) -> Self {
        self.translation_x(&[
            0.0, 25.0, -25.0, 25.0, -25.0, 15.0, -15.0, 6.0, -6.0, 0.0,
        ])
        .easing(Easing::Cycle(5.0))
    }

    /// Tip up from the bottom edge, pivoting at the content's bottom center
    pub fn stand_up(mut self) -> Self {
        for target in self.targets() {
            let geom = self.stage().geometry(target).unwrap_or_default();
            let x = geom.content_center_x();
            let y = geom.content_bottom();
            self.push_scalar_for(target, properties::PIVOT_X, vec![x, x, x, x, x]);
            self.push_scalar_for(target, properties::PIVOT_Y, vec![y, y, y, y, y]);
            self.push_scalar_for(
                target,
                properties::ROTATION_X,
                vec![55.0, -30.0, 15.0, -15.0, 0.0],
            );
        }
        self
    }

    /// Pendulum swing that settles back to rest
    pub fn swing(self) -> Self {
        self.rotation(&[0.0, 10.0, -10.0, 6.0, -6.0, 3.0, -3.0, 0.0])
    }

    /// Celebratory wiggle: squash, stretch, and rock
    pub fn tada(self) -> Self {
        self.scale_x(&[1.0, 0.9, 0.9, 1.1, 1.1, 1.1, 1.1, 1.1, 1.1, 1.0])
            .scale_y(&[1.0, 0.9, 0.9, 1.1, 1.1, 1.1, 1.1, 1.1, 1.1, 1.0])
            .rotation(&[0.0, -3.0, -3.0, 3.0, -3.0, 3.0, -3.0, 3.0, -3.0, 0.0])
    }

    /// Wave around the content's bottom center
    pub fn wave(mut self) -> Self {
        for target in self.targets() {
            let geom = self.stage().geometry(target).unwrap_or_default();
            let x = geom.content_center_x();
            let y = geom.content_bottom();
            self.push_scalar_for(
                target,
                properties::ROTATION,
                vec![12.0, -12.0, 3.0, -3.0, 0.0],
            );
            self.push_scalar_for(target, properties::PIVOT_X, vec![x, x, x, x, x]);
            self.push_scalar_for(target, properties::PIVOT_Y, vec![y, y, y, y, y]);
        }
        self
    }

    /// Drunken wobble; horizontal travel is a percentage of each target's
    /// width, read at invocation time
    pub fn wobble(mut self) -> Self {
        for target in self.targets() {
            let geom = self.stage().geometry(target).unwrap_or_default();
            let one = geom.width / 100.0;
            self.push_scalar_for(
                target,
                properties::TRANSLATION_X,
                vec![
                    0.0,
                    -25.0 * one,
                    20.0 * one,
                    -15.0 * one,
                    10.0 * one,
                    -5.0 * one,
                    0.0,
                    0.0,
                ],
            );
            self.push_scalar_for(
                target,
                properties::ROTATION,
                vec![0.0, -5.0, 3.0, -3.0, 2.0, -1.0, 0.0],
            );
        }
        self
    }

    pub fn zoom_in(self) -> Self {
        self.scale_x(&[0.45, 1.0])
            .scale_y(&[0.45, 1.0])
            .alpha(&[0.0, 1.0])
    }

    pub fn zoom_out(self) -> Self {
        self.scale_x(&[1.0, 0.3, 0.0])
            .scale_y(&[1.0, 0.3, 0.0])
            .alpha(&[1.0, 0.0, 0.0])
    }

    /// Spinning drop, three full turns winding down
    pub fn fall(self) -> Self {
        self.rotation(&[1080.0, 720.0, 360.0, 0.0])
    }

    /// Newspaper-style zoom from tiny
    pub fn news_paper(self) -> Self {
        self.alpha(&[0.0, 1.0])
            .scale_x(&[0.1, 0.5, 1.0])
            .scale_y(&[0.1, 0.5, 1.0])
    }

    /// Open through a narrow vertical slit
    pub fn slit(self) -> Self {
        self.rotation_y(&[90.0, 88.0, 88.0, 45.0, 0.0])
            .alpha(&[0.0, 0.4, 0.8, 1.0])
            .scale_x(&[0.0, 0.5, 0.9, 0.9, 1.0])
            .scale_y(&[0.0, 0.5, 0.9, 0.9, 1.0])
    }

    pub fn slide_left(self) -> Self {
        self.translation_x(&[-300.0, 0.0]).alpha(&[0.0, 1.0])
    }

    pub fn slide_right(self) -> Self {
        self.translation_x(&[300.0, 0.0]).alpha(&[0.0, 1.0])
    }

    pub fn slide_top(self) -> Self {
        self.translation_y(&[-300.0, 0.0]).alpha(&[0.0, 1.0])
    }

    pub fn slide_bottom(self) -> Self {
        self.translation_y(&[300.0, 0.0]).alpha(&[0.0, 1.0])
    }
}
