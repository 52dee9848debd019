#![forbid(unsafe_code)]

//! Animation pacing.
//!
//! Spots animate in whole pixels per frame rather than by elapsed time: the
//! frame clock of the host decides how often [`Velocity`]-sized steps are
//! taken. The named [`AnimationVelocity`] presets pick a target duration, and
//! [`Velocity::for_extent`] converts that duration into a per-frame step so
//! large and small spots finish in roughly the same wall-clock time.
//!
//! Opacity transitions (overlay attach/detach, content swaps) are time based
//! and use [`Fade`].

use std::time::Duration;

/// Empirical number of pixels per millisecond-of-budget used to pace spots.
///
/// A spot of extent `e` animated under a preset of `d` milliseconds moves
/// `ceil(e * FRAME_BUDGET / d)` pixels per frame.
pub const FRAME_BUDGET: u64 = 8;

/// Named animation speed presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnimationVelocity {
    /// 2000 ms.
    Turtle,
    /// 1500 ms.
    Slowest,
    /// 1000 ms.
    Slow,
    /// 500 ms.
    #[default]
    Normal,
    /// 300 ms.
    Fast,
    /// 150 ms.
    Fastest,
    /// 50 ms.
    LightSpeed,
}

impl AnimationVelocity {
    /// All presets, slowest first.
    pub const ALL: [Self; 7] = [
        Self::Turtle,
        Self::Slowest,
        Self::Slow,
        Self::Normal,
        Self::Fast,
        Self::Fastest,
        Self::LightSpeed,
    ];

    /// Target duration of a full expand or collapse, in milliseconds.
    #[inline]
    pub const fn millis(self) -> u64 {
        match self {
            Self::Turtle => 2000,
            Self::Slowest => 1500,
            Self::Slow => 1000,
            Self::Normal => 500,
            Self::Fast => 300,
            Self::Fastest => 150,
            Self::LightSpeed => 50,
        }
    }

    /// Target duration of a full expand or collapse.
    #[inline]
    pub const fn duration(self) -> Duration {
        Duration::from_millis(self.millis())
    }
}

/// Pixels moved per animation frame. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Velocity(u32);

impl Velocity {
    /// The slowest possible pace.
    pub const MIN: Self = Self(1);

    /// Create a velocity, clamping zero up to one pixel per frame.
    #[inline]
    pub const fn new(pixels_per_frame: u32) -> Self {
        if pixels_per_frame == 0 {
            Self::MIN
        } else {
            Self(pixels_per_frame)
        }
    }

    /// Velocity that traverses `extent` pixels in about `preset`'s duration.
    ///
    /// Negative extents are treated as zero.
    pub fn for_extent(extent: i32, preset: AnimationVelocity) -> Self {
        let extent = u64::try_from(extent).unwrap_or(0);
        let raw = (extent * FRAME_BUDGET).div_ceil(preset.millis());
        Self::new(u32::try_from(raw).unwrap_or(u32::MAX))
    }

    /// Pixels per frame.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Pixels per frame as a signed coordinate delta.
    #[inline]
    pub fn as_delta(self) -> i32 {
        i32::try_from(self.0).unwrap_or(i32::MAX)
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::MIN
    }
}

/// Linear opacity transition between fully transparent and fully opaque.
///
/// Elapsed time is tracked as a [`Duration`] so repeated small ticks do not
/// accumulate floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    fading_in: bool,
}

impl Fade {
    /// Transition from transparent to opaque.
    pub fn fade_in(duration: Duration) -> Self {
        Self::with_direction(duration, true)
    }

    /// Transition from opaque to transparent.
    pub fn fade_out(duration: Duration) -> Self {
        Self::with_direction(duration, false)
    }

    fn with_direction(duration: Duration, fading_in: bool) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            fading_in,
        }
    }

    /// Advance the transition by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Whether the transition has reached its end.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Whether this fade ends opaque.
    pub fn is_fade_in(&self) -> bool {
        self.fading_in
    }

    /// Linear progress in [0.0, 1.0].
    pub fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Current opacity in [0.0, 1.0].
    pub fn opacity(&self) -> f32 {
        if self.fading_in {
            self.progress()
        } else {
            1.0 - self.progress()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_durations_match_table() {
        let millis: Vec<u64> = AnimationVelocity::ALL.iter().map(|v| v.millis()).collect();
        assert_eq!(millis, vec![2000, 1500, 1000, 500, 300, 150, 50]);
        assert_eq!(AnimationVelocity::default(), AnimationVelocity::Normal);
        assert_eq!(
            AnimationVelocity::Fast.duration(),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn velocity_rounds_up() {
        // 100 * 8 / 500 = 1.6 -> 2
        assert_eq!(
            Velocity::for_extent(100, AnimationVelocity::Normal).get(),
            2
        );
        // 100 * 8 / 50 = 16 exactly
        assert_eq!(
            Velocity::for_extent(100, AnimationVelocity::LightSpeed).get(),
            16
        );
    }

    #[test]
    fn velocity_floors_at_one() {
        assert_eq!(Velocity::for_extent(0, AnimationVelocity::Turtle), Velocity::MIN);
        assert_eq!(Velocity::for_extent(-40, AnimationVelocity::Fast), Velocity::MIN);
        assert_eq!(Velocity::new(0), Velocity::MIN);
        assert_eq!(Velocity::default().get(), 1);
    }

    #[test]
    fn faster_presets_never_slow_down() {
        let mut last = 0;
        for preset in AnimationVelocity::ALL {
            let v = Velocity::for_extent(240, preset).get();
            assert!(v >= last, "{preset:?} produced {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn fade_in_reaches_opaque() {
        let mut fade = Fade::fade_in(Duration::from_millis(300));
        assert_eq!(fade.opacity(), 0.0);
        fade.tick(Duration::from_millis(150));
        assert!((fade.opacity() - 0.5).abs() < 1e-4);
        assert!(!fade.is_complete());
        fade.tick(Duration::from_millis(200));
        assert!(fade.is_complete());
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn fade_out_reaches_transparent() {
        let mut fade = Fade::fade_out(Duration::from_millis(300));
        assert_eq!(fade.opacity(), 1.0);
        assert!(!fade.is_fade_in());
        fade.tick(Duration::from_secs(1));
        assert_eq!(fade.opacity(), 0.0);
    }

    #[test]
    fn zero_duration_fade_completes_on_first_tick() {
        let mut fade = Fade::fade_in(Duration::ZERO);
        assert!(!fade.is_complete());
        fade.tick(Duration::from_nanos(1));
        assert!(fade.is_complete());
    }
}
