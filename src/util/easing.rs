//! Easing curves for tween interpolation.
//!
//! Every curve takes raw progress in `[0, 1]` and returns the eased factor
//! used to blend a tween's start and target transforms. The elastic curve
//! overshoots past 1.0 before settling, the bounce curve stays inside
//! `[0, 1]`. All of them land on exactly 1.0 at the end.

use std::f32::consts::PI;

/// Easing curve variants available to tweens.
///
/// Curves are looked up by name with [`Easing::from_name`]; unknown names
/// fall back to [`Easing::InOutCubic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Cubic ease-in-out (slow start, fast middle, slow end).
    #[default]
    InOutCubic,
    /// Elastic ease-out: overshoots and wobbles before settling.
    OutElastic,
    /// Bounce ease-out: four decaying parabolic hops settling at 1.
    OutBounce,
}

/// Angular frequency of the elastic wobble.
const ELASTIC_PERIOD: f32 = (2.0 * PI) / 4.5;

const BOUNCE_AMPLITUDE: f32 = 7.5625;
const BOUNCE_SPAN: f32 = 2.75;

impl Easing {
    /// Every variant, in declaration order.
    pub const ALL: [Easing; 3] =
        [Easing::InOutCubic, Easing::OutElastic, Easing::OutBounce];

    /// Resolve an easing identifier such as `"easeOutElastic"`.
    ///
    /// Unrecognised identifiers resolve to [`Easing::InOutCubic`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "easeOutElastic" => Self::OutElastic,
            "easeOutBounce" => Self::OutBounce,
            _ => Self::InOutCubic,
        }
    }

    /// Canonical identifier of this curve.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::InOutCubic => "easeInOutCubic",
            Self::OutElastic => "easeOutElastic",
            Self::OutBounce => "easeOutBounce",
        }
    }

    /// Evaluate the curve at progress `t`.
    ///
    /// Input is clamped to `[0.0, 1.0]` first, so callers may pass raw
    /// `elapsed / duration` ratios.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::OutElastic => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else {
                    (-10.0 * t).exp2() * ((t * 10.0 - 0.75) * ELASTIC_PERIOD).sin()
                        + 1.0
                }
            }
            Self::OutBounce => bounce_out(t),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    if t < 1.0 / BOUNCE_SPAN {
        BOUNCE_AMPLITUDE * t * t
    } else if t < 2.0 / BOUNCE_SPAN {
        let t = t - 1.5 / BOUNCE_SPAN;
        BOUNCE_AMPLITUDE * t * t + 0.75
    } else if t < 2.5 / BOUNCE_SPAN {
        let t = t - 2.25 / BOUNCE_SPAN;
        BOUNCE_AMPLITUDE * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_SPAN;
        BOUNCE_AMPLITUDE * t * t + 0.984_375
    }
}
