//! Easing curves applied to the linear progress of a tween.

/// Easing functions, expressed as cubic bezier timing curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    EaseIn,
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// [`EaseIn`](Easing::EaseIn) over the first half, mirrored over the
    /// second. Mobile timing animations default to this curve.
    MirroredEaseIn,
    /// Material standard curve.
    FastOutSlowInEasing,
    LinearOutSlowInEasing,
    FastOutLinearEasing,
    /// Arbitrary curve through control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match *self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::MirroredEaseIn => {
                let ease_in = |t: f32| cubic_bezier(0.42, 0.0, 1.0, 1.0, t);
                if fraction < 0.5 {
                    ease_in(fraction * 2.0) / 2.0
                } else {
                    1.0 - ease_in((1.0 - fraction) * 2.0) / 2.0
                }
            }
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

struct BezierAxis {
    a: f32,
    b: f32,
    c: f32,
}

impl BezierAxis {
    fn new(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self {
            a: 1.0 - c - b,
            b,
            c,
        }
    }

    fn sample(&self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn slope(&self, t: f32) -> f32 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let x_axis = BezierAxis::new(x1, x2);
    let y_axis = BezierAxis::new(y1, y2);

    // Newton-Raphson for the curve parameter whose x matches `fraction`.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let error = x_axis.sample(t) - fraction;
        if error.abs() < 1e-6 {
            solved = true;
            break;
        }
        let slope = x_axis.slope(t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    if !solved {
        // Bisection fallback for flat regions of the curve.
        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let delta = x_axis.sample(t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
    }

    y_axis.sample(t)
}
