//! Pure math for the animated wave background.
//!
//! Everything in this module is a deterministic function of wave/particle
//! index, horizontal position, animation time and pointer position. Nothing
//! survives between frames; the render loop resamples the whole field every
//! frame and the host test suite exercises these functions directly.

/// Number of horizontal wave strokes per frame.
pub const WAVE_COUNT: usize = 12;

/// Number of glow particles orbiting the pointer.
pub const PARTICLE_COUNT: usize = 10;

/// Horizontal sampling step for wave paths, in canvas units.
pub const SAMPLE_STEP: f64 = 5.0;

/// Stroke width of every wave path.
pub const STROKE_WIDTH: f64 = 3.0;

/// Radius around the pointer inside which waves react.
pub const POINTER_RADIUS: f64 = 150.0;

/// Peak extra displacement a wave picks up directly under the pointer.
const POINTER_GAIN: f64 = 80.0;

const BASE_AMPLITUDE: f64 = 30.0;

/// Wall-clock milliseconds are scaled by this factor to get animation time.
pub const TIME_SCALE: f64 = 0.002;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Stroke color of one wave, in HSL space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveStyle {
    pub hue: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl WaveStyle {
    /// CSS color string understood by the canvas API.
    pub fn css(&self) -> String {
        format!(
            "hsla({}, 100%, {}%, {})",
            self.hue, self.lightness, self.alpha
        )
    }
}

/// Vertical baseline of wave `i`: waves are spaced evenly over the height.
pub fn baseline(i: usize, height: f64) -> f64 {
    (i as f64 / WAVE_COUNT as f64) * height
}

/// Color of wave `i`. The hue ramp wraps at 360; alpha clamps at zero so a
/// high index comes out fully transparent rather than negative.
pub fn style(i: usize) -> WaveStyle {
    WaveStyle {
        hue: (50.0 + i as f64 * 100.0).rem_euclid(360.0),
        lightness: 50.0 + i as f64 * 3.0,
        alpha: (0.6 - i as f64 * 0.03).max(0.0),
    }
}

/// Linear falloff of pointer influence: full strength under the pointer,
/// zero at [`POINTER_RADIUS`] and beyond, scaled to displacement units.
pub fn pointer_effect(distance: f64) -> f64 {
    (1.0 - distance / POINTER_RADIUS).max(0.0) * POINTER_GAIN
}

/// Sampled y of wave `i` at horizontal position `x`.
///
/// Three sinusoids at staggered spatial and temporal frequencies give the
/// field its drift; the ripple term rings outward from the pointer inside
/// the proximity radius.
pub fn sample_y(i: usize, x: f64, time: f64, height: f64, pointer: Point) -> f64 {
    let base = baseline(i, height);
    let distance = Point::new(x, base).distance(pointer);

    let wave1 = (x * 0.01 + time + i as f64 * 0.5).sin() * BASE_AMPLITUDE;
    let wave2 = (x * 0.02 + time * 1.5 + i as f64 * 0.3).sin() * (BASE_AMPLITUDE * 0.5);
    let wave3 = (x * 0.005 + time * 0.5).sin() * (BASE_AMPLITUDE * 0.8);
    let ripple = (distance * 0.05 - time * 3.0).sin() * pointer_effect(distance);

    base + wave1 + wave2 + wave3 + ripple
}

/// One glow particle orbiting the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub center: Point,
    /// Radius of the bright core; the gradient extends to [`Self::glow_radius`].
    pub size: f64,
}

impl Particle {
    /// Outer radius of the radial gradient disc.
    pub fn glow_radius(&self) -> f64 {
        self.size * 3.0
    }
}

/// Position and size of particle `i` at `time`, relative to the pointer.
pub fn particle(i: usize, time: f64, pointer: Point) -> Particle {
    let angle = (i as f64 / PARTICLE_COUNT as f64) * std::f64::consts::TAU + time;
    let radius = 50.0 + (time * 2.0 + i as f64).sin() * 30.0;
    Particle {
        center: Point::new(
            pointer.x + angle.cos() * radius,
            pointer.y + angle.sin() * radius,
        ),
        size: 2.0 + (time * 3.0 + i as f64).sin() * 1.5,
    }
}

/// Gradient stops for the particle glow: bright yellow core fading out.
pub const PARTICLE_GLOW: [(f64, &str); 3] = [
    (0.0, "rgba(255, 220, 0, 0.8)"),
    (0.5, "rgba(255, 179, 0, 0.98)"),
    (1.0, "rgba(255, 150, 0, 0)"),
];
