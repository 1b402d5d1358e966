// Field and interaction tuning constants shared by the web frontend.

// How a unit of waveSpeed maps onto phase advance per second of animation
// time. waveSpeed 0.02 (the site's setting) drifts the pattern through a
// full cycle in roughly 50 seconds.
pub const TIME_SCALE: f32 = std::f32::consts::TAU;

// Spatial stretch applied per axis so the two primary terms never line up
pub const X_STRETCH: f32 = 1.0;
pub const Y_STRETCH: f32 = 1.3;

// Relative rate of the diagonal cross-term
pub const CROSS_RATE: f32 = 0.8;

// Phase offsets between the sinusoidal terms (radians)
pub const PHASE_B: f32 = 2.399;
pub const PHASE_C: f32 = 4.188;

// Time-rate multipliers per term; the second term runs backwards
pub const DRIFT_A: f32 = 1.0;
pub const DRIFT_B: f32 = -0.7;
pub const DRIFT_C: f32 = 1.3;

// Peak intensity added at zero pointer distance
pub const POINTER_BOOST: f32 = 0.35;
