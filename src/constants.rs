/// Presentation tuning constants.
///
/// Everything here is about how engine state is written to the DOM; the
/// kinematics constants live in `core::constants`.
// Head element placement
pub const HEAD_CENTER_OFFSET_PX: f32 = 30.0; // half the head element's box, centers it on the head point
pub const HEAD_ROTATION_OFFSET_DEG: f32 = 90.0; // sprite artwork points up, travel direction points right

// Particle dots
pub const PARTICLE_SIZE_PX: f32 = 8.0;
pub const PARTICLE_Z_INDEX: &str = "999";
pub const PARTICLE_COLORS: [&str; 2] = ["#ff9800", "#ffeb3b"]; // alternated by particle id

// Flame flash re-triggered on each click
pub const FLAME_ANIMATION: &str = "flame 0.3s ease-in-out 3";

// Seed for particle speed randomness
pub const PARTICLE_SEED: u64 = 42;
