// Engine tuning constants for the chase chain and particle bursts.

// Chain shape
pub const TRAIL_LENGTH: usize = 10; // number of body segments behind the head
pub const HEAD_EASE: f32 = 0.15; // per-tick fraction the head closes toward the pointer
pub const NODE_EASE: f32 = 0.3; // per-tick fraction each segment closes toward its predecessor

// Segment sizing (px)
pub const SEGMENT_BASE_SIZE: f32 = 40.0;
pub const SEGMENT_SHRINK: f32 = 4.0; // shrink per index toward the tail
pub const SEGMENT_MIN_SIZE: f32 = 10.0;

// Particle bursts
pub const BURST_COUNT: usize = 15;
pub const PARTICLE_LIFETIME_TICKS: u32 = 30;
pub const PARTICLE_SPEED_MIN: f32 = 2.0;
pub const PARTICLE_SPEED_MAX: f32 = 5.0; // exclusive upper bound
