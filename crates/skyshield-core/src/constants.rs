//! Simulation constants and tuning defaults.
//!
//! Coordinates are on a fixed logical plane with y growing downward.
//! Speeds and blast growth are expressed per tick; timers in seconds.

/// Simulation tick rate (Hz), matching the display refresh rate.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Logical play width.
pub const WORLD_WIDTH: f32 = 800.0;

/// Logical play height.
pub const WORLD_HEIGHT: f32 = 600.0;

/// Ground line where structures and emplacements stand.
pub const GROUND_Y: f32 = 580.0;

/// Height of the band at the bottom of the plane where fire commands are ignored.
pub const GROUND_BAND_HEIGHT: f32 = 80.0;

/// Fire commands with y strictly below this line (greater y) are ignored.
pub const FIRE_LINE_Y: f32 = WORLD_HEIGHT - GROUND_BAND_HEIGHT;

// --- Emplacements ---

pub const EMPLACEMENT_COUNT: usize = 3;

/// Left, center, right.
pub const EMPLACEMENT_X: [f32; EMPLACEMENT_COUNT] = [50.0, 400.0, 750.0];

pub const AREA_CAPACITY: u32 = 50;
pub const TRACKING_CAPACITY: u32 = 100;
pub const WIDE_CAPACITY: u32 = 50;

pub const AREA_SHOT_COST: u32 = 10;
pub const TRACKING_SHOT_COST: u32 = 1;
pub const WIDE_SHOT_COST: u32 = 1;

/// Maximum number of projectiles a single tracking salvo locks onto.
pub const TRACKING_MAX_LOCKS: usize = 2;

// --- Structures ---

pub const STRUCTURE_COUNT: usize = 6;

pub const STRUCTURE_X: [f32; STRUCTURE_COUNT] = [150.0, 230.0, 310.0, 490.0, 570.0, 650.0];

// --- Projectiles ---

pub const PROJECTILE_SPEED_MIN: f32 = 0.5;
pub const PROJECTILE_SPEED_MAX: f32 = 1.5;

/// Number of renderer sprite variants a projectile may carry.
pub const PROJECTILE_TAG_COUNT: u8 = 4;

// --- Interceptors ---

/// Baseline interceptor speed (px per tick).
pub const INTERCEPTOR_SPEED: f32 = 6.0;

/// Speed multiplier for the area weapon.
pub const AREA_SPEED_FACTOR: f32 = 0.7;

/// Speed multiplier for tracked interceptors.
pub const TRACKING_SPEED_FACTOR: f32 = 1.5;

// --- Blasts ---

pub const BLAST_RADIUS_BASELINE: f32 = 40.0;
pub const BLAST_RADIUS_AREA: f32 = 80.0;
pub const BLAST_RADIUS_WIDE: f32 = 55.0;
pub const BLAST_RADIUS_IMPACT: f32 = 15.0;

/// Radius gained per tick while growing. Fading shrinks at half this rate.
pub const BLAST_GROWTH_RATE: f32 = 2.0;

// --- Impact damage ---

/// Horizontal reach of a ground impact.
pub const IMPACT_DAMAGE_RANGE: f32 = 30.0;

// --- Scoring ---

pub const SCORE_PER_KILL: u32 = 20;
pub const STRUCTURE_PENALTY: u32 = 10;
pub const EMPLACEMENT_PENALTY: u32 = 30;

// --- Spawning ---

pub const SPAWN_INTERVAL_BASE_MS: f64 = 1500.0;
pub const SPAWN_INTERVAL_MIN_MS: f64 = 200.0;

/// Score beyond which the spawn interval stops shrinking.
pub const SPAWN_SCORE_RAMP_CAP: u32 = 800;

// --- Pickups ---

pub const PICKUP_CHANCE: f64 = 0.1;
pub const PICKUP_LIFESPAN_SECS: f64 = 5.0;

/// Horizontal and vertical limits of the band where pickups appear.
pub const PICKUP_MIN_X: f32 = 50.0;
pub const PICKUP_MAX_X: f32 = WORLD_WIDTH - 50.0;
pub const PICKUP_MIN_Y: f32 = 150.0;
pub const PICKUP_MAX_Y: f32 = 400.0;

// --- Slow time ---

pub const SLOW_TIME_SECS: f64 = 5.0;
pub const SLOW_TIME_FACTOR: f32 = 0.4;
