// Frame timing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS physics tick

// Bar physics (percentage units of track height, per 16ms tick)
pub const GRAVITY: f64 = -0.12;
pub const BASE_THRUST: f64 = 0.15;
pub const HOLD_ACCELERATION: f64 = 0.0035;
pub const MAX_THRUST: f64 = 0.35;
pub const BOUNCE_DAMPENING: f64 = -0.5;
/// Floor hits slower than this settle to zero instead of rebounding.
pub const FLOOR_BOUNCE_THRESHOLD: f64 = -2.0;

// Track dimensions
pub const BAR_HEIGHT: f64 = 20.0;
pub const FISH_HEIGHT: f64 = 8.0;
pub const MAX_BAR_POS: f64 = 100.0 - BAR_HEIGHT;
pub const MAX_FISH_POS: f64 = 100.0 - FISH_HEIGHT;

// Progress meter
pub const PROGRESS_GAIN: f64 = 0.36;
pub const PROGRESS_DECAY: f64 = 0.12;

// Fresh-session values
pub const INITIAL_BAR_POS: f64 = 10.0;
pub const INITIAL_FISH_POS: f64 = 50.0;
pub const INITIAL_PROGRESS: f64 = 20.0;

/// Dart distance used by darting species that don't declare their own.
pub const DEFAULT_DART_RANGE: f64 = 100.0;
