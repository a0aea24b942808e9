//! Simulation constants and tuning parameters.

// --- World bounds ---

/// Half-extent of the playable area in world units. The terrain grid spans
/// [-PLAY_HALF_EXTENT, PLAY_HALF_EXTENT] on both axes and hostiles spawn on
/// that boundary.
pub const PLAY_HALF_EXTENT: f32 = 0.9;

/// Full world-space span of the terrain grid on each axis.
pub const WORLD_SPAN: f32 = PLAY_HALF_EXTENT * 2.0;

/// Default terrain grid width and height in cells.
pub const DEFAULT_GRID_SIZE: u32 = 100;

// --- Terrain generation ---

/// Island base radius as a fraction of the smaller grid dimension:
/// `base_radius = min(width, height) / ISLAND_RADIUS_DIVISOR`.
pub const ISLAND_RADIUS_DIVISOR: f32 = 3.0;

/// Coastline noise amplitude as a fraction of the base radius. Each cell
/// draws an independent offset uniform in [0, base_radius * this).
pub const COAST_NOISE_FACTOR: f32 = 0.3;

// --- Spawning ---

/// Seconds between hostile spawns at the playable-area edge.
pub const SPAWN_INTERVAL_SECS: f32 = 10.0;

// --- Towers ---

/// Tower bounding size (square), world units.
pub const TOWER_SIZE: f32 = 0.1;

/// Maximum engagement distance, world units.
pub const TOWER_ATTACK_RANGE: f32 = 0.5;

/// Damage carried by each tower projectile.
pub const TOWER_ATTACK_DAMAGE: f32 = 10.0;

/// Cooldown restored after every shot, seconds.
pub const TOWER_COOLDOWN_SECS: f32 = 3.0;

// --- Hostile units ---

/// Hostile bounding size (square), world units.
pub const HOSTILE_SIZE: f32 = 0.15;

/// Hostile starting health.
pub const HOSTILE_HEALTH: f32 = 20.0;

/// Hostile movement speed, world units per second.
pub const HOSTILE_SPEED: f32 = 0.05;

/// Hostiles closer to their objective than this hold position.
pub const HOSTILE_HOLD_DISTANCE: f32 = 0.01;

// --- Projectiles ---

/// Projectile bounding size (square), world units.
pub const PROJECTILE_SIZE: f32 = 0.03;

/// Projectile flight speed, world units per second.
pub const PROJECTILE_SPEED: f32 = 0.6;

/// Projectile flight time budget, seconds. Expires even short of the target.
pub const PROJECTILE_LIFETIME_SECS: f32 = 4.0;

/// Projectiles closer to their aim point than this are spent where they are,
/// without moving that frame.
pub const PROJECTILE_ARRIVAL_EPSILON: f32 = 0.05;
