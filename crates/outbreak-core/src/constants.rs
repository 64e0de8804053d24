//! Simulation constants and default tuning parameters.
//!
//! Distances are in world units (one unit ~ one meter), times in
//! milliseconds unless the name says otherwise.

/// Display refresh rate the host paces frames at (Hz).
pub const FRAME_RATE: u32 = 60;

/// Nominal frame duration in seconds.
pub const FRAME_DT: f64 = 1.0 / FRAME_RATE as f64;

/// Longest frame the host clock will report (seconds).
pub const MAX_FRAME_DT: f64 = 0.1;

// --- Viewpoint ---

/// Camera height above the ground plane.
pub const EYE_HEIGHT: f32 = 2.0;

/// Velocity damping coefficient (per second).
pub const MOVE_DAMPING: f32 = 10.0;

/// Impulse applied per second along each active movement axis.
pub const MOVE_SPEED: f32 = 50.0;

/// Look sensitivity in radians per pixel of mouse motion.
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Player contact box half extents around the viewpoint.
pub const PLAYER_HALF_EXTENTS: [f32; 3] = [0.5, 1.0, 0.5];

/// Starting (and maximum) player health.
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

// --- Projectiles ---

/// Projectile time-to-live.
pub const PROJECTILE_TTL_MS: f64 = 2000.0;

// --- Weapons ---

pub const PISTOL_DAMAGE: f32 = 34.0;
pub const PISTOL_COOLDOWN_MS: f64 = 250.0;
pub const PISTOL_PROJECTILE_SPEED: f32 = 100.0;
pub const PISTOL_PROJECTILE_RADIUS: f32 = 0.05;

pub const SHOTGUN_DAMAGE: f32 = 20.0;
pub const SHOTGUN_COOLDOWN_MS: f64 = 900.0;
pub const SHOTGUN_PROJECTILE_SPEED: f32 = 80.0;
pub const SHOTGUN_PROJECTILE_RADIUS: f32 = 0.05;
pub const SHOTGUN_PELLETS: u32 = 8;
/// Per-component direction jitter for each pellet.
pub const SHOTGUN_SPREAD: f32 = 0.08;
pub const SHOTGUN_MAGAZINE: u32 = 24;

pub const RIFLE_DAMAGE: f32 = 25.0;
pub const RIFLE_COOLDOWN_MS: f64 = 100.0;
pub const RIFLE_PROJECTILE_SPEED: f32 = 150.0;
pub const RIFLE_PROJECTILE_RADIUS: f32 = 0.04;
pub const RIFLE_SPREAD: f32 = 0.01;
pub const RIFLE_MAGAZINE: u32 = 120;

// --- Waves ---

/// Delay between the end of one wave and the start of the next.
pub const WAVE_DELAY_MS: f64 = 5000.0;

/// Interval between spawns inside a wave.
pub const SPAWN_INTERVAL_MS: f64 = 3000.0;

/// Radius of the spawn ring around the viewpoint.
pub const SPAWN_RING_RADIUS: f32 = 30.0;

/// Zombies in the first wave.
pub const WAVE_BASE_QUOTA: u32 = 5;

/// Additional zombies per wave.
pub const WAVE_QUOTA_PER_LEVEL: u32 = 2;

/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Points per wave level credited when an ordinary wave starts.
pub const WAVE_BONUS_POINTS: u64 = 500;

// --- Hostiles ---

/// Ordinary zombie health.
pub const ZOMBIE_HEALTH: f32 = 100.0;

/// Minimum zombie walking speed; a random 0..ZOMBIE_SPEED_JITTER is added.
pub const ZOMBIE_BASE_SPEED: f32 = 3.0;
pub const ZOMBIE_SPEED_JITTER: f32 = 2.0;

pub const ZOMBIE_DAMAGE: f32 = 10.0;
pub const ZOMBIE_ATTACK_COOLDOWN_MS: f64 = 1000.0;
pub const ZOMBIE_KILL_POINTS: u64 = 100;

/// Zombie bounding half extents (x, y, z) at scale 1.0, centred
/// `HOSTILE_CENTER_HEIGHT` above its feet.
pub const HOSTILE_HALF_EXTENTS: [f32; 3] = [0.6, 1.1, 0.6];
pub const HOSTILE_CENTER_HEIGHT: f32 = 0.9;

pub const BOSS_HEALTH: f32 = 1000.0;
pub const BOSS_SPEED: f32 = 2.5;
pub const BOSS_DAMAGE: f32 = 30.0;
pub const BOSS_ATTACK_COOLDOWN_MS: f64 = 1500.0;
pub const BOSS_KILL_POINTS: u64 = 1000;
pub const BOSS_SCALE: f32 = 2.5;

/// Peers closer than this push each other apart.
pub const SEPARATION_RADIUS: f32 = 3.0;

/// Weight of the separation vector relative to pursuit.
pub const SEPARATION_WEIGHT: f32 = 0.5;

/// Walk cycle rate range (radians per second).
pub const WALK_RATE_MIN: f32 = 5.0;
pub const WALK_RATE_JITTER: f32 = 2.0;

/// Peak limb swing of the walk cycle (radians).
pub const WALK_SWING: f32 = 0.3;

// --- Scenery ---

pub const OBSTACLE_COUNT: usize = 10;
pub const OBSTACLE_SIZE: f32 = 2.0;
pub const OBSTACLE_SPREAD: f32 = 20.0;

pub const BUILDING_COUNT: usize = 30;
pub const BUILDING_SPREAD: f32 = 80.0;

/// Side length of the square ground plane.
pub const GROUND_SIZE: f32 = 200.0;

// --- Effects ---

pub const BLOOD_PARTICLES_PER_HIT: usize = 6;
pub const BLOOD_PARTICLE_LIFETIME_MS: f64 = 800.0;
pub const BLOOD_DECAL_LIFETIME_MS: f64 = 5000.0;
pub const SCORE_POPUP_LIFETIME_MS: f64 = 1000.0;
pub const WAVE_ANNOUNCEMENT_MS: f64 = 2000.0;
pub const RECOIL_MS: f64 = 50.0;
pub const MUZZLE_FLASH_MS: f64 = 60.0;
pub const OBSTACLE_BUMP_MS: f64 = 200.0;
pub const OBSTACLE_BUMP_HEIGHT: f32 = 0.5;
pub const DAMAGE_FLASH_MS: f64 = 300.0;

/// Downward acceleration applied to blood particles.
pub const PARTICLE_GRAVITY: f32 = 9.81;
