//! Structural validation of world-root candidates
//!
//! Grades a candidate pointer by probing a fixed set of UWorld-shaped
//! relationships through the target session. Points are additive and each
//! gate is independent, so a true match with one garbage field still
//! accumulates enough signal while random bytes almost never do. Every
//! failed remote read simply contributes nothing; validation never aborts
//! the scan.

use crate::config::OffsetsConfig;
use crate::process::TargetProcess;
use crate::scanner::filter::is_valid_pointer;

/// Highest score the point allocation can produce
/// (10 + 20 + 25 + 5*5 + 15 + 10 + 10 + 10).
pub const MAX_SCORE: u32 = 125;

/// Actor counts at or above this are treated as garbage
const ACTOR_COUNT_SANE_MAX: u32 = 100_000;

/// How many actor-array slots to probe
const ACTOR_PROBE_SLOTS: u32 = 5;

/// Field offsets describing the expected UWorld/ULevel layout.
///
/// Ground-truth input dumped from the engine build, not derived here.
/// Hardcoded layouts are inherently fragile across engine updates, which is
/// why these stay swappable configuration rather than constants in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldOffsets {
    /// UWorld -> PersistentLevel
    pub persistent_level: u64,
    /// UWorld -> OwningGameInstance
    pub owning_game_instance: u64,
    /// UWorld -> Levels (TArray data pointer)
    pub levels: u64,
    /// UWorld -> GameState
    pub game_state: u64,
    /// ULevel -> Actors (TArray data pointer)
    pub level_actors: u64,
    /// ULevel -> actor count
    pub level_actor_count: u64,
}

impl Default for WorldOffsets {
    fn default() -> Self {
        // UE5 layout observed in the supported build
        WorldOffsets {
            persistent_level: 0x38,
            owning_game_instance: 0x1A0,
            levels: 0x178,
            game_state: 0x158,
            level_actors: 0xA0,
            level_actor_count: 0xA8,
        }
    }
}

impl From<&OffsetsConfig> for WorldOffsets {
    fn from(config: &OffsetsConfig) -> Self {
        WorldOffsets {
            persistent_level: config.persistent_level,
            owning_game_instance: config.owning_game_instance,
            levels: config.levels,
            game_state: config.game_state,
            level_actors: config.level_actors,
            level_actor_count: config.level_actor_count,
        }
    }
}

/// Read-only validator grading candidates against [`WorldOffsets`]
pub struct StructureValidator<'a> {
    target: &'a TargetProcess<'a>,
    offsets: WorldOffsets,
}

impl<'a> StructureValidator<'a> {
    pub fn new(target: &'a TargetProcess<'a>, offsets: WorldOffsets) -> Self {
        StructureValidator { target, offsets }
    }

    /// Grade a candidate world pointer.
    ///
    /// The dereferenceability check runs first and short-circuits: it is
    /// the cheapest rejection and throws out the overwhelming majority of
    /// slots before any structural reads are issued.
    pub fn score(&self, world_ptr: u64) -> u32 {
        if !is_valid_pointer(self.target, world_ptr) {
            return 0;
        }
        let mut score = 10;

        score += self.score_persistent_level(world_ptr);

        if self.pointer_field_valid(world_ptr + self.offsets.owning_game_instance) {
            score += 15;
        }
        if self.pointer_field_valid(world_ptr + self.offsets.levels) {
            score += 10;
        }
        // One level of indirection through the levels collection
        if let Ok(levels_ptr) = self.target.read_u64(world_ptr + self.offsets.levels) {
            if self.pointer_field_valid(levels_ptr) {
                score += 10;
            }
        }
        if self.pointer_field_valid(world_ptr + self.offsets.game_state) {
            score += 10;
        }

        score
    }

    /// Persistent level, actor array, and actor slot probes: up to 70 points
    fn score_persistent_level(&self, world_ptr: u64) -> u32 {
        let Ok(level) = self.target.read_u64(world_ptr + self.offsets.persistent_level) else {
            return 0;
        };
        if !is_valid_pointer(self.target, level) {
            return 0;
        }
        let mut score = 20;

        let actors = self.target.read_u64(level + self.offsets.level_actors);
        let count = self.target.read_u32(level + self.offsets.level_actor_count);

        if let (Ok(actors), Ok(count)) = (actors, count) {
            if is_valid_pointer(self.target, actors) && (1..ACTOR_COUNT_SANE_MAX).contains(&count)
            {
                score += 25;

                for slot in 0..count.min(ACTOR_PROBE_SLOTS) {
                    if let Ok(actor) = self.target.read_u64(actors + u64::from(slot) * 8) {
                        if is_valid_pointer(self.target, actor) {
                            score += 5;
                        }
                    }
                }
            }
        }

        score
    }

    /// Re-read the actor count off the candidate's persistent level.
    ///
    /// Reported alongside the candidate for sanity checking; never scored.
    pub fn actor_count(&self, world_ptr: u64) -> u32 {
        match self.target.read_u64(world_ptr + self.offsets.persistent_level) {
            Ok(level) if is_valid_pointer(self.target, level) => self
                .target
                .read_u32(level + self.offsets.level_actor_count)
                .unwrap_or(0),
            _ => 0,
        }
    }

    fn pointer_field_valid(&self, field_address: u64) -> bool {
        match self.target.read_u64(field_address) {
            Ok(value) => is_valid_pointer(self.target, value),
            Err(_) => false,
        }
    }
}
