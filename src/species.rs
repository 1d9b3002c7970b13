//! Species catalog: the compiled-in table of catchable fish and their
//! movement profiles.
//!
//! Every species maps to a [`SpeciesProfile`] that parameterizes the fish
//! motion model for one session. The table is static data; lookup never
//! mutates anything.

/// How a fish picks its next target on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishBehavior {
    /// Mostly stationary, small wanders near its current spot.
    Passive,
    /// Constant full-range repositioning, predictable pace.
    Smooth,
    /// Alternates between small wobbles and large darts.
    Mixed,
    /// Gravitates toward the bottom of the track.
    Sinker,
    /// Gravitates toward the top, erratic.
    Floater,
    /// Always picks a fresh random target, relentless.
    Aggro,
}

impl FishBehavior {
    /// Short label for the species menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passive => "Docile",
            Self::Smooth => "Wanderer",
            Self::Mixed => "Darter",
            Self::Sinker => "Bottom feeder",
            Self::Floater => "Surface lurker",
            Self::Aggro => "Aggressive",
        }
    }
}

/// Movement profile for one species. Immutable; looked up at session start
/// and held for the whole game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesProfile {
    pub name: &'static str,
    pub behavior: FishBehavior,
    /// Track units moved per tick while heading to the target.
    pub base_speed: f64,
    /// Probability (0-1) of actually retargeting when the interval elapses.
    pub move_chance: f64,
    /// How often the fish reconsiders its target (ms). Lower = jumpier.
    pub change_interval_ms: u64,
    /// Maximum dart distance for darting behaviors, relative to the
    /// current position (0-100). Unset species fall back to the default.
    pub dart_range: Option<f64>,
}

/// All catchable species, easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Carp,
    SmallmouthBass,
    LargemouthBass,
    Tuna,
    SuperCucumber,
    Pufferfish,
    Octopus,
    Legend,
}

/// One profile per [`Species`], indexed by discriminant.
static CATALOG: [SpeciesProfile; 8] = [
    SpeciesProfile {
        name: "Carp",
        behavior: FishBehavior::Passive,
        base_speed: 0.4,
        move_chance: 0.2,
        change_interval_ms: 1500,
        dart_range: None,
    },
    SpeciesProfile {
        name: "Smallmouth Bass",
        behavior: FishBehavior::Smooth,
        base_speed: 0.8,
        move_chance: 0.9,
        change_interval_ms: 1000,
        dart_range: None,
    },
    SpeciesProfile {
        name: "Largemouth Bass",
        behavior: FishBehavior::Mixed,
        base_speed: 1.8,
        move_chance: 0.7,
        change_interval_ms: 600,
        dart_range: Some(40.0), // medium, stable jumps
    },
    SpeciesProfile {
        name: "Tuna",
        behavior: FishBehavior::Mixed,
        base_speed: 2.8,
        move_chance: 0.75,
        change_interval_ms: 400,
        dart_range: Some(75.0), // medium-large jumps
    },
    SpeciesProfile {
        name: "Super Cucumber",
        behavior: FishBehavior::Sinker,
        base_speed: 2.0,
        move_chance: 0.7,
        change_interval_ms: 600,
        dart_range: None,
    },
    SpeciesProfile {
        name: "Pufferfish",
        behavior: FishBehavior::Floater,
        base_speed: 2.5,
        move_chance: 0.8,
        change_interval_ms: 300,
        dart_range: None,
    },
    SpeciesProfile {
        name: "Octopus",
        behavior: FishBehavior::Aggro,
        base_speed: 2.6,
        move_chance: 0.6,
        change_interval_ms: 250,
        dart_range: None,
    },
    SpeciesProfile {
        name: "The Legend",
        behavior: FishBehavior::Aggro,
        base_speed: 3.6,
        move_chance: 0.75,
        change_interval_ms: 150,
        dart_range: None,
    },
];

impl Species {
    pub const ALL: [Species; 8] = [
        Species::Carp,
        Species::SmallmouthBass,
        Species::LargemouthBass,
        Species::Tuna,
        Species::SuperCucumber,
        Species::Pufferfish,
        Species::Octopus,
        Species::Legend,
    ];

    /// The movement profile for this species.
    pub fn profile(self) -> &'static SpeciesProfile {
        &CATALOG[self as usize]
    }

    /// Display name, also the lookup identifier.
    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// Resolve a species identifier as used by session start. `None` for
    /// identifiers absent from the catalog.
    pub fn from_id(id: &str) -> Option<Species> {
        Species::ALL.iter().copied().find(|s| s.name() == id)
    }
}
