use serde::Serialize;

/// Identifier of the system assumed when a request does not name one.
pub static DEFAULT_GAME_SYSTEM: &str = "dnd5e";

/// Static descriptor of a supported game system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct GameSystem {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
}

pub static GAME_SYSTEMS: &[GameSystem] = &[
    GameSystem {
        id: "dnd5e",
        version: "2014",
        name: "Dungeons & Dragons 5th Edition",
    },
    GameSystem {
        id: "base",
        version: "1",
        name: "System Agnostic",
    },
];

impl GameSystem {
    /// Looks up a system by id
    pub fn find(id: &str) -> Option<&'static GameSystem> {
        GAME_SYSTEMS.iter().find(|system| system.id == id)
    }

    /// Looks up a requested system, falling back to [`DEFAULT_GAME_SYSTEM`] when none is given
    pub fn resolve(requested: Option<&str>) -> Option<&'static GameSystem> {
        Self::find(requested.unwrap_or(DEFAULT_GAME_SYSTEM))
    }
}
