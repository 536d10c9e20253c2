pub mod scramble;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub name: &'static str,
    pub description: &'static str,
}

pub const GAME_INFO: GameInfo = GameInfo {
    name: "Word Hunt",
    description: "Find words hidden in the letters of a seed word",
};
