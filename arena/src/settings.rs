use serde::{Deserialize, Serialize};
use tictactoe_engine::BotDifficulty;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub games: u32,
    pub x_difficulty: String,
    pub o_difficulty: String,
    pub seed: Option<u64>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            games: 10,
            x_difficulty: "minimax".to_string(),
            o_difficulty: "heuristic".to_string(),
            seed: None,
        }
    }
}

impl MatchSettings {
    /// Loads settings from a YAML file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_yaml_ng::from_str(&content)
                .map_err(|e| format!("Failed to parse settings file {}: {}", path, e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!("Failed to read settings file {}: {}", path, e)),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("Game count must be at least 1".to_string());
        }
        self.parse_difficulty(&self.x_difficulty)?;
        self.parse_difficulty(&self.o_difficulty)?;
        Ok(())
    }

    pub fn x_difficulty(&self) -> Result<BotDifficulty, String> {
        self.parse_difficulty(&self.x_difficulty)
    }

    pub fn o_difficulty(&self) -> Result<BotDifficulty, String> {
        self.parse_difficulty(&self.o_difficulty)
    }

    fn parse_difficulty(&self, name: &str) -> Result<BotDifficulty, String> {
        name.parse::<BotDifficulty>().map_err(|e| e.to_string())
    }
}
