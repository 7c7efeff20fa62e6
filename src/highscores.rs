//! High score store and scoreboard
//!
//! On disk the store is plain text, one `"<name> <score>"` line per finished
//! game, appended to and never rewritten. Lines that do not parse are skipped.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::session::GameObserver;
use crate::sim::GameEvent;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u64,
}

impl HighScoreEntry {
    /// Parse one store line; the score is the last space-separated field
    pub fn parse(line: &str) -> Option<Self> {
        let (name, score) = line.trim_end().rsplit_once(' ')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let score = score.parse().ok()?;
        Some(Self {
            name: name.to_string(),
            score,
        })
    }

    /// Store line for a name and score (line breaks in the name are flattened)
    pub fn line(name: &str, score: u64) -> String {
        let name: String = name
            .trim()
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        let name = if name.is_empty() { "anonymous" } else { name.as_str() };
        format!("{name} {score}")
    }
}

/// High score leaderboard (best first)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a leaderboard from store text, skipping malformed lines
    ///
    /// Zero scores never rank and are dropped like any other non-qualifying line.
    pub fn parse(text: &str) -> Self {
        let mut scores = Self::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match HighScoreEntry::parse(line) {
                Some(entry) => {
                    if scores.add_score(&entry.name, entry.score).is_none() {
                        log::debug!("Score line {} does not rank: {:?}", i + 1, line);
                    }
                }
                None => log::warn!("Skipping malformed score line {}: {:?}", i + 1, line),
            }
        }
        scores
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, name: &str, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            name: name.to_string(),
            score,
        };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the store; a missing file is an empty leaderboard
    pub fn load(path: &Path) -> Result<Self, GameError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let scores = Self::parse(&text);
                log::info!("Loaded {} high scores", scores.entries.len());
                Ok(scores)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high scores found, starting fresh");
                Ok(Self::new())
            }
            Err(e) => Err(GameError::io(path, e)),
        }
    }

    /// Append one finished game to the store, creating it if needed
    pub fn append(path: &Path, name: &str, score: u64) -> Result<(), GameError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| GameError::io(dir, e))?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| GameError::io(path, e))?;
        writeln!(file, "{}", HighScoreEntry::line(name, score))
            .map_err(|e| GameError::io(path, e))?;
        log::info!("Score {} appended to {}", score, path.display());
        Ok(())
    }
}

/// Observer that mirrors score and lives, plus the best score seen
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub score: u64,
    pub lives: u8,
    pub high_score: u64,
}

impl Scoreboard {
    pub fn new(lives: u8, high_scores: &HighScores) -> Self {
        Self {
            score: 0,
            lives,
            high_score: high_scores.top_score().unwrap_or(0),
        }
    }

    pub fn status_line(&self) -> String {
        format!(
            "Lives: {}  Score: {}  High Score: {}",
            self.lives, self.score, self.high_score
        )
    }
}

impl GameObserver for Scoreboard {
    fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::ScoreChanged(score) => {
                self.score = score;
                self.high_score = self.high_score.max(score);
            }
            GameEvent::LivesChanged(lives) => self.lives = lives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_malformed() {
        let scores = HighScores::parse("ada 300\nnot-a-score\nbob x\n\nlinus 1200\n 50\n");
        assert_eq!(scores.entries.len(), 2);
        assert_eq!(scores.top_score(), Some(1200));
        assert_eq!(scores.entries[1].name, "ada");
    }

    #[test]
    fn test_parse_drops_zero_scores() {
        let scores = HighScores::parse("ada 0\nbob 50\n");
        assert_eq!(scores.entries.len(), 1);
        assert_eq!(scores.entries[0].name, "bob");
        // The line itself is well formed
        assert!(HighScoreEntry::parse("ada 0").is_some());
    }

    #[test]
    fn test_name_with_spaces() {
        let entry = HighScoreEntry::parse("grace hopper 900").unwrap();
        assert_eq!(entry.name, "grace hopper");
        assert_eq!(entry.score, 900);
    }

    #[test]
    fn test_line_flattens_newlines() {
        assert_eq!(HighScoreEntry::line("a\nb", 100), "a b 100");
        assert_eq!(HighScoreEntry::line("  ", 0), "anonymous 0");
    }

    #[test]
    fn test_rank_and_truncate() {
        let mut scores = HighScores::new();
        for i in 1..=12 {
            scores.add_score("p", i * 100);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(1200));
        assert!(!scores.qualifies(200));
        assert_eq!(scores.potential_rank(1250), Some(1));
        assert_eq!(scores.potential_rank(0), None);
    }

    #[test]
    fn test_append_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamedata/scores.txt");
        HighScores::append(&path, "ada", 300).unwrap();
        HighScores::append(&path, "bob", 700).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "ada 300\nbob 700\n");

        let scores = HighScores::load(&path).unwrap();
        assert_eq!(scores.top_score(), Some(700));
    }

    #[test]
    fn test_load_missing_store() {
        let dir = tempfile::tempdir().unwrap();
        let scores = HighScores::load(&dir.path().join("scores.txt")).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_scoreboard_tracks_events() {
        let mut board = Scoreboard::new(3, &HighScores::parse("ada 250"));
        board.notify(&GameEvent::ScoreChanged(100));
        assert_eq!(board.high_score, 250);
        board.notify(&GameEvent::ScoreChanged(300));
        board.notify(&GameEvent::LivesChanged(2));
        assert_eq!(board.status_line(), "Lives: 2  Score: 300  High Score: 300");
    }
}
