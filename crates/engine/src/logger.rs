use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::{move_to_algebraic, Move};

/// In-memory game log, flushed to disk when a game ends.
#[derive(Debug)]
pub struct ChessLogger {
    pub log_buffer: String,
    pub advanced_logging: bool,
    game_start_time: Instant,
    move_count: u32,
    indent_level: usize,
}

impl ChessLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            advanced_logging: false,
            game_start_time: Instant::now(),
            move_count: 0,
            indent_level: 0,
        };

        logger.log("🎯 === Chess Engine Game Log Started ===");
        logger.log(&format!("📅 Date: {}", chrono::Local::now().format("%m/%d/%Y %H:%M:%S")));
        logger
    }

    pub fn should_log_advanced(&self) -> bool {
        self.advanced_logging
    }

    pub fn enable_advanced_logging(&mut self) {
        self.advanced_logging = true;
        self.log("🔬 Advanced logging enabled - per-move evaluations recorded");
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_with_indent(&mut self, message: &str) {
        let indent = "  ".repeat(self.indent_level);
        self.log_buffer.push_str(&format!("{}{}\n", indent, message));
    }

    pub fn increase_indent(&mut self) { self.indent_level += 1; }
    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 { self.indent_level -= 1; }
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    // 🎯 MOVE LOGGING
    pub fn log_ai_move(&mut self, mv: Move, time_ms: u64, eval: i32) {
        self.move_count += 1;
        self.log(&format!(
            "{}. {} (AI move - {}ms) Eval: {} {}",
            self.move_count,
            move_to_algebraic(mv),
            time_ms,
            eval,
            if eval > 0 { "📈" } else { "📉" }
        ));
    }

    pub fn log_game_aborted(&mut self, reason: &str) {
        self.log(&format!("🛑 Game finished abruptly - {}", reason));
    }

    /// Write the buffer to `<dir>/<timestamp>.txt` and return the path.
    pub fn save_to_file(&mut self, dir: impl AsRef<Path>, reason: &str) -> io::Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let now = chrono::Local::now();
        let path = dir.join(format!("{}.txt", now.format("%m_%d_%Y_%H_%M_%S")));

        self.log(&format!("💾 Game ended: {} - Saving log", reason));
        self.log(&format!(
            "⏱️ {} moves in {}ms",
            self.move_count,
            self.game_start_time.elapsed().as_millis()
        ));

        let mut file = File::create(&path)?;
        file.write_all(self.log_buffer.as_bytes())?;
        Ok(path)
    }
}

impl Default for ChessLogger {
    fn default() -> Self {
        Self::new()
    }
}
