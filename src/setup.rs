use std::fs::OpenOptions;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::WriteLogger;

use crate::config::Config;
use crate::error::SeedError;
use crate::seed::SessionSeed;
use crate::state::EditorState;

/// Load config, start logging and seed the session.
///
/// `seed_arg` (first CLI argument) wins over `seed_path` from config; with
/// neither, the embedded demo session is used.
pub fn startup(seed_arg: Option<PathBuf>) -> Result<EditorState, SeedError> {
    let (config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    init_logging(config.log_level());
    if let Some(e) = config_err {
        log::warn!("{}; using default config", e);
    }

    let seed = match seed_arg.or_else(|| config.editor.seed_path.clone()) {
        Some(path) => {
            log::info!("seeding session from {}", path.display());
            SessionSeed::load(&path)?
        }
        None => SessionSeed::builtin()?,
    };
    Ok(seed.into_state(config.editor.id_policy))
}

fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("paramedit").join("paramedit.log"))
}

/// Log to a file since the terminal belongs to the UI. Runs without a
/// logger if the file cannot be opened.
fn init_logging(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = WriteLogger::init(level, simplelog::Config::default(), file);
    }
}
