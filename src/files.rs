use std::path::PathBuf;

/// Default locations stored in `~/.midiplay`
///
/// .
/// └── log
///    └── midiplay.log
///
pub mod locations {
    use super::*;

    pub fn midiplay() -> Option<PathBuf> {
        Some(dirs::home_dir()?.join(".midiplay"))
    }

    pub fn log() -> Option<PathBuf> {
        Some(midiplay()?.join("log"))
    }
}

pub fn log() -> Option<PathBuf> {
    Some(locations::log()?.join("midiplay.log"))
}
