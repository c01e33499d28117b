pub mod commands;
pub mod files;
pub mod logger;
pub mod midi;
pub mod song;
