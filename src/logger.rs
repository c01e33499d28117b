use std::{
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Once,
    },
};

static INIT: Once = Once::new();
static IS_INITIALIZED: AtomicBool = AtomicBool::new(false);

pub fn is_active() -> bool {
    IS_INITIALIZED.load(Ordering::SeqCst)
}

pub fn level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Debug
    }
}

/// The MIDI backend only reports warnings unless asked to be verbose.
pub fn backend_level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    }
}

/// Route every log record of this process to `file`.
pub fn start(id: &str, file: impl AsRef<Path>, verbose: bool) -> anyhow::Result<()> {
    if is_active() {
        anyhow::bail!("attempted to setup logger more than once");
    }

    if let Some(dir) = file.as_ref().parent() {
        std::fs::create_dir_all(dir)?;
    }

    let id = format!("{id}:{}", std::process::id());

    fern::Dispatch::new()
        .format(move |out, msg, record| {
            let time = humantime::format_rfc3339_seconds(std::time::SystemTime::now());

            if cfg!(debug_assertions) {
                out.finish(format_args!(
                    "[ {id} ] : [ {time} ] : [ {} {} ] : {msg}",
                    record.target(),
                    record.level(),
                ))
            } else {
                out.finish(format_args!("[ {id} ] : [ {time} ] : {msg}"))
            }
        })
        .level(level(verbose))
        .level_for("midir", backend_level(verbose))
        .chain(fern::log_file(file.as_ref())?)
        .apply()?;

    log::trace!("started");

    INIT.call_once(|| IS_INITIALIZED.store(true, Ordering::SeqCst));
    Ok(())
}
