/// Initializes `env_logger`. Warnings and progress are always shown, debug output
/// only with `--verbose`.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .format_timestamp(None)
        .init();
}
