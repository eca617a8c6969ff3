mod annotations;
mod assets;
mod config;
mod core;
mod domain;
mod localize;
mod review;
mod session;
mod widget;

fn main() -> cosmic::iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    localize::localize();

    let config = config::ReviewConfig::load();
    // Write back so every key exists on disk for hand editing
    config.save();

    let startup = match core::startup::Startup::prepare(config) {
        Ok(startup) => startup,
        Err(err) => {
            log::error!("Cannot start review: {err:#}");
            std::process::exit(1);
        }
    };
    core::app::run(startup)
}
