use env_logger::Env;
use log::error;
use lumaseam::{runner, Config, SeamError};
use std::process;

fn try_main() -> Result<(), SeamError> {
    let matches = Config::app().get_matches();
    let config = Config::from_matches(&matches)?;
    runner::run(&config)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = try_main() {
        error!("{}", err);
        process::exit(1);
    }
}
