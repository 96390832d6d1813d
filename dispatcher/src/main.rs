use std::process;

use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    println!("Dispatcher started");

    if let Err(e) = dispatcher::modules::run() {
        error!("{}", e);
        process::exit(1);
    }
}
