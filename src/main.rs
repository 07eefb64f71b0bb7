#![allow(non_snake_case)]

use pearl::config::Config;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(pearl::client::App);
}
