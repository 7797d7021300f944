// src/main.rs

use env_logger::Env;

use contest_math::config::MathConfig;

mod demo_cli;

fn main() {
    let config = MathConfig::load().unwrap_or_else(|e| {
        eprintln!("config error: {}, falling back to defaults", e);
        MathConfig::default()
    });

    // Initialize the logger
    let env = Env::default()
        .filter_or("CONTEST_MATH_LOG_LEVEL", config.log_level.clone())
        .write_style_or("CONTEST_MATH_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = demo_cli::run(&args, &config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
