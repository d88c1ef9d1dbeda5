//! Pulse Backend - Main Entry Point
//!
//! Starts the web API server for the learner dashboard and journal.

use clap::Parser;
use pulse_backend::{api::run_server, config::ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::parse();

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Pulse - Learner Dashboard & Mood Journal     ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    run_server(config).await
}
