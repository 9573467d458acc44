//! Sortscope Visualization Server
//!
//! Generate an input array and serve the visualizer frontend.

use std::env;

use sortscope_vis::{EngineConfig, SortEngine, VisServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let array_size: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(40);

    let port: u16 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3000);

    let engine = SortEngine::new(EngineConfig {
        array_size,
        ..EngineConfig::default()
    });

    println!("Sortscope Visualizer");
    println!("====================");
    println!();
    println!("Bars: {}", array_size);
    println!();
    println!("Starting visualization server on http://localhost:{}", port);
    println!("Open in a browser to control playback.");
    println!();

    let server = VisServer::new(engine);
    server.serve(port).await?;

    Ok(())
}
