// src/main.rs
// Entry point for Roamer: sends a random NavigateToPose goal every period and
// logs how each one ends.

use std::error::Error;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use log::{error, info};
use r2r::{Context, Node};
use roamer::cli::Cli;
use roamer::dispatch::{self, Dispatcher, StopReason};
use roamer::ros_interface::{R2rNavigator, spin_node};
use roamer::RandomTarget;
use tokio::task::LocalSet;

/// Load configuration, create the ROS 2 node and run the dispatch schedule
/// on a single-threaded event loop until Ctrl+C or a rejected goal.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting Roamer...");

    let config = Cli::parse().load_config()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = LocalSet::new();
    let summary = local.block_on(&runtime, async move {
        let ctx = Context::create()?;
        let mut node = Node::create(ctx, &config.ros.node_name, &config.ros.namespace)?;
        info!("ROS 2 node {} initialized", config.ros.node_name);

        let client = R2rNavigator::new(&mut node, &config.ros)?;
        tokio::task::spawn_local(spin_node(
            node,
            Duration::from_millis(config.ros.spin_interval_ms),
        ));

        let generator = RandomTarget::new(&config.target);
        let (dispatcher, events) = Dispatcher::new(client, generator, config.dispatch.clone());
        let stop = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        };
        Ok::<_, Box<dyn Error>>(dispatch::run(Rc::new(dispatcher), events, stop).await)
    })?;

    info!(
        "Dispatched {} goals: {} succeeded, {} rejected, {} aborted, {} canceled, {} unknown, {} server unavailable, {} failed",
        summary.started,
        summary.succeeded,
        summary.rejected,
        summary.aborted,
        summary.canceled,
        summary.unknown,
        summary.unavailable,
        summary.failed
    );
    if summary.stop_reason == StopReason::ShutdownRequested {
        info!("Shutting down node.");
    }
    Ok(())
}
