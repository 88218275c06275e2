/// Quickstart: check gateway health and list world data.
///
/// Run with: cargo run --example quickstart
use frontier_sdk::{PageWindow, World, WorldClient, WorldError};

#[tokio::main]
async fn main() -> Result<(), WorldError> {
    let client = WorldClient::new(World::Stillness);

    if !client.health().await {
        eprintln!("gateway is not healthy, aborting");
        return Ok(());
    }
    println!("gateway is healthy");

    let configs = client.world_configs().await?;
    for config in &configs {
        println!(
            "world {:?} on chain {:?}",
            config.name, config.chain_id
        );
    }

    let fuels = client.fuels().await?;
    println!("{} fuel grades", fuels.len());

    // One page of types; use client.types() for the full aggregation.
    let page = client.api.get_types(PageWindow::new(10, 0)).await?;
    println!("{} types total, first page:", page.total);
    for game_type in &page.items {
        println!("  {:?} {:?}", game_type.id, game_type.name);
    }

    Ok(())
}
