#![cfg(feature = "integration")]
/// Integration tests against the live Stillness gateway.
///
/// These tests require network access and hit the public World API.
/// Run with: cargo test --features integration --test integration_tests -- --test-threads=1
use serial_test::serial;

use frontier_sdk::{PageWindow, World, WorldClient};

fn live_client() -> WorldClient {
    WorldClient::new(World::Stillness)
}

#[tokio::test]
#[serial]
async fn gateway_is_healthy() {
    assert!(live_client().health().await);
}

#[tokio::test]
#[serial]
async fn world_configs_are_published() {
    let configs = live_client().world_configs().await.unwrap();
    assert!(!configs.is_empty());
    assert!(configs[0].chain_id.is_some());
}

#[tokio::test]
#[serial]
async fn fuels_are_listed() {
    let fuels = live_client().fuels().await.unwrap();
    assert!(!fuels.is_empty());
}

#[tokio::test]
#[serial]
async fn one_page_of_types_decodes() {
    let client = live_client();
    let page = client.api.get_types(PageWindow::new(10, 0)).await.unwrap();
    assert!(page.total > 0);
    assert!(!page.items.is_empty());
    assert!(page.items.len() <= 10);
}
