/// Tests for the typed endpoint surface and the high-level client.
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use frontier_sdk::{MetaTransactionRequest, PageWindow, WorldClient, WorldConfig};

async fn client(server: &MockServer) -> WorldClient {
    WorldClient::with_config(WorldConfig::custom(server.uri()))
}

fn empty_page() -> serde_json::Value {
    json!({ "data": [], "metadata": { "total": 0 } })
}

#[tokio::test]
async fn health_reports_ok_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server).await.health().await);
}

#[tokio::test]
async fn health_is_false_on_gateway_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(!client(&server).await.health().await);
}

#[tokio::test]
async fn health_is_false_when_not_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": false })))
        .mount(&server)
        .await;

    assert!(!client(&server).await.health().await);
}

#[tokio::test]
async fn jumps_attach_bearer_and_page_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/smartcharacters/me/jumps"))
        .and(header("Authorization", "Bearer tok123"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&server)
        .await;

    let jumps = client(&server).await.jumps("tok123").await.unwrap();
    assert!(jumps.is_empty());
}

#[tokio::test]
async fn scans_attach_bearer_and_page_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/smartcharacters/me/scans"))
        .and(header("Authorization", "Bearer tok456"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&server)
        .await;

    let scans = client(&server).await.scans("tok456").await.unwrap();
    assert!(scans.is_empty());
}

#[tokio::test]
async fn type_detail_requests_json_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/types/42"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "name": "Lens Compound",
            "categoryName": "Material",
            "volume": 0.1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let game_type = client(&server).await.type_by_id(42).await.unwrap();
    assert_eq!(game_type.id, Some(42));
    assert_eq!(game_type.name.as_deref(), Some("Lens Compound"));
    assert_eq!(game_type.category_name.as_deref(), Some("Material"));
}

#[tokio::test]
async fn type_detail_pod_format_returns_raw_attestation() {
    let server = MockServer::start().await;
    let pod = json!({ "entries": { "id": 42 }, "signerPublicKey": "0xkey" });
    Mock::given(method("GET"))
        .and(path("/v2/types/42"))
        .and(query_param("format", "pod"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pod.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let attested = client(&server).await.api.get_type_pod(42).await.unwrap();
    assert_eq!(attested, pod);
}

#[tokio::test]
async fn smart_character_detail_uses_address_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/smartcharacters/0xabc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address": "0xabc",
            "name": "Pilot"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let character = client(&server).await.smart_character("0xabc").await.unwrap();
    assert_eq!(character.address.as_deref(), Some("0xabc"));
    assert_eq!(character.name.as_deref(), Some("Pilot"));
}

#[tokio::test]
async fn solar_system_detail_decodes_location() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/solarsystems/30000001"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "solarSystemId": 30000001u64,
            "solarSystemName": "Nod",
            "location": { "x": 1.0, "y": -2.5, "z": 3.25 }
        })))
        .mount(&server)
        .await;

    let system = client(&server).await.solar_system(30000001).await.unwrap();
    assert_eq!(system.solar_system_name.as_deref(), Some("Nod"));
    assert_eq!(system.location.unwrap().y, Some(-2.5));
}

#[tokio::test]
async fn types_aggregates_across_pages() {
    let server = MockServer::start().await;
    let first: Vec<_> = (0..100).map(|id| json!({ "id": id })).collect();
    let second: Vec<_> = (100..120).map(|id| json!({ "id": id })).collect();
    Mock::given(method("GET"))
        .and(path("/v2/types"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": first, "metadata": { "total": 120 } })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/types"))
        .and(query_param("offset", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": second, "metadata": { "total": 120 } })),
        )
        .mount(&server)
        .await;

    let types = client(&server).await.types().await.unwrap();
    assert_eq!(types.len(), 120);
    assert_eq!(types[119].id, Some(119));
}

#[tokio::test]
async fn types_page_returns_single_window() {
    let server = MockServer::start().await;
    let data: Vec<_> = (40..50).map(|id| json!({ "id": id })).collect();
    Mock::given(method("GET"))
        .and(path("/v2/types"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "40"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": data, "metadata": { "total": 500 } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .await
        .types_page(PageWindow::new(10, 40))
        .await
        .unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].id, Some(40));
}

#[tokio::test]
async fn world_configs_and_fuels_hit_documented_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "chainId": 695569,
            "name": "stillness",
            "indexerUrl": "https://indexer.example"
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/fuels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "typeId": 84868,
            "fuelType": "SOF-40",
            "efficiency": 0.4
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let configs = client.world_configs().await.unwrap();
    assert_eq!(configs[0].chain_id, Some(695569));

    let fuels = client.fuels().await.unwrap();
    assert_eq!(fuels[0].fuel_type.as_deref(), Some("SOF-40"));
}

#[tokio::test]
async fn metatransaction_posts_signed_payload() {
    let server = MockServer::start().await;
    let expected = json!({
        "from": "0xfeed",
        "to": "0xworld",
        "data": "0xdeadbeef",
        "signature": "0xsig"
    });
    Mock::given(method("POST"))
        .and(path("/metatransaction"))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let transaction = MetaTransactionRequest {
        from: "0xfeed".into(),
        to: "0xworld".into(),
        data: "0xdeadbeef".into(),
        signature: "0xsig".into(),
        nonce: None,
    };

    client(&server)
        .await
        .submit_metatransaction(&transaction)
        .await
        .unwrap();
}

#[tokio::test]
async fn verify_pod_wraps_attestation_in_body() {
    let server = MockServer::start().await;
    let pod = json!({ "entries": { "id": 7 } });
    Mock::given(method("POST"))
        .and(path("/v2/pod/verify"))
        .and(body_json(json!({ "pod": pod })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "isValid": true })))
        .expect(1)
        .mount(&server)
        .await;

    let verdict = client(&server).await.verify_pod(&pod).await.unwrap();
    assert_eq!(verdict.is_valid, Some(true));
}
