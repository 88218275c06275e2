/// Data models for World API payloads.
///
/// All models use serde with the gateway's camelCase wire names. Fields
/// the gateway omits for some records are `Option`; open-shaped blobs
/// (ABI fragments, scan results, POD attestations) stay `serde_json::Value`.
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Service status
// ---------------------------------------------------------------------------

/// Body of `GET health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub ok: bool,
}

// ---------------------------------------------------------------------------
// World deployment configuration
// ---------------------------------------------------------------------------

/// One world deployment as reported by `GET config`: the chain backing the
/// world plus the service URLs a client may need next.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldDeployment {
    pub chain_id: Option<u64>,
    pub name: Option<String>,
    #[serde(default)]
    pub rpc_urls: Option<serde_json::Value>,
    pub indexer_url: Option<String>,
    pub metadata_api_url: Option<String>,
    pub ipfs_api_url: Option<String>,
    /// Deployed world contract addresses, keyed by contract name.
    #[serde(default)]
    pub contracts: Option<serde_json::Value>,
    pub vault_dapp_url: Option<String>,
    pub base_dapp_url: Option<String>,
}

/// Body of `GET abis/config`: ABI artifacts for the deployed world
/// contracts, kept as raw JSON for downstream codegen tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiConfig {
    pub cfg: Option<serde_json::Value>,
    #[serde(default)]
    pub abis: Option<serde_json::Value>,
    #[serde(default)]
    pub systems: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Game data
// ---------------------------------------------------------------------------

/// A fuel grade usable by smart assemblies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fuel {
    pub type_id: Option<u64>,
    pub fuel_type: Option<String>,
    pub efficiency: Option<f64>,
    pub volume: Option<f64>,
}

/// A game item type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameType {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<u64>,
    pub category_name: Option<String>,
    pub group_id: Option<u64>,
    pub group_name: Option<String>,
    pub icon_url: Option<String>,
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub volume: Option<f64>,
    pub portion_size: Option<u64>,
}

/// A deployed smart assembly (gate, storage unit, turret, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartAssembly {
    pub id: Option<String>,
    pub item_id: Option<u64>,
    pub type_id: Option<u64>,
    pub assembly_type: Option<String>,
    pub name: Option<String>,
    pub is_online: Option<bool>,
    pub owner_id: Option<String>,
    pub owner_name: Option<String>,
    pub solar_system_id: Option<u64>,
}

/// A player character bound to an on-chain address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartCharacter {
    pub address: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub corp_id: Option<u64>,
    pub portrait_url: Option<String>,
}

/// One side of a killmail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillmailParticipant {
    pub address: Option<String>,
    pub name: Option<String>,
}

/// A kill report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Killmail {
    pub victim: Option<KillmailParticipant>,
    pub killer: Option<KillmailParticipant>,
    pub solar_system_id: Option<u64>,
    pub loss_type: Option<String>,
    pub timestamp: Option<String>,
}

/// Position in the world map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// A solar system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarSystem {
    pub solar_system_id: Option<u64>,
    pub solar_system_name: Option<String>,
    pub location: Option<Location>,
}

/// One gate jump of the authenticated character.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jump {
    pub id: Option<String>,
    pub from_solar_system_id: Option<u64>,
    pub to_solar_system_id: Option<u64>,
    pub ship_type_id: Option<u64>,
    pub timestamp: Option<String>,
}

/// One scan result of the authenticated character.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scan {
    pub id: Option<String>,
    pub solar_system_id: Option<u64>,
    pub timestamp: Option<String>,
    #[serde(default)]
    pub results: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// POD verification
// ---------------------------------------------------------------------------

/// Body of `POST v2/pod/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodVerification {
    pub is_valid: Option<bool>,
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Metatransactions
// ---------------------------------------------------------------------------

/// A pre-signed metatransaction to relay through the gateway.
///
/// Signing happens in the embedding dApp; the SDK only submits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTransactionRequest {
    /// Address of the signing character.
    pub from: String,
    /// Target world system/contract address.
    pub to: String,
    /// ABI-encoded calldata, hex.
    pub data: String,
    /// Signature over the calldata, hex.
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
}
