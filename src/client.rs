/// High-level WorldClient for the World API gateway.
///
/// This is the primary entry point for SDK users. Listing methods return
/// whole result sets (every page aggregated); page-level access and POD
/// variants live on the underlying [`WorldApi`].
use log::warn;

use crate::api::WorldApi;
use crate::config::{World, WorldConfig};
use crate::errors::WorldError;
use crate::models::*;
use crate::pagination::PageWindow;
use crate::queue::QueueConfig;

/// The high-level World API client.
#[derive(Clone)]
pub struct WorldClient {
    pub api: WorldApi,
    pub config: WorldConfig,
}

impl WorldClient {
    /// Create a client for the given world deployment.
    pub fn new(world: World) -> Self {
        let config = WorldConfig::from_world(world);
        Self {
            api: WorldApi::new(config.clone()),
            config,
        }
    }

    /// Create a client with a custom configuration.
    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            api: WorldApi::new(config.clone()),
            config,
        }
    }

    /// Create a client with explicit request-queue batching, e.g. to stay
    /// under a gateway rate limit.
    pub fn with_queue_config(config: WorldConfig, queue_config: QueueConfig) -> Self {
        Self {
            api: WorldApi::with_queue_config(config.clone(), queue_config),
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Service status & configuration
    // -----------------------------------------------------------------------

    /// Tells you if the World API is ok.
    ///
    /// Never fails: any transport or shape error reads as unhealthy. Use
    /// [`WorldApi::get_health`] when the cause matters.
    pub async fn health(&self) -> bool {
        match self.api.get_health().await {
            Ok(status) => status.ok,
            Err(error) => {
                warn!("could not fetch health: {error}");
                false
            }
        }
    }

    /// Get the world deployment configurations.
    pub async fn world_configs(&self) -> Result<Vec<WorldDeployment>, WorldError> {
        self.api.get_config().await
    }

    /// Get the ABI artifacts for the deployed world contracts.
    pub async fn abi_config(&self) -> Result<AbiConfig, WorldError> {
        self.api.get_abi_config().await
    }

    /// Get all fuel grades.
    pub async fn fuels(&self) -> Result<Vec<Fuel>, WorldError> {
        self.api.get_fuels().await
    }

    // -----------------------------------------------------------------------
    // Game data
    // -----------------------------------------------------------------------

    /// Get all the game types.
    pub async fn types(&self) -> Result<Vec<GameType>, WorldError> {
        self.api.get_types_all().await
    }

    /// Get a single game type.
    pub async fn type_by_id(&self, id: u64) -> Result<GameType, WorldError> {
        self.api.get_type(id).await
    }

    /// Get all deployed smart assemblies.
    pub async fn smart_assemblies(&self) -> Result<Vec<SmartAssembly>, WorldError> {
        self.api.get_smart_assemblies_all().await
    }

    /// Get all player characters.
    pub async fn smart_characters(&self) -> Result<Vec<SmartCharacter>, WorldError> {
        self.api.get_smart_characters_all().await
    }

    /// Get a single player character by address.
    pub async fn smart_character(&self, address: &str) -> Result<SmartCharacter, WorldError> {
        self.api.get_smart_character(address).await
    }

    /// Get all kill reports.
    pub async fn killmails(&self) -> Result<Vec<Killmail>, WorldError> {
        self.api.get_killmails_all().await
    }

    /// Get a single kill report.
    pub async fn killmail(&self, id: u64) -> Result<Killmail, WorldError> {
        self.api.get_killmail(id).await
    }

    /// Get a single solar system.
    pub async fn solar_system(&self, id: u64) -> Result<SolarSystem, WorldError> {
        self.api.get_solar_system(id).await
    }

    // -----------------------------------------------------------------------
    // Authenticated character data
    // -----------------------------------------------------------------------

    /// Get all gate jumps of the authenticated character.
    pub async fn jumps(&self, bearer: &str) -> Result<Vec<Jump>, WorldError> {
        self.api.get_jumps_all(bearer).await
    }

    /// Get a single gate jump of the authenticated character.
    pub async fn jump(&self, bearer: &str, id: u64) -> Result<Jump, WorldError> {
        self.api.get_jump(bearer, id).await
    }

    /// Get all scan results of the authenticated character.
    pub async fn scans(&self, bearer: &str) -> Result<Vec<Scan>, WorldError> {
        self.api.get_scans_all(bearer).await
    }

    /// Get a single scan result of the authenticated character.
    pub async fn scan(&self, bearer: &str, id: u64) -> Result<Scan, WorldError> {
        self.api.get_scan(bearer, id).await
    }

    /// Get one page of game types, when the full aggregation is too much.
    pub async fn types_page(&self, window: PageWindow) -> Result<Vec<GameType>, WorldError> {
        Ok(self.api.get_types(window).await?.items)
    }

    // -----------------------------------------------------------------------
    // POD verification & metatransactions
    // -----------------------------------------------------------------------

    /// Verify a POD attestation with the gateway.
    pub async fn verify_pod(&self, pod: &serde_json::Value) -> Result<PodVerification, WorldError> {
        self.api.verify_pod(pod).await
    }

    /// Relay a pre-signed metatransaction through the gateway.
    pub async fn submit_metatransaction(
        &self,
        transaction: &MetaTransactionRequest,
    ) -> Result<(), WorldError> {
        self.api.submit_metatransaction(transaction).await
    }
}
