/// REST API surface for the World API gateway.
///
/// Typed wrappers for every endpoint, each built from an [`ApiRequest`]
/// and dispatched through the shared [`RequestQueue`]. Paginated listings
/// come in single-page and fetch-all forms.
use log::debug;
use serde_json::json;

use crate::config::WorldConfig;
use crate::errors::WorldError;
use crate::models::*;
use crate::pagination::{fetch_all, parse_page, Page, PageWindow};
use crate::queue::{QueueConfig, RequestQueue};
use crate::request::{ApiRequest, ResponseFormat};
use crate::transport::Transport;

/// Low-level typed client for the World API.
#[derive(Clone)]
pub struct WorldApi {
    queue: RequestQueue,
    config: WorldConfig,
}

impl WorldApi {
    /// Create an API client with an unthrottled request queue.
    pub fn new(config: WorldConfig) -> Self {
        Self::with_queue_config(config, QueueConfig::default())
    }

    /// Create an API client with explicit queue batching configuration.
    pub fn with_queue_config(config: WorldConfig, queue_config: QueueConfig) -> Self {
        Self {
            queue: RequestQueue::new(Transport::new(), queue_config),
            config,
        }
    }

    /// The request queue all calls go through, for callers that need to
    /// dispatch hand-built requests with the same rate limiting.
    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    fn get(&self, path: &str) -> Result<ApiRequest, WorldError> {
        ApiRequest::get(&self.config.api_base, path)
    }

    fn post(&self, path: &str, body: serde_json::Value) -> Result<ApiRequest, WorldError> {
        ApiRequest::post(&self.config.api_base, path, body)
    }

    // -----------------------------------------------------------------------
    // Service status & configuration
    // -----------------------------------------------------------------------

    /// GET health - Gateway liveness.
    pub async fn get_health(&self) -> Result<HealthStatus, WorldError> {
        debug!("api.get_health");
        let response = self.queue.enqueue(self.get("health")?).await?;
        response.decode()
    }

    /// GET config - World deployment configurations.
    pub async fn get_config(&self) -> Result<Vec<WorldDeployment>, WorldError> {
        debug!("api.get_config");
        let response = self.queue.enqueue(self.get("config")?).await?;
        response.decode()
    }

    /// GET abis/config - ABI artifacts for the deployed world contracts.
    pub async fn get_abi_config(&self) -> Result<AbiConfig, WorldError> {
        debug!("api.get_abi_config");
        let response = self.queue.enqueue(self.get("abis/config")?).await?;
        response.decode()
    }

    /// GET v2/fuels - Fuel grades.
    pub async fn get_fuels(&self) -> Result<Vec<Fuel>, WorldError> {
        debug!("api.get_fuels");
        let response = self.queue.enqueue(self.get("v2/fuels")?).await?;
        response.decode()
    }

    // -----------------------------------------------------------------------
    // Game types
    // -----------------------------------------------------------------------

    /// GET v2/types - One page of game types.
    pub async fn get_types(&self, window: PageWindow) -> Result<Page<GameType>, WorldError> {
        debug!("api.get_types limit={} offset={}", window.limit, window.offset);
        let request = self.get("v2/types")?.page(window.limit, window.offset);
        let response = self.queue.enqueue(request).await?;
        parse_page(&response, window)
    }

    /// GET v2/types - Every game type, aggregated across pages.
    pub async fn get_types_all(&self) -> Result<Vec<GameType>, WorldError> {
        debug!("api.get_types_all");
        fetch_all(&self.queue, self.get("v2/types")?, PageWindow::default()).await
    }

    /// GET v2/types/{id} - A single game type.
    pub async fn get_type(&self, id: u64) -> Result<GameType, WorldError> {
        debug!("api.get_type id={}", id);
        let request = self.get(&format!("v2/types/{id}"))?.format(ResponseFormat::Json);
        let response = self.queue.enqueue(request).await?;
        response.decode()
    }

    /// GET v2/types/{id}?format=pod - POD attestation of a game type.
    pub async fn get_type_pod(&self, id: u64) -> Result<serde_json::Value, WorldError> {
        debug!("api.get_type_pod id={}", id);
        let request = self.get(&format!("v2/types/{id}"))?.format(ResponseFormat::Pod);
        let response = self.queue.enqueue(request).await?;
        response.decode()
    }

    // -----------------------------------------------------------------------
    // Smart assemblies
    // -----------------------------------------------------------------------

    /// GET v2/smartassemblies - One page of deployed smart assemblies.
    pub async fn get_smart_assemblies(
        &self,
        window: PageWindow,
    ) -> Result<Page<SmartAssembly>, WorldError> {
        debug!(
            "api.get_smart_assemblies limit={} offset={}",
            window.limit, window.offset
        );
        let request = self
            .get("v2/smartassemblies")?
            .page(window.limit, window.offset);
        let response = self.queue.enqueue(request).await?;
        parse_page(&response, window)
    }

    /// GET v2/smartassemblies - Every smart assembly, aggregated.
    pub async fn get_smart_assemblies_all(&self) -> Result<Vec<SmartAssembly>, WorldError> {
        debug!("api.get_smart_assemblies_all");
        fetch_all(
            &self.queue,
            self.get("v2/smartassemblies")?,
            PageWindow::default(),
        )
        .await
    }

    // -----------------------------------------------------------------------
    // Smart characters
    // -----------------------------------------------------------------------

    /// GET v2/smartcharacters - One page of player characters.
    pub async fn get_smart_characters(
        &self,
        window: PageWindow,
    ) -> Result<Page<SmartCharacter>, WorldError> {
        debug!(
            "api.get_smart_characters limit={} offset={}",
            window.limit, window.offset
        );
        let request = self
            .get("v2/smartcharacters")?
            .page(window.limit, window.offset);
        let response = self.queue.enqueue(request).await?;
        parse_page(&response, window)
    }

    /// GET v2/smartcharacters - Every player character, aggregated.
    pub async fn get_smart_characters_all(&self) -> Result<Vec<SmartCharacter>, WorldError> {
        debug!("api.get_smart_characters_all");
        fetch_all(
            &self.queue,
            self.get("v2/smartcharacters")?,
            PageWindow::default(),
        )
        .await
    }

    /// GET v2/smartcharacters/{address} - A single player character.
    pub async fn get_smart_character(&self, address: &str) -> Result<SmartCharacter, WorldError> {
        debug!("api.get_smart_character address={}", address);
        let request = self.get(&format!("v2/smartcharacters/{address}"))?;
        let response = self.queue.enqueue(request).await?;
        response.decode()
    }

    // -----------------------------------------------------------------------
    // Killmails
    // -----------------------------------------------------------------------

    /// GET v2/killmails - One page of kill reports.
    pub async fn get_killmails(&self, window: PageWindow) -> Result<Page<Killmail>, WorldError> {
        debug!(
            "api.get_killmails limit={} offset={}",
            window.limit, window.offset
        );
        let request = self.get("v2/killmails")?.page(window.limit, window.offset);
        let response = self.queue.enqueue(request).await?;
        parse_page(&response, window)
    }

    /// GET v2/killmails - Every kill report, aggregated.
    pub async fn get_killmails_all(&self) -> Result<Vec<Killmail>, WorldError> {
        debug!("api.get_killmails_all");
        fetch_all(&self.queue, self.get("v2/killmails")?, PageWindow::default()).await
    }

    /// GET v2/killmails/{id} - A single kill report.
    pub async fn get_killmail(&self, id: u64) -> Result<Killmail, WorldError> {
        debug!("api.get_killmail id={}", id);
        let request = self
            .get(&format!("v2/killmails/{id}"))?
            .format(ResponseFormat::Json);
        let response = self.queue.enqueue(request).await?;
        response.decode()
    }

    /// GET v2/killmails/{id}?format=pod - POD attestation of a kill report.
    pub async fn get_killmail_pod(&self, id: u64) -> Result<serde_json::Value, WorldError> {
        debug!("api.get_killmail_pod id={}", id);
        let request = self
            .get(&format!("v2/killmails/{id}"))?
            .format(ResponseFormat::Pod);
        let response = self.queue.enqueue(request).await?;
        response.decode()
    }

    // -----------------------------------------------------------------------
    // Solar systems
    // -----------------------------------------------------------------------

    /// GET v2/solarsystems/{id} - A single solar system.
    pub async fn get_solar_system(&self, id: u64) -> Result<SolarSystem, WorldError> {
        debug!("api.get_solar_system id={}", id);
        let request = self
            .get(&format!("v2/solarsystems/{id}"))?
            .format(ResponseFormat::Json);
        let response = self.queue.enqueue(request).await?;
        response.decode()
    }

    /// GET v2/solarsystems/{id}?format=pod - POD attestation of a solar system.
    pub async fn get_solar_system_pod(&self, id: u64) -> Result<serde_json::Value, WorldError> {
        debug!("api.get_solar_system_pod id={}", id);
        let request = self
            .get(&format!("v2/solarsystems/{id}"))?
            .format(ResponseFormat::Pod);
        let response = self.queue.enqueue(request).await?;
        response.decode()
    }

    // -----------------------------------------------------------------------
    // Authenticated character data
    // -----------------------------------------------------------------------

    /// GET v2/smartcharacters/me/jumps - One page of the authenticated
    /// character's gate jumps.
    pub async fn get_jumps(&self, bearer: &str, window: PageWindow) -> Result<Page<Jump>, WorldError> {
        debug!("api.get_jumps limit={} offset={}", window.limit, window.offset);
        let request = self
            .get("v2/smartcharacters/me/jumps")?
            .bearer(bearer)
            .page(window.limit, window.offset);
        let response = self.queue.enqueue(request).await?;
        parse_page(&response, window)
    }

    /// GET v2/smartcharacters/me/jumps - Every gate jump, aggregated.
    pub async fn get_jumps_all(&self, bearer: &str) -> Result<Vec<Jump>, WorldError> {
        debug!("api.get_jumps_all");
        let prototype = self.get("v2/smartcharacters/me/jumps")?.bearer(bearer);
        fetch_all(&self.queue, prototype, PageWindow::default()).await
    }

    /// GET v2/smartcharacters/me/jumps/{id} - A single gate jump.
    pub async fn get_jump(&self, bearer: &str, id: u64) -> Result<Jump, WorldError> {
        debug!("api.get_jump id={}", id);
        let request = self
            .get(&format!("v2/smartcharacters/me/jumps/{id}"))?
            .bearer(bearer)
            .format(ResponseFormat::Json);
        let response = self.queue.enqueue(request).await?;
        response.decode()
    }

    /// GET v2/smartcharacters/me/scans - One page of the authenticated
    /// character's scan results.
    pub async fn get_scans(&self, bearer: &str, window: PageWindow) -> Result<Page<Scan>, WorldError> {
        debug!("api.get_scans limit={} offset={}", window.limit, window.offset);
        let request = self
            .get("v2/smartcharacters/me/scans")?
            .bearer(bearer)
            .page(window.limit, window.offset);
        let response = self.queue.enqueue(request).await?;
        parse_page(&response, window)
    }

    /// GET v2/smartcharacters/me/scans - Every scan result, aggregated.
    pub async fn get_scans_all(&self, bearer: &str) -> Result<Vec<Scan>, WorldError> {
        debug!("api.get_scans_all");
        let prototype = self.get("v2/smartcharacters/me/scans")?.bearer(bearer);
        fetch_all(&self.queue, prototype, PageWindow::default()).await
    }

    /// GET v2/smartcharacters/me/scans/{id} - A single scan result.
    pub async fn get_scan(&self, bearer: &str, id: u64) -> Result<Scan, WorldError> {
        debug!("api.get_scan id={}", id);
        let request = self
            .get(&format!("v2/smartcharacters/me/scans/{id}"))?
            .bearer(bearer)
            .format(ResponseFormat::Json);
        let response = self.queue.enqueue(request).await?;
        response.decode()
    }

    // -----------------------------------------------------------------------
    // POD verification & metatransactions
    // -----------------------------------------------------------------------

    /// POST v2/pod/verify - Verify a POD attestation.
    pub async fn verify_pod(&self, pod: &serde_json::Value) -> Result<PodVerification, WorldError> {
        debug!("api.verify_pod");
        let request = self.post("v2/pod/verify", json!({ "pod": pod }))?;
        let response = self.queue.enqueue(request).await?;
        response.decode()
    }

    /// POST metatransaction - Relay a pre-signed metatransaction.
    ///
    /// The gateway acknowledges with 201 and an empty body.
    pub async fn submit_metatransaction(
        &self,
        transaction: &MetaTransactionRequest,
    ) -> Result<(), WorldError> {
        debug!(
            "api.submit_metatransaction from={} to={}",
            transaction.from, transaction.to
        );
        let request = self.post("metatransaction", serde_json::to_value(transaction)?)?;
        self.queue.enqueue(request).await?;
        Ok(())
    }
}
