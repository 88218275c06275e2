/// Deployment configuration for World API endpoints.
/// Publicly reachable World API deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum World {
    /// The live game world.
    Stillness,
    /// The pre-release test world.
    Nova,
}

/// Configuration holding the gateway base URL for a specific world.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    pub api_base: String,
}

impl WorldConfig {
    pub fn from_world(world: World) -> Self {
        match world {
            World::Stillness => Self {
                api_base: "https://blockchain-gateway-stillness.live.tech.evefrontier.com".into(),
            },
            World::Nova => Self {
                api_base: "https://blockchain-gateway-nova.nursery.reitnorf.com".into(),
            },
        }
    }

    /// Point the client at a self-hosted or proxied gateway.
    pub fn custom(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::from_world(World::Stillness)
    }
}
