//! Application state.

use std::sync::Arc;

use carelink_auth::TokenService;
use carelink_models::Collection;
use carelink_store::{JsonStore, StoreResult};

use crate::config::ApiConfig;

/// Shared application state: one store per collection plus the token service.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub clients: Arc<JsonStore>,
    pub providers: Arc<JsonStore>,
    pub offers: Arc<JsonStore>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// Open the collection files under the configured data directory and
    /// build the token service.
    pub async fn new(config: ApiConfig) -> StoreResult<Self> {
        let open = |collection: Collection| config.data_dir.join(collection.file_name());

        let clients = JsonStore::open(open(Collection::Clients)).await?;
        let providers = JsonStore::open(open(Collection::Providers)).await?;
        let offers = JsonStore::open(open(Collection::Offers)).await?;
        let tokens = TokenService::new(&config.token_secret);

        Ok(Self {
            config,
            clients: Arc::new(clients),
            providers: Arc::new(providers),
            offers: Arc::new(offers),
            tokens: Arc::new(tokens),
        })
    }

    /// Store backing a collection.
    pub fn store(&self, collection: Collection) -> &Arc<JsonStore> {
        match collection {
            Collection::Clients => &self.clients,
            Collection::Providers => &self.providers,
            Collection::Offers => &self.offers,
        }
    }
}
