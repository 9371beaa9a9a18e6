use anyhow::Result;

use crate::backend::client::BackendClient;
use crate::carousel::SignCarousel;
use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub backend: BackendClient,
    pub carousel: SignCarousel,
}

impl AppState {
    /// Must be called inside the runtime, the carousel spawns its task here.
    pub fn new(config: Config) -> Result<Self> {
        let backend = BackendClient::new(&config.backend_url)?;
        let carousel = SignCarousel::start(config.carousel_interval);

        Ok(Self {
            config,
            backend,
            carousel,
        })
    }
}
