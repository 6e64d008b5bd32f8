use std::sync::Arc;

use super::config::Config;

pub struct State {
    pub config: Config,
    pub client: reqwest::Client,
}

impl State {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            config: Config::load(),
            client: reqwest::Client::new(),
        })
    }
}
