use std::sync::Arc;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::services::DiaryService;
use crate::weather::WeatherClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub weather: WeatherClient,
    pub diary: DiaryService,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn DatabaseBackend>, weather: WeatherClient) -> Self {
        let diary = DiaryService::new(db.clone(), weather.clone());

        Self {
            config: Arc::new(config),
            db,
            weather,
            diary,
        }
    }
}
