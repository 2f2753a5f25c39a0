use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{GoogleSheetsStore, RecordStore},
    services::{
        grading_service::GradingService,
        homework_service::HomeworkService,
        model_service::{build_generator, TextGenerator},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub grading_service: Arc<GradingService>,
    pub homework_service: Arc<HomeworkService>,
    /// Optional persistence hook; no route writes to it.
    pub record_store: Option<Arc<dyn RecordStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let generator = build_generator(&config)?;

        let record_store: Option<Arc<dyn RecordStore>> =
            match GoogleSheetsStore::from_config(&config).await {
                Ok(Some(store)) => {
                    log::info!("Spreadsheet record store enabled");
                    Some(Arc::new(store))
                }
                Ok(None) => None,
                Err(e) => {
                    log::warn!("Spreadsheet record store disabled: {}", e);
                    None
                }
            };

        Ok(Self::with_generator(config, generator).with_record_store(record_store))
    }

    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(generator.clone())),
            grading_service: Arc::new(GradingService::new(generator.clone())),
            homework_service: Arc::new(HomeworkService::new(generator)),
            record_store: None,
            config: Arc::new(config),
        }
    }

    pub fn with_record_store(mut self, record_store: Option<Arc<dyn RecordStore>>) -> Self {
        self.record_store = record_store;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repositories::record_store::MockRecordStore, services::model_service::MockTextGenerator};

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[actix_web::test]
    async fn test_new_without_spreadsheet_has_no_store() {
        let state = AppState::new(Config::test_config()).await.unwrap();

        assert!(state.record_store.is_none());
        assert_eq!(state.config.model_name, "gemini-2.5-flash");
    }

    #[test]
    fn test_with_record_store_injects_hook() {
        let state = AppState::with_generator(Config::test_config(), Arc::new(MockTextGenerator::new()))
            .with_record_store(Some(Arc::new(MockRecordStore::new())));

        assert!(state.record_store.is_some());
    }
}
