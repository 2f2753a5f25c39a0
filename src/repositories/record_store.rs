use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::json;

use crate::{
    auth::service_account::{ServiceAccountAuth, ServiceAccountKey, SHEETS_SCOPES},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::StudyRecord,
};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const DEFAULT_SHEET_RANGE: &str = "Sheet1";

/// Append-only sink for study history.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn append(&self, record: &StudyRecord) -> AppResult<()>;
}

/// Appends rows to the first sheet of a Google spreadsheet.
pub struct GoogleSheetsStore {
    client: reqwest::Client,
    auth: ServiceAccountAuth,
    append_url: String,
}

impl GoogleSheetsStore {
    pub fn new(spreadsheet_id: &str, key: ServiceAccountKey) -> AppResult<Self> {
        let client = reqwest::Client::new();
        let auth = ServiceAccountAuth::new(key, &SHEETS_SCOPES, client.clone())?;

        Ok(Self {
            client,
            auth,
            append_url: append_url(SHEETS_API_BASE, spreadsheet_id, DEFAULT_SHEET_RANGE),
        })
    }

    /// Builds the store when `SPREADSHEET_ID` is configured and the key file loads.
    pub async fn from_config(config: &Config) -> AppResult<Option<Self>> {
        let Some(spreadsheet_id) = config.spreadsheet_id.as_deref() else {
            return Ok(None);
        };

        let key = ServiceAccountKey::from_file(&config.google_credentials_path).await?;
        Self::new(spreadsheet_id, key).map(Some)
    }
}

fn append_url(base: &str, spreadsheet_id: &str, range: &str) -> String {
    format!(
        "{}/{}/values/{}:append?valueInputOption=USER_ENTERED",
        base, spreadsheet_id, range
    )
}

#[async_trait]
impl RecordStore for GoogleSheetsStore {
    async fn append(&self, record: &StudyRecord) -> AppResult<()> {
        let token = self.auth.access_token().await?;

        let response = self
            .client
            .post(&self.append_url)
            .bearer_auth(token.expose_secret())
            .json(&json!({ "values": [record.to_row()] }))
            .send()
            .await
            .map_err(|e| AppError::Persistence(format!("Sheets append failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Persistence(format!(
                "Sheets API returned {}: {}",
                status, body
            )));
        }

        log::info!("Appended study record for '{}'", record.subject);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_url_targets_first_sheet() {
        assert_eq!(
            append_url(SHEETS_API_BASE, "abc123", DEFAULT_SHEET_RANGE),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/Sheet1:append?valueInputOption=USER_ENTERED"
        );
    }

    #[actix_web::test]
    async fn from_config_without_spreadsheet_is_disabled() {
        let config = Config::test_config();

        let store = GoogleSheetsStore::from_config(&config).await.unwrap();
        assert!(store.is_none());
    }

    #[actix_web::test]
    async fn from_config_with_missing_credentials_fails() {
        let mut config = Config::test_config();
        config.spreadsheet_id = Some("abc123".to_string());
        config.google_credentials_path = "/nonexistent/credentials.json".to_string();

        let result = GoogleSheetsStore::from_config(&config).await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[actix_web::test]
    async fn mock_store_records_appends() {
        let mut store = MockRecordStore::new();
        store
            .expect_append()
            .withf(|record: &StudyRecord| record.subject == "二次方程式" && record.score == Some(70))
            .times(1)
            .returning(|_| Ok(()));

        let record = StudyRecord::new("二次方程式", Some(70), "符号ミス");
        assert!(store.append(&record).await.is_ok());
    }
}
