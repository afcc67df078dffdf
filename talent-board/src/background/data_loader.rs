use crate::events::DataEvent;
use crate::utils::markup::strip_markup;
use std::sync::Arc;
use talent_api::{endpoints::talents::Profile, Client, Request};
use tokio::sync::mpsc;

/// Fetches talents from the API and reports the outcome as a `DataEvent`
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(api_client: Arc<Client>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            api_client,
            data_tx,
        }
    }

    /// Load the full talent list. The result is tagged with `request_id`.
    pub async fn load_talents(&self, request_id: u64) {
        tracing::info!("Loading talents (request {})", request_id);

        let req = Request::talents().list();
        match self.api_client.send(req).await {
            Ok(talents) => {
                tracing::info!("Loaded {} talents from API", talents.len());
                self.send(DataEvent::TalentsLoaded {
                    request_id,
                    talents: prepare_talents(talents),
                });
            }
            Err(e) => {
                match e.status() {
                    Some(status) => {
                        tracing::error!(%status, "Talents API returned an error: {}", e)
                    }
                    None => tracing::error!("Failed to load talents from API: {}", e),
                }
                self.send(DataEvent::LoadError {
                    request_id,
                    error: e.to_string(),
                });
            }
        }
    }

    fn send(&self, event: DataEvent) {
        // The receiver is gone once the UI has shut down
        if self.data_tx.send(event).is_err() {
            tracing::debug!("UI closed before talents result could be delivered");
        }
    }
}

/// Normalize freshly fetched profiles: fill `display_name` and reduce bios to
/// plain text. Order is preserved.
pub fn prepare_talents(talents: Vec<Profile>) -> Vec<Profile> {
    talents
        .into_iter()
        .map(|talent| {
            let mut talent = talent.with_display_name();
            talent.bio = strip_markup(&talent.bio);
            talent
        })
        .collect()
}
