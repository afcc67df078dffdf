use super::{AppState, LoadingState, LOAD_ERROR_MESSAGE};
use crate::events::DataEvent;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::TalentsLoaded {
            request_id,
            talents,
        } => {
            let talents_state = &mut state.talents;
            if !talents_state.is_current_request(request_id) {
                tracing::debug!(
                    "Dropping stale talents result {} (current load is {})",
                    request_id,
                    talents_state.request_id
                );
                return;
            }

            tracing::info!("Showing {} talents", talents.len());
            talents_state.talents = talents;
            talents_state.talents_loading = LoadingState::Loaded;
            talents_state.reset_selection();
        }

        DataEvent::LoadError { request_id, error } => {
            let talents_state = &mut state.talents;
            if !talents_state.is_current_request(request_id) {
                tracing::debug!("Dropping stale load error {}: {}", request_id, error);
                return;
            }

            tracing::error!("Talents load {} failed: {}", request_id, error);
            talents_state.talents_loading = LoadingState::Error(LOAD_ERROR_MESSAGE.to_string());
        }
    }
}
