//! User-tap binder: weather report to conversational completion.

use lens_core::types::{ChatMessage, CompletionRequest, CompletionResponse};
use lens_core::{ApiError, CompletionsApi};
use tracing::{info, warn};

use crate::display::TextField;

/// Sends the latest weather JSON to the completion endpoint on tap and
/// displays the first choice's content. Without a report in hand it logs
/// and issues no call.
#[derive(Debug, Default)]
pub struct AiAssistant {
    pub output: TextField,
}

impl AiAssistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn on_tap(&mut self, api: &CompletionsApi, weather_report: Option<&str>) {
        let Some(report) = weather_report else {
            warn!("no weather report available yet");
            return;
        };

        let request = CompletionRequest {
            temperature: 1.0,
            messages: vec![ChatMessage::user(report)],
        };
        match complete(api, &request).await {
            Ok(Some(answer)) => {
                info!(%answer, "completion response");
                self.output.set(answer);
            }
            Ok(None) => {
                warn!("completion returned no choices");
                self.output.set("");
            }
            Err(err) => {
                warn!(error = %err, "completion failed");
                self.output.set("");
            }
        }
    }
}

async fn complete(
    api: &CompletionsApi,
    request: &CompletionRequest,
) -> Result<Option<String>, ApiError> {
    let result = api.completions(request).await?;
    let response: CompletionResponse = result.body_as()?;
    Ok(response.choices.into_iter().next().map(|c| c.message.content))
}
