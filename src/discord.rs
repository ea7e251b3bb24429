use serde::Serialize;
use tracing::{error, info, instrument};

use crate::error::DeliveryError;
use crate::http;
use crate::model::embed::{Embed, EmbedPayload, FallbackPayload};

/// Simple Discord webhook client encapsulating the hook URL.
#[derive(Debug, Clone)]
pub struct Discord {
    hook_url: String,
}

impl Discord {
    /// Create a new Discord client with the provided webhook URL.
    pub fn new(hook_url: impl Into<String>) -> Self {
        Self { hook_url: hook_url.into() }
    }

    /// Deliver the embed, degrading to a plain-text message if the rich post fails.
    /// Returns true when either delivery succeeded.
    #[instrument(level = "info", skip_all, fields(title = %embed.title))]
    pub fn publish(&self, embed: &Embed) -> bool {
        info!("Posting message to Discord");
        match self.post_embed(embed) {
            Ok(()) => {
                info!("Successfully posted to Discord");
                return true;
            }
            Err(e) => error!(error = %e, "Failed to post embed to Discord; trying plain-text fallback"),
        }

        match self.post_fallback(embed) {
            Ok(()) => {
                info!("Posted fallback message to Discord");
                true
            }
            Err(e) => {
                error!(error = %e, "Fallback message also failed");
                false
            }
        }
    }

    /// Post the rich payload carrying the single embed.
    pub fn post_embed(&self, embed: &Embed) -> Result<(), DeliveryError> {
        self.post_json(&EmbedPayload::new(embed))
    }

    /// Post the title and description as plain text.
    pub fn post_fallback(&self, embed: &Embed) -> Result<(), DeliveryError> {
        self.post_json(&FallbackPayload::new(embed))
    }

    fn post_json<T: Serialize>(&self, payload: &T) -> Result<(), DeliveryError> {
        match http::agent().post(&self.hook_url).send_json(payload) {
            Ok(resp) if resp.status().is_success() => {
                info!(status = resp.status().as_u16(), "Posted message to Discord webhook");
                Ok(())
            }
            Ok(resp) => {
                let status = resp.status().as_u16();
                error!(status, "Discord webhook returned non-success status");
                Err(DeliveryError::Request(format!("unexpected status {}", status)))
            }
            Err(e) => {
                error!(error = %e, "Failed to post to Discord webhook");
                Err(DeliveryError::Request(e.to_string()))
            }
        }
    }
}
