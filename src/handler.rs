use chrono::Utc;
use tracing::{error, info, instrument};

use crate::config::CalendarVariant;
use crate::discord::Discord;
use crate::error::FetchError;
use crate::formatter;
use crate::model::embed::Embed;
use crate::orthocal::Orthocal;

/// One full run: fetch today's record, format it, post it.
/// Returns false as soon as a stage fails; nothing is posted if the fetch fails.
#[instrument(level = "info", skip(orthocal, discord))]
pub fn run(orthocal: &Orthocal, variant: CalendarVariant, discord: &Discord) -> bool {
    info!("Starting Orthodox Calendar Bot");

    let embed = match prepare(orthocal, variant) {
        Ok(embed) => embed,
        Err(e) => {
            error!(error = %e, "Failed to fetch calendar data");
            return false;
        }
    };

    let success = discord.publish(&embed);
    if success {
        info!("Bot execution completed successfully");
    } else {
        error!("Bot execution failed");
    }
    success
}

/// Fetch and format without posting.
pub fn prepare(orthocal: &Orthocal, variant: CalendarVariant) -> Result<Embed, FetchError> {
    let record = orthocal.fetch(variant)?;
    Ok(formatter::build_embed(&record, Utc::now()))
}
