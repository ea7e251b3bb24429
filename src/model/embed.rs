use serde::Serialize;

pub const BOT_USERNAME: &str = "Orthodox Calendar";
pub const BOT_AVATAR_URL: &str = "https://orthocal.info/favicon.ico";
pub const FOOTER_TEXT: &str = "Orthodox Calendar • orthocal.info";
pub const FOOTER_ICON_URL: &str = "https://orthocal.info/favicon.ico";
pub const DETAILS_URL: &str = "https://orthocal.info/";

/// The notification sent to the webhook, in Discord's embed shape.
/// Built once per run by the formatter and consumed by the publisher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

impl Default for EmbedFooter {
    fn default() -> Self {
        Self {
            text: FOOTER_TEXT.to_string(),
            icon_url: FOOTER_ICON_URL.to_string(),
        }
    }
}

/// Rich webhook body carrying a single embed.
#[derive(Debug, Serialize)]
pub struct EmbedPayload<'a> {
    pub username: &'a str,
    pub avatar_url: &'a str,
    pub embeds: [&'a Embed; 1],
}

impl<'a> EmbedPayload<'a> {
    pub fn new(embed: &'a Embed) -> Self {
        Self {
            username: BOT_USERNAME,
            avatar_url: BOT_AVATAR_URL,
            embeds: [embed],
        }
    }
}

/// Plain-text webhook body used when the rich payload is rejected.
#[derive(Debug, Serialize)]
pub struct FallbackPayload<'a> {
    pub content: String,
    pub username: &'a str,
}

impl FallbackPayload<'_> {
    /// Only the title and description survive; fields are dropped.
    pub fn new(embed: &Embed) -> Self {
        let description = embed.description.as_deref().unwrap_or("");
        Self {
            content: format!(
                "**{}**\n{}\n\nView full details at {}",
                embed.title, description, DETAILS_URL
            ),
            username: BOT_USERNAME,
        }
    }
}

impl Embed {
    /// Human-readable rendering for `--preview`.
    pub fn preview(&self) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();
        out.push_str(&rule);
        out.push_str("\nDISCORD MESSAGE PREVIEW\n");
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Title: {}\n", self.title));
        out.push_str(&format!(
            "Description: {}\n",
            self.description.as_deref().unwrap_or("N/A")
        ));
        out.push_str(&format!("Color: #{:06x}\n", self.color));
        if !self.fields.is_empty() {
            out.push_str("\nFields:\n");
            for field in &self.fields {
                out.push_str(&format!("  {}: {}\n", field.name, field.value));
            }
        }
        out.push_str(&format!("\nFooter: {}\n", self.footer.text));
        out.push_str(&rule);
        out
    }
}
