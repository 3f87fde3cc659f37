//! User-facing message catalog.
//!
//! Static messages are constants; templated messages are functions of a single input.

use serenity::all::ChannelId;

pub const BOT_ONLINE: &str = "BURGER BOT IS ONLINE :)";

/// Posted on startup and on every reminder tick.
pub const SUB_YOUTUBE: &str = "Sub to https://www.youtube.com/@VandalTecnoz";

pub const INVALID_PASSWORD: &str = "Invalid password!";

pub const CHANNEL_NOT_FOUND: &str = "Channel not found.";

pub const COMMAND_ERROR: &str = "An error occurred while processing your command.";

pub const ART: &str = "ART!!!!!!!!\n\n∧,,,∧\n(  ̳• · • ̳)\n/    づ♡";

pub const HI: &str = "Hello there! 👋";

pub const HELP: &str = "**Available Commands:**
- /rules - Displays the rules.
- /redditupload - Uploads a new Reddit post (password required).
- /youtubeupload - Uploads a new YouTube video (password required).
- /art - Displays a fun art message.
- /help - Displays this help message.
- /hi - Replies with a friendly greeting.
- /fileshare - Explains how to share files in the server.";

/// Points the user at the rules channel.
pub fn rules_message(rules_channel: ChannelId) -> String {
    format!("READ THE RULES <#{}>", rules_channel)
}

/// Ticket instructions for sharing files, linking the ticket channel.
pub fn file_share_instructions(ticket_channel: ChannelId) -> String {
    format!(
        "To share a file, please go to <#{}> and create a ticket.

**File Specifications:**
- File size limit: 10 MB per file.
- Accepted file types: All types (e.g., image, HTML, etc.).
- The file will be verified once uploaded.

Once you have created the ticket, someone from the team will respond to you.",
        ticket_channel
    )
}

/// Broadcast posted to an upload channel.
pub fn upload_announcement(link: &str) -> String {
    format!("@everyone NEW UPLOAD: {}", link)
}

/// Ephemeral confirmation after a successful upload broadcast.
pub fn upload_success(command_name: &str) -> String {
    format!("{} upload successful!", command_name)
}

pub fn welcome_message(display_name: &str) -> String {
    format!("@everyone {} JOINED", display_name)
}
