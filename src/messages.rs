use colored::Color;
use rand::prelude::*;

#[derive(Clone)]
pub struct ColoredMessage {
    pub text: String,
    pub color: Color,
}

static WAITING_MESSAGES: std::sync::LazyLock<Vec<ColoredMessage>> =
    std::sync::LazyLock::new(|| {
        vec![
            ColoredMessage {
                text: "📰 Scanning the newswires...".to_string(),
                color: Color::Cyan,
            },
            ColoredMessage {
                text: "🗞️ Flipping through the morning editions...".to_string(),
                color: Color::Magenta,
            },
            ColoredMessage {
                text: "🏢 Knocking on the headquarters' front door...".to_string(),
                color: Color::Yellow,
            },
            ColoredMessage {
                text: "📈 Reading between the earnings lines...".to_string(),
                color: Color::Green,
            },
            ColoredMessage {
                text: "🔎 Interviewing sources close to the matter...".to_string(),
                color: Color::Blue,
            },
            ColoredMessage {
                text: "✍️ Drafting the company dossier...".to_string(),
                color: Color::BrightMagenta,
            },
            ColoredMessage {
                text: "☕ Trading coffee for quotes in the press room...".to_string(),
                color: Color::BrightCyan,
            },
        ]
    });

/// Pick a random waiting message to show while providers are in flight
pub fn get_waiting_message() -> ColoredMessage {
    let mut rng = rand::rng();
    WAITING_MESSAGES
        .choose(&mut rng)
        .cloned()
        .unwrap_or_else(|| ColoredMessage {
            text: "Researching...".to_string(),
            color: Color::Cyan,
        })
}
