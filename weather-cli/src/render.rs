use weather_core::{ResultCard, View};

/// Text for one view of the output region. Idle renders as nothing.
pub fn render(view: &View<'_>) -> String {
    match view {
        View::Idle => String::new(),
        View::Loading => "⟳ Searching...".to_string(),
        View::Error(message) => error_box(message),
        View::Result(card) => result_card(card),
    }
}

fn error_box(message: &str) -> String {
    let width = message.chars().count() + 2;
    format!(
        "┌{bar}┐\n│ {message} │\n└{bar}┘",
        bar = "─".repeat(width),
    )
}

fn result_card(card: &ResultCard) -> String {
    let mut lines = vec![
        format!("📍 {}", card.title),
        String::new(),
        format!("   {}  {}", card.icon.glyph(), card.temperature),
        format!("   {}", card.description),
        String::new(),
        format!("   Humidity    {}", card.humidity),
        format!("   Wind Speed  {}", card.wind),
    ];
    if let Some(observed) = &card.observed {
        lines.push(String::new());
        lines.push(format!("   {observed}"));
    }
    lines.join("\n")
}
