//! Inspection views
//!
//! Each view prints what the parser made of the input instead of the rendered HTML:
//!
//! - `blocks-json`:  body text as a JSON array of blocks (default)
//! - `card-json`:    the parsed metric card as JSON
//! - `card-summary`: the parsed metric card as an indented outline
//!
//! Example: `mailmark inspect body.txt card-summary --description-file desc.txt`

use mailmark_render::body::parse_body;
use mailmark_render::inspect::{blocks_to_json, card_summary, card_to_json};
use mailmark_render::{MetricCardInput, RenderError, Renderer};

/// All available inspection views
pub const AVAILABLE_VIEWS: &[&str] = &["blocks-json", "card-json", "card-summary"];

/// View used when none is given
pub const DEFAULT_VIEW: &str = "blocks-json";

/// Whether a view reads the body text at all
pub fn view_needs_body(view: &str) -> bool {
    view == "blocks-json"
}

/// Execute a named view.
///
/// `card` holds the raw metric inputs; the renderer's fallbacks are applied before
/// parsing, exactly as when rendering.
pub fn execute_view(
    body: &str,
    card: &MetricCardInput,
    renderer: &Renderer,
    view: &str,
) -> Result<String, RenderError> {
    match view {
        "blocks-json" => blocks_to_json(&parse_body(body)),
        "card-json" => {
            card_to_json(&renderer.parse_metric_card(&card.title, &card.description))
        }
        "card-summary" => Ok(card_summary(
            &renderer.parse_metric_card(&card.title, &card.description),
        )),
        other => Err(RenderError::UnknownView(other.to_string())),
    }
}
