//! Modes command implementation.

use crate::render;
use cuenta::DisplayMode;

/// List the display modes and the metrics each one shows.
pub(crate) fn list_modes() {
    render::header("Display Modes");

    for mode in DisplayMode::ALL {
        println!("{} ({})", mode.title(), mode.as_str());
        println!("  {}", mode.subtitle());
        println!("  Companies: up to {}", mode.max_companies());
        println!("  Metrics:   {}", mode.labels().join(", "));
        println!();
    }
}
