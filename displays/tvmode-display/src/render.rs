//! Settings screen rendering
//!
//! Pure projection of a [`RenderModel`] onto a [`Screen`]. Layout:
//!
//! ```text
//! row 0      title
//! rows 1-5   one line per field, '>' marks the cursor
//! rows 6-9   key help
//! row 16     credits
//! ```

use core::fmt::Write;

use heapless::String;
use tvmode_core::{RenderModel, SelectableField};

use crate::screen::{Screen, LINE_LEN};

/// Title row text
pub const TITLE: &str = "TV Mode Changer";

/// Key help rows, drawn below the fields
pub const HELP_LINES: [&str; 4] = [
    "Up/Down: Select option",
    "Left/Right: Change value",
    "A: Apply settings",
    "HOME: Exit",
];

/// Credits row text
pub const CREDITS: &str = concat!("tvmode v", env!("CARGO_PKG_VERSION"));

const TITLE_ROW: usize = 0;
const FIRST_FIELD_ROW: usize = 1;
const FIRST_HELP_ROW: usize = FIRST_FIELD_ROW + SelectableField::ALL.len();
const CREDITS_ROW: usize = 16;

/// Render the settings screen
pub fn render(model: &RenderModel, screen: &mut Screen) {
    screen.clear();
    screen.set_line(TITLE_ROW, TITLE);

    for field in SelectableField::ALL {
        let marker = if field == model.cursor { ">" } else { " " };
        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(line, "{} {}: {}", marker, field.label(), model.value_label(field));
        screen.set_line(FIRST_FIELD_ROW + field.index(), &line);
    }

    for (i, help) in HELP_LINES.iter().enumerate() {
        screen.set_line(FIRST_HELP_ROW + i, help);
    }

    screen.set_line(CREDITS_ROW, CREDITS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvmode_core::state::{CommittedState, PendingState};
    use tvmode_core::{AspectRatio, Catalog, CompatibilityPolicy, Direction, OutputPort, Region, SettingsMachine};

    fn machine() -> SettingsMachine {
        let committed = CommittedState {
            region: Region::Ntsc,
            port: OutputPort::Hdmi,
            resolution_index: 3,
            aspect_ratio: AspectRatio::Wide,
        };
        SettingsMachine::new(Catalog::STANDARD, CompatibilityPolicy::Independent, committed, false)
    }

    fn line(screen: &Screen, row: usize) -> &str {
        screen.get_line(row).unwrap_or("")
    }

    #[test]
    fn test_render_layout() {
        let mut screen = Screen::new();
        render(&machine().render_model(), &mut screen);

        assert_eq!(line(&screen, 0), TITLE);
        assert_eq!(line(&screen, 1), "> Video Region: NTSC");
        assert_eq!(line(&screen, 2), "  Output Port: HDMI");
        assert_eq!(line(&screen, 3), "  Output Resolution: 720p");
        assert_eq!(line(&screen, 4), "  Aspect Ratio: 16:9");
        assert_eq!(line(&screen, 5), "  Exit After Applying: No");
        assert_eq!(line(&screen, 6), HELP_LINES[0]);
        assert_eq!(line(&screen, 9), HELP_LINES[3]);
        assert_eq!(line(&screen, 10), "");
        assert!(line(&screen, 16).starts_with("tvmode v"));
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_render_follows_cursor_and_pending() {
        let mut machine = machine();
        machine.move_cursor(Direction::Forward);
        machine.edit_field(Direction::Backward);

        let mut screen = Screen::new();
        render(&machine.render_model(), &mut screen);

        assert_eq!(line(&screen, 1), "  Video Region: NTSC");
        assert_eq!(line(&screen, 2), "> Output Port: Composite/SCART");
        assert_eq!(line(&screen, 3), "  Output Resolution: 480i PAL60");
    }

    #[test]
    fn test_render_shows_pending_not_committed() {
        let mut machine = machine();
        machine.edit_field(Direction::Forward);
        let model = machine.render_model();
        assert_eq!(model.pending, PendingState { region: Region::Pal, ..*machine.pending() });

        let mut screen = Screen::new();
        render(&model, &mut screen);
        assert_eq!(machine.committed().region, Region::Ntsc);
        assert_eq!(line(&screen, 1), "> Video Region: PAL");
    }

    #[test]
    fn test_longest_resolution_name_fits() {
        let committed = CommittedState {
            region: Region::Pal,
            port: OutputPort::Hdmi,
            resolution_index: Catalog::STANDARD.len() - 1,
            aspect_ratio: AspectRatio::Wide,
        };
        let machine =
            SettingsMachine::new(Catalog::STANDARD, CompatibilityPolicy::Independent, committed, false);
        let mut screen = Screen::new();
        render(&machine.render_model(), &mut screen);

        assert_eq!(
            line(&screen, 3),
            "  Output Resolution: 1080p 50Hz (glitchy GamePad)"
        );
    }

    #[test]
    fn test_rerender_replaces_old_content() {
        let mut screen = Screen::new();
        screen.set_line(12, "stale");
        render(&machine().render_model(), &mut screen);
        assert_eq!(line(&screen, 12), "");
    }
}
