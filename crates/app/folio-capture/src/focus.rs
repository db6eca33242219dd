use folio_core::{FolioResult, Region, ScreenSize};
use folio_input::InputControl;

/// Distance kept between the parked pointer and the capture region.
const PARK_MARGIN: u32 = 20;

/// Clicks the center of the capture area to give the reader input focus,
/// then moves the pointer out of the way.
pub(crate) fn refocus<I: InputControl + ?Sized>(
    input: &mut I,
    screen: ScreenSize,
    region: Option<Region>,
) -> FolioResult<()> {
    let bounds = screen.bounds();
    let (x, y) = region.unwrap_or(bounds).center();
    input.click(x, y)?;

    let (park_x, park_y) = park_position(bounds, region);
    input.move_pointer(park_x, park_y)
}

/// Picks a pointer position outside `region`: to its right, left, below or
/// above, whichever first lands on screen. Falls back to the bottom-right
/// corner of the screen.
pub fn park_position(screen: Region, region: Option<Region>) -> (i32, i32) {
    let corner = (screen.right() - 1, screen.bottom() - 1);
    let Some(region) = region else {
        return corner;
    };

    let (center_x, center_y) = region.center();
    let candidates = [
        (region.right().saturating_add_unsigned(PARK_MARGIN), center_y),
        (region.left.saturating_sub_unsigned(PARK_MARGIN), center_y),
        (center_x, region.bottom().saturating_add_unsigned(PARK_MARGIN)),
        (center_x, region.top.saturating_sub_unsigned(PARK_MARGIN)),
    ];

    candidates
        .into_iter()
        .find(|&(x, y)| screen.contains(x, y) && !region.contains(x, y))
        .unwrap_or(corner)
}
