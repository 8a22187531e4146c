use super::collision::has_collision;
use super::types::{GridRect, PanelCoordinate, PanelMap};

const SEARCH_MARGIN_ROWS: i32 = 100;
const MIN_SEARCH_ROWS: i32 = 1000;

/// First free region for a new `w` x `h` panel, scanning row-major from the
/// top-left. The scan is bounded; when every candidate within the bound is
/// taken, the panel lands at `(0, bottom)` even if that overlaps, so callers
/// always get a usable coordinate back.
pub fn find_placement(
    w: i32,
    h: i32,
    existing: &[PanelCoordinate],
    column_count: i32,
) -> (i32, i32) {
    let w = w.max(1);
    let h = h.max(1);

    let bottom = existing.iter().map(|p| p.y + p.h).max().unwrap_or(0);
    let panels: PanelMap = existing
        .iter()
        .map(|p| (p.id.clone(), p.clone()))
        .collect();

    let max_rows = (bottom + SEARCH_MARGIN_ROWS).max(MIN_SEARCH_ROWS);
    for y in 0..max_rows {
        for x in 0..=column_count - w {
            if !has_collision(GridRect::new(x, y, w, h), None, &panels) {
                return (x, y);
            }
        }
    }

    (0, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(id: i64, x: i32, y: i32, w: i32, h: i32) -> PanelCoordinate {
        PanelCoordinate::new(id, x, y, w, h)
    }

    #[test]
    fn empty_grid_places_at_origin() {
        assert_eq!(find_placement(2, 2, &[], 6), (0, 0));
    }

    #[test]
    fn fills_the_first_gap_in_a_row() {
        let existing = [panel(1, 0, 0, 2, 1), panel(2, 4, 0, 2, 1)];
        assert_eq!(find_placement(2, 1, &existing, 6), (2, 0));
    }

    #[test]
    fn skips_a_gap_narrower_than_the_panel() {
        let existing = [panel(1, 0, 0, 2, 1), panel(2, 3, 0, 3, 1)];
        assert_eq!(find_placement(2, 1, &existing, 6), (0, 1));
    }

    #[test]
    fn wide_panel_goes_below_a_full_top_row() {
        let existing = [panel(1, 0, 0, 6, 2)];
        assert_eq!(find_placement(4, 1, &existing, 6), (0, 2));
    }

    #[test]
    fn panel_wider_than_the_grid_falls_back_to_bottom() {
        let existing = [panel(1, 0, 0, 6, 3)];
        assert_eq!(find_placement(7, 1, &existing, 6), (0, 3));
    }

    #[test]
    fn zero_size_is_floored_to_one_cell() {
        assert_eq!(find_placement(0, 0, &[], 6), (0, 0));
    }
}
