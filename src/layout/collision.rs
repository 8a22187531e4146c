use super::types::{GridRect, PanelCoordinate, PanelId, PanelMap};

/// AABB test over half-open cell spans. Rectangles that only share an edge
/// do not overlap.
pub fn rectangles_overlap(a: GridRect, b: GridRect) -> bool {
    !(a.right() <= b.x || b.right() <= a.x || a.bottom() <= b.y || b.bottom() <= a.y)
}

/// Every panel in `panels` (other than `panel` itself) whose region
/// intersects `panel`'s region.
pub fn detect_collisions(panel: &PanelCoordinate, panels: &PanelMap) -> Vec<PanelId> {
    let mut hits = Vec::new();
    for (id, other) in panels {
        if *id == panel.id {
            continue;
        }
        if rectangles_overlap(panel.rect(), other.rect()) {
            hits.push(id.clone());
        }
    }
    hits
}

/// Short-circuiting existence check for placement scans. `exclude` skips the
/// panel the candidate region belongs to, when it is already in the set.
pub fn has_collision(candidate: GridRect, exclude: Option<&PanelId>, panels: &PanelMap) -> bool {
    panels
        .iter()
        .any(|(id, panel)| Some(id) != exclude && rectangles_overlap(candidate, panel.rect()))
}
