use std::collections::BTreeSet;

use super::types::PanelCoordinate;

/// Removes fully empty rows below the topmost occupied row, pulling the
/// panels underneath upward. Rows above the first panel are left alone, as
/// are rows that sit above a position-locked panel: compaction never moves a
/// panel that displacement is forbidden to move. Idempotent.
pub fn compact_layout(panels: &[PanelCoordinate]) -> Vec<PanelCoordinate> {
    if panels.is_empty() {
        return Vec::new();
    }

    let mut occupied = BTreeSet::new();
    for panel in panels {
        for row in panel.y..panel.y + panel.h {
            occupied.insert(row);
        }
    }
    let (Some(&top), Some(&bottom)) = (occupied.first(), occupied.last()) else {
        return panels.to_vec();
    };

    let removable: Vec<i32> = (top..bottom)
        .filter(|row| !occupied.contains(row))
        .filter(|row| !panels.iter().any(|p| p.lock_position && p.y > *row))
        .collect();

    if removable.is_empty() {
        return panels.to_vec();
    }

    panels
        .iter()
        .map(|panel| {
            let shift = removable.iter().filter(|&&row| row < panel.y).count() as i32;
            PanelCoordinate {
                y: panel.y - shift,
                ..panel.clone()
            }
        })
        .collect()
}
