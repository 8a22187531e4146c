mod collision;
mod compaction;
mod placement;
mod push;
pub(crate) mod types;

pub use collision::{detect_collisions, has_collision, rectangles_overlap};
pub use compaction::compact_layout;
pub use placement::find_placement;
pub use push::{Push, PushDirection, push_distance, resolve_push};
pub use types::*;

use std::collections::{BTreeMap, BTreeSet, VecDeque};

// Per-panel processing ceiling. Chain propagation re-enqueues displaced
// panels, and a pathological layout could bounce the same panel between two
// spots forever; past this many visits a panel is left where it last landed.
const MAX_PROCESS_COUNT: u32 = 10;

/// Clamps a panel into the grid: `x` into `[0, column_count - w]`, `y` to
/// `>= 0`, sizes floored at one cell. Applied to the moving panel only;
/// displaced panels derive their positions from in-bounds pushes.
pub fn constrain_to_grid(panel: &PanelCoordinate, column_count: i32) -> PanelCoordinate {
    let w = panel.w.max(1);
    let h = panel.h.max(1);
    let max_x = (column_count - w).max(0);
    PanelCoordinate {
        x: panel.x.clamp(0, max_x),
        y: panel.y.max(0),
        w,
        h,
        ..panel.clone()
    }
}

/// Resolves the layout after `moving` has been dragged or resized, returning
/// the full replacement panel set. The input is never mutated.
///
/// Collisions are resolved by pushing panels right when the grid has room,
/// down otherwise, propagating breadth-first until the layout is stable. If
/// resolution would displace a position-locked panel the whole operation is
/// rolled back and the input set is returned unchanged, requested
/// coordinates and all cascades included.
///
/// A resize that changes both axes at once runs in two phases: width first
/// with the original height, then height from wherever the first phase left
/// the panel. This keeps simultaneous resizes reproducible.
pub fn rearrange(
    moving: &PanelCoordinate,
    all_panels: &[PanelCoordinate],
    column_count: i32,
) -> Vec<PanelCoordinate> {
    if moving.lock_position {
        return all_panels.to_vec();
    }

    let constrained = constrain_to_grid(moving, column_count);
    let before = all_panels.iter().find(|p| p.id == constrained.id);

    let result = match before {
        Some(before) if before.w != constrained.w && before.h != constrained.h => {
            rearrange_two_phase(&constrained, before, all_panels, column_count)
        }
        _ => rearrange_pass(&constrained, all_panels, column_count),
    };

    result.unwrap_or_else(|| all_panels.to_vec())
}

fn rearrange_two_phase(
    target: &PanelCoordinate,
    before: &PanelCoordinate,
    all_panels: &[PanelCoordinate],
    column_count: i32,
) -> Option<Vec<PanelCoordinate>> {
    let width_only = PanelCoordinate {
        h: before.h,
        ..target.clone()
    };
    let after_width = rearrange_pass(&width_only, all_panels, column_count)?;

    let settled = after_width.iter().find(|p| p.id == target.id);
    let height_pass = PanelCoordinate {
        x: settled.map_or(target.x, |p| p.x),
        y: settled.map_or(target.y, |p| p.y),
        ..target.clone()
    };
    rearrange_pass(&height_pass, &after_width, column_count)
}

// One propagation pass. `None` means a position-locked panel would have to
// move: the caller rolls the whole operation back.
fn rearrange_pass(
    moving: &PanelCoordinate,
    all_panels: &[PanelCoordinate],
    column_count: i32,
) -> Option<Vec<PanelCoordinate>> {
    let mut working: PanelMap = all_panels
        .iter()
        .map(|p| (p.id.clone(), p.clone()))
        .collect();
    working.insert(moving.id.clone(), moving.clone());

    let mut queue: VecDeque<PanelCoordinate> = VecDeque::new();
    queue.push_back(moving.clone());

    let mut processed: BTreeSet<PanelId> = BTreeSet::new();
    // Panels displaced so far this pass, in displacement order.
    let mut repositioned: Vec<PanelId> = Vec::new();
    let mut process_count: BTreeMap<PanelId, u32> = BTreeMap::new();

    while let Some(current) = queue.pop_front() {
        let count = process_count.entry(current.id.clone()).or_insert(0);
        if *count >= MAX_PROCESS_COUNT {
            continue;
        }
        *count += 1;

        // Superseded queue entry: the panel moved again after this snapshot
        // was enqueued.
        if let Some(entry) = working.get(&current.id) {
            if entry.x != current.x || entry.y != current.y {
                continue;
            }
        }
        if processed.contains(&current.id) {
            continue;
        }

        let mut colliding = detect_collisions(&current, &working);
        if colliding.is_empty() {
            working.insert(current.id.clone(), current.clone());
            processed.insert(current.id.clone());
            continue;
        }

        // Top-left-first resolution keeps the result independent of map
        // iteration order.
        colliding.sort_by_key(|id| working.get(id).map_or((i32::MAX, i32::MAX), |p| (p.y, p.x)));

        for colliding_id in colliding {
            let Some(colliding_panel) = working.get(&colliding_id).cloned() else {
                continue;
            };
            if colliding_panel.lock_position {
                return None;
            }

            let (x, y) = resolve_push(colliding_panel.rect(), current.rect(), column_count);
            let mut candidate = PanelCoordinate {
                x,
                y,
                ..colliding_panel.clone()
            };

            // The push may land on a panel repositioned earlier in this
            // pass. Slide further right past it while the grid has room;
            // once it runs out, abandon the row and push down instead.
            let mut push_down_instead = false;
            for repo_id in &repositioned {
                if *repo_id == colliding_id {
                    continue;
                }
                let Some(repo) = working.get(repo_id) else {
                    continue;
                };
                if !rectangles_overlap(candidate.rect(), repo.rect()) {
                    continue;
                }
                let further_x = repo.x + repo.w;
                if further_x + candidate.w <= column_count {
                    candidate.x = further_x;
                } else {
                    push_down_instead = true;
                    break;
                }
            }
            if push_down_instead {
                let push_down = current.y + current.h - colliding_panel.y;
                candidate.x = colliding_panel.x;
                candidate.y = colliding_panel.y + push_down.max(1);
            }

            working.insert(colliding_id.clone(), candidate.clone());
            queue.push_back(candidate);
            if !repositioned.contains(&colliding_id) {
                repositioned.push(colliding_id);
            }
        }

        working.insert(current.id.clone(), current.clone());
        processed.insert(current.id.clone());
    }

    // Input order, with a panel new to the set appended last.
    let mut result = Vec::with_capacity(working.len());
    for panel in all_panels {
        if let Some(p) = working.remove(&panel.id) {
            result.push(p);
        }
    }
    result.extend(working.into_values());
    Some(result)
}
