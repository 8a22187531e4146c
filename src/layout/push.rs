use super::types::GridRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushDirection {
    Right,
    Down,
}

/// A candidate displacement separating a pushed panel from its pusher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Push {
    pub direction: PushDirection,
    pub distance: i32,
}

/// Minimal displacement that clears `pushed` out of `pusher`'s region.
/// Rightward wins when the pushed panel still fits inside the grid after the
/// shift; otherwise downward. `None` when neither axis yields a strictly
/// positive displacement.
pub fn push_distance(pusher: GridRect, pushed: GridRect, column_count: i32) -> Option<Push> {
    let push_right = pusher.right() - pushed.x;
    let fits_right = pushed.right() + push_right <= column_count;
    if push_right > 0 && fits_right {
        return Some(Push {
            direction: PushDirection::Right,
            distance: push_right,
        });
    }

    let push_down = pusher.bottom() - pushed.y;
    if push_down > 0 {
        return Some(Push {
            direction: PushDirection::Down,
            distance: push_down,
        });
    }

    None
}

/// New origin for `pushed` after being displaced by `pusher`. Falls back to
/// a single downward cell in the degenerate case so propagation always makes
/// progress.
pub fn resolve_push(pushed: GridRect, pusher: GridRect, column_count: i32) -> (i32, i32) {
    let Some(push) = push_distance(pusher, pushed, column_count) else {
        return (pushed.x, pushed.y + 1);
    };

    if push.direction == PushDirection::Right {
        let x = pushed.x + push.distance;
        if x + pushed.w <= column_count {
            return (x, pushed.y);
        }
    }

    (pushed.x, pushed.y + push.distance)
}
