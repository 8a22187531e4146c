use std::collections::BTreeSet;
use std::fmt;

use crate::config::GridConfig;
use crate::layout::{
    PanelCoordinate, PanelId, compact_layout, find_placement, rearrange,
};

type Strategy =
    dyn Fn(&PanelCoordinate, &[PanelCoordinate], i32) -> Vec<PanelCoordinate> + Send + Sync;

/// Caller-side state container: the authoritative panel list, the grid
/// geometry, and the installed rearrangement strategy. Every mutation goes
/// through whole-set replacement: the strategy receives a snapshot and its
/// result becomes the new set.
pub struct PanelGrid {
    config: GridConfig,
    panels: Vec<PanelCoordinate>,
    strategy: Box<Strategy>,
}

impl PanelGrid {
    pub fn new(config: GridConfig) -> Self {
        Self::with_panels(config, Vec::new())
    }

    pub fn with_panels(config: GridConfig, panels: Vec<PanelCoordinate>) -> Self {
        Self {
            config,
            panels,
            strategy: Box::new(rearrange),
        }
    }

    /// Replaces the collision-resolution policy. The replacement sees the
    /// same inputs as the default and its output is adopted wholesale.
    pub fn with_strategy<F>(mut self, strategy: F) -> Self
    where
        F: Fn(&PanelCoordinate, &[PanelCoordinate], i32) -> Vec<PanelCoordinate>
            + Send
            + Sync
            + 'static,
    {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn panels(&self) -> &[PanelCoordinate] {
        &self.panels
    }

    pub fn panel(&self, id: &PanelId) -> Option<&PanelCoordinate> {
        self.panels.iter().find(|p| p.id == *id)
    }

    /// Adds a panel at the first free spot. Duplicate ids are refused.
    pub fn add_panel(&mut self, id: impl Into<PanelId>, w: i32, h: i32) -> bool {
        let id = id.into();
        if self.panels.iter().any(|p| p.id == id) {
            return false;
        }
        let w = w.max(1);
        let h = h.max(1);
        let (x, y) = find_placement(w, h, &self.panels, self.config.column_count);
        self.panels.push(PanelCoordinate::new(id, x, y, w, h));
        true
    }

    pub fn remove_panel(&mut self, id: &PanelId) -> bool {
        let before = self.panels.len();
        self.panels.retain(|p| p.id != *id);
        self.panels.len() != before
    }

    pub fn lock_position(&mut self, id: &PanelId) -> bool {
        self.update_panel(id, |p| p.lock_position = true)
    }

    pub fn unlock_position(&mut self, id: &PanelId) -> bool {
        self.update_panel(id, |p| p.lock_position = false)
    }

    pub fn lock_size(&mut self, id: &PanelId) -> bool {
        self.update_panel(id, |p| p.lock_size = true)
    }

    pub fn unlock_size(&mut self, id: &PanelId) -> bool {
        self.update_panel(id, |p| p.lock_size = false)
    }

    /// Moves a panel to a new origin, running the installed strategy.
    /// Position-locked panels refuse here, before the strategy runs, the
    /// same way a drag handle on a locked panel never engages.
    pub fn move_panel(&mut self, id: &PanelId, x: i32, y: i32) -> bool {
        let Some(panel) = self.panel(id) else {
            return false;
        };
        if panel.lock_position {
            return false;
        }
        let candidate = PanelCoordinate {
            x,
            y,
            ..panel.clone()
        };
        self.apply(candidate)
    }

    /// Resizes a panel, running the installed strategy. Size-locked panels
    /// refuse; sizes are floored at one cell.
    pub fn resize_panel(&mut self, id: &PanelId, w: i32, h: i32) -> bool {
        let Some(panel) = self.panel(id) else {
            return false;
        };
        if panel.lock_size {
            return false;
        }
        let candidate = PanelCoordinate {
            w: w.max(1),
            h: h.max(1),
            ..panel.clone()
        };
        self.apply(candidate)
    }

    /// Runs the installed strategy with a caller-built candidate and adopts
    /// the result. Returns whether anything actually changed; a rollback or
    /// a no-op move reports `false`.
    pub fn apply(&mut self, candidate: PanelCoordinate) -> bool {
        let next = (self.strategy)(&candidate, &self.panels, self.config.column_count);
        let changed = next != self.panels;
        self.panels = next;
        changed
    }

    /// Removes fully empty rows, pulling the layout upward.
    pub fn compact(&mut self) -> bool {
        let next = compact_layout(&self.panels);
        let changed = next != self.panels;
        self.panels = next;
        changed
    }

    pub fn replace_panels(&mut self, panels: Vec<PanelCoordinate>) {
        self.panels = panels;
    }

    fn update_panel(&mut self, id: &PanelId, update: impl FnOnce(&mut PanelCoordinate)) -> bool {
        match self.panels.iter_mut().find(|p| p.id == *id) {
            Some(panel) => {
                update(panel);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for PanelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelGrid")
            .field("config", &self.config)
            .field("panels", &self.panels)
            .finish_non_exhaustive()
    }
}

/// Ids of panels present in both sets whose geometry differs, minus the
/// actively manipulated one. This is the set a renderer animates after a
/// rearrangement lands.
pub fn changed_panels(
    old: &[PanelCoordinate],
    new: &[PanelCoordinate],
    exclude: Option<&PanelId>,
) -> BTreeSet<PanelId> {
    let mut changed = BTreeSet::new();
    for before in old {
        if Some(&before.id) == exclude {
            continue;
        }
        let Some(after) = new.iter().find(|p| p.id == before.id) else {
            continue;
        };
        if before.rect() != after.rect() {
            changed.insert(before.id.clone());
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_places_and_refuses_duplicates() {
        let mut grid = PanelGrid::new(GridConfig::default());
        assert!(grid.add_panel(1, 2, 2));
        assert!(grid.add_panel(2, 2, 2));
        assert!(!grid.add_panel(1, 1, 1));
        assert_eq!(grid.panels().len(), 2);
        assert_eq!(grid.panel(&PanelId::from(2)).unwrap().x, 2);
    }

    #[test]
    fn move_respects_position_lock() {
        let mut grid = PanelGrid::new(GridConfig::default());
        grid.add_panel(1, 2, 2);
        let id = PanelId::from(1);
        grid.lock_position(&id);
        assert!(!grid.move_panel(&id, 3, 0));
        assert_eq!(grid.panel(&id).unwrap().x, 0);
        grid.unlock_position(&id);
        assert!(grid.move_panel(&id, 3, 0));
        assert_eq!(grid.panel(&id).unwrap().x, 3);
    }

    #[test]
    fn resize_respects_size_lock_but_not_moves() {
        let mut grid = PanelGrid::new(GridConfig::default());
        grid.add_panel(1, 2, 2);
        let id = PanelId::from(1);
        grid.lock_size(&id);
        assert!(!grid.resize_panel(&id, 4, 4));
        assert!(grid.move_panel(&id, 2, 0));
    }

    #[test]
    fn custom_strategy_replaces_the_default() {
        // A "no resolution" policy: adopt the candidate verbatim.
        let mut grid = PanelGrid::new(GridConfig::default()).with_strategy(|moving, all, _| {
            let mut next: Vec<PanelCoordinate> =
                all.iter().filter(|p| p.id != moving.id).cloned().collect();
            next.push(moving.clone());
            next
        });
        grid.add_panel(1, 2, 2);
        grid.add_panel(2, 2, 2);
        let id = PanelId::from(1);
        grid.move_panel(&id, 2, 0);
        // Overlap is allowed to stand under this policy.
        assert_eq!(grid.panel(&id).unwrap().x, 2);
        assert_eq!(grid.panel(&PanelId::from(2)).unwrap().x, 2);
    }

    #[test]
    fn changed_panels_ignores_the_excluded_id() {
        let old = vec![
            PanelCoordinate::new(1, 0, 0, 2, 2),
            PanelCoordinate::new(2, 2, 0, 2, 2),
        ];
        let new = vec![
            PanelCoordinate::new(1, 1, 0, 2, 2),
            PanelCoordinate::new(2, 3, 0, 2, 2),
        ];
        let moved = changed_panels(&old, &new, Some(&PanelId::from(1)));
        assert_eq!(moved.len(), 1);
        assert!(moved.contains(&PanelId::from(2)));
    }
}
