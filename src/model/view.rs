use crate::model::list::IndexError;

/// Cursor and scroll position over the sorted list.
///
/// Holds positions only. Every operation takes the current list length and
/// the number of visible rows, and keeps
/// `selection < len`, `scroll <= selection` and
/// `selection - scroll < visible_rows` whenever the list is non-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Highlighted row, by position in the sorted list
    pub selection_index: usize,
    /// First visible row
    pub scroll_offset: usize,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState::default()
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selection_index == 0 {
            return;
        }
        self.selection_index -= 1;
        if self.selection_index < self.scroll_offset {
            if self.scroll_offset == 0 {
                self.selection_index = 0;
            } else {
                self.scroll_offset -= 1;
            }
        }
    }

    pub fn move_down(&mut self, len: usize, visible_rows: usize) {
        if len == 0 {
            return;
        }
        let rows = visible_rows.max(1);
        self.selection_index = (self.selection_index + 1).min(len - 1);
        if self.selection_index - self.scroll_offset >= rows {
            self.scroll_offset += 1;
        }
    }

    /// Move the selection to `index` (clamped), scrolling as little as possible
    pub fn select(&mut self, index: usize, len: usize, visible_rows: usize) {
        if len == 0 {
            *self = ViewState::default();
            return;
        }
        self.selection_index = index.min(len - 1);
        self.clamp(len, visible_rows);
    }

    /// Restore the bounds after the list or the terminal size changed
    pub fn clamp(&mut self, len: usize, visible_rows: usize) {
        if len == 0 {
            *self = ViewState::default();
            return;
        }
        let rows = visible_rows.max(1);
        self.selection_index = self.selection_index.min(len - 1);
        if self.scroll_offset > self.selection_index {
            self.scroll_offset = self.selection_index;
        }
        if self.selection_index - self.scroll_offset >= rows {
            self.scroll_offset = self.selection_index + 1 - rows;
        }
    }

    /// Scroll one row towards the selection, if it is below the top row
    pub fn nudge_scroll(&mut self) -> bool {
        if self.scroll_offset < self.selection_index {
            self.scroll_offset += 1;
            true
        } else {
            false
        }
    }

    /// Position of the highlighted task
    pub fn selected(&self, len: usize) -> Result<usize, IndexError> {
        if self.selection_index < len {
            Ok(self.selection_index)
        } else {
            Err(IndexError {
                index: self.selection_index,
                len,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bounds(view: &ViewState, len: usize, rows: usize) {
        if len == 0 {
            assert_eq!(*view, ViewState::default());
            return;
        }
        assert!(view.selection_index < len, "{:?} len={}", view, len);
        assert!(view.scroll_offset <= view.selection_index, "{:?}", view);
        assert!(
            view.selection_index - view.scroll_offset < rows,
            "{:?} rows={}",
            view,
            rows
        );
    }

    #[test]
    fn move_down_scrolls_at_bottom_edge() {
        let mut view = ViewState::new();
        for _ in 0..3 {
            view.move_down(10, 3);
        }
        assert_eq!(view.selection_index, 3);
        assert_eq!(view.scroll_offset, 1);
    }

    #[test]
    fn move_down_clamps_at_last_row() {
        let mut view = ViewState::new();
        for _ in 0..5 {
            view.move_down(2, 10);
        }
        assert_eq!(view.selection_index, 1);
        assert_eq!(view.scroll_offset, 0);
    }

    #[test]
    fn move_up_scrolls_back() {
        let mut view = ViewState {
            selection_index: 4,
            scroll_offset: 4,
        };
        view.move_up(10);
        assert_eq!(view.selection_index, 3);
        assert_eq!(view.scroll_offset, 3);
    }

    #[test]
    fn move_up_at_top_stays_at_zero() {
        let mut view = ViewState::new();
        view.move_up(5);
        view.move_up(5);
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn moves_on_empty_list_are_noops() {
        let mut view = ViewState::new();
        view.move_down(0, 5);
        view.move_up(0);
        assert_eq!(view, ViewState::default());
        assert!(view.selected(0).is_err());
    }

    #[test]
    fn selected_reports_position() {
        let mut view = ViewState::new();
        view.move_down(3, 5);
        assert_eq!(view.selected(3), Ok(1));
    }

    #[test]
    fn clamp_after_shrink_and_resize() {
        let mut view = ViewState {
            selection_index: 9,
            scroll_offset: 5,
        };
        view.clamp(4, 2);
        assert_bounds(&view, 4, 2);
        assert_eq!(view.selection_index, 3);
        assert_eq!(view.scroll_offset, 2);
    }

    #[test]
    fn select_follows_a_moved_task() {
        let mut view = ViewState::new();
        view.select(7, 10, 3);
        assert_bounds(&view, 10, 3);
        assert_eq!(view.selection_index, 7);
        view.select(0, 10, 3);
        assert_eq!(view.selection_index, 0);
        assert_eq!(view.scroll_offset, 0);
    }

    #[test]
    fn nudge_scroll_stops_at_selection() {
        let mut view = ViewState {
            selection_index: 2,
            scroll_offset: 1,
        };
        assert!(view.nudge_scroll());
        assert!(!view.nudge_scroll());
        assert_eq!(view.scroll_offset, 2);
    }

    #[test]
    fn bounds_hold_for_any_move_sequence() {
        // Deterministic LCG so the sequence is reproducible
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };

        for len in 0..12 {
            for rows in 1..6 {
                let mut view = ViewState::new();
                for _ in 0..200 {
                    if next() % 2 == 0 {
                        view.move_up(len);
                    } else {
                        view.move_down(len, rows);
                    }
                    assert_bounds(&view, len, rows);
                    if len > 0 {
                        assert!(view.selected(len).is_ok());
                    }
                }
            }
        }
    }
}
