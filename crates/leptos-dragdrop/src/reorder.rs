//! List Reordering
//!
//! Live reorder of list items while an HTML5 drag is in progress.
//! The DOM side is hidden behind [`ReorderSurface`] so the logic runs
//! against any list-like fixture.

use leptos::prelude::*;

/// Where the dragged item lands relative to the hovered one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertPosition {
    Before,
    After,
}

/// Vertical extent of an item, in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Pick the side of `bounds` the pointer is on.
///
/// Strictly below the midpoint means after; the midpoint itself is before.
pub fn insert_position(bounds: Bounds, pointer_y: f64) -> InsertPosition {
    if pointer_y - bounds.top > bounds.height / 2.0 {
        InsertPosition::After
    } else {
        InsertPosition::Before
    }
}

/// Keep only present, non-empty identifiers, in order
pub fn collect_order<I>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    ids.into_iter()
        .flatten()
        .filter(|id| !id.is_empty())
        .collect()
}

/// A list whose items can be measured and moved
pub trait ReorderSurface {
    type Item: Clone + PartialEq + 'static;

    /// Items in current visual order
    fn items(&self) -> Vec<Self::Item>;

    /// Identifier attribute of an item, if any
    fn item_id(&self, item: &Self::Item) -> Option<String>;

    fn bounds(&self, item: &Self::Item) -> Bounds;

    /// Move `item` next to `anchor`
    fn move_item(&self, item: &Self::Item, anchor: &Self::Item, position: InsertPosition);

    /// Toggle the "dragging" marker
    fn set_dragging(&self, item: &Self::Item, dragging: bool);
}

/// Drag controller for one list
///
/// idle -> dragging (drag start) -> idle (drag end)
pub struct ReorderList<S: ReorderSurface> {
    surface: S,
    dragging: RwSignal<Option<S::Item>, LocalStorage>,
}

impl<S: ReorderSurface> ReorderList<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            dragging: RwSignal::new_local(None),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Item currently being relocated
    pub fn dragging(&self) -> Option<S::Item> {
        self.dragging.get_untracked()
    }

    pub fn drag_start(&self, item: &S::Item) {
        self.dragging.set(Some(item.clone()));
        self.surface.set_dragging(item, true);
    }

    /// Move the dragged item around `hovered`.
    ///
    /// Returns the applied position, or `None` when nothing moved.
    pub fn drag_over(&self, hovered: &S::Item, pointer_y: f64) -> Option<InsertPosition> {
        let dragged = self.dragging.get_untracked()?;
        if &dragged == hovered {
            return None;
        }
        let position = insert_position(self.surface.bounds(hovered), pointer_y);
        self.surface.move_item(&dragged, hovered, position);
        Some(position)
    }

    /// Finish the gesture and return the order to persist
    pub fn drag_end(&self, item: &S::Item) -> Vec<String> {
        self.surface.set_dragging(item, false);
        self.dragging.set(None);
        self.current_order()
    }

    pub fn current_order(&self) -> Vec<String> {
        let items = self.surface.items();
        collect_order(items.iter().map(|item| self.surface.item_id(item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    const ROW_HEIGHT: f64 = 20.0;

    /// Vertical list of fixed-height rows keyed by index of creation
    pub struct FakeList {
        ids: Vec<Option<&'static str>>,
        order: RefCell<Vec<usize>>,
        marked: RefCell<HashSet<usize>>,
    }

    impl FakeList {
        pub fn new(ids: &[Option<&'static str>]) -> Self {
            Self {
                ids: ids.to_vec(),
                order: RefCell::new((0..ids.len()).collect()),
                marked: RefCell::new(HashSet::new()),
            }
        }

        pub fn key(&self, id: &str) -> usize {
            self.ids.iter().position(|i| *i == Some(id)).unwrap()
        }

        pub fn visible(&self) -> Vec<Option<&'static str>> {
            self.order.borrow().iter().map(|k| self.ids[*k]).collect()
        }

        pub fn is_marked(&self, key: usize) -> bool {
            self.marked.borrow().contains(&key)
        }
    }

    impl ReorderSurface for FakeList {
        type Item = usize;

        fn items(&self) -> Vec<usize> {
            self.order.borrow().clone()
        }

        fn item_id(&self, item: &usize) -> Option<String> {
            self.ids[*item].map(str::to_string)
        }

        fn bounds(&self, item: &usize) -> Bounds {
            let row = self.order.borrow().iter().position(|k| k == item).unwrap();
            Bounds::new(row as f64 * ROW_HEIGHT, ROW_HEIGHT)
        }

        fn move_item(&self, item: &usize, anchor: &usize, position: InsertPosition) {
            let mut order = self.order.borrow_mut();
            order.retain(|k| k != item);
            let at = order.iter().position(|k| k == anchor).unwrap();
            let at = match position {
                InsertPosition::Before => at,
                InsertPosition::After => at + 1,
            };
            order.insert(at, *item);
        }

        fn set_dragging(&self, item: &usize, dragging: bool) {
            if dragging {
                self.marked.borrow_mut().insert(*item);
            } else {
                self.marked.borrow_mut().remove(item);
            }
        }
    }

    /// Pointer y inside row `row` at fraction `frac` of its height
    fn at(row: usize, frac: f64) -> f64 {
        row as f64 * ROW_HEIGHT + frac * ROW_HEIGHT
    }

    #[test]
    fn test_insert_position_halves() {
        let b = Bounds::new(100.0, 40.0);
        assert_eq!(insert_position(b, 101.0), InsertPosition::Before);
        assert_eq!(insert_position(b, 139.0), InsertPosition::After);
        // exactly at the midpoint stays before
        assert_eq!(insert_position(b, 120.0), InsertPosition::Before);
        assert_eq!(insert_position(b, 120.5), InsertPosition::After);
    }

    #[test]
    fn test_collect_order_skips_missing_ids() {
        let ids = vec![Some("x".to_string()), None, Some(String::new()), Some("y".to_string())];
        assert_eq!(collect_order(ids), vec!["x", "y"]);
    }

    #[test]
    fn test_move_first_after_second() {
        let list = ReorderList::new(FakeList::new(&[Some("a"), Some("b"), Some("c")]));
        let a = list.surface().key("a");
        let b = list.surface().key("b");

        list.drag_start(&a);
        assert_eq!(list.dragging(), Some(a));
        assert!(list.surface().is_marked(a));

        // lower half of "b" (row 1)
        assert_eq!(list.drag_over(&b, at(1, 0.75)), Some(InsertPosition::After));
        let order = list.drag_end(&a);

        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(list.dragging(), None);
        assert!(!list.surface().is_marked(a));
    }

    #[test]
    fn test_items_without_id_are_not_sent() {
        let list = ReorderList::new(FakeList::new(&[Some("x"), None, Some("y")]));
        let x = list.surface().key("x");
        list.drag_start(&x);
        let order = list.drag_end(&x);
        assert_eq!(order, vec!["x", "y"]);
        // the anonymous row is still in the list
        assert_eq!(list.surface().visible().len(), 3);
    }

    #[test]
    fn test_hovering_self_does_nothing() {
        let list = ReorderList::new(FakeList::new(&[Some("a"), Some("b")]));
        let a = list.surface().key("a");
        list.drag_start(&a);
        assert_eq!(list.drag_over(&a, at(0, 0.9)), None);
        assert_eq!(list.surface().visible(), vec![Some("a"), Some("b")]);
    }

    #[test]
    fn test_drag_over_without_drag_is_ignored() {
        let list = ReorderList::new(FakeList::new(&[Some("a"), Some("b")]));
        let b = list.surface().key("b");
        assert_eq!(list.drag_over(&b, at(1, 0.9)), None);
        assert_eq!(list.surface().visible(), vec![Some("a"), Some("b")]);
    }

    #[test]
    fn test_sequence_of_moves_follows_midpoints() {
        let list = ReorderList::new(FakeList::new(&[Some("a"), Some("b"), Some("c"), Some("d")]));
        let s = list.surface();
        let (a, b, c, d) = (s.key("a"), s.key("b"), s.key("c"), s.key("d"));

        list.drag_start(&a);
        // a b c d -> b a c d
        list.drag_over(&b, at(1, 0.6));
        assert_eq!(list.current_order(), vec!["b", "a", "c", "d"]);
        // c sits in row 2; upper half keeps a before c
        list.drag_over(&c, at(2, 0.2));
        assert_eq!(list.current_order(), vec!["b", "a", "c", "d"]);
        // lower half of d (row 3) -> b c d a
        list.drag_over(&d, at(3, 0.9));
        assert_eq!(list.current_order(), vec!["b", "c", "d", "a"]);
        // back up over c, now row 1, upper half -> b a c d
        list.drag_over(&c, at(1, 0.1));

        assert_eq!(list.drag_end(&a), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_each_gesture_reports_its_own_order() {
        let list = ReorderList::new(FakeList::new(&[Some("a"), Some("b"), Some("c")]));
        let s = list.surface();
        let (a, c) = (s.key("a"), s.key("c"));

        list.drag_start(&c);
        list.drag_over(&a, at(0, 0.1));
        assert_eq!(list.drag_end(&c), vec!["c", "a", "b"]);

        list.drag_start(&a);
        list.drag_over(&c, at(0, 0.1));
        assert_eq!(list.drag_end(&a), vec!["a", "c", "b"]);
    }
}
