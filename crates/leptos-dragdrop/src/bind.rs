//! Page Wiring
//!
//! Finds the list and the file helpers on a page and hands them to their
//! controllers. The page itself is a [`PageHost`], so wiring can be checked
//! without a browser.

use std::rc::Rc;

use crate::file_drop::{pair_helper, FileHelper, HelperCandidate, HelperSurface, HelperTheme};
use crate::reorder::{ReorderList, ReorderSurface};

/// Selectors and markers of the reorderable list
#[derive(Clone, Debug, PartialEq)]
pub struct ReorderOptions {
    /// Id of the list container
    pub container_id: String,
    /// Tag name of the list items
    pub item_tag: String,
    pub id_attribute: String,
    pub dragging_class: String,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            container_id: "links-list".to_string(),
            item_tag: "li".to_string(),
            id_attribute: "data-id".to_string(),
            dragging_class: "dragging".to_string(),
        }
    }
}

/// Selectors and markers of the file input helpers
#[derive(Clone, Debug, PartialEq)]
pub struct HelperOptions {
    pub input_selector: String,
    pub helper_class: String,
    pub text_class: String,
    pub theme: HelperTheme,
}

impl Default for HelperOptions {
    fn default() -> Self {
        Self {
            input_selector: "input[type=\"file\"]".to_string(),
            helper_class: "file-input-helper".to_string(),
            text_class: "file-text".to_string(),
            theme: HelperTheme::default(),
        }
    }
}

/// Callback receiving the final order of a gesture
pub type OnOrder = Rc<dyn Fn(Vec<String>)>;

/// A page the controllers attach to
pub trait PageHost {
    type List: ReorderSurface;
    type Input;
    type Sibling: HelperCandidate;
    type Helper: HelperSurface;

    /// The list container, if present
    fn find_list(&self, options: &ReorderOptions) -> Option<Self::List>;

    /// Every file input with the element right after it
    fn file_inputs(&self, options: &HelperOptions) -> Vec<(Self::Input, Option<Self::Sibling>)>;

    /// Build the surface of a paired input, `None` if the helper is unusable
    fn helper_surface(&self, input: Self::Input, helper: Self::Sibling, options: &HelperOptions) -> Option<Self::Helper>;

    /// Attach drag handlers to one list item
    fn attach_item(
        &self,
        list: &Rc<ReorderList<Self::List>>,
        item: &<Self::List as ReorderSurface>::Item,
        on_order: &OnOrder,
    );

    /// Attach click and drop handlers to one helper
    fn attach_helper(&self, helper: Rc<FileHelper<Self::Helper>>);
}

/// Make every item of the list draggable and report the final order of
/// each gesture to `on_order`.
///
/// Returns the number of items wired; zero when the container is missing.
pub fn bind_reorder_list<P, F>(page: &P, options: &ReorderOptions, on_order: F) -> usize
where
    P: PageHost,
    F: Fn(Vec<String>) + 'static,
{
    let Some(surface) = page.find_list(options) else {
        log::debug!("no #{} on this page", options.container_id);
        return 0;
    };

    let list = Rc::new(ReorderList::new(surface));
    let on_order: OnOrder = Rc::new(on_order);
    let items = list.surface().items();
    for item in &items {
        page.attach_item(&list, item, &on_order);
    }
    items.len()
}

/// Wire every file input that is followed by a helper element.
///
/// Inputs without a marked sibling are left alone. Returns the number of
/// pairs wired.
pub fn bind_file_helpers<P: PageHost>(page: &P, options: &HelperOptions) -> usize {
    let mut wired = 0;
    for (input, sibling) in page.file_inputs(options) {
        let Some(helper) = pair_helper(sibling, &options.helper_class) else {
            continue;
        };
        let Some(surface) = page.helper_surface(input, helper, options) else {
            continue;
        };
        page.attach_helper(Rc::new(FileHelper::new(surface, options.theme.clone())));
        wired += 1;
    }
    wired
}
