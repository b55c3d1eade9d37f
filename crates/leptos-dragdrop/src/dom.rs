//! DOM Bindings
//!
//! `web_sys` implementations of the reorder and file-drop surfaces and of
//! the page they are found on.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, Element, Event, EventTarget, FileList, HtmlElement, HtmlInputElement, Node};

use crate::bind::{HelperOptions, OnOrder, PageHost, ReorderOptions};
use crate::file_drop::{FileHelper, FileSelection, HelperCandidate, HelperSurface};
use crate::reorder::{Bounds, InsertPosition, ReorderList, ReorderSurface};

// ========================
// Event plumbing
// ========================

fn listen_drag(target: &EventTarget, event: &str, handler: impl FnMut(DragEvent) + 'static) {
    let cb = Closure::<dyn FnMut(DragEvent)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("could not bind {}: {:?}", event, e);
    }
    // Handlers live as long as the page.
    cb.forget();
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("could not bind {}: {:?}", event, e);
    }
    cb.forget();
}

// ========================
// Reorderable list
// ========================

/// A list container in the document
pub struct DomList {
    container: Element,
    options: ReorderOptions,
}

impl DomList {
    pub fn new(container: Element, options: ReorderOptions) -> Self {
        Self { container, options }
    }
}

impl ReorderSurface for DomList {
    type Item = HtmlElement;

    fn items(&self) -> Vec<HtmlElement> {
        let children = self.container.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter(|el| el.tag_name().eq_ignore_ascii_case(&self.options.item_tag))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn item_id(&self, item: &HtmlElement) -> Option<String> {
        item.get_attribute(&self.options.id_attribute)
    }

    fn bounds(&self, item: &HtmlElement) -> Bounds {
        let rect = item.get_bounding_client_rect();
        Bounds::new(rect.top(), rect.height())
    }

    fn move_item(&self, item: &HtmlElement, anchor: &HtmlElement, position: InsertPosition) {
        let Some(parent) = anchor.parent_node() else {
            return;
        };
        let reference: Option<Node> = match position {
            InsertPosition::Before => Some(anchor.clone().into()),
            InsertPosition::After => anchor.next_sibling(),
        };
        if let Err(e) = parent.insert_before(item, reference.as_ref()) {
            log::warn!("reorder move rejected: {:?}", e);
        }
    }

    fn set_dragging(&self, item: &HtmlElement, dragging: bool) {
        let classes = item.class_list();
        let result = if dragging {
            classes.add_1(&self.options.dragging_class)
        } else {
            classes.remove_1(&self.options.dragging_class)
        };
        if let Err(e) = result {
            log::warn!("could not toggle {}: {:?}", self.options.dragging_class, e);
        }
    }
}

// ========================
// File input helpers
// ========================

impl FileSelection for FileList {
    fn count(&self) -> u32 {
        self.length()
    }

    fn first_name(&self) -> Option<String> {
        self.get(0).map(|f| f.name())
    }
}

impl HelperCandidate for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

/// A file input and the helper element following it
pub struct DomHelper {
    input: HtmlInputElement,
    helper: HtmlElement,
    text_class: String,
}

impl DomHelper {
    pub fn new(input: HtmlInputElement, helper: HtmlElement, text_class: &str) -> Self {
        Self {
            input,
            helper,
            text_class: text_class.to_string(),
        }
    }
}

impl HelperSurface for DomHelper {
    type Files = FileList;

    fn open_picker(&self) {
        self.input.click();
    }

    fn paint(&self, border_color: &str, background: &str) {
        let style = self.helper.style();
        for (property, value) in [("border-color", border_color), ("background", background)] {
            if let Err(e) = style.set_property(property, value) {
                log::warn!("could not set {}: {:?}", property, e);
            }
        }
    }

    fn assign_files(&self, files: &FileList) {
        self.input.set_files(Some(files));
    }

    fn set_label(&self, text: &str) -> bool {
        let selector = format!(".{}", self.text_class);
        match self.helper.query_selector(&selector) {
            Ok(Some(label)) => {
                label.set_text_content(Some(text));
                true
            }
            _ => false,
        }
    }
}

// ========================
// Page
// ========================

/// The live document
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PageHost for DomPage {
    type List = DomList;
    type Input = HtmlInputElement;
    type Sibling = Element;
    type Helper = DomHelper;

    fn find_list(&self, options: &ReorderOptions) -> Option<DomList> {
        let container = self.document.get_element_by_id(&options.container_id)?;
        Some(DomList::new(container, options.clone()))
    }

    fn file_inputs(&self, options: &HelperOptions) -> Vec<(HtmlInputElement, Option<Element>)> {
        let Ok(inputs) = self.document.query_selector_all(&options.input_selector) else {
            return Vec::new();
        };
        (0..inputs.length())
            .filter_map(|i| inputs.get(i))
            .filter_map(|n| n.dyn_into::<HtmlInputElement>().ok())
            .map(|input| {
                let sibling = input.next_element_sibling();
                (input, sibling)
            })
            .collect()
    }

    fn helper_surface(&self, input: HtmlInputElement, helper: Element, options: &HelperOptions) -> Option<DomHelper> {
        let helper = helper.dyn_into::<HtmlElement>().ok()?;
        Some(DomHelper::new(input, helper, &options.text_class))
    }

    fn attach_item(&self, list: &Rc<ReorderList<DomList>>, item: &HtmlElement, on_order: &OnOrder) {
        item.set_draggable(true);

        let (l, it) = (list.clone(), item.clone());
        listen_drag(item, "dragstart", move |ev: DragEvent| {
            l.drag_start(&it);
            // Firefox won't start the drag without a payload.
            if let Some(dt) = ev.data_transfer() {
                let id = l.surface().item_id(&it).unwrap_or_default();
                let _ = dt.set_data("text/plain", &id);
            }
        });

        let (l, it) = (list.clone(), item.clone());
        listen_drag(item, "dragover", move |ev: DragEvent| {
            ev.prevent_default();
            l.drag_over(&it, f64::from(ev.client_y()));
        });

        let (l, it, cb) = (list.clone(), item.clone(), on_order.clone());
        listen_drag(item, "dragend", move |_ev: DragEvent| {
            cb(l.drag_end(&it));
        });
    }

    fn attach_helper(&self, controller: Rc<FileHelper<DomHelper>>) {
        let surface = controller.surface();
        let target: EventTarget = surface.helper.clone().into();
        let input_target: EventTarget = surface.input.clone().into();

        let c = controller.clone();
        listen(&target, "click", move |_ev: Event| c.click());

        let c = controller.clone();
        listen_drag(&target, "dragover", move |ev: DragEvent| {
            ev.prevent_default();
            c.drag_over();
        });

        let c = controller.clone();
        listen_drag(&target, "dragleave", move |_ev: DragEvent| c.drag_leave());

        let c = controller.clone();
        listen_drag(&target, "drop", move |ev: DragEvent| {
            ev.prevent_default();
            let files = ev.data_transfer().and_then(|dt| dt.files());
            c.drop_files(files.as_ref());
        });

        let c = controller;
        listen(&input_target, "change", move |ev: Event| {
            let files = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files());
            c.change(files.as_ref());
        });
    }
}
