//! [`MemorySurface`]: a deterministic in-memory host for tests and demos.

use crate::events::Event;
use crate::geom::{Point, Rect};

use super::{ElementId, ElementKind, Surface};

#[derive(Debug, Clone)]
struct ElementData {
    kind: ElementKind,
    label: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    rect: Rect,
    visible: bool,
    offset: Point,
    tab_stop: bool,
    expanded: Option<bool>,
}

/// An in-memory element tree implementing [`Surface`].
///
/// Besides the trait itself it offers builder methods for constructing
/// menu-shaped trees, inspection getters for asserting on widget effects,
/// and an event-echo queue: a real host dispatches blur/focus (and click)
/// events as a consequence of `focus()` / `activate()` calls, so this one
/// records the events it would have dispatched and hands them out through
/// [`MemorySurface::take_pending`] for the driver to pump back in.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    elements: Vec<ElementData>,
    focused: Option<ElementId>,
    pending: Vec<(ElementId, Event)>,
    activations: Vec<ElementId>,
}

impl MemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    // -- builders --

    /// Insert a bare element under `parent` (or as a root).
    pub fn element(
        &mut self,
        parent: Option<ElementId>,
        kind: ElementKind,
        label: &str,
    ) -> ElementId {
        let id = ElementId::new(self.elements.len());
        self.elements.push(ElementData {
            kind,
            label: label.to_string(),
            parent,
            children: Vec::new(),
            rect: Rect::from_size(Point::ZERO, label.chars().count() as i32, 1),
            visible: true,
            offset: Point::ZERO,
            tab_stop: false,
            expanded: None,
        });
        if let Some(p) = parent {
            self.elements[p.index()].children.push(id);
        }
        id
    }

    /// Insert a list element (menubar or submenu root).
    pub fn list(&mut self, parent: Option<ElementId>) -> ElementId {
        self.element(parent, ElementKind::List, "")
    }

    /// Insert a list entry with a trigger labelled `label` into `list`.
    /// Returns the trigger element.
    pub fn entry(&mut self, list: ElementId, label: &str) -> ElementId {
        let item = self.element(Some(list), ElementKind::Item, "");
        self.element(Some(item), ElementKind::Trigger, label)
    }

    /// Insert a submenu list directly after `trigger` inside its entry.
    /// Returns the new list element.
    pub fn submenu(&mut self, trigger: ElementId) -> ElementId {
        let parent = self.elements[trigger.index()].parent;
        self.element(parent, ElementKind::List, "")
    }

    /// Override the bounding rectangle of `el`.
    pub fn set_rect(&mut self, el: ElementId, rect: Rect) {
        self.elements[el.index()].rect = rect;
    }

    // -- inspection --

    /// The element currently holding input focus.
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn is_visible(&self, el: ElementId) -> bool {
        self.elements[el.index()].visible
    }

    /// The expanded indicator, or `None` if it was never set.
    pub fn is_expanded(&self, el: ElementId) -> Option<bool> {
        self.elements[el.index()].expanded
    }

    pub fn is_tab_stop(&self, el: ElementId) -> bool {
        self.elements[el.index()].tab_stop
    }

    /// Offset applied by the last `show_at` call for `el`.
    pub fn offset_of(&self, el: ElementId) -> Point {
        self.elements[el.index()].offset
    }

    /// Drain the events a real host would have dispatched as a result of
    /// `focus()` / `activate()` calls since the last drain.
    pub fn take_pending(&mut self) -> Vec<(ElementId, Event)> {
        std::mem::take(&mut self.pending)
    }

    /// Drain the triggers natively activated since the last drain.
    pub fn take_activations(&mut self) -> Vec<ElementId> {
        std::mem::take(&mut self.activations)
    }
}

impl Surface for MemorySurface {
    fn first_child(&self, el: ElementId) -> Option<ElementId> {
        self.elements[el.index()].children.first().copied()
    }

    fn next_sibling(&self, el: ElementId) -> Option<ElementId> {
        let parent = self.elements[el.index()].parent?;
        let siblings = &self.elements[parent.index()].children;
        let pos = siblings.iter().position(|&c| c == el)?;
        siblings.get(pos + 1).copied()
    }

    fn kind(&self, el: ElementId) -> ElementKind {
        self.elements[el.index()].kind
    }

    fn label(&self, el: ElementId) -> String {
        self.elements[el.index()].label.clone()
    }

    fn rect(&self, el: ElementId) -> Rect {
        self.elements[el.index()].rect
    }

    fn focus(&mut self, el: ElementId) {
        if self.focused == Some(el) {
            return;
        }
        if let Some(old) = self.focused {
            self.pending.push((old, Event::Blur));
        }
        self.focused = Some(el);
        self.pending.push((el, Event::Focus));
    }

    fn set_tab_stop(&mut self, el: ElementId, on: bool) {
        self.elements[el.index()].tab_stop = on;
    }

    fn set_expanded(&mut self, el: ElementId, on: bool) {
        self.elements[el.index()].expanded = Some(on);
    }

    fn show_at(&mut self, el: ElementId, offset: Point) {
        let data = &mut self.elements[el.index()];
        data.visible = true;
        data.offset = offset;
    }

    fn hide(&mut self, el: ElementId) {
        self.elements[el.index()].visible = false;
    }

    fn activate(&mut self, el: ElementId) {
        self.activations.push(el);
        self.pending.push((el, Event::Click));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_menu_shape() {
        let mut s = MemorySurface::new();
        let bar = s.list(None);
        let file = s.entry(bar, "File");
        let file_menu = s.submenu(file);
        let open = s.entry(file_menu, "Open");

        // li -> a, then the submenu list as the trigger's next sibling
        let li = s.first_child(bar).unwrap();
        assert_eq!(s.kind(li), ElementKind::Item);
        assert_eq!(s.first_child(li), Some(file));
        assert_eq!(s.next_sibling(file), Some(file_menu));
        assert_eq!(s.label(open), "Open");
    }

    #[test]
    fn default_rect_tracks_label_width() {
        let mut s = MemorySurface::new();
        let bar = s.list(None);
        let edit = s.entry(bar, "Edit");
        assert_eq!(s.rect(edit).width(), 4);
        assert_eq!(s.rect(edit).height(), 1);
    }

    #[test]
    fn focus_echoes_blur_then_focus() {
        let mut s = MemorySurface::new();
        let bar = s.list(None);
        let a = s.entry(bar, "A");
        let b = s.entry(bar, "B");

        s.focus(a);
        assert_eq!(s.take_pending(), vec![(a, Event::Focus)]);

        s.focus(b);
        assert_eq!(s.take_pending(), vec![(a, Event::Blur), (b, Event::Focus)]);

        // Refocusing the focused element is silent.
        s.focus(b);
        assert!(s.take_pending().is_empty());
    }

    #[test]
    fn activation_echoes_click() {
        let mut s = MemorySurface::new();
        let bar = s.list(None);
        let a = s.entry(bar, "A");
        s.activate(a);
        assert_eq!(s.take_activations(), vec![a]);
        assert_eq!(s.take_pending(), vec![(a, Event::Click)]);
    }
}
