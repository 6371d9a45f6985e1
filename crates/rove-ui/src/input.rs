//! Per-element event handling: keyboard dispatch for the two leaf
//! variants, click, focus/blur, and hover.
//!
//! A leaf acts locally where it can (open its own submenu) and delegates
//! everything else to its owning container. Containers only ever see
//! mouseover/mouseout on their own root, used for hover aggregation.

use rove_core::{Event, Key, Surface};

use crate::focus::FocusCommand;
use crate::popup::{CLOSE_DELAY, GAP_DELAY};
use crate::tree::{MenuRef, Menubar, NodeId, Outcome};

impl<S: Surface> Menubar<S> {
    pub(crate) fn node_event(&mut self, id: NodeId, event: Event) -> Outcome {
        let top_level = self.node(id).is_top_level;
        match event {
            Event::KeyDown { key } => {
                if top_level {
                    self.top_keydown(id, key)
                } else {
                    self.sub_keydown(id, key)
                }
            }
            Event::Click => {
                if !top_level {
                    self.sub_click(id);
                }
                Outcome::Pass
            }
            Event::Focus => {
                // Top-level items only feed the bar's aggregate flag; the
                // per-node flag matters to the popup keep-open check.
                if !top_level {
                    self.node_mut(id).has_focus = true;
                }
                let container = self.node(id).container;
                self.container_mut(container).has_focus = true;
                Outcome::Pass
            }
            Event::Blur => {
                if !top_level {
                    self.node_mut(id).has_focus = false;
                }
                let container = self.node(id).container;
                self.container_mut(container).has_focus = false;
                // The menubar itself never hides; only popups re-check.
                if let MenuRef::Popup(p) = container {
                    self.schedule_close_check(p, CLOSE_DELAY);
                }
                Outcome::Pass
            }
            Event::MouseOver => {
                if top_level {
                    self.top_mouseover(id);
                } else {
                    self.sub_mouseover(id);
                }
                Outcome::Pass
            }
            Event::MouseOut => {
                if top_level {
                    self.top_mouseout(id);
                } else {
                    self.sub_mouseout(id);
                }
                Outcome::Pass
            }
        }
    }

    /// Hover aggregation on a container's own root element.
    pub(crate) fn container_event(&mut self, m: MenuRef, event: Event) -> Outcome {
        match event {
            Event::MouseOver => {
                self.container_mut(m).has_hover = true;
            }
            Event::MouseOut => {
                self.container_mut(m).has_hover = false;
                if let MenuRef::Popup(p) = m {
                    self.schedule_close_check(p, GAP_DELAY);
                }
            }
            _ => {}
        }
        Outcome::Pass
    }

    // -- keyboard --

    fn top_keydown(&mut self, id: NodeId, key: Key) -> Outcome {
        let submenu = self.node(id).submenu;
        match key {
            Key::Space | Key::Enter | Key::ArrowDown => {
                let Some(p) = submenu else {
                    return Outcome::Pass;
                };
                self.open_popup(p);
                self.set_focus_to_first_item(MenuRef::Popup(p));
                Outcome::Consumed
            }
            Key::ArrowUp => {
                let Some(p) = submenu else {
                    return Outcome::Pass;
                };
                self.open_popup(p);
                self.set_focus_to_last_item(MenuRef::Popup(p));
                Outcome::Consumed
            }
            Key::ArrowLeft => {
                if let Some(p) = submenu {
                    self.close_popup(p, true);
                }
                self.set_focus_to_previous_item(MenuRef::Bar, id);
                Outcome::Consumed
            }
            Key::ArrowRight => {
                if let Some(p) = submenu {
                    self.close_popup(p, true);
                }
                self.set_focus_to_next_item(MenuRef::Bar, id);
                Outcome::Consumed
            }
            Key::Home | Key::PageUp => {
                self.set_focus_to_first_item(MenuRef::Bar);
                Outcome::Consumed
            }
            Key::End | Key::PageDown => {
                self.set_focus_to_last_item(MenuRef::Bar);
                Outcome::Consumed
            }
            Key::Tab | Key::Escape => {
                if let Some(p) = submenu {
                    self.close_popup(p, true);
                }
                Outcome::Pass
            }
            _ => {
                let Some(c) = key.printable_char() else {
                    return Outcome::Pass;
                };
                self.set_focus_by_first_character(MenuRef::Bar, id, c);
                Outcome::Consumed
            }
        }
    }

    fn sub_keydown(&mut self, id: NodeId, key: Key) -> Outcome {
        let MenuRef::Popup(menu) = self.node(id).container else {
            return Outcome::Pass;
        };
        let submenu = self.node(id).submenu;
        match key {
            Key::Space | Key::Enter => {
                if let Some(p) = submenu {
                    self.open_popup(p);
                    self.set_focus_to_first_item(MenuRef::Popup(p));
                } else {
                    // Synthesize a native activation; the host runs the
                    // trigger's default behavior and delivers the
                    // resulting click back to us.
                    let trigger = self.node(id).trigger;
                    self.surface.activate(trigger);
                }
                Outcome::Consumed
            }
            Key::ArrowUp => {
                self.set_focus_to_previous_item(MenuRef::Popup(menu), id);
                Outcome::Consumed
            }
            Key::ArrowDown => {
                self.set_focus_to_next_item(MenuRef::Popup(menu), id);
                Outcome::Consumed
            }
            Key::ArrowLeft => {
                self.set_focus_to_controller(menu, FocusCommand::Previous);
                self.close_popup(menu, true);
                Outcome::Consumed
            }
            Key::ArrowRight => {
                if let Some(p) = submenu {
                    self.open_popup(p);
                    self.set_focus_to_first_item(MenuRef::Popup(p));
                } else {
                    self.set_focus_to_controller(menu, FocusCommand::Next);
                    self.close_popup(menu, true);
                }
                Outcome::Consumed
            }
            Key::Home | Key::PageUp => {
                self.set_focus_to_first_item(MenuRef::Popup(menu));
                Outcome::Consumed
            }
            Key::End | Key::PageDown => {
                self.set_focus_to_last_item(MenuRef::Popup(menu));
                Outcome::Consumed
            }
            Key::Escape => {
                self.set_focus_to_controller(menu, FocusCommand::Return);
                self.close_popup(menu, true);
                Outcome::Consumed
            }
            Key::Tab => {
                // Close and hand focus back, but let the default tab
                // navigation proceed.
                self.set_focus_to_controller(menu, FocusCommand::Return);
                self.close_popup(menu, true);
                Outcome::Pass
            }
            _ => {
                let Some(c) = key.printable_char() else {
                    return Outcome::Pass;
                };
                self.set_focus_by_first_character(MenuRef::Popup(menu), id, c);
                Outcome::Consumed
            }
        }
    }

    // -- click --

    /// A click on a sub-item hands focus back and force-closes the
    /// enclosing popup; the trigger's native behavior proceeds.
    fn sub_click(&mut self, id: NodeId) {
        let MenuRef::Popup(menu) = self.node(id).container else {
            return;
        };
        self.set_focus_to_controller(menu, FocusCommand::Return);
        self.close_popup(menu, true);
    }

    // -- hover --

    fn top_mouseover(&mut self, id: NodeId) {
        self.node_mut(id).has_hover = true;
        if let Some(p) = self.node(id).submenu {
            self.open_popup(p);
        }
    }

    fn top_mouseout(&mut self, id: NodeId) {
        self.node_mut(id).has_hover = false;
        if let Some(p) = self.node(id).submenu {
            self.schedule_close_check(p, CLOSE_DELAY);
        }
    }

    fn sub_mouseover(&mut self, id: NodeId) {
        let MenuRef::Popup(menu) = self.node(id).container else {
            return;
        };
        self.container_mut(MenuRef::Popup(menu)).has_hover = true;
        self.node_mut(id).has_hover = true;
        // Re-applies the enclosing popup's positioning as well.
        self.open_popup(menu);
        if let Some(p) = self.node(id).submenu {
            self.popups[p.0].list.has_hover = true;
            self.open_popup(p);
        }
    }

    fn sub_mouseout(&mut self, id: NodeId) {
        if let Some(p) = self.node(id).submenu {
            self.popups[p.0].list.has_hover = false;
            self.schedule_close_check(p, CLOSE_DELAY);
        }
        let MenuRef::Popup(menu) = self.node(id).container else {
            return;
        };
        self.container_mut(MenuRef::Popup(menu)).has_hover = false;
        self.node_mut(id).has_hover = false;
        self.schedule_close_check(menu, CLOSE_DELAY);
    }
}
