//! Popup display state: open, close eligibility, and debounced close.
//!
//! `close(force = false)` is the heart of the hover/focus coordination:
//! pointer-leave and blur events fire independently and out of order, so
//! a non-forced close first re-checks every reason the menu might still
//! be in use and backs off if it finds one. Deferred checks re-read that
//! state when they run, which makes stale timers harmless.

use std::time::{Duration, Instant};

use rove_core::{Point, Surface};

use crate::tree::{CloseCheck, Menubar, PopupId};

/// Delay before re-checking close eligibility after a leaf's mouseout or
/// blur.
pub(crate) const CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Delay after the pointer leaves a popup's own root: long enough to
/// cross the visual gap between a trigger and its submenu without the
/// menu flicker-closing.
pub(crate) const GAP_DELAY: Duration = Duration::from_millis(1);

impl<S: Surface> Menubar<S> {
    /// Open `popup`, positioning it against its controlling trigger:
    /// nested submenus open to the right, top-level dropdowns open below.
    /// Opening an already-open popup re-applies the positioning.
    pub(crate) fn open_popup(&mut self, popup: PopupId) {
        let controller = self.popups[popup.0].controller;
        let (trigger, top_level) = {
            let n = self.node(controller);
            (n.trigger, n.is_top_level)
        };

        let rect = self.surface.rect(trigger);
        let offset = if top_level {
            Point::new(0, rect.height() - 1)
        } else {
            Point::new(rect.width(), 0)
        };

        let root = self.popups[popup.0].list.root;
        self.surface.show_at(root, offset);
        self.surface.set_expanded(trigger, true);

        if !self.popups[popup.0].is_open {
            log::debug!("popup {popup:?} opened at offset {offset}");
        }
        self.popups[popup.0].is_open = true;
    }

    /// Close `popup` unless something still needs it open.
    ///
    /// Keep-open reasons: the popup has focus or hover, its controller
    /// has hover, or focus sits anywhere inside an open descendant
    /// popup. `force` ignores all of them.
    pub(crate) fn close_popup(&mut self, popup: PopupId, force: bool) {
        let controller = self.popups[popup.0].controller;
        let controller_has_hover = self.node(controller).has_hover;

        let has_focus = self.popups[popup.0].list.has_focus || self.descendant_focus(popup);
        let has_hover = self.popups[popup.0].list.has_hover;

        // The controller's hover flag is consumed by this check: a
        // sub-item stops counting as hovered once its menu re-evaluates.
        if !self.node(controller).is_top_level {
            self.node_mut(controller).has_hover = false;
        }

        if force || (!has_focus && !has_hover && !controller_has_hover) {
            let root = self.popups[popup.0].list.root;
            self.surface.hide(root);
            let trigger = self.node(controller).trigger;
            self.surface.set_expanded(trigger, false);
            if self.popups[popup.0].is_open {
                log::debug!("popup {popup:?} closed (force: {force})");
            }
            self.popups[popup.0].is_open = false;
        }
    }

    /// Whether focus sits in any open popup below `popup`.
    fn descendant_focus(&self, popup: PopupId) -> bool {
        let mut stack: Vec<PopupId> = vec![popup];
        while let Some(p) = stack.pop() {
            for &item in &self.popups[p.0].list.items {
                let Some(sub) = self.node(item).submenu else {
                    continue;
                };
                if !self.popups[sub.0].is_open {
                    continue;
                }
                if self.popups[sub.0].list.has_focus {
                    return true;
                }
                stack.push(sub);
            }
        }
        false
    }

    /// Schedule a deferred close check for `popup`, superseding any check
    /// already pending for it.
    pub(crate) fn schedule_close_check(&mut self, popup: PopupId, delay: Duration) {
        self.timers
            .schedule(popup, Instant::now() + delay, CloseCheck { popup });
    }
}

#[cfg(test)]
mod tests {
    use rove_core::{Event, Rect};

    use super::*;
    use crate::tree::fixture::{pump, send, three_level};

    #[test]
    fn top_level_popup_opens_below_its_trigger() {
        let mut t = three_level();
        let p = t.bar.popup_for(t.edit_menu).unwrap();
        t.bar
            .surface_mut()
            .set_rect(t.edit, Rect::from_size(Point::new(10, 0), 8, 3));

        t.bar.open_popup(p);
        assert!(t.bar.is_open(p));
        assert!(t.bar.surface().is_visible(t.edit_menu));
        assert_eq!(t.bar.surface().offset_of(t.edit_menu), Point::new(0, 2));
        assert_eq!(t.bar.surface().is_expanded(t.edit), Some(true));
    }

    #[test]
    fn nested_popup_opens_to_the_right() {
        let mut t = three_level();
        let p = t.bar.popup_for(t.redo_menu).unwrap();
        t.bar
            .surface_mut()
            .set_rect(t.redo, Rect::from_size(Point::ZERO, 12, 1));

        t.bar.open_popup(p);
        assert_eq!(t.bar.surface().offset_of(t.redo_menu), Point::new(12, 0));
    }

    #[test]
    fn forced_close_ignores_focus_and_hover() {
        let mut t = three_level();
        let p = t.bar.popup_for(t.edit_menu).unwrap();
        t.bar.open_popup(p);
        t.bar.popups[p.0].list.has_focus = true;
        t.bar.popups[p.0].list.has_hover = true;

        t.bar.close_popup(p, true);
        assert!(!t.bar.is_open(p));
        assert!(!t.bar.surface().is_visible(t.edit_menu));
        assert_eq!(t.bar.surface().is_expanded(t.edit), Some(false));
    }

    #[test]
    fn unforced_close_backs_off_while_in_use() {
        let mut t = three_level();
        let p = t.bar.popup_for(t.edit_menu).unwrap();

        // Own focus.
        t.bar.open_popup(p);
        t.bar.popups[p.0].list.has_focus = true;
        t.bar.close_popup(p, false);
        assert!(t.bar.is_open(p));
        t.bar.popups[p.0].list.has_focus = false;

        // Own hover.
        t.bar.popups[p.0].list.has_hover = true;
        t.bar.close_popup(p, false);
        assert!(t.bar.is_open(p));
        t.bar.popups[p.0].list.has_hover = false;

        // Controller hover.
        let controller = t.bar.popups[p.0].controller;
        t.bar.node_mut(controller).has_hover = true;
        t.bar.close_popup(p, false);
        assert!(t.bar.is_open(p));
        t.bar.node_mut(controller).has_hover = false;

        // Nothing left: it closes.
        t.bar.close_popup(p, false);
        assert!(!t.bar.is_open(p));
    }

    #[test]
    fn unforced_close_sees_focus_in_open_descendants() {
        let mut t = three_level();
        let edit_popup = t.bar.popup_for(t.edit_menu).unwrap();
        let redo_popup = t.bar.popup_for(t.redo_menu).unwrap();
        t.bar.open_popup(edit_popup);
        t.bar.open_popup(redo_popup);
        t.bar.popups[redo_popup.0].list.has_focus = true;

        t.bar.close_popup(edit_popup, false);
        assert!(t.bar.is_open(edit_popup), "kept open by descendant focus");

        // A closed descendant's focus flag no longer counts.
        t.bar.popups[redo_popup.0].is_open = false;
        t.bar.close_popup(edit_popup, false);
        assert!(!t.bar.is_open(edit_popup));
    }

    #[test]
    fn deferred_check_reads_live_state() {
        let mut t = three_level();
        let p = t.bar.popup_for(t.edit_menu).unwrap();
        let long_after = Instant::now() + Duration::from_secs(5);

        // Hover in, hover out: a check is scheduled.
        send(&mut t.bar, t.edit, Event::MouseOver);
        assert!(t.bar.is_open(p));
        send(&mut t.bar, t.edit, Event::MouseOut);
        assert!(t.bar.next_deadline().is_some());

        // Hover back in before the delay elapses: the stale check finds a
        // live hover and backs off.
        send(&mut t.bar, t.edit, Event::MouseOver);
        t.bar.tick(long_after);
        assert!(t.bar.is_open(p));

        // Hover out for good: the next check closes it.
        send(&mut t.bar, t.edit, Event::MouseOut);
        t.bar.tick(Instant::now() + Duration::from_secs(10));
        assert!(!t.bar.is_open(p));
        pump(&mut t.bar);
    }

    #[test]
    fn rescheduling_supersedes_the_pending_check() {
        let mut t = three_level();
        send(&mut t.bar, t.edit, Event::MouseOver);
        send(&mut t.bar, t.edit, Event::MouseOut);
        send(&mut t.bar, t.edit, Event::MouseOver);
        send(&mut t.bar, t.edit, Event::MouseOut);
        assert_eq!(t.bar.timers.len(), 1);
    }
}
