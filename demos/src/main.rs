//! Headless walkthrough of the menubar widget on a [`MemorySurface`].
//!
//! Builds a three-level menu, replays a keyboard and hover script, and
//! prints the widget's observable state after each step. Run with
//! `RUST_LOG=debug` to see the open/close transitions as well.

use std::time::{Duration, Instant};

use rove_core::{ElementId, Event, Key, MemorySurface};
use rove_ui::Menubar;

fn main() {
    env_logger::init();

    let mut s = MemorySurface::new();
    let root = s.list(None);
    let file = s.entry(root, "File");
    let file_menu = s.submenu(file);
    s.entry(file_menu, "New");
    s.entry(file_menu, "Open");
    s.entry(file_menu, "Save");
    let edit = s.entry(root, "Edit");
    let edit_menu = s.submenu(edit);
    s.entry(edit_menu, "Undo");
    let redo = s.entry(edit_menu, "Redo");
    let redo_menu = s.submenu(redo);
    s.entry(redo_menu, "Repeat last");
    let help = s.entry(root, "Help");

    let mut bar = match Menubar::attach(s, root) {
        Ok(bar) => bar,
        Err(e) => {
            eprintln!("attach failed: {e}");
            std::process::exit(1);
        }
    };

    let script: &[(&str, ElementId, Event)] = &[
        ("ArrowDown on File", file, Event::key(Key::ArrowDown)),
        ("ArrowDown in menu", first_of(&bar, file_menu), Event::key(Key::ArrowDown)),
        ("Escape", second_of(&bar, file_menu), Event::key(Key::Escape)),
        ("ArrowRight on File", file, Event::key(Key::ArrowRight)),
        ("ArrowDown on Edit", edit, Event::key(Key::ArrowDown)),
        ("type 'r'", first_of(&bar, edit_menu), Event::key(Key::Char('r'))),
        ("ArrowRight on Redo", redo, Event::key(Key::ArrowRight)),
        ("ArrowRight (escalates)", first_of(&bar, redo_menu), Event::key(Key::ArrowRight)),
        ("hover Help", help, Event::MouseOver),
        ("unhover Help", help, Event::MouseOut),
    ];

    for (what, el, ev) in script {
        log::debug!("step: {what} ({ev:?} -> {el:?})");
        let outcome = bar.deliver(*el, *ev);
        pump(&mut bar);
        report(&bar, what, format!("{outcome:?}"));
    }

    // Let the deferred close checks run.
    bar.tick(Instant::now() + Duration::from_secs(1));
    pump(&mut bar);
    report(&bar, "after close delay", String::new());
}

/// Trigger of the first entry of a submenu list.
fn first_of(bar: &Menubar<MemorySurface>, list: ElementId) -> ElementId {
    nth_of(bar, list, 0)
}

fn second_of(bar: &Menubar<MemorySurface>, list: ElementId) -> ElementId {
    nth_of(bar, list, 1)
}

fn nth_of(bar: &Menubar<MemorySurface>, list: ElementId, n: usize) -> ElementId {
    use rove_core::Surface;
    let s = bar.surface();
    let mut child = s.first_child(list);
    for _ in 0..n {
        child = child.and_then(|c| s.next_sibling(c));
    }
    let entry = child.expect("script indexes a real entry");
    s.first_child(entry).expect("entry has a trigger")
}

fn pump(bar: &mut Menubar<MemorySurface>) {
    loop {
        let pending = bar.surface_mut().take_pending();
        if pending.is_empty() {
            break;
        }
        for (el, ev) in pending {
            bar.deliver(el, ev);
        }
    }
}

fn report(bar: &Menubar<MemorySurface>, what: &str, outcome: String) {
    let focused = bar
        .surface()
        .focused()
        .map(|el| {
            use rove_core::Surface;
            bar.surface().label(el)
        })
        .unwrap_or_else(|| "(none)".to_string());
    println!(
        "{what:<24} focus: {focused:<12} open popups: {:<5} {outcome}",
        bar.any_open()
    );
}
