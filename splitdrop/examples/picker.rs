//! Picker Example
//!
//! Demonstrates both dropdown modes side by side:
//! - Selector mode: the arrow opens the option list, picking reports a value
//! - Button mode: the whole row replays the last choice
//! - Outside dismissal: pressing anywhere else closes an open list
//!
//! Press 'o' to open the button-mode list programmatically, 'q' or Esc to quit.
//! Logs go to picker.log.

use std::fs::File;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use splitdrop::{Dropdown, DropdownConfig};
use splitdrop_dom::{ClickTracker, Element, InputBus, PointerEvent, Style, Terminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("picker.log")?,
    )?;

    let status = Arc::new(Mutex::new(String::from("(nothing selected yet)")));
    let bus = InputBus::new();

    let format_status = status.clone();
    let format = Dropdown::new(
        DropdownConfig::new(
            "format",
            [("PNG", "png"), ("JPEG", "jpeg"), ("WebP", "webp")],
        )
        .placeholder("Format")
        .on_selection_change(move |value: &&str| {
            if let Ok(mut s) = format_status.lock() {
                *s = format!("format -> {value}");
            }
        }),
        bus.clone(),
    )?;

    let export_status = status.clone();
    let export = Dropdown::new(
        DropdownConfig::new(
            "export",
            [
                ("Save to disk", "save"),
                ("Copy to clipboard", "copy"),
                ("Upload", "upload"),
            ],
        )
        .placeholder("Export")
        .whole_button_actionable(true)
        .disable_arrow_hover_shadow(true)
        .class("split-button")
        .on_selection_change(move |value: &&str| {
            if let Ok(mut s) = export_status.lock() {
                *s = format!("export -> {value}");
            }
        }),
        bus.clone(),
    )?;

    let mut term = Terminal::new()?;
    let mut clicks = ClickTracker::new();

    loop {
        let status_line = status.lock().map(|s| s.clone()).unwrap_or_default();
        let root = ui(&format, &export, &status_line);
        term.render(&root)?;

        for event in term.poll(Some(Duration::from_millis(100)))? {
            match event {
                CrosstermEvent::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('o') => export.toggle_open(),
                    _ => {}
                },
                CrosstermEvent::Mouse(mouse) => {
                    let Some(pointer) = PointerEvent::from_crossterm(&mouse, term.layout(), &root)
                    else {
                        continue;
                    };

                    if let PointerEvent::Move { target, .. } = &pointer {
                        term.set_hovered(target.clone());
                    }

                    // Press first goes to the global stream, then clicks
                    // reach the widgets.
                    bus.dispatch(&pointer);
                    if let Some(click) = clicks.track(&pointer) {
                        format.handle_event(&click);
                        export.handle_event(&click);
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(format: &Dropdown<&'static str>, export: &Dropdown<&'static str>, status: &str) -> Element {
    Element::col()
        .gap(1)
        .child(Element::text("splitdrop picker").style(Style::new().bold()))
        .child(
            Element::row()
                .gap(4)
                .child(format.render())
                .child(export.render()),
        )
        .child(Element::text(status).style(Style::new().dim()))
        .child(Element::text("o: open export list   q: quit").style(Style::new().dim()))
}
