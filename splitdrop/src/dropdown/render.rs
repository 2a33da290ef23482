//! Rendering for the dropdown widget.

use std::collections::HashMap;

use splitdrop_dom::{walk, Color, Element, Style};

use super::Core;
use super::routing::Surface;
use crate::arrow::{self, ArrowTone};

/// Element IDs of one rendered tree, each mapped to its parent's ID.
///
/// This is the widget's boundary for dismissal (an ID in the map is inside)
/// and the ancestry used to bubble activations.
#[derive(Debug, Default)]
pub(super) struct Boundary {
    parents: HashMap<String, Option<String>>,
}

impl Boundary {
    fn from_tree(root: &Element) -> Self {
        let mut parents = HashMap::new();
        walk(root, &mut |element, parent| {
            parents.insert(element.id.clone(), parent.map(str::to_string));
        });
        Self { parents }
    }

    fn contains(&self, id: &str) -> bool {
        self.parents.contains_key(id)
    }

    /// IDs from `id` up to the root, empty if `id` is not in the tree.
    fn bubble_path(&self, id: &str) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = Some(id.to_string());

        while let Some(element_id) = current {
            let Some(parent) = self.parents.get(&element_id) else {
                break;
            };
            // Guards against a malformed map; trees from `from_tree` are acyclic.
            if path.len() > self.parents.len() {
                break;
            }
            current = parent.clone();
            path.push(element_id);
        }
        path
    }
}

fn hover_shadow() -> Style {
    Style::new().background(Color::rgba(255, 255, 255, 0.12))
}

impl<T> Core<T> {
    /// Build the element tree and record it as the widget's boundary.
    ///
    /// Rendering never touches the pointer subscription; only open/closed
    /// edges do.
    pub(super) fn render(&self) -> Element {
        let state = self.state();
        let id = &self.id;

        log::trace!(
            "Dropdown::render id={} open={} last_selected={}",
            id,
            state.is_open,
            state.last_selected
        );

        let mut primary = Element::row()
            .id(format!("{id}-selected"))
            .gap(1)
            .clickable(self.mode.is_actionable(Surface::Primary))
            .child(Element::text(&self.placeholder).id(format!("{id}-label")));

        if self.show_divider {
            primary = primary.child(
                Element::text("│")
                    .id(format!("{id}-divider"))
                    .style(Style::new().dim()),
            );
        }

        let tone = ArrowTone::for_state(state.is_open);
        let mut arrow = Element::box_()
            .id(format!("{id}-arrow"))
            .clickable(self.mode.is_actionable(Surface::Arrow))
            .data(
                "hover-shadow",
                if self.disable_arrow_hover_shadow { "off" } else { "on" },
            )
            .child(arrow::indicator(format!("{id}-arrow-glyph"), state.is_open, tone));
        if !self.disable_arrow_hover_shadow {
            arrow = arrow.style_hover(hover_shadow());
        }
        primary = primary.child(arrow);

        let options = Element::col()
            .id(format!("{id}-options"))
            .hidden(!state.is_open)
            .children(self.options.iter().enumerate().map(|(index, option)| {
                let mut item = Element::text(&option.label)
                    .id(format!("{id}-{index}"))
                    .clickable(true)
                    .style_hover(hover_shadow());
                if index == state.last_selected {
                    item = item.style(Style::new().bold());
                }
                item
            }));

        let mut root = Element::col()
            .id(id.clone())
            .data("state", if state.is_open { "open" } else { "closed" })
            .child(primary)
            .child(options);
        if let Some(class) = &self.class {
            root = root.data("class", class.clone());
        }

        if let Ok(mut boundary) = self.boundary.write() {
            *boundary = Boundary::from_tree(&root);
        }
        root
    }

    pub(super) fn boundary_contains(&self, element_id: &str) -> bool {
        self.boundary
            .read()
            .map(|boundary| boundary.contains(element_id))
            .unwrap_or(false)
    }

    pub(super) fn bubble_path(&self, element_id: &str) -> Vec<String> {
        self.boundary
            .read()
            .map(|boundary| boundary.bubble_path(element_id))
            .unwrap_or_default()
    }
}

impl<T: Send + Sync + 'static> super::Dropdown<T> {
    /// Build the widget's element tree for the host to lay out and draw.
    ///
    /// The option panel is always present (so option IDs stay addressable)
    /// but hidden while closed.
    pub fn render(&self) -> Element {
        self.core.render()
    }
}
