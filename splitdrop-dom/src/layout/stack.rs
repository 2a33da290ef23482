use std::collections::HashMap;

use super::Rect;
use crate::element::Element;
use crate::text::display_width;
use crate::types::{Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out the tree inside `available`.
///
/// Children are stacked along their parent's direction, separated by `gap`,
/// and clipped to the parent's rect. Hidden elements and their subtrees are
/// left out of the result entirely.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

/// Intrinsic (width, height) of an element, ignoring `Fill`.
pub fn measure(element: &Element) -> (u16, u16) {
    if element.hidden {
        return (0, 0);
    }

    let (content_w, content_h) = if let Some(text) = element.text_content() {
        (clamp_u16(display_width(text)), 1)
    } else {
        let visible: Vec<(u16, u16)> = element
            .child_elements()
            .iter()
            .filter(|c| !c.hidden)
            .map(measure)
            .collect();
        let gaps = element
            .gap
            .saturating_mul(visible.len().saturating_sub(1) as u16);

        match element.direction {
            Direction::Row => (
                visible
                    .iter()
                    .fold(0u16, |acc, (w, _)| acc.saturating_add(*w))
                    .saturating_add(gaps),
                visible.iter().map(|(_, h)| *h).max().unwrap_or(0),
            ),
            Direction::Column => (
                visible.iter().map(|(w, _)| *w).max().unwrap_or(0),
                visible
                    .iter()
                    .fold(0u16, |acc, (_, h)| acc.saturating_add(*h))
                    .saturating_add(gaps),
            ),
        }
    };

    let width = match element.width {
        Size::Fixed(w) => w,
        _ => content_w,
    };
    let height = match element.height {
        Size::Fixed(h) => h,
        _ => content_h,
    };
    (width, height)
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    if element.hidden {
        return;
    }

    let (intrinsic_w, intrinsic_h) = measure(element);
    let width = resolve(element.width, intrinsic_w, available.width);
    let height = resolve(element.height, intrinsic_h, available.height);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let mut cursor_x = rect.x;
    let mut cursor_y = rect.y;

    for child in element.child_elements().iter().filter(|c| !c.hidden) {
        let slot = match element.direction {
            Direction::Row => Rect::new(
                cursor_x,
                rect.y,
                rect.right().saturating_sub(cursor_x),
                rect.height,
            ),
            Direction::Column => Rect::new(
                rect.x,
                cursor_y,
                rect.width,
                rect.bottom().saturating_sub(cursor_y),
            ),
        };

        layout_element(child, slot, result);

        let Some(child_rect) = result.get(&child.id).copied() else {
            continue;
        };
        match element.direction {
            Direction::Row => {
                cursor_x = child_rect.right().saturating_add(element.gap);
            }
            Direction::Column => {
                cursor_y = child_rect.bottom().saturating_add(element.gap);
            }
        }
    }
}

fn resolve(size: Size, intrinsic: u16, available: u16) -> u16 {
    match size {
        Size::Fill => available,
        Size::Fixed(_) | Size::Auto => intrinsic.min(available),
    }
}

fn clamp_u16(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}
