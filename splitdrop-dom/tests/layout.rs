use splitdrop_dom::{layout, measure, Element, LayoutResult, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> LayoutResult {
    layout(root, Rect::new(0, 0, width, height))
}

// ============================================================================
// Stacking
// ============================================================================

#[test]
fn test_row_stacks_children_with_gap() {
    let root = Element::row()
        .id("root")
        .gap(1)
        .child(Element::text("ab").id("first"))
        .child(Element::text("cde").id("second"));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout.get("root"), Some(&Rect::new(0, 0, 6, 1)));
    assert_eq!(layout.get("first"), Some(&Rect::new(0, 0, 2, 1)));
    assert_eq!(layout.get("second"), Some(&Rect::new(3, 0, 3, 1)));
}

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .child(Element::text("hello").id("a"))
        .child(Element::text("hi").id("b"));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout.get("root"), Some(&Rect::new(0, 0, 5, 2)));
    assert_eq!(layout.get("a"), Some(&Rect::new(0, 0, 5, 1)));
    assert_eq!(layout.get("b"), Some(&Rect::new(0, 1, 2, 1)));
}

#[test]
fn test_fill_and_fixed_sizes() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fixed(3));

    let layout = layout_root(&root, 40, 10);

    assert_eq!(layout.get("root"), Some(&Rect::new(0, 0, 40, 3)));
}

#[test]
fn test_text_is_clipped_to_available_width() {
    let root = Element::text("abcdefghij").id("root");

    let layout = layout_root(&root, 4, 1);

    assert_eq!(layout.get("root"), Some(&Rect::new(0, 0, 4, 1)));
}

// ============================================================================
// Hidden elements
// ============================================================================

#[test]
fn test_hidden_child_takes_no_space() {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a"))
        .child(Element::text("bb").id("b").hidden(true))
        .child(Element::text("c").id("c"));

    let layout = layout_root(&root, 80, 24);

    assert!(layout.get("b").is_none());
    assert_eq!(layout.get("c"), Some(&Rect::new(0, 1, 1, 1)));
    assert_eq!(measure(&root), (1, 2));
}

#[test]
fn test_hidden_subtree_is_skipped() {
    let root = Element::col().id("root").child(
        Element::col()
            .id("panel")
            .hidden(true)
            .child(Element::text("item").id("item")),
    );

    let layout = layout_root(&root, 80, 24);

    assert!(layout.contains_key("root"));
    assert!(!layout.contains_key("panel"));
    assert!(!layout.contains_key("item"));
}
