mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Whether `id` names `root` itself or any of its descendants.
pub fn contains(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}

/// Chain of IDs from `root` down to the element named `id`, both inclusive.
/// Returns None if `id` is not in the tree.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root.id.clone());
            return Some(path);
        }
    }

    None
}

/// Visit every element in the tree, parents before children.
/// The callback receives the element and its parent's ID.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element, Option<&'a str>)) {
    walk_inner(root, None, visit);
}

fn walk_inner<'a>(
    element: &'a Element,
    parent: Option<&'a str>,
    visit: &mut impl FnMut(&'a Element, Option<&'a str>),
) {
    visit(element, parent);
    for child in element.child_elements() {
        walk_inner(child, Some(element.id.as_str()), visit);
    }
}
