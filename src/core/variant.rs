/// Which parallax driver a page runs. Pages never run both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Scroll,
    Pointer,
}

impl Variant {
    pub fn from_attr(value: &str) -> Option<Variant> {
        match value.trim() {
            "scroll" => Some(Variant::Scroll),
            "pointer" | "mouse" => Some(Variant::Pointer),
            _ => None,
        }
    }

    /// Explicit attribute first, then whichever driver's nodes are present.
    pub fn resolve(attr: Option<&str>, has_scroll_nodes: bool, has_layer_nodes: bool) -> Option<Variant> {
        if let Some(v) = attr.and_then(Variant::from_attr) {
            return Some(v);
        }
        if has_scroll_nodes {
            Some(Variant::Scroll)
        } else if has_layer_nodes {
            Some(Variant::Pointer)
        } else {
            None
        }
    }
}
