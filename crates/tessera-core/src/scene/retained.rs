//! In-memory retained SVG scene.

use std::{cell::RefCell, fmt, rc::Rc};

use indexmap::IndexMap;
use log::trace;
use svg::{Node, node::element::Element};

use super::{SVG_NAMESPACE, SceneFactory, SceneNode};
use crate::geometry::SvgNumber;

/// Factory for [`SvgElement`]s.
///
/// # Examples
///
/// ```
/// use tessera_core::scene::{SVG_NAMESPACE, SceneFactory, SceneNode, SvgScene};
///
/// let scene = SvgScene::new();
/// let mut rect = scene.create_element(SVG_NAMESPACE, "rect");
/// rect.set_attribute("width", "5");
/// assert_eq!(rect.attribute("width").as_deref(), Some("5"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgScene;

impl SvgScene {
    pub fn new() -> Self {
        Self
    }

    /// Creates a root `svg` element sized `width` x `height` with a matching `viewBox`.
    pub fn create_root(&self, width: f32, height: f32) -> SvgElement {
        let mut root = self.create_element(SVG_NAMESPACE, "svg");
        let (width, height) = (SvgNumber(width), SvgNumber(height));
        root.set_attribute("width", &width.to_string());
        root.set_attribute("height", &height.to_string());
        root.set_attribute("viewBox", &format!("0 0 {width} {height}"));
        root
    }
}

impl SceneFactory for SvgScene {
    type Node = SvgElement;

    fn create_element(&self, namespace: &str, tag: &str) -> SvgElement {
        trace!(namespace, tag; "Creating element");
        SvgElement(Rc::new(RefCell::new(ElementData {
            namespace: namespace.to_string(),
            tag: tag.to_string(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        })))
    }
}

#[derive(Debug)]
struct ElementData {
    namespace: String,
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<SvgElement>,
}

/// Handle to a retained SVG element.
///
/// Cloning the handle does not copy the element: every clone observes the
/// same attributes and children, the way DOM references do. Attributes keep
/// the order in which they were first set.
#[derive(Clone)]
pub struct SvgElement(Rc<RefCell<ElementData>>);

impl SvgElement {
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn namespace(&self) -> String {
        self.0.borrow().namespace.clone()
    }

    /// Returns all attributes in the order they were first set.
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0
            .borrow()
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Appends `child` as the last child of this element.
    pub fn append_child(&self, child: &SvgElement) {
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Detaches `child` from this element. Returns false if it was not a child.
    pub fn remove_child(&self, child: &SvgElement) -> bool {
        let mut data = self.0.borrow_mut();
        let before = data.children.len();
        data.children.retain(|existing| !existing.ptr_eq(child));
        data.children.len() != before
    }

    pub fn children(&self) -> Vec<SvgElement> {
        self.0.borrow().children.clone()
    }

    /// Returns true if both handles refer to the same element.
    pub fn ptr_eq(&self, other: &SvgElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Converts the retained tree rooted at this element into an `svg` crate element.
    pub fn to_svg_node(&self) -> Element {
        let data = self.0.borrow();
        let mut element = Element::new(data.tag.as_str());
        for (name, value) in &data.attributes {
            element.assign(name.as_str(), value.as_str());
        }
        for child in &data.children {
            element.append(child.to_svg_node());
        }
        element
    }

    /// Serializes the tree rooted at this element as SVG markup.
    ///
    /// An `xmlns` declaration is added to the output root when the element
    /// lives in the SVG namespace and does not already declare one.
    pub fn render(&self) -> String {
        let mut element = self.to_svg_node();
        let needs_xmlns = {
            let data = self.0.borrow();
            data.namespace == SVG_NAMESPACE && !data.attributes.contains_key("xmlns")
        };
        if needs_xmlns {
            element.assign("xmlns", SVG_NAMESPACE);
        }
        element.to_string()
    }
}

impl SceneNode for SvgElement {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }
}

impl fmt::Debug for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("SvgElement")
            .field("tag", &data.tag)
            .field("attributes", &data.attributes)
            .field("children", &data.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element_records_namespace_and_tag() {
        let rect = SvgScene::new().create_element(SVG_NAMESPACE, "rect");
        assert_eq!(rect.tag(), "rect");
        assert_eq!(rect.namespace(), SVG_NAMESPACE);
        assert!(rect.attributes().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let mut rect = SvgScene::new().create_element(SVG_NAMESPACE, "rect");
        let observer = rect.clone();

        rect.set_attribute("fill", "red");

        assert_eq!(observer.attribute("fill").as_deref(), Some("red"));
        assert!(observer.ptr_eq(&rect));
    }

    #[test]
    fn test_attribute_order_is_first_insertion() {
        let mut rect = SvgScene::new().create_element(SVG_NAMESPACE, "rect");
        rect.set_attribute("height", "10");
        rect.set_attribute("width", "5");
        rect.set_attribute("height", "20");

        assert_eq!(
            rect.attributes(),
            vec![
                ("height".to_string(), "20".to_string()),
                ("width".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_append_and_remove_child() {
        let scene = SvgScene::new();
        let root = scene.create_root(100.0, 50.0);
        let a = scene.create_element(SVG_NAMESPACE, "rect");
        let b = scene.create_element(SVG_NAMESPACE, "rect");

        root.append_child(&a);
        root.append_child(&b);
        assert_eq!(root.children().len(), 2);

        assert!(root.remove_child(&a));
        assert!(!root.remove_child(&a));
        let children = root.children();
        assert_eq!(children.len(), 1);
        assert!(children[0].ptr_eq(&b));
    }

    #[test]
    fn test_create_root_sets_view_box() {
        let root = SvgScene::new().create_root(480.0, 240.0);
        assert_eq!(root.tag(), "svg");
        assert_eq!(root.attribute("viewBox").as_deref(), Some("0 0 480 240"));
    }

    #[test]
    fn test_render_contains_children_and_namespace() {
        let scene = SvgScene::new();
        let root = scene.create_root(10.0, 10.0);
        let mut rect = scene.create_element(SVG_NAMESPACE, "rect");
        rect.set_attribute("fill", "#F76902");
        root.append_child(&rect);

        let markup = root.render();
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(markup.contains("<rect"));
        assert!(markup.contains("fill=\"#F76902\""));
        assert!(markup.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_reflects_later_writes() {
        let scene = SvgScene::new();
        let root = scene.create_root(10.0, 10.0);
        let mut rect = scene.create_element(SVG_NAMESPACE, "rect");
        root.append_child(&rect);

        rect.set_attribute("opacity", "0.5");
        assert!(root.render().contains("opacity=\"0.5\""));

        rect.set_attribute("opacity", "1");
        let markup = root.render();
        assert!(markup.contains("opacity=\"1\""));
        assert!(!markup.contains("opacity=\"0.5\""));
    }
}
