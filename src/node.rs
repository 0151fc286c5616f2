use roxmltree::Node;

/// Read-only view of one element in a host document tree.
///
/// Implementors expose the three attributes criteria compare against and a
/// link to the enclosing element. Returning `None` from `parent_node` ends an
/// upward walk.
pub trait DocumentNode: Sized {
    fn class_name(&self) -> Option<&str>;
    fn id(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;
    fn parent_node(&self) -> Option<Self>;
}

impl<'a, 'input> DocumentNode for Node<'a, 'input> {
    fn class_name(&self) -> Option<&str> {
        self.attribute("class")
    }

    fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    fn name(&self) -> Option<&str> {
        self.attribute("name")
    }

    // The document root carries no attributes, so the chain stops at the root element
    fn parent_node(&self) -> Option<Self> {
        self.parent_element()
    }
}
