// Element tree types for Doxygen XML
//
// Mixed content is kept as an ordered sequence of text leaves and elements so
// inline markup can be rendered exactly where it appears in the prose.

/// A single child of an element: either a text run or a nested element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    /// Create a text leaf
    pub fn text(text: &str) -> Self {
        Node::Text(text.to_string())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// A tagged element with attributes and ordered children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Tag name (local part, without namespace prefix)
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Children in document order
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Builder: append a text leaf
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::text(text));
        self
    }

    /// Builder: append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Look up an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Look up an attribute and parse it as a number
    pub fn attr_number(&self, name: &str) -> Option<f64> {
        self.attr(name).and_then(|v| v.trim().parse().ok())
    }

    /// First child element with the given tag name
    pub fn first_child(&self, name: &str) -> Option<&Element> {
        first_child(&self.children, name)
    }

    /// All child elements with the given tag name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        children_named(&self.children, name)
    }

    /// Direct text leaves of this element
    pub fn text_children(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(Node::as_text)
    }
}

/// First element in `nodes` with the given tag name
pub fn first_child<'a>(nodes: &'a [Node], name: &str) -> Option<&'a Element> {
    nodes
        .iter()
        .filter_map(Node::as_element)
        .find(|el| el.name == name)
}

/// All elements in `nodes` with the given tag name
pub fn children_named<'a>(nodes: &'a [Node], name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    nodes
        .iter()
        .filter_map(Node::as_element)
        .filter(move |el| el.name == name)
}
