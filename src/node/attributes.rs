use super::Node;
use indexmap::IndexMap;

/// Attribute set of a tag.
///
/// The map form keeps keys unique in insertion order. The list form keeps
/// every pair as given, so the same attribute name may appear twice.
#[derive(Debug, Clone, PartialEq)]
pub enum Attributes {
    Map(IndexMap<String, Node>),
    List(Vec<(String, Node)>),
}

impl Default for Attributes {
    fn default() -> Self {
        Self::Map(IndexMap::new())
    }
}

impl Attributes {
    /// Creates an empty map-form attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list-form attribute set
    pub fn list() -> Self {
        Self::List(Vec::new())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Map(map) => map.len(),
            Self::List(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an attribute. The map form replaces an existing key in place, the
    /// list form appends.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        match self {
            Self::Map(map) => {
                map.insert(key.into(), value.into());
            }
            Self::List(pairs) => pairs.push((key.into(), value.into())),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.insert(key, value);
        self
    }

    /// Iterates over `(key, value)` pairs in supplied order
    pub fn iter(&self) -> Iter<'_> {
        match self {
            Self::Map(map) => Iter::Map(map.iter()),
            Self::List(pairs) => Iter::List(pairs.iter()),
        }
    }

    /// Reads an attribute set out of a node tree.
    ///
    /// A mapping becomes the map form. A sequence becomes the list form,
    /// taking the first entry of every mapping item and skipping anything
    /// else. Other nodes carry no attributes.
    pub fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Mapping(map) => Some(Self::Map(map.0.clone())),
            Node::Sequence(items) => Some(Self::List(
                items
                    .iter()
                    .filter_map(Node::as_mapping)
                    .filter_map(|pair| pair.iter().next())
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl From<IndexMap<String, Node>> for Attributes {
    fn from(map: IndexMap<String, Node>) -> Self {
        Self::Map(map)
    }
}

impl From<Vec<(String, Node)>> for Attributes {
    fn from(pairs: Vec<(String, Node)>) -> Self {
        Self::List(pairs)
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a str, &'a Node);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pairs of an [`Attributes`] set
#[derive(Debug)]
pub enum Iter<'a> {
    Map(indexmap::map::Iter<'a, String, Node>),
    List(std::slice::Iter<'a, (String, Node)>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Map(inner) => inner.next().map(|(k, v)| (k.as_str(), v)),
            Self::List(inner) => inner.next().map(|(k, v)| (k.as_str(), v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mapping;

    #[test]
    fn test_map_form_replaces_in_place() {
        let attrs = Attributes::new().with("a", 1).with("b", 2).with("a", 3);
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(
            pairs,
            vec![("a", &Node::Number(3.0)), ("b", &Node::Number(2.0))]
        );
    }

    #[test]
    fn test_list_form_keeps_duplicates() {
        let attrs = Attributes::list().with("a", 1).with("a", 2);
        assert_eq!(attrs.len(), 2);
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "a"]);
    }

    #[test]
    fn test_from_node_sequence_of_pairs() {
        let node = Node::Sequence(vec![
            Node::from(Mapping::new().with("x", 1)),
            Node::from("ignored"),
            Node::from(Mapping::new()),
            Node::from(Mapping::new().with("x", 2).with("y", 3)),
        ]);
        let attrs = Attributes::from_node(&node).unwrap();
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(
            pairs,
            vec![("x", &Node::Number(1.0)), ("x", &Node::Number(2.0))]
        );
    }

    #[test]
    fn test_from_node_scalar() {
        assert_eq!(Attributes::from_node(&Node::from("x")), None);
        assert_eq!(Attributes::from_node(&Node::Null), None);
    }
}
