//! The `Type` descriptor and its capability queries.

use std::collections::BTreeMap;
use std::fmt;

/// Tag of a `Type`, without any nested element types.
///
/// Cheap to copy; used for log fields and error messages where the full
/// structure is not needed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Number,
    String,
    Bool,
    DynamicPseudo,
    List,
    Map,
    Set,
    Tuple,
    Object,
}

impl TypeKind {
    /// Get the kind's name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TypeKind::Number => "number",
            TypeKind::String => "string",
            TypeKind::Bool => "bool",
            TypeKind::DynamicPseudo => "dynamic",
            TypeKind::List => "list",
            TypeKind::Map => "map",
            TypeKind::Set => "set",
            TypeKind::Tuple => "tuple",
            TypeKind::Object => "object",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type descriptor for a dynamically typed value.
///
/// Recursive variants box their children; type descriptors are small and
/// built once per value shape, so cloning them is acceptable.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    // Primitives
    /// Arbitrary number.
    Number,
    /// UTF-8 string.
    String,
    /// Boolean.
    Bool,
    /// Placeholder for "any type", used where a type is not yet known.
    DynamicPseudo,

    // Collections (single element type)
    /// Ordered sequence of elements of one type.
    List(Box<Type>),
    /// String-keyed mapping to elements of one type.
    Map(Box<Type>),
    /// Unordered collection of distinct elements of one type.
    Set(Box<Type>),

    // Structural types (per-position / per-attribute types)
    /// Fixed-length sequence with one type per position.
    Tuple(Vec<Type>),
    /// Fixed set of named attributes, each with its own type.
    Object(BTreeMap<String, Type>),
}

// Constructors

impl Type {
    #[inline]
    pub fn list(elem: Type) -> Self {
        Type::List(Box::new(elem))
    }

    #[inline]
    pub fn map(elem: Type) -> Self {
        Type::Map(Box::new(elem))
    }

    #[inline]
    pub fn set(elem: Type) -> Self {
        Type::Set(Box::new(elem))
    }

    #[inline]
    pub fn tuple(elems: Vec<Type>) -> Self {
        Type::Tuple(elems)
    }

    #[inline]
    pub fn object(attrs: BTreeMap<String, Type>) -> Self {
        Type::Object(attrs)
    }

    /// The tuple type with no positions.
    #[inline]
    pub fn empty_tuple() -> Self {
        Type::Tuple(Vec::new())
    }

    /// The object type with no attributes.
    #[inline]
    pub fn empty_object() -> Self {
        Type::Object(BTreeMap::new())
    }
}

// Capability queries

impl Type {
    pub fn kind(&self) -> TypeKind {
        match self {
            Type::Number => TypeKind::Number,
            Type::String => TypeKind::String,
            Type::Bool => TypeKind::Bool,
            Type::DynamicPseudo => TypeKind::DynamicPseudo,
            Type::List(_) => TypeKind::List,
            Type::Map(_) => TypeKind::Map,
            Type::Set(_) => TypeKind::Set,
            Type::Tuple(_) => TypeKind::Tuple,
            Type::Object(_) => TypeKind::Object,
        }
    }

    pub fn is_primitive_type(&self) -> bool {
        matches!(self, Type::Number | Type::String | Type::Bool)
    }

    pub fn is_dynamic_pseudo_type(&self) -> bool {
        matches!(self, Type::DynamicPseudo)
    }

    pub fn is_list_type(&self) -> bool {
        matches!(self, Type::List(_))
    }

    pub fn is_map_type(&self) -> bool {
        matches!(self, Type::Map(_))
    }

    pub fn is_set_type(&self) -> bool {
        matches!(self, Type::Set(_))
    }

    pub fn is_tuple_type(&self) -> bool {
        matches!(self, Type::Tuple(_))
    }

    pub fn is_object_type(&self) -> bool {
        matches!(self, Type::Object(_))
    }

    /// Check if this is a list, map or set type.
    ///
    /// Tuples are not collections: they have per-position types.
    pub fn is_collection_type(&self) -> bool {
        matches!(self, Type::List(_) | Type::Map(_) | Type::Set(_))
    }

    /// Get the element type of a list, map or set type.
    ///
    /// Returns `None` for every other type.
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::List(elem) | Type::Map(elem) | Type::Set(elem) => Some(elem.as_ref()),
            _ => None,
        }
    }

    /// Get the per-position element types of a tuple type.
    pub fn tuple_element_types(&self) -> Option<&[Type]> {
        match self {
            Type::Tuple(elems) => Some(elems.as_slice()),
            _ => None,
        }
    }

    /// Get the attribute types of an object type.
    pub fn attribute_types(&self) -> Option<&BTreeMap<String, Type>> {
        match self {
            Type::Object(attrs) => Some(attrs),
            _ => None,
        }
    }

    /// Human-readable name, e.g. `list of map of string`.
    pub fn friendly_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::List(elem) | Type::Map(elem) | Type::Set(elem) => {
                write!(f, "{} of {elem}", self.kind())
            }
            _ => f.write_str(self.kind().name()),
        }
    }
}
