//! Typed runtime values.
//!
//! A `Value` pairs a `Type` with a `Native` payload. Values are immutable;
//! cloning one shares its payload.
//!
//! # Construction
//!
//! Collection constructors check every element against the declared
//! element type and strip the per-element type, storing only payloads.
//! Element iteration later re-attaches the element type:
//!
//! ```text
//! let list = Value::list(Type::Number, vec![Value::number_int(1)])?;
//! for (index, elem) in list.elements() { /* index: number, elem: number */ }
//! ```

use std::collections::BTreeMap;
use std::ops::ControlFlow;

use cty_types::Type;
use rustc_hash::FxHashMap;

use crate::element_iterator::{ElementCursor, ElementIterator, Elements};
use crate::errors::{IterError, ValueError};
use crate::heap::Heap;
use crate::native::{Native, ValueSet, ValueSetRules};
use crate::number::Number;

/// Runtime value: a type descriptor and a payload of matching shape.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Value {
    ty: Type,
    v: Native,
}

// Factory Methods

impl Value {
    /// Pair a type with a payload without checking that their shapes agree.
    ///
    /// Marshaling layers use this after validating payloads themselves. A
    /// mismatched pair is reported when the value is iterated.
    #[inline]
    pub fn from_raw(ty: Type, v: Native) -> Self {
        Value { ty, v }
    }

    #[inline]
    pub fn number(n: f64) -> Self {
        Value::from_raw(Type::Number, Native::Number(Number::new(n)))
    }

    #[inline]
    pub fn number_int(n: i64) -> Self {
        Value::from_raw(Type::Number, Native::Number(Number::from_i64(n)))
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::from_raw(Type::String, Native::String(Heap::new(s.into())))
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::from_raw(Type::Bool, Native::Bool(b))
    }

    /// Number value for a zero-based element index.
    #[inline]
    pub(crate) fn index(idx: usize) -> Self {
        Value::from_raw(Type::Number, Native::Number(Number::from_index(idx)))
    }

    /// Create a null value of the given type.
    #[inline]
    pub fn null(ty: Type) -> Self {
        Value::from_raw(ty, Native::Null)
    }

    /// Create a list whose elements all have type `ety`.
    pub fn list(ety: Type, elems: Vec<Value>) -> Result<Self, ValueError> {
        let items = elems
            .into_iter()
            .enumerate()
            .map(|(i, elem)| elem.conform(&ety, || format!("element {i}")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::from_raw(Type::list(ety), Native::List(Heap::new(items))))
    }

    /// Create a map whose entries all have type `ety`.
    ///
    /// When a key repeats, the last entry wins.
    pub fn map(
        ety: Type,
        entries: impl IntoIterator<Item = (String, Value)>,
    ) -> Result<Self, ValueError> {
        let mut map = FxHashMap::default();
        for (key, elem) in entries {
            let v = elem.conform(&ety, || format!("element {key:?}"))?;
            map.insert(key, v);
        }
        Ok(Value::from_raw(Type::map(ety), Native::Map(Heap::new(map))))
    }

    /// Create a set whose elements all have type `ety`.
    ///
    /// Equal elements collapse into one member.
    pub fn set(ety: Type, elems: Vec<Value>) -> Result<Self, ValueError> {
        let mut set = ValueSet::new(ValueSetRules);
        for (i, elem) in elems.into_iter().enumerate() {
            set.insert(elem.conform(&ety, || format!("element {i}"))?);
        }
        Ok(Value::from_raw(Type::set(ety), Native::Set(Heap::new(set))))
    }

    #[inline]
    pub fn list_empty(ety: Type) -> Self {
        Value::from_raw(Type::list(ety), Native::List(Heap::new(Vec::new())))
    }

    #[inline]
    pub fn map_empty(ety: Type) -> Self {
        Value::from_raw(Type::map(ety), Native::Map(Heap::new(FxHashMap::default())))
    }

    #[inline]
    pub fn set_empty(ety: Type) -> Self {
        Value::from_raw(Type::set(ety), Native::Set(Heap::new(ValueSet::new(ValueSetRules))))
    }

    /// Create a tuple; its type is the sequence of the elements' types.
    pub fn tuple(elems: Vec<Value>) -> Self {
        let (etys, items): (Vec<Type>, Vec<Native>) =
            elems.into_iter().map(|elem| (elem.ty, elem.v)).unzip();
        Value::from_raw(Type::tuple(etys), Native::Tuple(Heap::new(items)))
    }

    /// Create an object; its type maps each attribute to its value's type.
    ///
    /// When a name repeats, the last attribute wins.
    pub fn object(attrs: impl IntoIterator<Item = (String, Value)>) -> Self {
        let mut types = BTreeMap::new();
        let mut payloads = FxHashMap::default();
        for (name, attr) in attrs {
            types.insert(name.clone(), attr.ty);
            payloads.insert(name, attr.v);
        }
        Value::from_raw(Type::object(types), Native::Object(Heap::new(payloads)))
    }

    /// Check this element against a collection's element type and yield
    /// its payload.
    fn conform(self, ety: &Type, at: impl FnOnce() -> String) -> Result<Native, ValueError> {
        if self.ty == *ety {
            Ok(self.v)
        } else {
            Err(ValueError::ElementTypeMismatch {
                expected: ety.clone(),
                found: self.ty,
                at: at(),
            })
        }
    }
}

// Accessors

impl Value {
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn native(&self) -> &Native {
        &self.v
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self.v, Native::Null)
    }

    pub fn as_number(&self) -> Option<Number> {
        match self.v {
            Native::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.v {
            Native::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.v {
            Native::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Number of elements of a non-null list, map, set or tuple.
    ///
    /// Returns `None` for other types, nulls, and mismatched payloads.
    pub fn length(&self) -> Option<usize> {
        match (&self.ty, &self.v) {
            (Type::List(_), Native::List(items)) | (Type::Tuple(_), Native::Tuple(items)) => {
                Some(items.len())
            }
            (Type::Map(_), Native::Map(entries)) => Some(entries.len()),
            (Type::Set(_), Native::Set(set)) => Some(set.len()),
            _ => None,
        }
    }
}

// Element Iteration

impl Value {
    /// Check whether this value's type supports element iteration.
    ///
    /// Only the type is consulted: a null list still reports `true`, but
    /// iterating it faults.
    pub fn can_iterate_elements(&self) -> bool {
        matches!(
            self.ty,
            Type::List(_) | Type::Map(_) | Type::Set(_) | Type::Tuple(_)
        )
    }

    /// Start iterating this value's elements.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a non-null list, map, set or tuple whose
    /// payload matches its type. Callers check `can_iterate_elements` first.
    pub fn element_iterator(&self) -> ElementIterator<'_> {
        match ElementIterator::new(self) {
            Ok(iter) => iter,
            Err(err) => {
                tracing::error!(%err, "element iteration fault");
                panic!("{err}")
            }
        }
    }

    /// Start iterating this value's elements, reporting faults as errors.
    pub fn try_element_iterator(&self) -> Result<ElementIterator<'_>, IterError> {
        ElementIterator::new(self)
    }

    /// Iterate `(key, element)` pairs through the standard `Iterator` protocol.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as `element_iterator`.
    pub fn elements(&self) -> Elements<'_> {
        self.element_iterator().into_iter()
    }

    /// Call `cb` with each `(key, element)` pair until it breaks.
    ///
    /// Returns `true` if `cb` stopped the iteration early.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as `element_iterator`.
    pub fn for_each_element(&self, mut cb: impl FnMut(Value, Value) -> ControlFlow<()>) -> bool {
        let mut iter = self.element_iterator();
        while iter.advance() {
            let (key, elem) = iter.current();
            if cb(key, elem).is_break() {
                return true;
            }
        }
        false
    }
}
