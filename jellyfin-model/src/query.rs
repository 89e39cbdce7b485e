//! URL query-string encoding.
//!
//! Any `Serialize` value whose top level is a struct (or map) can be flattened
//! into `key=value` pairs. Two addressing styles exist:
//!
//! * [`AddressingStyle::Flat`]: `Key=Value`, list elements repeat the key.
//! * [`AddressingStyle::DeepObject`]: `prefix[Key]=Value`, list elements are
//!   addressed as `prefix[Key][0]`, `prefix[Key][1]`, ...
//!
//! Nested objects are always addressed with brackets below their parent key,
//! so a flat top level still renders `PlayState[PositionTicks]=...`.
//! `None`, unit values and empty collections produce no pairs.

use std::fmt;

use serde::ser::{self, Impossible, Serialize};

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressingStyle {
    #[default]
    Flat,
    DeepObject,
}

impl AddressingStyle {
    /// `None` selects the flat style, any prefix (even empty) deep-object.
    pub fn for_prefix(prefix: Option<&str>) -> Self {
        match prefix {
            Some(_) => AddressingStyle::DeepObject,
            None => AddressingStyle::Flat,
        }
    }
}

/// One step of a [`KeyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Caller supplied prefix, written verbatim.
    Root(String),
    /// Wire name of a struct field.
    Property(&'static str),
    Index(usize),
    /// Map key, percent-encoded when rendered.
    Key(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Root(prefix) => f.write_str(prefix),
            Segment::Property(name) => f.write_str(name),
            Segment::Index(index) => write!(f, "{index}"),
            Segment::Key(key) => f.write_str(&urlencoding::encode(key)),
        }
    }
}

/// Accumulated address of a value inside the object graph.
///
/// Renders as the first segment followed by `[segment]` for each of the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooted(prefix: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Root(prefix.into())],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position == 0 {
                write!(f, "{segment}")?;
            } else {
                write!(f, "[{segment}]")?;
            }
        }
        Ok(())
    }
}

/// An encoded `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryPair {
    pub key: String,
    pub value: String,
}

impl fmt::Display for QueryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Encode `value` under `path` using `style` for its top-level fields.
pub fn encode_pairs<T>(
    value: &T,
    style: AddressingStyle,
    path: KeyPath,
) -> Result<Vec<QueryPair>>
where
    T: Serialize + ?Sized,
{
    let mut out = Vec::new();
    value.serialize(PairSerializer {
        out: &mut out,
        path,
        style,
    })?;
    Ok(out)
}

/// Encode with the addressing style implied by `prefix`.
pub fn to_query_pairs<T>(
    value: &T,
    prefix: Option<&str>,
) -> Result<Vec<QueryPair>>
where
    T: Serialize + ?Sized,
{
    let path = match prefix {
        Some(prefix) => KeyPath::rooted(prefix),
        None => KeyPath::new(),
    };
    encode_pairs(value, AddressingStyle::for_prefix(prefix), path)
}

/// Encode and join the pairs with `&`.
pub fn to_query_string<T>(value: &T, prefix: Option<&str>) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let pairs = to_query_pairs(value, prefix)?;
    tracing::trace!(pairs = pairs.len(), "encoded query string");
    Ok(join_pairs(&pairs))
}

pub fn join_pairs(pairs: &[QueryPair]) -> String {
    pairs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("&")
}

fn unsupported<T>(what: &str) -> Result<T> {
    Err(ModelError::QueryEncoding(format!("{what} is not supported")))
}

struct PairSerializer<'a> {
    out: &'a mut Vec<QueryPair>,
    path: KeyPath,
    style: AddressingStyle,
}

impl PairSerializer<'_> {
    fn emit(self, raw: &str) -> Result<()> {
        if self.path.is_empty() {
            return unsupported("a top-level scalar");
        }
        self.out.push(QueryPair {
            key: self.path.to_string(),
            value: urlencoding::encode(raw).into_owned(),
        });
        Ok(())
    }
}

impl<'a> ser::Serializer for PairSerializer<'a> {
    type Ok = ();
    type Error = ModelError;
    type SerializeSeq = SeqEncoder<'a>;
    type SerializeTuple = SeqEncoder<'a>;
    type SerializeTupleStruct = SeqEncoder<'a>;
    type SerializeTupleVariant = Impossible<(), ModelError>;
    type SerializeMap = MapEncoder<'a>;
    type SerializeStruct = StructEncoder<'a>;
    type SerializeStructVariant = Impossible<(), ModelError>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.emit(if v { "true" } else { "false" })
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.emit(&v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.emit(&v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.emit(&v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.emit(&v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.emit(&v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.emit(&v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.emit(&v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.emit(&v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.emit(&v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.emit(&v.to_string())
    }

    // Debug keeps the fractional part (`2.0`), matching the JSON rendering.
    fn serialize_f32(self, v: f32) -> Result<()> {
        self.emit(&format!("{v:?}"))
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.emit(&format!("{v:?}"))
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.emit(v.encode_utf8(&mut [0; 4]))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.emit(v)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        unsupported("a byte string")
    }

    fn serialize_none(self) -> Result<()> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.emit(variant)
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        unsupported(&format!("enum variant {name}::{variant} with data"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SeqEncoder<'a>> {
        if self.path.is_empty() {
            return unsupported("a top-level sequence");
        }
        Ok(SeqEncoder {
            out: self.out,
            path: self.path,
            style: self.style,
            index: 0,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqEncoder<'a>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqEncoder<'a>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        unsupported(&format!("enum variant {name}::{variant} with data"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapEncoder<'a>> {
        Ok(MapEncoder {
            out: self.out,
            path: self.path,
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<StructEncoder<'a>> {
        Ok(StructEncoder {
            out: self.out,
            path: self.path,
            style: self.style,
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        unsupported(&format!("enum variant {name}::{variant} with data"))
    }
}

struct SeqEncoder<'a> {
    out: &'a mut Vec<QueryPair>,
    path: KeyPath,
    style: AddressingStyle,
    index: usize,
}

impl SeqEncoder<'_> {
    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let path = match self.style {
            AddressingStyle::DeepObject => {
                self.path.child(Segment::Index(self.index))
            }
            AddressingStyle::Flat => self.path.clone(),
        };
        self.index += 1;
        value.serialize(PairSerializer {
            out: &mut *self.out,
            path,
            style: self.style,
        })
    }
}

impl ser::SerializeSeq for SeqEncoder<'_> {
    type Ok = ();
    type Error = ModelError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTuple for SeqEncoder<'_> {
    type Ok = ();
    type Error = ModelError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for SeqEncoder<'_> {
    type Ok = ();
    type Error = ModelError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

struct StructEncoder<'a> {
    out: &'a mut Vec<QueryPair>,
    path: KeyPath,
    style: AddressingStyle,
}

impl ser::SerializeStruct for StructEncoder<'_> {
    type Ok = ();
    type Error = ModelError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        // Anything below the top level is addressed with brackets.
        let style = if self.path.is_empty() {
            self.style
        } else {
            AddressingStyle::DeepObject
        };
        value.serialize(PairSerializer {
            out: &mut *self.out,
            path: self.path.child(Segment::Property(key)),
            style,
        })
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

struct MapEncoder<'a> {
    out: &'a mut Vec<QueryPair>,
    path: KeyPath,
    pending_key: Option<String>,
}

impl ser::SerializeMap for MapEncoder<'_> {
    type Ok = ();
    type Error = ModelError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.pending_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let Some(key) = self.pending_key.take() else {
            return unsupported("a map value without a key");
        };
        value.serialize(PairSerializer {
            out: &mut *self.out,
            path: self.path.child(Segment::Key(key)),
            style: AddressingStyle::DeepObject,
        })
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// Renders scalar map keys to text.
struct MapKeySerializer;

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = ModelError;
    type SerializeSeq = Impossible<String, ModelError>;
    type SerializeTuple = Impossible<String, ModelError>;
    type SerializeTupleStruct = Impossible<String, ModelError>;
    type SerializeTupleVariant = Impossible<String, ModelError>;
    type SerializeMap = Impossible<String, ModelError>;
    type SerializeStruct = Impossible<String, ModelError>;
    type SerializeStructVariant = Impossible<String, ModelError>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        Ok(format!("{v:?}"))
    }

    fn serialize_f64(self, v: f64) -> Result<String> {
        Ok(format!("{v:?}"))
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        unsupported("a byte string map key")
    }

    fn serialize_none(self) -> Result<String> {
        unsupported("a null map key")
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        unsupported("a unit map key")
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String> {
        unsupported(&format!("unit struct {name} as map key"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        unsupported("a data-carrying map key")
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        unsupported("a sequence map key")
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        unsupported("a tuple map key")
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        unsupported("a tuple map key")
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        unsupported("a data-carrying map key")
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        unsupported("a map as map key")
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct> {
        unsupported("a struct as map key")
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        unsupported("a data-carrying map key")
    }
}
