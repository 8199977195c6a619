//! Response header model: parsed headers, the raw lines they were built from, and the
//! name-to-header table of a transaction.

use std::hash::{Hash, Hasher};

use bitflags::bitflags;
use bytes::Bytes;
use indexmap::{Equivalent, IndexMap};

use crate::protocol::ParseError;

bitflags! {
    /// Anomalies observed on a single header field.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u8 {
        /// Malformed framing: empty name, LWS before the colon, non-token name bytes.
        const INVALID = 0x01;
        /// No colon found at all; the field is never inserted.
        const UNPARSEABLE = 0x02;
        /// The name was seen more than once in the transaction.
        const REPEATED = 0x04;
    }
}

/// A logical response header.
///
/// `name` and `value` are owned copies, never views into the header lines they were
/// parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: Bytes,
    value: Vec<u8>,
    flags: FieldFlags,
}

impl Header {
    pub fn new(name: Bytes, value: Vec<u8>) -> Self {
        Self { name, value, flags: FieldFlags::empty() }
    }

    pub fn with_flags(name: Bytes, value: Vec<u8>, flags: FieldFlags) -> Self {
        Self { name, value, flags }
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn flags(&self) -> FieldFlags {
        self.flags
    }

    /// Appends `", " + value` to this header and marks it [`FieldFlags::REPEATED`].
    ///
    /// The whole growth is reserved up front, so on failure the header is unchanged.
    fn merge(&mut self, value: &[u8]) -> Result<(), ParseError> {
        self.value.try_reserve_exact(2 + value.len())?;
        self.value.extend_from_slice(b", ");
        self.value.extend_from_slice(value);
        self.flags |= FieldFlags::REPEATED;
        Ok(())
    }
}

/// Position of a header inside a [`HeaderTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeaderId(usize);

impl HeaderId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One raw header line as received, line terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    line: Bytes,
    header: Option<HeaderId>,
}

impl HeaderLine {
    pub fn new(line: Bytes) -> Self {
        Self { line, header: None }
    }

    pub fn line(&self) -> &Bytes {
        &self.line
    }

    /// The logical header this line was folded into, once assembled.
    pub fn header(&self) -> Option<HeaderId> {
        self.header
    }

    pub(crate) fn set_header(&mut self, id: HeaderId) {
        self.header = Some(id);
    }
}

/// Table key comparing names ASCII case-insensitively.
#[derive(Debug, Clone)]
struct HeaderKey(Bytes);

impl PartialEq for HeaderKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for HeaderKey {}

impl Hash for HeaderKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_name(&self.0, state);
    }
}

/// Borrowed lookup key, hashed the same way as [`HeaderKey`].
struct NameRef<'a>(&'a [u8]);

impl Hash for NameRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_name(self.0, state);
    }
}

impl Equivalent<HeaderKey> for NameRef<'_> {
    fn equivalent(&self, key: &HeaderKey) -> bool {
        self.0.eq_ignore_ascii_case(&key.0)
    }
}

fn hash_name<H: Hasher>(name: &[u8], state: &mut H) {
    for b in name {
        state.write_u8(b.to_ascii_lowercase());
    }
    state.write_usize(name.len());
}

/// Response headers of one transaction, in first-seen order.
///
/// Names are compared ASCII case-insensitively; the spelling of the first occurrence
/// is kept.
#[derive(Debug, Default, Clone)]
pub struct HeaderTable {
    headers: IndexMap<HeaderKey, Header>,
}

impl HeaderTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn get<N: AsRef<[u8]> + ?Sized>(&self, name: &N) -> Option<&Header> {
        self.headers.get(&NameRef(name.as_ref()))
    }

    pub fn get_id<N: AsRef<[u8]> + ?Sized>(&self, name: &N) -> Option<HeaderId> {
        self.headers.get_index_of(&NameRef(name.as_ref())).map(HeaderId)
    }

    pub fn get_index(&self, id: HeaderId) -> Option<&Header> {
        self.headers.get_index(id.0).map(|(_, header)| header)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.headers.values()
    }

    /// Inserts `header`, or merges it into an existing header of the same name.
    ///
    /// On merge the existing value becomes `existing + ", " + new`, the existing header
    /// is flagged [`FieldFlags::REPEATED`] and `header` is dropped. The returned id
    /// points at the header that holds the value afterwards. On error the table is
    /// left untouched.
    pub fn insert_or_merge(&mut self, header: Header) -> Result<HeaderId, ParseError> {
        if let Some((index, _, existing)) = self.headers.get_full_mut(&NameRef(&header.name)) {
            existing.merge(&header.value)?;
            return Ok(HeaderId(index));
        }

        let key = HeaderKey(header.name.clone());
        let (index, _) = self.headers.insert_full(key, header);
        Ok(HeaderId(index))
    }
}
