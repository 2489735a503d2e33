// Fast hash maps using AHash instead of the default SipHash.
// Import with `use crate::types::HashMap`; add `HashMapExt` when you need
// `::new()` or `::with_capacity()`.
pub(crate) type HashMap<K, V> = ahash::HashMap<K, V>;
pub(crate) use ahash::HashMapExt;
