use tracing::trace;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Number of bins a fresh environment starts with.
pub const INITIAL_BINS: usize = 10;
/// Multiplier of the polynomial string hash.
pub const HASH_PRIME: u64 = 499;
/// Entries per bin above which the table doubles its bin count.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// One binding in a collision chain.
#[derive(Debug)]
struct Entry {
    key:   String,
    value: Value,
    next:  Option<Box<Entry>>,
}

/// A name-to-value scope implemented as a hash table with chained collision
/// resolution.
///
/// Within one table a name maps to at most one value: inserting an existing
/// name overwrites its value in place without moving the entry in its chain.
/// Lookups that miss fall through to the enclosing environment, if any, so a
/// call frame can see global names while its own bindings stay private.
///
/// # Example
/// ```
/// use rubyish::interpreter::{environment::Environment, value::core::Value};
///
/// let mut globals = Environment::new();
/// globals.insert("x", Value::Number(1.0));
///
/// let mut frame = Environment::with_enclosing(&globals);
/// frame.insert("y", Value::Number(2.0));
///
/// assert_eq!(frame.get("x"), Some(&Value::Number(1.0)));
/// assert_eq!(frame.get("y"), Some(&Value::Number(2.0)));
/// assert_eq!(globals.get("y"), None);
/// ```
#[derive(Debug)]
pub struct Environment<'parent> {
    bins:      Vec<Option<Box<Entry>>>,
    len:       usize,
    enclosing: Option<&'parent Environment<'parent>>,
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the bin index of `key`.
///
/// The hash is `Σ key[i] * HASH_PRIME^(len-1-i)`, evaluated with Horner's
/// rule in wrapping 64 bit arithmetic, reduced modulo `bins`.
///
/// # Example
/// ```
/// use rubyish::interpreter::environment::{HASH_PRIME, hash_index};
///
/// let expected = (u64::from(b'a') * HASH_PRIME + u64::from(b'b')) % 10;
/// assert_eq!(hash_index("ab", 10) as u64, expected);
/// ```
#[must_use]
pub fn hash_index(key: &str, bins: usize) -> usize {
    let hash = key.bytes().fold(0u64, |hash, byte| {
                                  hash.wrapping_mul(HASH_PRIME)
                                      .wrapping_add(u64::from(byte))
                              });
    usize::try_from(hash % bins as u64).unwrap_or_default()
}

impl<'parent> Environment<'parent> {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Self {
        Self { bins:      empty_bins(INITIAL_BINS),
               len:       0,
               enclosing: None, }
    }

    /// Creates an empty environment whose lookups fall back to `enclosing`.
    #[must_use]
    pub fn with_enclosing(enclosing: &'parent Environment<'parent>) -> Self {
        Self { bins:      empty_bins(INITIAL_BINS),
               len:       0,
               enclosing: Some(enclosing), }
    }

    /// The outermost environment in the chain.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self.enclosing {
            Some(parent) => parent.root(),
            None => self,
        }
    }

    /// Binds `name` to `value` in this table.
    ///
    /// An existing binding for `name` is overwritten in place; otherwise the
    /// entry is appended to the tail of its bin's chain. The enclosing
    /// environment is never modified.
    pub fn insert(&mut self, name: &str, value: Value) {
        let index = hash_index(name, self.bins.len());
        if insert_into(&mut self.bins[index], name, value) {
            self.len += 1;
            if self.load_factor() > MAX_LOAD_FACTOR {
                self.grow();
            }
        }
    }

    /// Looks `name` up in this table, then in the enclosing chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = hash_index(name, self.bins.len());
        let mut current = self.bins[index].as_deref();
        while let Some(entry) = current {
            if entry.key == name {
                return Some(&entry.value);
            }
            current = entry.next.as_deref();
        }
        self.enclosing.and_then(|parent| parent.get(name))
    }

    /// Like [`Environment::get`], but a miss is an error.
    ///
    /// # Errors
    /// `RuntimeError::UnknownName` if `name` is bound nowhere in the chain.
    pub fn lookup(&self, name: &str, line: usize) -> Result<&Value, RuntimeError> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UnknownName { name: name.to_string(),
                                                       line })
    }

    /// True if `name` is bound in this table itself, ignoring the enclosing
    /// chain.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        let index = hash_index(name, self.bins.len());
        let mut current = self.bins[index].as_deref();
        while let Some(entry) = current {
            if entry.key == name {
                return true;
            }
            current = entry.next.as_deref();
        }
        false
    }

    /// Number of bindings in this table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if this table holds no bindings.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of bins.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Length of the collision chain that `name` hashes into.
    #[must_use]
    pub fn chain_len(&self, name: &str) -> usize {
        let index = hash_index(name, self.bins.len());
        let mut count = 0;
        let mut current = self.bins[index].as_deref();
        while let Some(entry) = current {
            count += 1;
            current = entry.next.as_deref();
        }
        count
    }

    #[allow(clippy::cast_precision_loss)]
    fn load_factor(&self) -> f64 {
        self.len as f64 / self.bins.len() as f64
    }

    /// Doubles the bin count and redistributes every entry, keeping the
    /// relative order of entries that land in the same bin.
    fn grow(&mut self) {
        let new_count = self.bins.len() * 2;
        trace!(entries = self.len, bins = new_count, "rehashing environment");

        let old = std::mem::replace(&mut self.bins, empty_bins(new_count));
        for mut chain in old {
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let index = hash_index(&entry.key, new_count);
                append(&mut self.bins[index], entry);
            }
        }
    }
}

fn empty_bins(count: usize) -> Vec<Option<Box<Entry>>> {
    (0..count).map(|_| None).collect()
}

/// Overwrites `name` if it is in the chain, otherwise appends it. Returns
/// whether a new entry was created.
fn insert_into(slot: &mut Option<Box<Entry>>, name: &str, value: Value) -> bool {
    match slot {
        Some(entry) if entry.key == name => {
            entry.value = value;
            false
        },
        Some(entry) => insert_into(&mut entry.next, name, value),
        None => {
            *slot = Some(Box::new(Entry { key: name.to_string(),
                                          value,
                                          next: None }));
            true
        },
    }
}

fn append(slot: &mut Option<Box<Entry>>, entry: Box<Entry>) {
    match slot {
        Some(existing) => append(&mut existing.next, entry),
        None => *slot = Some(entry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinsert_overwrites_without_growing_the_chain() {
        let mut env = Environment::new();
        env.insert("x", Value::Number(1.0));
        let chain = env.chain_len("x");

        for _ in 0..5 {
            env.insert("x", Value::Number(2.0));
        }

        assert_eq!(env.get("x"), Some(&Value::Number(2.0)));
        assert_eq!(env.chain_len("x"), chain);
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn colliding_names_share_a_chain() {
        let mut env = Environment::new();
        // Find two distinct names that land in the same bin.
        let first = "a".to_string();
        let second = (0..1000).map(|i| format!("v{i}"))
                              .find(|name| {
                                  hash_index(name, INITIAL_BINS) == hash_index(&first, INITIAL_BINS)
                              })
                              .unwrap();

        env.insert(&first, Value::Number(1.0));
        env.insert(&second, Value::Number(2.0));

        assert_eq!(env.chain_len(&first), 2);
        assert_eq!(env.get(&first), Some(&Value::Number(1.0)));
        assert_eq!(env.get(&second), Some(&Value::Number(2.0)));

        env.insert(&first, Value::Number(3.0));
        assert_eq!(env.chain_len(&first), 2);
        assert_eq!(env.get(&first), Some(&Value::Number(3.0)));
    }

    #[test]
    fn missing_name_is_an_error() {
        let env = Environment::new();
        assert_eq!(env.lookup("ghost", 4),
                   Err(RuntimeError::UnknownName { name: "ghost".to_string(),
                                                   line: 4, }));
    }

    #[test]
    fn grows_under_load_and_keeps_every_binding() {
        let mut env = Environment::new();
        for i in 0..100 {
            env.insert(&format!("name{i}"), Value::Number(f64::from(i)));
        }

        assert!(env.bin_count() > INITIAL_BINS);
        assert_eq!(env.len(), 100);
        for i in 0..100 {
            assert_eq!(env.get(&format!("name{i}")), Some(&Value::Number(f64::from(i))));
        }
    }

    #[test]
    fn frame_bindings_shadow_and_stay_local() {
        let mut globals = Environment::new();
        globals.insert("x", Value::Number(1.0));

        let mut frame = Environment::with_enclosing(&globals);
        frame.insert("x", Value::Number(9.0));

        assert_eq!(frame.get("x"), Some(&Value::Number(9.0)));
        assert!(frame.contains_local("x"));
        assert!(std::ptr::eq(frame.root(), &globals));
        drop(frame);
        assert_eq!(globals.get("x"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn hash_index_stays_within_bins() {
        for bins in [1, 7, 10, 20, 640] {
            for name in ["", "x", "counter", "a_much_longer_identifier_name_42"] {
                assert!(hash_index(name, bins) < bins);
            }
        }
        assert_eq!(hash_index("", 10), 0);
    }
}
