//! UUID registries
//!
//! Each registry maps a normalized [`BluetoothUuid`] to the codec (or service
//! definition) that handles it. Built-in SIG entries come from the closed
//! `*Kind` enums and are resolved with a plain `match`, without locking.
//! Custom entries registered at runtime live in a bounded map behind an
//! `embassy-sync` blocking mutex; the mutex is only taken once at least one
//! custom entry exists.
//!
//! Lookups check custom entries first, so a custom codec registered with
//! `allow_override` shadows the SIG codec for the same UUID.
//!
//! ```
//! use bluesig::registry::CharacteristicRegistry;
//! use bluesig::uuid::BluetoothUuid;
//!
//! let registry = CharacteristicRegistry::global();
//! let battery = BluetoothUuid::from_u16(0x2A19);
//! assert!(registry.class_by_uuid(&battery).is_some());
//! assert_eq!(registry.find_by_name("battery level"), Some(battery));
//! ```

mod characteristic;
mod descriptor;
mod service;

pub use characteristic::CharacteristicRegistry;
pub use descriptor::DescriptorRegistry;
pub use service::ServiceRegistry;

use crate::error::RegistryError;
use crate::uuid::BluetoothUuid;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use heapless::FnvIndexMap;

/// Maximum number of custom entries per registry
pub const MAX_CUSTOM_ENTRIES: usize = 32;

/// Custom entries expose the names they can be looked up by
trait Named {
    /// `(name, identifier)` of the entry
    fn names(&mut self) -> (&'static str, &'static str);
}

/// Lowercased name, identifier and identifier suffix → UUID
#[derive(Debug, Default)]
struct NameIndex(BTreeMap<String, BluetoothUuid>);

impl NameIndex {
    fn add(&mut self, uuid: BluetoothUuid, name: &str, identifier: &str) {
        let suffix = identifier.rsplit('.').next().unwrap_or(identifier);
        for key in [name, identifier, suffix] {
            if !key.is_empty() {
                self.0.insert(key.to_ascii_lowercase(), uuid);
            }
        }
    }

    fn get(&self, name: &str) -> Option<BluetoothUuid> {
        self.0.get(&name.trim().to_ascii_lowercase()).copied()
    }
}

struct Table<V> {
    entries: FnvIndexMap<BluetoothUuid, V, MAX_CUSTOM_ENTRIES>,
    names: Option<NameIndex>,
}

/// Runtime-registered entries of one registry
struct CustomEntries<V> {
    populated: AtomicBool,
    table: Mutex<CriticalSectionRawMutex, RefCell<Table<V>>>,
}

impl<V: Named> CustomEntries<V> {
    const fn new() -> Self {
        Self {
            populated: AtomicBool::new(false),
            table: Mutex::new(RefCell::new(Table {
                entries: FnvIndexMap::new(),
                names: None,
            })),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Table<V>) -> R) -> R {
        self.table.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Run `f` on the entry for `uuid`, skipping the lock when nothing is registered
    fn get<R>(&self, uuid: &BluetoothUuid, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        if !self.populated.load(Ordering::Acquire) {
            return None;
        }
        self.with(|table| table.entries.get_mut(uuid).map(f))
    }

    fn contains(&self, uuid: &BluetoothUuid) -> bool {
        self.get(uuid, |_| ()).is_some()
    }

    fn insert(
        &self,
        uuid: BluetoothUuid,
        entry: V,
        sig_entry_exists: bool,
        allow_override: bool,
    ) -> Result<(), RegistryError> {
        self.with(|table| {
            if !allow_override && (sig_entry_exists || table.entries.contains_key(&uuid)) {
                return Err(RegistryError::AlreadyRegistered(uuid));
            }
            table
                .entries
                .insert(uuid, entry)
                .map_err(|_| RegistryError::Full(uuid))?;
            table.names = None;
            self.populated.store(true, Ordering::Release);
            Ok(())
        })
    }

    fn remove(&self, uuid: &BluetoothUuid, sig_entry_exists: bool) -> Result<V, RegistryError> {
        self.with(|table| match table.entries.remove(uuid) {
            Some(entry) => {
                table.names = None;
                if table.entries.is_empty() {
                    self.populated.store(false, Ordering::Release);
                }
                Ok(entry)
            }
            None if sig_entry_exists => Err(RegistryError::SigEntryProtected(*uuid)),
            None => Err(RegistryError::NotRegistered(*uuid)),
        })
    }

    /// Apply `f` to every entry in registration order
    fn collect<R>(&self, mut f: impl FnMut(&BluetoothUuid, &mut V) -> R) -> Vec<R> {
        if !self.populated.load(Ordering::Acquire) {
            return Vec::new();
        }
        self.with(|table| {
            table
                .entries
                .iter_mut()
                .map(|(uuid, entry)| f(uuid, entry))
                .collect()
        })
    }

    /// Resolve a name or identifier, building the index on first use
    ///
    /// `sig` lists the built-in entries; custom entries are added after them
    /// and win on conflicts.
    fn find_name<I>(&self, name: &str, sig: impl FnOnce() -> I) -> Option<BluetoothUuid>
    where
        I: IntoIterator<Item = (BluetoothUuid, &'static str, &'static str)>,
    {
        self.with(|table| {
            if table.names.is_none() {
                let mut index = NameIndex::default();
                for (uuid, name, identifier) in sig() {
                    index.add(uuid, name, identifier);
                }
                for (uuid, entry) in table.entries.iter_mut() {
                    let (name, identifier) = entry.names();
                    index.add(*uuid, name, identifier);
                }
                trace!("name index built with {} keys", index.0.len());
                table.names = Some(index);
            }
            table.names.as_ref().and_then(|index| index.get(name))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry(&'static str, &'static str);

    impl Named for Entry {
        fn names(&mut self) -> (&'static str, &'static str) {
            (self.0, self.1)
        }
    }

    #[test]
    fn test_name_index_keys() {
        let mut index = NameIndex::default();
        let uuid = BluetoothUuid::from_u16(0x2A19);
        index.add(uuid, "Battery Level", "org.bluetooth.characteristic.battery_level");
        assert_eq!(index.get("battery level"), Some(uuid));
        assert_eq!(index.get("BATTERY_LEVEL"), Some(uuid));
        assert_eq!(index.get(" org.bluetooth.characteristic.battery_level "), Some(uuid));
        assert_eq!(index.get("battery"), None);
    }

    #[test]
    fn test_custom_entries_rules() {
        let entries: CustomEntries<Entry> = CustomEntries::new();
        let uuid = BluetoothUuid::from_u16(0xFF01);
        assert!(!entries.contains(&uuid));
        entries.insert(uuid, Entry("Vendor", "com.example.vendor"), false, false).unwrap();
        assert_eq!(
            entries.insert(uuid, Entry("Vendor", "com.example.vendor"), false, false),
            Err(RegistryError::AlreadyRegistered(uuid))
        );
        entries.insert(uuid, Entry("Vendor 2", "com.example.vendor2"), false, true).unwrap();
        assert_eq!(entries.find_name("vendor2", Vec::new), Some(uuid));
        assert!(entries.remove(&uuid, false).is_ok());
        assert_eq!(entries.remove(&uuid, false).err(), Some(RegistryError::NotRegistered(uuid)));
        assert_eq!(entries.remove(&uuid, true).err(), Some(RegistryError::SigEntryProtected(uuid)));
    }

    #[test]
    fn test_capacity_is_bounded() {
        let entries: CustomEntries<Entry> = CustomEntries::new();
        for short in 0..MAX_CUSTOM_ENTRIES as u16 {
            entries
                .insert(BluetoothUuid::from_u16(0xFF00 + short), Entry("", ""), false, false)
                .unwrap();
        }
        let overflow = BluetoothUuid::from_u16(0xFFF0);
        assert_eq!(
            entries.insert(overflow, Entry("", ""), false, false),
            Err(RegistryError::Full(overflow))
        );
    }
}
