// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Spoolgate print gateway.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single installed printer as reported by the host enumeration facility.
///
/// Keys are whatever the enumeration source emits (`Name`, `DriverName`,
/// `PortName`, `PrinterStatus`, `Location`, ...).  `Name` is the only key
/// guaranteed present and is the lookup key used for existence checks and
/// dispatch.  Records are built fresh on every enumeration call, never
/// cached, and never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrinterRecord {
    fields: BTreeMap<String, String>,
}

impl PrinterRecord {
    /// The key under which every enumeration backend reports the printer name.
    pub const NAME_KEY: &'static str = "Name";

    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a property by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The printer name, if the record carries one.
    pub fn name(&self) -> Option<&str> {
        self.get(Self::NAME_KEY)
    }

    /// Number of properties in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for PrinterRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
