use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::Region;

/// Region directory: ISO code to [`Region`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionDirectory(HashMap<String, Region>);

impl RegionDirectory {
    pub fn get(&self, iso_code: &str) -> Option<&Region> {
        self.0.get(iso_code)
    }

    pub fn contains(&self, iso_code: &str) -> bool {
        self.0.contains_key(iso_code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Region)> {
        self.0.iter().map(|(iso_code, region)| (iso_code.as_str(), region))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Region> for RegionDirectory {
    fn from_iter<T: IntoIterator<Item = Region>>(iter: T) -> Self {
        Self(iter.into_iter().map(|region| (region.iso_code.clone(), region)).collect())
    }
}

/// Digit prefix to the ISO codes of every region dialed with it.
///
/// The order of each list is meaningful: when a prefix is shared, the first
/// region is the one picked for an otherwise ambiguous number (`1` lists the
/// United States before Canada, `7` lists Russia before Kazakhstan).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialCodeMap(BTreeMap<String, Vec<String>>);

impl DialCodeMap {
    /// Regions listed under exactly `prefix`, in priority order.
    pub fn exact(&self, prefix: &str) -> Option<&[String]> {
        self.0.get(prefix).map(Vec::as_slice)
    }

    /// Regions of every key that `query` starts with, key lists concatenated
    /// in key order. A region listed under several such keys shows up once
    /// per key.
    pub fn prefix_search(&self, query: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(dial_code, _)| query.starts_with(dial_code.as_str()))
            .flat_map(|(_, iso_codes)| iso_codes.iter().map(String::as_str))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(dial_code, iso_codes)| (dial_code.as_str(), iso_codes.as_slice()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Vec<V>)> for DialCodeMap {
    fn from_iter<T: IntoIterator<Item = (K, Vec<V>)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(dial_code, iso_codes)| {
                    (dial_code.into(), iso_codes.into_iter().map(Into::into).collect())
                })
                .collect(),
        )
    }
}
