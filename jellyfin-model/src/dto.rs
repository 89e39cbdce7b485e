use std::fmt::Debug;
use std::hash::Hash;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ModelError, Result};
use crate::finite;
use crate::query::{self, AddressingStyle, KeyPath, QueryPair};

/// Conversions shared by every API object.
///
/// All methods have default implementations; DTOs opt in with an empty
/// `impl Dto for T {}` (generated by `dto!`).
pub trait Dto:
    Serialize + DeserializeOwned + Debug + Clone + PartialEq + Eq + Hash + Default
{
    /// Fails with [`ModelError::Encode`] if any float is NaN or infinite.
    fn to_json(&self) -> Result<String> {
        finite::check(self).map_err(ModelError::Encode)?;
        serde_json::to_string(self).map_err(ModelError::Encode)
    }

    fn to_json_pretty(&self) -> Result<String> {
        finite::check(self).map_err(ModelError::Encode)?;
        serde_json::to_string_pretty(self).map_err(ModelError::Encode)
    }

    fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Flat `Key=Value&...` form.
    fn to_url_query_string(&self) -> Result<String> {
        query::to_query_string(self, None)
    }

    /// Deep-object form, every key nested under `prefix`.
    fn to_url_query_string_with_prefix(&self, prefix: &str) -> Result<String> {
        query::to_query_string(self, Some(prefix))
    }

    fn query_pairs(
        &self,
        style: AddressingStyle,
        prefix: Option<&str>,
    ) -> Result<Vec<QueryPair>> {
        let path = prefix.map(KeyPath::rooted).unwrap_or_default();
        query::encode_pairs(self, style, path)
    }

    /// Indented dump of every field, `None` included. Debugging aid only.
    fn dump(&self) -> String {
        format!("{self:#?}")
    }
}
