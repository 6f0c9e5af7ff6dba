use std::{collections::BTreeMap, fmt, str::FromStr};

use lantern_data::Material;

use crate::error::ApiError;

/// A block material together with its named state properties, e.g.
/// `minecraft:furnace[facing=north,lit=false]`.
///
/// Data parsed from a string only carries the properties the string named.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockData {
    material: Material,
    properties: BTreeMap<String, String>,
}

impl BlockData {
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self {
            material,
            properties: BTreeMap::new(),
        }
    }

    /// Parses `[minecraft:]<key>[<name>=<value>,...]`.
    pub fn parse(data: &str) -> Result<Self, ApiError> {
        let data = data.trim();
        let (key, properties) = match data.find('[') {
            Some(open) => {
                let Some(body) = data[open + 1..].strip_suffix(']') else {
                    return Err(ApiError::invalid_argument(format!(
                        "Unterminated property list in block data {data}"
                    )));
                };
                (&data[..open], Some(body))
            }
            None => (data, None),
        };

        let material = Material::from_key(key)
            .ok_or_else(|| ApiError::invalid_argument(format!("Unknown block {key}")))?;
        if !material.is_block() {
            return Err(ApiError::invalid_argument(format!(
                "{material} is not a block"
            )));
        }

        let mut block_data = Self::new(material);
        if let Some(body) = properties.filter(|body| !body.trim().is_empty()) {
            for pair in body.split(',') {
                let Some((name, value)) = pair.split_once('=') else {
                    return Err(ApiError::invalid_argument(format!(
                        "Malformed property {pair} in block data {data}"
                    )));
                };
                let (name, value) = (name.trim(), value.trim());
                let bracketed = |part: &str| part.contains(['[', ']']);
                if name.is_empty() || value.is_empty() || bracketed(name) || bracketed(value) {
                    return Err(ApiError::invalid_argument(format!(
                        "Malformed property {pair} in block data {data}"
                    )));
                }
                block_data.set_property(name, value);
            }
        }
        Ok(block_data)
    }

    pub fn get_material(&self) -> Material {
        self.material
    }

    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Canonical string form, accepted by [`BlockData::parse`].
    pub fn get_as_string(&self) -> String {
        self.to_string()
    }

    /// Same material, and every property set on `other` has the same value here.
    pub fn matches(&self, other: &BlockData) -> bool {
        self.material == other.material
            && other
                .properties
                .iter()
                .all(|(name, value)| self.properties.get(name) == Some(value))
    }

    /// Copy of `self` with every property of `other` applied on top.
    pub fn merge(&self, other: &BlockData) -> Result<BlockData, ApiError> {
        if self.material != other.material {
            return Err(ApiError::invalid_argument(format!(
                "Data not created for same block type: {} vs {}",
                self.material, other.material
            )));
        }
        let mut merged = self.clone();
        for (name, value) in &other.properties {
            merged.set_property(name.clone(), value.clone());
        }
        Ok(merged)
    }
}

impl From<Material> for BlockData {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}

impl FromStr for BlockData {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BlockData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minecraft:{}", self.material.key())?;
        if self.properties.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for (index, (name, value)) in self.properties.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod test {
    use lantern_data::Material;

    use super::BlockData;

    #[test]
    fn plain_material() {
        let data = BlockData::parse("stone").unwrap();
        assert_eq!(data.get_material(), Material::Stone);
        assert_eq!(data.get_as_string(), "minecraft:stone");
        assert_eq!(BlockData::parse("minecraft:stone[]").unwrap(), data);
    }

    #[test]
    fn properties_are_sorted() {
        let data: BlockData = "minecraft:furnace[lit=false, facing=north]".parse().unwrap();
        assert_eq!(data.get_property("facing"), Some("north"));
        assert_eq!(data.get_as_string(), "minecraft:furnace[facing=north,lit=false]");
        assert_eq!(BlockData::parse(&data.get_as_string()).unwrap(), data);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(BlockData::parse("minecraft:not_a_block").is_err());
        assert!(BlockData::parse("minecraft:stick").is_err());
        assert!(BlockData::parse("furnace[facing=north").is_err());
        assert!(BlockData::parse("furnace[facing]").is_err());
        assert!(BlockData::parse("furnace[=north]").is_err());
        assert!(BlockData::parse("furnace[facing=north]]").is_err());
        assert!(BlockData::parse("furnace[[facing=north]").is_err());
    }

    #[test]
    fn matches_only_checks_given_properties() {
        let full = BlockData::new(Material::Furnace)
            .with_property("facing", "north")
            .with_property("lit", "true");
        let partial = BlockData::parse("furnace[lit=true]").unwrap();

        assert!(full.matches(&partial));
        assert!(!partial.matches(&full));
        assert!(full.matches(&BlockData::new(Material::Furnace)));
        assert!(!full.matches(&BlockData::new(Material::Chest)));
    }

    #[test]
    fn merge_overlays_properties() {
        let base = BlockData::new(Material::Furnace)
            .with_property("facing", "north")
            .with_property("lit", "false");
        let merged = base.merge(&BlockData::parse("furnace[lit=true]").unwrap()).unwrap();
        assert_eq!(merged.get_as_string(), "minecraft:furnace[facing=north,lit=true]");
        assert_eq!(base.get_property("lit"), Some("false"));

        assert!(base.merge(&BlockData::new(Material::Chest)).is_err());
    }
}
