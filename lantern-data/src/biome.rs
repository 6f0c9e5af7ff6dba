use std::fmt;

include!(concat!(env!("OUT_DIR"), "/biome.rs"));

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::Biome;

    #[test]
    fn lookup_with_namespace() {
        assert_eq!(Biome::from_key("minecraft:desert"), Some(Biome::Desert));
        assert_eq!(Biome::from_key("plains"), Some(Biome::Plains));
        assert_eq!(Biome::from_key("not_a_biome"), None);
    }

    #[test]
    fn climate() {
        assert_eq!(Biome::Desert.temperature(), 2.0);
        assert_eq!(Biome::Desert.downfall(), 0.0);
        assert_eq!(Biome::SnowyPlains.temperature(), 0.0);
        assert_eq!(Biome::SnowyPlains.to_string(), "SNOWY_PLAINS");
    }
}
