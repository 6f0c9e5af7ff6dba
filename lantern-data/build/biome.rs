use heck::{ToPascalCase, ToShoutySnakeCase};
use proc_macro2::TokenStream;
use quote::quote;
use serde::Deserialize;

use crate::ident;

#[derive(Deserialize, Clone, Debug)]
pub struct BiomeEntry {
    pub id: u8,
    pub name: String,
    pub temperature: f32,
    pub downfall: f32,
}

pub(crate) fn build() -> TokenStream {
    println!("cargo:rerun-if-changed=../assets/biome.json");

    let mut biomes: Vec<BiomeEntry> = serde_json::from_str(include_str!("../../assets/biome.json"))
        .expect("Failed to parse biome.json");
    biomes.sort_by_key(|biome| biome.id);

    let mut variants = Vec::with_capacity(biomes.len());
    let mut key_arms = TokenStream::new();
    let mut from_key_arms = TokenStream::new();
    let mut name_arms = TokenStream::new();
    let mut temperature_arms = TokenStream::new();
    let mut downfall_arms = TokenStream::new();

    for biome in &biomes {
        let variant = ident(biome.name.to_pascal_case());
        let key = &biome.name;
        let name = biome.name.to_shouty_snake_case();
        let temperature = biome.temperature;
        let downfall = biome.downfall;

        key_arms.extend(quote! { Self::#variant => #key, });
        from_key_arms.extend(quote! { #key => Some(Self::#variant), });
        name_arms.extend(quote! { Self::#variant => #name, });
        temperature_arms.extend(quote! { Self::#variant => #temperature, });
        downfall_arms.extend(quote! { Self::#variant => #downfall, });
        variants.push(variant);
    }

    quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Biome {
            #(#variants),*
        }

        impl Biome {
            pub const fn key(&self) -> &'static str {
                match self {
                    #key_arms
                }
            }

            pub const fn name(&self) -> &'static str {
                match self {
                    #name_arms
                }
            }

            #[doc = "Base temperature, before any height adjustment by the host."]
            pub const fn temperature(&self) -> f32 {
                match self {
                    #temperature_arms
                }
            }

            #[doc = "Base humidity."]
            pub const fn downfall(&self) -> f32 {
                match self {
                    #downfall_arms
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                match key.strip_prefix("minecraft:").unwrap_or(key) {
                    #from_key_arms
                    _ => None
                }
            }
        }
    }
}
