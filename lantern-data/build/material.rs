use heck::{ToPascalCase, ToShoutySnakeCase};
use proc_macro2::TokenStream;
use quote::quote;
use serde::Deserialize;

use crate::ident;

#[derive(Deserialize, Clone, Debug)]
pub struct MaterialEntry {
    pub id: u16,
    pub name: String,
    #[serde(default)]
    pub block: bool,
    #[serde(default)]
    pub item: bool,
    #[serde(default)]
    pub solid: bool,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default)]
    pub flammable: bool,
    #[serde(default)]
    pub burnable: bool,
    #[serde(default)]
    pub occluding: bool,
    #[serde(default)]
    pub gravity: bool,
    #[serde(default)]
    pub liquid: bool,
    #[serde(default)]
    pub air: bool,
    #[serde(default)]
    pub legacy: bool,
    #[serde(default = "default_max_stack_size")]
    pub max_stack_size: u8,
    #[serde(default)]
    pub max_durability: u16,
    #[serde(default)]
    pub hardness: f32,
    #[serde(default)]
    pub blast_resistance: f32,
}

fn default_max_stack_size() -> u8 {
    64
}

impl MaterialEntry {
    fn properties(&self) -> TokenStream {
        let Self {
            block,
            item,
            solid,
            transparent,
            flammable,
            burnable,
            occluding,
            gravity,
            liquid,
            air,
            legacy,
            max_stack_size,
            max_durability,
            hardness,
            blast_resistance,
            ..
        } = self;
        quote! {
            MaterialProperties {
                block: #block,
                item: #item,
                solid: #solid,
                transparent: #transparent,
                flammable: #flammable,
                burnable: #burnable,
                occluding: #occluding,
                gravity: #gravity,
                liquid: #liquid,
                air: #air,
                legacy: #legacy,
                max_stack_size: #max_stack_size,
                max_durability: #max_durability,
                hardness: #hardness,
                blast_resistance: #blast_resistance,
            }
        }
    }
}

pub(crate) fn build() -> TokenStream {
    println!("cargo:rerun-if-changed=../assets/material.json");

    let mut materials: Vec<MaterialEntry> =
        serde_json::from_str(include_str!("../../assets/material.json"))
            .expect("Failed to parse material.json");
    materials.sort_by_key(|material| material.id);

    let count = materials.len();
    let mut variants = Vec::with_capacity(count);
    let mut id_arms = TokenStream::new();
    let mut from_id_arms = TokenStream::new();
    let mut key_arms = TokenStream::new();
    let mut from_key_arms = TokenStream::new();
    let mut name_arms = TokenStream::new();
    let mut from_name_arms = TokenStream::new();
    let mut properties_arms = TokenStream::new();

    for material in &materials {
        let variant = ident(material.name.to_pascal_case());
        let id = material.id;
        let key = &material.name;
        let name = material.name.to_shouty_snake_case();
        let properties = material.properties();

        id_arms.extend(quote! { Self::#variant => #id, });
        from_id_arms.extend(quote! { #id => Some(Self::#variant), });
        key_arms.extend(quote! { Self::#variant => #key, });
        from_key_arms.extend(quote! { #key => Some(Self::#variant), });
        name_arms.extend(quote! { Self::#variant => #name, });
        from_name_arms.extend(quote! { #name => Some(Self::#variant), });
        properties_arms.extend(quote! { Self::#variant => #properties, });
        variants.push(variant);
    }

    quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Material {
            #(#variants),*
        }

        impl Material {
            #[doc = "Every material, ordered by id."]
            pub const ALL: [Material; #count] = [#(Self::#variants),*];

            pub const fn id(&self) -> u16 {
                match self {
                    #id_arms
                }
            }

            #[doc = "Registry key without the `minecraft:` namespace, e.g. `iron_ore`."]
            pub const fn key(&self) -> &'static str {
                match self {
                    #key_arms
                }
            }

            #[doc = "Constant name, e.g. `IRON_ORE`."]
            pub const fn name(&self) -> &'static str {
                match self {
                    #name_arms
                }
            }

            pub const fn properties(&self) -> MaterialProperties {
                match self {
                    #properties_arms
                }
            }

            pub const fn from_id(id: u16) -> Option<Self> {
                match id {
                    #from_id_arms
                    _ => None
                }
            }

            #[doc = "Looks up a registry key, with or without the `minecraft:` namespace."]
            pub fn from_key(key: &str) -> Option<Self> {
                match key.strip_prefix("minecraft:").unwrap_or(key) {
                    #from_key_arms
                    _ => None
                }
            }

            #[doc = "Looks up an exact constant name."]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    #from_name_arms
                    _ => None
                }
            }
        }
    }
}
