//! Declarative generators for DTO structs, their builders, and wire enums.
//!
//! Every DTO in this crate shares one shape: optional PascalCase fields,
//! structural `Eq`/`Hash`, a `Default` carrying the schema defaults, and a
//! consuming builder. `dto!` stamps that shape out from a field list.
//!
//! ```ignore
//! dto! {
//!     /// Queue entry.
//!     pub struct QueueItem => QueueItemBuilder {
//!         id: Uuid,
//!         playlist_item_id: String,
//!         tags: Vec<String> = Vec::new(); push add_tag: String,
//!     }
//! }
//! ```
//!
//! `= expr` declares the value `Default` (and a fresh builder) starts with.
//! `; push name: Item` adds a builder method appending one element to a list
//! field, `; insert name: K => V` one inserting a map entry.
//! `; insert_nullable name: K => V` is the same for a `BTreeMap<K, Option<V>>`
//! field, whose values the server may send as `null`.

macro_rules! dto {
    (@default) => {
        None
    };
    (@default $default:expr) => {
        Some($default)
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty
                $(= $default:expr)?
                $(; push $adder:ident : $item:ty)?
                $(; insert $inserter:ident : $key:ty => $value:ty)?
                $(; insert_nullable $nullable_inserter:ident : $nkey:ty => $nvalue:ty)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: dto!(@default $($default)?), )*
                }
            }
        }

        impl $name {
            #[doc = concat!("Start a [`", stringify!($builder), "`] from the schema defaults.")]
            pub fn builder() -> $builder {
                $builder::new()
            }

            #[doc = concat!("Start a [`", stringify!($builder), "`] from a copy of this value.")]
            pub fn to_builder(&self) -> $builder {
                $builder {
                    inner: self.clone(),
                }
            }
        }

        impl $crate::dto::Dto for $name {}

        #[doc = concat!("Consuming builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        #[must_use]
        pub struct $builder {
            inner: $name,
        }

        impl $builder {
            pub fn new() -> Self {
                Self {
                    inner: $name::default(),
                }
            }

            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.inner.$field = Some(value.into());
                    self
                }

                $(
                    pub fn $adder(mut self, item: impl Into<$item>) -> Self {
                        self.inner
                            .$field
                            .get_or_insert_with(Default::default)
                            .push(item.into());
                        self
                    }
                )?

                $(
                    pub fn $inserter(
                        mut self,
                        key: impl Into<$key>,
                        value: impl Into<$value>,
                    ) -> Self {
                        self.inner
                            .$field
                            .get_or_insert_with(Default::default)
                            .insert(key.into(), value.into());
                        self
                    }
                )?

                $(
                    pub fn $nullable_inserter(
                        mut self,
                        key: impl Into<$nkey>,
                        value: impl Into<$nvalue>,
                    ) -> Self {
                        self.inner
                            .$field
                            .get_or_insert_with(Default::default)
                            .insert(key.into(), Some(value.into()));
                        self
                    }
                )?
            )*

            #[must_use]
            pub fn build(self) -> $name {
                self.inner
            }
        }

        impl From<$builder> for $name {
            fn from(builder: $builder) -> Self {
                builder.build()
            }
        }
    };
}

macro_rules! dto_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Upstream string constant for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::error::ModelError::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}
