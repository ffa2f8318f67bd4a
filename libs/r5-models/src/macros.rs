//! Declarative generators for value sets and choice groups.

/// Declares a closed FHIR value set as an enum with its wire codes.
macro_rules! value_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $code)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> crate::Result<Self> {
                match s {
                    $( $code => Ok($name::$variant), )+
                    other => Err(crate::Error::UnknownCode {
                        value_set: stringify!($name),
                        code: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Declares a FHIR `x[x]` choice group as a sum type.
///
/// Each alternative lists its wire key and its element name. On the wire the
/// group is flattened into the parent object (`onsetDateTime`, `onsetAge`),
/// so parents hold it as
///
/// ```ignore
/// #[serde(flatten, deserialize_with = "ConditionOnset::deserialize_flat")]
/// pub onset: Option<ConditionOnset>,
/// ```
///
/// Deserialization fails when more than one alternative is populated. A
/// required group that is absent reports its first alternative as missing.
macro_rules! choice_type {
    (
        $(#[$meta:meta])*
        $name:ident {
            $first:ident($first_ty:ty) => $first_wire:literal as $first_el:literal,
            $( $variant:ident($ty:ty) => $wire:literal as $el:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $first($first_ty),
            $( $variant($ty), )*
        }

        impl $name {
            /// Wire keys of every alternative.
            pub const FIELDS: &'static [&'static str] = &[$first_wire $(, $wire)*];

            /// Wire key of the populated alternative.
            pub fn wire_name(&self) -> &'static str {
                match self {
                    $name::$first(_) => $first_wire,
                    $( $name::$variant(_) => $wire, )*
                }
            }

            /// Element name of the populated alternative, as used in error paths.
            pub fn element_name(&self) -> &'static str {
                match self {
                    $name::$first(_) => $first_el,
                    $( $name::$variant(_) => $el, )*
                }
            }

            pub fn deserialize_flat<'de, D>(deserializer: D) -> std::result::Result<Option<Self>, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct FlatVisitor;

                impl<'de> serde::de::Visitor<'de> for FlatVisitor {
                    type Value = Option<$name>;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(f, "at most one of {}", $name::FIELDS.join(", "))
                    }

                    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
                    where
                        A: serde::de::MapAccess<'de>,
                    {
                        let mut found: Option<$name> = None;
                        while let Some(key) = map.next_key::<String>()? {
                            let value = match key.as_str() {
                                $first_wire => $name::$first(map.next_value()?),
                                $( $wire => $name::$variant(map.next_value()?), )*
                                _ => {
                                    map.next_value::<serde::de::IgnoredAny>()?;
                                    continue;
                                }
                            };
                            if let Some(previous) = &found {
                                return Err(serde::de::Error::custom(format!(
                                    "conflicting choice values '{}' and '{}'",
                                    previous.wire_name(),
                                    key
                                )));
                            }
                            found = Some(value);
                        }
                        Ok(found)
                    }
                }

                deserializer.deserialize_struct(stringify!($name), $name::FIELDS, FlatVisitor)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(Some(1))?;
                match self {
                    $name::$first(value) => map.serialize_entry($first_wire, value)?,
                    $( $name::$variant(value) => map.serialize_entry($wire, value)?, )*
                }
                map.end()
            }
        }

        impl ferrum_r5_validator::Validate for $name {
            fn validate_with(
                &self,
                ctx: &mut ferrum_r5_validator::ValidationContext,
            ) -> ferrum_r5_validator::Flow {
                match self {
                    $name::$first(value) => ctx.node($first_el, value),
                    $( $name::$variant(value) => ctx.node($el, value), )*
                }
            }
        }

        impl ferrum_r5_validator::Choice for $name {
            const REQUIRED_NAME: &'static str = $first_el;
        }
    };
}
