// Wire contract shared by every closed vocabulary enum.
//
// Each enum derives its tag table from strum (`EnumString` + `IntoStaticStr`
// with snake_case tags) and gets serde impls from `closed_vocabulary!`.
// Decoding is lenient: a well-formed string that is not in the table maps to
// the `Unknown` variant. Anything that is not a string is still an error.

macro_rules! closed_vocabulary {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// Decodes a wire tag. Unrecognized tags map to `Unknown`.
                pub fn decode(tag: &str) -> Self {
                    tag.parse().unwrap_or($name::Unknown)
                }

                /// The wire tag for this variant.
                pub fn as_str(&self) -> &'static str {
                    (*self).into()
                }

                /// Every variant of the vocabulary, `Unknown` included.
                pub fn all() -> impl Iterator<Item = Self> {
                    <Self as strum::IntoEnumIterator>::iter()
                }

                pub fn is_unknown(&self) -> bool {
                    *self == $name::Unknown
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }

            impl serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self.as_str())
                }
            }

            impl<'de> serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let tag = <String as serde::Deserialize>::deserialize(deserializer)?;
                    Ok($name::decode(&tag))
                }
            }
        )+
    };
}
