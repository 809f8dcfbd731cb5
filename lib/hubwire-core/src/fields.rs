//! Field-level (de)serialization strategy helpers.
//!
//! The GitHub API deviates from naive serde behavior in two places:
//! enum values travel as lowercase strings (and arrive with arbitrary
//! case and embedded hyphens), and some string fields are really
//! comma-joined lists (OAuth scopes). The [`github_enum!`] macro and
//! the [`comma_separated`] module encode those rules once, as
//! compile-time mapping tables rather than runtime introspection.

/// Serde helpers for members that are a collection of strings on the
/// Rust side but may arrive as a single comma-joined string.
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Authorization {
///     #[serde(with = "hubwire_core::comma_separated")]
///     scopes: Vec<String>,
/// }
///
/// let auth: Authorization = serde_json::from_str(r#"{"scopes":"repo,user"}"#).expect("decode");
/// assert_eq!(auth.scopes, vec!["repo", "user"]);
/// ```
pub mod comma_separated {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringsOrJoined {
        Strings(Vec<String>),
        Joined(String),
    }

    /// Deserialize either a JSON list of strings or a single
    /// comma-joined string into a `Vec<String>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StringsOrJoined::deserialize(deserializer)? {
            StringsOrJoined::Strings(values) => Ok(values),
            StringsOrJoined::Joined(joined) => {
                Ok(joined.split(',').map(str::to_string).collect())
            }
        }
    }

    /// Serialize the collection as a plain JSON list.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        values.serialize(serializer)
    }
}

/// Define an enum that follows the GitHub wire conventions.
///
/// Serialization emits the lowercase variant name; deserialization
/// strips embedded hyphens and matches case-insensitively, so a
/// stored `"some-value"` decodes to a variant named `SomeValue`. A
/// string matching no variant is a decode error.
///
/// ```
/// hubwire_core::github_enum! {
///     /// How a repository may be sorted.
///     pub enum RepoSort {
///         Created,
///         FullName,
///     }
/// }
///
/// assert_eq!(serde_json::to_string(&RepoSort::FullName).expect("encode"), "\"fullname\"");
/// let sort: RepoSort = serde_json::from_str("\"full-name\"").expect("decode");
/// assert_eq!(sort, RepoSort::FullName);
/// ```
#[macro_export]
macro_rules! github_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// The lowercase name this value serializes to.
            #[must_use]
            $vis fn wire_name(&self) -> ::std::string::String {
                let name = match self {
                    $(Self::$variant => stringify!($variant)),+
                };
                name.to_ascii_lowercase()
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str(&self.wire_name())
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                let stripped: ::std::string::String =
                    raw.chars().filter(|c| *c != '-').collect();
                $(
                    if stripped.eq_ignore_ascii_case(stringify!($variant)) {
                        return ::core::result::Result::Ok(Self::$variant);
                    }
                )+
                ::core::result::Result::Err($crate::serde::de::Error::unknown_variant(
                    &raw,
                    &[$(stringify!($variant)),+],
                ))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    github_enum! {
        enum Flavor {
            Plain,
            SomeValue,
        }
    }

    #[test]
    fn enum_serializes_to_lowercase_name() {
        assert_eq!(
            serde_json::to_string(&Flavor::SomeValue).expect("serialize"),
            "\"somevalue\""
        );
        assert_eq!(Flavor::Plain.wire_name(), "plain");
    }

    #[test]
    fn enum_deserializes_ignoring_case_and_hyphens() {
        let flavor: Flavor = serde_json::from_str("\"some-value\"").expect("hyphenated");
        assert_eq!(flavor, Flavor::SomeValue);

        let flavor: Flavor = serde_json::from_str("\"SOME-Value\"").expect("mixed case");
        assert_eq!(flavor, Flavor::SomeValue);

        let flavor: Flavor = serde_json::from_str("\"plain\"").expect("plain");
        assert_eq!(flavor, Flavor::Plain);
    }

    #[test]
    fn enum_rejects_unknown_values() {
        let result: Result<Flavor, _> = serde_json::from_str("\"bogus\"");
        assert!(result.is_err());
    }

    #[test]
    fn enum_round_trips() {
        let json = serde_json::to_string(&Flavor::SomeValue).expect("serialize");
        let back: Flavor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Flavor::SomeValue);
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Scoped {
        #[serde(with = "crate::comma_separated")]
        scopes: Vec<String>,
    }

    #[test]
    fn comma_separated_splits_joined_string() {
        let scoped: Scoped =
            serde_json::from_str(r#"{"scopes":"repo,user,gist"}"#).expect("deserialize");
        assert_eq!(scoped.scopes, vec!["repo", "user", "gist"]);
    }

    #[test]
    fn comma_separated_accepts_plain_list() {
        let scoped: Scoped =
            serde_json::from_str(r#"{"scopes":["repo","user"]}"#).expect("deserialize");
        assert_eq!(scoped.scopes, vec!["repo", "user"]);
    }

    #[test]
    fn comma_separated_serializes_as_list() {
        let scoped = Scoped {
            scopes: vec!["repo".to_string(), "user".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&scoped).expect("serialize"),
            r#"{"scopes":["repo","user"]}"#
        );
    }
}
