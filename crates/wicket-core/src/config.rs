/// Trait for loading configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` and set [`Config::PREFIX`] when
/// their variables share one (e.g. `WICKET_`). Field names map to upper-case
/// variable names after the prefix.
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// Prefix stripped from variable names before deserialization.
    const PREFIX: &'static str = "";

    /// Load from the process environment.
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or cannot be deserialized.
    fn from_env() -> Self {
        Self::try_from_env().expect("failed to load config from environment")
    }

    fn try_from_env() -> Result<Self, envy::Error> {
        envy::prefixed(Self::PREFIX).from_env()
    }

    /// Load from explicit key/value pairs instead of the process environment.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(Self::PREFIX).from_iter(vars)
    }
}
