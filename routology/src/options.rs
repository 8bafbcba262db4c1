//! Router options.

use serde::Deserialize;

/// The options that drive route pattern and name derivation.
///
/// The options can be deserialized from any serde source, using the upper-case keys
/// (`SIMPLE_AUTO_NAMING`, `WORDS_SEPARATOR`, ...), or read from the environment through
/// `RouterOptions::from_env`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RouterOptions {
    /// Name every route after its view only, ignoring models and verbs.
    pub simple_auto_naming: bool,

    /// Use the lower-case model name as a single token (`modelname`) rather than splitting it into
    /// words (`model_name`).
    pub model_names_monolithic: bool,

    /// Name routes after the model of their view, when there is one.
    pub try_use_model_names: bool,

    /// The separator between the words of a route name.
    #[serde(alias = "NAME_WORDS_SEPARATOR")]
    pub words_separator: String,

    /// Use the admin-style verbs (`changelist`, `add`, `change`) instead of the router-style ones
    /// (`list`, `create`, `update`).
    #[serde(alias = "DJANGO_ADMIN_LIKE_NAMES")]
    pub admin_like_verbs: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            simple_auto_naming: false,
            model_names_monolithic: true,
            try_use_model_names: true,
            words_separator: "_".to_owned(),
            admin_like_verbs: false,
        }
    }
}

/// An error that can occur when trying to get the router options from the environment.
#[derive(Debug, thiserror::Error)]
pub enum RouterOptionsFromEnvError {
    /// An environment variable was not unicode.
    #[error("environment variable {name} was not unicode")]
    NotUnicode {
        /// The name of the environment variable.
        name: &'static str,
    },

    /// An environment variable was expected to hold a boolean.
    #[error("environment variable {name} must be a boolean (was `{value}`)")]
    InvalidBool {
        /// The name of the environment variable.
        name: &'static str,

        /// The value that was read.
        value: String,
    },
}

impl RouterOptions {
    /// The environment variable name for `simple_auto_naming`.
    pub const ROUTOLOGY_SIMPLE_AUTO_NAMING: &'static str = "ROUTOLOGY_SIMPLE_AUTO_NAMING";

    /// The environment variable name for `model_names_monolithic`.
    pub const ROUTOLOGY_MODEL_NAMES_MONOLITHIC: &'static str = "ROUTOLOGY_MODEL_NAMES_MONOLITHIC";

    /// The environment variable name for `try_use_model_names`.
    pub const ROUTOLOGY_TRY_USE_MODEL_NAMES: &'static str = "ROUTOLOGY_TRY_USE_MODEL_NAMES";

    /// The environment variable name for `words_separator`.
    pub const ROUTOLOGY_WORDS_SEPARATOR: &'static str = "ROUTOLOGY_WORDS_SEPARATOR";

    /// Legacy name for `ROUTOLOGY_WORDS_SEPARATOR`.
    pub const ROUTOLOGY_NAME_WORDS_SEPARATOR: &'static str = "ROUTOLOGY_NAME_WORDS_SEPARATOR";

    /// The environment variable name for `admin_like_verbs`.
    pub const ROUTOLOGY_ADMIN_LIKE_VERBS: &'static str = "ROUTOLOGY_ADMIN_LIKE_VERBS";

    /// Legacy name for `ROUTOLOGY_ADMIN_LIKE_VERBS`.
    pub const ROUTOLOGY_ADMIN_LIKE_NAMES: &'static str = "ROUTOLOGY_ADMIN_LIKE_NAMES";

    fn env_var(name: &'static str) -> Result<Option<String>, RouterOptionsFromEnvError> {
        match std::env::var(name) {
            Ok(value) => Ok(if value.is_empty() { None } else { Some(value) }),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(RouterOptionsFromEnvError::NotUnicode { name })
            }
        }
    }

    /// Get the router options from the environment.
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, RouterOptionsFromEnvError> {
        tracing::info!("Reading router options from the environment...");

        let options = Self::from_lookup(Self::env_var)?;

        tracing::debug!(?options, "Router options read from the environment.");

        Ok(options)
    }

    /// Get the router options from an arbitrary variable lookup.
    ///
    /// The lookup is called with the environment variable names and must return `None` for unset
    /// variables.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, RouterOptionsFromEnvError>
    where
        F: FnMut(&'static str) -> Result<Option<String>, RouterOptionsFromEnvError>,
    {
        let mut options = Self::default();

        if let Some(value) = parse_bool(Self::ROUTOLOGY_SIMPLE_AUTO_NAMING, &mut lookup)? {
            options.simple_auto_naming = value;
        }

        if let Some(value) = parse_bool(Self::ROUTOLOGY_MODEL_NAMES_MONOLITHIC, &mut lookup)? {
            options.model_names_monolithic = value;
        }

        if let Some(value) = parse_bool(Self::ROUTOLOGY_TRY_USE_MODEL_NAMES, &mut lookup)? {
            options.try_use_model_names = value;
        }

        let admin_like_verbs = match parse_bool(Self::ROUTOLOGY_ADMIN_LIKE_VERBS, &mut lookup)? {
            Some(value) => Some(value),
            None => parse_bool(Self::ROUTOLOGY_ADMIN_LIKE_NAMES, &mut lookup)?,
        };

        if let Some(value) = admin_like_verbs {
            options.admin_like_verbs = value;
        }

        let words_separator = match lookup(Self::ROUTOLOGY_WORDS_SEPARATOR)? {
            Some(value) => Some(value),
            None => lookup(Self::ROUTOLOGY_NAME_WORDS_SEPARATOR)?,
        };

        if let Some(value) = words_separator {
            options.words_separator = value;
        }

        Ok(options)
    }
}

fn parse_bool<F>(
    name: &'static str,
    lookup: &mut F,
) -> Result<Option<bool>, RouterOptionsFromEnvError>
where
    F: FnMut(&'static str) -> Result<Option<String>, RouterOptionsFromEnvError>,
{
    let Some(value) = lookup(name)? else {
        return Ok(None);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(RouterOptionsFromEnvError::InvalidBool { name, value }),
    }
}
