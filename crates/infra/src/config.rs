//! Runtime configuration of the demo driver.
//!
//! Parsed from the command line, each setting falling back to an environment
//! variable:
//!
//! | argument | variable | meaning |
//! |---|---|---|
//! | `[SOURCE]` | `PARTIAL_SOURCE` | fixture path |
//! | `[FIELDS]..` | `PARTIAL_FIELDS` | field names, comma-separated or one per argument |
//! | `--record` | `PARTIAL_RECORD` | index of the record to print (default: last) |

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

pub const SOURCE_VAR: &str = "PARTIAL_SOURCE";
pub const FIELDS_VAR: &str = "PARTIAL_FIELDS";
pub const RECORD_VAR: &str = "PARTIAL_RECORD";

pub const DEFAULT_SOURCE: &str = "mock_data.json";

/// Field list used when none is configured. Padded, repeated and unknown
/// names are deliberate: they show off name normalization.
pub const DEFAULT_FIELDS: &[&str] = &[
    "first_name",
    "\u{7}\u{8}\ncompany\n",
    "first_name",
    "first_name",
    "\t\nfirst_name\t",
    "first_name\n",
    "archived_at",
    "middle_name",
    "last_name",
    "surname",
    "picture_url",
    "trashed_at",
    "",
    "\ntz\n",
    "created_at",
    "address",
    "phone_number",
    "phone",
    "email",
    "ip_address",
    "id",
];

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "partial", version, about = "Project user records down to a field subset")]
pub struct Config {
    /// Fixture to load.
    #[arg(env = SOURCE_VAR, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Raw requested field names, as given.
    #[arg(env = FIELDS_VAR, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Record to print; the last one when unset.
    #[arg(long, env = RECORD_VAR)]
    pub record: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            fields: default_fields(),
            record: None,
        }
    }
}

impl Config {
    /// Configuration of the current process. Exits with usage on bad input.
    pub fn load() -> Self {
        Self::parse().or_default_fields()
    }

    /// Parses `args` (program name first), falling back to the environment.
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map(Self::or_default_fields)
    }

    /// Index of the record to print in a payload of `len` records, if there is
    /// one.
    pub fn record_index(&self, len: usize) -> Option<usize> {
        match self.record {
            Some(index) if index < len => Some(index),
            Some(_) => None,
            None => len.checked_sub(1),
        }
    }

    fn or_default_fields(mut self) -> Self {
        if self.fields.is_empty() {
            debug!(fields = DEFAULT_FIELDS.len(), "no fields configured; using default list");
            self.fields = default_fields();
        }
        self
    }
}

fn default_fields() -> Vec<String> {
    DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn command_definition_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults_when_nothing_is_given() {
        let config = Config::try_load_from(["partial"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.source, PathBuf::from("mock_data.json"));
        assert_eq!(config.fields.len(), 21);
        assert_eq!(config.record, None);
    }

    #[test]
    fn positional_source_and_fields() {
        let config = Config::try_load_from([
            "partial",
            "local.json",
            "city",
            "country",
            "--record",
            "3",
        ])
        .unwrap();

        assert_eq!(config.source, PathBuf::from("local.json"));
        assert_eq!(config.fields, strings(&["city", "country"]));
        assert_eq!(config.record, Some(3));
    }

    #[test]
    fn comma_separated_fields_keep_padding() {
        let config = Config::try_load_from(["partial", "users.json", "id, email,tz"]).unwrap();
        assert_eq!(config.fields, strings(&["id", " email", "tz"]));
    }

    #[test]
    fn bad_record_index_is_rejected() {
        let err = Config::try_load_from(["partial", "--record", "last"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn settings_fall_back_to_environment() {
        let command = Config::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|var| var.to_os_string())
        };

        assert_eq!(env_of("source"), Some(SOURCE_VAR.into()));
        assert_eq!(env_of("fields"), Some(FIELDS_VAR.into()));
        assert_eq!(env_of("record"), Some(RECORD_VAR.into()));
    }

    #[test]
    fn record_index_defaults_to_last() {
        let mut config = Config::default();
        assert_eq!(config.record_index(5), Some(4));
        assert_eq!(config.record_index(0), None);

        config.record = Some(2);
        assert_eq!(config.record_index(5), Some(2));
        assert_eq!(config.record_index(2), None);
    }
}
