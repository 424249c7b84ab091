use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::message::formatter::MessageFormatter;
use crate::utils::errors::ApiError;

static ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(\d+)\}").expect("argument pattern is valid")
});

const DEFAULT_MESSAGES: &str = include_str!("../../../resources/messages.properties");

/// Messages read from `.properties`-style `key = value` lines.
#[derive(Clone, Debug, Default)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {

    /// The bundle shipped with the crate.
    pub fn builtin() -> Self {
        let mut bundle = MessageBundle::default();
        bundle.merge(DEFAULT_MESSAGES);
        bundle
    }

    /// Layers the file at `path` over the built-in messages.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ApiError::InternalServerError(format!("Cannot read messages {}: {}", path.display(), e)))?;

        let mut bundle = Self::builtin();
        bundle.merge(&contents);
        Ok(bundle)
    }

    pub fn merge(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                self.messages.insert(key.trim().to_string(), unescape(value.trim()));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }
}

fn unescape(value: &str) -> String {
    value.replace("\\n", "\n").replace("\\t", "\t")
}

impl MessageFormatter for MessageBundle {
    fn format_message(&self, key: &str, args: &[&str]) -> Result<String, ApiError> {
        let pattern = self.get(key)
            .ok_or_else(|| ApiError::NotFound(format!("Message {} is not defined", key)))?;

        let formatted = ARGUMENT.replace_all(pattern, |caps: &Captures| {
            caps[1].parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        });
        Ok(formatted.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_owner_address_format() {
        let bundle = MessageBundle::builtin();

        let address = bundle
            .format_message("ownerAddressFormat", &["Jane", "Doe", "12 Elm St", "Springfield"])
            .unwrap();

        assert_eq!(address, "Jane Doe, 12 Elm St, Springfield");
    }

    #[test]
    fn test_merge_parses_properties() {
        let mut bundle = MessageBundle::default();
        bundle.merge("# comment\n! other comment\n\ngreeting = Hello {0}\\nBye {1}\nbroken line\n");

        assert_eq!(bundle.get("greeting"), Some("Hello {0}\nBye {1}"));
        assert_eq!(bundle.get("broken line"), None);
    }

    #[test]
    fn test_out_of_range_arguments_are_kept() {
        let mut bundle = MessageBundle::default();
        bundle.merge("pair = {0} and {1}");

        assert_eq!(bundle.format_message("pair", &["one"]).unwrap(), "one and {1}");
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let bundle = MessageBundle::builtin();

        assert!(matches!(bundle.format_message("nope", &[]), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_load_layers_over_builtin() {
        let path = std::env::temp_dir().join(format!("petclinic-messages-{}.properties", std::process::id()));
        fs::write(&path, "ownerAddressFormat = {2}\\n{3}\nextra = x").unwrap();

        let bundle = MessageBundle::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            bundle.format_message("ownerAddressFormat", &["Jane", "Doe", "12 Elm St", "Springfield"]).unwrap(),
            "12 Elm St\nSpringfield"
        );
        assert_eq!(bundle.get("extra"), Some("x"));
    }
}
