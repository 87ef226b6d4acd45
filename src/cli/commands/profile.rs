//! Profile command implementation.

use crate::cli::args::{OutputFormat, ProfileCommands, ProfileFields};
use crate::error::BreatheError;
use crate::output::{format_profile, to_json};
use crate::store::{Profile, Store};

/// Execute profile subcommands.
///
/// # Errors
///
/// Returns an error if the Store call fails.
pub fn profile(
    store: &dyn Store,
    cmd: ProfileCommands,
    format: OutputFormat,
) -> Result<String, BreatheError> {
    match cmd {
        ProfileCommands::Show => {
            let profile = store.get_profile()?;
            format_profile(&profile, format)
        }
        ProfileCommands::Set(fields) => {
            let profile = Profile::from(fields);
            store.save_profile(&profile)?;
            match format {
                OutputFormat::Json => to_json(&profile),
                OutputFormat::Pretty => Ok("Profile saved.".to_string()),
            }
        }
    }
}

impl From<ProfileFields> for Profile {
    fn from(fields: ProfileFields) -> Self {
        Self {
            full_name: fields.name.unwrap_or_default(),
            age: fields.age.unwrap_or_default(),
            email: fields.email.unwrap_or_default(),
            phone: fields.phone.unwrap_or_default(),
            height: fields.height.unwrap_or_default(),
            weight: fields.weight.unwrap_or_default(),
            medical: fields.medical.unwrap_or_default(),
            notes: fields.notes.unwrap_or_default(),
            updated: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    #[test]
    fn test_set_overwrites_every_field() {
        let mut store = MockStore::new();
        store
            .expect_save_profile()
            .withf(|p| p.full_name == "Ada" && p.email.is_empty() && p.notes.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let fields = ProfileFields {
            name: Some("Ada".to_string()),
            ..ProfileFields::default()
        };
        let output = profile(&store, ProfileCommands::Set(fields), OutputFormat::Pretty).unwrap();
        assert_eq!(output, "Profile saved.");
    }

    #[test]
    fn test_show_blank() {
        let mut store = MockStore::new();
        store.expect_get_profile().returning(|| Ok(Profile::default()));

        let output = profile(&store, ProfileCommands::Show, OutputFormat::Pretty).unwrap();
        assert!(output.contains("No profile saved yet."));
    }
}
