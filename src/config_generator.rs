//! Renders an Icinga 2 `CheckCommand` object for the binary from its clap definition.

use clap::ArgAction;

/// Environment variable which makes the binary print its Icinga command instead of checking.
pub const GENERATE_ENV: &str = "GENERATE_ICINGA_COMMAND";

pub struct CommandDescription {
    arguments: Vec<ArgumentDescription>,
}

struct ArgumentDescription {
    name: String,
    value: String,
    description: Option<String>,
    is_flag: bool,
    default_value: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ToIcingaCommandError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid executable path")]
    InvalidExecutablePath,
    #[error("error converting to command description: {0}")]
    CommandDescriptionFrom(#[from] CommandDescriptionFromError),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandDescriptionFromError {
    #[error("argument {0} has no long name")]
    MissingLongArgument(String),
}

impl CommandDescription {
    /// Renders the `object CheckCommand` definition running `executable`.
    pub fn to_icinga_command(&self, name: &str, executable: &str) -> String {
        let mut out = format!("object CheckCommand \"{name}\" {{\n");

        out.push_str(&format!(
            "  command = [ \"{}\" ]\n",
            escape_string(executable)
        ));
        out.push_str("  arguments = {\n");
        for arg in &self.arguments {
            out.push_str(&format!("    \"--{}\" = {{\n", arg.name));

            if arg.is_flag {
                out.push_str(&format!("      set_if = \"${}$\"\n", arg.value));
            } else {
                out.push_str(&format!("      value = \"${}$\"\n", arg.value));
            }

            if let Some(description) = &arg.description {
                out.push_str(&format!(
                    "      description = \"{}\"\n",
                    escape_string(description)
                ));
            }

            out.push_str("    }\n");
        }
        out.push_str("  }\n");

        let defaults: Vec<_> = self
            .arguments
            .iter()
            .filter_map(|arg| arg.default_value.as_ref().map(|v| (&arg.value, v)))
            .collect();
        if !defaults.is_empty() {
            out.push('\n');
        }
        for (value, default_value) in defaults {
            out.push_str(&format!(
                "  vars.{} = \"{}\"\n",
                value,
                escape_string(default_value)
            ));
        }

        out.push_str("}\n");
        out
    }
}

/// Escapes a value for an Icinga string literal. `$` is doubled so it isn't read as a macro.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "$$")
}

impl TryFrom<&clap::Command> for CommandDescription {
    type Error = CommandDescriptionFromError;

    fn try_from(cmd: &clap::Command) -> Result<Self, Self::Error> {
        let mut arguments = Vec::new();

        for arg in cmd.get_arguments() {
            let is_flag = match arg.get_action() {
                ArgAction::Help
                | ArgAction::HelpShort
                | ArgAction::HelpLong
                | ArgAction::Version => continue,
                ArgAction::SetTrue | ArgAction::SetFalse | ArgAction::Count => true,
                _ => false,
            };

            let name = arg
                .get_long()
                .ok_or_else(|| {
                    CommandDescriptionFromError::MissingLongArgument(arg.get_id().to_string())
                })?
                .to_owned();

            let value = name.replace('-', "_");
            let description = arg.get_help().map(|s| s.to_string());

            // defaults of flags are implied by their absence
            let default_value = if is_flag {
                None
            } else {
                arg.get_default_values()
                    .first()
                    .and_then(|v| v.to_str())
                    .map(|s| s.to_string())
            };

            arguments.push(ArgumentDescription {
                name,
                value,
                description,
                is_flag,
                default_value,
            });
        }

        Ok(CommandDescription { arguments })
    }
}

/// Returns true if the Icinga command configuration was requested through [GENERATE_ENV].
pub fn generate_requested() -> bool {
    std::env::var_os(GENERATE_ENV).is_some()
}

/// Builds the Icinga command configuration for the running executable.
pub fn icinga_command(name: &str, cmd: &clap::Command) -> Result<String, ToIcingaCommandError> {
    let description = CommandDescription::try_from(cmd)?;
    let current_exe = std::env::current_exe()?;
    let current_exe = current_exe
        .to_str()
        .ok_or(ToIcingaCommandError::InvalidExecutablePath)?;

    Ok(description.to_icinga_command(name, current_exe))
}
