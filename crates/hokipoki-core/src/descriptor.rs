//! Command metadata exposed to the host

use serde::Serialize;

use crate::autocomplete::CompletionOption;

/// Name the command is registered under (`/hokipoki`)
pub const COMMAND_NAME: &str = "hokipoki";

/// One-line description shown in the host's command list
pub const COMMAND_DESCRIPTION: &str = "Request help from remote AI via HokiPoki P2P marketplace";

/// Description of one option the command accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub flag: &'static str,
    /// Placeholder shown after the flag, e.g. `<name>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_hint: Option<&'static str>,
    pub help: &'static str,
    /// Where completions for this option come from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<CompletionOption>,
}

impl OptionSpec {
    /// Flag with its value placeholder, as shown in usage text
    pub fn usage(&self) -> String {
        match self.value_hint {
            Some(hint) => format!("{} {}", self.flag, hint),
            None => self.flag.to_string(),
        }
    }
}

/// Everything a host needs to register the command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<OptionSpec>,
}

impl CommandDescriptor {
    pub fn hokipoki() -> Self {
        Self {
            name: COMMAND_NAME,
            description: COMMAND_DESCRIPTION,
            options: vec![
                OptionSpec {
                    flag: "--tool",
                    value_hint: Some("<claude|codex|gemini>"),
                    help: "Specify AI tool to use",
                    completion: Some(CompletionOption::Tool),
                },
                OptionSpec {
                    flag: "--files",
                    value_hint: Some("<files...>"),
                    help: "Include specific files",
                    completion: None,
                },
                OptionSpec {
                    flag: "--dir",
                    value_hint: Some("<directories...>"),
                    help: "Include directories",
                    completion: None,
                },
                OptionSpec {
                    flag: "--all",
                    value_hint: None,
                    help: "Include entire repository",
                    completion: None,
                },
                OptionSpec {
                    flag: "--workspace",
                    value_hint: Some("<name>"),
                    help: "Route to specific workspace",
                    completion: Some(CompletionOption::Workspace),
                },
            ],
        }
    }
}
