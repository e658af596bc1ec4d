// Resource name parsing
//
// Deployed names follow `{repo_name}-{STAGE}-{descriptor}` for functions and
// `{name}-{STAGE}` for state machines. The parsing below is a heuristic over
// that convention and breaks if the convention changes.
use super::deploy_stage::DeployStage;

/// Descriptor the log-shipping plugin gives its companion function. It
/// contains the `-` delimiter, so it cannot be found by splitting.
pub const LOG_PLUGIN_DESCRIPTOR: &str = "es-logs-plugin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub repo_name: String,
    pub descriptor: String,
}

/// Removes every `-{STAGE}` occurrence from `name`.
pub fn tier_agnostic_name(name: &str, stage: DeployStage) -> String {
    name.replace(&format!("-{}", stage.as_str()), "")
}

/// Splits a function name into repo name and descriptor.
///
/// The last `-` separated segment of the tier-agnostic name is the
/// descriptor and everything before it is the repo name. Names ending in the
/// log plugin descriptor are split on that fixed suffix instead. A name with
/// no delimiter comes back with an empty repo name.
pub fn parse_function_name(name: &str, stage: DeployStage) -> ParsedName {
    let stripped = tier_agnostic_name(name, stage);

    if let Some(repo_name) = stripped.strip_suffix(&format!("-{LOG_PLUGIN_DESCRIPTOR}")) {
        return ParsedName {
            repo_name: repo_name.to_string(),
            descriptor: LOG_PLUGIN_DESCRIPTOR.to_string(),
        };
    }

    match stripped.rsplit_once('-') {
        Some((repo_name, descriptor)) => ParsedName {
            repo_name: repo_name.to_string(),
            descriptor: descriptor.to_string(),
        },
        None => ParsedName {
            repo_name: String::new(),
            descriptor: stripped,
        },
    }
}
