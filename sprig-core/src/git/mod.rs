pub mod cli;
pub mod mock;
pub mod provider;

pub use cli::CliGitProvider;
pub use provider::GitProvider;

/// Parse branch enumeration output: one name per line, blank lines
/// skipped. Names are opaque tokens; no other validation.
pub fn parse_branch_names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
