//! Flag-name resolution
//!
//! Bridges option keys, usually camelCase (`dryRun`), to the flags a command
//! declares, usually kebab-case (`--dry-run`).

use crate::command::{Command, FlagDeclaration};
use tracing::debug;

/// Convert a camelCase identifier to kebab-case
///
/// A hyphen goes before every ASCII uppercase letter, the result is
/// lower-cased, and all leading hyphens are removed. Removing every leading
/// hyphen, not just one, means `--verbose` resolves like `verbose` instead
/// of rendering as `---verbose`. Strings without uppercase letters come back
/// unchanged unless they start with a hyphen.
///
/// ```
/// use flagline::utils::naming::camel_to_kebab;
///
/// assert_eq!(camel_to_kebab("dryRun"), "dry-run");
/// assert_eq!(camel_to_kebab("XMLHttpRequest"), "x-m-l-http-request");
/// ```
#[must_use]
#[inline]
pub fn camel_to_kebab(input: &str) -> String {
    let mut hyphenated = String::with_capacity(input.len() * 2);
    for ch in input.chars() {
        if ch.is_ascii_uppercase() {
            hyphenated.push('-');
        }
        hyphenated.push(ch);
    }

    hyphenated
        .to_lowercase()
        .trim_start_matches('-')
        .to_owned()
}

/// Find the flag `key` refers to on `command`
///
/// A flag matches when its long name or its short name equals `key`
/// verbatim, or its long name equals `camel_to_kebab(key)`. The first
/// matching flag in declaration order wins. An absent command has no flags.
#[must_use]
#[inline]
pub fn find_flag<'cmd>(
    command: Option<&'cmd Command>,
    key: &str,
) -> Option<&'cmd FlagDeclaration> {
    let command = command?;
    let kebab = camel_to_kebab(key);

    command.flags().iter().find(|flag| {
        let long = flag.long_name();
        long == Some(key) || flag.short_name() == Some(key) || long == Some(kebab.as_str())
    })
}

/// Name to render for `key`, without leading dashes
///
/// The matched flag's long name, else its short name; when nothing matches,
/// the kebab-case form of `key`.
#[must_use]
#[inline]
pub fn flag_display_name(command: Option<&Command>, key: &str) -> String {
    find_flag(command, key).map_or_else(
        || {
            debug!("No declared flag for '{key}', using kebab-case name");
            camel_to_kebab(key)
        },
        |flag| flag.display_name().to_owned(),
    )
}
