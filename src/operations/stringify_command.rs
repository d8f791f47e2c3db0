//! Render a full invocation: program, subcommand path, positionals, options

use crate::command::Command;
use crate::operations::stringify_options::{option_args, stringify_options};
use crate::options::OptionsMap;
use tracing::debug;

/// Resolve the target command, logging when the path leads nowhere
fn resolve<'cmd, S: AsRef<str>>(root: &'cmd Command, path: &[S]) -> Option<&'cmd Command> {
    let target = root.find_by_path(path);
    if target.is_none() {
        let joined: Vec<&str> = path.iter().map(|segment| segment.as_ref()).collect();
        debug!(
            "Command path '{}' not found under '{}', rendering without declared flags",
            joined.join(" "),
            root.name()
        );
    }
    target
}

/// Leading words: program name, path segments, positional arguments
fn head<'a, S: AsRef<str>>(
    root: &'a Command,
    path: &'a [S],
    options: &'a OptionsMap,
) -> impl Iterator<Item = &'a str> {
    core::iter::once(root.name())
        .chain(path.iter().map(|segment| segment.as_ref()))
        .chain(options.positionals().iter().map(String::as_str))
}

/// Render `<program> <path...> <positionals...> <options>`
///
/// Leading words are joined by single spaces, then one more space precedes
/// the options, so an invocation without options ends in a space:
///
/// ```
/// use flagline::command::Command;
/// use flagline::operations::stringify_command::stringify_command_with_options;
/// use flagline::options::OptionsMap;
///
/// let root = Command::new("tsci").subcommand(
///     Command::new("clone").option("--include-author").unwrap(),
/// );
/// let options = OptionsMap::new()
///     .with("_", vec!["seveibar/led-water-accelerometer"])
///     .with("includeAuthor", false);
///
/// assert_eq!(
///     stringify_command_with_options(&root, &["clone"], &options),
///     "tsci clone seveibar/led-water-accelerometer "
/// );
/// ```
#[must_use]
#[inline]
pub fn stringify_command_with_options<S: AsRef<str>>(
    root: &Command,
    path: &[S],
    options: &OptionsMap,
) -> String {
    let target = resolve(root, path);
    let leading: Vec<&str> = head(root, path, options).collect();
    format!("{} {}", leading.join(" "), stringify_options(options, target))
}

/// Argv form of the same invocation, one entry per argument
#[must_use]
#[inline]
pub fn command_args<S: AsRef<str>>(
    root: &Command,
    path: &[S],
    options: &OptionsMap,
) -> Vec<String> {
    let target = resolve(root, path);
    head(root, path, options)
        .map(str::to_owned)
        .chain(option_args(options, target))
        .collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;

    fn build_tool() -> Command {
        Command::new("build-tool").subcommand(
            Command::new("build")
                .option("--mode <mode>")
                .unwrap()
                .option("--watch")
                .unwrap(),
        )
    }

    #[test]
    fn no_positionals_single_space() {
        let options = OptionsMap::new()
            .with("mode", "production")
            .with("watch", false);
        assert_eq!(
            stringify_command_with_options(&build_tool(), &["build"], &options),
            "build-tool build --mode production"
        );
    }

    #[test]
    fn empty_options_trailing_space() {
        let options = OptionsMap::new().with("watch", false);
        assert_eq!(
            stringify_command_with_options(&build_tool(), &["build"], &options),
            "build-tool build "
        );
    }

    #[test]
    fn positionals_precede_options() {
        let options = OptionsMap::new()
            .with("_", vec!["src/index.js"])
            .with("watch", true);
        assert_eq!(
            stringify_command_with_options(&build_tool(), &["build"], &options),
            "build-tool build src/index.js --watch"
        );
    }

    #[test]
    fn unknown_path_falls_back_to_kebab() {
        let options = OptionsMap::new().with("watch", false).with("dryRun", true);
        assert_eq!(
            stringify_command_with_options(&build_tool(), &["deploy"], &options),
            "build-tool deploy --watch false --dry-run true"
        );
    }

    #[test]
    fn empty_path_targets_root() {
        let root = Command::new("tool").option("-v, --verbose").unwrap();
        let options = OptionsMap::new().with("v", true);
        let empty: [&str; 0] = [];
        assert_eq!(
            stringify_command_with_options(&root, &empty, &options),
            "tool --verbose"
        );
    }

    #[test]
    fn command_args_lists_every_argument() {
        let options = OptionsMap::new()
            .with("_", vec!["src/app.js"])
            .with("mode", "development")
            .with("watch", true);
        assert_eq!(
            command_args(&build_tool(), &["build"], &options),
            ["build-tool", "build", "src/app.js", "--mode", "development", "--watch"]
        );
    }
}
