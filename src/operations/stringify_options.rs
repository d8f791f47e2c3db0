//! Render an options map as flag tokens
//!
//! Boolean flags appear only when their value is truthy, with no value.
//! Every other key, declared or not, renders as `--name value` using the
//! value's plain text.

use crate::command::Command;
use crate::options::{OptionValue, OptionsMap};
use crate::utils::naming::{find_flag, flag_display_name};

/// One rendered option, before joining
enum Rendered {
    Presence(String),
    WithValue(String, String),
}

fn render_each<'opts>(
    options: &'opts OptionsMap,
    command: Option<&'opts Command>,
) -> impl Iterator<Item = Rendered> + 'opts {
    options.iter().filter_map(move |(key, value)| render_one(command, key, value))
}

fn render_one(command: Option<&Command>, key: &str, value: &OptionValue) -> Option<Rendered> {
    let flag = find_flag(command, key);
    let name = flag_display_name(command, key);

    match flag {
        Some(flag) if flag.is_boolean() => value.is_truthy().then_some(Rendered::Presence(name)),
        _ => Some(Rendered::WithValue(name, value.to_string())),
    }
}

/// Tokens such as `--watch` or `--mode production`, one per emitted option
#[must_use]
#[inline]
pub fn option_tokens(options: &OptionsMap, command: Option<&Command>) -> Vec<String> {
    render_each(options, command)
        .map(|rendered| match rendered {
            Rendered::Presence(name) => format!("--{name}"),
            Rendered::WithValue(name, value) => format!("--{name} {value}"),
        })
        .collect()
}

/// Space-joined option tokens, e.g. `--dry-run --environment prod`
///
/// An empty value still renders as `--name ` with its trailing space.
#[must_use]
#[inline]
pub fn stringify_options(options: &OptionsMap, command: Option<&Command>) -> String {
    option_tokens(options, command).join(" ")
}

/// Option arguments as separate argv entries, e.g. `["--mode", "production", "--watch"]`
#[must_use]
#[inline]
pub fn option_args(options: &OptionsMap, command: Option<&Command>) -> Vec<String> {
    render_each(options, command)
        .flat_map(|rendered| match rendered {
            Rendered::Presence(name) => vec![format!("--{name}")],
            Rendered::WithValue(name, value) => vec![format!("--{name}"), value],
        })
        .collect()
}
