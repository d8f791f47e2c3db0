//! Mirror a clap command tree into a `Command`
//!
//! Lets a binary built on clap reconstruct its own invocations without
//! declaring its flags twice.

use clap::ArgAction;

use super::{Command, FlagDeclaration, FlagKind};

impl From<&clap::Command> for Command {
    fn from(source: &clap::Command) -> Self {
        let flags = source
            .get_arguments()
            .filter(|arg| !arg.is_positional())
            .filter_map(flag_from_arg);

        let command = flags.fold(Self::new(source.get_name()), Self::with_flag);

        source
            .get_subcommands()
            .fold(command, |parent, child| parent.subcommand(Self::from(child)))
    }
}

/// Convert one clap argument; `None` when it has neither a long nor a short form
fn flag_from_arg(arg: &clap::Arg) -> Option<FlagDeclaration> {
    let long = arg.get_long();
    let short = arg.get_short();
    if long.is_none() && short.is_none() {
        return None;
    }

    let mut flag = FlagDeclaration::new(kind_of(arg.get_action()));
    if let Some(long) = long {
        flag = flag.with_long(format!("--{long}"));
    }
    if let Some(short) = short {
        flag = flag.with_short(format!("-{short}"));
    }
    Some(flag)
}

fn kind_of(action: &ArgAction) -> FlagKind {
    match *action {
        ArgAction::SetTrue
        | ArgAction::SetFalse
        | ArgAction::Count
        | ArgAction::Help
        | ArgAction::HelpShort
        | ArgAction::HelpLong
        | ArgAction::Version => FlagKind::Boolean,
        _ => FlagKind::ValueTaking,
    }
}
