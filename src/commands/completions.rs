//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;

/// Generate shell completions to stdout
pub fn run(args: &CompletionsArgs) {
    generate(args, &mut std::io::stdout().lock());
}

fn generate(args: &CompletionsArgs, out: &mut impl std::io::Write) {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "skewcheck", out);
}
