use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skewcheck completions --shell bash > ~/.bash_completion.d/skewcheck\n\n\
                  Generate zsh completions:\n    skewcheck completions --shell zsh > ~/.zfunc/_skewcheck\n\n\
                  Generate fish completions:\n    skewcheck completions --shell fish > ~/.config/fish/completions/skewcheck.fish\n\n\
                  Generate PowerShell completions:\n    skewcheck completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, short = 's', value_enum, ignore_case = true)]
    pub shell: Shell,
}
