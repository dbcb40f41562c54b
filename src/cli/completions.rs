use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    vendor-installer completions bash > ~/.bash_completion.d/vendor-installer\n\n\
                  Generate zsh completions:\n    vendor-installer completions zsh > ~/.zfunc/_vendor-installer\n\n\
                  Generate fish completions:\n    vendor-installer completions fish > ~/.config/fish/completions/vendor-installer.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
