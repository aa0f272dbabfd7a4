//! Shell completion generation.
//!
//! Scripts go straight to stdout so they can be redirected into the
//! shell's completion directory. The CLI exposes its own `Shell` value
//! enum and maps it to clap_complete's generator here, keeping the
//! argument surface independent of that crate's types.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(
        completer_for(args.shell),
        &mut cmd,
        bin_name,
        &mut std::io::stdout().lock(),
    );
    Ok(())
}

fn completer_for(shell: Shell) -> clap_complete::Shell {
    match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shell_produces_a_script_naming_the_binary() {
        let shells = [
            Shell::Bash,
            Shell::Zsh,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Elvish,
        ];
        for shell in shells {
            let mut cmd = Cli::command();
            let mut buf = Vec::new();
            generate(completer_for(shell), &mut cmd, "fastforge", &mut buf);
            let script = String::from_utf8(buf).unwrap();
            assert!(script.contains("fastforge"), "empty script for {shell:?}");
        }
    }
}
