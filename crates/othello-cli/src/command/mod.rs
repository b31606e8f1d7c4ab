use clap::{Parser, Subcommand};

use self::{connect::ConnectArg, self_play::SelfPlayArg, weights::WeightsArg};

mod agent;
mod connect;
mod self_play;
mod weights;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
    #[clap(flatten)]
    connect: ConnectArg,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play on a match server (default)
    Connect(#[clap(flatten)] ConnectArg),
    /// Play local games between two agents
    SelfPlay(#[clap(flatten)] SelfPlayArg),
    /// Print factor weights as JSON
    Weights(#[clap(flatten)] WeightsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Connect(args.connect)) {
        Mode::Connect(arg) => connect::run(&arg)?,
        Mode::SelfPlay(arg) => self_play::run(&arg)?,
        Mode::Weights(arg) => weights::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_default_mode_is_connect() {
        let args = CommandArgs::try_parse_from(["othello"]).unwrap();
        assert!(args.mode.is_none());
        assert_eq!(args.connect.port, 1337);
        assert_eq!(args.connect.host, "localhost");

        let args = CommandArgs::try_parse_from(["othello", "8080", "server.local"]).unwrap();
        assert!(args.mode.is_none());
        assert_eq!(args.connect.port, 8080);
        assert_eq!(args.connect.host, "server.local");
    }

    #[test]
    fn test_subcommands() {
        let args =
            CommandArgs::try_parse_from(["othello", "self-play", "--games", "3", "--seed", "9"])
                .unwrap();
        assert!(matches!(args.mode, Some(Mode::SelfPlay(_))));

        let args = CommandArgs::try_parse_from(["othello", "weights"]).unwrap();
        assert!(matches!(args.mode, Some(Mode::Weights(_))));

        let args = CommandArgs::try_parse_from([
            "othello",
            "connect",
            "1400",
            "--policy",
            "reference",
            "--diagonal",
            "every-cell",
        ])
        .unwrap();
        let Some(Mode::Connect(arg)) = args.mode else {
            panic!("expected connect mode");
        };
        assert_eq!(arg.port, 1400);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(CommandArgs::try_parse_from(["othello", "70000"]).is_err());
    }
}
