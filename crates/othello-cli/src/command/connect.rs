use std::{
    io::{BufReader, BufWriter, Read, Write},
    net::TcpStream,
};

use anyhow::Context;
use othello_evaluator::move_selector::{MoveChoice, MoveDecision};

use crate::{
    command::agent::AgentArg,
    protocol::{self, TurnPayload},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ConnectArg {
    /// Match server port
    #[arg(default_value_t = 1337)]
    pub(crate) port: u16,
    /// Match server host
    #[arg(default_value = "localhost")]
    pub(crate) host: String,
    #[clap(flatten)]
    pub(crate) agent: AgentArg,
}

pub(crate) fn run(arg: &ConnectArg) -> anyhow::Result<()> {
    let ConnectArg { port, host, agent } = arg;

    let selector = agent.selector(agent.policy)?;
    let (seed, mut order) = agent.move_order();
    eprintln!("Move order seed: {seed}");

    let stream = TcpStream::connect((host.as_str(), *port))
        .with_context(|| format!("Failed to connect to {host}:{port}"))?;
    let writer = BufWriter::new(
        stream
            .try_clone()
            .context("Failed to clone server connection")?,
    );

    serve(BufReader::new(stream), writer, |payload, turn| {
        selector.select_move(payload.player, &payload.board, turn, &mut order)
    })?;

    eprintln!("connection to server closed");
    Ok(())
}

/// Answers turn payloads read from `reader` until the stream ends.
///
/// `choose` is called with the payload and the turn counter, which starts at 0
/// and advances by 2 for every move written back. Passes write nothing.
pub(crate) fn serve<R, W, F>(reader: R, mut writer: W, mut choose: F) -> anyhow::Result<()>
where
    R: Read,
    W: Write,
    F: FnMut(&TurnPayload, u32) -> MoveDecision,
{
    let payloads = serde_json::Deserializer::from_reader(reader).into_iter::<TurnPayload>();

    let mut turn: u32 = 0;
    for payload in payloads {
        let payload = match payload {
            Ok(payload) => payload,
            Err(err) if err.is_eof() => break,
            Err(err) if err.is_io() => {
                eprintln!("connection error: {err}");
                break;
            }
            Err(err) => return Err(err).context("Failed to decode turn payload"),
        };
        eprintln!("{turn}");

        let decision = choose(&payload, turn);
        eprintln!("{}", decision.priority);
        eprintln!("Current Factor Score: {}", decision.static_score);

        match decision.choice {
            MoveChoice::Play(position) => {
                eprintln!(
                    "{} plays {position} (depth {}, score {}, {} nodes)",
                    payload.player, decision.depth, decision.score, decision.nodes
                );
                let response = protocol::write_move(&mut writer, position)
                    .context("Failed to send move to server")?;
                eprintln!("sending {:?}", String::from_utf8_lossy(&response));
                turn += 2;
            }
            MoveChoice::Pass => {
                eprintln!("{} has no legal move, passing", payload.player);
            }
        }
    }

    Ok(())
}
