use std::path::PathBuf;

use anyhow::{Context, bail};
use othello_engine::{Game, GameResult, MoveOrder, Player, SearchSeed};
use othello_evaluator::{
    board_evaluator::DiagonalScoring,
    move_selector::{MoveChoice, MoveSelector},
    search::SearchPolicy,
};
use serde::Serialize;

use crate::{
    command::agent::{AgentArg, PolicyArg},
    util::Output,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SelfPlayArg {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    pub(crate) games: usize,
    /// Search policy for player 2 (player 1's policy when omitted)
    #[arg(long, value_enum)]
    pub(crate) opponent_policy: Option<PolicyArg>,
    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    #[clap(flatten)]
    pub(crate) agent: AgentArg,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct AgentSummary {
    policy: SearchPolicy,
    diagonal: DiagonalScoring,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GameRecord {
    /// `None` on a draw.
    winner: Option<Player>,
    discs: [usize; 2],
    plies: usize,
    passes: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SelfPlaySummary {
    seed: SearchSeed,
    player_one: AgentSummary,
    player_two: AgentSummary,
    games: usize,
    player_one_wins: usize,
    player_two_wins: usize,
    draws: usize,
    average_discs: [f64; 2],
    results: Vec<GameRecord>,
}

impl SelfPlaySummary {
    #[expect(clippy::cast_precision_loss)]
    fn new(seed: SearchSeed, agents: [AgentSummary; 2], results: Vec<GameRecord>) -> Self {
        let [player_one, player_two] = agents;
        let wins = |player: Player| {
            results
                .iter()
                .filter(|record| record.winner == Some(player))
                .count()
        };
        let average = |index: usize| {
            if results.is_empty() {
                0.0
            } else {
                results.iter().map(|r| r.discs[index]).sum::<usize>() as f64 / results.len() as f64
            }
        };
        Self {
            seed,
            player_one,
            player_two,
            games: results.len(),
            player_one_wins: wins(Player::One),
            player_two_wins: wins(Player::Two),
            draws: results.iter().filter(|r| r.winner.is_none()).count(),
            average_discs: [average(0), average(1)],
            results,
        }
    }
}

pub(crate) fn run(arg: &SelfPlayArg) -> anyhow::Result<()> {
    let SelfPlayArg {
        games,
        opponent_policy,
        output,
        agent,
    } = arg;

    let policies = [agent.policy, opponent_policy.unwrap_or(agent.policy)];
    let selectors = [agent.selector(policies[0])?, agent.selector(policies[1])?];
    let agents = policies.map(|policy| AgentSummary {
        policy: policy.into(),
        diagonal: agent.diagonal.into(),
    });

    let (seed, mut order) = agent.move_order();
    eprintln!("Move order seed: {seed}");

    let mut results = Vec::with_capacity(*games);
    for index in 0..*games {
        let record = play_game(&selectors, &mut order)
            .with_context(|| format!("Game {} failed", index + 1))?;
        let outcome = match record.winner {
            Some(player) => format!("{player} wins"),
            None => "draw".to_string(),
        };
        eprintln!(
            "Game {}/{games}: {outcome} ({} - {}, {} plies)",
            index + 1,
            record.discs[0],
            record.discs[1],
            record.plies
        );
        results.push(record);
    }

    let summary = SelfPlaySummary::new(seed, agents, results);
    eprintln!(
        "Player 1 wins: {}, player 2 wins: {}, draws: {}",
        summary.player_one_wins, summary.player_two_wins, summary.draws
    );
    Output::save_json(&summary, output.clone())?;
    Ok(())
}

fn play_game(
    selectors: &[MoveSelector<'_>; 2],
    order: &mut MoveOrder,
) -> anyhow::Result<GameRecord> {
    let mut game = Game::new();
    while game.status().is_playing() {
        let player = game.to_move();
        let selector = match player {
            Player::One => &selectors[0],
            Player::Two => &selectors[1],
        };
        let turn = u32::try_from(game.ply()).context("Turn counter overflow")?;
        let decision = selector.select_move(player, game.board(), turn, order);
        let MoveChoice::Play(position) = decision.choice else {
            bail!("{player} has no legal move in a game still in progress");
        };
        game.play(position)
            .with_context(|| format!("{player} chose an illegal move {position}"))?;
    }

    let (one, two) = game.disc_counts();
    let winner = match game.result() {
        Some(GameResult::Winner(player)) => Some(player),
        Some(GameResult::Draw) | None => None,
    };
    Ok(GameRecord {
        winner,
        discs: [one, two],
        plies: game.ply(),
        passes: game.passes(),
    })
}
