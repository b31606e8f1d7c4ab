use std::path::PathBuf;

use othello_engine::{MoveOrder, SearchSeed};
use othello_evaluator::{
    board_evaluator::{DiagonalScoring, HeuristicEvaluator},
    move_selector::{MoveSelector, SearchConfig},
    search::SearchPolicy,
    weights::FactorWeights,
};
use rand::Rng as _;

use crate::util;

/// Options shared by every mode that runs the agent.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AgentArg {
    /// Factor weights JSON file (built-in weights when omitted)
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
    /// Seed for move ordering (random when omitted)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// How the search expands nodes
    #[arg(long, value_enum, default_value_t)]
    pub(crate) policy: PolicyArg,
    /// How the corner-diagonal factor is scored
    #[arg(long, value_enum, default_value_t)]
    pub(crate) diagonal: DiagonalArg,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum PolicyArg {
    /// Inherited move lists, forward-apply undo, claim-all-targets moves
    Reference,
    /// Per-node move lists, board snapshots, standard captures
    #[default]
    Standard,
}

impl From<PolicyArg> for SearchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Reference => SearchPolicy::REFERENCE,
            PolicyArg::Standard => SearchPolicy::STANDARD,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum DiagonalArg {
    /// Score the first held diagonal cell only
    #[default]
    FirstMatch,
    /// Score every held diagonal cell
    EveryCell,
}

impl From<DiagonalArg> for DiagonalScoring {
    fn from(arg: DiagonalArg) -> Self {
        match arg {
            DiagonalArg::FirstMatch => DiagonalScoring::FirstMatch,
            DiagonalArg::EveryCell => DiagonalScoring::EveryCell,
        }
    }
}

impl AgentArg {
    pub(crate) fn load_weights(&self) -> anyhow::Result<FactorWeights> {
        match &self.weights {
            Some(path) => util::read_weights_file(path),
            None => Ok(FactorWeights::DEFAULT),
        }
    }

    pub(crate) fn evaluator(&self) -> anyhow::Result<HeuristicEvaluator> {
        let weights = self.load_weights()?;
        Ok(HeuristicEvaluator::new(weights).with_diagonal_scoring(self.diagonal.into()))
    }

    pub(crate) fn selector(&self, policy: PolicyArg) -> anyhow::Result<MoveSelector<'static>> {
        let config = SearchConfig {
            policy: policy.into(),
            ..SearchConfig::default()
        };
        Ok(MoveSelector::new(Box::new(self.evaluator()?), config))
    }

    pub(crate) fn search_seed(&self) -> SearchSeed {
        self.seed.map_or_else(|| rand::rng().random(), SearchSeed::from)
    }

    /// Move order for this run; the seed is reported so the run can be repeated.
    pub(crate) fn move_order(&self) -> (SearchSeed, MoveOrder) {
        let seed = self.search_seed();
        (seed, MoveOrder::with_seed(seed))
    }
}
