use std::path::PathBuf;

use othello_evaluator::weights::FactorWeights;

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct WeightsArg {
    /// Weights file to validate and print (built-in weights when omitted)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &WeightsArg) -> anyhow::Result<()> {
    let WeightsArg { input, output } = arg;

    let weights = match input {
        Some(path) => util::read_weights_file(path)?,
        None => FactorWeights::DEFAULT,
    };
    for (name, weight) in weights.named() {
        eprintln!("{name:>16}: {weight}");
    }
    Output::save_json(&weights, output.clone())
}
