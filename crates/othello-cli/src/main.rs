mod command;
mod protocol;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
