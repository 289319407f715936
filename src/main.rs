use anyhow::Result;
use logsumexp::{CliInputs, Summary};

fn main() -> Result<()> {
    // values come from the command line, --file, or stdin in that order
    let cli = CliInputs::read_cli();
    let values = cli.read_values()?;
    let summary = Summary::compute(&values)?;
    println!("{}", summary.render(cli.json)?);

    Ok(())
}
