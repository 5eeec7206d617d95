use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let values = day1::read_calibration_values(&args.input_path).with_context(|| {
        format!(
            "Failed to read calibration values from given input file({}).",
            args.input_path.display()
        )
    })?;

    let sum = values.iter().sum::<u32>();
    println!("The sum of all calibration values is {}.", sum);

    Ok(())
}
