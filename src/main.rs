use std::io;

mod error;
mod paths;
mod split;

use error::SplitError;

fn main() -> Result<(), SplitError> {
    let stdin = io::stdin();
    let composite_path = paths::prompt_composite_path(&mut stdin.lock(), &mut io::stdout())?;

    let output_dir = paths::default_output_dir();
    let report = split::split_composite(&composite_path, &output_dir)?;

    split::writer::print_summary(&output_dir, report.saved.len());
    Ok(())
}
