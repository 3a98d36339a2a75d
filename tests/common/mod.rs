use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_amounts_csv(path: &Path, amounts: &[&str]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["amount"])?;
    for amount in amounts {
        wtr.write_record([amount])?;
    }

    wtr.flush()?;
    Ok(())
}
