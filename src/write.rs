use crate::error::Error;
use crate::generator::RowGenerator;
use crate::tables::{Tables, HEADER};
use rand::Rng;
use std::fs::File;
use std::io;
use std::path::Path;

fn csv_writer<W: io::Write>(sink: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink)
}

/// Writes the header and `row_count` generated rows to `sink`.
pub fn write_rows<W, R>(
    sink: W,
    generator: &mut RowGenerator<'_, R>,
    row_count: usize,
    referred: bool,
) -> Result<(), Error>
where
    W: io::Write,
    R: Rng,
{
    let mut writer = csv_writer(sink);
    writer.write_record(&HEADER)?;
    for _ in 0..row_count {
        writer.serialize(generator.generate_row(referred))?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and fills it from `generator`.
pub fn write_file_with<P, R>(
    path: P,
    generator: &mut RowGenerator<'_, R>,
    row_count: usize,
    referred: bool,
) -> Result<(), Error>
where
    P: AsRef<Path>,
    R: Rng,
{
    let file = File::create(path)?;
    write_rows(file, generator, row_count, referred)
}

/// Writes `row_count` fake submissions to `path` using the built-in tables.
pub fn write_file<P: AsRef<Path>>(path: P, row_count: usize, referred: bool) -> Result<(), Error> {
    let mut generator = RowGenerator::from_entropy(Tables::DEFAULT)?;
    write_file_with(path, &mut generator, row_count, referred)
}
