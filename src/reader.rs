//! Reading formulas from text sources
//!
//! One formula per line. Blank lines and lines starting with `#` are skipped.

use crate::formula::Formula;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read formulas from any `BufRead`, one per line
///
/// # Errors
///
/// Returns an error of kind [`io::ErrorKind::InvalidData`] naming the line of
/// the first formula that fails to parse, or the underlying I/O error.
///
/// ```
/// use propositional_bases::read_formulas;
///
/// # fn main() -> std::io::Result<()> {
/// let input = "# bases\np -> q\n\n~r\n";
/// let formulas = read_formulas(input.as_bytes())?;
/// assert_eq!(formulas.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn read_formulas<R: BufRead>(reader: R) -> io::Result<Vec<Formula>> {
    let mut formulas = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let formula = Formula::parse(text).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", index + 1, e),
            )
        })?;
        debug!("line {}: read formula with {} nodes", index + 1, formula.size());
        formulas.push(formula);
    }
    Ok(formulas)
}

/// Read formulas from a file, one per line
pub fn read_formulas_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Formula>> {
    let path = path.as_ref();
    info!("reading formulas from {}", path.display());
    let file = File::open(path)?;
    read_formulas(BufReader::new(file))
}
