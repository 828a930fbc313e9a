//! File-to-file conversion.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::document::Shell;
use crate::error::{Error, Result};
use crate::{Options, to_document_with};

/// Outcome of a successful [`convert_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Where the page was written.
    pub output: PathBuf,
    /// Size of the written page.
    pub bytes_written: usize,
}

/// Read `input`, render it as a full page and write it to `output`,
/// replacing any existing file other than `input` itself.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &Options,
    shell: &Shell,
) -> Result<Conversion> {
    if same_file(input, output) {
        return Err(Error::OverwritesInput {
            path: output.to_path_buf(),
        });
    }

    let source = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let page = to_document_with(&source, options, shell);

    fs::write(output, &page).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        bytes = page.len(),
        "wrote html page"
    );

    Ok(Conversion {
        output: output.to_path_buf(),
        bytes_written: page.len(),
    })
}

/// Both paths name one file, compared after resolving links when both exist.
fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    }
}
