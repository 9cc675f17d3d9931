use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Error;
use crate::substitution::SubstitutionMap;

/// Line counts from a completed rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub lines: usize,
    pub lines_changed: usize,
}

/// Rewrites `path` in place, applying `map` to every line.
///
/// The new content is written to a uniquely named temporary file next to
/// `path` and renamed over it only after the whole file has been processed
/// and synced. On any error the temporary file is removed and `path` is left
/// untouched. The original file's permissions carry over to the new file.
pub fn replace_in_file(path: &Path, map: &SubstitutionMap) -> Result<RewriteStats, Error> {
    let src = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    let permissions = src.metadata()?.permissions();

    let mut tmp = temp_file_beside(path)?;
    debug!(
        target_file = %path.display(),
        temp_file = %tmp.path().display(),
        "rewriting"
    );

    let stats = {
        let mut reader = BufReader::new(src);
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let stats = rewrite_lines(&mut reader, &mut writer, map)?;
        writer.flush()?;
        stats
    };

    tmp.as_file().sync_all()?;
    fs::set_permissions(tmp.path(), permissions)?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;

    debug!(
        lines = stats.lines,
        lines_changed = stats.lines_changed,
        "rewrite complete"
    );
    Ok(stats)
}

/// Copies `reader` to `writer` line by line, applying `map` to each line.
/// Line terminators are passed through unchanged.
pub fn rewrite_lines<R, W>(
    reader: &mut R,
    writer: &mut W,
    map: &SubstitutionMap,
) -> io::Result<RewriteStats>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut stats = RewriteStats::default();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        let replaced = map.apply(&line);
        stats.lines += 1;
        if replaced != line {
            stats.lines_changed += 1;
        }
        writer.write_all(replaced.as_bytes())?;
    }

    Ok(stats)
}

/// Creates `.<file name>.<random>.tmp` in the same directory as `path`, so
/// the final rename never crosses a filesystem boundary.
fn temp_file_beside(path: &Path) -> io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = match path.file_name() {
        Some(name) => format!(".{}.", name.to_string_lossy()),
        None => ".token-replace.".to_string(),
    };

    tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
}
