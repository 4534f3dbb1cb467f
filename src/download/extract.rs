//! Zip extraction with path-traversal protection

use std::fs;
use std::io::{self, Read, Seek};
use std::path::{Component, Path, PathBuf};

use zip::ZipArchive;

use crate::error::{PgfnError, Result};

/// Resolve an archive entry name inside `dest`
///
/// The name is normalized lexically; names that are absolute or climb out of
/// `dest` with `..` are rejected.
///
/// # Errors
/// Returns [`PgfnError::Archive`] for an entry outside of `dest`
pub fn entry_target(dest: &Path, name: &str) -> Result<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !relative.pop() {
                    return Err(outside_target(dest, name));
                }
            }
            Component::RootDir | Component::Prefix(_) => return Err(outside_target(dest, name)),
        }
    }
    Ok(dest.join(relative))
}

fn outside_target(dest: &Path, name: &str) -> PgfnError {
    PgfnError::Archive {
        path: dest.to_path_buf(),
        message: format!("entry is outside of the target dir: {name}"),
    }
}

/// Extract every entry of a zip archive into `dest`
///
/// # Returns
/// The number of files written
///
/// # Errors
/// Returns an archive error for an unreadable archive or an unsafe entry
/// name, or an IO error if a file cannot be written
pub fn extract_zip<R: Read + Seek>(reader: R, dest: &Path) -> Result<usize> {
    let archive_error = |e: zip::result::ZipError| PgfnError::Archive {
        path: dest.to_path_buf(),
        message: e.to_string(),
    };

    let mut archive = ZipArchive::new(reader).map_err(archive_error)?;
    let mut extracted = 0;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(archive_error)?;
        let target = entry_target(dest, entry.name())?;

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| PgfnError::io(&target, "creating directory", e))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| PgfnError::io(parent, "creating directory", e))?;
        }
        let mut file = fs::File::create(&target)
            .map_err(|e| PgfnError::io(&target, "creating extracted file", e))?;
        io::copy(&mut entry, &mut file)
            .map_err(|e| PgfnError::io(&target, "extracting archive entry", e))?;
        log::debug!("Extracted {}", target.display());
        extracted += 1;
    }

    Ok(extracted)
}
