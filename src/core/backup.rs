use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", dest.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally replacing the copy
    /// with a `.zip` archive. Returns the final path, or `None` if the user
    /// declined to overwrite.
    pub fn backup(
        pool: &DbPool,
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !force && !confirm_overwrite(dest)? {
            info("Backup cancelled.");
            return Ok(None);
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        audit_or_warn(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Compress a backup into a sibling `.zip` file.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "drivepay.sqlite".to_string());

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_and_compresses() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("drivepay_backup_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let db = dir.join("src.sqlite");
        let pool = DbPool::open(db.to_str().unwrap()).unwrap();

        let plain = dir.join("copy.sqlite");
        let out = BackupLogic::backup(&pool, db.to_str().unwrap(), plain.to_str().unwrap(), false, true)
            .unwrap()
            .unwrap();
        assert_eq!(out, plain);
        assert!(plain.exists());

        let zipped = dir.join("packed.sqlite");
        let out = BackupLogic::backup(&pool, db.to_str().unwrap(), zipped.to_str().unwrap(), true, true)
            .unwrap()
            .unwrap();
        assert_eq!(out, dir.join("packed.zip"));
        assert!(out.exists());
        assert!(!zipped.exists());

        let logged: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM log WHERE operation = 'backup'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(logged, 2);

        drop(pool);
        fs::remove_dir_all(&dir).ok();
    }
}
