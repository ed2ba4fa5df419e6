//! File list constraints
//!
//! These only read metadata that has already been collected; nothing here
//! touches the filesystem.

use crate::support::{ByteSize, FileMeta, total_size};

/// Returns `true` if the files add up to at most `max` bytes.
#[must_use]
pub fn max_total_file_size(files: &[FileMeta], max: ByteSize) -> bool {
    total_size(files) <= max.bytes()
}

/// Returns `true` if every file's extension is in `allowed`.
///
/// Comparison ignores ASCII case and a leading `.` in `allowed` entries. A
/// file without an extension never matches.
#[must_use]
pub fn file_extension<S: AsRef<str>>(files: &[FileMeta], allowed: &[S]) -> bool {
    files.iter().all(|file| {
        file.extension().is_some_and(|ext| {
            allowed
                .iter()
                .any(|a| a.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    fn files(sizes: &[u64]) -> Vec<FileMeta> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, size)| FileMeta::new(format!("file{i}.pdf"), *size))
            .collect()
    }

    #[test]
    fn total_size_is_inclusive() {
        assert!(max_total_file_size(&files(&[3 * MB, 2 * MB]), ByteSize(5 * MB)));
        assert!(!max_total_file_size(&files(&[3 * MB, 2 * MB + 1]), ByteSize(5 * MB)));
        assert!(max_total_file_size(&[], ByteSize(0)));
    }

    #[test]
    fn decimal_sizes_over_binary_limit() {
        let upload = files(&[4_000_000, 3_000_000]);
        assert!(!max_total_file_size(&upload, ByteSize(5 * MB)));
        assert!(max_total_file_size(&upload, ByteSize(10 * MB)));
    }

    #[test]
    fn extensions_ignore_case_and_dot() {
        let upload = vec![FileMeta::new("a.PNG", 1), FileMeta::new("b.jpg", 1)];
        assert!(file_extension(&upload, &["png", ".jpg"]));
        assert!(!file_extension(&upload, &["png"]));
        assert!(!file_extension(&[FileMeta::new("README", 1)], &["md"]));
        assert!(file_extension::<&str>(&[], &[]));
    }
}
