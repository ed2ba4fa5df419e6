//! `max_total_file_size` / `file_extension`

use crate::foundation::{AsInput, ConfigError, Message, Translations};
use crate::rule::Rule;
use crate::rules::field_rule;
use crate::support::{ByteSize, FileMeta};
use crate::validators;

/// Messages for [`max_total_file_size`], rendered with the size as written
/// by the caller (`"5MB"`).
pub const MAX_TOTAL_FILE_SIZE_MESSAGES: Translations<fn(&String) -> String> = Translations {
    en: |size| format!("The total file size must be smaller than or equal to {size}."),
    ja: |size| format!("合計ファイルサイズは最大{size}までです。"),
    vi: |size| format!("Tổng kích thước tệp phải nhỏ hơn hoặc bằng {size}."),
};

/// Messages for [`file_extension`], rendered with the allowed list.
pub const FILE_EXTENSION_MESSAGES: Translations<fn(&String) -> String> = Translations {
    en: |list| format!("The file extension must be one of {list}."),
    ja: |list| format!("ファイルの拡張子は{list}のいずれかである必要があります。"),
    vi: |list| format!("Phần mở rộng tệp phải là một trong {list}."),
};

/// The files may add up to at most `size`, e.g. `"5MB"` (binary units).
/// Optional.
///
/// # Examples
///
/// ```
/// use sinter_validator::rule::Rule;
/// use sinter_validator::rules::max_total_file_size;
/// use sinter_validator::support::FileMeta;
///
/// let attachments: Rule<Vec<FileMeta>> = max_total_file_size("5MB")?;
/// let files = vec![FileMeta::new("a.pdf", 4_000_000), FileMeta::new("b.pdf", 3_000_000)];
/// assert_eq!(attachments.passes(&files), Some(false));
///
/// assert!(max_total_file_size::<Vec<FileMeta>>("five").is_err());
/// # Ok::<(), sinter_validator::foundation::ConfigError>(())
/// ```
pub fn max_total_file_size<V>(size: &str) -> Result<Rule<V>, ConfigError>
where
    V: AsInput<[FileMeta]> + ?Sized + 'static,
{
    let max = ByteSize::parse(size)?;
    let size = size.trim().to_owned();
    let message = Message::template(
        "max_total_file_size",
        MAX_TOTAL_FILE_SIZE_MESSAGES,
        size.clone(),
    )
    .with_param("size", size)
    .with_param("bytes", max.bytes().to_string());
    Ok(field_rule(message, true, move |files: &[FileMeta]| {
        validators::max_total_file_size(files, max)
    }))
}

/// Every file must have one of the `allowed` extensions (case-insensitive,
/// leading `.` optional). Optional.
pub fn file_extension<V, S>(allowed: impl IntoIterator<Item = S>) -> Result<Rule<V>, ConfigError>
where
    V: AsInput<[FileMeta]> + ?Sized + 'static,
    S: AsRef<str>,
{
    let allowed: Vec<String> = allowed
        .into_iter()
        .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
        .collect();
    if allowed.is_empty() {
        return Err(ConfigError::InvalidExtensions("the list is empty"));
    }
    if allowed.iter().any(String::is_empty) {
        return Err(ConfigError::InvalidExtensions("an extension is blank"));
    }

    let list = allowed.join(", ");
    let message = Message::template("file_extension", FILE_EXTENSION_MESSAGES, list.clone())
        .with_param("extensions", list);
    Ok(field_rule(message, true, move |files: &[FileMeta]| {
        validators::file_extension(files, &allowed)
    }))
}
