//! Naming resolver and format validators.
//!
//! Metadata identifiers arrive as snake_case, camelCase, dotted paths or a
//! mix; everything emitted goes out as PascalCase.

use crate::error::CodegenError;

/// Characters treated as word separators by [`pascal_case`].
fn is_separator(ch: char) -> bool {
    matches!(ch, '_' | '.' | '-' | ' ' | '$')
}

/// Convert an arbitrary metadata identifier into PascalCase.
///
/// Separators split words; the first letter of each word is uppercased and
/// interior casing is preserved (`createTs` → `CreateTs`, `send_count` →
/// `SendCount`). Total over any input, including the empty string.
pub fn pascal_case(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len());
    let mut word_start = true;
    for ch in identifier.chars() {
        if is_separator(ch) {
            word_start = true;
        } else if word_start {
            result.extend(ch.to_uppercase());
            word_start = false;
        } else {
            result.push(ch);
        }
    }
    result
}

/// Split a metaclass name into its normalized (prefix, type name) pair.
///
/// `sys$Config` → `("Sys", "Config")`. Fails unless the name contains
/// exactly one `$` with non-empty segments on both sides.
pub fn split_metaclass_name(name: &str) -> Result<(String, String), CodegenError> {
    validate_metaclass_format(name)?;
    let (prefix, type_name) = name.split_once('$').unwrap_or_default();
    Ok((pascal_case(prefix), pascal_case(type_name)))
}

/// Derive the short emitted name of an enum from its dotted FQN.
///
/// Strips characters outside `[A-Za-z0-9. -]`, re-validates, takes the
/// segment after the last `.`, and truncates at the first occurrence of the
/// literal token `Enum` when present. The truncation mirrors a
/// suffix-stripping convention of the source platform and must stay exact
/// for output stability:
/// `com.haulmont.cuba.core.global.SendingStatusEnum` → `SendingStatus`.
pub fn enum_short_name(dotted_name: &str) -> Result<String, CodegenError> {
    let cleaned: String = dotted_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | ' ' | '-'))
        .collect();
    validate_enum_name_format(&cleaned)?;

    let short = match cleaned.rfind('.') {
        Some(pos) => &cleaned[pos + 1..],
        None => cleaned.as_str(),
    };
    let short = match short.find("Enum") {
        Some(pos) => &short[..pos],
        None => short,
    };
    Ok(short.to_string())
}

/// Check that `name` matches `<prefix>$<TypeName>`: exactly one `$`,
/// non-empty segments.
pub fn validate_metaclass_format(name: &str) -> Result<(), CodegenError> {
    let mut parts = name.split('$');
    let valid = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(prefix), Some(type_name), None) if !prefix.is_empty() && !type_name.is_empty()
    );
    if valid {
        Ok(())
    } else {
        Err(CodegenError::MetaclassFormat { name: name.to_string() })
    }
}

/// Check that `name` is a dotted identifier path with non-empty segments.
pub fn validate_enum_name_format(name: &str) -> Result<(), CodegenError> {
    let err = || CodegenError::EnumNameFormat { name: name.to_string() };
    if name.is_empty() {
        return Err(err());
    }
    for segment in name.split('.') {
        if segment.is_empty() {
            return Err(err());
        }
        if !segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-'))
        {
            return Err(err());
        }
    }
    Ok(())
}

/// Check a batch prefix before any fetch: non-empty, no whitespace, and at
/// most one `$` with a non-empty module segment. Raw prefixes that reach
/// into the type name, like `sys$S`, are legitimate.
pub fn validate_prefix_format(prefix: &str) -> Result<(), CodegenError> {
    let err = || CodegenError::PrefixFormat { prefix: prefix.to_string() };
    if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
        return Err(err());
    }
    let mut parts = prefix.split('$');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), None, _) => Ok(()),
        (Some(module), Some(_), None) if !module.is_empty() => Ok(()),
        _ => Err(err()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_variants() {
        assert_eq!(pascal_case("sys"), "Sys");
        assert_eq!(pascal_case("createTs"), "CreateTs");
        assert_eq!(pascal_case("send_count"), "SendCount");
        assert_eq!(pascal_case("scheduled_task"), "ScheduledTask");
        assert_eq!(pascal_case("sys$S"), "SysS");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn split_valid_metaclass() {
        assert_eq!(
            split_metaclass_name("sys$Config").unwrap(),
            ("Sys".to_string(), "Config".to_string())
        );
        assert_eq!(
            split_metaclass_name("sec$user_role").unwrap(),
            ("Sec".to_string(), "UserRole".to_string())
        );
    }

    #[test]
    fn split_rejects_malformed() {
        for bad in ["sysConfig", "sys$a$b", "$Config", "sys$", ""] {
            assert!(matches!(
                split_metaclass_name(bad),
                Err(CodegenError::MetaclassFormat { .. })
            ));
        }
    }

    #[test]
    fn enum_short_name_strips_suffix() {
        assert_eq!(
            enum_short_name("com.example.core.global.SendingStatusEnum").unwrap(),
            "SendingStatus"
        );
        assert_eq!(
            enum_short_name("com.example.core.global.SendingStatus").unwrap(),
            "SendingStatus"
        );
    }

    #[test]
    fn enum_short_name_strips_garbage_chars() {
        assert_eq!(
            enum_short_name("com.example.Sending%Status").unwrap(),
            "SendingStatus"
        );
    }

    #[test]
    fn enum_short_name_without_dots() {
        assert_eq!(enum_short_name("Status").unwrap(), "Status");
    }

    #[test]
    fn enum_name_format() {
        assert!(validate_enum_name_format("com.haulmont.cuba.core.global.SendingStatus").is_ok());
        assert!(validate_enum_name_format("Status").is_ok());
        assert!(validate_enum_name_format("").is_err());
        assert!(validate_enum_name_format("com..Status").is_err());
        assert!(validate_enum_name_format("com.Status.").is_err());
        assert!(validate_enum_name_format("com.Sta$tus").is_err());
    }

    #[test]
    fn prefix_format() {
        assert!(validate_prefix_format("sys").is_ok());
        assert!(validate_prefix_format("sys$S").is_ok());
        assert!(validate_prefix_format("").is_err());
        assert!(validate_prefix_format("sys prefix").is_err());
        assert!(validate_prefix_format("$S").is_err());
        assert!(validate_prefix_format("a$b$c").is_err());
    }
}
