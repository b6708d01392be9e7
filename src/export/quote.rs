// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! POSIX shell quoting.
//!
//! ```text
//! ""            --> ''
//! safe chars    --> unchanged       [A-Za-z0-9_@%+=:,./-]
//! anything else --> '...'           with ' written as '"'"'
//! ```

use std::borrow::Cow;

/// Characters that never need quoting.
const fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

/// Quotes `value` so a POSIX shell reads it back as exactly one word.
///
/// Values made only of safe characters are returned borrowed.
#[must_use]
pub fn quote(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed("''");
    }
    if value.chars().all(is_safe) {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' {
            quoted.push_str(r#"'"'"'"#);
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}
