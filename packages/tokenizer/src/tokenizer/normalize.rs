//! Fragment normalization
//!
//! Strips syntactic sugar from one raw extracted fragment: bracket
//! delimiters, the `?` filter sigil, redundant surrounding parens and
//! quotes, padding whitespace. `clean` is a projection: running it on an
//! already-cleaned fragment returns the fragment unchanged.

/// Normalizes one raw fragment.
///
/// Bracket-origin fragments arrive with both delimiters still attached
/// (`[0]`, `['name']`, `[?(@.price<10)]`), which is how bracket content is
/// told apart from dot content here.
pub(crate) fn clean(raw: &str) -> String {
    let mut src = unwrap_brackets(raw).trim();
    src = src.strip_prefix('?').unwrap_or(src).trim_start();
    src = unwrap_pair(src, '(', ')').trim();
    src = unwrap_pair(src, '\'', '\'').trim();
    src = strip_padded_current_node_sigil(src);
    src.trim().to_string()
}

/// Drops the bracket delimiters, handling the `['…']` quoted-key sugar in
/// one step.
fn unwrap_brackets(src: &str) -> &str {
    if src.len() >= 5 && src.starts_with("['") && src.ends_with("']") {
        &src[2..src.len() - 2]
    } else if src.len() >= 2 && src.starts_with('[') && src.ends_with(']') {
        &src[1..src.len() - 1]
    } else {
        src
    }
}

/// Unwraps one matched surrounding pair.
///
/// Only a *matched* pair is removed, so a fragment like `@.a==(1+2)` keeps
/// its inner group and cleaning stays idempotent.
fn unwrap_pair(src: &str, open: char, close: char) -> &str {
    if src.len() >= 2 && src.starts_with(open) && src.ends_with(close) {
        &src[open.len_utf8()..src.len() - close.len_utf8()]
    } else {
        src
    }
}

/// Strips a leading `@` only when it is space-padded; an `@` glued to a
/// path, e.g. `@.price`, is kept.
fn strip_padded_current_node_sigil(src: &str) -> &str {
    match src.strip_prefix("@ ") {
        Some(rest) => rest.trim_start(),
        None => src,
    }
}

#[cfg(test)]
mod tests {
    use super::clean;

    #[test]
    fn bracket_index_is_unwrapped() {
        assert_eq!(clean("[0]"), "0");
        assert_eq!(clean("[0,1,2]"), "0,1,2");
        assert_eq!(clean("[*]"), "*");
        assert_eq!(clean("[1:3]"), "1:3");
    }

    #[test]
    fn bracket_quoted_key_sugar_is_unwrapped() {
        assert_eq!(clean("['store']"), "store");
        assert_eq!(clean("[' store ']"), "store");
        assert_eq!(clean("['a.b']"), "a.b");
    }

    #[test]
    fn filter_sigil_and_parens_are_stripped() {
        assert_eq!(clean("[?(@.price<10)]"), "@.price<10");
        assert_eq!(clean("?(@.isbn)"), "@.isbn");
    }

    #[test]
    fn glued_current_node_sigil_is_kept() {
        assert_eq!(clean("@.price<10"), "@.price<10");
        assert_eq!(clean("@ price"), "price");
    }

    #[test]
    fn dot_fragments_pass_through() {
        assert_eq!(clean("store"), "store");
        assert_eq!(clean("$"), "$");
        assert_eq!(clean(".."), "..");
    }

    #[test]
    fn quote_padding_is_tightened() {
        assert_eq!(clean("' text'"), "text");
        assert_eq!(clean("'text '"), "text");
    }

    #[test]
    fn clean_is_idempotent() {
        let samples = [
            "[0]",
            "['store']",
            "[?(@.price<10)]",
            "[?(@.a==(1+2))]",
            "store",
            "' padded '",
            "[*]",
        ];
        for raw in samples {
            let once = clean(raw);
            assert_eq!(clean(&once), once, "clean not idempotent for {raw:?}");
        }
    }

    #[test]
    fn inner_paren_group_survives_recleaning() {
        // The matched-pair rule must not eat the trailing ')' of an inner
        // group once the outer pair is gone.
        assert_eq!(clean("[?(@.a==(1+2))]"), "@.a==(1+2)");
        assert_eq!(clean("@.a==(1+2)"), "@.a==(1+2)");
    }
}
