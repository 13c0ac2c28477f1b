//! Tokenizer integration tests
//!
//! End-to-end splitting and normalization scenarios over the public
//! `PathTokenizer` surface.

use pathlex::{ErrorKind, PathTokenizer};

#[test]
fn dot_and_bracket_path() {
    let tokenizer = PathTokenizer::new("$.store.book[0].title").expect("valid path");
    assert_eq!(
        tokenizer.fragments(),
        ["$", "store", "book", "0", "title"]
    );

    let tokens = tokenizer.tokens();
    assert!(!tokens[2].is_array_index_token(), "'book' is dot notation");
    assert!(tokens[3].is_array_index_token(), "'0' came from brackets");
}

#[test]
fn relative_path_is_root_normalized() {
    let tokenizer = PathTokenizer::new("store.book").expect("valid path");
    assert_eq!(tokenizer.path(), "$.store.book");
    assert_eq!(tokenizer.fragments(), ["$", "store", "book"]);
}

#[test]
fn recursive_descent() {
    let tokenizer = PathTokenizer::new("$..author").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "..", "author"]);
}

#[test]
fn filter_segment_is_one_fragment() {
    let tokenizer = PathTokenizer::new("$.store.book[?(@.price<10)]").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "store", "book", "@.price<10"]);

    let last = tokenizer.tokens().pop().expect("non-empty");
    assert!(last.is_array_index_token());
    assert!(last.is_end());
}

#[test]
fn truncated_bracket_is_incomplete() {
    let err = PathTokenizer::new("$[").expect_err("truncated path");
    assert_eq!(err.kind, ErrorKind::IncompletePath);
}

#[test]
fn bare_function_call_is_malformed() {
    let err = PathTokenizer::new("foo(").expect_err("unsupported call syntax");
    assert_eq!(err.kind, ErrorKind::MalformedPathSyntax);
}

#[test]
fn triple_dot_is_rejected() {
    let err = PathTokenizer::new("$...author").expect_err("'...' is not valid");
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
}

#[test]
fn every_valid_path_has_matching_size_and_fragments() {
    let paths = [
        "$",
        "$.store",
        "$.store.book[0].title",
        "$..author",
        "$['store']['book']",
        "$.store.book[?(@.price<10)]",
        "$.store.book[0,1,2]",
        "$.store.book[*]",
    ];
    for path in paths {
        let tokenizer = PathTokenizer::new(path).expect("valid path");
        assert_eq!(tokenizer.len(), tokenizer.fragments().len(), "path {path:?}");

        let tokens = tokenizer.tokens();
        assert!(tokens[0].is_root(), "path {path:?}");
        assert_eq!(tokens[0].fragment(), "$", "path {path:?}");

        let end_positions: Vec<usize> = tokens
            .iter()
            .filter(|t| t.is_end())
            .map(|t| t.position())
            .collect();
        assert_eq!(end_positions, [tokenizer.len() - 1], "path {path:?}");
    }
}

#[test]
fn bracket_quoted_keys() {
    let tokenizer = PathTokenizer::new("$['store']['book']").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "store", "book"]);
    assert!(tokenizer.tokens()[1].is_array_index_token());
}

#[test]
fn escaped_dot_does_not_split_the_segment() {
    let tokenizer = PathTokenizer::new(r"$.foo\.bar").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "foo.bar"]);
}

#[test]
fn escaped_bracket_inside_quoted_key() {
    let tokenizer = PathTokenizer::new(r"$['a\]b']").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "a]b"]);
}

#[test]
fn paren_group_keeps_embedded_stop_characters() {
    // '.' and ',' inside the parens would otherwise terminate extraction.
    let tokenizer = PathTokenizer::new("$.book[?(@.a,@.b)]").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "book", "@.a,@.b"]);
}

#[test]
fn nested_parens_survive_first_close_scan() {
    // The opaque group closes at the first ')', with no nesting counter;
    // the remainder is still collected into the same fragment because ')'
    // is not a stop character for bracket extraction.
    let tokenizer = PathTokenizer::new("$.book[?(@.a==(1+2))]").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "book", "@.a==(1+2)"]);
}

#[test]
fn wildcard_slice_and_union_brackets() {
    let tokenizer = PathTokenizer::new("$.book[*]").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "book", "*"]);

    let tokenizer = PathTokenizer::new("$.book[1:3]").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "book", "1:3"]);

    let tokenizer = PathTokenizer::new("$.book[0,1,2]").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "book", "0,1,2"]);
}

#[test]
fn root_bracket_form() {
    let tokenizer = PathTokenizer::new("$[0]").expect("valid path");
    assert_eq!(tokenizer.path(), "$[0]");
    assert_eq!(tokenizer.fragments(), ["$", "0"]);
}

#[test]
fn empty_input_yields_the_root_token_only() {
    let tokenizer = PathTokenizer::new("").expect("valid path");
    assert_eq!(tokenizer.path(), "$.");
    assert_eq!(tokenizer.fragments(), ["$"]);
    assert!(tokenizer.tokens()[0].is_end());
}

#[test]
fn spaces_between_segments_are_ignored() {
    let tokenizer = PathTokenizer::new("$. store . book").expect("valid path");
    assert_eq!(tokenizer.fragments(), ["$", "store", "book"]);
}
