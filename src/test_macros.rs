//! Table-style macros for `magnetdb` command-line parsing tests.
//!
//! Each case names a test, the `Command` variant it should parse to, and the
//! full argument list after the binary name. The macros resolve `Args` and
//! `clap::Parser` themselves, so a `cli_tests.rs` module only imports the
//! value types it compares against.

/// Parse `magnetdb <words>` and return the inner command of `$variant`.
#[macro_export]
macro_rules! parse_command {
    ($variant:ident, [$($word:expr),* $(,)?]) => {{
        let parsed = <$crate::cli::Args as ::clap::Parser>::try_parse_from(["magnetdb", $($word),*])
            .unwrap_or_else(|e| panic!("failed to parse: {}", e));
        match parsed.command {
            $crate::commands::Command::$variant(cmd) => cmd,
            other => panic!("expected {}, parsed {:?}", stringify!($variant), other),
        }
    }};
}

/// Successful parses and the field values they must produce.
///
/// ```ignore
/// cli_parse_tests! {
///     test_get_with_relationship: Get ["get", "magnet", "12", "--with", "mparts"] => {
///         id: 12,
///         with: Some("mparts".to_string()),
///     },
/// }
/// ```
///
/// Leaving optional flags out of the argument list makes a case a defaults
/// check.
#[macro_export]
macro_rules! cli_parse_tests {
    ($(
        $name:ident : $variant:ident [$($word:expr),* $(,)?] => {
            $($field:ident : $expected:expr),* $(,)?
        }
    ),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let cmd = $crate::parse_command!($variant, [$($word),*]);
                $(
                    assert_eq!(cmd.$field, $expected, concat!("unexpected ", stringify!($field)));
                )*
            }
        )*
    };
}

/// Argument lists that clap must reject, optionally with a fragment the
/// error message has to contain (usually the missing `<ARG>`).
///
/// ```ignore
/// cli_rejects! {
///     test_get_requires_entity: ["get"] mentioning "<ENTITY>",
///     test_get_non_numeric_id_rejected: ["get", "magnet", "M9"],
/// }
/// ```
#[macro_export]
macro_rules! cli_rejects {
    ($(
        $name:ident : [$($word:expr),* $(,)?] $(mentioning $needle:literal)?
    ),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result =
                    <$crate::cli::Args as ::clap::Parser>::try_parse_from(["magnetdb", $($word),*]);
                let Err(err) = result else {
                    panic!("expected a parse error");
                };
                $(
                    assert!(
                        err.to_string().contains($needle),
                        concat!("error should mention ", $needle)
                    );
                )?
                let _ = err;
            }
        )*
    };
}

/// Bounds of a `--limit` option: its default, and rejection of 0 and of
/// anything above `queries::MAX_LIST_LIMIT`.
#[macro_export]
macro_rules! cli_limit_tests {
    ($variant:ident [$($word:expr),* $(,)?], default: $default:expr $(,)?) => {
        #[test]
        fn test_limit_default() {
            let cmd = $crate::parse_command!($variant, [$($word),*]);
            assert_eq!(cmd.limit, $default);
        }

        #[test]
        fn test_limit_zero_rejected() {
            let result = <$crate::cli::Args as ::clap::Parser>::try_parse_from([
                "magnetdb", $($word,)* "--limit", "0",
            ]);
            assert!(result.is_err());
        }

        #[test]
        fn test_limit_above_max_rejected() {
            let too_many = ($crate::queries::MAX_LIST_LIMIT + 1).to_string();
            let result = <$crate::cli::Args as ::clap::Parser>::try_parse_from([
                "magnetdb", $($word,)* "--limit", too_many.as_str(),
            ]);
            assert!(result.is_err());
        }
    };
}
