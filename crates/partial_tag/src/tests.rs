#[cfg(test)]
mod tests {
    use crate::{
        directives_for, format_directives, parse_directives, parse_metadata, Directive,
        MetadataEntry, Sign, TagError,
    };

    #[test]
    fn parse_metadata_with_backticks() {
        let raw = "`json:\"name\" partial:\"-Person,APerson,+BPerson\"`";
        let metadata = parse_metadata(raw).expect("parse metadata");
        assert_eq!(metadata.len(), 2);
        assert_eq!(
            metadata.entries[0],
            MetadataEntry::new("json", "name").with_literal("\"name\"")
        );
        assert_eq!(
            metadata.entries[1],
            MetadataEntry::new("partial", "-Person,APerson,+BPerson")
                .with_literal("\"-Person,APerson,+BPerson\"")
        );
        assert_eq!(
            metadata.to_string(),
            "json:\"name\" partial:\"-Person,APerson,+BPerson\""
        );
        assert_eq!(metadata.get("json"), Some("name"));
        assert_eq!(metadata.get("partial"), Some("-Person,APerson,+BPerson"));
        assert_eq!(metadata.get("yaml"), None);
    }

    #[test]
    fn remove_keeps_remaining_entries_in_order() {
        let mut metadata =
            parse_metadata("json:\"name\" partial:\"-Person\" db:\"person_name\"").expect("parse");
        metadata.remove("json");
        assert_eq!(
            metadata.to_string(),
            "partial:\"-Person\" db:\"person_name\""
        );
        metadata.remove("partial");
        assert_eq!(metadata.to_string(), "db:\"person_name\"");
        metadata.remove("db");
        assert!(metadata.is_empty());
        assert_eq!(metadata.to_string(), "");
    }

    #[test]
    fn get_returns_first_of_duplicate_keys() {
        let metadata = parse_metadata("a:\"1\" a:\"2\"").expect("parse");
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("a"), Some("1"));
    }

    #[test]
    fn empty_and_blank_metadata_have_no_entries() {
        assert!(parse_metadata("").expect("empty").is_empty());
        assert!(parse_metadata("   ").expect("blank").is_empty());
        assert!(parse_metadata("``").expect("backticks only").is_empty());
    }

    #[test]
    fn escaped_quotes_are_unescaped_and_reescaped() {
        let metadata = parse_metadata(r#"doc:"say \"hi\" \\ bye" json:"x""#).expect("parse");
        assert_eq!(metadata.get("doc"), Some(r#"say "hi" \ bye"#));
        assert_eq!(metadata.to_string(), r#"doc:"say \"hi\" \\ bye" json:"x""#);
    }

    #[test]
    fn numeric_and_named_escapes_decode() {
        let metadata = parse_metadata(
            r#"a:"caf\u00e9" b:"\x41\101" c:"\U0001F600" d:"\a\b\f\v" e:"\q""#,
        )
        .expect("parse");
        assert_eq!(metadata.get("a"), Some("café"));
        assert_eq!(metadata.get("b"), Some("AA"));
        assert_eq!(metadata.get("c"), Some("\u{1F600}"));
        assert_eq!(metadata.get("d"), Some("\u{07}\u{08}\u{0c}\u{0b}"));
        assert_eq!(metadata.get("e"), Some("q"));
    }

    #[test]
    fn parsed_entries_print_their_original_literal() {
        let raw = r#"json:"caf\u00e9" xml:"\x41\101\t" partial:"X""#;
        let metadata = parse_metadata(raw).expect("parse");
        assert_eq!(metadata.to_string(), raw);
        assert_eq!(
            metadata.without("partial").to_string(),
            r#"json:"caf\u00e9" xml:"\x41\101\t""#
        );
    }

    #[test]
    fn built_entries_are_escaped_on_display() {
        let entry = MetadataEntry::new("doc", "tab\there \"q\" bell\u{07}");
        assert_eq!(entry.to_string(), r#"doc:"tab\there \"q\" bell\u0007""#);
        let reparsed = parse_metadata(&entry.to_string()).expect("reparse");
        assert_eq!(reparsed.get("doc"), Some(entry.value.as_str()));
    }

    #[test]
    fn entries_without_separating_whitespace_still_parse() {
        let metadata = parse_metadata("json:\"a\"xml:\"b\"").expect("parse");
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("xml"), Some("b"));
    }

    #[test]
    fn unterminated_quote_is_metadata_error() {
        let err = parse_metadata("json:\"age").expect_err("unterminated");
        assert!(matches!(err, TagError::MetadataSyntax { .. }));
        assert_eq!(err.raw(), "json:\"age");
        assert!(!err.errors().is_empty());
    }

    #[test]
    fn missing_colon_is_metadata_error() {
        let err = parse_metadata("json \"age\"").expect_err("missing colon");
        assert!(matches!(err, TagError::MetadataSyntax { .. }));
    }

    #[test]
    fn invalid_identifier_start_is_metadata_error() {
        let err = parse_metadata("1json:\"age\"").expect_err("digit start");
        assert!(matches!(err, TagError::MetadataSyntax { .. }));
        assert_eq!(err.errors()[0].span.start, 0);

        let err = parse_metadata("_json:\"age\"").expect_err("underscore start");
        assert!(matches!(err, TagError::MetadataSyntax { .. }));
    }

    #[test]
    fn metadata_error_message_names_raw_input() {
        let err = parse_metadata("json:").expect_err("missing value");
        let message = err.to_string();
        assert!(message.starts_with("malformed metadata `json:`"), "{}", message);
    }

    #[test]
    fn parse_directive_list() {
        let directives = parse_directives("-Person,APerson,+BPerson:CPerson").expect("parse");
        assert_eq!(
            directives,
            vec![
                Directive::new(Sign::Negative, "Person"),
                Directive::new(Sign::Unsigned, "APerson"),
                Directive::new(Sign::Positive, "BPerson").renamed("CPerson"),
            ]
        );
        assert!(directives[0].is_negative());
        assert!(!directives[1].is_negative());
        assert!(!directives[2].is_negative());
        assert_eq!(directives[1].rename_as, None);
    }

    #[test]
    fn directive_whitespace_is_insignificant() {
        let spaced = parse_directives("  - Person ,\tAPerson , + BPerson : CPerson ").expect("parse");
        let tight = parse_directives("-Person,APerson,+BPerson:CPerson").expect("parse");
        assert_eq!(spaced, tight);
    }

    #[test]
    fn empty_directive_value_is_empty_list() {
        assert!(parse_directives("").expect("empty").is_empty());
        assert!(parse_directives("   ").expect("blank").is_empty());
    }

    #[test]
    fn stray_commas_are_directive_errors() {
        for raw in ["A,", ",A", "A,,B", ","] {
            let err = parse_directives(raw).expect_err(raw);
            assert!(
                matches!(err, TagError::DirectiveSyntax { .. }),
                "{} gave {:?}",
                raw,
                err
            );
            assert_eq!(err.raw(), raw);
        }
    }

    #[test]
    fn missing_identifiers_are_directive_errors() {
        for raw in ["-", "+", "A:", ":B", "A:+B", "--A", "A B"] {
            let err = parse_directives(raw).expect_err(raw);
            assert!(matches!(err, TagError::DirectiveSyntax { .. }), "{}", raw);
        }
    }

    #[test]
    fn invalid_directive_character_is_error() {
        let err = parse_directives("A;B").expect_err("semicolon");
        assert!(matches!(err, TagError::DirectiveSyntax { .. }));
        assert_eq!(err.errors()[0].span.start, 1);
    }

    #[test]
    fn format_directives_uses_canonical_form() {
        let directives = parse_directives(" -A , B:C,+D ").expect("parse");
        assert_eq!(format_directives(&directives), "-A,B:C,+D");
        assert_eq!(format_directives(&[]), "");
    }

    #[test]
    fn directives_for_reads_configured_key() {
        let metadata =
            parse_metadata("json:\"age\" view:\"Summary\" partial:\"Other\"").expect("parse");
        let directives = directives_for(&metadata, "view").expect("directives");
        assert_eq!(directives, vec![Directive::new(Sign::Unsigned, "Summary")]);
        assert!(directives_for(&metadata, "missing")
            .expect("no key")
            .is_empty());
    }

    #[test]
    fn directives_for_surfaces_directive_error() {
        let metadata = parse_metadata("partial:\"A,\"").expect("parse");
        let err = directives_for(&metadata, "partial").expect_err("trailing comma");
        assert!(matches!(err, TagError::DirectiveSyntax { .. }));
        assert_eq!(err.raw(), "A,");
    }

    #[test]
    fn metadata_serde_round_trip() {
        let metadata = parse_metadata("json:\"age\" partial:\"-A\"").expect("parse");
        let json = serde_json::to_string(&metadata).expect("serialize");
        let decoded: crate::Metadata = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(metadata, decoded);
    }
}
