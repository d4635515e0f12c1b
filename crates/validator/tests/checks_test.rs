//! Default messages and pass/fail behaviour of every check family.

mod common;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use common::Role;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rulekit_validator::prelude::*;

/// A model with one property of each interesting kind.
#[derive(Debug, Clone, Default)]
struct Sample {
    text: String,
    maybe: Option<String>,
    count: i32,
    ratio: f64,
    big: u64,
    flag: bool,
    tags: Vec<String>,
    when: Option<NaiveDateTime>,
    role_code: i64,
    role: Option<Role>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn messages(rules: &ValidatorBuilder<Sample>, sample: &Sample) -> Vec<String> {
    rules.validate(sample).into_messages()
}

fn text_rule(configure: impl FnOnce(&mut Rule<Sample, String>)) -> ValidatorBuilder<Sample> {
    let mut rules = ValidatorBuilder::new();
    configure(rules.rule_for(property!(Sample => text)));
    rules
}

fn with_text(text: &str) -> Sample {
    Sample {
        text: text.into(),
        ..Sample::default()
    }
}

// ============================================================================
// PRESENCE
// ============================================================================

#[test]
fn test_not_null_and_is_null() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => maybe)).not_null();
    rules.rule_for(property!(Sample => when)).is_null();

    let sample = Sample {
        when: Some(date(2024, 1, 1)),
        ..Sample::default()
    };
    assert_eq!(
        messages(&rules, &sample),
        ["Maybe cannot be null", "When must be null"]
    );

    let fine = Sample {
        maybe: Some(String::new()),
        ..Sample::default()
    };
    assert!(rules.validate(&fine).is_valid());
}

#[rstest]
#[case("", false)]
#[case("   ", false)]
#[case("\t\n", false)]
#[case(" a ", true)]
fn test_not_empty_on_strings(#[case] text: &str, #[case] valid: bool) {
    let rules = text_rule(|rule| {
        rule.not_empty();
    });
    assert_eq!(rules.validate(&with_text(text)).is_valid(), valid);
}

#[test]
fn test_not_empty_on_none_and_collections() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => maybe)).not_empty();
    rules.rule_for(property!(Sample => tags)).not_empty();

    assert_eq!(
        messages(&rules, &Sample::default()),
        ["Maybe cannot be empty", "Tags cannot be empty"]
    );

    let filled = Sample {
        maybe: Some("x".into()),
        tags: vec!["t".into()],
        ..Sample::default()
    };
    assert!(rules.validate(&filled).is_valid());
}

#[test]
fn test_not_empty_ignores_numbers() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => count)).not_empty();
    assert!(rules.validate(&Sample::default()).is_valid());
}

#[test]
fn test_is_empty() {
    let rules = text_rule(|rule| {
        rule.is_empty();
    });
    assert!(rules.validate(&with_text(" ")).is_valid());
    assert_eq!(
        messages(&rules, &with_text("x")),
        ["Text must be empty"]
    );
}

// ============================================================================
// EQUALITY AND MEMBERSHIP
// ============================================================================

#[test]
fn test_equal_and_not_equal() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => count)).equal(3);
    rules.rule_for(property!(Sample => text)).not_equal("admin".to_owned());

    assert_eq!(
        messages(&rules, &Sample {
            count: 4,
            text: "admin".into(),
            ..Sample::default()
        }),
        ["Count must be equal to 3.", "Text must not be equal to admin."]
    );
    assert!(
        rules
            .validate(&Sample {
                count: 3,
                ..Sample::default()
            })
            .is_valid()
    );
}

#[test]
fn test_is_in_and_not_in() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => count)).is_in([1, 2, 3]);
    rules.rule_for(property!(Sample => count)).not_in([7, 8]);

    assert_eq!(
        messages(&rules, &Sample {
            count: 7,
            ..Sample::default()
        }),
        ["Count must be one of: 1, 2, 3.", "Count must not be one of: 7, 8."]
    );
}

#[test]
fn test_none_of_lists_options() {
    let rules = text_rule(|rule| {
        rule.none_of(["root".to_owned(), "admin".to_owned()])
            .with_message("ignored");
    });
    assert_eq!(
        messages(&rules, &with_text("root")),
        ["Text must not be one of the following values: root, admin"]
    );
    assert!(rules.validate(&with_text("jan")).is_valid());
}

#[test]
fn test_equality_on_optional_property() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => maybe))
        .equal(Some("jan".to_owned()));
    rules.rule_for(property!(Sample => maybe)).not_equal(None);

    assert_eq!(
        messages(&rules, &Sample::default()),
        ["Maybe must be equal to jan.", "Maybe must not be equal to null."]
    );
    let sample = Sample {
        maybe: Some("jan".into()),
        ..Sample::default()
    };
    assert!(rules.validate(&sample).is_valid());
}

#[test]
fn test_is_in_on_optional_property() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => maybe))
        .is_in([Some("a".to_owned()), Some("b".to_owned())]);

    let sample = Sample {
        maybe: Some("c".into()),
        ..Sample::default()
    };
    assert_eq!(messages(&rules, &sample), ["Maybe must be one of: a, b."]);
    assert_eq!(messages(&rules, &Sample::default()), ["Maybe must be one of: a, b."]);
    let sample = Sample {
        maybe: Some("b".into()),
        ..Sample::default()
    };
    assert!(rules.validate(&sample).is_valid());
}

#[test]
fn test_membership_on_enum_properties() {
    struct Account {
        role: Role,
    }

    let mut rules = ValidatorBuilder::<Account>::new();
    rules
        .rule_for(property!(Account => role))
        .is_in([Role::Editor, Role::Admin]);
    rules.rule_for(property!(Account => role)).not_equal(Role::Reader);

    assert_eq!(
        rules
            .validate(&Account { role: Role::Reader })
            .error_messages(),
        [
            "Role must be one of: Editor, Admin.",
            "Role must not be equal to Reader."
        ]
    );
    assert!(rules.validate(&Account { role: Role::Admin }).is_valid());
}

#[test]
fn test_one_of_on_optional_enum() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => role))
        .one_of([Some(Role::Admin), None]);

    let sample = Sample {
        role: Some(Role::Editor),
        ..Sample::default()
    };
    assert_eq!(
        messages(&rules, &sample),
        ["Role must be one of the following values: Admin, null"]
    );
    assert!(rules.validate(&Sample::default()).is_valid());
}

#[rstest]
#[case(0, true)]
#[case(2, true)]
#[case(3, false)]
#[case(6, false)]
#[case(-1, false)]
fn test_is_in_enum_on_raw_codes(#[case] code: i64, #[case] valid: bool) {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => role_code))
        .is_in_enum::<Role>();

    let sample = Sample {
        role_code: code,
        ..Sample::default()
    };
    assert_eq!(rules.validate(&sample).is_valid(), valid);
}

#[test]
fn test_is_in_enum_default_message() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => role_code))
        .is_in_enum::<Role>();

    let sample = Sample {
        role_code: 6,
        ..Sample::default()
    };
    assert_eq!(
        messages(&rules, &sample),
        ["RoleCode must be a valid enum value."]
    );
}

#[test]
fn test_is_in_enum_on_enum_property() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => role)).is_in_enum::<Role>();

    assert_eq!(
        messages(&rules, &Sample::default()),
        ["Role must be a valid enum value."]
    );
    let sample = Sample {
        role: Some(Role::Admin),
        ..Sample::default()
    };
    assert!(rules.validate(&sample).is_valid());
}

#[test]
fn test_is_in_enum_passes_non_integers() {
    let rules = text_rule(|rule| {
        rule.is_in_enum::<Role>();
    });
    assert!(rules.validate(&with_text("Admin")).is_valid());
}

// ============================================================================
// ORDERING
// ============================================================================

#[rstest]
#[case(5, vec![])]
#[case(0, vec!["Count must be greater than 0.", "Count must be greater than or equal to 1."])]
#[case(10, vec!["Count must be less than 10.", "Count must be less than or equal to 9."])]
fn test_ordering_checks(#[case] count: i32, #[case] expected: Vec<&str>) {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => count))
        .greater_than(0)
        .greater_than_or_equal(1)
        .less_than(10)
        .less_than_or_equal(9);

    let sample = Sample {
        count,
        ..Sample::default()
    };
    assert_eq!(messages(&rules, &sample), expected);
}

#[test]
fn test_ordering_on_optional_passes_when_absent() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => when))
        .greater_than(date(2020, 1, 1));

    assert!(rules.validate(&Sample::default()).is_valid());
    let early = Sample {
        when: Some(date(2019, 6, 1)),
        ..Sample::default()
    };
    assert_eq!(
        messages(&rules, &early),
        ["When must be greater than 2020-01-01 12:00:00."]
    );
}

#[test]
fn test_ordering_on_strings_and_floats() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => text))
        .greater_than_or_equal("m".to_owned());
    rules.rule_for(property!(Sample => ratio)).less_than(1.0);

    let sample = Sample {
        text: "a".into(),
        ratio: 1.5,
        ..Sample::default()
    };
    assert_eq!(
        messages(&rules, &sample),
        [
            "Text must be greater than or equal to m.",
            "Ratio must be less than 1."
        ]
    );
}

// ============================================================================
// NUMERIC
// ============================================================================

#[rstest]
#[case(1, true)]
#[case(120, true)]
#[case(0, false)]
#[case(121, false)]
fn test_range_is_inclusive(#[case] count: i32, #[case] valid: bool) {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => count)).range(1, 120);
    let sample = Sample {
        count,
        ..Sample::default()
    };
    assert_eq!(rules.validate(&sample).is_valid(), valid);
}

#[test]
fn test_min_and_max_messages() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => count)).min(5).max(1);

    let sample = Sample {
        count: 3,
        ..Sample::default()
    };
    assert_eq!(
        messages(&rules, &sample),
        ["Count must be at least 5.", "Count must be at most 1."]
    );
}

#[test]
fn test_numeric_checks_cover_floats_and_unsigned() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => ratio)).range(0, 1);
    rules.rule_for(property!(Sample => big)).max(100);

    let sample = Sample {
        ratio: 1.01,
        big: u64::MAX,
        ..Sample::default()
    };
    assert_eq!(
        messages(&rules, &sample),
        ["Ratio must be between 0 and 1.", "Big must be at most 100."]
    );
}

#[rstest]
#[case("")]
#[case("500")]
#[case("not a number")]
fn test_range_on_strings_never_fails(#[case] text: &str) {
    let rules = text_rule(|rule| {
        rule.range(1, 120).min(10).max(20);
    });
    assert!(rules.validate(&with_text(text)).is_valid());
}

// ============================================================================
// STRINGS
// ============================================================================

#[test]
fn test_length_messages() {
    let rules = text_rule(|rule| {
        rule.length(2, 4).min_length(3).max_length(1);
    });
    assert_eq!(
        messages(&rules, &with_text("abcde")),
        [
            "Text length must be between 2 and 4 characters.",
            "Text length must be at most 1 characters."
        ]
    );
    assert_eq!(
        messages(&rules, &with_text("a")),
        [
            "Text length must be between 2 and 4 characters.",
            "Text length must be at least 3 characters."
        ]
    );
}

#[test]
fn test_length_mode_bytes() {
    let config = ValidatorConfig::new().with_length_mode(LengthMode::Bytes);
    let mut rules = ValidatorBuilder::<Sample>::with_config(config);
    rules.rule_for(property!(Sample => text)).max_length(3);

    assert!(!rules.validate(&with_text("żół")).is_valid());

    let chars = text_rule(|rule| {
        rule.max_length(3);
    });
    assert!(chars.validate(&with_text("żół")).is_valid());
}

#[test]
fn test_length_ignores_missing_string() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => maybe)).min_length(3);
    assert!(rules.validate(&Sample::default()).is_valid());
}

#[rstest]
#[case("jan@gmail.com", true)]
#[case("a@b", true)]
#[case("janXd", false)]
#[case("", false)]
fn test_is_email(#[case] text: &str, #[case] valid: bool) {
    let rules = text_rule(|rule| {
        rule.is_email();
    });
    let result = rules.validate(&with_text(text));
    assert_eq!(result.is_valid(), valid);
    if !valid {
        assert!(result.error_messages()[0].contains("is not a valid email"));
    }
}

#[test]
fn test_is_url() {
    let rules = text_rule(|rule| {
        rule.is_url();
    });
    assert!(rules.validate(&with_text("https://example.com/a")).is_valid());
    assert_eq!(
        messages(&rules, &with_text("example.com")),
        ["Text is not a valid URL."]
    );
}

#[rstest]
#[case("Łukasz", true, true)]
#[case("abc123", false, true)]
#[case("ab c", false, false)]
#[case("", true, true)]
fn test_alpha_and_alphanumeric(#[case] text: &str, #[case] alpha: bool, #[case] alnum: bool) {
    let alpha_rules = text_rule(|rule| {
        rule.is_alpha();
    });
    let alnum_rules = text_rule(|rule| {
        rule.is_alphanumeric();
    });
    assert_eq!(alpha_rules.validate(&with_text(text)).is_valid(), alpha);
    assert_eq!(alnum_rules.validate(&with_text(text)).is_valid(), alnum);
}

#[test]
fn test_alpha_messages() {
    let rules = text_rule(|rule| {
        rule.is_alpha().is_alphanumeric();
    });
    assert_eq!(
        messages(&rules, &with_text("a-b")),
        [
            "Text must contain only letters.",
            "Text must be alphanumeric."
        ]
    );
}

#[test]
fn test_starts_and_ends_with() {
    let rules = text_rule(|rule| {
        rule.starts_with("INV-").ends_with(".pdf");
    });
    assert!(rules.validate(&with_text("INV-001.pdf")).is_valid());
    assert_eq!(
        messages(&rules, &with_text("001.doc")),
        [
            "Text must start with 'INV-'.",
            "Text must end with '.pdf'."
        ]
    );
}

#[test]
fn test_matches_searches_unless_anchored() {
    let rules = text_rule(|rule| {
        rule.matches(r"\d{3}").unwrap();
    });
    assert!(rules.validate(&with_text("abc123def")).is_valid());
    assert_eq!(
        messages(&rules, &with_text("abc")),
        ["Text is not in the correct format."]
    );

    let anchored = text_rule(|rule| {
        rule.matches(r"^\d{3}$").unwrap();
    });
    assert!(!anchored.validate(&with_text("abc123def")).is_valid());
}

#[test]
fn test_string_checks_ignore_numbers() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => count))
        .min_length(5)
        .is_email()
        .is_url()
        .is_alpha()
        .starts_with("x");
    assert!(rules.validate(&Sample::default()).is_valid());
}

// ============================================================================
// BOOLEANS
// ============================================================================

#[test]
fn test_is_true_and_is_false() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => flag)).is_true();
    assert_eq!(
        messages(&rules, &Sample::default()),
        ["Flag must be true."]
    );

    let mut rules = ValidatorBuilder::<Sample>::new();
    rules.rule_for(property!(Sample => flag)).is_false();
    let flagged = Sample {
        flag: true,
        ..Sample::default()
    };
    assert_eq!(messages(&rules, &flagged), ["Flag must be false."]);
}

// ============================================================================
// DATES
// ============================================================================

fn date_rules(configure: impl FnOnce(&mut Rule<Sample, Option<NaiveDateTime>>)) -> ValidatorBuilder<Sample> {
    let mut rules = ValidatorBuilder::new();
    configure(rules.rule_for(property!(Sample => when)));
    rules
}

fn at(when: NaiveDateTime) -> Sample {
    Sample {
        when: Some(when),
        ..Sample::default()
    }
}

#[test]
fn test_past_and_future() {
    let rules = date_rules(|rule| {
        rule.is_in_the_past();
    });
    assert!(rules.validate(&at(date(2000, 1, 1))).is_valid());
    assert_eq!(
        messages(&rules, &at(date(3000, 1, 1))),
        ["When must be in the past."]
    );

    let rules = date_rules(|rule| {
        rule.is_in_the_future();
    });
    assert!(rules.validate(&at(date(3000, 1, 1))).is_valid());
    assert_eq!(
        messages(&rules, &at(date(2000, 1, 1))),
        ["When must be in the future."]
    );
}

#[test]
fn test_before_after_between() {
    let rules = date_rules(|rule| {
        rule.is_before(date(2024, 1, 1))
            .is_after(date(2023, 1, 1))
            .is_between(date(2023, 6, 1), date(2023, 6, 30));
    });

    assert!(rules.validate(&at(date(2023, 6, 1))).is_valid());
    assert!(rules.validate(&at(date(2023, 6, 30))).is_valid());
    assert_eq!(
        messages(&rules, &at(date(2024, 2, 1))),
        [
            "When must be before 2024-01-01 12:00:00.",
            "When must be between 2023-06-01 12:00:00 and 2023-06-30 12:00:00."
        ]
    );
    assert_eq!(
        messages(&rules, &at(date(2022, 2, 1))),
        [
            "When must be after 2023-01-01 12:00:00.",
            "When must be between 2023-06-01 12:00:00 and 2023-06-30 12:00:00."
        ]
    );
}

#[test]
fn test_weekend_and_weekdays() {
    // 2024-01-06 is a Saturday.
    let saturday = at(date(2024, 1, 6));
    let wednesday = at(date(2024, 1, 3));

    let weekend = date_rules(|rule| {
        rule.is_on_weekend();
    });
    assert!(weekend.validate(&saturday).is_valid());
    assert_eq!(
        messages(&weekend, &wednesday),
        ["When must be on a weekend."]
    );

    let days = date_rules(|rule| {
        rule.is_monday().is_wednesday().is_saturday().is_on(Weekday::Sun);
    });
    assert_eq!(
        messages(&days, &wednesday),
        [
            "When must be on a Monday.",
            "When must be on a Saturday.",
            "When must be on a Sunday."
        ]
    );
    assert_eq!(
        messages(&days, &saturday),
        [
            "When must be on a Monday.",
            "When must be on a Wednesday.",
            "When must be on a Sunday."
        ]
    );
}

#[test]
fn test_remaining_weekdays() {
    // 2024-01-02 is a Tuesday.
    let rules = date_rules(|rule| {
        rule.is_tuesday().is_thursday().is_friday();
    });
    assert_eq!(
        messages(&rules, &at(date(2024, 1, 2))),
        ["When must be on a Thursday.", "When must be on a Friday."]
    );
}

#[test]
fn test_is_today() {
    let rules = date_rules(|rule| {
        rule.is_today();
    });
    assert!(rules.validate(&at(Local::now().naive_local())).is_valid());
    assert_eq!(
        messages(&rules, &at(Local::now().naive_local() - Duration::days(3))),
        ["When must be today's date."]
    );
}

#[test]
fn test_date_checks_ignore_absent_and_other_kinds() {
    let rules = date_rules(|rule| {
        rule.is_in_the_future().is_on_weekend().is_today();
    });
    assert!(rules.validate(&Sample::default()).is_valid());

    let text = text_rule(|rule| {
        rule.is_in_the_past().is_monday();
    });
    assert!(text.validate(&with_text("2024-01-01")).is_valid());
}

// ============================================================================
// CUSTOM
// ============================================================================

#[test]
fn test_must_and_custom() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => count))
        .must(|count| count % 2 == 0)
        .custom(|| false)
        .with_message("External check failed");

    let sample = Sample {
        count: 3,
        ..Sample::default()
    };
    assert_eq!(
        messages(&rules, &sample),
        ["Count is not valid.", "External check failed"]
    );
}

#[test]
fn test_must_with_sees_the_model() {
    let mut rules = ValidatorBuilder::<Sample>::new();
    rules
        .rule_for(property!(Sample => tags))
        .must_with(|sample, tags| tags.len() <= sample.count as usize)
        .with_message("Too many tags for {PropertyName}");

    let sample = Sample {
        count: 1,
        tags: vec!["a".into(), "b".into()],
        ..Sample::default()
    };
    assert_eq!(messages(&rules, &sample), ["Too many tags for Tags"]);
}
