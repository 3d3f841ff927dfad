use crate::domain::normalize::*;
use crate::tests::utils::day;

#[test]
fn sentinels_and_blanks_are_absent() {
    for raw in ["", "   ", "NA", "n/a", "None", "NULL", "nan", "N/A "] {
        assert!(is_absent(Some(raw)), "{raw:?} should be absent");
        assert_eq!(parse_amount(Some(raw)), None, "{raw:?}");
    }
    assert!(is_absent(None));
    assert!(!is_absent(Some("0")));
    assert!(!is_absent(Some("Nadia")));
}

#[test]
fn parses_currency_text() {
    assert_eq!(parse_amount(Some("S/ 1,234")), Some(1234.0));
    assert_eq!(parse_amount(Some("s/1,234,567.25")), Some(1_234_567.25));
    assert_eq!(parse_amount(Some("1234.5")), Some(1234.5));
    assert_eq!(parse_amount(Some(" 1 000 ")), Some(1000.0));
    assert_eq!(parse_amount(Some("0")), Some(0.0));
}

#[test]
fn negative_amounts_pass_through() {
    assert_eq!(parse_amount(Some("-500")), Some(-500.0));
    assert_eq!(parse_amount(Some("S/ -1,250")), Some(-1250.0));
    assert_eq!(format_amount(Some(-1250.0)), "S/ -1,250");
}

#[test]
fn unparseable_amounts_are_not_applicable() {
    assert_eq!(parse_amount(Some("abc")), None);
    assert_eq!(parse_amount(Some("S/")), None);
    assert_eq!(parse_amount(Some("12abc")), None);
    assert_eq!(parse_amount(Some("inf")), None);
    assert_eq!(parse_amount(None), None);
}

#[test]
fn formats_amounts() {
    assert_eq!(format_amount(None), "No aplica");
    assert_eq!(format_amount(Some(1234.0)), "S/ 1,234");
    assert_eq!(format_amount(Some(0.0)), "S/ 0");
    assert_eq!(format_amount(Some(999.4)), "S/ 999");
    assert_eq!(format_amount(Some(1_234_567.8)), "S/ 1,234,568");
    assert_eq!(format_amount(Some(100_000.0)), "S/ 100,000");
}

#[test]
fn formatted_amount_parses_back_to_the_same_value() {
    for raw in ["S/ 1,234", "98765", "12,000.00", "7"] {
        let value = parse_amount(Some(raw));
        let again = parse_amount(Some(&format_amount(value)));
        assert_eq!(again, value.map(f64::round), "{raw}");
    }
}

#[test]
fn parses_dates_in_sheet_formats() {
    let expected = ParsedDate::Date(day(2026, 8, 5));
    assert_eq!(parse_date(Some("2026-08-05")), expected);
    assert_eq!(parse_date(Some("05/08/2026")), expected);
    assert_eq!(parse_date(Some("2026/08/05")), expected);
    assert_eq!(parse_date(Some("2026-08-05 10:30:00")), expected);
    assert_eq!(parse_date(Some(" 5/8/2026 ")), expected);
}

#[test]
fn month_first_dates_parse_when_day_first_cannot() {
    assert_eq!(parse_date(Some("04/29/2026")), ParsedDate::Date(day(2026, 4, 29)));
    assert_eq!(
        parse_date(Some("08/26/2026 14:05")),
        ParsedDate::Date(day(2026, 8, 26))
    );
    assert_eq!(
        format_date(&parse_date(Some("04/29/2026"))),
        "29 - Abr - 2026"
    );
    // Ambiguous: still day-first.
    assert_eq!(parse_date(Some("04/05/2026")), ParsedDate::Date(day(2026, 5, 4)));
}

#[test]
fn absent_and_unparseable_dates() {
    assert_eq!(parse_date(None), ParsedDate::Absent);
    assert_eq!(parse_date(Some("")), ParsedDate::Absent);
    assert_eq!(parse_date(Some("nan")), ParsedDate::Absent);
    assert_eq!(parse_date(Some("None")), ParsedDate::Absent);
    assert_eq!(
        parse_date(Some("en revisión")),
        ParsedDate::Unparsed("en revisión".to_string())
    );
}

#[test]
fn formats_dates_with_spanish_months() {
    assert_eq!(format_date(&ParsedDate::Absent), "—");
    assert_eq!(format_date(&ParsedDate::Date(day(2026, 4, 29))), "29 - Abr - 2026");
    assert_eq!(format_date(&ParsedDate::Date(day(2026, 1, 3))), "03 - Ene - 2026");
    assert_eq!(format_date(&ParsedDate::Date(day(2025, 12, 31))), "31 - Dic - 2025");
    assert_eq!(
        format_date(&ParsedDate::Unparsed("por revisar".into())),
        "por revisar"
    );
}

#[test]
fn codlocal_is_zero_padded_text() {
    assert_eq!(normalize_codlocal("1234"), "001234");
    assert_eq!(normalize_codlocal("1234.0"), "001234");
    assert_eq!(normalize_codlocal(" 001234 "), "001234");
    assert_eq!(normalize_codlocal("0000012"), "0000012");
    assert_eq!(normalize_codlocal("123456"), "123456");
}

#[test]
fn flags_are_one_or_not() {
    assert!(parse_flag(Some("1")));
    assert!(parse_flag(Some("1.0")));
    assert!(!parse_flag(Some("0")));
    assert!(!parse_flag(Some("SI")));
    assert!(!parse_flag(None));
}

#[test]
fn display_text_uses_placeholder() {
    assert_eq!(display_text(Some("  RURAL ")), "RURAL");
    assert_eq!(display_text(Some("nan")), "—");
    assert_eq!(display_text(None), "—");
}

#[test]
fn progress_is_clamped() {
    assert_eq!(progress_percent(Some(1000.0), Some(250.0)), 25.0);
    assert_eq!(progress_percent(Some(1000.0), Some(1500.0)), 100.0);
    assert_eq!(progress_percent(Some(1000.0), Some(-10.0)), 0.0);
    assert_eq!(progress_percent(Some(0.0), Some(250.0)), 0.0);
    assert_eq!(progress_percent(None, Some(250.0)), 0.0);
    assert_eq!(progress_percent(Some(1000.0), None), 0.0);
}
