//! Integration tests for the public formatting and slug API.
//!
//! These walk through the examples an editor would see: dates and times as
//! they appear in copy, and slugs as they are filed.

use jiff::civil::date;
use reuters_style::{
    Moment, Ric, Slug, SlugKind, ValidationError, format_date, format_dayofweek, format_time,
    suggest_wild_slug, validate_packaging_slug, validate_slug, validate_slug_value,
    validate_wild_slug,
};
use serde_json::json;

#[test]
fn test_dates_follow_style_guide() {
    assert_eq!(format_date(date(2021, 9, 1)), "Sept. 1, 2021");
    assert_eq!(format_date(date(2021, 3, 1)), "March 1, 2021");
    assert_eq!(format_dayofweek(date(2023, 10, 18), false), "Wednesday");
    assert_eq!(format_dayofweek(date(2023, 10, 18), true), "Wed");
}

#[test]
fn test_time_in_johannesburg() {
    let zdt = date(2021, 9, 1)
        .at(12, 30, 0, 0)
        .in_tz("Africa/Johannesburg")
        .unwrap();

    assert_eq!(format_time(&zdt, true), "12:30 p.m. SAST");
    assert_eq!(format_time(&zdt, false), "12:30 p.m. (1030 GMT)");
}

#[test]
fn test_midnight_and_noon_in_every_zone_shape() {
    let midnight = date(2021, 9, 1).at(0, 0, 0, 0);
    let noon = date(2021, 9, 1).at(12, 0, 0, 0);

    assert_eq!(format_time(midnight, true), "midnight GMT");
    assert_eq!(format_time(noon, false), "noon");

    let utc = noon.to_zoned(jiff::tz::TimeZone::UTC).unwrap();
    assert_eq!(format_time(&utc, true), "noon GMT");
    assert_eq!(format_time(&utc, false), "noon");
}

// Other date/time crates feed the formatters through `Moment`.
#[test]
fn test_chrono_and_time_inputs() {
    let chrono_dt = chrono::NaiveDate::from_ymd_opt(2021, 9, 1)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();
    assert_eq!(
        format_time(Moment::try_from(chrono_dt).unwrap(), true),
        "2 p.m. GMT"
    );

    let performed_at = time::macros::datetime!(2021-09-01 12:30 +9);
    let moment = Moment::try_from(performed_at).unwrap();
    assert_eq!(format_time(&moment, false), "12:30 p.m. (0330 GMT)");
    assert_eq!(format_date(&moment), "Sept. 1, 2021");
}

#[test]
fn test_slug_scenarios() {
    assert_eq!(validate_slug("FERRARI-IPO/PROSPECTUS"), Ok(true));

    let err = validate_slug("FERRARI-IPO/PROSPECTUS REPORT").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Wild slug can only contain uppercase letters, hyphens and slashes."
    );

    assert!(validate_packaging_slug("FERRARI/").is_err());
    assert_eq!(validate_packaging_slug("AB-CD/"), Ok(true));
    assert!(validate_packaging_slug("AB-C/").is_err());
    assert!(validate_packaging_slug("AA-BB-CC-DD-EE-FF/").is_err());
}

#[test]
fn test_duplicate_wild_terms() {
    let err = validate_wild_slug("PROSPECTUS-PROSPECTUS").unwrap_err();
    assert_eq!(err, ValidationError::DuplicateTerm(SlugKind::Wild));
    assert_eq!(err.to_string(), "Wild slug terms cannot be duplicated.");
    assert_eq!(validate_wild_slug("PROSPECTUS-DRAFT"), Ok(true));
}

#[test]
fn test_untyped_input_must_be_a_string() {
    let err = validate_slug_value(&json!(["FERRARI-IPO/"])).unwrap_err();
    assert_eq!(err.to_string(), "Full slug must be a string.");
    assert_eq!(validate_slug_value(&json!("FERRARI-IPO/")), Ok(true));
}

#[test]
fn test_value_objects() {
    let ric = Ric::new("AAPL.O", "Apple Inc");
    assert_eq!(ric.to_string(), "AAPL.O");

    let slug = Slug::new("FERRARI-RESULTS/", "PROSPECTUS");
    assert_eq!(slug.validate(), Ok(true));
    assert_eq!(
        slug.full_slug(),
        format!("{}{}", slug.packaging_slug(), slug.wild_slug())
    );
    assert_eq!(slug, "FERRARI-RESULTS/PROSPECTUS".parse::<Slug>().unwrap());
}

// Suggested wild slugs combine with a packaging slug into a valid full slug.
#[test]
fn test_suggested_wild_slug_completes_full_slug() {
    let wild = suggest_wild_slug("Ferrari prospectus: pricing details").unwrap();
    let slug = Slug::new("FERRARI-IPO/", wild);
    assert_eq!(slug.full_slug(), "FERRARI-IPO/FERRARI-PROSPECTUS-PRICING-DETAILS");
    assert_eq!(slug.validate(), Ok(true));
}
