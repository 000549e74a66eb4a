//! Format checks for the free generator functions.
//!
//! Each test draws many values and checks the layout every draw must follow.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use chrono::{Datelike, NaiveDate, Weekday};
use locale_faker::{
    CardTypes, DATE_FORMAT, DaysOfWeek, Genders, IpAddressType, Language, Languages, card_number,
    date, full_name, integer, ip_address, mac_address, pick_from_mask, replace_placeholder,
    replace_wildcards_correlated, seed_thread, uuid,
};
use regex::Regex;
use rstest::rstest;

const DRAWS: usize = 200;

fn assert_all_match(pattern: &str, mut draw: impl FnMut() -> String) {
    let regex = Regex::new(pattern).expect("valid pattern");
    for _ in 0..DRAWS {
        let value = draw();
        assert!(regex.is_match(&value), "{value} does not match {pattern}");
    }
}

#[rstest]
#[case::visa(CardTypes::VISA, r"^4\d{15}$")]
#[case::american_express(CardTypes::AMERICAN_EXPRESS, r"^3[47]\d{13}$")]
#[case::master_card(CardTypes::MASTER_CARD, r"^5[1-5]\d{14}$")]
#[case::jcb(CardTypes::JCB, r"^35[2-8]\d{13}$")]
#[case::union_pay(CardTypes::UNION_PAY, r"^62\d{14}(\d{3})?$")]
fn card_numbers_follow_their_network(#[case] card_types: CardTypes, #[case] pattern: &str) {
    assert_all_match(pattern, || card_number(card_types));
}

#[test]
fn mac_addresses_are_local_unicast() {
    assert_all_match(r"^([0-9a-f]{2}:){5}[0-9a-f]{2}$", mac_address);

    for _ in 0..DRAWS {
        let address = mac_address();
        let first = u8::from_str_radix(address.get(..2).expect("first octet"), 16).expect("hex octet");
        assert_eq!(first & 0x01, 0, "multicast bit set in {address}");
        assert_eq!(first & 0x02, 0x02, "local bit clear in {address}");
    }
}

#[test]
fn ipv6_addresses_have_eight_groups() {
    assert_all_match(r"^([0-9a-f]{4}:){7}[0-9a-f]{4}$", || {
        ip_address(IpAddressType::V6)
    });
}

#[test]
fn ipv4_addresses_have_four_octets() {
    for _ in 0..DRAWS {
        let address = ip_address(IpAddressType::V4);
        let octets: Vec<&str> = address.split('.').collect();
        assert_eq!(octets.len(), 4, "{address}");
        for octet in octets {
            octet.parse::<u8>().expect("decimal octet");
        }
    }
}

#[test]
fn uuids_are_version_four() {
    assert_all_match(
        r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
        || uuid(true),
    );
    assert_all_match(r"^[0-9a-f]{32}$", || uuid(false));
}

#[test]
fn weekday_dates_skip_weekends() {
    for _ in 0..DRAWS {
        let drawn = date("2024-01-01", "2024-12-31", DaysOfWeek::WEEKDAYS).expect("valid range");
        let day = NaiveDate::parse_from_str(&drawn, DATE_FORMAT).expect("date layout");
        assert!(!matches!(day.weekday(), Weekday::Sat | Weekday::Sun), "{drawn}");
    }
}

#[test]
fn impossible_weekday_masks_fail() {
    assert!(date("2024-01-01", "2024-12-31", DaysOfWeek::empty()).is_err());
}

#[test]
fn reversed_integer_ranges_are_invalid_arguments() {
    let err = integer(10_i32, -10).expect_err("reversed");
    assert_eq!(err.kind(), locale_faker::ErrorKind::InvalidArgument);
}

#[test]
fn placeholders_are_replaced_once() {
    assert_eq!(replace_placeholder("{} and {}", "x"), "x and {}");
    assert_eq!(replace_placeholder("none here", "x"), "none here");
}

#[test]
fn correlated_wildcards_share_their_draws() {
    for _ in 0..DRAWS {
        let (a, b) = replace_wildcards_correlated("No. ##", "##-Chome", "0123456789", '#');
        let digits_a: String = a.chars().filter(char::is_ascii_digit).collect();
        let digits_b: String = b.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(digits_a, digits_b);
        assert_eq!(digits_a.len(), 2);
    }
}

#[test]
fn mismatched_wildcard_counts_leave_templates_unchanged() {
    let (a, b) = replace_wildcards_correlated("#", "##", "0123456789", '#');
    assert_eq!((a.as_str(), b.as_str()), ("#", "##"));
}

#[test]
fn empty_masks_resolve_to_the_default() {
    assert_eq!(pick_from_mask::<Language>(Languages::empty()), Language::English);
}

#[test]
fn seeded_threads_repeat_their_draws() {
    seed_thread(7);
    let first = full_name(Languages::all(), Genders::all());
    seed_thread(7);
    assert_eq!(full_name(Languages::all(), Genders::all()), first);
}
