//! `#[derive(Queryable)]` across every field kind.

use chrono::NaiveDate;
use linqs_macros::Queryable;
use linqs_query::{ClauseValue, Number, Query, QueryEnum, Queryable, Timestamp, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Seed,
    Growth,
}

impl QueryEnum for Stage {
    fn discriminant(&self) -> u32 {
        match self {
            Stage::Seed => 0,
            Stage::Growth => 1,
        }
    }
}

#[derive(Debug, Clone, Queryable)]
struct Startup {
    #[query(text, rename = "title")]
    name: String,
    #[query(date)]
    founded: NaiveDate,
    #[query(choice)]
    stage: Stage,
    #[query(number)]
    head_count: u16,
    #[query(skip)]
    #[allow(dead_code)]
    notes: String,
    #[allow(dead_code)]
    untracked: bool,
}

#[derive(Queryable)]
struct Tagged<T> {
    #[query(text)]
    label: String,
    #[allow(dead_code)]
    payload: T,
}

fn startup(name: &str, founded: (i32, u32, u32), stage: Stage, head_count: u16) -> Startup {
    Startup {
        name: name.to_string(),
        founded: NaiveDate::from_ymd_opt(founded.0, founded.1, founded.2).unwrap(),
        stage,
        head_count,
        notes: String::new(),
        untracked: false,
    }
}

#[test]
fn constants_follow_query_names() {
    assert_eq!(Startup::TITLE, "title");
    assert_eq!(Startup::FOUNDED, "founded");
    assert_eq!(Startup::HEAD_COUNT, "head_count");
}

#[test]
fn every_kind_maps_to_a_value() {
    let s = startup("Orbit", (1970, 1, 2), Stage::Growth, 12);
    assert_eq!(s.field_value(Startup::TITLE), Value::String("Orbit"));
    assert_eq!(
        s.field_value(Startup::FOUNDED),
        Value::Timestamp(Timestamp::from_secs(86_400))
    );
    assert_eq!(s.field_value(Startup::STAGE), Value::Enum(1));
    assert_eq!(
        s.field_value(Startup::HEAD_COUNT),
        Value::Number(Number::U64(12))
    );
    assert_eq!(s.field_value("name"), Value::None);
    assert_eq!(s.field_value("notes"), Value::None);
    assert_eq!(s.field_value("untracked"), Value::None);
}

#[test]
fn derived_fields_drive_queries() {
    let startups = vec![
        startup("Orbit", (2019, 3, 1), Stage::Growth, 40),
        startup("Pebble", (2022, 8, 15), Stage::Seed, 6),
        startup("Quarry", (2015, 1, 20), Stage::Growth, 120),
    ];

    let query = Query::new()
        .and_eq(Startup::STAGE, ClauseValue::Enum(Stage::Growth.discriminant()))
        .order_asc(Startup::FOUNDED)
        .build();
    let names: Vec<&str> = query
        .filter(&startups, Startup::accessor)
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Quarry", "Orbit"]);
}

#[test]
fn generic_structs_derive() {
    let tagged = Tagged {
        label: "alpha".to_string(),
        payload: 7u8,
    };
    assert_eq!(Tagged::<u8>::LABEL, "label");
    assert_eq!(tagged.field_value(Tagged::<u8>::LABEL), Value::String("alpha"));
}
