use std::fs;

use podium_cli::api::Podium;
use podium_cli::report::{PrizeSchedule, ReportWriter};
use podium_cli::roster::Roster;
use uuid::Uuid;

fn prizes() -> PrizeSchedule {
    PrizeSchedule {
        first: "15".to_string(),
        second: "10".to_string(),
        third: "5".to_string(),
    }
}

fn write_to_string(podiums: &[Podium], roster: &Roster) -> String {
    let mut out = Vec::new();
    {
        let mut report = ReportWriter::from_writer(&mut out).expect("header should write");
        for podium in podiums {
            report
                .write_event(podium, roster, &prizes())
                .expect("row should write");
        }
        report.finish().expect("flush should succeed");
    }
    String::from_utf8(out).expect("report is utf-8")
}

#[test]
fn winners_are_joined_against_the_roster() {
    let mut roster = Roster::new();
    roster.insert("2023ABCD01".to_string(), "a@x.com".to_string());

    let podium = Podium {
        event_name: "Competition 2023".to_string(),
        wca_ids: vec![
            Some("2023ABCD01".to_string()),
            None,
            Some("2099ZZZZ01".to_string()),
        ],
    };

    let out = write_to_string(&[podium], &roster);
    let mut lines = out.lines();
    assert_eq!(
        lines.next(),
        Some("event,1st email,1st prize ($),2nd email,2nd prize ($),3rd email,3rd prize ($)")
    );
    assert_eq!(lines.next(), Some("Competition 2023,a@x.com,15,,10,,5"));
    assert_eq!(lines.next(), None);
}

#[test]
fn empty_podium_still_carries_the_prizes() {
    let out = write_to_string(&[Podium::default()], &Roster::new());
    assert_eq!(out.lines().nth(1), Some(",,15,,10,,5"));
}

#[test]
fn one_row_per_event_in_order() {
    let podiums = vec![
        Podium {
            event_name: "3x3x3 Cube".to_string(),
            wca_ids: vec![],
        },
        Podium {
            event_name: "2x2x2 Cube".to_string(),
            wca_ids: vec![],
        },
        Podium {
            event_name: "Pyraminx".to_string(),
            wca_ids: vec![],
        },
    ];

    let out = write_to_string(&podiums, &Roster::new());
    let events: Vec<&str> = out
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(events, vec!["3x3x3 Cube", "2x2x2 Cube", "Pyraminx"]);
}

#[test]
fn create_overwrites_an_existing_report() {
    let dir = std::env::temp_dir().join(format!("podium_cli_report_test_{}", Uuid::now_v7()));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("winners.csv");

    let first_run = Podium {
        event_name: "First run".to_string(),
        wca_ids: vec![],
    };
    let second_run = Podium {
        event_name: "Second run".to_string(),
        wca_ids: vec![],
    };

    for podium in [&first_run, &second_run] {
        let mut report = ReportWriter::create(&path).expect("report should open");
        report
            .write_event(podium, &Roster::new(), &prizes())
            .expect("row should write");
        report.finish().expect("flush should succeed");
    }

    let content = fs::read_to_string(&path).expect("report should exist");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "second run must not append to the first");
    assert!(lines[1].starts_with("Second run,"));

    let _ = fs::remove_dir_all(&dir);
}
