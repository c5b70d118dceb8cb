//! End-to-end runs of the CLI commands against the shipped rule file.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use courtdays::cli::{run, Invocation};
use courtdays::core::{DateFormat, Error, Settings};
use courtdays::CliError;

fn settings(format: DateFormat) -> Settings {
    let mut settings = Settings::default();
    settings.rules.path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/california_courts.csv");
    settings.output.date_format = format;
    settings
}

fn output(args: &[&str]) -> String {
    output_with(args, DateFormat::Iso)
}

fn invocation(args: &[&str]) -> Invocation {
    Invocation::try_parse_from(std::iter::once("courtdays").chain(args.iter().copied())).unwrap()
}

fn output_with(args: &[&str], format: DateFormat) -> String {
    let invocation = invocation(args);
    let mut out = Vec::new();
    run(&invocation, &settings(format), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn weekday_and_leap() {
    assert_eq!(output(&["weekday", "11/24/2011"]), "2011-11-24 is a Thursday\n");
    assert_eq!(output(&["leap", "2000"]), "2000 is a leap year\n");
    assert_eq!(output(&["leap", "1900"]), "1900 is not a leap year\n");
}

#[test]
fn holiday_status() {
    assert_eq!(
        output(&["holiday", "2011-10-08"]),
        "2011-10-08 (Saturday) is a holiday: Weekend: every Saturday of every month \
         (Cal. Code Civ. Proc. § 12a)\n"
    );
    assert_eq!(output(&["holiday", "2011-10-10"]), "2011-10-10 (Monday) is a court day\n");
    assert!(output(&["holiday", "2011-11-24"]).contains("Thanksgiving Day"));
    assert_eq!(output(&["holiday", "1700-01-01"]), "1700-01-01 cannot be classified\n");
}

#[test]
fn offsets_and_differences() {
    assert_eq!(output(&["offset", "2011-10-08", "47"]), "2011-11-24\n");
    assert_eq!(output(&["diff", "2011-10-08", "2011-11-24"]), "47\n");
    assert_eq!(output(&["diff", "2011-11-24", "2011-10-08"]), "-47\n");
    // Veterans Day 2011 was a Friday.
    assert_eq!(output(&["court-offset", "2011-11-10", "1"]), "2011-11-14\n");
    assert_eq!(output(&["court-offset", "2011-11-14", "-1"]), "2011-11-10\n");
    assert_eq!(output(&["court-diff", "2011-11-10", "2011-11-14"]), "1\n");
}

#[test]
fn configured_date_format() {
    assert_eq!(output_with(&["offset", "2011-10-08", "+1"], DateFormat::Mdy), "10/09/2011\n");
    assert_eq!(
        output_with(&["weekday", "2011-11-24"], DateFormat::Long),
        "November 24, 2011 is a Thursday\n"
    );
}

#[test]
fn deadline_report() {
    let text = output(&["deadline", "2011-11-14", "10"]);
    assert!(text.contains("Landing day: 2011-11-24\n"), "{text}");
    assert!(text.contains("Due date:    2011-11-25 (moved off a non-court day)\n"), "{text}");

    let text = output(&["deadline", "2011-11-10", "1", "--unit", "court"]);
    assert!(text.contains("Due date:    2011-11-14\n"), "{text}");
}

#[test]
fn rules_listing() {
    let text = output(&["rules"]);
    assert!(text.starts_with("california_courts\n"));
    assert!(text.contains("No holidays in April\n"));
    assert!(text.contains("Native American Day: 4th Friday of September"));
}

#[test]
fn failures() {
    let s = settings(DateFormat::Iso);
    let mut out = Vec::new();

    let before_1752 = invocation(&["weekday", "1700-01-01"]);
    let err = run(&before_1752, &s, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Core(Error::WeekdayOutOfRange { .. })));

    let missing = invocation(&["--rules", "no/such/file.csv", "rules"]);
    let err = run(&missing, &s, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Loader(_)));

    let huge = invocation(&["offset", "2011-10-08", "9223372036854775807"]);
    let err = run(&huge, &s, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Core(Error::JdnOutOfRange(_))));

    let huge = invocation(&["deadline", "2011-10-08", "-9223372036854775808"]);
    let err = run(&huge, &s, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Core(Error::JdnOutOfRange(_))));
}

/// Accepts writes but fails to flush, like a closed pipe.
struct FailingFlush(Vec<u8>);

impl Write for FailingFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn flush_failure_is_an_error() {
    let mut out = FailingFlush(Vec::new());
    let leap = invocation(&["leap", "2000"]);
    let err = run(&leap, &settings(DateFormat::Iso), &mut out).unwrap_err();
    assert!(matches!(err, CliError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}
