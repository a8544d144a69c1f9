//! Report rendering in both output modes

use gazette_digest::core::models::FilterConfig;
use gazette_digest::core::services::{build, filter, rules};
use gazette_digest::output::{RuleListing, RunOutcome, RunReport};

use crate::common::{issue, sample_entries};

fn report(outcome: RunOutcome) -> RunReport {
    let digest = build(&filter(sample_entries(), FilterConfig::default()).unwrap());
    RunReport::new(outcome, "fixture".to_string(), issue(), digest)
}

#[test]
fn test_report_json_is_complete() {
    let json = serde_json::to_value(report(RunOutcome::Sent).with_recipient("a@b.c")).unwrap();
    assert_eq!(json["outcome"], "sent");
    assert_eq!(json["recipient"], "a@b.c");
    assert_eq!(json["issue"]["number"], 33158);
    assert_eq!(json["digest"]["kept"], 4);
    assert_eq!(json["digest"]["summary"]["total"], 6);
    assert_eq!(json["section_counts"][0]["section"], "administrative");
    assert_eq!(json["section_counts"][0]["count"], 3);
}

#[test]
fn test_report_human_summary_line() {
    let human = report(RunOutcome::DryRun).human();
    assert!(human.contains("10 entries collected, 4 kept, 6 filtered"));
    assert!(human.contains("Gümrük Genel Tebliği (Sıra No: 12) [HTM]"));
}

#[test]
fn test_all_filtered_report() {
    let human = RunReport::new(RunOutcome::AllFiltered, "fixture".to_string(), issue(), Default::default()).human();
    assert!(human.contains("Every entry was filtered out"));
}

#[test]
fn test_rule_listing_json() {
    let all_on = FilterConfig::default().with(gazette_digest::core::models::DropCategory::Appointment, true);
    let listing = RuleListing::new(rules(), |rule| all_on.suppresses(rule.category()));
    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["rules"].as_array().unwrap().len(), 4);
    assert!(json["rules"].as_array().unwrap().iter().all(|r| r["active"] == true));
    assert_eq!(json["rules"][1]["category"], "announcement-section");
}
