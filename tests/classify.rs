use pan_prognosis::biomarker::{Biomarker, Severity, Status, classify, classify_value};

fn check(name: &str, value: &str, status: Status, severity: Severity) {
    let c = classify(name, value);
    assert_eq!(c.status, status, "{} = {}", name, value);
    assert_eq!(c.severity, severity, "{} = {}", name, value);
}

#[test]
fn ca199_boundaries() {
    check("CA 19-9", "37.0", Status::Normal, Severity::Normal);
    check("CA 19-9", "37.01", Status::Elevated, Severity::Moderate);
    check("CA 19-9", "100.0", Status::Elevated, Severity::Moderate);
    check("CA 19-9", "100.01", Status::Elevated, Severity::High);
}

#[test]
fn lipase_boundaries() {
    check("Lipase", "9.99", Status::Low, Severity::Low);
    check("Lipase", "10.0", Status::Normal, Severity::Normal);
    check("Lipase", "140.0", Status::Normal, Severity::Normal);
    check("Lipase", "140.01", Status::Elevated, Severity::Moderate);
    check("Lipase", "200.5", Status::Elevated, Severity::High);
}

#[test]
fn cea_and_amylase_tiers() {
    check("CEA", "3", Status::Normal, Severity::Normal);
    check("CEA", "4", Status::Elevated, Severity::Moderate);
    check("CEA", "5.1", Status::Elevated, Severity::High);
    check("Amylase", "29", Status::Low, Severity::Low);
    check("Amylase", "110", Status::Normal, Severity::Normal);
    check("Amylase", "111", Status::Elevated, Severity::Moderate);
    check("Amylase", "151", Status::Elevated, Severity::High);
}

#[test]
fn name_lookup_is_case_insensitive() {
    check("ca 19-9", "120", Status::Elevated, Severity::High);
    check("LIPASE", "5", Status::Low, Severity::Low);
    check("  cea ", "6", Status::Elevated, Severity::High);
}

#[test]
fn unknown_names_are_normal() {
    check("Bilirubin", "9999", Status::Normal, Severity::Normal);
    check("LYVE1", "9999", Status::Normal, Severity::Normal);
}

#[test]
fn unparsable_value_reads_as_zero() {
    assert_eq!(classify("Lipase", "abc"), classify("Lipase", "0"));
    check("Lipase", "abc", Status::Low, Severity::Low);
    check("CA 19-9", "", Status::Normal, Severity::Normal);
}

#[test]
fn numeric_and_text_inputs_agree() {
    assert_eq!(classify("CEA", 4.2), classify("CEA", "4.2"));
    assert_eq!(classify("CA 19-9", "120 U/mL"), classify("CA 19-9", 120.0));
}

#[test]
fn classification_is_repeatable() {
    for v in [0.5, 37.0, 99.9, 150.0, 250.0] {
        for b in Biomarker::ALL {
            assert_eq!(classify_value(b, v), classify_value(b, v));
        }
    }
}
