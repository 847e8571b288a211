use fair_chance::workflows::assessment::{AssessmentReport, Factor, FactorSummary, RatingTone};
use std::fmt::Write;

pub(crate) fn render_report(report: &AssessmentReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Article 23-A individualized assessment");
    let _ = writeln!(
        out,
        "Candidate: {} (generated {})",
        report.candidate_id.0, report.date_generated
    );
    let _ = writeln!(
        out,
        "Recommendation: {}",
        report.recommendation.label().to_uppercase()
    );
    if let Some(score) = report.overall_score() {
        let _ = writeln!(out, "Overall score: {score:.2} / 7");
    }
    let certificate = if report.certificate_of_relief {
        "presented (presumption of rehabilitation)"
    } else {
        "not presented"
    };
    let _ = writeln!(out, "Certificate of relief: {certificate}");

    if let Some(detail) = &report.individualized_assessment {
        let _ = writeln!(out, "\nFactor ratings");
        for factor in &detail.factors {
            let _ = writeln!(
                out,
                "- [{}] {}: {} ({}, {})",
                factor.factor_id,
                factor.title,
                factor.rating,
                factor.rating_label,
                RatingTone::of(factor.rating).label()
            );
            for line in factor.notes.lines().filter(|line| !line.trim().is_empty()) {
                let _ = writeln!(out, "    {line}");
            }
        }
    }

    render_section(&mut out, "Compliant factors", &report.factors.compliant);
    render_section(&mut out, "Areas of concern", &report.factors.concerns);

    let _ = writeln!(out, "\nLegal analysis\n{}", report.legal_analysis);
    let _ = writeln!(out, "\nPolicy analysis\n{}", report.policy_analysis);

    let _ = writeln!(out, "\nReferences");
    for reference in &report.policy_references {
        let _ = writeln!(
            out,
            "- {} ({}): {}",
            reference.title, reference.section, reference.url
        );
    }
    for reference in &report.legal_references {
        let _ = writeln!(
            out,
            "- {} {} ({}): {}",
            reference.jurisdiction, reference.title, reference.section, reference.url
        );
    }

    out
}

fn render_section(out: &mut String, heading: &str, entries: &[FactorSummary]) {
    if entries.is_empty() {
        let _ = writeln!(out, "\n{heading}: none");
        return;
    }

    let _ = writeln!(out, "\n{heading}");
    for entry in entries {
        let _ = writeln!(
            out,
            "- {} rated {} ({})",
            entry.factor, entry.rating, entry.citation
        );
    }
}

pub(crate) fn render_catalog(factors: &[Factor]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Article 23-A factors (Correction Law § 753)");
    for factor in factors {
        let _ = writeln!(
            out,
            "\n{}. {} [{} | {}]",
            factor.id, factor.title, factor.citation, factor.statute
        );
        let _ = writeln!(out, "   {}", factor.description);
        let _ = writeln!(out, "   Guidance: {}", factor.guidance);
    }
    out
}
