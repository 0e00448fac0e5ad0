//! Slide deck renderer
//!
//! Executive presentation as markdown slides separated by `---`, with Marp
//! front matter so it can be exported to PDF or PPTX.

use chrono::NaiveDate;

use super::renderer::{format_currency, format_payback, ROADMAP_ITEMS_PER_PHASE};
use crate::app::AuditRoi;
use crate::domain::entities::{AuditProject, Category, Opportunity};

const SLIDE_BREAK: &str = "\n---\n\n";

/// Render the executive presentation
pub fn render_slide_deck(
    project: &AuditProject,
    roi: &AuditRoi,
    author: &str,
    date: NaiveDate,
) -> String {
    let client = &project.client;
    let combined = &roi.combined;
    let quick_wins = project.opportunities_in(Category::QuickWin);
    let big_swings = project.opportunities_in(Category::BigSwing);

    let mut slides: Vec<String> = Vec::new();

    slides.push(format!(
        "# AI Opportunity Assessment\n\n## {}\n\n{} | {}\n",
        client.company_name,
        author,
        date.format("%B %Y")
    ));

    slides.push(format!(
        "# Executive Summary\n\n\
         - **{}** automation opportunities identified\n\
         - **{}** quick wins ready to start\n\
         - **{:.0}** hours saved every week\n\
         - **{}** total annual value\n",
        project.opportunities.len(),
        quick_wins.len(),
        combined.hours_saved_weekly,
        format_currency(combined.total_annual_value)
    ));

    let mut matrix = String::from("# Opportunity Matrix\n\n");
    matrix.push_str("| Quadrant | Opportunities | Hours Saved/Week |\n");
    matrix.push_str("|----------|---------------|------------------|\n");
    for category in Category::ALL {
        let count = project.opportunities_in(category).len();
        let hours = roi
            .by_category
            .get(&category)
            .map(|r| format!("{:.0}", r.hours_saved_weekly))
            .unwrap_or_else(|| "-".to_string());
        matrix.push_str(&format!(
            "| {} {} | {} | {} |\n",
            category.icon(),
            category.title(),
            count,
            hours
        ));
    }
    slides.push(matrix);

    if !quick_wins.is_empty() {
        slides.push(roadmap_slide(
            "Phase 1: Quick Wins (Weeks 1-4)",
            &quick_wins,
        ));
    }
    if !big_swings.is_empty() {
        slides.push(roadmap_slide(
            "Phase 2: Strategic Initiatives (Months 2-6)",
            &big_swings,
        ));
    }

    slides.push(format!(
        "# Return on Investment\n\n\
         | Metric | Value |\n\
         |--------|-------|\n\
         | Annual Cost Savings | {} |\n\
         | Annual Revenue Potential | {} |\n\
         | Implementation Cost | {} |\n\
         | Payback Period | {} |\n\
         | First Year ROI | {:.0}% |\n",
        format_currency(combined.annual_savings),
        format_currency(combined.annual_revenue_potential),
        format_currency(combined.implementation_cost),
        format_payback(combined.payback_months),
        combined.roi_percentage
    ));

    slides.push(
        "# Next Steps\n\n\
         1. Approve the Phase 1 quick wins\n\
         2. Schedule the kickoff meeting\n\
         3. Deliver the first automation in 2-4 weeks\n"
            .to_string(),
    );

    let mut deck = String::from("---\nmarp: true\npaginate: true\n---\n\n");
    deck.push_str(&slides.join(SLIDE_BREAK));
    deck
}

fn roadmap_slide(title: &str, opportunities: &[&Opportunity]) -> String {
    let mut slide = format!("# {}\n\n", title);
    for opp in opportunities.iter().take(ROADMAP_ITEMS_PER_PHASE) {
        slide.push_str(&format!(
            "- **{}** - {:.0} hrs/week saved\n",
            opp.name,
            opp.total_weekly_hours()
        ));
    }
    slide
}
