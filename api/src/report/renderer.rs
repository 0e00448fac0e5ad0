//! Document renderer
//!
//! Renders audit deliverables to markdown: the interview guide, the
//! opportunity matrix and the executive report.

use chrono::NaiveDate;

use super::questions::{
    industry_questions, InterviewRoles, QuestionSection, END_USER_SECTIONS, STAKEHOLDER_SECTIONS,
};
use crate::app::AuditRoi;
use crate::domain::entities::{AuditProject, Category, Client, Opportunity};

/// Items shown per roadmap phase in the executive report
pub const ROADMAP_ITEMS_PER_PHASE: usize = 3;

/// Render the interview question guide for a client
pub fn render_interview_guide(client: &Client, roles: InterviewRoles, date: NaiveDate) -> String {
    let mut buf = String::new();

    buf.push_str("# AI Audit Interview Questions\n");
    buf.push_str(&format!("## {}\n\n", client.company_name));
    buf.push_str(&format!("**Prepared for**: {}\n", client.contact_name));
    buf.push_str(&format!("**Date**: {}\n", date.format("%Y-%m-%d")));
    buf.push_str(&format!("**Industry**: {}\n", client.industry.label()));
    buf.push_str(&format!("**Employee Count**: {}\n\n", client.employee_count));
    buf.push_str("---\n\n");

    buf.push_str("## Interview Plan\n\n");
    buf.push_str("| Business Size | Recommended Interviews | Duration |\n");
    buf.push_str("|---------------|------------------------|----------|\n");
    buf.push_str(&format!(
        "| {} employees | {} interviews | 30-45 min each |\n\n",
        client.employee_count,
        client.recommended_interviews()
    ));
    buf.push_str("**Target mix**:\n");
    buf.push_str("- 40% Leadership/Stakeholders (understand goals)\n");
    buf.push_str("- 60% End-users (understand reality)\n\n");
    buf.push_str("---\n\n");

    if roles.includes_stakeholders() {
        buf.push_str("## Stakeholder Interview Questions (30,000-Foot View)\n\n");
        render_sections(&mut buf, STAKEHOLDER_SECTIONS);
    }

    if roles.includes_end_users() {
        buf.push_str("## End-User Interview Questions (On-the-Ground Reality)\n\n");
        render_sections(&mut buf, END_USER_SECTIONS);
    }

    if let Some(questions) = industry_questions(&client.industry) {
        buf.push_str(&format!(
            "## {} Industry-Specific Questions\n\n",
            client.industry.label()
        ));
        for question in questions {
            buf.push_str(&format!("- {}\n", question));
        }
        buf.push('\n');
    }

    buf.push_str("---\n\n");
    buf.push_str("## Interview Best Practices\n\n");
    buf.push_str("- **Listen 80%, talk 20%** - keep them talking\n");
    buf.push_str("- **Ask \"why?\" repeatedly** - get to root causes\n");
    buf.push_str("- **Record with permission** - transcribe every session\n");
    buf.push_str("- **Focus on problems, not solutions** - solutions come later\n");
    buf.push_str("- **Note emotional reactions** - frustration marks an opportunity\n\n");
    buf.push_str("## After Each Interview\n\n");
    buf.push_str("1. [ ] Transcription saved\n");
    buf.push_str("2. [ ] Key pain points highlighted\n");
    buf.push_str("3. [ ] Time estimates noted (hours/week on tasks)\n");
    buf.push_str("4. [ ] Follow-up questions documented\n");

    buf
}

fn render_sections(buf: &mut String, sections: &[QuestionSection]) {
    for section in sections {
        buf.push_str(&format!("### {}\n\n", section.title));
        for question in section.questions {
            buf.push_str(&format!("- {}\n", question));
        }
        buf.push('\n');
    }
}

/// Render the effort/impact matrix, grouped by quadrant in reporting order
pub fn render_opportunity_matrix(opportunities: &[Opportunity]) -> String {
    let mut buf = String::new();

    buf.push_str("# AI Opportunity Matrix\n\n");
    buf.push_str("## Quick Reference\n\n");
    buf.push_str("| Quadrant | Effort | Impact | Action |\n");
    buf.push_str("|----------|--------|--------|--------|\n");
    buf.push_str("| 🎯 Quick Wins | Low | High | **Priority #1** - Start here |\n");
    buf.push_str("| 🚀 Big Swings | High | High | Long-term, high-ticket |\n");
    buf.push_str("| ✨ Nice-to-Haves | Low | Low | Add-on value |\n");
    buf.push_str("| ⏸️ Deprioritize | High | Low | Avoid |\n\n");
    buf.push_str("---\n\n");
    buf.push_str("## Identified Opportunities\n\n");

    if opportunities.is_empty() {
        buf.push_str("_No opportunities identified yet._\n");
        return buf;
    }

    for category in Category::ALL {
        let members: Vec<&Opportunity> = opportunities
            .iter()
            .filter(|o| o.category() == category)
            .collect();
        if members.is_empty() {
            continue;
        }

        buf.push_str(&format!(
            "### {} {} ({})\n\n",
            category.icon(),
            category.title(),
            category.quadrant()
        ));
        for opp in members {
            buf.push_str(&render_matrix_item(opp));
        }
    }

    buf
}

fn render_matrix_item(opp: &Opportunity) -> String {
    format!(
        "**{}**\n- {}\n- Hours saved: {}/week × {} employees\n- Effort: {} | Impact: {}\n\n",
        opp.name,
        opp.description,
        opp.hours_saved_weekly,
        opp.employees_affected,
        opp.effort.to_string().to_uppercase(),
        opp.impact.to_string().to_uppercase()
    )
}

/// Render the executive summary report
pub fn render_executive_report(
    project: &AuditProject,
    roi: &AuditRoi,
    author: &str,
    date: NaiveDate,
) -> String {
    let client = &project.client;
    let combined = &roi.combined;
    let quick_wins = project.opportunities_in(Category::QuickWin);
    let big_swings = project.opportunities_in(Category::BigSwing);

    let mut buf = String::new();

    buf.push_str("# AI Audit Report\n");
    buf.push_str(&format!("## {}\n\n", client.company_name));
    buf.push_str(&format!("**Prepared by**: {}\n", author));
    buf.push_str(&format!("**Date**: {}\n", date.format("%Y-%m-%d")));
    buf.push_str("**Engagement**: AI Opportunity Assessment\n\n");
    buf.push_str("---\n\n");

    buf.push_str("## Executive Summary\n\n");
    buf.push_str(&format!(
        "Following {} discovery interviews across {},\nwe identified **{} AI automation opportunities** with potential annual\nvalue of **{}**.\n\n",
        project.interviews_completed,
        client.company_name,
        project.opportunities.len(),
        format_currency(combined.total_annual_value)
    ));

    buf.push_str("### Key Findings\n\n");
    buf.push_str("| Metric | Value |\n");
    buf.push_str("|--------|-------|\n");
    buf.push_str(&format!(
        "| Total Opportunities Identified | {} |\n",
        project.opportunities.len()
    ));
    buf.push_str(&format!(
        "| Quick Wins (Start Immediately) | {} |\n",
        quick_wins.len()
    ));
    buf.push_str(&format!("| Strategic Initiatives | {} |\n", big_swings.len()));
    buf.push_str(&format!(
        "| Estimated Hours Saved Weekly | {:.0} |\n",
        combined.hours_saved_weekly
    ));
    buf.push_str(&format!(
        "| Annual Cost Savings | {} |\n",
        format_currency(combined.annual_savings)
    ));
    buf.push_str(&format!(
        "| Annual Revenue Potential | {} |\n",
        format_currency(combined.annual_revenue_potential)
    ));
    buf.push_str(&format!(
        "| **Total Annual Value** | **{}** |\n\n",
        format_currency(combined.total_annual_value)
    ));
    buf.push_str("---\n\n");

    buf.push_str("## Recommended Roadmap\n\n");
    buf.push_str("### Phase 1: Quick Wins (Weeks 1-4)\n\n");
    if quick_wins.is_empty() {
        buf.push_str("_No quick wins identified._\n\n");
    }
    for (i, opp) in quick_wins.iter().take(ROADMAP_ITEMS_PER_PHASE).enumerate() {
        buf.push_str(&render_roadmap_item(i + 1, opp, "1-2 weeks"));
    }

    if !big_swings.is_empty() {
        buf.push_str("### Phase 2: Strategic Initiatives (Months 2-6)\n\n");
        for (i, opp) in big_swings.iter().take(ROADMAP_ITEMS_PER_PHASE).enumerate() {
            buf.push_str(&render_roadmap_item(i + 1, opp, "4-8 weeks"));
        }
    }

    buf.push_str("---\n\n");
    buf.push_str("## ROI Analysis\n\n");
    buf.push_str("### Cost Savings Calculation\n\n");
    buf.push_str("```\n");
    buf.push_str(&format!(
        "Hours Saved/Week:     {:.0} hours\n",
        combined.hours_saved_weekly
    ));
    buf.push_str(&format!(
        "Average Hourly Rate:  ${:.2}\n",
        combined.hourly_rate
    ));
    buf.push_str(&format!(
        "Weekly Savings:       {}\n",
        format_currency(combined.weekly_savings)
    ));
    buf.push_str(&format!(
        "Annual Savings:       {}\n",
        format_currency(combined.annual_savings)
    ));
    buf.push_str("```\n\n");

    buf.push_str("### Revenue Potential\n\n");
    buf.push_str("Assuming part of the saved time is redirected to revenue-generating activities:\n\n");
    buf.push_str("```\n");
    buf.push_str(&format!(
        "Annual Revenue Potential: {}\n",
        format_currency(combined.annual_revenue_potential)
    ));
    buf.push_str("```\n\n");

    if !roi.by_category.is_empty() {
        buf.push_str("### Value by Quadrant\n\n");
        buf.push_str("| Quadrant | Hours Saved/Week | Annual Savings | Total Annual Value |\n");
        buf.push_str("|----------|------------------|----------------|--------------------|\n");
        for (category, result) in &roi.by_category {
            buf.push_str(&format!(
                "| {} | {:.0} | {} | {} |\n",
                category.title(),
                result.hours_saved_weekly,
                format_currency(result.annual_savings),
                format_currency(result.total_annual_value)
            ));
        }
        buf.push('\n');
    }

    buf.push_str("### Investment Summary\n\n");
    buf.push_str("| Metric | Value |\n");
    buf.push_str("|--------|-------|\n");
    buf.push_str(&format!(
        "| Estimated Implementation Cost | {} |\n",
        format_currency(combined.implementation_cost)
    ));
    buf.push_str(&format!(
        "| Payback Period | {} |\n",
        format_payback(combined.payback_months)
    ));
    buf.push_str(&format!(
        "| First Year ROI | {:.0}% |\n\n",
        combined.roi_percentage
    ));
    buf.push_str("---\n\n");

    buf.push_str("## Next Steps\n\n");
    buf.push_str("1. **Approve Phase 1 Quick Wins** - start with highest-impact, lowest-effort items\n");
    buf.push_str("2. **Schedule kickoff meeting** - align the team and set success metrics\n");
    buf.push_str("3. **Begin implementation** - target 2-4 week delivery for the first automation\n\n");
    buf.push_str("---\n\n");
    buf.push_str(&format!(
        "*Report generated by {} | AI Audit Framework*\n",
        author
    ));

    buf
}

fn render_roadmap_item(index: usize, opp: &Opportunity, implementation: &str) -> String {
    format!(
        "#### {}. {}\n\n- **Current State**: {}\n- **Time Impact**: {} hours/week × {} people\n- **Implementation**: {}\n\n",
        index,
        opp.name,
        opp.description,
        opp.hours_saved_weekly,
        opp.employees_affected,
        implementation
    )
}

/// Format whole dollars with thousands separators, e.g. `$65,100`
pub fn format_currency(amount: f64) -> String {
    let rounded = format!("{:.0}", amount.abs());
    let sign = if amount < 0.0 && rounded != "0" { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&rounded))
}

/// Payback in months, or "n/a" when nothing is saved
pub fn format_payback(months: f64) -> String {
    if months.is_finite() {
        format!("{:.1} months", months)
    } else {
        "n/a (no savings)".to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
