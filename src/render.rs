//! Plain-text rendering of listings and panels.

use knowledgetrace_core::{Facets, Project, ProjectStatus, ScoredProject, StatusSummary};

const APPROVED: char = '●';
const PENDING: char = '○';
const DRAFT: char = '◇';
const REJECTED: char = '✗';
const OTHER: char = '?';

/// Get the status symbol for a project status.
fn status_symbol(status: &ProjectStatus) -> char {
    match status {
        ProjectStatus::Approved => APPROVED,
        ProjectStatus::Pending => PENDING,
        ProjectStatus::Draft => DRAFT,
        ProjectStatus::Rejected => REJECTED,
        ProjectStatus::Other(_) => OTHER,
    }
}

/// One line per project: status, title, year, then author, supervisor and
/// tech stack when known.
///
/// ```text
/// ● Campus Navigation App (2024) · Mai Tran · Dr. Nguyen · React Native, Node
/// ○ Library Seat Booking · Hoa Nguyen
/// ```
pub fn render_listing(projects: &[&Project]) -> String {
    let mut output = String::new();
    for project in projects {
        render_line(&mut output, project);
        output.push('\n');
    }
    output
}

/// Related projects with their relevance score.
pub fn render_related(scored: &[ScoredProject<'_>]) -> String {
    let mut output = String::new();
    for entry in scored {
        output.push_str(&format!("[{}] ", entry.score));
        render_line(&mut output, entry.project);
        output.push('\n');
    }
    output
}

pub fn render_facets(facets: &Facets, summary: &StatusSummary) -> String {
    let mut output = String::new();
    let sections = [
        ("Tech stack", &facets.tech_stack),
        ("Tags", &facets.tags),
        ("Supervisors", &facets.supervisors),
        ("Years", &facets.years),
    ];
    for (label, values) in sections {
        output.push_str(label);
        output.push_str(": ");
        output.push_str(&values.join(", "));
        output.push('\n');
    }
    output.push_str(&format!(
        "Status: {} {} approved, {} {} pending, {} {} draft, {} {} rejected, {} other ({} total)\n",
        APPROVED,
        summary.approved,
        PENDING,
        summary.pending,
        DRAFT,
        summary.draft,
        REJECTED,
        summary.rejected,
        summary.other,
        summary.total()
    ));
    output
}

fn render_line(output: &mut String, project: &Project) {
    output.push(status_symbol(&project.status));
    output.push(' ');
    output.push_str(&project.title);
    if let Some(year) = project.year_text() {
        output.push_str(&format!(" ({})", year));
    }

    let mut details: Vec<String> = Vec::new();
    details.extend(project.author.clone());
    details.extend(project.supervisor.clone());
    if !project.tech_stack.is_empty() {
        details.push(project.tech_stack.join(", "));
    }
    for detail in details {
        output.push_str(" · ");
        output.push_str(&detail);
    }
}
