//! Markdown rendering of the finished trip plan.

use crate::models::TripPlan;

/// Render a plan as markdown: a short photo gallery followed by the advice.
///
/// Tolerates galleries shorter than three images, including none at all.
pub fn render_plan(plan: &TripPlan) -> String {
    let mut out = String::new();

    if !plan.image_urls.is_empty() {
        out.push_str(&format!("## Views of {}\n\n", plan.destination));
        for (i, url) in plan.image_urls.iter().enumerate() {
            out.push_str(&format!("![View {}]({})\n", i + 1, url));
        }
        out.push('\n');
    }

    out.push_str("## Travel recommendations\n\n");
    out.push_str(plan.advice.trim_end());
    out.push('\n');
    out
}
