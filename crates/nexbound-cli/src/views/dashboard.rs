//! Dashboard view: stats, campaigns and the AI writer.

use colored::Colorize;
use nexbound_application::{AppState, DashboardData, DashboardState};
use nexbound_core::campaign::{ActivityPoint, Campaign, CampaignStatus, DashboardStats};
use nexbound_core::draft::DraftForm;
use nexbound_core::view::ActiveTab;
use strum::IntoEnumIterator;

const BAR_WIDTH: u32 = 30;

pub fn render(state: &AppState) -> Vec<String> {
    let Some(dashboard) = state.dashboard() else {
        return vec![format!("  {}", "Redirecting...".bright_black())];
    };

    let mut lines = vec![String::new(), tab_bar(dashboard.view().active_tab())];
    match dashboard.data() {
        DashboardData::Loading => {
            lines.push(format!("  {}", "Loading dashboard...".yellow()));
            return lines;
        }
        DashboardData::Failed { message } => {
            lines.push(format!("  {}", "Failed to fetch dashboard data".red().bold()));
            lines.push(format!("  {}", message.red()));
            lines.push(format!("  {}", "Type `reload` to try again.".bright_black()));
            return lines;
        }
        DashboardData::Ready { .. } => {}
    }

    lines.extend(render_tab(dashboard));
    lines
}

fn render_tab(dashboard: &DashboardState) -> Vec<String> {
    let view = dashboard.view();
    match (view.active_tab(), dashboard.data()) {
        (ActiveTab::Overview, DashboardData::Ready { stats, activity, .. }) => {
            overview(stats, activity)
        }
        (ActiveTab::Campaigns, DashboardData::Ready { campaigns, .. }) => {
            campaign_table(campaigns)
        }
        (ActiveTab::AiWriter, _) => writer(view.draft()),
        _ => Vec::new(),
    }
}

fn tab_bar(active: ActiveTab) -> String {
    let tabs: Vec<String> = ActiveTab::iter()
        .map(|tab| {
            if tab == active {
                format!("[{}]", tab.title()).bright_blue().bold().to_string()
            } else {
                format!(" {} ", tab.title()).bright_black().to_string()
            }
        })
        .collect();
    format!("  {}", tabs.join(" "))
}

fn overview(stats: &DashboardStats, activity: &[ActivityPoint]) -> Vec<String> {
    let mut lines = vec![
        format!("  {}", "Dashboard Overview".bold()),
        format!(
            "  Total Sent: {}   Open Rate: {}%   Reply Rate: {}%   Active Leads: {}",
            stats.total_sent, stats.avg_open_rate, stats.avg_reply_rate, stats.active_leads
        ),
        String::new(),
        format!("  {}", "Weekly Activity".bold()),
    ];

    let max = activity.iter().map(|point| point.sent).max().unwrap_or(0);
    for point in activity {
        lines.push(format!(
            "  {:<4}{} {} sent / {} opened / {} replied",
            point.day,
            bar(point.sent, max),
            point.sent,
            point.opened,
            point.replied
        ));
    }
    lines
}

fn bar(value: u32, max: u32) -> String {
    let width = if max == 0 {
        0
    } else {
        let width = (u64::from(value) * u64::from(BAR_WIDTH)).div_ceil(u64::from(max));
        u32::try_from(width).map_or(BAR_WIDTH, |width| width.min(BAR_WIDTH))
    };
    let filled = "#".repeat(width as usize);
    let padding = " ".repeat((BAR_WIDTH - width) as usize);
    format!("{}{}", filled.bright_blue(), padding)
}

fn campaign_table(campaigns: &[Campaign]) -> Vec<String> {
    let mut lines = vec![
        format!("  {}", "Active Campaigns".bold()),
        format!(
            "  {:<6} {:<24} {:<10} {:>6} {:>10} {:>10}",
            "ID", "Name", "Status", "Sent", "Open %", "Replied"
        ),
    ];
    for campaign in campaigns {
        let status = format!("{:<10}", campaign.status.label());
        let status = match campaign.status {
            CampaignStatus::Active => status.green(),
            CampaignStatus::Paused => status.yellow(),
            CampaignStatus::Completed => status.bright_black(),
        };
        lines.push(format!(
            "  {:<6} {:<24} {} {:>6} {:>9}% {:>6} ({}%)",
            campaign.id,
            campaign.name,
            status,
            campaign.sent,
            campaign.open_rate(),
            campaign.replied,
            campaign.reply_rate()
        ));
    }
    lines.push(format!(
        "  {}",
        "Type `edit <id>` to open a campaign in the AI writer.".bright_black()
    ));
    lines
}

fn writer(draft: &DraftForm) -> Vec<String> {
    let fields = draft.fields();
    let shown = |value: &str, placeholder: &str| -> String {
        if value.is_empty() {
            placeholder.bright_black().to_string()
        } else {
            value.to_string()
        }
    };

    let mut lines = vec![
        format!("  {}", "AI Email Drafter".bold()),
        format!(
            "  {}",
            "Generate high-converting sales emails powered by Gemini.".bright_black()
        ),
        format!(
            "  Recipient Name:    {}",
            shown(&fields.recipient_name, "e.g. John Doe")
        ),
        format!(
            "  Company Name:      {}",
            shown(&fields.company_name, "e.g. Acme Corp")
        ),
        format!(
            "  Value Proposition: {}",
            shown(
                &fields.value_proposition,
                "We help companies scale their outreach..."
            )
        ),
        format!("  Tone:              {}", fields.tone),
        String::new(),
        format!("  {}", "Generated Draft".bold()),
    ];

    if draft.is_generating() {
        lines.push(format!("  {}", "Generating...".yellow()));
    } else if draft.has_draft() {
        lines.extend(draft.generated_draft().lines().map(|line| format!("  | {line}")));
    } else {
        lines.push(format!(
            "  {}",
            "Your AI-generated email will appear here...".bright_black()
        ));
    }
    lines
}
