//! Canned records served by the mock backend.

use nexbound_core::campaign::{ActivityPoint, Campaign, CampaignStatus, DashboardStats};
use nexbound_core::draft::{DraftFormFields, Tone};
use nexbound_core::user::UserProfile;

pub fn mock_user() -> UserProfile {
    UserProfile::new(
        "u_123",
        "Alex Growth",
        "alex@nexbound.clone",
        "https://picsum.photos/200",
    )
}

pub fn mock_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "c_1".to_string(),
            name: "Q4 Outreach - CEOs".to_string(),
            status: CampaignStatus::Active,
            sent: 1240,
            opened: 850,
            replied: 120,
            draft_config: Some(DraftFormFields::new(
                "{FirstName}",
                "{CompanyName}",
                "We help enterprise CEOs reduce operational overhead by 20% within 90 days using our proprietary AI automation framework.",
                Tone::Professional,
            )),
            saved_draft: Some(
                "Subject: Reducing {CompanyName}'s operational overhead\n\n\
                 Hi {FirstName},\n\n\
                 I've been following {CompanyName}'s recent growth trajectory with interest. As you scale, operational efficiency often becomes the primary bottleneck.\n\n\
                 At Nexbound, we specialize in helping enterprise CEOs reduce operational overhead by 20% within just 90 days. Our AI automation framework is designed to integrate seamlessly with your existing stack.\n\n\
                 Are you open to a brief 15-minute conversation next week to explore if this could work for you?\n\n\
                 Best regards,\nAlex Growth"
                    .to_string(),
            ),
        },
        Campaign {
            id: "c_2".to_string(),
            name: "Webinar Invites".to_string(),
            status: CampaignStatus::Paused,
            sent: 500,
            opened: 200,
            replied: 15,
            draft_config: Some(DraftFormFields::new(
                "Marketing Leader",
                "Tech Startups",
                "Join our exclusive masterclass on B2B lead generation strategies for 2025.",
                Tone::Casual,
            )),
            saved_draft: Some(
                "Subject: You're invited: 2025 Lead Gen Masterclass \u{1F680}\n\n\
                 Hey there,\n\n\
                 Hope you're having a great week! We're hosting an exclusive masterclass on the future of B2B lead gen next Tuesday, and I thought it would be right up your alley.\n\n\
                 We'll be covering strategies to dominate 2025. It's free, fun, and packed with value.\n\n\
                 Want me to save you a seat?\n\n\
                 Cheers,\nAlex"
                    .to_string(),
            ),
        },
        Campaign {
            id: "c_3".to_string(),
            name: "Partnership Inquiry".to_string(),
            status: CampaignStatus::Completed,
            sent: 100,
            opened: 95,
            replied: 45,
            draft_config: Some(DraftFormFields::new(
                "Partner Manager",
                "SaaS Platforms",
                "Strategic partnership to cross-sell our AI tools to your CRM user base.",
                Tone::Persuasive,
            )),
            saved_draft: Some(
                "Subject: Strategic partnership opportunity with Nexbound\n\n\
                 Hello,\n\n\
                 I believe there is a significant synergy between our user bases. Your CRM users are constantly looking for better outreach tools, and our AI platform delivers exactly that.\n\n\
                 A partnership could drive significant recurring revenue for both of us while adding massive value to your ecosystem.\n\n\
                 Let's chat about how we can make this a win-win.\n\n\
                 Best,\nAlex Growth"
                    .to_string(),
            ),
        },
    ]
}

pub fn mock_stats() -> DashboardStats {
    DashboardStats {
        total_sent: 1840,
        avg_open_rate: 62,
        avg_reply_rate: 12,
        active_leads: 450,
    }
}

pub fn weekly_activity() -> Vec<ActivityPoint> {
    [
        ("Mon", 400, 240, 40),
        ("Tue", 300, 139, 20),
        ("Wed", 500, 380, 50),
        ("Thu", 280, 190, 30),
        ("Fri", 390, 280, 45),
        ("Sat", 100, 50, 10),
        ("Sun", 80, 40, 5),
    ]
    .into_iter()
    .map(|(day, sent, opened, replied)| ActivityPoint {
        day: day.to_string(),
        sent,
        opened,
        replied,
    })
    .collect()
}
