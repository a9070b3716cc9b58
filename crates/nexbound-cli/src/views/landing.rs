//! Public landing page.

use colored::Colorize;

const FEATURES: [(&str, &str); 6] = [
    (
        "AI Email Writer",
        "Use advanced Gemini AI models to generate personalized, high-converting email copy in seconds.",
    ),
    (
        "Automated Follow-ups",
        "Set up multi-step sequences that automatically follow up with prospects who haven't replied.",
    ),
    (
        "Deep Analytics",
        "Track open rates, reply rates, and bounce rates to optimize your campaigns for maximum ROI.",
    ),
    (
        "Lead Management",
        "Organize your prospects with custom tags, statuses, and smart lists.",
    ),
    (
        "Email Deliverability",
        "Built-in warmup tools and DNS checks ensure your emails land in the primary inbox.",
    ),
    (
        "A/B Testing",
        "Test different subject lines and email bodies to see what resonates best with your audience.",
    ),
];

struct PricingTier {
    title: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    recommended: bool,
}

const PRICING: [PricingTier; 3] = [
    PricingTier {
        title: "Starter",
        price: "$29",
        features: &["1,000 emails/mo", "Basic Analytics", "1 Seat", "Email Support"],
        recommended: false,
    },
    PricingTier {
        title: "Growth",
        price: "$79",
        features: &[
            "Unlimited emails",
            "Advanced Analytics",
            "5 Seats",
            "AI Writer (Gemini)",
            "Priority Support",
        ],
        recommended: true,
    },
    PricingTier {
        title: "Enterprise",
        price: "$199",
        features: &[
            "Custom limits",
            "Dedicated Success Manager",
            "SSO",
            "API Access",
            "Custom Integrations",
        ],
        recommended: false,
    },
];

pub fn render() -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!(
            "  {} {}",
            "Scale your outreach".bold(),
            "without the chaos".bright_blue().bold()
        ),
        "  Automate your cold email campaigns, personalize at scale with Gemini AI, and book more meetings."
            .to_string(),
        "  The all-in-one platform for modern sales teams.".to_string(),
        format!("  {}", "Start for free: goto /login".bright_cyan()),
        String::new(),
        format!("  {}", "Everything you need to grow".bold()),
    ];

    for (title, description) in FEATURES {
        lines.push(format!("  * {}", title.bold()));
        lines.push(format!("    {}", description.bright_black()));
    }

    lines.push(String::new());
    lines.push(format!("  {}", "Simple, transparent pricing".bold()));
    for tier in &PRICING {
        let badge = if tier.recommended {
            format!(" {}", "MOST POPULAR".bright_blue())
        } else {
            String::new()
        };
        lines.push(format!("  {} {}/mo{}", tier.title.bold(), tier.price, badge));
        for feature in tier.features {
            lines.push(format!("    - {}", feature));
        }
    }
    lines
}
