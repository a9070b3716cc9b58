//! Instruction prompt for the AI email writer.

use minijinja::{Environment, context};
use nexbound_core::draft::DraftFormFields;

const TEMPLATE_NAME: &str = "cold_email.txt";

const COLD_EMAIL_TEMPLATE: &str = r#"You are an expert sales copywriter. Write a cold outreach email with the following parameters:

Recipient Name: {{ recipient_name }}
Company Name: {{ company_name }}
Value Proposition: {{ value_proposition }}
Tone: {{ tone }}

Keep it concise (under {{ max_words }} words). Use a compelling subject line.
Return ONLY the email content, starting with the Subject Line."#;

pub const MAX_WORDS: u32 = 150;

/// Renders the prompt embedding all four draft fields verbatim.
pub fn build_draft_prompt(request: &DraftFormFields) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, COLD_EMAIL_TEMPLATE)?;
    env.get_template(TEMPLATE_NAME)?.render(context! {
        recipient_name => request.recipient_name,
        company_name => request.company_name,
        value_proposition => request.value_proposition,
        tone => request.tone.as_ref(),
        max_words => MAX_WORDS,
    })
}
