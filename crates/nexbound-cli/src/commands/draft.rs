use anyhow::Result;
use clap::Args;
use nexbound_core::draft::{DraftFormFields, DraftingService, Tone};

#[derive(Args, Debug)]
pub struct DraftArgs {
    /// Name or role of the recipient
    #[arg(long)]
    pub recipient: String,
    /// Company the recipient works for
    #[arg(long)]
    pub company: String,
    /// Main point of the email
    #[arg(long = "value-prop")]
    pub value_prop: String,
    /// professional, casual or persuasive
    #[arg(long, default_value_t = Tone::Professional)]
    pub tone: Tone,
}

/// Generates a single draft and prints it to stdout.
pub async fn run(drafter: &dyn DraftingService, args: DraftArgs) -> Result<()> {
    let request = DraftFormFields::new(args.recipient, args.company, args.value_prop, args.tone);
    request.validate()?;

    tracing::debug!("[Drafting] One-shot draft (tone: {})", request.tone);
    let draft = drafter.generate_draft(&request).await;
    println!("{draft}");
    Ok(())
}
