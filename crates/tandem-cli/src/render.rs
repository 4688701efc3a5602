//! Terminal rendering for raw response dumps and the final verdict.

use console::style;

use tandem_core::pipeline::StageRecord;
use tandem_types::verdict::Verdict;

/// Print each provider's raw payload, in call order.
pub fn dump_responses(responses: &[StageRecord]) {
    for record in responses {
        let body = serde_json::to_string_pretty(&record.raw)
            .unwrap_or_else(|_| record.raw.to_string());
        println!();
        println!(
            "  {} {} response",
            style("▸").bold(),
            style(record.provider.to_uppercase()).cyan()
        );
        println!("{}", style(body).dim());
    }
}

/// Print the human-readable verdict block.
pub fn print_verdict(verdict: &Verdict) {
    println!();
    match verdict {
        Verdict::Approved { review } => {
            println!(
                "  {} Reviewer approved the refactored code",
                style("✓").green().bold()
            );
            println!();
            println!("{review}");
        }
        Verdict::Rejected { refactor, review } => {
            println!(
                "  {} Reviewer did not approve the refactored code",
                style("✗").red().bold()
            );
            println!();
            println!("  {}", style("Architect's suggestion:").bold());
            println!("{refactor}");
            println!();
            println!("  {}", style("Reviewer's feedback:").bold());
            println!("{review}");
        }
        Verdict::NoResponse { refactor } => {
            println!(
                "  {} Reviewer returned no response; printing the architect's suggestion",
                style("!").yellow().bold()
            );
            println!();
            println!("{refactor}");
        }
    }
}
