//! Embed the derived fragments in a chat-completion request payload.
//!
//! Shows the shape the enclosing runtime produces: the docstring-derived
//! task instruction, the placeholder block (filled with runtime values by a
//! later step), and the output instructions, concatenated into one user
//! message.

use declarai_rs::prelude::*;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let func = ParsedFunction::new("extract_emails")
        .with_param("text", "str")
        .with_param_doc("text", "free text that may contain email addresses")
        .with_return_type("Vec<String>")
        .with_return_doc("the email addresses found in the text");

    let task_doc = "Extract every email address from the provided text.";

    let prompt = format!(
        "{task_doc}\n{}\n{}",
        input_placeholder(&func),
        output_instructions(&func),
    );

    let request = json!({
        "model": "gpt-4o",
        "messages": [
            { "role": "user", "content": prompt }
        ]
    });

    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}
