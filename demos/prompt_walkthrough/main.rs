//! Walk through every prompt fragment derived from one signature.
//!
//! Declares a small documented function the way an upstream parser would,
//! then prints the three blocks the runtime submits to the model: the
//! example inputs, the placeholder template, and the output instructions.

use declarai_rs::prelude::*;

fn main() {
    let func = ParsedFunction::new("suggest_title")
        .with_param("topic", "str")
        .with_param("tone", "str")
        .with_param_doc("topic", "subject the title should cover")
        .with_param_doc("tone", "writing tone, e.g. formal or playful")
        .with_return_name("title")
        .with_return_type("str")
        .with_return_doc("a title for the requested topic");

    let translator = FunctionTranslator::new(&func);

    println!("=== Example inputs ===");
    print!("{}", translator.input_example());

    println!("\n=== Input placeholder ===");
    print!("{}", translator.input_placeholder());

    println!("\n=== Output instructions ===");
    println!("{}", translator.output_instructions());
}
