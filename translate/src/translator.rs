//! Rendering of prompt fragments from a parsed signature.
//!
//! Three blocks are produced: an example-input block, an input placeholder
//! block, and an output instruction block. The downstream reply parser
//! matches the model's answer against this text verbatim, so the emitted
//! bytes (placeholder keys, the two-space comment gap, the four-space schema
//! indent, the fence markers) are a wire contract, not presentation.

use crate::descriptor::ParsedFunction;
use crate::diagnostics::{DiagnosticSink, TracingSink};

/// Instruction sentence preceding the fenced output schema.
pub const FORMAT_INSTRUCTIONS: &str = "The output should be a markdown code snippet formatted in \
the following schema, including the leading and trailing '```json' and '```':";

/// Key under which an unnamed return value is requested from the model.
///
/// The downstream reply parser looks the model's answer up under this key,
/// so translator and parser must share one definition.
pub const RESULT_KEY: &str = "declarai_result";

/// Empty strings behave like missing values throughout the prompt grammar;
/// a parser that emits `Some("")` gets the undocumented rendering.
fn nonempty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Renders the prompt fragments for one wrapped function.
///
/// Holds the descriptor by shared reference for its lifetime; every
/// operation is a pure query over it, so a single translator may be shared
/// across threads.
///
/// ```
/// use translate::{FunctionTranslator, ParsedFunction};
///
/// let func = ParsedFunction::new("add")
///     .with_param("a", "int")
///     .with_param("b", "int")
///     .with_return_type("int");
///
/// let translator = FunctionTranslator::new(&func);
/// assert_eq!(translator.input_placeholder(), "Inputs:\na: {a}\nb: {b}\n");
/// ```
pub struct FunctionTranslator<'f> {
    func: &'f ParsedFunction,
    sink: Box<dyn DiagnosticSink>,
}

impl<'f> FunctionTranslator<'f> {
    /// Create a translator reporting diagnostics through `tracing`.
    pub fn new(func: &'f ParsedFunction) -> Self {
        Self::with_sink(func, Box::new(TracingSink))
    }

    /// Create a translator with a custom diagnostic sink.
    pub fn with_sink(func: &'f ParsedFunction, sink: Box<dyn DiagnosticSink>) -> Self {
        Self { func, sink }
    }

    /// Render example input values annotated with their parameter docs.
    ///
    /// One line per parameter, in declaration order. Documented parameters
    /// carry a trailing comment; undocumented ones end at the comma.
    pub fn input_example(&self) -> String {
        let mut prompt = String::new();
        for (param, rendered) in &self.func.params {
            match nonempty(self.func.param_docs.get(param)) {
                Some(doc) => prompt.push_str(&format!("{param}: {rendered},  # {doc}\n")),
                None => prompt.push_str(&format!("{param}: {rendered},\n")),
            }
        }
        prompt
    }

    /// Render the literal `Inputs:` block with one named substitution slot
    /// per parameter.
    ///
    /// The slots are left unfilled: a later formatting step outside this
    /// crate substitutes the runtime argument values by parameter name, so
    /// the keys emitted here must match the declared names exactly.
    pub fn input_placeholder(&self) -> String {
        let mut inputs = String::new();
        for (i, (param, _)) in self.func.params.iter().enumerate() {
            if i > 0 {
                inputs.push('\n');
            }
            inputs.push_str(&format!("{param}: {{{param}}}"));
        }
        format!("Inputs:\n{inputs}\n")
    }

    /// Whether the signature declares enough to request structured output.
    ///
    /// True iff a return name or return type is present. A return doc alone
    /// does not count: a bare description can only drive a completion-style
    /// answer, never a keyed JSON reply.
    pub fn has_output_spec(&self) -> bool {
        nonempty(self.func.return_name.as_ref()).is_some()
            || nonempty(self.func.return_type.as_ref()).is_some()
    }

    /// Render the instruction block telling the model how to format its
    /// reply, derived from the return metadata.
    ///
    /// Exactly one arm of the presence match applies. A doc-only signature
    /// short-circuits into a completion-style instruction with no fence;
    /// a signature with no return information at all yields an empty string
    /// after a single warning, and the caller decides whether to proceed
    /// without output instructions.
    pub fn output_instructions(&self) -> String {
        let doc = nonempty(self.func.return_doc.as_ref());
        let ty = nonempty(self.func.return_type.as_ref());
        let name = nonempty(self.func.return_name.as_ref());

        let output_schema = match (doc, ty, name) {
            (Some(doc), None, None) => return format!("{doc}:"),
            (None, Some(ty), None) => format!("{RESULT_KEY}: {ty}"),
            (None, None, Some(name)) => format!("{name}: "),
            (Some(doc), Some(ty), None) => format!("{RESULT_KEY}: {ty}  # {doc}"),
            (None, Some(ty), Some(name)) => format!("{name}: {ty}"),
            (Some(doc), None, Some(name)) => format!("{name}:  # {doc}"),
            (Some(doc), Some(ty), Some(name)) => format!("{name}: {ty}  # {doc}"),
            (None, None, None) => {
                self.sink.warning(&format!(
                    "no output schema for function '{}': declare at least one of return type, \
                     return doc, or return name",
                    self.func.name
                ));
                return String::new();
            }
        };

        format!("{FORMAT_INSTRUCTIONS}\n```json\n{{\n    {output_schema}\n}}\n```")
    }
}
