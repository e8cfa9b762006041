/// One top-level block of the source document, in source order.
///
/// Block tokens keep their original Markdown syntax (list markers, `>`
/// prefixes) so later stages can decide how to present them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// ATX heading. `text` is the raw inline source of the heading.
    Heading { depth: u8, text: String },
    Paragraph(String),
    List(String),
    BlockQuote(String),
}
