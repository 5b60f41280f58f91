//! Text and HTML statement rendering.
//!
//! Renderers consume a computed [`Statement`]; they never recompute
//! charges. Line formats are byte-compatible with the statements the
//! billing system has always emitted, including the trailing space after
//! the credit count.

use crate::engine::Statement;
use crate::money::format_brl;
use std::fmt::Write;

/// Renders a statement as plain text.
///
/// One line per performance, then the total and the accumulated credits.
/// The returned string ends with a newline.
pub fn render_text(statement: &Statement) -> String {
    let mut out = format!("Fatura {}\n", statement.customer);
    for line in &statement.lines {
        let _ = writeln!(
            out,
            "  {}: {} ({} assentos)",
            line.play_name,
            format_brl(line.charge),
            line.audience
        );
    }
    let _ = writeln!(out, "Valor total: {}", format_brl(statement.total));
    let _ = writeln!(out, "Créditos acumulados: {} ", statement.credits);
    out
}

/// Renders a statement as an HTML document.
///
/// Same data as [`render_text`], wrapped in list markup. No trailing
/// newline after the closing tag.
pub fn render_html(statement: &Statement) -> String {
    let mut out = format!("<html>\n<p>Fatura {}</p>\n<ul>\n", statement.customer);
    for line in &statement.lines {
        let _ = writeln!(
            out,
            "<li> {}: {} ({} assentos) </li>",
            line.play_name,
            format_brl(line.charge),
            line.audience
        );
    }
    let _ = writeln!(out, "</ul>\n<p> Valor total: {} </p>", format_brl(statement.total));
    let _ = write!(out, "<p> Créditos acumulados: {} </p>\n</html>", statement.credits);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StatementLine;
    use crate::money::Cents;

    fn sample() -> Statement {
        Statement {
            customer: "BigCo".to_string(),
            lines: vec![
                StatementLine {
                    play_name: "Hamlet".to_string(),
                    charge: Cents::new(65_000),
                    audience: 55,
                },
                StatementLine {
                    play_name: "As You Like It".to_string(),
                    charge: Cents::new(58_000),
                    audience: 35,
                },
            ],
            total: Cents::new(123_000),
            credits: 37,
        }
    }

    #[test]
    fn test_render_text_exact_format() {
        let expected = "Fatura BigCo\n\
                        \x20 Hamlet: R$ 650,00 (55 assentos)\n\
                        \x20 As You Like It: R$ 580,00 (35 assentos)\n\
                        Valor total: R$ 1.230,00\n\
                        Créditos acumulados: 37 \n";

        assert_eq!(render_text(&sample()), expected);
    }

    #[test]
    fn test_render_html_exact_format() {
        let expected = "<html>\n\
                        <p>Fatura BigCo</p>\n\
                        <ul>\n\
                        <li> Hamlet: R$ 650,00 (55 assentos) </li>\n\
                        <li> As You Like It: R$ 580,00 (35 assentos) </li>\n\
                        </ul>\n\
                        <p> Valor total: R$ 1.230,00 </p>\n\
                        <p> Créditos acumulados: 37 </p>\n\
                        </html>";

        assert_eq!(render_html(&sample()), expected);
    }

    #[test]
    fn test_render_text_empty_invoice() {
        let statement = Statement {
            customer: "BigCo".to_string(),
            lines: vec![],
            total: Cents::ZERO,
            credits: 0,
        };

        let text = render_text(&statement);
        assert_eq!(
            text,
            "Fatura BigCo\nValor total: R$ 0,00\nCréditos acumulados: 0 \n"
        );
    }
}
