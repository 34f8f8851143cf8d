//! Extension points around the parser.
//!
//! A [`DeclarationHook`] sees each declaration while the parse is running;
//! [`Optimise`] stages rewrite the finished [`Stylesheet`]; a [`Print`]
//! implementation renders it. [`Pipeline`] strings the three together.

use crate::logging::targets;
use crate::model::Stylesheet;
use crate::parser::CssParser;

/// Where a declaration is about to be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationContext<'a> {
    /// Media context key, empty at top level.
    pub media: &'a str,
    pub selector: &'a str,
    pub property: &'a str,
}

/// Called for every finalized declaration before it is committed.
///
/// The hook may rewrite the value in place. It runs whether or not the
/// declaration ends up being kept.
pub trait DeclarationHook {
    fn on_declaration(&mut self, context: &DeclarationContext<'_>, value: &mut String);
}

/// Hook that leaves every value untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl DeclarationHook for NoopHook {
    fn on_declaration(&mut self, _context: &DeclarationContext<'_>, _value: &mut String) {}
}

impl<F> DeclarationHook for F
where
    F: FnMut(&DeclarationContext<'_>, &mut String),
{
    fn on_declaration(&mut self, context: &DeclarationContext<'_>, value: &mut String) {
        self(context, value)
    }
}

/// A pass over a finished stylesheet.
pub trait Optimise {
    /// Short name used in logs.
    fn name(&self) -> &str {
        "optimise"
    }

    fn optimise(&mut self, sheet: &mut Stylesheet);
}

/// Renders a stylesheet.
pub trait Print {
    type Output;

    fn print(&self, sheet: &Stylesheet) -> Self::Output;
}

/// Parser followed by an ordered list of optimiser stages.
pub struct Pipeline<'d> {
    parser: CssParser<'d>,
    stages: Vec<Box<dyn Optimise + Send + 'd>>,
}

impl<'d> Pipeline<'d> {
    pub fn new(parser: CssParser<'d>) -> Self {
        Self {
            parser,
            stages: Vec::new(),
        }
    }

    /// Append a stage; stages run in insertion order.
    pub fn with_stage(mut self, stage: impl Optimise + Send + 'd) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn parser(&self) -> &CssParser<'d> {
        &self.parser
    }

    /// Parse `css` and run every stage over the result.
    pub fn run(&mut self, css: &str) -> Stylesheet {
        let mut sheet = self.parser.parse(css);
        for stage in &mut self.stages {
            tracing::debug!(target: targets::PIPELINE, stage = stage.name(), "running stage");
            stage.optimise(&mut sheet);
        }
        sheet
    }

    /// [`run`](Self::run), then render with `printer`.
    pub fn run_and_print<P: Print>(&mut self, css: &str, printer: &P) -> P::Output {
        let sheet = self.run(css);
        printer.print(&sheet)
    }
}

impl std::fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stages: Vec<&str> = self.stages.iter().map(|s| s.name()).collect();
        f.debug_struct("Pipeline")
            .field("parser", &self.parser)
            .field("stages", &stages)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;

    struct Uppercase;

    impl Optimise for Uppercase {
        fn name(&self) -> &str {
            "uppercase"
        }

        fn optimise(&mut self, sheet: &mut Stylesheet) {
            let targets: Vec<(String, String)> = sheet
                .document
                .iter()
                .map(|(media, selector, _)| (media.to_string(), selector.to_string()))
                .collect();
            for (media, selector) in targets {
                if let Some(block) = sheet.document.block_mut(&media, &selector) {
                    let props: Vec<(String, String)> = block
                        .iter()
                        .map(|(p, v)| (p.to_string(), v.to_uppercase()))
                        .collect();
                    for (p, v) in props {
                        block.rewrite(&p, v);
                    }
                }
            }
        }
    }

    struct CountSelectors;

    impl Print for CountSelectors {
        type Output = usize;

        fn print(&self, sheet: &Stylesheet) -> usize {
            sheet.document.iter().count()
        }
    }

    #[test]
    fn stages_run_in_order() {
        let mut pipeline = Pipeline::new(CssParser::default()).with_stage(Uppercase);
        let sheet = pipeline.run("a{color:red}");
        assert_eq!(sheet.document.get("", "a", "color"), Some("RED"));
    }

    #[test]
    fn run_and_print_renders() {
        let mut pipeline = Pipeline::new(CssParser::new(ParseConfig::default()));
        assert_eq!(pipeline.run_and_print("a{color:red} b{margin:0}", &CountSelectors), 2);
    }

    #[test]
    fn closure_hook_rewrites_values() {
        let mut seen = Vec::new();
        let mut hook = |ctx: &DeclarationContext<'_>, value: &mut String| {
            seen.push(ctx.property.to_string());
            if ctx.property == "color" {
                *value = "#f00".to_string();
            }
        };
        let sheet = CssParser::default().parse_with("a{color:red;margin:0}", &mut hook);
        assert_eq!(sheet.document.get("", "a", "color"), Some("#f00"));
        assert_eq!(seen, vec!["color", "margin"]);
    }
}
