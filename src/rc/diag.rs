use core::fmt;

use miette::MietteSpanContents;

use super::file;

/// rc text, with an optional name for reporting (e.g. "publication.rc")
#[derive(Debug, Clone)]
pub struct Source {
    /// Name shown in the report header
    pub name: Option<String>,
    /// The rc text
    pub src: String,
}

impl miette::SourceCode for Source {
    fn read_span<'a>(
        &'a self,
        span: &miette::SourceSpan,
        context_lines_before: usize,
        context_lines_after: usize,
    ) -> Result<Box<dyn miette::SpanContents<'a> + 'a>, miette::MietteError> {
        let start = span.offset();
        let end = start + span.len();

        if start > self.src.len() || end > self.src.len() {
            return Err(miette::MietteError::OutOfBounds);
        }

        let content = <str as miette::SourceCode>::read_span(
            &self.src,
            span,
            context_lines_before,
            context_lines_after,
        )?;
        if let Some(name) = self.name.as_deref() {
            let content = MietteSpanContents::new_named(
                name.to_string(),
                content.data(),
                *content.span(),
                content.line(),
                content.column(),
                content.line_count(),
            );
            Ok(Box::new(content))
        } else {
            Ok(content)
        }
    }
}

/// An rc text error bundled with its source, for rendering with miette
#[derive(Debug)]
pub struct Diagnostic {
    err: file::Error,
    source: Source,
}

impl Diagnostic {
    /// Bundle an error with the text it was found in
    pub fn new(err: file::Error, source: Source) -> Self {
        Self { err, source }
    }

    /// The underlying error
    pub fn error(&self) -> &file::Error {
        &self.err
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)?;
        if let Some(help) = self.err.help() {
            write!(f, "\nHelp: {}", help)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

impl miette::Diagnostic for Diagnostic {
    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.err
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels<'a>(&'a self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + 'a>> {
        let (start, end) = self.err.span();
        let labeled_span =
            miette::LabeledSpan::new(Some(self.err.to_string()), start, end - start);
        Some(Box::new(std::iter::once(labeled_span)))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source as &dyn miette::SourceCode)
    }
}
