//! Template-driven event formatter.
//!
//! Templates use `{time}`, `{target}`, `{level}` and `{message}`
//! placeholders, with `{{` and `}}` for literal braces.

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use yansi::Paint;

use crate::error::LoggingError;

pub const DEFAULT_TEMPLATE: &str = "{time} - {target} - {level} - {message}";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Time,
    Target,
    Level,
    Message,
}

/// A parsed log line template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, LoggingError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            match ch {
                '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        name.push(inner);
                    }
                    if !closed {
                        return Err(template_error(position, "unclosed '{'"));
                    }
                    let segment = match name.as_str() {
                        "time" => Segment::Time,
                        "target" => Segment::Target,
                        "level" => Segment::Level,
                        "message" => Segment::Message,
                        other => {
                            return Err(template_error(
                                position,
                                format!("unknown placeholder '{{{other}}}'"),
                            ));
                        }
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                '}' => return Err(template_error(position, "unmatched '}'")),
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }
}

impl Default for Template {
    /// The layout of [`DEFAULT_TEMPLATE`].
    fn default() -> Self {
        let sep = || Segment::Literal(" - ".to_owned());
        Self {
            segments: vec![
                Segment::Time,
                sep(),
                Segment::Target,
                sep(),
                Segment::Level,
                sep(),
                Segment::Message,
            ],
        }
    }
}

fn template_error(position: usize, reason: impl Into<String>) -> LoggingError {
    LoggingError::Template {
        position,
        reason: reason.into(),
    }
}

/// Human-readable formatter that lays events out according to a [`Template`].
///
/// The level is coloured when the writer accepts ANSI escapes.
#[derive(Debug, Clone, Default)]
pub struct TemplateFormatter {
    template: Template,
}

impl TemplateFormatter {
    pub fn new(template: Template) -> Self {
        Self { template }
    }
}

impl<S, N> FormatEvent<S, N> for TemplateFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        for segment in &self.template.segments {
            match segment {
                Segment::Literal(text) => writer.write_str(text)?,
                Segment::Time => {
                    write!(writer, "{}", chrono::Local::now().format(TIME_FORMAT))?;
                }
                Segment::Target => writer.write_str(meta.target())?,
                Segment::Level => write_level(&mut writer, *meta.level(), ansi)?,
                Segment::Message => ctx.format_fields(writer.by_ref(), event)?,
            }
        }
        writeln!(writer)
    }
}

fn write_level(writer: &mut Writer<'_>, level: Level, ansi: bool) -> fmt::Result {
    let name = level.as_str();
    if !ansi {
        return writer.write_str(name);
    }
    let painted = match level {
        Level::ERROR => name.red().bold(),
        Level::WARN => name.yellow().bold(),
        Level::INFO => name.green(),
        Level::DEBUG => name.blue(),
        Level::TRACE => name.magenta(),
    };
    write!(writer, "{painted}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_template() {
        let template = Template::parse(DEFAULT_TEMPLATE).unwrap();
        assert_eq!(
            template.segments,
            vec![
                Segment::Time,
                Segment::Literal(" - ".to_owned()),
                Segment::Target,
                Segment::Literal(" - ".to_owned()),
                Segment::Level,
                Segment::Literal(" - ".to_owned()),
                Segment::Message,
            ]
        );
    }

    #[test]
    fn test_parse_escaped_braces() {
        let template = Template::parse("{{{level}}} {message}").unwrap();
        assert_eq!(
            template.segments,
            vec![
                Segment::Literal("{".to_owned()),
                Segment::Level,
                Segment::Literal("} ".to_owned()),
                Segment::Message,
            ]
        );
    }

    #[test]
    fn test_parse_literal_only() {
        let template = Template::parse("plain").unwrap();
        assert_eq!(template.segments, vec![Segment::Literal("plain".to_owned())]);
    }

    #[test]
    fn test_parse_unknown_placeholder() {
        let err = Template::parse("{time} {asctime}").unwrap_err();
        match err {
            LoggingError::Template { position, reason } => {
                assert_eq!(position, 7);
                assert!(reason.contains("asctime"), "reason was {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_unclosed_and_unmatched() {
        assert!(matches!(
            Template::parse("{message"),
            Err(LoggingError::Template { position: 0, .. })
        ));
        assert!(matches!(
            Template::parse("oops } {message}"),
            Err(LoggingError::Template { position: 5, .. })
        ));
    }

    #[test]
    fn test_default_template_matches_constant() {
        assert_eq!(Template::default(), Template::parse(DEFAULT_TEMPLATE).unwrap());
    }
}
