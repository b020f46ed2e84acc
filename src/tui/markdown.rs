//! Markdown → ratatui `Text` for the reader pane.
//!
//! Walks `pulldown_cmark` events and emits styled lines. Fenced code blocks
//! are highlighted with syntect when the language is known. Anything else
//! (HTML, footnotes, tables) is passed through as plain text or dropped.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme as SyntaxTheme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static SYNTAX_THEME: LazyLock<Option<SyntaxTheme>> = LazyLock::new(|| {
    ThemeSet::load_defaults()
        .themes
        .remove("base16-ocean.dark")
});

const CODE_STYLE: Style = Style::new().fg(Color::Yellow);
const MUTED: Style = Style::new().fg(Color::DarkGray);

/// Render markdown source into styled, owned text.
pub fn render(content: &str) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = Renderer::default();
    for event in Parser::new_ext(content, opts) {
        renderer.event(event);
    }
    renderer.finish()
}

/// Plain text, one `Line` per source line, no styling.
pub fn plain(content: &str) -> Text<'static> {
    Text::from(content.lines().map(|l| Line::from(l.to_string())).collect::<Vec<_>>())
}

#[derive(Default)]
struct Renderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    /// Inline styles, innermost last
    styles: Vec<Style>,
    /// `None` for bullets, `Some(n)` for the next number of an ordered list
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    code: Option<CodeBlock>,
    link: Option<String>,
    /// A blank line goes before the next block
    gap: bool,
}

struct CodeBlock {
    highlighter: Option<HighlightLines<'static>>,
}

impl Renderer {
    fn style(&self) -> Style {
        self.styles
            .iter()
            .fold(Style::default(), |acc, s| acc.patch(*s))
    }

    fn prefix(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for _ in 0..self.quote_depth {
            spans.push(Span::styled("│ ", MUTED));
        }
        if self.code.is_some() {
            spans.push(Span::styled("│ ", MUTED));
        }
        spans
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let mut spans = self.prefix();
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn start_block(&mut self) {
        self.flush();
        if self.gap && !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        self.gap = false;
    }

    fn push(&mut self, text: impl Into<String>) {
        let style = self.style();
        self.current.push(Span::styled(text.into(), style));
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(text) => {
                if self.code.is_some() {
                    self.code_text(&text);
                } else {
                    self.push(text.into_string());
                }
            }
            Event::Code(code) => self.current.push(Span::styled(code.into_string(), CODE_STYLE)),
            Event::SoftBreak => self.push(" "),
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.start_block();
                self.lines.push(Line::styled("─".repeat(40), MUTED));
                self.gap = true;
            }
            Event::TaskListMarker(done) => self.push(if done { "[x] " } else { "[ ] " }),
            Event::Html(html) => {
                self.push(html.trim_end_matches('\n').to_string());
                self.flush();
            }
            Event::InlineHtml(html) => self.push(html.into_string()),
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            // Inside a list item the text continues after the marker
            Tag::Paragraph if !self.lists.is_empty() => {}
            Tag::Paragraph => self.start_block(),
            Tag::Heading { level, .. } => {
                self.start_block();
                let style = heading_style(level);
                self.current
                    .push(Span::styled(format!("{} ", "#".repeat(level as usize)), style));
                self.styles.push(style);
            }
            Tag::BlockQuote(_) => {
                self.start_block();
                self.quote_depth += 1;
                self.styles.push(Style::new().add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(kind) => {
                self.start_block();
                let lang = match &kind {
                    CodeBlockKind::Fenced(lang) => lang.split_whitespace().next().unwrap_or(""),
                    CodeBlockKind::Indented => "",
                };
                self.lines.push(Line::styled(format!("╭── {lang}"), MUTED));
                self.code = Some(CodeBlock {
                    highlighter: highlighter_for(lang),
                });
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.start_block();
                } else {
                    self.flush();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.current
                    .push(Span::raw(format!("{}{}", "  ".repeat(depth), marker)));
            }
            Tag::Emphasis => self.styles.push(Style::new().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.styles.push(Style::new().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => self
                .styles
                .push(Style::new().add_modifier(Modifier::CROSSED_OUT)),
            Tag::Link { dest_url, .. } => {
                self.link = Some(dest_url.into_string());
                self.styles.push(
                    Style::new()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush();
                self.gap = true;
            }
            TagEnd::Heading(_) => {
                self.styles.pop();
                self.flush();
                self.gap = true;
            }
            TagEnd::BlockQuote(_) => {
                self.flush();
                self.styles.pop();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.gap = true;
            }
            TagEnd::CodeBlock => {
                self.flush();
                self.code = None;
                self.lines.push(Line::styled("╰──", MUTED));
                self.gap = true;
            }
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.gap = true;
                }
            }
            TagEnd::Item => self.flush(),
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.styles.pop();
            }
            TagEnd::Link => {
                self.styles.pop();
                if let Some(url) = self.link.take() {
                    self.current.push(Span::styled(format!(" ({url})"), MUTED));
                }
            }
            _ => {}
        }
        // Items inside tight lists have no paragraph, keep them together
        if !self.lists.is_empty() {
            self.gap = false;
        }
    }

    fn code_text(&mut self, text: &str) {
        for line in LinesWithEndings::from(text) {
            let spans = match self.code.as_mut().and_then(|c| c.highlighter.as_mut()) {
                Some(highlighter) => match highlighter.highlight_line(line, &SYNTAX_SET) {
                    Ok(ranges) => ranges
                        .into_iter()
                        .map(|(style, piece)| {
                            let fg = style.foreground;
                            Span::styled(
                                piece.trim_end_matches('\n').to_string(),
                                Style::new().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                            )
                        })
                        .collect(),
                    Err(e) => {
                        log::debug!("syntax highlighting failed: {}", e);
                        vec![Span::styled(line.trim_end_matches('\n').to_string(), CODE_STYLE)]
                    }
                },
                None => vec![Span::styled(line.trim_end_matches('\n').to_string(), CODE_STYLE)],
            };
            self.current = spans;
            // Keep blank code lines visible
            if self.current.is_empty() {
                self.current.push(Span::raw(""));
            }
            self.flush();
        }
    }

    fn finish(mut self) -> Text<'static> {
        self.flush();
        Text::from(self.lines)
    }
}

fn highlighter_for(lang: &str) -> Option<HighlightLines<'static>> {
    if lang.is_empty() {
        return None;
    }
    let syntax = SYNTAX_SET.find_syntax_by_token(lang)?;
    let theme = SYNTAX_THEME.as_ref()?;
    Some(HighlightLines::new(syntax, theme))
}

fn heading_style(level: HeadingLevel) -> Style {
    let style = Style::new().add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 => style.fg(Color::Magenta).add_modifier(Modifier::UNDERLINED),
        HeadingLevel::H2 => style.fg(Color::Magenta),
        HeadingLevel::H3 => style.fg(Color::Blue),
        _ => style.fg(Color::Blue).add_modifier(Modifier::ITALIC),
    }
}
