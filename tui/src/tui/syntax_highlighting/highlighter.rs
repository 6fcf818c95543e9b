// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::HighlighterConfig;
use crate::TuiColor;
use std::path::Path;

/// A run of text with optional colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub fg_color: Option<TuiColor>,
    pub bg_color: Option<TuiColor>,
}

impl StyledSpan {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg_color: None,
            bg_color: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    pub config: HighlighterConfig,
}

impl Highlighter {
    /// The language hint for `path`: its extension with a leading dot, or `""`.
    #[must_use]
    pub fn language_hint(path: &Path) -> String {
        path.extension()
            .map(|it| format!(".{}", it.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Split on single spaces. Runs of spaces give empty tokens, so that joining the
    /// tokens with `' '` gives back the line.
    #[must_use]
    pub fn tokenize(line: &str) -> Vec<&str> { line.split(' ').collect() }

    /// Color the reserved words among `tokens`. Adjacent plain text is merged into one
    /// span. Lines of unknown languages come back as a single plain span. When
    /// `focused`, every span gets the focused row background.
    #[must_use]
    pub fn render(
        &self,
        tokens: &[&str],
        language_hint: &str,
        focused: bool,
    ) -> Vec<StyledSpan> {
        let mut spans = self.color_keywords(tokens, language_hint);
        if focused {
            for span in &mut spans {
                span.bg_color = Some(self.config.focused_bg_color);
            }
        }
        spans
    }

    fn color_keywords(&self, tokens: &[&str], language_hint: &str) -> Vec<StyledSpan> {
        if !self.config.knows_language(language_hint) {
            return vec![StyledSpan::plain(tokens.join(" "))];
        }

        let mut spans: Vec<StyledSpan> = vec![];
        let mut plain = String::new();

        for (index, token) in tokens.iter().enumerate() {
            if index > 0 {
                plain.push(' ');
            }
            if self.config.is_reserved(language_hint, token) {
                if !plain.is_empty() {
                    spans.push(StyledSpan::plain(std::mem::take(&mut plain)));
                }
                spans.push(StyledSpan {
                    text: (*token).to_string(),
                    fg_color: Some(self.config.keyword_color),
                    bg_color: None,
                });
            } else {
                plain.push_str(token);
            }
        }

        if !plain.is_empty() {
            spans.push(StyledSpan::plain(plain));
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_FOCUSED_BG_COLOR, DEFAULT_KEYWORD_COLOR, assert_eq2};

    fn keyword(text: &str) -> StyledSpan {
        StyledSpan {
            text: text.into(),
            fg_color: Some(DEFAULT_KEYWORD_COLOR),
            bg_color: None,
        }
    }

    #[test]
    fn test_tokenize_keeps_every_space() {
        assert_eq2!(Highlighter::tokenize("a  b"), vec!["a", "", "b"]);
        assert_eq2!(Highlighter::tokenize(""), vec![""]);
        assert_eq2!(Highlighter::tokenize("a  b").join(" "), "a  b");
    }

    #[test]
    fn test_language_hint() {
        assert_eq2!(Highlighter::language_hint(Path::new("src/main.go")), ".go");
        assert_eq2!(Highlighter::language_hint(Path::new("Makefile")), "");
    }

    #[test]
    fn test_render_go_keywords() {
        let it = Highlighter::default();
        let line = "func main() { return x }";
        let spans = it.render(&Highlighter::tokenize(line), ".go", false);
        assert_eq2!(
            spans,
            vec![
                keyword("func"),
                StyledSpan::plain(" main() { "),
                keyword("return"),
                StyledSpan::plain(" x }"),
            ]
        );
        let text = spans.iter().map(|it| it.text.as_str()).collect::<String>();
        assert_eq2!(text, line);
    }

    #[test]
    fn test_render_unknown_language_is_plain() {
        let it = Highlighter::default();
        let spans = it.render(&Highlighter::tokenize("func main"), ".txt", false);
        assert_eq2!(spans, vec![StyledSpan::plain("func main")]);
    }

    #[test]
    fn test_render_keyword_only_line() {
        let it = Highlighter::default();
        let spans = it.render(&Highlighter::tokenize(" fn"), ".rs", false);
        assert_eq2!(spans, vec![StyledSpan::plain(" "), keyword("fn")]);
    }

    #[test]
    fn test_render_focused_sets_background() {
        let it = Highlighter::default();
        let spans = it.render(&Highlighter::tokenize("let x"), ".rs", true);
        assert_eq2!(spans.len(), 2);
        assert!(
            spans
                .iter()
                .all(|it| it.bg_color == Some(DEFAULT_FOCUSED_BG_COLOR))
        );
        assert_eq2!(spans[0].fg_color, Some(DEFAULT_KEYWORD_COLOR));
        assert_eq2!(spans[1].fg_color, None);
    }
}
