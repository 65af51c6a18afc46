//! Lays out the transcript as chat bubbles.
//!
//! The primary participant's messages hug the right edge with the avatar on
//! the right; the secondary participant's messages hug the left edge. Every
//! bubble is pre-wrapped so the renderer and the scroll math agree on the
//! number of rows.

use ratatui::layout::Alignment;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::app::SessionContext;
use crate::core::constants::BUBBLE_MAX_WIDTH_PERCENT;
use crate::core::message::{Message, Participant};
use crate::core::text_wrapping::{TextWrapper, WrapConfig};
use crate::ui::theme::Theme;

/// Avatar badge plus the gap separating it from the bubble.
const AVATAR_GUTTER: usize = 4;
/// One cell of padding on each side of the bubble text.
const BUBBLE_PADDING: usize = 2;

/// Rows contributed by a single message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLineSpan {
    pub start: usize,
    pub len: usize,
}

#[derive(Clone, Debug, Default)]
pub struct MessageListLayout {
    pub lines: Vec<Line<'static>>,
    pub message_spans: Vec<MessageLineSpan>,
}

impl MessageListLayout {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn extend(&mut self, tail: MessageListLayout) {
        let offset = self.lines.len();
        self.lines.extend(tail.lines);
        self.message_spans
            .extend(tail.message_spans.into_iter().map(|span| MessageLineSpan {
                start: span.start + offset,
                len: span.len,
            }));
    }
}

/// Pre-wrapped transcript kept between frames.
///
/// The store only ever grows, so while the width holds only messages added
/// since the last frame are laid out. A width change rebuilds everything.
#[derive(Clone, Debug, Default)]
pub struct PrewrapCache {
    width: u16,
    messages_len: usize,
    layout: MessageListLayout,
}

impl PrewrapCache {
    pub fn layout(
        &mut self,
        messages: &[Message],
        session: &SessionContext,
        theme: &Theme,
        width: u16,
    ) -> &MessageListLayout {
        if self.width != width || self.messages_len > messages.len() {
            self.layout = layout_messages(messages, session, theme, width);
        } else if self.messages_len < messages.len() {
            let tail = layout_messages(&messages[self.messages_len..], session, theme, width);
            self.layout.extend(tail);
        }
        self.width = width;
        self.messages_len = messages.len();
        &self.layout
    }
}

pub fn layout_messages(
    messages: &[Message],
    session: &SessionContext,
    theme: &Theme,
    width: u16,
) -> MessageListLayout {
    let mut layout = MessageListLayout::default();
    let width = usize::from(width);
    if width == 0 {
        return layout;
    }

    let text_width = bubble_text_width(width);
    for message in messages {
        let start = layout.lines.len();
        let name = session.display_name(message.user);
        layout
            .lines
            .extend(message_lines(message, name, theme, text_width));
        layout.lines.push(Line::default());
        layout.message_spans.push(MessageLineSpan {
            start,
            len: layout.lines.len() - start,
        });
    }
    layout
}

fn bubble_text_width(width: usize) -> usize {
    let percent = usize::from(BUBBLE_MAX_WIDTH_PERCENT);
    let bubble_max = (width * percent / 100).min(width.saturating_sub(AVATAR_GUTTER));
    bubble_max.saturating_sub(BUBBLE_PADDING).max(1)
}

fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn message_lines(
    message: &Message,
    name: &str,
    theme: &Theme,
    text_width: usize,
) -> Vec<Line<'static>> {
    let bubble_style = match message.user {
        Participant::Primary => theme.primary_bubble_style,
        Participant::Secondary => theme.secondary_bubble_style,
    };
    let avatar_style = bubble_style.add_modifier(Modifier::BOLD);

    let wrapped = TextWrapper::wrap_lines(&message.text, &WrapConfig::new(text_width));
    let content_width = TextWrapper::max_line_width(&wrapped);
    let rows: Vec<Span<'static>> = wrapped
        .iter()
        .map(|row| Span::styled(pad_row(row, content_width), bubble_style))
        .collect();

    let avatar = Span::styled(format!(" {} ", avatar_initial(name)), avatar_style);
    let gutter = Span::raw(" ".repeat(AVATAR_GUTTER));
    let timestamp = Span::styled(message.timestamp.clone(), theme.timestamp_style);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    match message.user {
        Participant::Primary => {
            for (idx, row) in rows.into_iter().enumerate() {
                let trailer = if idx == 0 {
                    vec![Span::raw(" "), avatar.clone()]
                } else {
                    vec![gutter.clone()]
                };
                let mut spans = vec![row];
                spans.extend(trailer);
                lines.push(Line::from(spans).alignment(Alignment::Right));
            }
            lines.push(Line::from(vec![timestamp, gutter]).alignment(Alignment::Right));
        }
        Participant::Secondary => {
            for (idx, row) in rows.into_iter().enumerate() {
                let mut spans = if idx == 0 {
                    vec![avatar.clone(), Span::raw(" ")]
                } else {
                    vec![gutter.clone()]
                };
                spans.push(row);
                lines.push(Line::from(spans).alignment(Alignment::Left));
            }
            lines.push(Line::from(vec![gutter, timestamp]).alignment(Alignment::Left));
        }
    }
    lines
}

fn pad_row(row: &str, content_width: usize) -> String {
    let fill = content_width.saturating_sub(UnicodeWidthStr::width(row));
    format!(" {row}{} ", " ".repeat(fill))
}

/// Plain-text rendering of a line, used by tests and the bench.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionContext {
        SessionContext::default()
    }

    fn message(user: Participant, text: &str) -> Message {
        Message::new(user, text, "12:34:56")
    }

    #[test]
    fn empty_transcript_has_no_lines() {
        let layout = layout_messages(&[], &session(), &Theme::default_theme(), 80);
        assert_eq!(layout.line_count(), 0);
        assert!(layout.message_spans.is_empty());
    }

    #[test]
    fn primary_messages_are_right_aligned_with_avatar() {
        let layout = layout_messages(
            &[message(Participant::Primary, "hi")],
            &session(),
            &Theme::default_theme(),
            40,
        );

        // bubble row, timestamp row, spacer
        assert_eq!(layout.line_count(), 3);
        assert_eq!(layout.lines[0].alignment, Some(Alignment::Right));
        assert_eq!(line_text(&layout.lines[0]), " hi   U ");
        assert_eq!(line_text(&layout.lines[1]), "12:34:56    ");
        assert_eq!(line_text(&layout.lines[2]), "");
    }

    #[test]
    fn secondary_messages_are_left_aligned_with_avatar() {
        let layout = layout_messages(
            &[message(Participant::Secondary, "I agree with you.")],
            &session(),
            &Theme::default_theme(),
            80,
        );

        assert_eq!(layout.lines[0].alignment, Some(Alignment::Left));
        assert_eq!(line_text(&layout.lines[0]), " U   I agree with you. ");
        assert_eq!(line_text(&layout.lines[1]), "    12:34:56");
    }

    #[test]
    fn bubble_colors_follow_the_sender() {
        let theme = Theme::default_theme();
        let layout = layout_messages(
            &[
                message(Participant::Primary, "a"),
                message(Participant::Secondary, "b"),
            ],
            &session(),
            &theme,
            80,
        );
        let primary_row = &layout.lines[layout.message_spans[0].start];
        let secondary_row = &layout.lines[layout.message_spans[1].start];
        assert_eq!(primary_row.spans[0].style, theme.primary_bubble_style);
        assert_eq!(secondary_row.spans[2].style, theme.secondary_bubble_style);
    }

    #[test]
    fn long_text_wraps_within_seventy_percent() {
        let text = "What are your thoughts on this? Let's discuss this further.";
        let width = 30u16;
        let layout = layout_messages(
            &[message(Participant::Secondary, text)],
            &session(),
            &Theme::default_theme(),
            width,
        );

        let span = &layout.message_spans[0];
        assert!(span.len > 3, "expected wrapping, got {} rows", span.len);
        for line in &layout.lines[span.start..span.start + span.len] {
            assert!(line.width() <= usize::from(width));
        }
        // 70% of 30 is 21 cells for the bubble including padding.
        let bubble = &layout.lines[0].spans[2];
        assert!(bubble.width() <= 21);
    }

    #[test]
    fn spans_cover_every_line_in_order() {
        let messages: Vec<Message> = (0..4)
            .map(|i| {
                let user = if i % 2 == 0 {
                    Participant::Primary
                } else {
                    Participant::Secondary
                };
                message(user, &format!("message number {i}"))
            })
            .collect();
        let layout = layout_messages(&messages, &session(), &Theme::default_theme(), 24);

        let mut expected_start = 0;
        for span in &layout.message_spans {
            assert_eq!(span.start, expected_start);
            expected_start += span.len;
        }
        assert_eq!(expected_start, layout.line_count());
    }

    #[test]
    fn avatar_uses_first_character_of_display_name() {
        let session = SessionContext {
            secondary_name: "Zoë".into(),
            ..SessionContext::default()
        };
        let layout = layout_messages(
            &[message(Participant::Secondary, "hey")],
            &session,
            &Theme::default_theme(),
            80,
        );
        assert_eq!(layout.lines[0].spans[0].content, " Z ");
        assert_eq!(avatar_initial(""), "?");
    }

    #[test]
    fn cache_appends_new_messages_like_a_full_layout() {
        let theme = Theme::default_theme();
        let mut messages = vec![message(Participant::Primary, "first message")];
        let mut cache = PrewrapCache::default();
        assert_eq!(cache.layout(&messages, &session(), &theme, 60).line_count(), 3);

        messages.push(message(
            Participant::Secondary,
            "a reply that is long enough to wrap onto a second row",
        ));
        messages.push(message(Participant::Primary, "ok"));
        let cached = cache.layout(&messages, &session(), &theme, 60).clone();
        let full = layout_messages(&messages, &session(), &theme, 60);
        assert_eq!(cached.lines, full.lines);
        assert_eq!(cached.message_spans, full.message_spans);
    }

    #[test]
    fn cache_rebuilds_when_width_changes() {
        let theme = Theme::default_theme();
        let messages = vec![message(
            Participant::Secondary,
            "enough words here to wrap differently at each width",
        )];
        let mut cache = PrewrapCache::default();
        let wide = cache.layout(&messages, &session(), &theme, 120).line_count();
        let narrow = cache.layout(&messages, &session(), &theme, 30).line_count();
        assert!(narrow > wide);
        assert_eq!(
            narrow,
            layout_messages(&messages, &session(), &theme, 30).line_count()
        );
    }
}
