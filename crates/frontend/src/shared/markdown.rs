//! Markdown → sanitized HTML for bot answers.
//!
//! Every string that ends up in `inner_html` goes through [`render_markdown`].

use pulldown_cmark::{html, Event, Options, Parser};

/// Renders CommonMark and strips anything outside ammonia's allow-list.
///
/// Single newlines become `<br>`. Strikethrough and tables stay disabled,
/// so `~` in answers (ranges like `9시~18시`) is kept literally.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });
    let mut unsafe_html = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut unsafe_html, parser);
    ammonia::clean(&unsafe_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render_markdown("**민원실** 위치\n\n- 1층");
        assert!(html.contains("<strong>민원실</strong>"));
        assert!(html.contains("<li>1층</li>"));
    }

    #[test]
    fn test_soft_break_is_hard() {
        assert!(render_markdown("첫째 줄\n둘째 줄").contains("<br"));
    }

    #[test]
    fn test_strikethrough_disabled() {
        assert!(render_markdown("운영 시간 9시~~18시").contains("~~"));
    }

    #[test]
    fn test_script_removed() {
        let html = render_markdown("hello <script>alert(1)</script><img src=x onerror=alert(1)>");
        assert!(!html.contains("<script"));
        assert!(!html.contains("onerror"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_javascript_link_removed() {
        let html = render_markdown("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
    }
}
