use ammonia::Builder;

/// Upper bound on cleaning passes before giving up on convergence.
const MAX_PASSES: usize = 8;

/// Clean user-supplied text for later rendering in HTML.
///
/// Allow-list based: unknown tags are dropped, `script`/`style` lose their
/// content too, event-handler attributes and `javascript:` URLs are removed.
///
/// A single pass is not stable: the HTML parser rebuilds misnested markup
/// differently once it has been serialized, and `pre` swallows a leading
/// newline on every parse. `pre` is therefore not allowed, and cleaning is
/// repeated until the output stops changing.
pub fn sanitize(raw: &str) -> String {
    let mut builder = Builder::default();
    builder.rm_tags(["pre"]);

    let mut current = builder.clean(raw).to_string();
    for _ in 1..MAX_PASSES {
        let next = builder.clean(&current).to_string();
        if next == current {
            break;
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "hello world",
        "a < b && c > d",
        "<script>alert(1)</script>",
        "<img src=x onerror=alert(1)>",
        "<b>bold</b> and <i>italic</i>",
        "<a href=\"javascript:alert(1)\">click</a>",
        "<a href=\"https://example.com\">link</a>",
        "<div onclick=\"steal()\">text</div>",
        "<iframe src=\"https://evil.example\"></iframe>after",
        "<style>body{}</style>plain",
        "5 &lt; 6 &amp; 7",
        "<pre>\n\ncode</pre>",
        "<li><img src=x onerror=1><select><li>--></a><div>",
        "<ul><li><a href=\"/x\"><li>nested</a></li></ul>",
        "<a href=\"/x\"><p>text</a></p>",
        "<table><li>cell<td>x</table>",
    ];

    #[test]
    fn script_tags_are_removed() {
        let out = sanitize("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(!out.contains("alert"));
    }

    #[test]
    fn event_handlers_are_stripped() {
        let out = sanitize("<img src=x onerror=alert(1)>");
        assert!(!out.contains("onerror"));
        assert!(out.contains("<img"));
    }

    #[test]
    fn javascript_urls_are_stripped() {
        let out = sanitize("<a href=\"javascript:alert(1)\">click</a>");
        assert!(!out.contains("javascript:"));
        assert!(out.contains("click"));
    }

    #[test]
    fn unknown_tags_are_dropped_not_escaped() {
        let out = sanitize("<iframe src=\"https://evil.example\"></iframe>after");
        assert!(!out.contains("iframe"));
        assert_eq!(out, "after");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(sanitize("hello world"), "hello world");
    }

    #[test]
    fn pre_blocks_are_stable() {
        let once = sanitize("<pre>\n\ncode</pre>");
        assert_eq!(sanitize(&once), once);
        assert!(once.contains("code"));
        assert!(!once.contains("<pre>"));
    }

    #[test]
    fn misnested_lists_are_stable() {
        let once = sanitize("<li><img src=x onerror=1><select><li>--></a><div>");
        assert_eq!(sanitize(&once), once);
        assert!(!once.contains("onerror"));
        assert!(!once.contains("select"));
    }

    #[test]
    fn sanitize_is_idempotent() {
        for s in SAMPLES {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once, "not a fixed point for {s:?}");
        }
    }
}
