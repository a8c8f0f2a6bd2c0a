//! Terminal rendering of a completed response.
//!
//! The output has three blocks: a summary panel (status, time, size), an
//! optional header table limited to a handful of useful headers, and the body
//! formatted according to its declared content type.

use crate::http::response::HttpResponse;

use super::highlight;
use super::style::{ACCENT, Palette, StatusClass};

/// Headers worth showing; everything else is dropped from the table.
const DISPLAYED_HEADERS: [&str; 6] = [
    "content-type",
    "content-length",
    "server",
    "date",
    "cache-control",
    "x-ratelimit-remaining",
];

const HTML_PREVIEW_LINES: usize = 10;
const XML_PREVIEW_CHARS: usize = 500;
const TEXT_PREVIEW_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Html,
    Xml,
    Text,
}

impl BodyKind {
    fn from_content_type(content_type: &str) -> Self {
        let content_type = content_type.to_ascii_lowercase();
        if content_type.contains("application/json") {
            BodyKind::Json
        } else if content_type.contains("text/html") {
            BodyKind::Html
        } else if content_type.contains("application/xml") || content_type.contains("text/xml") {
            BodyKind::Xml
        } else {
            BodyKind::Text
        }
    }
}

/// Reason phrase for the codes we label. Anything else gets an empty phrase.
pub fn status_text(status_code: u16) -> &'static str {
    match status_code {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
}

pub fn render(response: &HttpResponse<'_>, show_headers: bool, palette: Palette) -> String {
    let mut out = String::from("\n");

    push_summary(&mut out, response, palette);

    if show_headers && !response.headers().is_empty() {
        out.push('\n');
        push_line(&mut out, &palette.bold("Headers:"));
        push_headers(&mut out, response.headers(), palette);
    }

    out.push('\n');
    push_line(&mut out, &palette.bold("Body:"));
    push_body(&mut out, response, palette);
    out.push('\n');

    out
}

fn push_summary(out: &mut String, response: &HttpResponse<'_>, palette: Palette) {
    let color = StatusClass::of(response.status_code()).color();
    let request = response.request();
    let title = format!("Response - {} {}", request.method(), request.url());
    let status = format!(
        "{} {}",
        response.status_code(),
        status_text(response.status_code())
    );

    push_line(
        out,
        &format!("{} {} {}", palette.paint("╭─", color), palette.bold(&title), palette.paint("─", color)),
    );
    let rows = [
        (palette.paint("Status:", color), status.trim_end().to_string()),
        (palette.paint("Time:", ACCENT), format!("{}ms", response.elapsed_ms())),
        (palette.paint("Size:", ACCENT), format!("{} bytes", response.size_bytes())),
    ];
    for (label, value) in rows {
        push_line(out, &format!("{} {label} {value}", palette.paint("│", color)));
    }
    push_line(out, &palette.paint("╰─", color));
}

fn push_headers(out: &mut String, headers: &[(String, String)], palette: Palette) {
    let shown: Vec<&(String, String)> = headers
        .iter()
        .filter(|(name, _)| {
            DISPLAYED_HEADERS
                .iter()
                .any(|allowed| name.eq_ignore_ascii_case(allowed))
        })
        .collect();
    let width = shown.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);

    for (name, value) in shown {
        let padded = format!("{name:<width$}");
        push_line(out, &format!("{}  {value}", palette.paint(&padded, ACCENT)));
    }
}

fn push_body(out: &mut String, response: &HttpResponse<'_>, palette: Palette) {
    let body = response.body();
    let size = response.size_bytes();

    match BodyKind::from_content_type(response.content_type()) {
        BodyKind::Json => match pretty_json_body(body) {
            Some(pretty) => push_line(out, &highlight::json(&pretty, palette)),
            None => push_line(out, body),
        },
        BodyKind::Html => {
            let lines: Vec<&str> = body.split('\n').take(HTML_PREVIEW_LINES).collect();
            let mut preview = lines.join("\n");
            if lines.len() >= HTML_PREVIEW_LINES {
                preview.push_str("\n...");
            }
            push_line(out, &highlight::markup(&preview, palette));
            push_line(
                out,
                &palette.dim(&format!("(HTML response truncated, {size} bytes total)")),
            );
        }
        BodyKind::Xml => {
            push_line(out, &highlight::markup(truncate_chars(body, XML_PREVIEW_CHARS), palette));
            if body.chars().count() > XML_PREVIEW_CHARS {
                push_line(out, &palette.dim(&format!("(XML truncated, {size} bytes total)")));
            }
        }
        BodyKind::Text => {
            if body.chars().count() > TEXT_PREVIEW_CHARS {
                push_line(out, truncate_chars(body, TEXT_PREVIEW_CHARS));
                push_line(out, &palette.dim(&format!("... ({size} bytes total)")));
            } else {
                push_line(out, body);
            }
        }
    }
}

/// Re-indents a JSON document, or `None` if the body is not valid JSON.
fn pretty_json_body(raw: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(raw).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::display::style::strip_ansi;
    use crate::http::method::HttpMethod;
    use crate::http::request::HttpRequest;

    fn request(method: HttpMethod, url: &str) -> HttpRequest {
        HttpRequest::with_method(method, url, Vec::new(), None, 30).unwrap()
    }

    fn response<'r>(
        request: &'r HttpRequest,
        status: u16,
        content_type: &str,
        body: &str,
    ) -> HttpResponse<'r> {
        HttpResponse::new(
            status,
            vec![("content-type".to_string(), content_type.to_string())],
            body.to_string(),
            Duration::from_millis(42),
            request,
        )
    }

    fn body_block(rendered: &str) -> &str {
        let start = rendered.find("Body:\n").unwrap() + "Body:\n".len();
        &rendered[start..]
    }

    #[test]
    fn renders_not_found_json_example() {
        let request = request(HttpMethod::Delete, "https://api.example.com/users/5");
        let response = HttpResponse::new(
            404,
            vec![("content-type".into(), "application/json".into())],
            r#"{"error":"not found"}"#.into(),
            Duration::from_secs_f64(0.123),
            &request,
        );

        let rendered = render(&response, true, Palette::Plain);
        assert!(rendered.contains("Response - DELETE https://api.example.com/users/5"));
        assert!(rendered.contains("Status: 404 Not Found\n"));
        assert!(rendered.contains("Time: 123ms\n"));
        assert!(rendered.contains("Size: 21 bytes\n"));
        assert_eq!(body_block(&rendered), "{\n  \"error\": \"not found\"\n}\n\n");
    }

    #[test]
    fn json_keeps_key_order_and_unicode() {
        let request = request(HttpMethod::Get, "https://a.com");
        let response = response(&request, 200, "application/json; charset=utf-8", r#"{"z":1,"a":"ñandú"}"#);

        let rendered = render(&response, false, Palette::Plain);
        assert_eq!(body_block(&rendered), "{\n  \"z\": 1,\n  \"a\": \"ñandú\"\n}\n\n");
    }

    #[test]
    fn json_numbers_keep_their_exact_digits() {
        let request = request(HttpMethod::Get, "https://a.com");

        let big = response(&request, 200, "application/json", r#"{"id":12345678901234567890123}"#);
        let rendered = render(&big, false, Palette::Plain);
        assert_eq!(body_block(&rendered), "{\n  \"id\": 12345678901234567890123\n}\n\n");

        let huge = response(&request, 200, "application/json", r#"{"v":1e400}"#);
        let rendered = render(&huge, false, Palette::Plain);
        assert_eq!(body_block(&rendered), "{\n  \"v\": 1e400\n}\n\n");
    }

    #[test]
    fn invalid_json_falls_back_to_raw_body() {
        let request = request(HttpMethod::Get, "https://a.com");
        let raw = "{not json, \"x\":";
        let response = response(&request, 200, "application/json", raw);

        let rendered = render(&response, false, Palette::Plain);
        assert_eq!(body_block(&rendered), format!("{raw}\n\n"));
    }

    #[test]
    fn content_type_match_ignores_case() {
        let request = request(HttpMethod::Get, "https://a.com");
        let response = response(&request, 200, "Application/JSON", "[1,2]");

        let rendered = render(&response, false, Palette::Plain);
        assert_eq!(body_block(&rendered), "[\n  1,\n  2\n]\n\n");
    }

    #[test]
    fn header_block_shows_only_allowed_headers_in_order() {
        let request = request(HttpMethod::Get, "https://a.com");
        let headers = vec![
            ("Server".to_string(), "nginx".to_string()),
            ("Set-Cookie".to_string(), "secret=1".to_string()),
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("X-RateLimit-Remaining".to_string(), "59".to_string()),
            ("x-request-id".to_string(), "abc".to_string()),
        ];
        let response = HttpResponse::new(200, headers, "hi".into(), Duration::ZERO, &request);

        let rendered = render(&response, true, Palette::Plain);
        let server = rendered.find("Server").unwrap();
        let content_type = rendered.find("Content-Type").unwrap();
        let rate_limit = rendered.find("X-RateLimit-Remaining").unwrap();
        assert!(server < content_type && content_type < rate_limit);
        assert!(rendered.contains("nginx"));
        assert!(!rendered.contains("Set-Cookie"));
        assert!(!rendered.contains("secret=1"));
        assert!(!rendered.contains("x-request-id"));
    }

    #[test]
    fn header_block_hidden_when_disabled_or_empty() {
        let request = request(HttpMethod::Get, "https://a.com");
        let with_headers = response(&request, 200, "text/plain", "hi");
        assert!(!render(&with_headers, false, Palette::Plain).contains("Headers:"));

        let without_headers =
            HttpResponse::new(200, Vec::new(), "hi".into(), Duration::ZERO, &request);
        assert!(!render(&without_headers, true, Palette::Plain).contains("Headers:"));
        assert!(render(&with_headers, true, Palette::Plain).contains("Headers:"));
    }

    #[test]
    fn html_with_nine_lines_has_no_ellipsis() {
        let request = request(HttpMethod::Get, "https://a.com");
        let body = (1..=9).map(|i| format!("<p>{i}</p>")).collect::<Vec<_>>().join("\n");
        let response = response(&request, 200, "text/html", &body);

        let rendered = render(&response, false, Palette::Plain);
        let size = body.len();
        assert_eq!(
            body_block(&rendered),
            format!("{body}\n(HTML response truncated, {size} bytes total)\n\n")
        );
    }

    #[test]
    fn html_with_ten_or_more_lines_is_cut_with_ellipsis() {
        let request = request(HttpMethod::Get, "https://a.com");
        for count in [10, 25] {
            let body = (1..=count).map(|i| format!("<p>{i}</p>")).collect::<Vec<_>>().join("\n");
            let response = response(&request, 200, "text/html; charset=utf-8", &body);

            let rendered = render(&response, false, Palette::Plain);
            assert!(rendered.contains("<p>10</p>\n...\n"));
            assert!(!rendered.contains("<p>11</p>"));
            assert!(rendered.contains(&format!("({} bytes total)", body.len())));
        }
    }

    #[test]
    fn xml_is_cut_at_five_hundred_chars() {
        let request = request(HttpMethod::Get, "https://a.com");
        let short = format!("<a>{}</a>", "x".repeat(493));
        assert_eq!(short.chars().count(), 500);
        let rendered = render(&response(&request, 200, "application/xml", &short), false, Palette::Plain);
        assert_eq!(body_block(&rendered), format!("{short}\n\n"));

        let long = format!("<a>{}</a>", "é".repeat(600));
        let rendered = render(&response(&request, 200, "text/xml", &long), false, Palette::Plain);
        let expected: String = long.chars().take(500).collect();
        assert_eq!(
            body_block(&rendered),
            format!("{expected}\n(XML truncated, {} bytes total)\n\n", long.len())
        );
    }

    #[test]
    fn plain_text_at_limit_is_shown_whole() {
        let request = request(HttpMethod::Get, "https://a.com");
        let body = "a".repeat(1000);
        let rendered = render(&response(&request, 200, "text/plain", &body), false, Palette::Plain);
        assert_eq!(body_block(&rendered), format!("{body}\n\n"));
        assert!(!rendered.contains("bytes total"));
    }

    #[test]
    fn plain_text_over_limit_is_truncated() {
        let request = request(HttpMethod::Get, "https://a.com");
        let body = "a".repeat(1001);
        let rendered = render(&response(&request, 200, "text/plain", &body), false, Palette::Plain);
        assert_eq!(
            body_block(&rendered),
            format!("{}\n... (1001 bytes total)\n\n", "a".repeat(1000))
        );
    }

    #[test]
    fn plain_text_example_reports_full_size() {
        let request = request(HttpMethod::Get, "https://a.com");
        let body = "a".repeat(2000);
        let rendered = render(&response(&request, 200, "text/plain", &body), false, Palette::Plain);
        assert!(body_block(&rendered).starts_with(&format!("{}\n", "a".repeat(1000))));
        assert!(rendered.contains("... (2000 bytes total)"));
    }

    #[test]
    fn footnote_counts_bytes_not_chars() {
        let request = request(HttpMethod::Get, "https://a.com");
        let body = "ü".repeat(1001);
        let rendered = render(&response(&request, 200, "", &body), false, Palette::Plain);
        assert!(rendered.contains("... (2002 bytes total)"));
        assert!(rendered.contains("Size: 2002 bytes"));
    }

    #[test]
    fn unknown_status_has_blank_phrase() {
        let request = request(HttpMethod::Post, "https://a.com");
        let rendered = render(&response(&request, 422, "text/plain", ""), false, Palette::Plain);
        assert!(rendered.contains("Status: 422\n"));
        assert_eq!(status_text(429), "");
        assert_eq!(status_text(201), "Created");
    }

    #[test]
    fn colored_output_strips_back_to_plain() {
        let request = request(HttpMethod::Get, "https://a.com");
        let response = HttpResponse::new(
            503,
            vec![
                ("content-type".into(), "application/json".into()),
                ("server".into(), "edge".into()),
            ],
            r#"{"retry":true,"after":30}"#.into(),
            Duration::from_millis(7),
            &request,
        );

        let colored = render(&response, true, Palette::Colored);
        assert_ne!(colored, render(&response, true, Palette::Plain));
        assert_eq!(strip_ansi(&colored), render(&response, true, Palette::Plain));
    }
}
