use contentfmt_engine::migrate::{ContentRecord, MigrationOutcome, migrate_record};
use contentfmt_engine::{
    Block, BulletList, ConvertError, ConvertOptions, Dialect, Document, Heading, Image, Paragraph,
    convert, convert_with,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

const INTRO: &str = "## Giới thiệu

Đây là đoạn văn đầu tiên.
Đây là dòng thứ hai của đoạn văn.

- Điểm một
- Điểm hai
";

#[test]
fn vietnamese_intro_end_to_end() {
    let out = convert(INTRO, Dialect::Markdown).unwrap();

    assert_eq!(
        out.document.children,
        vec![
            Block::Heading(Heading::new(2, "Giới thiệu")),
            Block::Paragraph(Paragraph::from_text(
                "Đây là đoạn văn đầu tiên. Đây là dòng thứ hai của đoạn văn."
            )),
            Block::BulletList(BulletList::from_texts(["Điểm một", "Điểm hai"])),
        ]
    );
    assert_eq!(
        out.html,
        "<h2>Giới thiệu</h2>\n\
         <p>Đây là đoạn văn đầu tiên. Đây là dòng thứ hai của đoạn văn.</p>\n\
         <ul><li>Điểm một</li><li>Điểm hai</li></ul>"
    );
}

#[test]
fn windows_line_endings_convert_the_same() {
    let crlf = INTRO.replace('\n', "\r\n");
    assert_eq!(
        convert(crlf.as_str(), Dialect::Markdown).unwrap(),
        convert(INTRO, Dialect::Markdown).unwrap()
    );
}

#[rstest]
#[case::empty(Document::empty())]
#[case::converted(convert(INTRO, Dialect::Markdown).unwrap().document)]
#[case::with_image(Document::new(vec![
    Block::Heading(Heading::new(1, "About Me")),
    Block::Image(Image::new("/img/lieu/lieu-1.jpeg", "About").with_title("About")),
    Block::Paragraph(Paragraph::default()),
]))]
#[case::unknown_nodes(Document::new(vec![Block::Unknown(json!({ "type": "blockquote" }))]))]
fn converting_a_document_never_changes_it(#[case] doc: Document, #[values(Dialect::Plain, Dialect::Markdown)] dialect: Dialect) {
    let out = convert(doc.clone(), dialect).unwrap();
    assert_eq!(out.document, doc);

    let from_json = convert(doc.to_json(), dialect).unwrap();
    assert_eq!(from_json.document, doc);
    assert_eq!(from_json.html, out.html);
}

fn doc(content: Value) -> Value {
    json!({ "type": "doc", "content": [content] })
}

fn para(text: &str) -> Value {
    json!({ "type": "paragraph", "content": [{ "type": "text", "text": text }] })
}

#[rstest]
#[case::heading_with_marks(
    doc(json!({
        "type": "heading",
        "attrs": { "level": 2 },
        "content": [
            { "type": "text", "text": "Bold", "marks": [{ "type": "bold" }] },
            { "type": "text", "text": " link", "marks": [{ "type": "link", "attrs": { "href": "/x" } }] },
        ],
    })),
    "<h2>Bold link</h2>"
)]
#[case::nested_list(
    doc(json!({
        "type": "bulletList",
        "content": [{
            "type": "listItem",
            "content": [
                para("parent"),
                {
                    "type": "bulletList",
                    "content": [{ "type": "listItem", "content": [para("child")] }],
                },
            ],
        }],
    })),
    "<ul><li>parent<ul><li>child</li></ul></li></ul>"
)]
#[case::item_with_two_paragraphs(
    doc(json!({
        "type": "bulletList",
        "content": [{ "type": "listItem", "content": [para("a"), para("b")] }],
    })),
    "<ul><li>a<p>b</p></li></ul>"
)]
#[case::image_with_editor_attrs(
    doc(json!({
        "type": "image",
        "attrs": { "src": "/a.jpg", "alt": null, "title": null, "width": "50", "alignment": "center" },
    })),
    r#"<img src="/a.jpg" alt="" />"#
)]
#[case::image_inside_paragraph(
    doc(json!({
        "type": "paragraph",
        "content": [{
            "type": "image",
            "attrs": { "src": "/img/lieu-1.jpeg", "alt": "About Me", "title": "About Me" },
        }],
    })),
    r#"<p><img src="/img/lieu-1.jpeg" alt="About Me" title="About Me" /></p>"#
)]
fn editor_json_is_kept_and_rendered(#[case] stored: Value, #[case] html: &str) {
    let out = convert(stored.clone(), Dialect::Markdown).unwrap();
    assert_eq!(out.document.to_json(), stored);
    assert_eq!(out.html, html);

    let mut record = ContentRecord::new("p1", "");
    record.content_json = Some(stored.clone());
    let outcome = migrate_record(&mut record, Dialect::Markdown, &ConvertOptions::default());

    assert_eq!(outcome.unwrap(), MigrationOutcome::Rendered);
    assert_eq!(record.content_json, Some(stored));
    assert_eq!(record.content_html.as_deref(), Some(html));
}

#[rstest]
#[case(Dialect::Plain)]
#[case(Dialect::Markdown)]
fn script_injection_is_escaped(#[case] dialect: Dialect) {
    let source = "<script>alert('x')</script>\n- <script>bad()</script>\n## <script>";
    let out = convert(source, dialect).unwrap();
    assert!(!out.html.contains("<script>"), "{}", out.html);
    assert!(out.html.contains("&lt;script&gt;"));
}

#[test]
fn plain_and_markdown_disagree_on_hash_headings() {
    let plain = convert("## Title", Dialect::Plain).unwrap();
    assert_eq!(plain.html, "<p>## Title</p>");

    let markdown = convert("## Title", Dialect::Markdown).unwrap();
    assert_eq!(markdown.html, "<h2>Title</h2>");
}

#[test]
fn plain_capitalized_short_lines_become_headings() {
    let out = convert("Ưu điểm\nchi phí thấp, ít thủ tục", Dialect::Plain).unwrap();
    assert_eq!(out.html, "<h3>Ưu điểm</h3>\n<p>chi phí thấp, ít thủ tục</p>");
}

#[test]
fn plain_heading_heuristic_can_be_turned_off() {
    let options = ConvertOptions {
        plain_heading_detection: false,
        ..ConvertOptions::default()
    };
    let out = convert_with("Ưu điểm\nchi phí thấp", Dialect::Plain, &options).unwrap();
    assert_eq!(out.html, "<p>Ưu điểm chi phí thấp</p>");
}

#[test]
fn non_document_json_is_rejected() {
    let err = convert(json!({ "title": "not a doc" }), Dialect::Plain).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidInputKind { .. }));
    assert!(err.to_string().contains("Invalid input kind"));
}

#[test]
fn conversions_run_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("## Bài {i}\n\n- một\n- hai");
                convert(source.as_str(), Dialect::Markdown).unwrap().html
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("<h2>Bài {i}</h2>\n<ul><li>một</li><li>hai</li></ul>")
        );
    }
}
