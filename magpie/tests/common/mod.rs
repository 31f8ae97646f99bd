use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Build a minimal single-font PDF with one page per entry in `pages_text`.
/// Content streams are left uncompressed.
pub fn pdf_with_pages(pages_text: &[&str]) -> Vec<u8> {
    build_pdf(pages_text, false)
}

/// Like [`pdf_with_pages`], but with an extra first page whose content
/// stream reference points at an object that was never written. Decoding
/// that page fails while the rest of the document stays readable.
pub fn pdf_with_broken_first_page(pages_text: &[&str]) -> Vec<u8> {
    build_pdf(pages_text, true)
}

fn build_pdf(pages_text: &[&str], broken_first_page: bool) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    if broken_first_page {
        let broken_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => Object::Reference((9999, 0)),
        });
        kids.push(broken_id.into());
    }
    for text in pages_text {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("Failed to encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("Failed to serialize test PDF");
    bytes
}

/// Resume-shaped body text: section headings present, every token readable.
pub fn sample_resume_text() -> &'static str {
    "Jordan Rivera Senior Software Engineer Summary Seasoned backend developer \
     with ten years of experience designing distributed systems Experience Acme \
     Corp led five engineers and shipped reliable services Education BS Computer \
     Science Skills Rust Python Kubernetes PostgreSQL"
}

/// Bytes with no printable-text runs at all.
pub fn binary_soup(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 7) as u8).collect()
}
