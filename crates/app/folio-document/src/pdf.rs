use chrono::Local;
use lopdf::{
    Document, Object, Stream,
    content::{Content, Operation},
    dictionary,
};

use crate::{AssembleError, AssembleResult, DocumentOptions};

const PRODUCER: &str = "folio";
const IMAGE_NAME: &str = "Im0";

/// One page worth of baseline JPEG data.
pub(crate) struct PdfPage {
    pub width: u32,
    pub height: u32,
    pub jpeg: Vec<u8>,
}

fn render_error(err: impl std::fmt::Display) -> AssembleError {
    AssembleError::Render(err.to_string())
}

/// Lays out every page as a full-bleed image and serializes the document.
pub(crate) fn render(
    pages: Vec<PdfPage>,
    options: &DocumentOptions,
    title: Option<&str>,
) -> AssembleResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());

    for page in pages {
        let width = options.points(page.width);
        let height = options.points(page.height);

        let image = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => page.width as i64,
                "Height" => page.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
                "Filter" => "DCTDecode",
            },
            page.jpeg,
        )
        .with_compression(false);
        let image_id = doc.add_object(image);

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        Object::Real(width),
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Real(height),
                        Object::Integer(0),
                        Object::Integer(0),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().map_err(render_error)?,
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width),
                Object::Real(height),
            ],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    IMAGE_NAME => image_id,
                },
            },
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
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut info = dictionary! {
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(
            Local::now().format("D:%Y%m%d%H%M%S").to_string(),
        ),
    };
    if let Some(title) = title {
        info.set("Title", Object::string_literal(title));
    }
    let info_id = doc.add_object(info);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(render_error)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(width: u32, height: u32) -> PdfPage {
        PdfPage {
            width,
            height,
            jpeg: vec![0xFF, 0xD8, 0xFF, 0xD9],
        }
    }

    #[test]
    fn one_pdf_page_per_image() {
        let bytes = render(
            vec![page(100, 200), page(300, 400), page(50, 50)],
            &DocumentOptions::default(),
            None,
        )
        .unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn media_box_uses_resolution() {
        let bytes = render(vec![page(400, 300)], &DocumentOptions::default(), None).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let media_box = doc
            .get_dictionary(page_id)
            .unwrap()
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .clone();

        match (&media_box[2], &media_box[3]) {
            (Object::Real(w), Object::Real(h)) => {
                assert!((w - 288.0).abs() < 0.01, "width {w}");
                assert!((h - 216.0).abs() < 0.01, "height {h}");
            }
            other => panic!("unexpected media box {other:?}"),
        }
    }

    #[test]
    fn title_is_recorded_in_info() {
        let bytes = render(vec![page(10, 10)], &DocumentOptions::default(), Some("Book")).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Book");
        assert_eq!(info.get(b"Producer").unwrap().as_str().unwrap(), b"folio");
    }
}
