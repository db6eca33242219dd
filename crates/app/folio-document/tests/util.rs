use std::path::Path;

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::{Document, Object};

/// Writes a solid RGB page of the given size.
pub fn write_page(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([200, 180, 160]))
        .save(path)
        .unwrap();
}

pub fn write_rgba_page(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 128]))
        .save(path)
        .unwrap();
}

pub fn write_gray_page(path: &Path, width: u32, height: u32) {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([90])))
        .save(path)
        .unwrap();
}

/// Pixel width of the image drawn on each page, in page order.
pub fn page_image_widths(pdf: &Path) -> Vec<i64> {
    let doc = Document::load(pdf).unwrap();
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_dictionary(page_id).unwrap();
            let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
            let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
            let image_id = xobjects.get(b"Im0").unwrap().as_reference().unwrap();
            let image = doc.get_object(image_id).unwrap().as_stream().unwrap();
            image.dict.get(b"Width").unwrap().as_i64().unwrap()
        })
        .collect()
}

/// `MediaBox` width and height of every page, in points.
pub fn media_boxes(pdf: &Path) -> Vec<(f32, f32)> {
    let doc = Document::load(pdf).unwrap();
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_dictionary(page_id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            (real(&media_box[2]), real(&media_box[3]))
        })
        .collect()
}

fn real(object: &Object) -> f32 {
    match object {
        Object::Real(value) => *value,
        Object::Integer(value) => *value as f32,
        other => panic!("not a number: {other:?}"),
    }
}
