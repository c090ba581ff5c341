//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use wiremock::Request;

pub const TEST_KEY: &str = "test-key";
pub const TEST_ENGINE: &str = "stable-diffusion-xl-1024-v1-0";
pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake-generated-image";

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img).write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// One part of a hand-built multipart body: (field name, optional file name, data).
pub type FormPart<'a> = (&'a str, Option<&'a str>, &'a [u8]);

pub fn multipart_body(boundary: &str, parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        match file_name {
            Some(f) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n", name, f).as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n");
            }
            None => {
                body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{}\"\r\n", name).as_bytes());
            }
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Headers and raw bytes of the named part from a multipart request seen by the mock server.
pub fn received_part_with_headers(request: &Request, name: &str) -> Option<(String, Vec<u8>)> {
    let content_type = request.headers.get("content-type")?.to_str().ok()?;
    let boundary = content_type.split("boundary=").nth(1)?.trim_matches('"');
    let delimiter = format!("--{}", boundary).into_bytes();
    let needle = format!("name=\"{}\"", name).into_bytes();

    let mut rest: &[u8] = &request.body;
    while let Some(pos) = find(rest, &delimiter) {
        rest = &rest[pos + delimiter.len()..];
        let end = find(rest, &delimiter).unwrap_or(rest.len());
        let section = &rest[..end];
        if let Some(header_end) = find(section, b"\r\n\r\n") {
            if find(&section[..header_end], &needle).is_some() {
                let headers = String::from_utf8_lossy(&section[..header_end]).trim().to_string();
                let data = &section[header_end + 4..];
                let data = data.strip_suffix(b"\r\n").unwrap_or(data);
                return Some((headers, data.to_vec()));
            }
        }
    }
    None
}

pub fn received_part(request: &Request, name: &str) -> Option<Vec<u8>> {
    received_part_with_headers(request, name).map(|(_, data)| data)
}

/// The `filename` parameter of the named part's Content-Disposition.
pub fn received_file_name(request: &Request, name: &str) -> Option<String> {
    let (headers, _) = received_part_with_headers(request, name)?;
    let start = headers.find("filename=\"")? + "filename=\"".len();
    let len = headers[start..].find('"')?;
    Some(headers[start..start + len].to_string())
}

pub fn received_text_part(request: &Request, name: &str) -> Option<String> {
    received_part(request, name).and_then(|b| String::from_utf8(b).ok())
}
