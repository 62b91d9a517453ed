//! Delivery URL transformation.
//!
//! Rewrites a canonical storage URL into a delivery URL carrying presentation
//! directives (`w_`, `h_`, `c_`, `q_`, `f_`). The block is spliced into the
//! input text after the marker segment; nothing here touches the network.
//! URLs on a foreign host, or without the marker segment, pass through
//! unchanged.

mod options;
pub mod presets;
mod responsive;

pub use options::{Crop, Format, ParseOptionError, Quality, TransformOptions};
pub use responsive::ResponsiveImage;

use url::Url;

/// Host that serves transformable delivery URLs.
pub const DEFAULT_DELIVERY_HOST: &str = "res.cloudinary.com";

/// Path segment after which the directive block is inserted.
pub const MARKER_SEGMENT: &str = "upload";

/// Widths used for responsive sets when the caller has no preference.
pub const DEFAULT_RESPONSIVE_WIDTHS: [u32; 4] = [320, 640, 960, 1280];

/// Builds delivery URLs for one hosting provider.
#[derive(Debug, Clone)]
pub struct UrlTransformer {
    host: String,
    marker: String,
}

impl Default for UrlTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIVERY_HOST)
    }
}

impl UrlTransformer {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            marker: MARKER_SEGMENT.to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns `url` with a directive block placed right after the marker segment.
    ///
    /// The URL is only parsed to check the host; the output is the input text
    /// with the block spliced in, so every other segment, the authority and the
    /// query string come back byte for byte. Only canonical URLs should be
    /// passed: a URL that already carries a block gets a second one.
    pub fn transform(&self, url: &str, options: &TransformOptions) -> String {
        if url.is_empty() {
            return String::new();
        }
        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return url.to_string(),
        };
        let on_host = parsed
            .host_str()
            .is_some_and(|h| h.eq_ignore_ascii_case(&self.host));
        if !on_host {
            return url.to_string();
        }

        match marker_end(url, &self.marker) {
            Some(at) => format!("{}/{}{}", &url[..at], options.directive_block(), &url[at..]),
            None => url.to_string(),
        }
    }
}

/// Byte offset just past the first path segment equal to `marker`.
fn marker_end(url: &str, marker: &str) -> Option<usize> {
    let authority = url.find("://")? + 3;
    let path_start = authority + url[authority..].find(['/', '?', '#'])?;
    if !url[path_start..].starts_with('/') {
        return None;
    }
    let path_end = url[path_start..]
        .find(['?', '#'])
        .map_or(url.len(), |i| path_start + i);

    let mut offset = path_start + 1;
    for segment in url[path_start + 1..path_end].split('/') {
        if segment == marker {
            return Some(offset + segment.len());
        }
        offset += segment.len() + 1;
    }
    None
}

/// [`UrlTransformer::transform`] against the default delivery host.
pub fn transform(url: &str, options: &TransformOptions) -> String {
    UrlTransformer::default().transform(url, options)
}

/// [`UrlTransformer::derive_responsive_set`] against the default delivery host.
pub fn derive_responsive_set(url: &str, widths: &[u32]) -> Vec<ResponsiveImage> {
    UrlTransformer::default().derive_responsive_set(url, widths)
}

/// [`UrlTransformer::build_source_set`] against the default delivery host.
pub fn build_source_set(url: &str, widths: &[u32]) -> String {
    UrlTransformer::default().build_source_set(url, widths)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str =
        "https://res.cloudinary.com/demo/image/upload/v1712345678/gallery/sunset.jpg";

    #[test]
    fn defaults_insert_single_block_after_marker() {
        assert_eq!(
            transform(CANONICAL, &TransformOptions::new()),
            "https://res.cloudinary.com/demo/image/upload/c_limit,q_auto,f_auto/v1712345678/gallery/sunset.jpg"
        );
    }

    #[test]
    fn width_and_format_keep_order_and_segments() {
        let out = transform(
            CANONICAL,
            &TransformOptions::new().width(800).format(Format::Webp),
        );
        assert_eq!(
            out,
            "https://res.cloudinary.com/demo/image/upload/w_800,c_limit,q_auto,f_webp/v1712345678/gallery/sunset.jpg"
        );
        let tail = out.split("/upload/").nth(1).unwrap();
        let segments: Vec<&str> = tail.split('/').collect();
        assert_eq!(segments[1..], ["v1712345678", "gallery", "sunset.jpg"]);
    }

    #[test]
    fn foreign_host_passes_through() {
        let url = "https://other-host.example/img.png";
        assert_eq!(transform(url, &TransformOptions::new().width(800)), url);
    }

    #[test]
    fn empty_and_unparseable_pass_through() {
        assert_eq!(transform("", &TransformOptions::new()), "");
        assert_eq!(transform("not a url", &TransformOptions::new()), "not a url");
    }

    #[test]
    fn missing_marker_passes_through() {
        let url = "https://res.cloudinary.com/demo/image/fetch/sunset.jpg";
        assert_eq!(transform(url, &TransformOptions::new().width(100)), url);
    }

    #[test]
    fn query_string_is_preserved() {
        let url = "https://res.cloudinary.com/demo/image/upload/sample.jpg?_a=BAMAK+ZW0";
        assert_eq!(
            transform(url, &TransformOptions::new().height(300)),
            "https://res.cloudinary.com/demo/image/upload/h_300,c_limit,q_auto,f_auto/sample.jpg?_a=BAMAK+ZW0"
        );
    }

    #[test]
    fn reapplying_stacks_a_second_block() {
        let opts = TransformOptions::new().width(640).crop(Crop::Fill);
        let twice = transform(&transform(CANONICAL, &opts), &opts);
        assert_eq!(
            twice,
            "https://res.cloudinary.com/demo/image/upload/w_640,c_fill,q_auto,f_auto/w_640,c_fill,q_auto,f_auto/v1712345678/gallery/sunset.jpg"
        );
    }

    #[test]
    fn directive_shaped_folder_is_kept() {
        let url = "https://res.cloudinary.com/demo/image/upload/e_commerce/shoe.jpg";
        assert_eq!(
            transform(url, &TransformOptions::new().width(800)),
            "https://res.cloudinary.com/demo/image/upload/w_800,c_limit,q_auto,f_auto/e_commerce/shoe.jpg"
        );
        let url = "https://res.cloudinary.com/demo/image/upload/c_photos/w_1/a.png";
        assert_eq!(
            transform(url, &TransformOptions::new()),
            "https://res.cloudinary.com/demo/image/upload/c_limit,q_auto,f_auto/c_photos/w_1/a.png"
        );
    }

    #[test]
    fn input_text_is_not_normalized() {
        let url = "https://Res.Cloudinary.com:443/demo/image/upload/My%20Photo.jpg?tag=a|b&x=%7e#top";
        assert_eq!(
            transform(url, &TransformOptions::new().width(320)),
            "https://Res.Cloudinary.com:443/demo/image/upload/w_320,c_limit,q_auto,f_auto/My%20Photo.jpg?tag=a|b&x=%7e#top"
        );
    }

    #[test]
    fn marker_in_query_only_passes_through() {
        let url = "https://res.cloudinary.com/demo/image/fetch/a.jpg?next=/upload/b";
        assert_eq!(transform(url, &TransformOptions::new()), url);
    }

    #[test]
    fn trailing_marker_gets_block() {
        assert_eq!(
            transform("https://res.cloudinary.com/demo/image/upload", &TransformOptions::new()),
            "https://res.cloudinary.com/demo/image/upload/c_limit,q_auto,f_auto"
        );
    }

    #[test]
    fn public_id_that_is_not_a_directive_is_kept() {
        let url = "https://res.cloudinary.com/demo/image/upload/my_photo.jpg";
        assert_eq!(
            transform(url, &TransformOptions::new()),
            "https://res.cloudinary.com/demo/image/upload/c_limit,q_auto,f_auto/my_photo.jpg"
        );
    }

    #[test]
    fn custom_host() {
        let t = UrlTransformer::new("media.example.com");
        let url = "https://media.example.com/acct/image/upload/a.png";
        assert_eq!(
            t.transform(url, &TransformOptions::new().width(10)),
            "https://media.example.com/acct/image/upload/w_10,c_limit,q_auto,f_auto/a.png"
        );
        assert_eq!(t.transform(CANONICAL, &TransformOptions::new()), CANONICAL);
    }
}
