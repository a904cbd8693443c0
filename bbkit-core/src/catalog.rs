//! catalog.rs - The capability catalog for help and documentation surfaces.
//!
//! Produces the ordered list of user-visible tag families with a title, an
//! optional description, and a literal example. A help page renders this
//! list; the transformation engine itself never consults it.
//!
//! License: MIT OR Apache-2.0

/// One user-visible tag family, as shown on a tag-reference page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
    /// Display title, e.g. "Bold Text".
    pub title: &'static str,
    /// Optional longer description.
    pub description: Option<&'static str>,
    /// Literal example markup, shown verbatim.
    pub example: &'static str,
}

/// Returns the ordered catalog of supported tag families.
///
/// The order matches the original help page and is stable across calls.
/// Examples are not validated against the engine here; round-trip parity is
/// covered by tests instead.
pub fn usable_tags() -> Vec<TagDescriptor> {
    vec![
        TagDescriptor {
            title: "Bold Text",
            description: None,
            example: "[b]<b>Bold</b>[/b]",
        },
        TagDescriptor {
            title: "Italic Text",
            description: None,
            example: "[i]<i>Italics</i>[/i]",
        },
        TagDescriptor {
            title: "Underlined Text",
            description: None,
            example: "[u]<u>Underlined</u>[/u]",
        },
        TagDescriptor {
            title: "Struck-out Text",
            description: None,
            example: "[s]<s>Struck-out</s>[/s]",
        },
        TagDescriptor {
            title: "Colored text",
            description: None,
            example: "[color=blue]blue text[/color]",
        },
        TagDescriptor {
            title: "Code Block",
            description: Some("Unformatted code block"),
            example: "[code]Code block[/code]",
        },
        TagDescriptor {
            title: "Email link",
            description: Some("Create link to an email address"),
            example: "[email]you@yoursite.com[/email]",
        },
        TagDescriptor {
            title: "Email link",
            description: Some("Create link to an email address"),
            example: "[email=you@yoursite.com]Email[/email]",
        },
        TagDescriptor {
            title: "Unordered list",
            description: Some("Unordered list"),
            example: "[list][*]unordered item 1[*] unordered item 2[/list]",
        },
        TagDescriptor {
            title: "Image",
            description: Some("Show an image in your post"),
            example: "[img]http://www.website.com/image.jpg[/img]",
        },
        TagDescriptor {
            title: "Youtube",
            description: Some("Show Youtube video in your post"),
            example: "[youtube]youtube_video_id[/youtube]",
        },
        TagDescriptor {
            title: "Website link",
            description: Some("Link to another website or URL"),
            example: "[url]http://www.website.com/[/url]",
        },
        TagDescriptor {
            title: "Website link",
            description: Some("Link to another website or URL"),
            example: "[url=http://www.website.com/]Website[/url]",
        },
    ]
}
