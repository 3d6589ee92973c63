//! Heading-anchor slug generation.
//!
//! Converts heading text into the URL-safe, percent-encoded identifiers used
//! for permalink anchors in rendered Markdown.

/// Punctuation stripped from heading text before anchor generation.
///
/// Hyphens are deliberately absent: existing hyphens in a heading are kept.
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '~', '(',
    ')',
];

/// Anchor ids carry this prefix so they never collide with element ids
/// hand-written in embedded HTML.
const ANCHOR_PREFIX: &str = "h-";

/// Convert heading text to a percent-encoded anchor id.
///
/// Steps, in order: trim, lower-case, strip punctuation, collapse each
/// whitespace run into a single `-`, prefix with `h-`, percent-encode.
///
/// Total and deterministic for any input; the empty string yields the
/// encoding of `"h-"`. Two distinct headings may still produce the same
/// anchor; disambiguation is left to the renderer.
pub fn anchor_slug(text: &str) -> String {
    let lowered = text.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len() + ANCHOR_PREFIX.len());
    slug.push_str(ANCHOR_PREFIX);

    let mut in_whitespace = false;
    for c in lowered.chars() {
        if PUNCTUATION.contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if in_whitespace {
            slug.push('-');
            in_whitespace = false;
        }
        slug.push(c);
    }
    // A whitespace run left open at the end (whitespace exposed by
    // punctuation removal, the input itself is trimmed) still collapses
    // to a hyphen.
    if in_whitespace {
        slug.push('-');
    }

    urlencoding::encode(&slug).into_owned()
}
