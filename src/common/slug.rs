/// Lowercase, ASCII alphanumerics, single dashes between words.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Slug with a short random suffix, for titles that may repeat.
pub fn unique_slug(title: &str) -> String {
    let suffix: u32 = rand::random();
    let base = slugify(title);
    if base.is_empty() {
        format!("{:06x}", suffix & 0xff_ffff)
    } else {
        format!("{}-{:06x}", base, suffix & 0xff_ffff)
    }
}
