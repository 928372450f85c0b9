//! Landing page.

use std::fmt::Write as _;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "\u{1f3ea}",
        "Local Store Discovery",
        "Find stores in your neighborhood with our interactive map and search features.",
    ),
    (
        "\u{1f6cd}",
        "Product Variety",
        "Browse through a wide range of products from local stores and retailers.",
    ),
    (
        "\u{1f465}",
        "Community Focused",
        "Support local businesses and help your community thrive.",
    ),
];

/// Hero, feature blurbs and a pointer to the `stores` command.
///
/// `bin` is the executable name shown in the call to action.
#[must_use]
pub fn render_home(bin: &str) -> String {
    let mut out = String::from("Find Local Stores Near You\n");
    out.push_str(
        "Connect with local businesses and discover great products in your neighborhood\n\n",
    );

    out.push_str("About Connect You\n");
    for (icon, title, blurb) in FEATURES {
        let _ = writeln!(out, "  {icon} {title}\n     {blurb}");
    }

    let _ = writeln!(out, "\nFind Stores \u{2192} run `{bin} stores`");
    out
}
