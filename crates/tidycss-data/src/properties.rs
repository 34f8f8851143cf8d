//! Property validity table.
//!
//! Each entry maps a property name to the CSS levels that define it.

pub(crate) const CSS1_UP: &[&str] = &["CSS1.0", "CSS2.0", "CSS2.1", "CSS3.0"];
pub(crate) const CSS2_UP: &[&str] = &["CSS2.0", "CSS2.1", "CSS3.0"];
pub(crate) const CSS2_ONLY: &[&str] = &["CSS2.0", "CSS3.0"];
pub(crate) const CSS3: &[&str] = &["CSS3.0"];

pub(crate) const PROPERTIES: &[(&str, &[&str])] = &[
    // CSS1 core
    ("background", CSS1_UP),
    ("background-attachment", CSS1_UP),
    ("background-color", CSS1_UP),
    ("background-image", CSS1_UP),
    ("background-position", CSS1_UP),
    ("background-repeat", CSS1_UP),
    ("border", CSS1_UP),
    ("border-bottom", CSS1_UP),
    ("border-bottom-width", CSS1_UP),
    ("border-color", CSS1_UP),
    ("border-left", CSS1_UP),
    ("border-left-width", CSS1_UP),
    ("border-right", CSS1_UP),
    ("border-right-width", CSS1_UP),
    ("border-style", CSS1_UP),
    ("border-top", CSS1_UP),
    ("border-top-width", CSS1_UP),
    ("border-width", CSS1_UP),
    ("clear", CSS1_UP),
    ("color", CSS1_UP),
    ("display", CSS1_UP),
    ("float", CSS1_UP),
    ("font", CSS1_UP),
    ("font-family", CSS1_UP),
    ("font-size", CSS1_UP),
    ("font-style", CSS1_UP),
    ("font-variant", CSS1_UP),
    ("font-weight", CSS1_UP),
    ("height", CSS1_UP),
    ("letter-spacing", CSS1_UP),
    ("line-height", CSS1_UP),
    ("list-style", CSS1_UP),
    ("list-style-image", CSS1_UP),
    ("list-style-position", CSS1_UP),
    ("list-style-type", CSS1_UP),
    ("margin", CSS1_UP),
    ("margin-bottom", CSS1_UP),
    ("margin-left", CSS1_UP),
    ("margin-right", CSS1_UP),
    ("margin-top", CSS1_UP),
    ("padding", CSS1_UP),
    ("padding-bottom", CSS1_UP),
    ("padding-left", CSS1_UP),
    ("padding-right", CSS1_UP),
    ("padding-top", CSS1_UP),
    ("text-align", CSS1_UP),
    ("text-decoration", CSS1_UP),
    ("text-indent", CSS1_UP),
    ("text-transform", CSS1_UP),
    ("vertical-align", CSS1_UP),
    ("white-space", CSS1_UP),
    ("width", CSS1_UP),
    ("word-spacing", CSS1_UP),
    // CSS2 visual
    ("border-bottom-color", CSS2_UP),
    ("border-bottom-style", CSS2_UP),
    ("border-collapse", CSS2_UP),
    ("border-left-color", CSS2_UP),
    ("border-left-style", CSS2_UP),
    ("border-right-color", CSS2_UP),
    ("border-right-style", CSS2_UP),
    ("border-spacing", CSS2_UP),
    ("border-top-color", CSS2_UP),
    ("border-top-style", CSS2_UP),
    ("bottom", CSS2_UP),
    ("caption-side", CSS2_UP),
    ("clip", CSS2_UP),
    ("content", CSS2_UP),
    ("counter-increment", CSS2_UP),
    ("counter-reset", CSS2_UP),
    ("cursor", CSS2_UP),
    ("direction", CSS2_UP),
    ("empty-cells", CSS2_UP),
    ("left", CSS2_UP),
    ("max-height", CSS2_UP),
    ("max-width", CSS2_UP),
    ("min-height", CSS2_UP),
    ("min-width", CSS2_UP),
    ("orphans", CSS2_UP),
    ("outline", CSS2_UP),
    ("outline-color", CSS2_UP),
    ("outline-style", CSS2_UP),
    ("outline-width", CSS2_UP),
    ("overflow", CSS2_UP),
    ("page-break-after", CSS2_UP),
    ("page-break-before", CSS2_UP),
    ("page-break-inside", CSS2_UP),
    ("position", CSS2_UP),
    ("quotes", CSS2_UP),
    ("right", CSS2_UP),
    ("table-layout", CSS2_UP),
    ("top", CSS2_UP),
    ("unicode-bidi", CSS2_UP),
    ("visibility", CSS2_UP),
    ("widows", CSS2_UP),
    ("z-index", CSS2_UP),
    // CSS2 aural
    ("azimuth", CSS2_UP),
    ("cue", CSS2_UP),
    ("cue-after", CSS2_UP),
    ("cue-before", CSS2_UP),
    ("elevation", CSS2_UP),
    ("pause", CSS2_UP),
    ("pause-after", CSS2_UP),
    ("pause-before", CSS2_UP),
    ("pitch", CSS2_UP),
    ("pitch-range", CSS2_UP),
    ("play-during", CSS2_UP),
    ("richness", CSS2_UP),
    ("speak", CSS2_UP),
    ("speak-header", CSS2_UP),
    ("speak-numeral", CSS2_UP),
    ("speak-punctuation", CSS2_UP),
    ("speech-rate", CSS2_UP),
    ("stress", CSS2_UP),
    ("voice-family", CSS2_UP),
    ("volume", CSS2_UP),
    // Dropped from CSS2.1
    ("font-size-adjust", CSS2_ONLY),
    ("font-stretch", CSS2_ONLY),
    ("marker-offset", &["CSS2.0"]),
    ("marks", &["CSS2.0"]),
    ("page", CSS2_ONLY),
    ("size", CSS2_ONLY),
    ("text-shadow", CSS2_ONLY),
    // CSS3
    ("animation", CSS3),
    ("background-clip", CSS3),
    ("background-origin", CSS3),
    ("background-size", CSS3),
    ("border-bottom-left-radius", CSS3),
    ("border-bottom-right-radius", CSS3),
    ("border-image", CSS3),
    ("border-radius", CSS3),
    ("border-top-left-radius", CSS3),
    ("border-top-right-radius", CSS3),
    ("box-shadow", CSS3),
    ("box-sizing", CSS3),
    ("column-count", CSS3),
    ("column-gap", CSS3),
    ("column-width", CSS3),
    ("columns", CSS3),
    ("opacity", CSS3),
    ("outline-offset", CSS3),
    ("overflow-x", CSS3),
    ("overflow-y", CSS3),
    ("resize", CSS3),
    ("text-overflow", CSS3),
    ("transform", CSS3),
    ("transform-origin", CSS3),
    ("transition", CSS3),
    ("word-wrap", CSS3),
];
