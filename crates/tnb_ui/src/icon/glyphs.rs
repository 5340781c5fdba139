//! Glyph table backing [`IconKind`](super::IconKind).
//!
//! Paths come from Material Design Icons (24x24 viewBox). The `tnb` entry is
//! the brand mark. Rows are in `IconKind` declaration order; the table is
//! indexed by discriminant.

/// One row of the icon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Stable kebab-case token, matching the Material Design Icons name.
    pub token: &'static str,
    /// SVG path data in a 24x24 viewBox.
    pub path: &'static str,
    /// Rendered size in pixels when the caller passes none.
    pub default_size: u32,
}

const fn glyph(token: &'static str, path: &'static str, default_size: u32) -> Glyph {
    Glyph {
        token,
        path,
        default_size,
    }
}

const CIRCLE_OUTLINE: &str = "M12,20A8,8 0 0,1 4,12A8,8 0 0,1 12,4A8,8 0 0,1 20,12A8,8 0 0,1 12,20M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2Z";

pub(super) static GLYPHS: [Glyph; 31] = [
    glyph("alert", "M13,14H11V10H13M13,18H11V16H13M1,21H23L12,2L1,21Z", 24),
    glyph(
        "alert-circle-outline",
        "M11,15H13V17H11V15M11,7H13V13H11V7M12,2C6.47,2 2,6.5 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2M12,20A8,8 0 0,1 4,12A8,8 0 0,1 12,4A8,8 0 0,1 20,12A8,8 0 0,1 12,20Z",
        24,
    ),
    glyph("arrow-left", "M20,11V13H8L13.5,18.5L12.08,19.92L4.16,12L12.08,4.08L13.5,5.5L8,11H20Z", 24),
    glyph("arrow-right", "M4,11V13H16L10.5,18.5L11.92,19.92L19.84,12L11.92,4.08L10.5,5.5L16,11H4Z", 24),
    glyph(
        "bell",
        "M21,19V20H3V19L5,17V11C5,7.9 7.03,5.17 10,4.29C10,4.19 10,4.1 10,4A2,2 0 0,1 12,2A2,2 0 0,1 14,4C14,4.1 14,4.19 14,4.29C16.97,5.17 19,7.9 19,11V17L21,19M14,21A2,2 0 0,1 12,23A2,2 0 0,1 10,21",
        22,
    ),
    glyph(
        "checkbox-blank-circle",
        "M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2Z",
        24,
    ),
    glyph("checkbox-blank-circle-outline", CIRCLE_OUTLINE, 24),
    glyph(
        "checkbox-blank-outline",
        "M19,3H5C3.89,3 3,3.89 3,5V19A2,2 0 0,0 5,21H19A2,2 0 0,0 21,19V5C21,3.89 20.1,3 19,3M19,5V19H5V5H19Z",
        24,
    ),
    glyph(
        "checkbox-marked",
        "M10,17L5,12L6.41,10.58L10,14.17L17.59,6.58L19,8M19,3H5C3.89,3 3,3.89 3,5V19A2,2 0 0,0 5,21H19A2,2 0 0,0 21,19V5C21,3.89 20.1,3 19,3Z",
        24,
    ),
    glyph("chevron-left", "M15.41,16.58L10.83,12L15.41,7.41L14,6L8,12L14,18L15.41,16.58Z", 24),
    glyph("chevron-right", "M8.59,16.58L13.17,12L8.59,7.41L10,6L16,12L10,18L8.59,16.58Z", 24),
    glyph(
        "close",
        "M19,6.41L17.59,5L12,10.59L6.41,5L5,6.41L10.59,12L5,17.59L6.41,19L12,13.41L17.59,19L19,17.59L13.41,12L19,6.41Z",
        24,
    ),
    glyph(
        "content-copy",
        "M19,21H8V7H19M19,5H8A2,2 0 0,0 6,7V21A2,2 0 0,0 8,23H19A2,2 0 0,0 21,21V7A2,2 0 0,0 19,5M16,1H4A2,2 0 0,0 2,3V17H4V3H16V1Z",
        22,
    ),
    glyph(
        "dev-to",
        "M7.42,10.05C7.18,9.87 6.94,9.78 6.7,9.78H5.63V14.22H6.7C6.94,14.22 7.18,14.13 7.42,13.95C7.66,13.77 7.78,13.5 7.78,13.14V10.86C7.78,10.5 7.66,10.23 7.42,10.05M19,3H5A2,2 0 0,0 3,5V19A2,2 0 0,0 5,21H19A2,2 0 0,0 21,19V5A2,2 0 0,0 19,3M9.1,13.15C9.1,13.97 8.6,15.22 7,15.22H4.91V8.74H7.05C8.6,8.74 9.1,10 9.1,10.81V13.15M13.6,9.92H11.19V11.6H12.66V12.9H11.19V14.58H13.6V15.88H10.79C10.29,15.89 9.87,15.5 9.86,15V9.09C9.85,8.59 10.24,8.17 10.74,8.16H13.6V9.92M18.25,14.97C17.67,16.32 16.64,16.05 16.18,14.97L14.5,8.56H15.92L17.21,13.6L18.5,8.56H19.92L18.25,14.97Z",
        24,
    ),
    glyph(
        "dots-vertical",
        "M12,16A2,2 0 0,1 14,18A2,2 0 0,1 12,20A2,2 0 0,1 10,18A2,2 0 0,1 12,16M12,10A2,2 0 0,1 14,12A2,2 0 0,1 12,14A2,2 0 0,1 10,12A2,2 0 0,1 12,10M12,4A2,2 0 0,1 14,6A2,2 0 0,1 12,8A2,2 0 0,1 10,6A2,2 0 0,1 12,4Z",
        24,
    ),
    glyph("download", "M5,20H19V18H5M19,9H15V3H9V9H5L12,16L19,9Z", 24),
    glyph(
        "eye",
        "M12,9A3,3 0 0,0 9,12A3,3 0 0,0 12,15A3,3 0 0,0 15,12A3,3 0 0,0 12,9M12,17A5,5 0 0,1 7,12A5,5 0 0,1 12,7A5,5 0 0,1 17,12A5,5 0 0,1 12,17M12,4.5C7,4.5 2.73,7.61 1,12C2.73,16.39 7,19.5 12,19.5C17,19.5 21.27,16.39 23,12C21.27,7.61 17,4.5 12,4.5Z",
        22,
    ),
    glyph(
        "eye-off",
        "M11.83,9L15,12.16C15,12.11 15,12.05 15,12A3,3 0 0,0 12,9C11.94,9 11.89,9 11.83,9M7.53,9.8L9.08,11.35C9.03,11.56 9,11.77 9,12A3,3 0 0,0 12,15C12.22,15 12.44,14.97 12.65,14.92L14.2,16.47C13.53,16.8 12.79,17 12,17A5,5 0 0,1 7,12C7,11.21 7.2,10.47 7.53,9.8M2,4.27L4.28,6.55L4.73,7C3.08,8.3 1.78,10 1,12C2.73,16.39 7,19.5 12,19.5C13.55,19.5 15.03,19.2 16.38,18.66L16.81,19.08L19.73,22L21,20.73L3.27,3M12,7A5,5 0 0,1 17,12C17,12.64 16.87,13.26 16.64,13.82L19.57,16.75C21.07,15.5 22.27,13.86 23,12C21.27,7.61 17,4.5 12,4.5C10.6,4.5 9.26,4.75 8,5.2L10.17,7.35C10.74,7.13 11.35,7 12,7Z",
        22,
    ),
    glyph(
        "lan-connect",
        "M4,1C2.89,1 2,1.89 2,3V7C2,8.11 2.89,9 4,9H1V11H13V9H10C11.11,9 12,8.11 12,7V3C12,1.89 11.11,1 10,1H4M4,3H10V7H4V3M3,13V18L3,20H10V18H5V13H3M14,13C12.89,13 12,13.89 12,15V19C12,20.11 12.89,21 14,21H11V23H23V21H20C21.11,21 22,20.11 22,19V15C22,13.89 21.11,13 20,13H14M14,15H20V19H14V15Z",
        24,
    ),
    glyph(
        "lan-disconnect",
        "M4,1C2.89,1 2,1.89 2,3V7C2,8.11 2.89,9 4,9H1V11H13V9H10C11.11,9 12,8.11 12,7V3C12,1.89 11.11,1 10,1H4M4,3H10V7H4V3M14,13C12.89,13 12,13.89 12,15V19C12,20.11 12.89,21 14,21H11V23H23V21H20C21.11,21 22,20.11 22,19V15C22,13.89 21.11,13 20,13H14M3.88,13.46L2.46,14.88L4.59,17L2.46,19.12L3.88,20.54L6,18.41L8.12,20.54L9.54,19.12L7.41,17L9.54,14.88L8.12,13.46L6,15.59L3.88,13.46M14,15H20V19H14V15Z",
        24,
    ),
    glyph(
        "link",
        "M3.9,12C3.9,10.29 5.29,8.9 7,8.9H11V7H7A5,5 0 0,0 2,12A5,5 0 0,0 7,17H11V15.1H7C5.29,15.1 3.9,13.71 3.9,12M8,13H16V11H8V13M17,7H13V8.9H17C18.71,8.9 20.1,10.29 20.1,12C20.1,13.71 18.71,15.1 17,15.1H13V17H17A5,5 0 0,0 22,12A5,5 0 0,0 17,7Z",
        24,
    ),
    glyph("loading", "M12,4V2A10,10 0 0,0 2,12H4A8,8 0 0,1 12,4Z", 24),
    glyph(
        "pencil",
        "M20.71,7.04C21.1,6.65 21.1,6 20.71,5.63L18.37,3.29C18,2.9 17.35,2.9 16.96,3.29L15.12,5.12L18.87,8.87M3,17.25V21H6.75L17.81,9.93L14.06,6.18L3,17.25Z",
        24,
    ),
    glyph("play", "M8,5.14V19.14L19,12.14L8,5.14Z", 24),
    glyph("plus", "M19,13H13V19H11V13H5V11H11V5H13V11H19V13Z", 24),
    glyph("radiobox-blank", CIRCLE_OUTLINE, 24),
    glyph(
        "radiobox-marked",
        "M12,20A8,8 0 0,1 4,12A8,8 0 0,1 12,4A8,8 0 0,1 20,12A8,8 0 0,1 12,20M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2M12,7A5,5 0 0,0 7,12A5,5 0 0,0 12,17A5,5 0 0,0 17,12A5,5 0 0,0 12,7Z",
        24,
    ),
    glyph(
        "refresh",
        "M17.65,6.35C16.2,4.9 14.21,4 12,4A8,8 0 0,0 4,12A8,8 0 0,0 12,20C15.73,20 18.84,17.45 19.73,14H17.65C16.83,16.33 14.61,18 12,18A6,6 0 0,1 6,12A6,6 0 0,1 12,6C13.66,6 15.14,6.69 16.22,7.78L13,11H20V4L17.65,6.35Z",
        24,
    ),
    glyph(
        "sync",
        "M12,18A6,6 0 0,1 6,12C6,11 6.25,10.03 6.7,9.2L5.24,7.74C4.46,8.97 4,10.43 4,12A8,8 0 0,0 12,20V23L16,19L12,15M12,4V1L8,5L12,9V6A6,6 0 0,1 18,12C18,13 17.75,13.97 17.3,14.8L18.76,16.26C19.54,15.03 20,13.57 20,12A8,8 0 0,0 12,4Z",
        24,
    ),
    glyph(
        "thumbs-up",
        "M23,10C23,8.89 22.1,8 21,8H14.68L15.64,3.43C15.66,3.33 15.67,3.22 15.67,3.11C15.67,2.7 15.5,2.32 15.23,2.05L14.17,1L7.59,7.58C7.22,7.95 7,8.45 7,9V19A2,2 0 0,0 9,21H18C18.83,21 19.54,20.5 19.84,19.78L22.86,12.73C22.95,12.5 23,12.26 23,12V10M1,21H5V9H1V21Z",
        20,
    ),
    glyph(
        "tnb",
        "M12,2L21,7V17L12,22L3,17V7L12,2M12,4.3L5,8.2V15.8L12,19.7L19,15.8V8.2L12,4.3M8,9H16V11H13V16H11V11H8V9Z",
        24,
    ),
];
